//! Page components for Cosmic Bio.

mod cosmic;

pub use cosmic::Cosmic;
