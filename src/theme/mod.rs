//! Theme for Cosmic Bio.

mod styles;

pub use styles::GLOBAL_STYLES;
