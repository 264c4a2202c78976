//! Reusable UI components for the liquid glass theme
//!
//! Every surface shares the `glass` class: translucent fill, backdrop blur
//! and a hairline border with an inset highlight.

mod button;
mod glass;
mod icons;
mod orb;

pub use button::*;
pub use glass::*;
pub use icons::*;
pub use orb::*;
