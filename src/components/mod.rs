//! UI Components for Cosmic Bio.
//!
//! Composite pieces of the bio card page, built from `cosmic_bio_ui`
//! primitives and wired to the card state.

mod backdrop;
mod badge_row;
mod bio_card;
mod focus_frame;
mod scene;
mod uid_controls;

pub use backdrop::Backdrop;
pub use badge_row::BadgeRow;
pub use bio_card::BioCard;
pub use focus_frame::FocusFrame;
pub use scene::{scene_head, SceneEmbed};
pub use uid_controls::UidControls;
