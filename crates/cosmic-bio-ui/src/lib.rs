//! Cosmic Bio UI Components
//!
//! Dioxus components for the liquid glass aesthetic used by the bio card.
//!
//! ## Design Philosophy
//!
//! Frosted translucent panels floating over a dark cosmic backdrop:
//! - **Indigo (#818cf8)**: primary glow, focus rings, header dot
//! - **Cyan (#22d3ee)**: secondary gradient stop
//! - **Fuchsia (#e879f9)**: accent gradient stop
//! - **Emerald (#34d399)**: "active" state (auto-advance running, copied)
//! - **Deep Space (#0a0a0f)**: background
//!
//! All motion is CSS keyframes defined in the app theme; components only
//! choose which animation class and delay to apply.

pub mod components;

pub use components::*;
