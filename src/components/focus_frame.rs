//! Focus frame: a slowly rotating glass square holding three orbs.

use cosmic_bio_ui::{Hue, Orb};
use dioxus::prelude::*;

pub const FRAME_CAPTION: &str = "ZE0-CB • COSMIC • HUD";

#[component]
pub fn FocusFrame() -> Element {
    rsx! {
        div { class: "focus-frame-wrap",
            div { class: "glass focus-frame",
                // Depth shine
                div { class: "focus-frame__shine" }
                div { class: "focus-frame__aura" }

                Orb {
                    size: 96,
                    hue: Hue::Indigo,
                    position: "left: 2.5rem; top: 2.5rem;".to_string(),
                }
                Orb {
                    size: 64,
                    hue: Hue::Cyan,
                    position: "right: 2.5rem; top: 5rem;".to_string(),
                    delay: 0.3,
                }
                Orb {
                    size: 112,
                    hue: Hue::Fuchsia,
                    position: "left: 50%; bottom: 2.5rem; margin-left: -56px;".to_string(),
                    delay: 0.6,
                }

                div { class: "focus-frame__caption", "{FRAME_CAPTION}" }
            }
        }
    }
}
