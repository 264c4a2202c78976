//! Page backdrop: 3D scene, darkening gradients and floating chips.

use cosmic_bio_ui::{FloatingChip, Hue};
use dioxus::prelude::*;

use super::SceneEmbed;

#[component]
pub fn Backdrop(scene_url: String, show_scene: bool) -> Element {
    rsx! {
        if show_scene {
            SceneEmbed { url: scene_url }
        }

        // Dark gradients + vignette
        div { class: "backdrop__fade" }
        div { class: "backdrop__glow" }

        FloatingChip { index: 1, top: "12%".to_string(), left: "8%".to_string(), hue: Hue::Indigo, delay: 0.0 }
        FloatingChip { index: 2, top: "70%".to_string(), left: "12%".to_string(), hue: Hue::Cyan, delay: 2.0 }
        FloatingChip { index: 3, top: "20%".to_string(), left: "78%".to_string(), hue: Hue::Fuchsia, delay: 1.0 }
    }
}
