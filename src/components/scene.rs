//! Embedded 3D scene.
//!
//! The scene is an opaque external asset rendered by the Spline viewer web
//! component. We only place and size it.

use dioxus::prelude::*;

/// Module script that registers the `<spline-viewer>` element.
pub const SPLINE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js";

/// `<head>` snippet loading the viewer script.
pub fn scene_head() -> String {
    format!(r#"<script type="module" src="{}"></script>"#, SPLINE_VIEWER_SCRIPT)
}

/// Full-bleed scene behind everything else.
#[component]
pub fn SceneEmbed(url: String) -> Element {
    rsx! {
        div { class: "scene", "aria-hidden": "true",
            spline-viewer {
                "url": "{url}",
                "style": "width: 100%; height: 100%;",
            }
        }
    }
}
