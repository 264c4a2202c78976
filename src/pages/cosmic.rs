//! Cosmic page - the bio card over its animated backdrop.

use chrono::Datelike;
use cosmic_bio_ui::HeaderChip;
use dioxus::prelude::*;

use crate::components::{Backdrop, BioCard};
use crate::context::use_card_config;

pub const HEADER_TEXT: &str = "iOS Liquid Glass • Cosmic Bio";
pub const FOOTER_TEXT: &str = "Interactive cosmic ID with iOS liquid glass styling.";

/// Cosmic page component.
#[component]
pub fn Cosmic() -> Element {
    let config = use_card_config();
    let year = chrono::Local::now().year();

    rsx! {
        div { class: "cosmic",
            Backdrop {
                scene_url: config.scene_url.clone(),
                show_scene: config.show_scene,
            }

            main { class: "cosmic__main",
                section { class: "cosmic__section enter",
                    div { class: "cosmic__header",
                        HeaderChip { text: HEADER_TEXT.to_string() }
                    }

                    BioCard {}

                    footer { class: "cosmic__footer",
                        span { "{FOOTER_TEXT}" }
                        span { "© {year} {config.display_name}" }
                    }
                }
            }
        }
    }
}
