//! Badge row: toggleable for sequential UIDs, static for random codes.

use cosmic_bio_core::BADGES;
use cosmic_bio_ui::{BadgeChip, BadgeToggle, Icon};
use dioxus::prelude::*;

use crate::context::use_card;

#[component]
pub fn BadgeRow() -> Element {
    let mut card = use_card();
    let interactive = card.read().is_interactive();
    let active = card.read().badges();

    rsx! {
        div { class: "badge-row rise", style: "animation-delay: 0.24s;",
            for (index, badge) in BADGES.iter().enumerate() {
                if interactive {
                    BadgeToggle {
                        key: "{index}",
                        icon: Icon::from(badge.icon),
                        label: badge.label.to_string(),
                        active: active.contains(index),
                        ontoggle: move |_| {
                            if let Err(e) = card.write().toggle_badge(index) {
                                tracing::warn!("Badge toggle rejected: {}", e);
                            }
                        },
                    }
                } else {
                    BadgeChip {
                        key: "{index}",
                        icon: Icon::from(badge.icon),
                        label: badge.label.to_string(),
                    }
                }
            }
        }
    }
}
