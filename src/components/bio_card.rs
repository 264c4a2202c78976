//! Bio Card Component
//!
//! The tilting glass card. Left column: name, tagline, UID controls,
//! badges and stats. Right column: the focus frame with pulsing orbs.

use std::rc::Rc;

use cosmic_bio_core::SurfaceRect;
use cosmic_bio_ui::StatGrid;
use dioxus::prelude::*;

use super::{BadgeRow, FocusFrame, UidControls};
use crate::context::{use_card, use_card_config};

/// Bio Card
///
/// Pointer movement over the card tilts it toward the pointer; leaving
/// flattens it. The surface rectangle is measured on every move so the
/// tilt stays correct after resizes and scrolling.
#[component]
pub fn BioCard() -> Element {
    let mut card = use_card();
    let config = use_card_config();
    let mut surface: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut hovering = use_signal(|| false);

    let transform = card.read().tilt().css_transform();

    let on_move = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        hovering.set(true);
        spawn(async move {
            let Some(el) = surface() else {
                return;
            };
            if let Ok(rect) = el.get_client_rect().await {
                // The pointer may have left while the rect was measured
                if !hovering() {
                    return;
                }
                let rect = SurfaceRect::new(
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.width,
                    rect.size.height,
                );
                card.write().pointer_move(point.x, point.y, &rect);
            }
        });
    };

    let on_leave = move |_: MouseEvent| {
        hovering.set(false);
        card.write().pointer_leave();
    };

    rsx! {
        div {
            class: "glass bio-card",
            style: "transform: {transform};",
            onmounted: move |evt: MountedEvent| surface.set(Some(evt.data())),
            onmousemove: on_move,
            onmouseleave: on_leave,

            // Tint and inner light sweep
            div { class: "bio-card__tint",
                div { class: "bio-card__sweep" }
                div { class: "bio-card__wash" }
            }

            div { class: "bio-card__grid",
                // Left: identity and controls
                div { class: "bio-card__identity",
                    h1 { class: "bio-card__name rise", style: "animation-delay: 0.05s;",
                        "{config.display_name}"
                    }
                    p { class: "bio-card__tagline rise", style: "animation-delay: 0.12s;",
                        "{config.tagline}"
                    }

                    UidControls {}
                    BadgeRow {}

                    div { class: "rise", style: "animation-delay: 0.3s;",
                        StatGrid {}
                    }
                }

                // Right: focus frame
                FocusFrame {}
            }
        }
    }
}
