//! UID bar: the identifier text plus step, auto-advance and copy controls.

use cosmic_bio_core::{BioResult, RepeatingTask};
use cosmic_bio_ui::{Icon, IconButton, IconGlyph};
use dioxus::prelude::*;

use crate::clipboard::SystemClipboard;
use crate::context::{use_card, use_card_config};

fn log_persist_failure(result: BioResult<()>) {
    if let Err(e) = result {
        tracing::warn!("Failed to persist UID counter: {}", e);
    }
}

/// UID display with its controls.
///
/// Step and auto-advance buttons only render for sequential UIDs; copy is
/// always available. The auto-advance timer handle lives in this
/// component's state, so unmounting drops and cancels it.
#[component]
pub fn UidControls() -> Element {
    let mut card = use_card();
    let config = use_card_config();
    let mut ticker: Signal<Option<RepeatingTask>> = use_signal(|| None);

    let uid = card.read().uid();
    let interactive = card.read().is_interactive();
    let auto = card.read().is_auto_advancing();
    let copied = card.read().is_copied();

    let period = config.auto_advance_period;
    let toggle_auto = move |_: ()| {
        let enabled = card.write().toggle_auto_advance();
        if enabled {
            // Ticks arrive on the tokio timer; apply them on the UI side
            let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<()>();
            let task = RepeatingTask::start(period, move || {
                let _ = tx.send(());
            });
            ticker.set(Some(task));

            spawn(async move {
                while rx.recv().await.is_some() {
                    log_persist_failure(card.write().advance());
                }
            });
        } else if let Some(task) = ticker.write().take() {
            task.cancel();
        }
    };

    let copy_uid = move |_: ()| {
        let receipt = card.write().copy_uid(&mut SystemClipboard);
        if let Some(receipt) = receipt {
            spawn(async move {
                tokio::time::sleep(receipt.clear_after).await;
                card.write().clear_copied(receipt.generation);
            });
        }
    };

    rsx! {
        div { class: "glass uid-bar rise", style: "animation-delay: 0.18s;",
            span { class: "uid-bar__text", "UID: {uid}" }

            div { class: "uid-bar__controls",
                if interactive {
                    IconButton {
                        onclick: move |_| log_persist_failure(card.write().decrement()),
                        aria_label: "Decrement UID".to_string(),
                        IconGlyph { icon: Icon::Minus, size: 14 }
                    }
                    IconButton {
                        onclick: move |_| log_persist_failure(card.write().increment()),
                        aria_label: "Increment UID".to_string(),
                        IconGlyph { icon: Icon::Plus, size: 14 }
                    }
                    IconButton {
                        onclick: toggle_auto,
                        aria_label: "Auto".to_string(),
                        if auto {
                            IconGlyph { icon: Icon::Pause, size: 14, class: "is-on".to_string() }
                        } else {
                            IconGlyph { icon: Icon::Play, size: 14 }
                        }
                    }
                }

                IconButton {
                    onclick: copy_uid,
                    aria_label: "Copy UID".to_string(),
                    if copied {
                        IconGlyph { icon: Icon::Check, size: 14, class: "is-on".to_string() }
                    } else {
                        IconGlyph { icon: Icon::Copy, size: 14 }
                    }
                }
            }
        }
    }
}
