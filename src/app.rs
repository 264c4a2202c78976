use cosmic_bio_core::BioCardState;
use dioxus::prelude::*;

use crate::context::{open_store, use_card_config};
use crate::pages::Cosmic;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The cosmic bio card
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Cosmic {},
}

/// Root application component.
///
/// Owns the card state (load-at-init happens here, save-on-change inside
/// the state container) and provides it to the page.
#[component]
pub fn App() -> Element {
    let config = use_card_config();

    let card: Signal<BioCardState> = use_signal(|| {
        let store = open_store(&config);
        let card = BioCardState::open(&config, store);
        tracing::info!(uid = %card.uid(), "Card state loaded");
        card
    });

    use_context_provider(|| card);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
