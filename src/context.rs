//! Card context provider for Cosmic Bio.
//!
//! The `App` component opens the store once and provides the card state to
//! every component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut card = use_card();
//! card.write().toggle_badge(2)?;
//! ```

use std::sync::Arc;

use cosmic_bio_core::{BioCardState, CardConfig, MemoryStore, SharedStore, Storage};
use dioxus::prelude::*;

/// Open the durable store, falling back to memory if the database is unavailable.
pub fn open_store(config: &CardConfig) -> SharedStore {
    let path = config.database_path();
    match Storage::new(&path) {
        Ok(storage) => {
            tracing::info!("Opened counter store at {:?}", path);
            Arc::new(storage)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to open counter store at {:?}: {}; counter will not persist",
                path,
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}

/// Hook to access the launch configuration.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}

/// Hook to access the card state owned by `App`.
pub fn use_card() -> Signal<BioCardState> {
    use_context::<Signal<BioCardState>>()
}
