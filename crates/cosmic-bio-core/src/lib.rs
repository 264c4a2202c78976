//! Cosmic Bio Core Library
//!
//! State and logic behind the cosmic bio card, independent of any UI toolkit.
//!
//! ## Overview
//!
//! The card shows a session identifier (UID), a row of toggleable badges and
//! a tilting glass surface. This crate owns everything that is not layout:
//!
//! - **Identifier**: a persisted `#0000` counter or a one-shot `ZEO-XXXX-XXXX` code
//! - **Storage**: the single durable slot the counter lives in (redb)
//! - **Controller**: tilt, badge toggles, auto-advance flag, copy feedback
//! - **Ticker**: the cancellable repeating task behind auto-advance
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cosmic_bio_core::{BioCardState, CardConfig, Storage};
//!
//! let config = CardConfig::default();
//! let store = Arc::new(Storage::new(config.database_path())?);
//! let mut card = BioCardState::open(&config, store);
//!
//! card.increment()?;
//! println!("UID: {}", card.uid());
//! ```

pub mod badges;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod identifier;
pub mod session;
pub mod storage;
pub mod ticker;
pub mod tilt;

// Re-exports
pub use badges::{Badge, BadgeIcon, BadgeSet, BADGES};
pub use clipboard::{copy_best_effort, ClipboardWriter, CopyFeedback, RecordingClipboard};
pub use config::CardConfig;
pub use controller::{BioCardState, CopyReceipt};
pub use error::{BioError, BioResult};
pub use identifier::{
    decrement_counter, format_counter, generate_random_code, increment_counter, Identifier,
    IdentifierMode,
};
pub use session::UidSession;
pub use storage::{
    load_persisted_counter, persist_counter, KeyValueStore, MemoryStore, SharedStore, Storage,
    COUNTER_KEY,
};
pub use ticker::{RepeatingTask, AUTO_ADVANCE_PERIOD};
pub use tilt::{SurfaceRect, Tilt};
