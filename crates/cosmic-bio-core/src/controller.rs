//! Interaction state for the bio card.
//!
//! [`BioCardState`] is the single container the top-level view owns. Event
//! handlers call into it; the view re-renders from its getters.

use std::time::Duration;

use crate::badges::BadgeSet;
use crate::clipboard::{copy_best_effort, ClipboardWriter, CopyFeedback};
use crate::config::CardConfig;
use crate::error::BioResult;
use crate::identifier::{Identifier, IdentifierMode};
use crate::session::UidSession;
use crate::storage::SharedStore;
use crate::tilt::{SurfaceRect, Tilt};

/// A successful copy: clear the indicator with `generation` after `clear_after`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyReceipt {
    pub generation: u64,
    pub clear_after: Duration,
}

pub struct BioCardState {
    session: UidSession,
    tilt: Tilt,
    badges: BadgeSet,
    auto_advance: bool,
    copied: CopyFeedback,
}

impl BioCardState {
    pub fn new(session: UidSession) -> Self {
        Self {
            session,
            tilt: Tilt::RESET,
            badges: BadgeSet::new(),
            auto_advance: false,
            copied: CopyFeedback::default(),
        }
    }

    /// Open the UID session described by `config` over `store`.
    pub fn open(config: &CardConfig, store: SharedStore) -> Self {
        Self::new(UidSession::open(config.mode, store, config.storage_key.clone()))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Identifier
    // ═══════════════════════════════════════════════════════════════════════

    pub fn identifier(&self) -> &Identifier {
        self.session.identifier()
    }

    pub fn mode(&self) -> IdentifierMode {
        self.session.mode()
    }

    pub fn uid(&self) -> String {
        self.session.display()
    }

    /// Counter controls and badge toggles only exist for sequential UIDs.
    pub fn is_interactive(&self) -> bool {
        self.mode() == IdentifierMode::Sequential
    }

    pub fn increment(&mut self) -> BioResult<()> {
        self.session.increment()
    }

    pub fn decrement(&mut self) -> BioResult<()> {
        self.session.decrement()
    }

    /// One auto-advance tick. Ignored once auto-advance is off.
    pub fn advance(&mut self) -> BioResult<()> {
        if !self.auto_advance {
            return Ok(());
        }
        self.session.increment()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tilt
    // ═══════════════════════════════════════════════════════════════════════

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: &SurfaceRect) {
        self.tilt = Tilt::from_pointer(client_x, client_y, rect);
    }

    pub fn pointer_leave(&mut self) {
        self.tilt = Tilt::RESET;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Badges
    // ═══════════════════════════════════════════════════════════════════════

    pub fn badges(&self) -> BadgeSet {
        self.badges
    }

    pub fn toggle_badge(&mut self, index: usize) -> BioResult<bool> {
        self.badges.toggle(index)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Auto-advance
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    /// Flip auto-advance and return the new flag. Always off for random UIDs.
    pub fn toggle_auto_advance(&mut self) -> bool {
        self.auto_advance = self.is_interactive() && !self.auto_advance;
        self.auto_advance
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Copy
    // ═══════════════════════════════════════════════════════════════════════

    pub fn is_copied(&self) -> bool {
        self.copied.is_visible()
    }

    /// Copy the UID. Failures are swallowed and leave the indicator untouched.
    pub fn copy_uid(&mut self, clipboard: &mut dyn ClipboardWriter) -> Option<CopyReceipt> {
        if !copy_best_effort(clipboard, &self.uid()) {
            return None;
        }
        Some(CopyReceipt {
            generation: self.copied.show(),
            clear_after: self.mode().copy_feedback_duration(),
        })
    }

    pub fn clear_copied(&mut self, generation: u64) {
        self.copied.clear(generation);
    }
}
