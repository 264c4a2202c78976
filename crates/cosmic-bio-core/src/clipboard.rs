//! Best-effort clipboard copy with a transient "copied" indicator.

use crate::error::BioError;

/// Something that can receive text for the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), BioError>;
}

/// Copy `text`, swallowing any failure. Returns whether the write landed.
pub fn copy_best_effort(clipboard: &mut dyn ClipboardWriter, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Clipboard write failed: {}", e);
            false
        }
    }
}

/// The "copied" indicator.
///
/// Each [`show`](CopyFeedback::show) returns a generation; a delayed
/// [`clear`](CopyFeedback::clear) only takes effect for the latest one, so a
/// second copy keeps the indicator up for its full duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    visible: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.generation
    }

    /// Hide the indicator if `generation` is still the latest.
    pub fn clear(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

/// Clipboard that records writes, for tests.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), BioError> {
        if self.fail {
            return Err(BioError::Clipboard("clipboard unavailable".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_best_effort() {
        let mut clipboard = RecordingClipboard::default();
        assert!(copy_best_effort(&mut clipboard, "#0003"));
        assert_eq!(clipboard.writes, vec!["#0003".to_string()]);

        clipboard.fail = true;
        assert!(!copy_best_effort(&mut clipboard, "#0004"));
        assert_eq!(clipboard.writes.len(), 1);
    }

    #[test]
    fn test_feedback_clears_latest_only() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_visible());

        let first = feedback.show();
        let second = feedback.show();
        assert!(!feedback.clear(first));
        assert!(feedback.is_visible());

        assert!(feedback.clear(second));
        assert!(!feedback.is_visible());
        assert!(!feedback.clear(second));
    }
}
