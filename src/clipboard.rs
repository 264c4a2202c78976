//! System clipboard backed by arboard.

use cosmic_bio_core::{BioError, ClipboardWriter};

pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), BioError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| BioError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| BioError::Clipboard(e.to_string()))
    }
}
