//! Card configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::identifier::IdentifierMode;
use crate::storage::COUNTER_KEY;
use crate::ticker::AUTO_ADVANCE_PERIOD;

/// External 3D scene rendered behind the card.
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/Ao-qpnKUMOxV2eTA/scene.splinecode";

pub const DEFAULT_DISPLAY_NAME: &str = "zeozcb";

pub const DEFAULT_TAGLINE: &str =
    "Futuristic explorer. Glossy orbs, HUD signals, and liquid glass aesthetics tuned to an iOS vibe.";

/// Database file name inside the data directory.
const DATABASE_FILE: &str = "cosmic-bio.redb";

#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    /// Directory holding the settings database
    pub data_dir: PathBuf,
    /// Sequential counter or random code
    pub mode: IdentifierMode,
    /// Storage slot for the counter
    pub storage_key: String,
    pub auto_advance_period: Duration,
    pub scene_url: String,
    /// Render the 3D scene embed
    pub show_scene: bool,
    pub display_name: String,
    pub tagline: String,
}

impl CardConfig {
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE)
    }
}

/// Platform data directory for the app, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cosmic-bio")
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            mode: IdentifierMode::Sequential,
            storage_key: COUNTER_KEY.to_string(),
            auto_advance_period: AUTO_ADVANCE_PERIOD,
            scene_url: DEFAULT_SCENE_URL.to_string(),
            show_scene: true,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}
