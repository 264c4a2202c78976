#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cosmic_bio_core::{CardConfig, IdentifierMode};
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Identifier shown on the card
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Persisted `#0000` counter with step and auto-advance controls
    Sequential,
    /// One-shot `ZEO-XXXX-XXXX` code, regenerated every launch
    Random,
}

impl From<ModeArg> for IdentifierMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => IdentifierMode::Sequential,
            ModeArg::Random => IdentifierMode::Random,
        }
    }
}

/// Cosmic Bio - interactive liquid glass identity card
#[derive(Parser, Debug)]
#[command(name = "cosmic-bio-desktop")]
#[command(about = "Cosmic Bio - interactive liquid glass identity card")]
struct Args {
    /// Data directory for the counter database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Identifier mode
    #[arg(short, long, value_enum, default_value = "sequential")]
    mode: ModeArg,

    /// Name shown as the card title
    #[arg(long)]
    display_name: Option<String>,

    /// Skip the embedded 3D scene
    #[arg(long)]
    no_scene: bool,
}

impl Args {
    fn into_config(self) -> CardConfig {
        let defaults = CardConfig::default();
        CardConfig {
            data_dir: self.data_dir.unwrap_or(defaults.data_dir),
            mode: self.mode.into(),
            show_scene: !self.no_scene,
            display_name: self.display_name.unwrap_or(defaults.display_name),
            ..defaults
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Args::parse().into_config();

    tracing::info!(
        mode = config.mode.as_str(),
        "Starting '{}' with data dir: {:?}",
        config.display_name,
        config.data_dir
    );

    let mut window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(format!("Cosmic Bio - {}", config.display_name))
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 860.0))
            .with_resizable(true),
    );
    if config.show_scene {
        window = window.with_custom_head(components::scene_head());
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .launch(app::App);
}
