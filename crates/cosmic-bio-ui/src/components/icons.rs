//! Inline SVG icon set
//!
//! Stroke glyphs on a 24×24 grid, drawn with `currentColor` so they pick up
//! the surrounding text color.

use cosmic_bio_core::BadgeIcon;
use dioxus::prelude::*;

/// Named glyphs used by the card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Icon {
    BadgeCheck,
    Shield,
    Stars,
    Layers,
    Zap,
    Copy,
    Check,
    Plus,
    Minus,
    Play,
    Pause,
}

impl Icon {
    /// SVG path data for this glyph
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::BadgeCheck => &[
                "M3.85 8.62a4 4 0 0 1 4.78-4.77 4 4 0 0 1 6.74 0 4 4 0 0 1 4.78 4.78 4 4 0 0 1 0 6.74 4 4 0 0 1-4.77 4.78 4 4 0 0 1-6.75 0 4 4 0 0 1-4.78-4.77 4 4 0 0 1 0-6.76Z",
                "m9 12 2 2 4-4",
            ],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::Stars => &[
                "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            Icon::Layers => &[
                "M12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
                "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
                "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
            ],
            Icon::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            Icon::Copy => &[
                "M10 8h10a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H10a2 2 0 0 1-2-2V10a2 2 0 0 1 2-2z",
                "M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2",
            ],
            Icon::Check => &["M20 6 9 17l-5-5"],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::Minus => &["M5 12h14"],
            Icon::Play => &["M6 3 20 12 6 21 6 3z"],
            Icon::Pause => &["M6 4h4v16H6z", "M14 4h4v16h-4z"],
        }
    }
}

impl From<BadgeIcon> for Icon {
    fn from(icon: BadgeIcon) -> Self {
        match icon {
            BadgeIcon::BadgeCheck => Icon::BadgeCheck,
            BadgeIcon::Shield => Icon::Shield,
            BadgeIcon::Stars => Icon::Stars,
            BadgeIcon::Layers => Icon::Layers,
            BadgeIcon::Zap => Icon::Zap,
        }
    }
}

/// Properties for the IconGlyph component
#[derive(Clone, PartialEq, Props)]
pub struct IconGlyphProps {
    pub icon: Icon,
    /// Rendered width and height in pixels (default: 16)
    #[props(default = 16)]
    pub size: u32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconGlyph(props: IconGlyphProps) -> Element {
    let size = props.size;
    let class = props.class.as_deref().unwrap_or("");

    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in props.icon.paths().iter() {
                path { key: "{d}", d: "{d}" }
            }
        }
    }
}
