//! Decorative animated shapes
//!
//! Glossy orbs that pulse inside the focus frame and floating "OBJ" chips
//! that drift over the backdrop. Motion is purely time-driven and carries
//! no application state.

use dioxus::prelude::*;

/// Gradient families for orbs and chips
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Hue {
    #[default]
    Indigo,
    Cyan,
    Fuchsia,
}

impl Hue {
    /// Gradient modifier class; the three stops rotate with the hue
    pub fn class(&self) -> &'static str {
        match self {
            Hue::Indigo => "hue-indigo",
            Hue::Cyan => "hue-cyan",
            Hue::Fuchsia => "hue-fuchsia",
        }
    }
}

/// Label for a floating chip, e.g. `OBJ-03`
pub fn chip_label(index: u8) -> String {
    format!("OBJ-{:02}", index)
}

/// Properties for the Orb component
#[derive(Clone, PartialEq, Props)]
pub struct OrbProps {
    /// Diameter in pixels (default: 96)
    #[props(default = 96)]
    pub size: u32,
    #[props(default)]
    pub hue: Hue,
    /// Positioning style inside the frame, e.g. `left: 2.5rem; top: 2.5rem;`
    pub position: String,
    /// Animation delay in seconds
    #[props(default = 0.0)]
    pub delay: f32,
}

/// A glossy sphere that pulses on a 6 s loop
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     div { class: "focus-frame",
///         Orb { size: 96, hue: Hue::Indigo, position: "left: 2.5rem; top: 2.5rem;".to_string() }
///     }
/// }
/// ```
#[component]
pub fn Orb(props: OrbProps) -> Element {
    let size = props.size;
    let hue = props.hue.class();
    let delay = props.delay;

    rsx! {
        div {
            class: "orb",
            style: "{props.position} animation-delay: {delay}s;",
            div {
                class: "orb__body {hue}",
                style: "width: {size}px; height: {size}px;",
                div { class: "orb__specular" }
                div { class: "orb__sheen" }
                div { class: "orb__shade" }
            }
        }
    }
}

/// Properties for the FloatingChip component
#[derive(Clone, PartialEq, Props)]
pub struct FloatingChipProps {
    /// Number shown in the `OBJ-NN` label
    pub index: u8,
    /// CSS `top`, e.g. `12%`
    pub top: String,
    /// CSS `left`, e.g. `8%`
    pub left: String,
    #[props(default)]
    pub hue: Hue,
    /// Animation delay in seconds
    #[props(default = 0.0)]
    pub delay: f32,
}

/// A small HUD tag bobbing on an 8 s loop
#[component]
pub fn FloatingChip(props: FloatingChipProps) -> Element {
    let hue = props.hue.class();
    let label = chip_label(props.index);

    rsx! {
        div {
            class: "floating-chip",
            style: "top: {props.top}; left: {props.left}; animation-delay: {props.delay}s;",
            "aria-hidden": "true",
            div { class: "glass floating-chip__tag", "{label}" }
            div { class: "floating-chip__bar {hue}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_classes() {
        assert_eq!(Hue::Indigo.class(), "hue-indigo");
        assert_eq!(Hue::Cyan.class(), "hue-cyan");
        assert_eq!(Hue::Fuchsia.class(), "hue-fuchsia");
        assert_eq!(Hue::default(), Hue::Indigo);
    }

    #[test]
    fn chip_labels_are_padded() {
        assert_eq!(chip_label(1), "OBJ-01");
        assert_eq!(chip_label(12), "OBJ-12");
    }

    #[test]
    fn default_orb_props() {
        let props = OrbProps {
            size: 96,
            hue: Hue::default(),
            position: "left: 0;".to_string(),
            delay: 0.0,
        };
        assert_eq!(props.size, 96);
        assert_eq!(props.hue, Hue::Indigo);
        assert!(props.delay.abs() < f32::EPSILON);
    }
}
