//! Button Components
//!
//! - Icon: compact square glass button for the UID controls
//! - Badge toggle: pill that flips between idle and active
//! - Badge chip: the same pill, display-only

use dioxus::prelude::*;

use super::icons::{Icon, IconGlyph};

/// Icon button for the compact UID controls
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Square glass button that shrinks slightly while pressed
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconButton {
///         onclick: move |_| card.write().increment(),
///         aria_label: "Increment UID".to_string(),
///         IconGlyph { icon: Icon::Plus, size: 14 }
///     }
/// }
/// ```
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "glass icon-btn".to_string()
    } else {
        format!("glass icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// CSS classes for a badge pill in the given state
pub fn badge_class(active: bool) -> &'static str {
    if active {
        "glass badge badge--active"
    } else {
        "glass badge"
    }
}

/// Toggleable badge pill
#[component]
pub fn BadgeToggle(
    icon: Icon,
    label: String,
    /// Whether the badge is currently in the active set
    active: bool,
    ontoggle: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "{badge_class(active)}",
            r#type: "button",
            "aria-pressed": if active { "true" } else { "false" },
            onclick: move |_| ontoggle.call(()),
            span { class: "badge__icon", IconGlyph { icon: icon } }
            span { class: "badge__label", "{label}" }
        }
    }
}

/// Display-only badge pill
#[component]
pub fn BadgeChip(icon: Icon, label: String) -> Element {
    rsx! {
        span { class: "{badge_class(false)}",
            span { class: "badge__icon", IconGlyph { icon: icon } }
            span { class: "badge__label", "{label}" }
        }
    }
}
