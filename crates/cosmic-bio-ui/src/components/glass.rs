//! Liquid glass surfaces: the header pill and stat tiles.

use dioxus::prelude::*;

/// A hardcoded stat shown under the badges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatEntry {
    pub label: &'static str,
    pub value: &'static str,
}

/// Stats in display order
pub const STATS: [StatEntry; 3] = [
    StatEntry { label: "Signal", value: "99.97%" },
    StatEntry { label: "Flux", value: "8.2k" },
    StatEntry { label: "Orbit", value: "#42" },
];

/// Small pill with a glowing dot, used above the card
#[component]
pub fn HeaderChip(text: String) -> Element {
    rsx! {
        span { class: "glass header-chip",
            span { class: "header-chip__dot" }
            "{text}"
        }
    }
}

/// A single label/value stat tile
#[component]
pub fn Stat(label: String, value: String) -> Element {
    rsx! {
        div { class: "glass stat",
            div { class: "stat__label", "{label}" }
            div { class: "stat__value", "{value}" }
        }
    }
}

/// The fixed three-stat grid
#[component]
pub fn StatGrid() -> Element {
    rsx! {
        div { class: "stat-grid",
            for stat in STATS.iter() {
                Stat {
                    key: "{stat.label}",
                    label: stat.label.to_string(),
                    value: stat.value.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_values() {
        let pairs: Vec<_> = STATS.iter().map(|s| (s.label, s.value)).collect();
        assert_eq!(
            pairs,
            vec![("Signal", "99.97%"), ("Flux", "8.2k"), ("Orbit", "#42")]
        );
    }
}
