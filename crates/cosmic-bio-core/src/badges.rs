//! The fixed badge row and its active set.

use crate::error::{BioError, BioResult};

/// Glyph shown next to a badge label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeIcon {
    BadgeCheck,
    Shield,
    Stars,
    Layers,
    Zap,
}

/// A single (icon, label) badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub icon: BadgeIcon,
    pub label: &'static str,
}

/// Badges in display order.
pub const BADGES: [Badge; 5] = [
    Badge { icon: BadgeIcon::BadgeCheck, label: "Verified" },
    Badge { icon: BadgeIcon::Shield, label: "Secure" },
    Badge { icon: BadgeIcon::Stars, label: "Cosmic" },
    Badge { icon: BadgeIcon::Layers, label: "Liquid Glass" },
    Badge { icon: BadgeIcon::Zap, label: "Ultra Fast" },
];

/// Set of active badge indices, one bit per entry of [`BADGES`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BadgeSet {
    bits: u8,
}

impl BadgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`, returning the new membership.
    pub fn toggle(&mut self, index: usize) -> BioResult<bool> {
        if index >= BADGES.len() {
            return Err(BioError::BadgeOutOfRange {
                index,
                len: BADGES.len(),
            });
        }
        self.bits ^= 1 << index;
        Ok(self.contains(index))
    }

    pub fn contains(&self, index: usize) -> bool {
        index < BADGES.len() && self.bits & (1 << index) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Active indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BADGES.len()).filter(move |i| self.contains(*i))
    }
}
