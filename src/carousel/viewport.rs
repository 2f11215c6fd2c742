//! Viewport width tiers.

use serde::{Deserialize, Serialize};

/// How many non-hidden roles the current viewport tier shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibleClass {
    /// Phones: only the centred card.
    One,
    /// Tablets: centre plus one neighbour each side.
    Three,
    /// Desktops: centre plus two neighbours each side.
    Four,
}

impl VisibleClass {
    /// Numeric visible count used by the role table.
    pub fn count(self) -> usize {
        match self {
            VisibleClass::One => 1,
            VisibleClass::Three => 3,
            VisibleClass::Four => 4,
        }
    }
}

/// Minimum viewport widths, in CSS pixels, for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// At or above this width four cards are visible.
    pub desktop_min_width: u32,
    /// At or above this width (and below desktop) three cards are visible.
    pub tablet_min_width: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            desktop_min_width: 1024,
            tablet_min_width: 768,
        }
    }
}

impl Breakpoints {
    /// Tier for a viewport width.
    pub fn classify(&self, width: u32) -> VisibleClass {
        if width >= self.desktop_min_width {
            VisibleClass::Four
        } else if width >= self.tablet_min_width {
            VisibleClass::Three
        } else {
            VisibleClass::One
        }
    }
}
