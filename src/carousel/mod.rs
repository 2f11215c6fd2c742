//! Portfolio carousels: role assignment, viewport tiers, the controller.
//!
//! A carousel owns a fixed, ordered set of cards and a cursor into it. Every
//! navigation reassigns each card a [`Role`] class; the stylesheet turns the
//! classes into positions. The controller never touches geometry.

pub mod controller;
pub mod role;
pub mod viewport;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::Millis;

pub use controller::{Carousel, CarouselParts};
pub use role::{assign_roles, Role};
pub use viewport::{Breakpoints, VisibleClass};

/// Track element; carries `data-carousel="<id>"`.
pub const TRACK_SELECTOR: &str = ".custom-carousel-track";
/// Card elements, in track order.
pub const CARD_SELECTOR: &str = ".portfolio-card";
/// Region around the track that owns arrows, hover and keyboard focus.
pub const CONTAINER_SELECTOR: &str = ".custom-carousel-container";
/// Left arrow inside the container.
pub const PREV_ARROW_SELECTOR: &str = ".carousel-nav-left";
/// Right arrow inside the container.
pub const NEXT_ARROW_SELECTOR: &str = ".carousel-nav-right";
/// Indicator group class; matched to a carousel by `data-carousel`.
pub const INDICATOR_GROUP_CLASS: &str = "carousel-dots";
/// Indicator dots inside the group.
pub const INDICATOR_SELECTOR: &str = ".carousel-dot";
/// Class marking the indicator of the current card.
pub const ACTIVE_CLASS: &str = "active";

/// Identifier of a carousel instance (the track's `data-carousel` value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(String);

impl CarouselId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CarouselId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Timing and gesture parameters shared by every carousel on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// How long the transition lock is held after a navigation.
    pub transition_ms: Millis,
    /// Autoplay period.
    pub autoplay_interval_ms: Millis,
    /// Horizontal travel a swipe must exceed (strictly) to navigate.
    pub swipe_threshold: f64,
    /// Quiet window before a burst of resizes triggers a relayout.
    pub resize_debounce_ms: Millis,
    /// Delay before a newly shown carousel resumes autoplay.
    pub tab_settle_ms: Millis,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            transition_ms: 800,
            autoplay_interval_ms: 2_000,
            swipe_threshold: 50.0,
            resize_debounce_ms: 250,
            tab_settle_ms: 200,
        }
    }
}
