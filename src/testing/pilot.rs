//! Pilot: programmatic interaction with a headless page.
//!
//! The `Pilot` wraps a [`Page`] and addresses elements by their `id`
//! attribute, so tests read like a script of what a visitor does: click an
//! arrow, hover a carousel, wait two seconds, press Escape.

use crate::carousel::{Breakpoints, CarouselSettings, Role};
use crate::dom::NodeId;
use crate::event::{InputEvent, Key, KeyEvent, Modifiers};
use crate::markup::MarkupError;
use crate::page::Page;
use crate::time::Millis;

use super::fixture::studio_page;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless page driver for testing.
///
/// # Examples
///
/// ```
/// use studio_site::testing::Pilot;
///
/// let mut pilot = Pilot::studio(1280)?;
/// pilot.wait(800);
/// pilot.click("next-brows");
/// assert_eq!(pilot.index("brows"), Some(1));
/// # Ok::<(), studio_site::markup::MarkupError>(())
/// ```
pub struct Pilot {
    page: Page,
}

impl Pilot {
    /// Load `html` with default settings at the given viewport width.
    pub fn new(html: &str, width: u32) -> Result<Self, MarkupError> {
        Self::with_settings(html, CarouselSettings::default(), Breakpoints::default(), width)
    }

    /// Load `html` with explicit settings.
    pub fn with_settings(
        html: &str,
        settings: CarouselSettings,
        breakpoints: Breakpoints,
        width: u32,
    ) -> Result<Self, MarkupError> {
        Page::load(html, settings, breakpoints, width).map(|page| Self { page })
    }

    /// The stock two-carousel page from [`studio_page`].
    pub fn studio(width: u32) -> Result<Self, MarkupError> {
        Self::new(&studio_page(), width)
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Click the element with `id`. Returns `false` if there is none.
    pub fn click(&mut self, id: &str) -> bool {
        self.with_node(id, |target| InputEvent::Click { target })
    }

    /// Click a node directly, for elements without an `id`.
    pub fn click_node(&mut self, target: NodeId) {
        self.page.handle(InputEvent::Click { target });
    }

    /// Move keyboard focus to the element with `id`.
    pub fn focus(&mut self, id: &str) -> bool {
        self.with_node(id, |target| InputEvent::Focus { target })
    }

    pub fn blur(&mut self) {
        self.page.handle(InputEvent::Blur);
    }

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, key: Key) {
        self.page.handle(InputEvent::Key(KeyEvent::plain(key)));
    }

    /// Simulate a key press with the given modifiers.
    pub fn press_key_with(&mut self, key: Key, modifiers: Modifiers) {
        self.page.handle(InputEvent::Key(KeyEvent::new(key, modifiers)));
    }

    /// Touch the element with `id` at `from_x` and lift at `to_x`.
    pub fn swipe(&mut self, id: &str, from_x: f64, to_x: f64) -> bool {
        self.with_node(id, |target| InputEvent::TouchStart { target, screen_x: from_x })
            && self.with_node(id, |target| InputEvent::TouchEnd { target, screen_x: to_x })
    }

    /// Pointer enters the element with `id`.
    pub fn hover(&mut self, id: &str) -> bool {
        self.with_node(id, |target| InputEvent::PointerEnter { target })
    }

    /// Pointer leaves the element with `id`.
    pub fn unhover(&mut self, id: &str) -> bool {
        self.with_node(id, |target| InputEvent::PointerLeave { target })
    }

    /// Press a pointer on the element with `id` without completing a click.
    pub fn pointer_down(&mut self, id: &str) -> bool {
        self.with_node(id, |target| InputEvent::PointerDown { target })
    }

    /// Press a pointer on a node directly.
    pub fn pointer_down_node(&mut self, target: NodeId) {
        self.page.handle(InputEvent::PointerDown { target });
    }

    /// Report a viewport resize. Takes effect after the debounce window.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.page.handle(InputEvent::Resize { width, height });
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Let `ms` milliseconds pass.
    pub fn wait(&mut self, ms: Millis) {
        self.page.advance_by(ms);
    }

    /// Let time pass up to `t`.
    pub fn wait_until(&mut self, t: Millis) {
        self.page.advance_to(t);
    }

    pub fn now(&self) -> Millis {
        self.page.now()
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Node with the given `id`.
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.page.dom().query_by_id(id)
    }

    /// Whether the element with `id` carries `class`.
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.node(id)
            .is_some_and(|n| self.page.dom().has_class(n, class))
    }

    /// Current index of a carousel.
    pub fn index(&self, carousel: &str) -> Option<usize> {
        self.page.carousel(carousel).map(|c| c.current_index())
    }

    /// Roles as read back from the card classes, in card order.
    pub fn roles(&self, carousel: &str) -> Vec<Role> {
        let Some(carousel) = self.page.carousel(carousel) else {
            return Vec::new();
        };
        carousel
            .parts()
            .cards
            .iter()
            .filter_map(|&card| {
                let data = self.page.dom().get(card)?;
                data.classes.iter().find_map(|c| Role::from_class(c))
            })
            .collect()
    }

    /// Whether a carousel's autoplay timer is running.
    pub fn is_autoplaying(&self, carousel: &str) -> bool {
        self.page
            .carousel(carousel)
            .is_some_and(|c| c.is_autoplaying())
    }

    /// Layout of every carousel, one per line.
    pub fn layout(&self) -> String {
        self.page.describe()
    }

    fn with_node(&mut self, id: &str, event: impl FnOnce(NodeId) -> InputEvent) -> bool {
        match self.node(id) {
            Some(node) => {
                self.page.handle(event(node));
                true
            }
            None => false,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
