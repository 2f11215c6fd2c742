//! The carousel controller.
//!
//! [`Carousel`] owns the cursor, the transition lock and the autoplay timer
//! of one track. Every input source funnels into [`Carousel::go_to`], which
//! drops (never queues) requests that arrive while a transition is running.

use tracing::debug;

use super::role::{assign_roles, Role};
use super::viewport::VisibleClass;
use super::{
    CarouselId, CarouselSettings, ACTIVE_CLASS, CARD_SELECTOR, CONTAINER_SELECTOR,
    INDICATOR_GROUP_CLASS, INDICATOR_SELECTOR, NEXT_ARROW_SELECTOR, PREV_ARROW_SELECTOR,
};
use crate::dom::{Dom, NodeId};
use crate::page::PageTask;
use crate::time::{TimerId, TimerQueue};

// ---------------------------------------------------------------------------
// CarouselParts
// ---------------------------------------------------------------------------

/// The DOM nodes a carousel is wired to. Everything but the track is
/// optional; a missing part only disables the behaviour that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselParts {
    pub track: NodeId,
    pub container: Option<NodeId>,
    pub cards: Vec<NodeId>,
    pub indicators: Vec<NodeId>,
    pub prev_arrow: Option<NodeId>,
    pub next_arrow: Option<NodeId>,
}

impl CarouselParts {
    /// Collect the parts around `track` for carousel `id`.
    pub fn discover(dom: &Dom, track: NodeId, id: &CarouselId) -> Self {
        let container = dom.closest(track, CONTAINER_SELECTOR);
        let arrow = |selector: &str| container.and_then(|c| dom.query_first_within(c, selector));
        let indicators = dom
            .query_by_class(INDICATOR_GROUP_CLASS)
            .into_iter()
            .find(|&group| dom.get(group).and_then(|d| d.data("carousel")) == Some(id.as_str()))
            .map(|group| dom.query_within(group, INDICATOR_SELECTOR))
            .unwrap_or_default();

        Self {
            track,
            container,
            cards: dom.query_within(track, CARD_SELECTOR),
            indicators,
            prev_arrow: arrow(PREV_ARROW_SELECTOR),
            next_arrow: arrow(NEXT_ARROW_SELECTOR),
        }
    }
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// One carousel instance.
#[derive(Debug)]
pub struct Carousel {
    id: CarouselId,
    parts: CarouselParts,
    settings: CarouselSettings,
    visible: VisibleClass,
    current: usize,
    animating: bool,
    autoplay: Option<TimerId>,
    touch_start_x: Option<f64>,
}

impl Carousel {
    /// Create a carousel over already-discovered parts. Nothing is rendered
    /// until the first [`go_to`](Self::go_to).
    pub fn new(
        id: CarouselId,
        parts: CarouselParts,
        settings: CarouselSettings,
        visible: VisibleClass,
    ) -> Self {
        Self {
            id,
            parts,
            settings,
            visible,
            current: 0,
            animating: false,
            autoplay: None,
            touch_start_x: None,
        }
    }

    /// Build a carousel from a track element. Returns `None` when the track
    /// has no `data-carousel` identifier.
    pub fn mount(
        dom: &Dom,
        track: NodeId,
        settings: CarouselSettings,
        visible: VisibleClass,
    ) -> Option<Self> {
        let id = CarouselId::new(dom.get(track)?.data("carousel")?);
        let parts = CarouselParts::discover(dom, track, &id);
        Some(Self::new(id, parts, settings, visible))
    }

    pub fn id(&self) -> &CarouselId {
        &self.id
    }

    pub fn parts(&self) -> &CarouselParts {
        &self.parts
    }

    /// Index of the centred card.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Whether the transition lock is held.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether an autoplay timer is scheduled.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn visible(&self) -> VisibleClass {
        self.visible
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.parts.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.cards.is_empty()
    }

    /// Role of every card for the current index and visible class.
    pub fn roles(&self) -> Vec<Role> {
        assign_roles(self.current, self.len(), self.visible)
    }

    /// Navigate to `requested`, which may be negative or past the end; it is
    /// reduced modulo the card count.
    ///
    /// Returns `false` when the request was dropped: no cards, or a
    /// transition is still in progress.
    pub fn go_to(&mut self, dom: &mut Dom, timers: &mut TimerQueue<PageTask>, requested: i64) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.animating {
            debug!(carousel = %self.id, requested, "navigation dropped during transition");
            return false;
        }

        self.animating = true;
        self.current = requested.rem_euclid(self.len() as i64) as usize;
        self.render(dom);
        timers.set_timeout(
            self.settings.transition_ms,
            PageTask::ReleaseLock(self.id.clone()),
        );
        debug!(carousel = %self.id, index = self.current, "navigated");
        true
    }

    /// Navigate relative to the current card.
    pub fn step(&mut self, dom: &mut Dom, timers: &mut TimerQueue<PageTask>, delta: i64) -> bool {
        let target = self.current as i64 + delta;
        self.go_to(dom, timers, target)
    }

    /// End of the transition window.
    pub fn release_lock(&mut self) {
        self.animating = false;
    }

    /// Change the viewport tier used by the next render.
    pub fn set_visible(&mut self, visible: VisibleClass) {
        self.visible = visible;
    }

    /// Write role classes onto the cards and sync the indicators.
    pub fn render(&self, dom: &mut Dom) {
        for (&card, role) in self.parts.cards.iter().zip(self.roles()) {
            if let Some(data) = dom.get_mut(card) {
                for stale in Role::ALL {
                    data.remove_class(stale.class_name());
                }
                data.add_class(role.class_name());
            }
        }
        for (i, &dot) in self.parts.indicators.iter().enumerate() {
            if let Some(data) = dom.get_mut(dot) {
                data.toggle_class(ACTIVE_CLASS, i == self.current);
            }
        }
    }

    /// (Re)start autoplay. Any running timer is cancelled first, so there is
    /// never more than one per carousel.
    pub fn start_autoplay(&mut self, timers: &mut TimerQueue<PageTask>) {
        self.stop_autoplay(timers);
        if self.is_empty() {
            return;
        }
        let id = timers.set_interval(
            self.settings.autoplay_interval_ms,
            PageTask::Autoplay(self.id.clone()),
        );
        self.autoplay = Some(id);
    }

    /// Cancel autoplay. Idempotent.
    pub fn stop_autoplay(&mut self, timers: &mut TimerQueue<PageTask>) {
        if let Some(id) = self.autoplay.take() {
            timers.clear(id);
        }
    }

    /// One autoplay tick: advance unless a transition is running.
    pub fn autoplay_tick(&mut self, dom: &mut Dom, timers: &mut TimerQueue<PageTask>) -> bool {
        if self.animating {
            return false;
        }
        self.step(dom, timers, 1)
    }

    /// Record where a touch began.
    pub fn touch_start(&mut self, screen_x: f64) {
        self.touch_start_x = Some(screen_x);
    }

    /// Finish a swipe. Travel strictly beyond the threshold navigates: a
    /// leftward swipe shows the next card, a rightward one the previous.
    pub fn touch_end(
        &mut self,
        dom: &mut Dom,
        timers: &mut TimerQueue<PageTask>,
        screen_x: f64,
    ) -> bool {
        let Some(start) = self.touch_start_x.take() else {
            return false;
        };
        let diff = start - screen_x;
        if diff.abs() <= self.settings.swipe_threshold {
            return false;
        }
        self.step(dom, timers, if diff > 0.0 { 1 } else { -1 })
    }

    /// One-line summary of the layout, e.g. `brows [1/6] 0:left-1 1:center ...`.
    pub fn layout_line(&self) -> String {
        let roles: Vec<String> = self
            .roles()
            .iter()
            .enumerate()
            .map(|(i, role)| format!("{i}:{role}"))
            .collect();
        format!(
            "{} [{}/{}] {}",
            self.id,
            self.current,
            self.len(),
            roles.join(" ")
        )
    }
}

// ===========================================================================
// Tests
// ===========================================================================
