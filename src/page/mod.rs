//! Page coordinator.
//!
//! [`Page`] owns the DOM and every interactive component mounted on it. The
//! host feeds it [`InputEvent`]s and moves its clock; all reactions (class
//! changes, timers) happen inside. Cross-carousel control, such as the tab
//! switcher pausing hidden carousels, goes through the coordinator's map
//! rather than any global registry.

pub mod certificates;
pub mod menu;
pub mod modal;
pub mod tabs;

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::carousel::{
    Breakpoints, Carousel, CarouselId, CarouselSettings, VisibleClass, TRACK_SELECTOR,
};
use crate::dom::{Dom, NodeId};
use crate::event::{
    BindingAction, Capability, DispatchTable, InputEvent, KeyBindingRegistry, KeyEvent, Trigger,
};
use crate::markup::{parse_document, MarkupError};
use crate::time::{Debouncer, Millis, TimerId, TimerQueue};

pub use certificates::CertificateFan;
pub use menu::MobileMenu;
pub use modal::Modal;
pub use tabs::TabSwitch;

// ---------------------------------------------------------------------------
// PageTask
// ---------------------------------------------------------------------------

/// Work scheduled on the page clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTask {
    /// End of a carousel's transition window.
    ReleaseLock(CarouselId),
    /// Autoplay tick.
    Autoplay(CarouselId),
    /// Restart autoplay once a newly shown carousel has settled.
    ResumeAutoplay(CarouselId),
    /// Recompute the visible class after a resize burst.
    Relayout,
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A loaded page with its carousels, tabs and modal wired up.
#[derive(Debug)]
pub struct Page {
    dom: Dom,
    carousels: BTreeMap<CarouselId, Carousel>,
    dispatch: DispatchTable,
    bindings: KeyBindingRegistry,
    timers: TimerQueue<PageTask>,
    resize: Debouncer,
    settings: CarouselSettings,
    breakpoints: Breakpoints,
    width: u32,
    focused: Option<NodeId>,
    modal: Option<Modal>,
    menu: Option<MobileMenu>,
    fan: Option<CertificateFan>,
    pending_resume: Option<TimerId>,
}

impl Page {
    /// Parse `source` and mount everything on it.
    pub fn load(
        source: &str,
        settings: CarouselSettings,
        breakpoints: Breakpoints,
        width: u32,
    ) -> Result<Self, MarkupError> {
        let dom = parse_document(source)?;
        Ok(Self::from_dom(dom, settings, breakpoints, width))
    }

    /// Mount carousels, register click capabilities, render every carousel
    /// at index 0 and start autoplay for the ones that are shown.
    pub fn from_dom(
        dom: Dom,
        settings: CarouselSettings,
        breakpoints: Breakpoints,
        width: u32,
    ) -> Self {
        let visible = breakpoints.classify(width);
        let mut page = Self {
            dom,
            carousels: BTreeMap::new(),
            dispatch: DispatchTable::new(),
            bindings: KeyBindingRegistry::with_defaults(),
            timers: TimerQueue::new(),
            resize: Debouncer::new(settings.resize_debounce_ms),
            settings,
            breakpoints,
            width,
            focused: None,
            modal: None,
            menu: None,
            fan: None,
            pending_resume: None,
        };

        page.mount_carousels(visible);
        page.modal = Modal::discover(&page.dom);
        if let Some(modal) = &page.modal {
            modal.register(&page.dom, &mut page.dispatch);
        }
        for tab in page.dom.query_by_class(tabs::TAB_CLASS) {
            page.dispatch.register(tab, Capability::PortfolioTab);
        }
        page.menu = MobileMenu::discover(&page.dom);
        if let Some(menu) = &page.menu {
            menu.register(&page.dom, &mut page.dispatch);
        }
        page.fan = CertificateFan::discover(&page.dom, page.fans_certificates());
        if let Some(fan) = &page.fan {
            fan.register(&page.dom, &mut page.dispatch);
        }

        for carousel in page.carousels.values_mut() {
            carousel.go_to(&mut page.dom, &mut page.timers, 0);
            if !tabs::in_inactive_group(&page.dom, carousel.parts().track) {
                carousel.start_autoplay(&mut page.timers);
            }
        }

        info!(
            carousels = page.carousels.len(),
            width,
            visible = visible.count(),
            modal = page.modal.is_some(),
            "page loaded"
        );
        page
    }

    fn mount_carousels(&mut self, visible: VisibleClass) {
        for track in self.dom.query_selector_all(TRACK_SELECTOR) {
            let Some(carousel) = Carousel::mount(&self.dom, track, self.settings.clone(), visible)
            else {
                warn!("carousel track without data-carousel skipped");
                continue;
            };
            if self.carousels.contains_key(carousel.id()) {
                warn!(carousel = %carousel.id(), "duplicate carousel id skipped");
                continue;
            }

            let id = carousel.id().clone();
            let parts = carousel.parts();
            if let Some(prev) = parts.prev_arrow {
                self.dispatch
                    .register(prev, Capability::CarouselStep { carousel: id.clone(), delta: -1 });
            }
            if let Some(next) = parts.next_arrow {
                self.dispatch
                    .register(next, Capability::CarouselStep { carousel: id.clone(), delta: 1 });
            }
            for (index, &dot) in parts.indicators.iter().enumerate() {
                self.dispatch
                    .register(dot, Capability::CarouselIndicator { carousel: id.clone(), index });
            }
            for (index, &card) in parts.cards.iter().enumerate() {
                self.dispatch
                    .register(card, Capability::CarouselCard { carousel: id.clone(), index });
            }
            debug!(carousel = %id, cards = carousel.len(), "carousel mounted");
            self.carousels.insert(id, carousel);
        }
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Deliver one host event.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { target } => self.click(target),
            InputEvent::Key(key) => self.key(key),
            InputEvent::Focus { target } => {
                self.focused = self.dom.contains(target).then_some(target);
            }
            InputEvent::Blur => self.focused = None,
            InputEvent::TouchStart { target, screen_x } => {
                if let Some(carousel) = self.carousel_on_track(target) {
                    carousel.touch_start(screen_x);
                }
            }
            InputEvent::TouchEnd { target, screen_x } => {
                if let Some(id) = self.track_owner(target) {
                    if let Some(carousel) = self.carousels.get_mut(&id) {
                        carousel.touch_end(&mut self.dom, &mut self.timers, screen_x);
                    }
                }
            }
            InputEvent::PointerEnter { target } => {
                if let Some(fan) = self.fan.filter(|f| f.grid() == target) {
                    fan.spread(&mut self.dom);
                }
                if let Some(id) = self.container_owner(target) {
                    if let Some(carousel) = self.carousels.get_mut(&id) {
                        carousel.stop_autoplay(&mut self.timers);
                    }
                }
            }
            InputEvent::PointerLeave { target } => {
                if let Some(fan) = self.fan.filter(|f| f.grid() == target) {
                    fan.stack(&mut self.dom);
                }
                if let Some(id) = self.container_owner(target) {
                    if let Some(carousel) = self.carousels.get_mut(&id) {
                        carousel.start_autoplay(&mut self.timers);
                    }
                }
            }
            InputEvent::PointerDown { target } => {
                if let Some((node, capabilities)) =
                    self.dispatch.resolve_on(&self.dom, target, Trigger::PointerDown)
                {
                    for capability in capabilities {
                        self.apply(node, capability);
                    }
                }
            }
            InputEvent::Resize { width, .. } => {
                self.width = width;
                let enabled = self.fans_certificates();
                if let Some(fan) = self.fan.as_mut() {
                    fan.reset(&mut self.dom, enabled);
                }
                self.resize.signal(&mut self.timers, PageTask::Relayout);
            }
        }
    }

    /// The certificate fan is laid out from the tablet tier up.
    fn fans_certificates(&self) -> bool {
        self.width >= self.breakpoints.tablet_min_width
    }

    fn click(&mut self, target: NodeId) {
        self.focused = DispatchTable::bubble_path(&self.dom, target)
            .into_iter()
            .find(|&n| self.dom.get(n).is_some_and(|d| d.focusable));

        let Some((node, capabilities)) = self.dispatch.resolve(&self.dom, target) else {
            return;
        };
        for capability in capabilities {
            self.apply(node, capability);
        }
    }

    fn apply(&mut self, node: NodeId, capability: Capability) {
        match capability {
            Capability::CarouselStep { carousel, delta } => {
                if let Some(c) = self.carousels.get_mut(&carousel) {
                    c.step(&mut self.dom, &mut self.timers, delta);
                }
            }
            Capability::CarouselIndicator { carousel, index }
            | Capability::CarouselCard { carousel, index } => {
                if let Some(c) = self.carousels.get_mut(&carousel) {
                    c.go_to(&mut self.dom, &mut self.timers, index as i64);
                }
            }
            Capability::OpenModal => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.open_for(&mut self.dom, node);
                }
            }
            Capability::CloseModal | Capability::DismissModalBackdrop => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.close(&mut self.dom);
                }
            }
            Capability::PortfolioTab => self.activate_tab(node),
            Capability::ToggleMobileMenu => {
                if let Some(menu) = self.menu {
                    menu.toggle(&mut self.dom);
                }
            }
            Capability::CloseMobileMenu => {
                if let Some(menu) = self.menu {
                    menu.close(&mut self.dom);
                }
            }
            Capability::ToggleCertificateFan => {
                if let Some(fan) = self.fan {
                    fan.toggle(&mut self.dom);
                }
            }
        }
    }

    fn key(&mut self, event: KeyEvent) {
        let Some(action) = self.bindings.resolve(&event) else {
            return;
        };
        match action {
            BindingAction::CarouselPrevious => self.step_focused(-1),
            BindingAction::CarouselNext => self.step_focused(1),
            BindingAction::DismissModal => {
                if let Some(modal) = self.modal.as_mut().filter(|m| m.is_open()) {
                    modal.close(&mut self.dom);
                }
            }
        }
    }

    /// Arrow keys act on the carousel whose container holds focus.
    fn step_focused(&mut self, delta: i64) {
        let Some(focused) = self.focused else {
            return;
        };
        let owner = self.carousels.values().find_map(|c| {
            let container = c.parts().container?;
            self.dom
                .is_inclusive_ancestor(container, focused)
                .then(|| c.id().clone())
        });
        if let Some(carousel) = owner.and_then(|id| self.carousels.get_mut(&id)) {
            carousel.step(&mut self.dom, &mut self.timers, delta);
        }
    }

    /// Switch portfolio tabs: show the target group, pause every hidden
    /// carousel and restart the shown one after the settle delay.
    pub fn activate_tab(&mut self, tab: NodeId) {
        let TabSwitch { group: Some(group) } = tabs::activate(&mut self.dom, tab) else {
            return;
        };

        if let Some(pending) = self.pending_resume.take() {
            self.timers.clear(pending);
        }

        let mut target = None;
        for carousel in self.carousels.values_mut() {
            let track = carousel.parts().track;
            if self.dom.is_inclusive_ancestor(group, track) {
                carousel.stop_autoplay(&mut self.timers);
                target.get_or_insert_with(|| carousel.id().clone());
            } else if tabs::in_inactive_group(&self.dom, track) {
                carousel.stop_autoplay(&mut self.timers);
            }
        }

        if let Some(id) = target {
            debug!(carousel = %id, "tab switched");
            let timer = self
                .timers
                .set_timeout(self.settings.tab_settle_ms, PageTask::ResumeAutoplay(id));
            self.pending_resume = Some(timer);
        }
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Current page time.
    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    /// Run every timer due up to and including `t`, in deadline order, then
    /// move the clock to `t`.
    pub fn advance_to(&mut self, t: Millis) {
        while let Some((timer, task)) = self.timers.pop_due(t) {
            self.run(timer, task);
        }
        self.timers.set_now(t);
    }

    /// Advance the clock by `ms`.
    pub fn advance_by(&mut self, ms: Millis) {
        self.advance_to(self.now() + ms);
    }

    fn run(&mut self, timer: TimerId, task: PageTask) {
        match task {
            PageTask::ReleaseLock(id) => {
                if let Some(carousel) = self.carousels.get_mut(&id) {
                    carousel.release_lock();
                }
            }
            PageTask::Autoplay(id) => {
                if let Some(carousel) = self.carousels.get_mut(&id) {
                    carousel.autoplay_tick(&mut self.dom, &mut self.timers);
                }
            }
            PageTask::ResumeAutoplay(id) => {
                if self.pending_resume == Some(timer) {
                    self.pending_resume = None;
                }
                if let Some(carousel) = self.carousels.get_mut(&id) {
                    carousel.start_autoplay(&mut self.timers);
                }
            }
            PageTask::Relayout => {
                self.resize.fired(timer);
                self.relayout();
            }
        }
    }

    fn relayout(&mut self) {
        let visible = self.breakpoints.classify(self.width);
        debug!(width = self.width, visible = visible.count(), "relayout");
        for carousel in self.carousels.values_mut() {
            carousel.set_visible(visible);
            let current = carousel.current_index() as i64;
            carousel.go_to(&mut self.dom, &mut self.timers, current);
        }
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    /// Look a carousel up by its `data-carousel` id.
    pub fn carousel(&self, id: &str) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    /// All carousels, ordered by id.
    pub fn carousels(&self) -> impl Iterator<Item = &Carousel> {
        self.carousels.values()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.as_ref().is_some_and(Modal::is_open)
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn certificate_fan(&self) -> Option<&CertificateFan> {
        self.fan.as_ref()
    }

    /// Node holding keyboard focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Viewport width as last reported by the host.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of scheduled timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// One [`Carousel::layout_line`] per carousel.
    pub fn describe(&self) -> String {
        self.carousels
            .values()
            .map(Carousel::layout_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn carousel_on_track(&mut self, node: NodeId) -> Option<&mut Carousel> {
        let id = self.track_owner(node)?;
        self.carousels.get_mut(&id)
    }

    fn track_owner(&self, node: NodeId) -> Option<CarouselId> {
        self.carousels
            .values()
            .find(|c| self.dom.is_inclusive_ancestor(c.parts().track, node))
            .map(|c| c.id().clone())
    }

    /// Pointer events do not bubble: only the container itself matches.
    fn container_owner(&self, node: NodeId) -> Option<CarouselId> {
        self.carousels
            .values()
            .find(|c| c.parts().container == Some(node))
            .map(|c| c.id().clone())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::event::{Key, KeyEvent};
    use crate::testing::fixture::{studio_page, PortfolioFixture};

    fn page(width: u32) -> Page {
        Page::load(
            &studio_page(),
            CarouselSettings::default(),
            Breakpoints::default(),
            width,
        )
        .unwrap()
    }

    fn node(page: &Page, id: &str) -> NodeId {
        page.dom().query_by_id(id).unwrap()
    }

    fn click(page: &mut Page, id: &str) {
        let target = node(page, id);
        page.handle(InputEvent::Click { target });
    }

    fn index(page: &Page, id: &str) -> usize {
        page.carousel(id).unwrap().current_index()
    }

    #[test]
    fn load_mounts_and_renders() {
        let page = page(1280);
        assert_eq!(page.carousels().count(), 2);
        assert!(page.modal().is_some());
        assert_eq!(
            page.describe(),
            "brows [0/6] 0:center 1:right-1 2:right-2 3:hidden 4:left-2 5:left-1\n\
             sugaring [0/4] 0:center 1:right-1 2:right-2 3:left-1"
        );
    }

    #[test]
    fn only_shown_carousels_autoplay() {
        let page = page(1280);
        assert!(page.carousel("brows").unwrap().is_autoplaying());
        assert!(!page.carousel("sugaring").unwrap().is_autoplaying());
    }

    #[test]
    fn arrow_clicks_step_and_respect_lock() {
        let mut page = page(1280);
        page.advance_to(800);
        click(&mut page, "next-brows");
        assert_eq!(index(&page, "brows"), 1);
        click(&mut page, "next-brows");
        assert_eq!(index(&page, "brows"), 1);
        page.advance_by(800);
        click(&mut page, "prev-brows");
        click(&mut page, "prev-brows");
        assert_eq!(index(&page, "brows"), 0);
    }

    #[test]
    fn dot_and_card_clicks_jump() {
        let mut page = page(1280);
        page.advance_to(800);
        click(&mut page, "dot-brows-4");
        assert_eq!(index(&page, "brows"), 4);
        page.advance_by(800);
        click(&mut page, "cover-brows-2");
        assert_eq!(index(&page, "brows"), 2);
    }

    #[test]
    fn card_click_opens_modal_escape_closes() {
        let mut page = page(1280);
        click(&mut page, "cover-brows-3");
        assert!(page.is_modal_open());
        let img = page.dom().get(page.modal().unwrap().image()).unwrap();
        assert_eq!(img.attr("src"), Some("images/brows-3.jpg"));

        page.handle(InputEvent::Key(KeyEvent::plain(Key::Escape)));
        assert!(!page.is_modal_open());
    }

    #[test]
    fn modal_backdrop_and_close_button() {
        let mut page = page(1280);
        click(&mut page, "card-brows-0");
        click(&mut page, "modalImage");
        assert!(page.is_modal_open());
        click(&mut page, "modal-close");
        assert!(!page.is_modal_open());

        click(&mut page, "card-brows-0");
        click(&mut page, "portfolioModal");
        assert!(!page.is_modal_open());
    }

    #[test]
    fn arrow_keys_need_container_focus() {
        let mut page = page(1280);
        page.advance_to(800);
        page.handle(InputEvent::Key(KeyEvent::plain(Key::ArrowRight)));
        assert_eq!(index(&page, "brows"), 0);

        let container = node(&page, "container-brows");
        page.handle(InputEvent::Focus { target: container });
        page.handle(InputEvent::Key(KeyEvent::plain(Key::ArrowRight)));
        assert_eq!(index(&page, "brows"), 1);
        page.advance_by(800);
        page.handle(InputEvent::Key(KeyEvent::plain(Key::ArrowLeft)));
        assert_eq!(index(&page, "brows"), 0);

        page.handle(InputEvent::Blur);
        page.advance_by(800);
        page.handle(InputEvent::Key(KeyEvent::plain(Key::ArrowLeft)));
        assert_eq!(index(&page, "brows"), 0);
    }

    #[test]
    fn clicking_an_arrow_focuses_it() {
        let mut page = page(1280);
        click(&mut page, "next-brows");
        assert_eq!(page.focused(), Some(node(&page, "next-brows")));
        click(&mut page, "dot-brows-1");
        assert_eq!(page.focused(), None);
    }

    #[test]
    fn hover_pauses_autoplay() {
        let mut page = page(1280);
        let container = node(&page, "container-brows");
        page.handle(InputEvent::PointerEnter { target: container });
        page.advance_to(10_000);
        assert_eq!(index(&page, "brows"), 0);

        page.handle(InputEvent::PointerLeave { target: container });
        page.advance_by(2_000);
        assert_eq!(index(&page, "brows"), 1);
    }

    #[test]
    fn pointer_events_on_children_are_ignored() {
        let mut page = page(1280);
        let card = node(&page, "card-brows-1");
        page.handle(InputEvent::PointerEnter { target: card });
        assert!(page.carousel("brows").unwrap().is_autoplaying());
    }

    #[test]
    fn swipe_on_card_navigates() {
        let mut page = page(1280);
        page.advance_to(800);
        let card = node(&page, "card-brows-0");
        page.handle(InputEvent::TouchStart { target: card, screen_x: 400.0 });
        page.handle(InputEvent::TouchEnd { target: card, screen_x: 300.0 });
        assert_eq!(index(&page, "brows"), 1);
    }

    #[test]
    fn tab_switch_coordinates_autoplay() {
        let mut page = page(1280);
        click(&mut page, "tab-sugaring");

        assert!(!page.carousel("brows").unwrap().is_autoplaying());
        assert!(!page.carousel("sugaring").unwrap().is_autoplaying());
        page.advance_by(199);
        assert!(!page.carousel("sugaring").unwrap().is_autoplaying());
        page.advance_by(1);
        assert!(page.carousel("sugaring").unwrap().is_autoplaying());

        page.advance_to(200 + 2_000);
        assert_eq!(index(&page, "sugaring"), 1);
        assert_eq!(index(&page, "brows"), 0);
    }

    #[test]
    fn rapid_tab_switching_resumes_once() {
        let mut page = page(1280);
        click(&mut page, "tab-sugaring");
        page.advance_by(100);
        click(&mut page, "tab-brows");
        page.advance_by(150);
        assert!(!page.carousel("sugaring").unwrap().is_autoplaying());
        assert!(!page.carousel("brows").unwrap().is_autoplaying());
        page.advance_by(50);
        assert!(page.carousel("brows").unwrap().is_autoplaying());
        assert!(!page.carousel("sugaring").unwrap().is_autoplaying());
    }

    #[test]
    fn resize_burst_relayouts_once() {
        let mut page = page(1280);
        page.advance_to(800);
        for (t, width) in [(1_000, 1100), (1_100, 900), (1_200, 800)] {
            page.advance_to(t);
            page.handle(InputEvent::Resize { width, height: 700 });
        }
        page.advance_to(1_449);
        assert_eq!(page.carousel("brows").unwrap().visible(), VisibleClass::Four);
        page.advance_to(1_450);
        assert_eq!(page.carousel("brows").unwrap().visible(), VisibleClass::Three);
        assert_eq!(page.width(), 800);
        assert_eq!(
            page.carousel("brows").unwrap().roles(),
            crate::carousel::assign_roles(0, 6, VisibleClass::Three)
        );
    }

    #[test]
    fn relayout_takes_the_transition_lock() {
        let mut page = page(1280);
        page.advance_to(800);
        // Same tier: the relayout still re-renders through `go_to`.
        page.handle(InputEvent::Resize { width: 1300, height: 700 });
        page.advance_to(1_050);
        assert!(page.carousel("brows").unwrap().is_animating());
        click(&mut page, "next-brows");
        assert_eq!(index(&page, "brows"), 0);

        page.advance_to(1_850);
        click(&mut page, "next-brows");
        assert_eq!(index(&page, "brows"), 1);
    }

    #[test]
    fn narrow_viewport_shows_one_card() {
        let page = page(375);
        assert_eq!(
            page.describe().lines().next(),
            Some("brows [0/6] 0:center 1:hidden 2:hidden 3:hidden 4:hidden 5:hidden")
        );
    }

    #[test]
    fn degraded_page_still_runs() {
        let html = PortfolioFixture::new()
            .group("brows", 5)
            .without_arrows()
            .without_dots()
            .without_modal()
            .render();
        let mut page =
            Page::load(&html, CarouselSettings::default(), Breakpoints::default(), 1280).unwrap();
        assert!(page.modal().is_none());
        page.advance_to(2_000);
        assert_eq!(index(&page, "brows"), 1);
        click(&mut page, "card-brows-3");
        page.handle(InputEvent::Key(KeyEvent::plain(Key::Escape)));
        assert_eq!(index(&page, "brows"), 1);
        page.advance_to(2_800);
        click(&mut page, "card-brows-3");
        assert_eq!(index(&page, "brows"), 3);
    }

    #[test]
    fn mobile_menu_toggles_and_links_close_it() {
        let mut page = page(390);
        let menu = *page.menu().unwrap();
        click(&mut page, "mobileMenuToggle");
        assert!(menu.is_open(page.dom()));
        assert!(page.dom().has_class(node(&page, "mobileMenuToggle"), "active"));

        click(&mut page, "nav-top");
        assert!(menu.is_open(page.dom()));
        click(&mut page, "nav-booking");
        assert!(!menu.is_open(page.dom()));

        click(&mut page, "mobileMenuToggle");
        click(&mut page, "mobileMenuToggle");
        assert!(!menu.is_open(page.dom()));
    }

    #[test]
    fn certificate_fan_hover_and_press() {
        let mut page = page(1280);
        let grid = node(&page, "certificate-grid");
        let spread = |page: &Page| page.dom().has_class(grid, "spread");

        page.handle(InputEvent::PointerEnter { target: grid });
        assert!(spread(&page));
        page.handle(InputEvent::PointerLeave { target: grid });
        assert!(!spread(&page));

        let item = node(&page, "certificate-1");
        page.handle(InputEvent::PointerDown { target: item });
        assert!(spread(&page));
        // A click alone does not toggle.
        page.handle(InputEvent::Click { target: item });
        assert!(spread(&page));
        page.handle(InputEvent::PointerDown { target: item });
        assert!(!spread(&page));

        // Pressing the grid between certificates does nothing.
        page.handle(InputEvent::PointerDown { target: grid });
        assert!(!spread(&page));
    }

    #[test]
    fn certificate_fan_follows_viewport() {
        let mut page = page(390);
        let grid = node(&page, "certificate-grid");
        page.handle(InputEvent::PointerEnter { target: grid });
        assert!(!page.dom().has_class(grid, "spread"));

        page.handle(InputEvent::Resize { width: 1280, height: 800 });
        assert!(page.certificate_fan().unwrap().is_enabled());
        page.handle(InputEvent::PointerEnter { target: grid });
        assert!(page.dom().has_class(grid, "spread"));

        // Any resize stacks the fan again.
        page.handle(InputEvent::Resize { width: 1300, height: 800 });
        assert!(!page.dom().has_class(grid, "spread"));
    }

    #[test]
    fn empty_page_has_nothing_to_do() {
        let mut page =
            Page::load("<p>hi</p>", CarouselSettings::default(), Breakpoints::default(), 800)
                .unwrap();
        page.advance_to(60_000);
        assert_eq!(page.pending_timers(), 0);
        assert_eq!(page.describe(), "");
    }
}
