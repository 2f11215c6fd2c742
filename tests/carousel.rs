//! Integration tests for the carousel runtime.
//!
//! These drive the stock portfolio page through the [`Pilot`] and check the
//! visible outcome: role classes on cards, active dots, autoplay timing.

use pretty_assertions::assert_eq;

use studio_site::carousel::Role::{self, *};
use studio_site::event::Key;
use studio_site::testing::{Pilot, PortfolioFixture};

fn settled(width: u32) -> Pilot {
    let mut pilot = Pilot::studio(width).unwrap();
    pilot.wait(800);
    pilot
}

fn active_dots(pilot: &Pilot, carousel: &str, count: usize) -> Vec<usize> {
    (0..count)
        .filter(|i| pilot.has_class(&format!("dot-{carousel}-{i}"), "active"))
        .collect()
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn test_initial_layout_desktop() {
    let pilot = Pilot::studio(1280).unwrap();
    insta::assert_snapshot!(pilot.layout(), @r"
    brows [0/6] 0:center 1:right-1 2:right-2 3:hidden 4:left-2 5:left-1
    sugaring [0/4] 0:center 1:right-1 2:right-2 3:left-1
    ");
    assert_eq!(active_dots(&pilot, "brows", 6), vec![0]);
}

#[test]
fn test_initial_layout_tablet_and_phone() {
    let tablet = Pilot::studio(900).unwrap();
    assert_eq!(tablet.roles("brows"), vec![Center, Right1, Hidden, Hidden, Hidden, Left1]);

    let phone = Pilot::studio(390).unwrap();
    assert_eq!(phone.roles("brows"), vec![Center, Hidden, Hidden, Hidden, Hidden, Hidden]);
}

#[test]
fn test_every_card_has_exactly_one_role() {
    let mut pilot = settled(1280);
    for _ in 0..8 {
        pilot.click("next-brows");
        let roles = pilot.roles("brows");
        assert_eq!(roles.len(), 6);
        assert_eq!(roles.iter().filter(|r| **r == Center).count(), 1);
        pilot.wait(800);
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_prev_from_first_wraps_to_last() {
    let mut pilot = settled(1280);
    assert!(pilot.click("prev-brows"));
    assert_eq!(pilot.index("brows"), Some(5));
    assert_eq!(pilot.roles("brows"), vec![Right1, Right2, Hidden, Left2, Left1, Center]);
    assert_eq!(active_dots(&pilot, "brows", 6), vec![5]);
}

#[test]
fn test_rapid_clicks_are_dropped_not_queued() {
    let mut pilot = settled(1280);
    pilot.click("next-brows");
    pilot.click("next-brows");
    pilot.click("next-brows");
    assert_eq!(pilot.index("brows"), Some(1));

    // Nothing replays once the lock is released.
    pilot.wait(800);
    assert_eq!(pilot.index("brows"), Some(1));
}

#[test]
fn test_indicator_click_jumps() {
    let mut pilot = settled(1280);
    pilot.click("dot-brows-3");
    assert_eq!(pilot.index("brows"), Some(3));
    assert_eq!(active_dots(&pilot, "brows", 6), vec![3]);
}

#[test]
fn test_carousels_are_independent() {
    let mut pilot = settled(1280);
    pilot.click("next-brows");
    pilot.click("next-sugaring");
    assert_eq!(pilot.index("brows"), Some(1));
    assert_eq!(pilot.index("sugaring"), Some(1));
}

#[test]
fn test_keyboard_navigation_on_focused_container() {
    let mut pilot = settled(1280);
    pilot.focus("container-brows");
    pilot.press_key(Key::ArrowLeft);
    assert_eq!(pilot.index("brows"), Some(5));
    assert_eq!(pilot.index("sugaring"), Some(0));
}

#[test]
fn test_swipe_threshold() {
    let mut pilot = settled(1280);

    pilot.swipe("card-brows-0", 300.0, 250.0);
    assert_eq!(pilot.index("brows"), Some(0));

    pilot.swipe("card-brows-0", 300.0, 249.0);
    assert_eq!(pilot.index("brows"), Some(1));

    pilot.wait(800);
    pilot.swipe("card-brows-1", 100.0, 200.0);
    assert_eq!(pilot.index("brows"), Some(0));
}

// ---------------------------------------------------------------------------
// Autoplay
// ---------------------------------------------------------------------------

#[test]
fn test_autoplay_advances_every_two_seconds() {
    let mut pilot = Pilot::studio(1280).unwrap();
    pilot.wait_until(1_999);
    assert_eq!(pilot.index("brows"), Some(0));
    pilot.wait_until(6_000);
    insta::assert_snapshot!(pilot.layout(), @r"
    brows [3/6] 0:hidden 1:left-2 2:left-1 3:center 4:right-1 5:right-2
    sugaring [0/4] 0:center 1:right-1 2:right-2 3:left-1
    ");
}

#[test]
fn test_hover_pauses_and_leave_resumes() {
    let mut pilot = Pilot::studio(1280).unwrap();
    pilot.wait_until(2_000);
    assert_eq!(pilot.index("brows"), Some(1));

    pilot.hover("container-brows");
    pilot.wait_until(9_000);
    assert_eq!(pilot.index("brows"), Some(1));

    pilot.unhover("container-brows");
    pilot.wait(2_000);
    assert_eq!(pilot.index("brows"), Some(2));
}

#[test]
fn test_repeated_restart_keeps_single_timer() {
    let mut pilot = Pilot::studio(1280).unwrap();
    pilot.unhover("container-brows");
    pilot.unhover("container-brows");
    // Two lock releases plus one autoplay interval.
    assert_eq!(pilot.page().pending_timers(), 3);
    pilot.wait_until(2_000);
    assert_eq!(pilot.index("brows"), Some(1));
    pilot.wait_until(4_000);
    assert_eq!(pilot.index("brows"), Some(2));
}

// ---------------------------------------------------------------------------
// Tabs, resize, modal
// ---------------------------------------------------------------------------

#[test]
fn test_tab_switch() {
    let mut pilot = Pilot::studio(1280).unwrap();
    pilot.click("tab-sugaring");

    assert!(pilot.has_class("tab-sugaring", "active"));
    assert!(!pilot.has_class("tab-brows", "active"));
    assert!(pilot.has_class("portfolio-sugaring", "active"));
    assert!(!pilot.has_class("portfolio-brows", "active"));
    assert!(pilot.has_class("cta-sugaring", "active"));
    assert!(!pilot.has_class("cta-brows", "active"));

    assert!(!pilot.is_autoplaying("brows"));
    assert!(!pilot.is_autoplaying("sugaring"));
    pilot.wait(200);
    assert!(pilot.is_autoplaying("sugaring"));
    assert!(!pilot.is_autoplaying("brows"));
}

#[test]
fn test_resize_burst_recomputes_once() {
    let mut pilot = settled(1280);
    pilot.resize(1000, 800);
    pilot.wait(100);
    pilot.resize(700, 800);
    pilot.wait(249);
    assert_eq!(pilot.roles("brows")[1], Right1);
    assert_eq!(pilot.roles("brows")[2], Right2);
    pilot.wait(1);
    assert_eq!(pilot.roles("brows"), vec![Center, Hidden, Hidden, Hidden, Hidden, Hidden]);
    assert_eq!(pilot.index("brows"), Some(0));
}

#[test]
fn test_modal_open_and_escape() {
    let mut pilot = settled(1280);
    pilot.click("cover-sugaring-2");
    assert!(pilot.has_class("portfolioModal", "active"));
    assert!(pilot.page().is_modal_open());

    pilot.press_key(Key::Escape);
    assert!(!pilot.has_class("portfolioModal", "active"));

    // Escape with the modal closed does nothing.
    pilot.press_key(Key::Escape);
    assert!(!pilot.page().is_modal_open());
}

// ---------------------------------------------------------------------------
// Degraded pages
// ---------------------------------------------------------------------------

#[test]
fn test_carousel_without_dots_or_arrows() {
    let html = PortfolioFixture::new()
        .group("brows", 4)
        .without_dots()
        .without_arrows()
        .render();
    let mut pilot = Pilot::new(&html, 1280).unwrap();
    assert!(!pilot.click("next-brows"));
    pilot.wait_until(2_000);
    assert_eq!(pilot.index("brows"), Some(1));
    assert_eq!(pilot.roles("brows"), vec![Left1, Center, Right1, Right2]);
}

#[test]
fn test_empty_track_is_inert() {
    let html = PortfolioFixture::new().group("brows", 0).render();
    let mut pilot = Pilot::new(&html, 1280).unwrap();
    pilot.click("container-brows");
    pilot.wait_until(10_000);
    assert_eq!(pilot.index("brows"), Some(0));
    assert!(!pilot.is_autoplaying("brows"));
    assert_eq!(pilot.roles("brows"), Vec::<Role>::new());
}
