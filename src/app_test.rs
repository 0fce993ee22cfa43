use super::*;
use crate::fakes::{FakeView, FixedEnv, Harness};
use crate::state::contact::{FormPhase, STATUS_INVALID, STATUS_SENDING, STATUS_SENT};
use crate::state::nav::NavLayout;
use crate::state::theme::Theme;

// =============================================================
// Initialization
// =============================================================

#[test]
fn start_sets_year() {
    let h = Harness::with_env(FakeView::full(), FixedEnv { dark: false, year: 2031 });
    Page::start(&h.ctx);
    assert_eq!(h.view.year.as_ref().map(|slot| slot.text()).as_deref(), Some("2031"));
}

#[test]
fn start_applies_system_dark_without_stored_preference() {
    let h = Harness::with_env(FakeView::full(), FixedEnv { dark: true, year: 2024 });
    let page = Page::start(&h.ctx);
    assert_eq!(page.theme.current(), Theme::Dark);
    assert_eq!(h.view.icon(), "☀️");
}

#[test]
fn start_applies_stored_preference() {
    let h = Harness::with_env(FakeView::full(), FixedEnv { dark: true, year: 2024 });
    h.store.set("theme", "light").unwrap();
    let page = Page::start(&h.ctx);
    assert_eq!(page.theme.current(), Theme::Light);
}

#[test]
fn start_binds_every_feature_on_full_page() {
    let h = Harness::new(FakeView::full());
    let page = Page::start(&h.ctx);
    assert_eq!(page.features, Features { theme_toggle: true, nav_toggle: true, contact_form: true });
    assert!(h.view.bound(Trigger::ThemeToggle));
    assert!(h.view.bound(Trigger::NavToggle));
    assert!(h.view.bound(Trigger::ContactSubmit));
}

#[test]
fn start_on_bare_page_binds_nothing_but_still_themes() {
    let h = Harness::with_env(FakeView::bare(), FixedEnv { dark: true, year: 2024 });
    let page = Page::start(&h.ctx);
    assert_eq!(page.features, Features::default());
    assert_eq!(page.theme.current(), Theme::Dark);
}

#[test]
fn missing_nav_toggle_leaves_other_features_bound() {
    let mut view = FakeView::full();
    view.nav_toggle = false;
    let h = Harness::new(view);
    let page = Page::start(&h.ctx);
    assert!(!page.features.nav_toggle);
    assert!(page.features.theme_toggle);
    assert!(page.features.contact_form);
}

// =============================================================
// Event flow
// =============================================================

#[test]
fn theme_click_toggles_and_persists() {
    let h = Harness::new(FakeView::full());
    let page = Page::start(&h.ctx);

    h.view.fire(Trigger::ThemeToggle);
    assert_eq!(page.theme.current(), Theme::Dark);
    assert_eq!(h.store.get("theme").as_deref(), Some("dark"));

    h.view.fire(Trigger::ThemeToggle);
    assert_eq!(page.theme.current(), Theme::Light);
    assert_eq!(h.store.get("theme").as_deref(), Some("light"));
}

#[test]
fn nav_click_toggles_layout() {
    let h = Harness::new(FakeView::full());
    let page = Page::start(&h.ctx);
    h.view.fire(Trigger::NavToggle);
    assert_eq!(page.nav.layout(), Some(NavLayout::Expanded));
    h.view.fire(Trigger::NavToggle);
    assert_eq!(page.nav.layout(), Some(NavLayout::Collapsed));
}

#[test]
fn nav_toggle_without_container_is_harmless() {
    let mut view = FakeView::full();
    view.nav = None;
    let h = Harness::new(view);
    let page = Page::start(&h.ctx);
    h.view.fire(Trigger::NavToggle);
    assert_eq!(page.nav.layout(), None);
}

#[test]
fn invalid_submit_scenario() {
    let h = Harness::new(FakeView::full());
    Page::start(&h.ctx);
    h.view.fill("A", "bad", "short");

    h.view.fire(Trigger::ContactSubmit);

    assert_eq!(h.view.error_text("name"), "Please enter your name");
    assert_eq!(h.view.error_text("email"), "Please enter a valid email");
    assert_eq!(h.view.error_text("message"), "Message must be at least 10 characters");
    assert_eq!(h.view.status_text(), STATUS_INVALID);
    assert_eq!(h.scheduler.pending(), 0);
}

#[test]
fn valid_submit_scenario() {
    let h = Harness::new(FakeView::full());
    let page = Page::start(&h.ctx);
    h.view.fill("Jane Doe", "jane@example.com", "Hello, this is a test message.");

    h.view.fire(Trigger::ContactSubmit);
    assert_eq!(h.view.status_text(), STATUS_SENDING);
    assert_eq!(page.contact.phase(), FormPhase::Submitting);

    h.scheduler.run_all();
    assert_eq!(h.view.status_text(), "Thanks — your message was sent (mock).");
    assert_eq!(h.view.status_text(), STATUS_SENT);
    for field in ["name", "email", "message"] {
        assert_eq!(h.view.error_text(field), "");
        assert_eq!(h.view.field(field).as_deref(), Some(""));
    }
    assert_eq!(page.contact.phase(), FormPhase::Idle);
}
