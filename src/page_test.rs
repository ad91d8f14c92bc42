use super::*;
use crate::effect::Target;
use crate::notify::NotificationKind;
use crate::store::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn layout() -> PageLayout {
    PageLayout {
        nav_links: vec!["#home".to_owned(), "#about".to_owned(), "#projects".to_owned()],
        skill_progress: vec![Some("90".to_owned()), None, Some("oops".to_owned())],
        lazy_images: 1,
    }
}

fn three_section_config() -> Config {
    Config { sections: vec!["home".to_owned(), "about".to_owned(), "projects".to_owned()], ..Config::default() }
}

fn page() -> Page<MemoryStore> {
    Page::new(three_section_config(), MemoryStore::new(), layout())
}

fn tops(id: &str) -> Option<f64> {
    match id {
        "home" => Some(0.0),
        "about" => Some(800.0),
        "projects" => Some(1600.0),
        _ => None,
    }
}

fn notification(effects: &[Effect]) -> Option<&Notification> {
    effects.iter().find_map(|e| match e {
        Effect::MountNotification { notification, .. } => Some(notification),
        _ => None,
    })
}

fn valid_fields() -> ContactFields {
    ContactFields {
        name: "A".to_owned(),
        email: "a@b.co".to_owned(),
        subject: "S".to_owned(),
        message: "M".to_owned(),
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn start_applies_persisted_theme() {
    let page = Page::new(Config::default(), MemoryStore::with("theme", "dark"), PageLayout::default());
    let effects = page.on_start();
    assert_eq!(page.theme(), Theme::Dark);
    assert!(effects.contains(&Effect::SetAttribute { target: Target::Body, name: "data-theme", value: "dark".to_owned() }));
    assert!(effects.iter().any(|e| matches!(e, Effect::InjectStyles { .. })));
}

#[test]
fn start_respects_configured_storage_key() {
    let config = Config { storage_key: "folio-theme".to_owned(), ..Config::default() };
    let page = Page::new(config, MemoryStore::with("folio-theme", "dark"), PageLayout::default());
    assert_eq!(page.theme(), Theme::Dark);
}

#[test]
fn dom_ready_with_title_types_intro() {
    let mut page = page();
    let effects = page.on_dom_ready(true);
    assert!(effects.contains(&Effect::MountIntro));
    assert!(effects.contains(&Effect::AddClass { target: Target::HeroContent, class: "slide-in-left" }));
    let typed = effects.iter().filter(|e| matches!(e.target(), Some(Target::IntroText))).count();
    assert_eq!(typed, "Hi, I'm Steven".chars().count());
}

#[test]
fn dom_ready_without_title_skips_intro() {
    let mut page = page();
    let effects = page.on_dom_ready(false);
    assert!(!effects.contains(&Effect::MountIntro));
    assert_eq!(effects.len(), 2);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_750_highlights_home() {
    let mut page = page();
    let effects = page.on_scroll(750.0, tops);
    assert_eq!(page.current_section(), Some("home"));
    assert!(effects.contains(&Effect::AddClass { target: Target::NavLink(0), class: "active" }));
}

#[test]
fn scroll_820_highlights_about() {
    let mut page = page();
    let effects = page.on_scroll(820.0, tops);
    assert_eq!(page.current_section(), Some("about"));
    let active: Vec<_> = effects
        .iter()
        .filter(|e| matches!(e, Effect::AddClass { class: "active", .. }))
        .collect();
    assert_eq!(active, vec![&Effect::AddClass { target: Target::NavLink(1), class: "active" }]);
}

#[test]
fn scroll_moves_hero_picture() {
    let mut page = page();
    let effects = page.on_scroll(100.0, tops);
    assert!(effects.contains(&Effect::SetStyle {
        target: Target::HeroPicture,
        property: "transform",
        value: "translateY(20px)".to_owned(),
    }));
}

#[test]
fn scroll_with_no_sections_present_falls_back_to_first() {
    let mut page = page();
    page.on_scroll(5000.0, |_| None);
    assert_eq!(page.current_section(), Some("home"));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_link_click_closes_open_menu() {
    let mut page = page();
    page.on_hamburger_click();
    assert_eq!(page.menu(), MenuState::Open);
    page.on_nav_link_click();
    assert_eq!(page.menu(), MenuState::Closed);
}

#[test]
fn anchor_click_scrolls_below_header() {
    let page = page();
    assert_eq!(page.on_anchor_click(Some(400.0), 300.0), vec![Effect::ScrollTo { top: 630.0 }]);
}

#[test]
fn anchor_click_to_missing_target_is_noop() {
    let page = page();
    assert!(page.on_anchor_click(None, 300.0).is_empty());
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_toggle_twice_is_identity() {
    let mut page = page();
    page.on_theme_toggle();
    page.on_theme_toggle();
    assert_eq!(page.theme(), Theme::Light);
}

// =============================================================
// Sections / skills
// =============================================================

#[test]
fn section_animates_once() {
    let mut page = page();
    assert_eq!(page.on_section_intersect(0, false).len(), 1);
    assert!(page.on_section_intersect(0, false).is_empty());
    assert_eq!(page.section_state(0), AnimationState::Animated);
}

#[test]
fn skills_section_only_drives_numeric_bars() {
    let mut page = page();
    let effects = page.on_section_intersect(3, true);
    let bars: Vec<_> = effects
        .iter()
        .filter_map(|e| match e.target() {
            Some(Target::SkillBar(i)) => Some(i),
            _ => None,
        })
        .collect();
    assert_eq!(bars, vec![0, 0]);
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn submit_bad_email_notifies_error_without_reset() {
    let mut page = page();
    let fields = ContactFields { email: "bad".to_owned(), ..valid_fields() };
    let effects = page.on_submit(&fields);

    let shown = notification(&effects).unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.message, "Please enter a valid email address.");
    assert!(!effects.contains(&Effect::ResetForm));
}

#[test]
fn submit_empty_field_never_reaches_success() {
    let mut page = page();
    let fields = ContactFields { name: String::new(), ..valid_fields() };
    let effects = page.on_submit(&fields);

    let shown = notification(&effects).unwrap();
    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.message, "Please fill in all fields.");
    assert!(!effects.contains(&Effect::ResetForm));
}

#[test]
fn submit_valid_notifies_success_and_resets() {
    let mut page = page();
    let effects = page.on_submit(&valid_fields());

    let shown = notification(&effects).unwrap();
    assert_eq!(shown.kind, NotificationKind::Success);
    assert_eq!(shown.message, SUCCESS_MESSAGE);
    assert!(effects.contains(&Effect::ResetForm));
}

// =============================================================
// Decorative
// =============================================================

#[test]
fn button_click_spawns_ripple() {
    let mut page = page();
    let effects = page.on_button_click(0, Point::new(30.0, 40.0), Point::new(10.0, 10.0));
    assert_eq!(effects[0], Effect::MountRipple { id: 0, button: 0, x: 20.0, y: 30.0 });
}

#[test]
fn image_intersect_loads_once() {
    let mut page = page();
    assert!(!page.on_image_intersect(0, "/a.jpg").is_empty());
    assert!(page.on_image_intersect(0, "/a.jpg").is_empty());
}

#[test]
fn card_hover_emits_single_transform() {
    let page = page();
    assert_eq!(page.on_card_hover(1, true).len(), 1);
}
