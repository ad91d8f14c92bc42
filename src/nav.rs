//! Navigation: mobile menu, smooth scrolling, and active-link highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::effect::{Effect, Target};

/// Class toggled on the hamburger, the menu, and the current nav link.
const ACTIVE: &str = "active";

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Menu state plus the hrefs of every `.nav-link`, in document order.
#[derive(Debug, Clone, Default)]
pub struct NavController {
    menu: MenuState,
    links: Vec<String>,
    active: Option<usize>,
}

impl NavController {
    #[must_use]
    pub fn new(links: Vec<String>) -> Self {
        Self { menu: MenuState::Closed, links, active: None }
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Index of the highlighted link, if any.
    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    /// Hamburger click: open a closed menu, close an open one.
    pub fn toggle_menu(&mut self) -> Vec<Effect> {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.menu_effects()
    }

    /// Nav link click: always ends closed, whatever the prior state.
    pub fn close_menu(&mut self) -> Vec<Effect> {
        self.menu = MenuState::Closed;
        self.menu_effects()
    }

    fn menu_effects(&self) -> Vec<Effect> {
        [Target::Hamburger, Target::NavMenu]
            .into_iter()
            .map(|target| match self.menu {
                MenuState::Open => Effect::AddClass { target, class: ACTIVE },
                MenuState::Closed => Effect::RemoveClass { target, class: ACTIVE },
            })
            .collect()
    }

    /// Mark the link pointing at `#section` active and clear every other link.
    ///
    /// All links are cleared first, so at most one is ever active.
    pub fn highlight(&mut self, section: &str) -> Vec<Effect> {
        let mut effects: Vec<Effect> = (0..self.links.len())
            .map(|i| Effect::RemoveClass { target: Target::NavLink(i), class: ACTIVE })
            .collect();
        self.active = self
            .links
            .iter()
            .position(|href| anchor_id(href) == Some(section));
        if let Some(i) = self.active {
            effects.push(Effect::AddClass { target: Target::NavLink(i), class: ACTIVE });
        }
        effects
    }
}

/// The element id a same-page anchor points at: `"#about"` → `"about"`.
///
/// Returns `None` for hrefs that are not same-page anchors or are a bare `#`.
#[must_use]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts an element just below the fixed header.
///
/// `element_top` is the element's viewport-relative top; `scroll_y` the
/// current window scroll offset.
#[must_use]
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

/// Smooth scroll request for an anchor click.
///
/// `element_top` is `None` when the anchor does not resolve to an element, in
/// which case nothing happens.
#[must_use]
pub fn smooth_scroll(element_top: Option<f64>, scroll_y: f64, header_offset: f64) -> Vec<Effect> {
    match element_top {
        Some(top) => vec![Effect::ScrollTo { top: scroll_target(top, scroll_y, header_offset) }],
        None => Vec::new(),
    }
}
