//! The page controller: every browser event the enhancement layer reacts to.
//!
//! `Page` is constructed once at startup with the configuration, an injected
//! preference store, and a [`PageLayout`] describing what the markup offers.
//! Each `on_*` method is a pure step `(event, state) → (state', effects)`;
//! the caller executes the returned effects. Nothing here touches the DOM,
//! so the whole controller is exercised natively in tests.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::Config;
use crate::effect::Effect;
use crate::form::{self, ContactFields, SUCCESS_MESSAGE};
use crate::fx::{self, LazyImages, Point, Ripples, Typewriter};
use crate::nav::{self, MenuState, NavController};
use crate::notify::{Notification, Notifier};
use crate::store::PreferenceStore;
use crate::theme::{Theme, ThemeController};
use crate::viewport::{self, AnimationState, SectionTop, ViewportController};

/// What the markup provides, measured once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    /// `href` of every `.nav-link`, in document order.
    pub nav_links: Vec<String>,
    /// Raw `data-progress` of every `.skill-progress`, in document order.
    pub skill_progress: Vec<Option<String>>,
    /// Number of `img[data-src]` elements.
    pub lazy_images: usize,
}

pub struct Page<S> {
    config: Config,
    theme: ThemeController<S>,
    nav: NavController,
    viewport: ViewportController,
    notifier: Notifier,
    typewriter: Typewriter,
    ripples: Ripples,
    lazy: LazyImages,
    current_section: Option<String>,
}

impl<S: PreferenceStore> Page<S> {
    pub fn new(config: Config, store: S, layout: PageLayout) -> Self {
        let skill_bars = layout
            .skill_progress
            .iter()
            .map(|raw| raw.as_deref().and_then(viewport::parse_progress))
            .collect();

        Self {
            theme: ThemeController::load(store, &config.storage_key),
            nav: NavController::new(layout.nav_links),
            viewport: ViewportController::new(skill_bars, config.skill_bar_delay_ms),
            notifier: Notifier::new(config.notification_lifetime_ms),
            typewriter: Typewriter::new(
                config.intro_text.clone(),
                config.intro_start_delay_ms,
                config.intro_char_interval_ms,
            ),
            ripples: Ripples::new(config.ripple_lifetime_ms),
            lazy: LazyImages::new(layout.lazy_images),
            current_section: None,
            config,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.nav.menu()
    }

    /// Section computed on the most recent scroll.
    #[must_use]
    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    #[must_use]
    pub fn section_state(&self, index: usize) -> AnimationState {
        self.viewport.state(index)
    }

    // --- Lifecycle ---

    /// Script start: apply the persisted theme and install the ripple stylesheet.
    #[must_use]
    pub fn on_start(&self) -> Vec<Effect> {
        let mut effects = self.theme.apply();
        effects.push(Effect::InjectStyles { css: fx::RIPPLE_CSS });
        effects
    }

    /// `DOMContentLoaded`: hero entrance and, if the title exists, the typed intro.
    pub fn on_dom_ready(&mut self, has_hero_title: bool) -> Vec<Effect> {
        let mut effects = fx::hero_slide_in();
        if has_hero_title {
            effects.extend(self.typewriter.start());
        }
        effects
    }

    // --- Theme / navigation ---

    pub fn on_theme_toggle(&mut self) -> Vec<Effect> {
        self.theme.toggle()
    }

    pub fn on_hamburger_click(&mut self) -> Vec<Effect> {
        self.nav.toggle_menu()
    }

    pub fn on_nav_link_click(&mut self) -> Vec<Effect> {
        self.nav.close_menu()
    }

    /// Same-page anchor click. `element_top` is the resolved target's
    /// viewport-relative top, or `None` if the anchor points nowhere.
    #[must_use]
    pub fn on_anchor_click(&self, element_top: Option<f64>, scroll_y: f64) -> Vec<Effect> {
        nav::smooth_scroll(element_top, scroll_y, self.config.header_offset_px)
    }

    /// Window scroll: highlight the current section's link and move the hero picture.
    ///
    /// `section_top` measures a section's document offset by id, returning
    /// `None` if the page has no such section.
    pub fn on_scroll(&mut self, scroll_y: f64, section_top: impl Fn(&str) -> Option<f64>) -> Vec<Effect> {
        let tops: Vec<SectionTop<'_>> = self
            .config
            .sections
            .iter()
            .map(|id| SectionTop { id, top: section_top(id) })
            .collect();
        let current = viewport::current_section(scroll_y, &tops, self.config.section_lookahead_px).map(str::to_owned);

        let mut effects = match current.as_deref() {
            Some(id) => self.nav.highlight(id),
            None => Vec::new(),
        };
        effects.push(fx::parallax(scroll_y, self.config.parallax_factor));
        self.current_section = current;
        effects
    }

    // --- Observers ---

    pub fn on_section_intersect(&mut self, index: usize, is_skills: bool) -> Vec<Effect> {
        self.viewport.on_section_entered(index, is_skills)
    }

    pub fn on_image_intersect(&mut self, index: usize, deferred_src: &str) -> Vec<Effect> {
        self.lazy.on_intersect(index, deferred_src)
    }

    // --- Form ---

    /// Contact form submit. Errors notify and leave the form alone; success
    /// notifies and resets it. No request is sent.
    pub fn on_submit(&mut self, fields: &ContactFields) -> Vec<Effect> {
        match form::validate(fields) {
            Err(err) => {
                log::debug!("contact form rejected: {err}");
                self.notifier.show(Notification::error(err.to_string()))
            }
            Ok(()) => {
                let mut effects = self.notifier.show(Notification::success(SUCCESS_MESSAGE));
                effects.push(Effect::ResetForm);
                effects
            }
        }
    }

    // --- Decorative ---

    pub fn on_button_click(&mut self, button: usize, click: Point, button_offset: Point) -> Vec<Effect> {
        self.ripples.spawn(button, click, button_offset)
    }

    #[must_use]
    pub fn on_card_hover(&self, card: usize, entering: bool) -> Vec<Effect> {
        vec![fx::card_hover(card, entering)]
    }
}
