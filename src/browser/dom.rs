//! The markup contract, resolved once, and the effect executor.
//!
//! `Dom` holds every element the page controller can address. Optional
//! elements are `None` and element families are possibly empty vectors when
//! the markup lacks them; effects aimed at a missing element are skipped.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, IntersectionObserver, ScrollBehavior, ScrollToOptions, Window,
};

use super::HostError;
use crate::effect::{Effect, Target, TransientId};
use crate::notify::BASE_STYLE;
use crate::page::PageLayout;

pub struct Dom {
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub header: Option<Element>,
    pub theme_button: Option<Element>,
    pub theme_icon: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_links: Vec<Element>,
    pub anchors: Vec<Element>,
    pub sections: Vec<Element>,
    pub skill_bars: Vec<Element>,
    pub skills: Option<Element>,
    pub hero_content: Option<Element>,
    pub hero_image: Option<Element>,
    pub hero_picture: Option<Element>,
    pub hero_title: Option<Element>,
    pub lazy_images: Vec<Element>,
    pub buttons: Vec<Element>,
    pub cards: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    pub section_observer: Option<IntersectionObserver>,
    pub image_observer: Option<IntersectionObserver>,
    intro: Option<Element>,
    ripples: HashMap<TransientId, Element>,
    notifications: HashMap<TransientId, Element>,
}

impl Dom {
    /// Query every element of the markup contract.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the window has no document or a selector
    /// query throws.
    pub fn query(window: Window) -> Result<Self, HostError> {
        let document = window.document().ok_or(HostError::NoDocument)?;
        let form = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());

        Ok(Self {
            body: document.body(),
            header: document.query_selector(".header")?,
            theme_button: document.get_element_by_id("theme-toggle-btn"),
            theme_icon: document.query_selector("#theme-toggle-btn i")?,
            hamburger: document.query_selector(".hamburger")?,
            nav_menu: document.query_selector(".nav-menu")?,
            nav_links: query_all(&document, ".nav-link")?,
            anchors: query_all(&document, "a[href^=\"#\"]")?,
            sections: query_all(&document, "section")?,
            skill_bars: query_all(&document, ".skill-progress")?,
            skills: document.query_selector(".skills")?,
            hero_content: document.query_selector(".hero-content")?,
            hero_image: document.query_selector(".hero-image")?,
            hero_picture: document.query_selector(".hero-image img")?,
            hero_title: document.query_selector(".hero-title")?,
            lazy_images: query_all(&document, "img[data-src]")?,
            buttons: query_all(&document, ".btn")?,
            cards: query_all(&document, ".project-card")?,
            form,
            section_observer: None,
            image_observer: None,
            intro: None,
            ripples: HashMap::new(),
            notifications: HashMap::new(),
            window,
            document,
        })
    }

    /// Summary of the markup handed to the page controller.
    #[must_use]
    pub fn layout(&self) -> PageLayout {
        PageLayout {
            nav_links: self
                .nav_links
                .iter()
                .map(|link| link.get_attribute("href").unwrap_or_default())
                .collect(),
            skill_progress: self
                .skill_bars
                .iter()
                .map(|bar| bar.get_attribute("data-progress"))
                .collect(),
            lazy_images: self.lazy_images.len(),
        }
    }

    /// Document-relative top of the section with `id`.
    #[must_use]
    pub fn section_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        el.dyn_ref::<HtmlElement>().map(|html| f64::from(html.offset_top()))
    }

    fn resolve(&self, target: Target) -> Option<Element> {
        match target {
            Target::Body => self.body.clone().map(Element::from),
            Target::Header => self.header.clone(),
            Target::ThemeIcon => self.theme_icon.clone(),
            Target::Hamburger => self.hamburger.clone(),
            Target::NavMenu => self.nav_menu.clone(),
            Target::NavLink(i) => self.nav_links.get(i).cloned(),
            Target::Section(i) => self.sections.get(i).cloned(),
            Target::SkillBar(i) => self.skill_bars.get(i).cloned(),
            Target::SkillsContainer => self.skills.clone(),
            Target::HeroContent => self.hero_content.clone(),
            Target::HeroImage => self.hero_image.clone(),
            Target::HeroPicture => self.hero_picture.clone(),
            Target::HeroTitle => self.hero_title.clone(),
            Target::IntroText => self.intro.clone(),
            Target::LazyImage(i) => self.lazy_images.get(i).cloned(),
            Target::ProjectCard(i) => self.cards.get(i).cloned(),
            Target::Ripple(id) => self.ripples.get(&id).cloned(),
            Target::Notification(id) => self.notifications.get(&id).cloned(),
        }
    }

    /// Apply one effect now. Delayed effects are applied immediately; the
    /// scheduler unwraps them before they get here.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if a DOM call throws.
    pub fn apply(&mut self, effect: Effect) -> Result<(), HostError> {
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(el) = self.found(target) {
                    el.class_list().add_1(class)?;
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.found(target) {
                    el.class_list().remove_1(class)?;
                }
            }
            Effect::SetClassName { target, value } => {
                if let Some(el) = self.found(target) {
                    el.set_class_name(value);
                }
            }
            Effect::SetAttribute { target, name, value } => {
                if let Some(el) = self.found(target) {
                    el.set_attribute(name, &value)?;
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.found(target) {
                    set_style(&el, property, &value)?;
                }
            }
            Effect::MountIntro => {
                if let Some(title) = self.found(Target::HeroTitle) {
                    title.set_inner_html(r#"<span class="highlight"></span>"#);
                    self.intro = title.query_selector(".highlight")?;
                }
            }
            Effect::AppendText { target, text } => {
                if let Some(el) = self.found(target) {
                    let mut content = el.text_content().unwrap_or_default();
                    content.push_str(&text);
                    el.set_text_content(Some(&content));
                }
            }
            Effect::ScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::MountRipple { id, button, x, y } => {
                let Some(button) = self.buttons.get(button) else {
                    log::debug!("ripple {id}: no button {button}");
                    return Ok(());
                };
                let ripple = self.document.create_element("span")?;
                ripple.class_list().add_1("ripple")?;
                button.append_child(&ripple)?;
                set_style(&ripple, "left", &format!("{x}px"))?;
                set_style(&ripple, "top", &format!("{y}px"))?;
                self.ripples.insert(id, ripple);
            }
            Effect::MountNotification { id, notification } => {
                let Some(body) = self.body.clone() else {
                    log::debug!("notification {id}: no body");
                    return Ok(());
                };
                let el = self.document.create_element("div")?;
                el.set_class_name(&notification.class_name());
                el.set_text_content(Some(&notification.message));
                for (property, value) in BASE_STYLE {
                    set_style(&el, property, value)?;
                }
                set_style(&el, "background-color", notification.kind.background())?;
                body.append_child(&el)?;
                self.notifications.insert(id, el);
            }
            Effect::Remove { target } => {
                let el = match target {
                    Target::Ripple(id) => self.ripples.remove(&id),
                    Target::Notification(id) => self.notifications.remove(&id),
                    other => self.resolve(other),
                };
                if let Some(el) = el {
                    el.remove();
                }
            }
            Effect::Unobserve { target } => {
                if let (Some(observer), Some(el)) = (&self.image_observer, self.resolve(target)) {
                    observer.unobserve(&el);
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.form {
                    form.reset();
                }
            }
            Effect::InjectStyles { css } => {
                if let Some(head) = self.document.head() {
                    let style = self.document.create_element("style")?;
                    style.set_text_content(Some(css));
                    head.append_child(&style)?;
                }
            }
            Effect::Later { effect, .. } => self.apply(*effect)?,
        }
        Ok(())
    }

    fn found(&self, target: Target) -> Option<Element> {
        let el = self.resolve(target);
        if el.is_none() {
            log::debug!("skipping effect: no element for {target:?}");
        }
        el
    }
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, HostError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn set_style(el: &Element, property: &str, value: &str) -> Result<(), HostError> {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.style().set_property(property, value)?,
        None => log::debug!("cannot style non-HTML element <{}>", el.tag_name()),
    }
    Ok(())
}
