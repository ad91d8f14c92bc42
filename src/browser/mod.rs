//! Browser host: binds the DOM, registers listeners, and executes effects.
//!
//! Startup reads configuration, installs the console logger, resolves the
//! markup contract into a [`dom::Dom`], and builds the [`Page`] controller.
//! Each component is then wired independently; a component whose markup is
//! missing logs a warning and stays inert while the rest keep working.
//!
//! Handlers borrow the shared host only long enough to compute effects, then
//! release it before running them. Delayed effects are scheduled with
//! `gloo-timers` and never cancelled.

pub mod dom;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, FormData, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};

use crate::config::{Config, ConfigError};
use crate::consts::{CONFIG_ELEMENT_ID, SECTION_ROOT_MARGIN, SECTION_VISIBILITY_THRESHOLD};
use crate::effect::Effect;
use crate::form::ContactFields;
use crate::fx::Point;
use crate::nav;
use crate::page::Page;
use dom::Dom;
use storage::LocalStorage;

/// Error raised while binding the page.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element: {0}")]
    Missing(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

struct Host {
    dom: Dom,
    page: Page<LocalStorage>,
}

type Shared = Rc<RefCell<Host>>;

type Wiring = fn(&Shared) -> Result<(), HostError>;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = web_sys::window().and_then(|w| w.document());
    let (config, config_err) = match document.as_ref().map_or(Ok(Config::default()), read_config) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("folio: logger not installed: {err}").into());
    }
    if let Some(err) = config_err {
        log::warn!("ignoring folio config: {err}");
    }

    match bootstrap(config) {
        Ok(()) => log::info!("folio ready"),
        Err(err) => log::error!("folio disabled: {err}"),
    }
}

fn read_config(document: &Document) -> Result<Config, ConfigError> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
        Some(raw) => Config::from_json(&raw),
        None => Ok(Config::default()),
    }
}

fn bootstrap(config: Config) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let store = LocalStorage::open(&window);
    let dom = Dom::query(window)?;
    let page = Page::new(config, store, dom.layout());
    let host: Shared = Rc::new(RefCell::new(Host { dom, page }));

    let effects = host.borrow().page.on_start();
    run(&host, effects);

    let components: [(&str, Wiring); 9] = [
        ("theme toggle", wire_theme),
        ("mobile menu", wire_menu),
        ("smooth scroll", wire_anchors),
        ("scroll tracking", wire_scroll),
        ("section animations", wire_sections),
        ("contact form", wire_form),
        ("button ripples", wire_buttons),
        ("project cards", wire_cards),
        ("lazy images", wire_lazy_images),
    ];
    for (name, wire) in components {
        match wire(&host) {
            Ok(()) => log::debug!("{name} wired"),
            Err(err) => log::warn!("{name} disabled: {err}"),
        }
    }

    wire_dom_ready(&host)
}

/// Execute effects, scheduling delayed ones on a timer.
fn run(host: &Shared, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Later { delay_ms, effect } => {
                let shared = Rc::clone(host);
                Timeout::new(delay_ms, move || run(&shared, vec![*effect])).forget();
            }
            effect => {
                if let Err(err) = host.borrow_mut().dom.apply(effect) {
                    log::warn!("effect failed: {err}");
                }
            }
        }
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), HostError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Call `step` on the page and run its effects.
fn dispatch(host: &Shared, step: impl FnOnce(&mut Page<LocalStorage>) -> Vec<Effect>) {
    let effects = step(&mut host.borrow_mut().page);
    run(host, effects);
}

// --- Components ---

fn wire_theme(host: &Shared) -> Result<(), HostError> {
    let button = host.borrow().dom.theme_button.clone().ok_or(HostError::Missing("#theme-toggle-btn"))?;
    let shared = Rc::clone(host);
    listen(&button, "click", move |_: Event| dispatch(&shared, Page::on_theme_toggle))
}

fn wire_menu(host: &Shared) -> Result<(), HostError> {
    let (hamburger, links) = {
        let host = host.borrow();
        host.dom.nav_menu.as_ref().ok_or(HostError::Missing(".nav-menu"))?;
        let hamburger = host.dom.hamburger.clone().ok_or(HostError::Missing(".hamburger"))?;
        (hamburger, host.dom.nav_links.clone())
    };

    let shared = Rc::clone(host);
    listen(&hamburger, "click", move |_: Event| dispatch(&shared, Page::on_hamburger_click))?;
    for link in links {
        let shared = Rc::clone(host);
        listen(&link, "click", move |_: Event| dispatch(&shared, Page::on_nav_link_click))?;
    }
    Ok(())
}

fn wire_anchors(host: &Shared) -> Result<(), HostError> {
    let anchors = host.borrow().dom.anchors.clone();
    for anchor in anchors {
        let shared = Rc::clone(host);
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            if let Err(err) = scroll_to_anchor(&shared, &href) {
                log::warn!("smooth scroll to {href:?} failed: {err}");
            }
        })?;
    }
    Ok(())
}

fn scroll_to_anchor(host: &Shared, href: &str) -> Result<(), HostError> {
    let (element_top, scroll_y) = {
        let host = host.borrow();
        let target = nav::anchor_id(href).and_then(|id| host.dom.document.get_element_by_id(id));
        let element_top = target.map(|el| el.get_bounding_client_rect().top());
        (element_top, host.dom.window.scroll_y()?)
    };
    dispatch(host, |page| page.on_anchor_click(element_top, scroll_y));
    Ok(())
}

fn wire_scroll(host: &Shared) -> Result<(), HostError> {
    let window = host.borrow().dom.window.clone();
    let shared = Rc::clone(host);
    listen(&window, "scroll", move |_: Event| {
        let effects = {
            let mut host = shared.borrow_mut();
            let host = &mut *host;
            match host.dom.window.scroll_y() {
                Ok(scroll_y) => host.page.on_scroll(scroll_y, |id| host.dom.section_top(id)),
                Err(err) => {
                    log::warn!("scroll offset unavailable: {err:?}");
                    Vec::new()
                }
            }
        };
        run(&shared, effects);
    })
}

fn wire_sections(host: &Shared) -> Result<(), HostError> {
    let sections = host.borrow().dom.sections.clone();
    if sections.is_empty() {
        return Err(HostError::Missing("section"));
    }

    let shared = Rc::clone(host);
    let observed = sections.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for target in intersecting(&entries) {
                let Some(index) = observed.iter().position(|s| *s == target) else {
                    continue;
                };
                let is_skills = target.class_list().contains("skills");
                dispatch(&shared, |page| page.on_section_intersect(index, is_skills));
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));
    options.set_root_margin(SECTION_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    host.borrow_mut().dom.section_observer = Some(observer);
    Ok(())
}

fn wire_lazy_images(host: &Shared) -> Result<(), HostError> {
    let (window, images) = {
        let host = host.borrow();
        (host.dom.window.clone(), host.dom.lazy_images.clone())
    };
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
        log::info!("IntersectionObserver unsupported; lazy images keep their placeholder");
        return Ok(());
    }

    let shared = Rc::clone(host);
    let observed = images.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for target in intersecting(&entries) {
                let Some(index) = observed.iter().position(|img| *img == target) else {
                    continue;
                };
                let deferred = target.get_attribute("data-src").unwrap_or_default();
                dispatch(&shared, |page| page.on_image_intersect(index, &deferred));
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }
    host.borrow_mut().dom.image_observer = Some(observer);
    Ok(())
}

/// Targets of the entries that are currently intersecting.
fn intersecting(entries: &js_sys::Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned())
        .filter(IntersectionObserverEntry::is_intersecting)
        .map(|entry| entry.target())
        .collect()
}

fn wire_form(host: &Shared) -> Result<(), HostError> {
    let form = host.borrow().dom.form.clone().ok_or(HostError::Missing("#contactForm"))?;
    let shared = Rc::clone(host);
    let submitted = form.clone();
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        match read_fields(&submitted) {
            Ok(fields) => dispatch(&shared, |page| page.on_submit(&fields)),
            Err(err) => log::warn!("contact form unreadable: {err}"),
        }
    })
}

fn read_fields(form: &web_sys::HtmlFormElement) -> Result<ContactFields, HostError> {
    let data = FormData::new_with_form(form)?;
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    Ok(ContactFields {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    })
}

fn wire_buttons(host: &Shared) -> Result<(), HostError> {
    let buttons = host.borrow().dom.buttons.clone();
    for (index, button) in buttons.into_iter().enumerate() {
        let shared = Rc::clone(host);
        let offset_source = button.clone();
        listen(&button, "click", move |event: MouseEvent| {
            let click = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            let offset = offset_source
                .dyn_ref::<HtmlElement>()
                .map_or(Point::default(), |html| {
                    Point::new(f64::from(html.offset_left()), f64::from(html.offset_top()))
                });
            dispatch(&shared, |page| page.on_button_click(index, click, offset));
        })?;
    }
    Ok(())
}

fn wire_cards(host: &Shared) -> Result<(), HostError> {
    let cards = host.borrow().dom.cards.clone();
    for (index, card) in cards.into_iter().enumerate() {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let shared = Rc::clone(host);
            listen(&card, event, move |_: Event| dispatch(&shared, |page| page.on_card_hover(index, entering)))?;
        }
    }
    Ok(())
}

/// Hero entrance and typed intro, on `DOMContentLoaded` or now if it already fired.
fn wire_dom_ready(host: &Shared) -> Result<(), HostError> {
    let document = host.borrow().dom.document.clone();
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?.as_string();
    if ready_state.as_deref() != Some("loading") {
        on_dom_ready(host);
        return Ok(());
    }
    let shared = Rc::clone(host);
    listen(&document, "DOMContentLoaded", move |_: Event| on_dom_ready(&shared))
}

fn on_dom_ready(host: &Shared) {
    let has_title = host.borrow().dom.hero_title.is_some();
    dispatch(host, |page| page.on_dom_ready(has_title));
}
