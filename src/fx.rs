//! Decorative effects: parallax, button ripple, typed intro, lazy images,
//! hero slide-in, and project-card hover lift.
//!
//! None of these carry state between triggers except the typed intro (runs
//! once), ripple ids, and the per-image lazy-load flag.

#[cfg(test)]
#[path = "fx_test.rs"]
mod fx_test;

use crate::effect::{Effect, Target, TransientId};

/// Stylesheet giving `.btn` a clipping context and `.ripple` its animation.
pub const RIPPLE_CSS: &str = r"
    .btn {
        position: relative;
        overflow: hidden;
    }

    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.6);
        transform: scale(0);
        animation: ripple 1s linear;
        pointer-events: none;
    }

    @keyframes ripple {
        to {
            transform: scale(4);
            opacity: 0;
        }
    }
";

/// A point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Parallax ────────────────────────────────────────────────────

/// Offset the hero picture by `factor` of the scroll distance.
#[must_use]
pub fn parallax(scroll_y: f64, factor: f64) -> Effect {
    Effect::SetStyle {
        target: Target::HeroPicture,
        property: "transform",
        value: format!("translateY({}px)", scroll_y * factor),
    }
}

// ── Hero / cards ────────────────────────────────────────────────

/// Entrance classes for the hero block.
#[must_use]
pub fn hero_slide_in() -> Vec<Effect> {
    vec![
        Effect::AddClass { target: Target::HeroContent, class: "slide-in-left" },
        Effect::AddClass { target: Target::HeroImage, class: "slide-in-right" },
    ]
}

/// Lift a project card while the pointer is over it.
#[must_use]
pub fn card_hover(card: usize, entering: bool) -> Effect {
    let value = if entering { "translateY(-10px) scale(1.02)" } else { "translateY(0) scale(1)" };
    Effect::SetStyle { target: Target::ProjectCard(card), property: "transform", value: value.to_owned() }
}

// ── Ripple ──────────────────────────────────────────────────────

/// Spawns independent, self-removing ripples.
#[derive(Debug, Clone)]
pub struct Ripples {
    next_id: TransientId,
    lifetime_ms: u32,
}

impl Ripples {
    #[must_use]
    pub fn new(lifetime_ms: u32) -> Self {
        Self { next_id: 0, lifetime_ms }
    }

    /// A click at `click` (client coordinates) on the n-th button whose
    /// offset within its parent is `button_offset`.
    pub fn spawn(&mut self, button: usize, click: Point, button_offset: Point) -> Vec<Effect> {
        let id = self.next_id;
        self.next_id += 1;
        vec![
            Effect::MountRipple { id, button, x: click.x - button_offset.x, y: click.y - button_offset.y },
            Effect::Remove { target: Target::Ripple(id) }.after(self.lifetime_ms),
        ]
    }
}

// ── Typed intro ─────────────────────────────────────────────────

/// Types a fixed string into the hero title, one character per tick.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    start_delay_ms: u32,
    interval_ms: u32,
    started: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>, start_delay_ms: u32, interval_ms: u32) -> Self {
        Self { text: text.into(), start_delay_ms, interval_ms, started: false }
    }

    /// Schedule the whole reveal. Only the first call does anything.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        let mut effects = vec![Effect::MountIntro];
        let mut delay = self.start_delay_ms;
        for ch in self.text.chars() {
            effects.push(Effect::AppendText { target: Target::IntroText, text: ch.to_string() }.after(delay));
            delay = delay.saturating_add(self.interval_ms);
        }
        effects
    }
}

// ── Lazy images ─────────────────────────────────────────────────

/// Per-image load state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LazyState {
    #[default]
    Pending,
    Loaded,
}

/// One-shot source swap for every `img[data-src]`.
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
    states: Vec<LazyState>,
}

impl LazyImages {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![LazyState::Pending; count] }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<LazyState> {
        self.states.get(index).copied()
    }

    /// The n-th lazy image intersected the viewport.
    ///
    /// Swaps in `deferred_src` (an empty value keeps the current source),
    /// drops the `lazy` class, and stops observing the image. Unknown indices
    /// and already-loaded images produce nothing.
    pub fn on_intersect(&mut self, index: usize, deferred_src: &str) -> Vec<Effect> {
        let Some(state) = self.states.get_mut(index) else {
            return Vec::new();
        };
        if *state == LazyState::Loaded {
            return Vec::new();
        }
        *state = LazyState::Loaded;

        let target = Target::LazyImage(index);
        let mut effects = Vec::with_capacity(3);
        if !deferred_src.is_empty() {
            effects.push(Effect::SetAttribute { target, name: "src", value: deferred_src.to_owned() });
        }
        effects.push(Effect::RemoveClass { target, class: "lazy" });
        effects.push(Effect::Unobserve { target });
        effects
    }
}
