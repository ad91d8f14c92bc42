//! DOM mutation vocabulary emitted by the core and executed by the host.
//!
//! Controllers never touch the DOM. Every handler returns a `Vec<Effect>`;
//! the browser host resolves each [`Target`] against the elements it found at
//! startup and applies the mutation. A target that was not found is skipped,
//! which is how missing markup degrades to a no-op.

#[cfg(test)]
#[path = "effect_test.rs"]
mod effect_test;

use crate::notify::Notification;

/// Identity of a transient element created at runtime (ripple, notification).
pub type TransientId = u64;

/// An element (or element family member) that an effect addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `<body>`; carries the `data-theme` attribute.
    Body,
    /// `.header`.
    Header,
    /// The `<i>` inside `#theme-toggle-btn`.
    ThemeIcon,
    /// `.hamburger`.
    Hamburger,
    /// `.nav-menu`.
    NavMenu,
    /// The n-th `.nav-link`.
    NavLink(usize),
    /// The n-th observed `<section>`.
    Section(usize),
    /// The n-th `.skill-progress` bar.
    SkillBar(usize),
    /// `.skills`.
    SkillsContainer,
    /// `.hero-content`.
    HeroContent,
    /// `.hero-image`.
    HeroImage,
    /// `.hero-image img`.
    HeroPicture,
    /// `.hero-title`.
    HeroTitle,
    /// The `.highlight` span the intro types into.
    IntroText,
    /// The n-th `img[data-src]`.
    LazyImage(usize),
    /// The n-th `.project-card`.
    ProjectCard(usize),
    /// A mounted ripple span.
    Ripple(TransientId),
    /// A mounted notification.
    Notification(TransientId),
}

/// A single DOM mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Replace the whole `className`.
    SetClassName { target: Target, value: &'static str },
    SetAttribute { target: Target, name: &'static str, value: String },
    /// Set an inline style property; an empty value clears it.
    SetStyle { target: Target, property: &'static str, value: String },
    /// Replace the hero title's content with an empty `.highlight` span.
    MountIntro,
    AppendText { target: Target, text: String },
    /// Smooth-scroll the window to an absolute document offset.
    ScrollTo { top: f64 },
    /// Create a `.ripple` span inside the n-th `.btn` at the given local point.
    MountRipple { id: TransientId, button: usize, x: f64, y: f64 },
    /// Create a notification element and append it to `<body>`.
    MountNotification { id: TransientId, notification: Notification },
    /// Detach an element from the document.
    Remove { target: Target },
    /// Stop observing an element for intersection.
    Unobserve { target: Target },
    /// Reset the contact form.
    ResetForm,
    /// Append the ripple stylesheet to `<head>`.
    InjectStyles { css: &'static str },
    /// Run `effect` after `delay_ms`.
    Later { delay_ms: u32, effect: Box<Effect> },
}

impl Effect {
    /// Wrap `self` so it runs after `delay_ms`.
    #[must_use]
    pub fn after(self, delay_ms: u32) -> Self {
        Self::Later { delay_ms, effect: Box::new(self) }
    }

    /// The element this effect mutates, if it addresses one directly.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetClassName { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::SetStyle { target, .. }
            | Self::AppendText { target, .. }
            | Self::Remove { target }
            | Self::Unobserve { target } => Some(*target),
            Self::MountIntro => Some(Target::HeroTitle),
            Self::MountNotification { id, .. } => Some(Target::Notification(*id)),
            Self::MountRipple { id, .. } => Some(Target::Ripple(*id)),
            Self::Later { effect, .. } => effect.target(),
            Self::ScrollTo { .. } | Self::ResetForm | Self::InjectStyles { .. } => None,
        }
    }

    /// Delay before this effect runs; zero for immediate effects.
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        match self {
            Self::Later { delay_ms, effect } => delay_ms.saturating_add(effect.delay_ms()),
            _ => 0,
        }
    }
}
