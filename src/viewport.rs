//! Viewport reactivity: which section is current, and one-shot enter animations.
//!
//! DESIGN
//! ======
//! Two signals drive this module. Scroll position is polled on every scroll
//! event and mapped to the current section for nav highlighting. Section
//! visibility is pushed by an intersection observer, one element at a time,
//! and moves that element from [`AnimationState::Unseen`] to
//! [`AnimationState::Animated`]. The transition is terminal: scrolling back
//! does not un-animate, and repeated signals are no-ops.
//!
//! The skills section additionally runs the skill-bar animation, exactly once
//! per session.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::collections::HashMap;

use crate::effect::{Effect, Target};

/// Class that plays a section's enter animation.
const FADE_IN: &str = "fade-in";

/// Class marking the skills container as fully animated.
const SKILLS_LOADED: &str = "skills-loaded";

/// A section id paired with its document-relative top offset.
///
/// `top` is `None` when the page has no element with that id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTop<'a> {
    pub id: &'a str,
    pub top: Option<f64>,
}

/// The section the reader is in at `scroll_offset`.
///
/// Scans from the last section to the first and returns the first one whose
/// top is at or above `scroll_offset + lookahead`. Falls back to the first
/// section when none qualifies; `None` only for an empty list.
#[must_use]
pub fn current_section<'a>(scroll_offset: f64, sections: &[SectionTop<'a>], lookahead: f64) -> Option<&'a str> {
    let probe = scroll_offset + lookahead;
    sections
        .iter()
        .rev()
        .find(|s| s.top.is_some_and(|top| top <= probe))
        .or_else(|| sections.first())
        .map(|s| s.id)
}

/// Per-element enter-animation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    #[default]
    Unseen,
    Animated,
}

/// Parse a `data-progress` attribute. Non-numeric and non-finite values are rejected.
#[must_use]
pub fn parse_progress(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Tracks animation state for observed sections and the skill bars.
#[derive(Debug, Clone)]
pub struct ViewportController {
    states: HashMap<usize, AnimationState>,
    skill_bars: Vec<Option<f64>>,
    skills_animated: bool,
    skill_bar_delay_ms: u32,
}

impl ViewportController {
    /// `skill_bars` holds each bar's target progress in document order.
    #[must_use]
    pub fn new(skill_bars: Vec<Option<f64>>, skill_bar_delay_ms: u32) -> Self {
        Self { states: HashMap::new(), skill_bars, skills_animated: false, skill_bar_delay_ms }
    }

    /// Animation state of the observed section at `index`.
    #[must_use]
    pub fn state(&self, index: usize) -> AnimationState {
        self.states.get(&index).copied().unwrap_or_default()
    }

    /// Whether the skill-bar animation has run.
    #[must_use]
    pub fn skills_animated(&self) -> bool {
        self.skills_animated
    }

    /// An observed section intersected the viewport.
    ///
    /// The first call for `index` fades the section in and, for the skills
    /// section, animates the skill bars. Later calls return no effects.
    pub fn on_section_entered(&mut self, index: usize, is_skills: bool) -> Vec<Effect> {
        let state = self.states.entry(index).or_default();
        if *state == AnimationState::Animated {
            return Vec::new();
        }
        *state = AnimationState::Animated;

        let mut effects = vec![Effect::AddClass { target: Target::Section(index), class: FADE_IN }];
        if is_skills && !self.skills_animated {
            self.skills_animated = true;
            effects.extend(self.animate_skill_bars());
        }
        effects
    }

    /// Drive every skill bar to its target progress.
    ///
    /// `--progress` is set immediately and the width after the configured
    /// delay, so the width change lands in a later frame and transitions.
    /// Bars without a numeric progress are skipped.
    #[must_use]
    pub fn animate_skill_bars(&self) -> Vec<Effect> {
        let mut effects = Vec::with_capacity(self.skill_bars.len() * 2 + 1);
        for (i, progress) in self.skill_bars.iter().enumerate() {
            let Some(progress) = progress else {
                continue;
            };
            let value = format!("{progress}%");
            effects.push(Effect::SetStyle { target: Target::SkillBar(i), property: "--progress", value: value.clone() });
            effects.push(
                Effect::SetStyle { target: Target::SkillBar(i), property: "width", value }.after(self.skill_bar_delay_ms),
            );
        }
        effects.push(Effect::AddClass { target: Target::SkillsContainer, class: SKILLS_LOADED });
        effects
    }
}
