//! Transient toast notifications.
//!
//! A notification is mounted off-screen at the top right, slides in shortly
//! after, slides out when its lifetime ends, and is removed once the exit
//! transition finishes. Overlapping notifications are independent.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::consts::{NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_EXIT_MS};
use crate::effect::{Effect, Target, TransientId};

/// Off-screen position a notification starts and ends at.
pub const HIDDEN_TRANSFORM: &str = "translateX(400px)";

/// On-screen position.
pub const SHOWN_TRANSFORM: &str = "translateX(0)";

/// Inline style applied to every notification when it is mounted.
pub const BASE_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("padding", "1rem 2rem"),
    ("border-radius", "0.5rem"),
    ("color", "white"),
    ("font-weight", "500"),
    ("z-index", "9999"),
    ("transform", HIDDEN_TRANSFORM),
    ("transition", "transform 0.3s ease"),
];

/// Visual flavor of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Modifier class added next to `notification`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }
}

/// Message plus kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Success }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }

    /// Full `className` of the mounted element.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("notification {}", self.kind.class())
    }
}

/// Hands out notification ids and schedules their lifecycle.
#[derive(Debug, Clone)]
pub struct Notifier {
    next_id: TransientId,
    lifetime_ms: u32,
}

impl Notifier {
    #[must_use]
    pub fn new(lifetime_ms: u32) -> Self {
        Self { next_id: 0, lifetime_ms }
    }

    /// Mount `notification` and schedule its slide-in, slide-out, and removal.
    pub fn show(&mut self, notification: Notification) -> Vec<Effect> {
        let id = self.next_id;
        self.next_id += 1;
        let target = Target::Notification(id);
        log::debug!("notification {id}: {} ({})", notification.message, notification.kind.class());

        vec![
            Effect::MountNotification { id, notification },
            Effect::SetStyle { target, property: "transform", value: SHOWN_TRANSFORM.to_owned() }
                .after(NOTIFICATION_ENTER_DELAY_MS),
            Effect::SetStyle { target, property: "transform", value: HIDDEN_TRANSFORM.to_owned() }
                .after(self.lifetime_ms),
            Effect::Remove { target }.after(self.lifetime_ms.saturating_add(NOTIFICATION_EXIT_MS)),
        ]
    }
}
