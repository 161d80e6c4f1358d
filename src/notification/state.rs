use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// At most one notification is visible; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str, kind: NotificationKind, duration: Duration) {
        self.show_at(message, kind, duration, Instant::now());
    }

    pub fn show_at(
        &mut self,
        message: &str,
        kind: NotificationKind,
        duration: Duration,
        now: Instant,
    ) {
        self.current = Some(Notification {
            message: message.to_string(),
            kind,
            shown_at: now,
            duration,
        });
    }

    /// Drop the notification once its duration has elapsed
    ///
    /// Returns true if a notification was removed.
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
