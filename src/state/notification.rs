//! One-shot user notifications (toasts)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Destructive,
}

/// A user-facing outcome message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl NotificationEvent {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Failure notice; the title is always "Error"
    pub fn destructive(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Queue of notifications; the front one is displayed until it expires or
/// is dismissed
#[derive(Debug, Default)]
pub struct NotificationCenter {
    queue: VecDeque<NotificationEvent>,
    front_since: Option<Instant>,
}

impl NotificationCenter {
    pub fn push(&mut self, event: NotificationEvent) {
        tracing::debug!(title = %event.title, severity = ?event.severity, "notification");
        self.queue.push_back(event);
    }

    /// The notification currently on screen
    pub fn current(&self) -> Option<&NotificationEvent> {
        self.queue.front()
    }

    /// Number of notifications not yet displayed to completion
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove the displayed notification
    pub fn dismiss(&mut self) {
        self.queue.pop_front();
        self.front_since = None;
    }

    /// Advance display time, expiring the front notification when due
    pub fn tick(&mut self, now: Instant) {
        if self.queue.is_empty() {
            self.front_since = None;
            return;
        }
        match self.front_since {
            None => self.front_since = Some(now),
            Some(since) if now.duration_since(since) >= TOAST_DURATION => self.dismiss(),
            Some(_) => {}
        }
    }
}
