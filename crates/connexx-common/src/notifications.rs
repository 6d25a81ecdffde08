use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// How long a toast stays on screen before dismissing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    /// 2 seconds.
    Short,
    /// 3.5 seconds.
    Long,
}

impl ToastDuration {
    pub fn as_duration(self) -> Duration {
        match self {
            Self::Short => Duration::from_millis(2000),
            Self::Long => Duration::from_millis(3500),
        }
    }
}

/// A short, non-blocking, auto-dismissing message for the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>, duration: ToastDuration) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            ttl: duration.as_duration(),
        }
    }

    /// Creates a warning toast with the long duration.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message, ToastDuration::Long)
    }

    /// Creates an error toast with the short duration.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message, ToastDuration::Short)
    }

    /// Returns `true` if this notification has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of toasts that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    /// Creates a new queue with the given maximum capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a notification, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// The most recent visible toast, if any.
    pub fn latest(&mut self) -> Option<&Notification> {
        self.evict_expired();
        self.items.back()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}
