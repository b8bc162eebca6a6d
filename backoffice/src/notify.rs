//! Transient user notifications (toasts)

use std::collections::VecDeque;

use serde::Serialize;
use shared::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// One message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl From<&AppError> for Notification {
    fn from(err: &AppError) -> Self {
        Self::error(err.message.clone())
    }
}

impl From<AppError> for Notification {
    fn from(err: AppError) -> Self {
        Self::error(err.message)
    }
}

/// Bounded queue of the most recent notifications, newest last
#[derive(Debug, Clone)]
pub struct Toasts {
    queue: VecDeque<Notification>,
    capacity: usize,
}

impl Toasts {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(notification);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn dismiss_all(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_from_app_error() {
        let err = AppError::with_message(ErrorCode::ValidationFailed, "Please enter name and email");
        let n = Notification::from(&err);
        assert!(n.is_error());
        assert_eq!(n.message, "Please enter name and email");
    }

    #[test]
    fn test_toasts_are_bounded() {
        let mut toasts = Toasts::new(2);
        toasts.push(Notification::success("one"));
        toasts.push(Notification::success("two"));
        toasts.push(Notification::error("three"));

        assert_eq!(toasts.len(), 2);
        let messages: Vec<_> = toasts.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
        assert_eq!(toasts.latest().unwrap().message, "three");

        toasts.dismiss_all();
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut toasts = Toasts::new(0);
        toasts.push(Notification::success("a"));
        toasts.push(Notification::success("b"));
        assert_eq!(toasts.len(), 1);
    }
}
