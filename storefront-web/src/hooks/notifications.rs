use dioxus::prelude::*;
use std::collections::VecDeque;
use storefront::{Notification as StoreNotification, Notifier, Severity};

const MAX_VISIBLE: usize = 3;
const DISMISS_AFTER_SECS: u64 = 3;

#[derive(Clone, PartialEq, Debug)]
pub enum NotificationType {
    Success,
    Error,
    Info,
}

impl From<Severity> for NotificationType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Success => NotificationType::Success,
            Severity::Error => NotificationType::Error,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: usize,
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, PartialEq, Default)]
pub struct NotificationState {
    pub notifications: VecDeque<Notification>,
    next_id: usize,
}

impl NotificationState {
    /// Queues a toast and returns its id. Only the newest few stay visible.
    pub fn push(&mut self, message: String, notification_type: NotificationType) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.notifications.push_back(Notification {
            id,
            message,
            notification_type,
        });

        if self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: usize) {
        self.notifications.retain(|n| n.id != id);
    }
}

#[derive(Copy, Clone)]
pub struct NotificationContext {
    state: Signal<NotificationState>,
}

impl NotificationContext {
    pub fn show(&mut self, message: String, notification_type: NotificationType) {
        let id = self.state.write().push(message, notification_type);

        let mut state_clone = self.state;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
            state_clone.write().dismiss(id);
        });
    }

    pub fn info(&mut self, message: String) {
        self.show(message, NotificationType::Info);
    }
}

impl Notifier for NotificationContext {
    fn notify(&mut self, notification: StoreNotification) {
        self.show(notification.message, notification.severity.into());
    }
}

pub fn use_notifications() -> NotificationContext {
    let state = use_context::<Signal<NotificationState>>();
    NotificationContext { state }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_newest_three() {
        let mut state = NotificationState::default();
        for i in 0..5 {
            state.push(format!("message {}", i), NotificationType::Info);
        }

        let messages: Vec<_> = state.notifications.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_ids_are_unique_and_dismissable() {
        let mut state = NotificationState::default();
        let first = state.push("a".to_string(), NotificationType::Success);
        let second = state.push("b".to_string(), NotificationType::Error);
        assert_ne!(first, second);

        state.dismiss(first);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, second);

        // Dismissing twice is harmless
        state.dismiss(first);
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(NotificationType::from(Severity::Success), NotificationType::Success);
        assert_eq!(NotificationType::from(Severity::Error), NotificationType::Error);
    }
}
