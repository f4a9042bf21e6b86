use crate::models::{Notification, Severity};

/// Side channel for user-facing messages (toasts, terminal output).
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Writes notifications to the log instead of displaying them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!("{}", notification.message),
            Severity::Error => tracing::warn!("{}", notification.message),
        }
    }
}
