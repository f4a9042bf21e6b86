use crate::hooks::{Notification, NotificationState, NotificationType};
use dioxus::prelude::*;

#[component]
pub fn NotificationContainer() -> Element {
    let state = use_context::<Signal<NotificationState>>();
    let notifications = state.read().notifications.clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 space-y-2",
            for notification in notifications.iter() {
                NotificationToast {
                    key: "{notification.id}",
                    notification: notification.clone(),
                }
            }
        }
    }
}

#[component]
fn NotificationToast(notification: Notification) -> Element {
    let (color_class, icon) = match notification.notification_type {
        NotificationType::Success => ("bg-green-500 text-white", "✓"),
        NotificationType::Error => ("bg-red-500 text-white", "✕"),
        NotificationType::Info => ("bg-blue-500 text-white", "ℹ"),
    };

    rsx! {
        div {
            class: "flex items-center gap-3 px-6 py-4 rounded-lg shadow-lg transition-all duration-300 animate-slideIn {color_class}",
            span { class: "font-bold", "{icon}" }
            "{notification.message}"
        }
    }
}
