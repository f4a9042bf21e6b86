pub mod notifications;
pub mod scroll;
pub mod store;

pub use notifications::{Notification, NotificationState, NotificationType};
pub use scroll::scroll_to_section;
pub use store::use_storefront;
