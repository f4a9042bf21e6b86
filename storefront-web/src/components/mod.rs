pub mod buttons;
pub mod cards;
pub mod footer;
pub mod navigation;
pub mod notifications;
pub mod promo;

pub use buttons::{Button, ButtonVariant};
pub use cards::PackageCard;
pub use footer::Footer;
pub use navigation::Navigation;
pub use notifications::NotificationContainer;
pub use promo::PromoForm;
