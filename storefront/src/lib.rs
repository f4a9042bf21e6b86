// Core storefront types, shared by the web client and the terminal binary
pub mod catalog;
pub mod error;
pub mod models;
pub mod notifications;
pub mod pricing;
pub mod promo;
pub mod session;

// Environment configuration, only needed by the terminal binary
#[cfg(feature = "cli")]
pub mod config;

pub use catalog::{Catalog, CatalogFile};
pub use error::{Result, StorefrontError};
pub use models::*;
pub use notifications::{Notifier, TracingNotifier};
pub use pricing::{Labels, calculate_price, purchase};
pub use promo::{PromoCode, PromoTable, apply_promo, normalize_code};
pub use session::Session;
