use dioxus_logger::tracing;
use dioxus::prelude::*;
use storefront::{AppliedPromo, Catalog, Labels, Package, Session};

use super::notifications::{use_notifications, NotificationContext};

#[derive(Copy, Clone)]
pub struct StorefrontContext {
    session: Signal<Session>,
    catalog: Signal<Catalog>,
    notifications: NotificationContext,
}

impl StorefrontContext {
    /// Runs `f` against the catalog without cloning it.
    pub fn with_catalog<R>(&self, f: impl FnOnce(&Catalog) -> R) -> R {
        f(&self.catalog.read())
    }

    pub fn labels(&self) -> Labels {
        self.catalog.read().labels().clone()
    }

    /// Promo codes in the order the catalog lists them.
    pub fn promo_hint(&self) -> Vec<String> {
        self.catalog
            .read()
            .promo_codes()
            .codes()
            .map(|(code, _)| code.to_string())
            .collect()
    }

    pub fn promo_input(&self) -> String {
        self.session.read().promo_input().to_string()
    }

    pub fn set_promo_input(&mut self, input: String) {
        self.session.write().set_promo_input(input);
    }

    pub fn applied_promo(&self) -> Option<AppliedPromo> {
        self.session.read().applied_promo().cloned()
    }

    pub fn selected_package(&self) -> Option<u32> {
        self.session.read().selected_package()
    }

    pub fn price_of(&self, package: &Package) -> u64 {
        self.session.read().price_of(package)
    }

    pub fn apply_promo(&mut self) {
        let catalog = self.catalog.read();
        let result = self
            .session
            .write()
            .apply_promo(catalog.promo_codes(), self.notifications);

        if let Ok(applied) = result {
            tracing::info!("Applied promo {} ({})", applied.code, applied.discount);
        }
    }

    pub fn clear_promo(&mut self) {
        if let Some(removed) = self.session.write().clear_promo() {
            self.notifications
                .info(format!("Promo code {} removed", removed.code));
        }
    }

    pub fn purchase(&mut self, package: &Package) {
        let catalog = self.catalog.read();
        self.session
            .write()
            .purchase(package, catalog.labels(), self.notifications);
    }
}

pub fn use_storefront() -> StorefrontContext {
    let session = use_context::<Signal<Session>>();
    let catalog = use_context::<Signal<Catalog>>();
    let notifications = use_notifications();
    StorefrontContext {
        session,
        catalog,
        notifications,
    }
}
