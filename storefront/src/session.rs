use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{AppliedPromo, Notification, Package};
use crate::notifications::Notifier;
use crate::pricing::{self, Labels};
use crate::promo::{self, PromoTable};

/// Transient view state of one storefront visit.
///
/// Created on mount, mutated only by user interaction, dropped on unmount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    promo_input: String,
    applied_promo: Option<AppliedPromo>,
    selected_package: Option<u32>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn promo_input(&self) -> &str {
        &self.promo_input
    }

    pub fn set_promo_input(&mut self, input: impl Into<String>) {
        self.promo_input = input.into();
    }

    pub fn applied_promo(&self) -> Option<&AppliedPromo> {
        self.applied_promo.as_ref()
    }

    pub fn selected_package(&self) -> Option<u32> {
        self.selected_package
    }

    /// Applies the current promo input.
    ///
    /// A valid code replaces any previously applied one. An unknown code
    /// leaves the applied promo untouched.
    pub fn apply_promo(
        &mut self,
        table: &PromoTable,
        mut notifier: impl Notifier,
    ) -> Result<AppliedPromo> {
        match promo::apply_promo(&self.promo_input, table) {
            Ok(applied) => {
                if let Some(previous) = &self.applied_promo {
                    if previous.code != applied.code {
                        tracing::info!("Promo {} replaced by {}", previous.code, applied.code);
                    }
                }
                notifier.notify(Notification::success(format!(
                    "Promo code {} applied! {} off",
                    applied.code, applied.discount
                )));
                self.applied_promo = Some(applied.clone());
                Ok(applied)
            }
            Err(e) => {
                tracing::info!("Rejected promo input: {}", e);
                notifier.notify(Notification::error("Invalid promo code"));
                Err(e)
            }
        }
    }

    pub fn clear_promo(&mut self) -> Option<AppliedPromo> {
        self.applied_promo.take()
    }

    pub fn price_of(&self, package: &Package) -> u64 {
        pricing::calculate_price(package.price, self.applied_promo.as_ref())
    }

    pub fn purchase(&mut self, package: &Package, labels: &Labels, mut notifier: impl Notifier) {
        self.selected_package = Some(package.id);
        notifier.notify(pricing::purchase(package, self.applied_promo.as_ref(), labels));
    }
}
