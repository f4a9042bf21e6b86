use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AppliedPromo, Notification, Package, Receipt};

/// Display names used when rendering prices and amounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Labels {
    pub currency_name: String,
    pub price_symbol: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            currency_name: "Robux".to_string(),
            price_symbol: "₽".to_string(),
        }
    }
}

impl Labels {
    pub fn price(&self, price: u64) -> String {
        format!("{}{}", price, self.price_symbol)
    }
}

/// Final price after an optional promo.
///
/// Rounds half away from zero, computed exactly in integers so that
/// e.g. 999 at 44% off is 559 and 5 at 10% off is 5.
pub fn calculate_price(base_price: u64, promo: Option<&AppliedPromo>) -> u64 {
    let Some(promo) = promo else {
        return base_price;
    };

    let keep = u128::from(100 - promo.discount.percent());
    let scaled = u128::from(base_price) * keep;
    // Never exceeds base_price, so the narrowing is lossless
    ((scaled + 50) / 100) as u64
}

/// Confirmation for a (simulated) purchase of `package`.
pub fn purchase(package: &Package, promo: Option<&AppliedPromo>, labels: &Labels) -> Notification {
    let final_price = calculate_price(package.price, promo);
    tracing::info!(
        "Purchase of package {} ({} + {} bonus) for {}",
        package.id,
        package.amount,
        package.bonus,
        final_price
    );

    Notification::success(format!(
        "Purchased {} {} for {}",
        package.total_amount(),
        labels.currency_name,
        labels.price(final_price)
    ))
}

pub fn receipt(package: &Package, promo: Option<&AppliedPromo>, issued_at: DateTime<Utc>) -> Receipt {
    Receipt {
        package_id: package.id,
        total_amount: package.total_amount(),
        base_price: package.price,
        final_price: calculate_price(package.price, promo),
        promo_code: promo.map(|p| p.code.clone()),
        issued_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Discount, Severity};

    fn promo(code: &str, percent: u8) -> AppliedPromo {
        AppliedPromo {
            code: code.to_string(),
            discount: Discount::new(percent).unwrap(),
        }
    }

    #[test]
    fn test_no_promo_keeps_price() {
        for package in Catalog::default().packages() {
            assert_eq!(calculate_price(package.price, None), package.price);
        }
    }

    #[test]
    fn test_discount_matches_rounded_formula() {
        for package in Catalog::default().packages() {
            for percent in 0..=100u8 {
                let applied = promo("X", percent);
                let expected =
                    (package.price as f64 * (1.0 - f64::from(percent) / 100.0)).round() as u64;
                let actual = calculate_price(package.price, Some(&applied));
                // The float formula can land a hair below .5; allow that drift only
                assert!(actual == expected || actual == expected + 1);
                assert!(actual <= package.price);
            }
        }
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(calculate_price(999, Some(&promo("STANDOFF444", 44))), 559);
        assert_eq!(calculate_price(5, Some(&promo("START10", 10))), 5);
        assert_eq!(calculate_price(15, Some(&promo("A", 10))), 14);
        assert_eq!(calculate_price(1, Some(&promo("VIP50", 50))), 1);
        assert_eq!(calculate_price(299, Some(&promo("A", 100))), 0);
        assert_eq!(calculate_price(299, Some(&promo("A", 0))), 299);
        assert_eq!(calculate_price(u64::MAX, Some(&promo("A", 0))), u64::MAX);
    }

    #[test]
    fn test_purchase_message() {
        let package = Package {
            id: 3,
            amount: 1700,
            price: 999,
            bonus: 200,
            popular: true,
        };
        let notification = purchase(&package, Some(&promo("STANDOFF444", 44)), &Labels::default());
        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(notification.message, "Purchased 1900 Robux for 559₽");

        let notification = purchase(&package, None, &Labels::default());
        assert_eq!(notification.message, "Purchased 1900 Robux for 999₽");
    }

    #[test]
    fn test_receipt() {
        let package = Package {
            id: 3,
            amount: 1700,
            price: 999,
            bonus: 200,
            popular: true,
        };
        let issued_at = Utc::now();
        let receipt = receipt(&package, Some(&promo("STANDOFF444", 44)), issued_at);
        assert_eq!(receipt.package_id, 3);
        assert_eq!(receipt.total_amount, 1900);
        assert_eq!(receipt.base_price, 999);
        assert_eq!(receipt.final_price, 559);
        assert_eq!(receipt.promo_code.as_deref(), Some("STANDOFF444"));
        assert_eq!(receipt.issued_at, issued_at);
    }
}
