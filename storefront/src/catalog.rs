use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, StorefrontError};
use crate::models::Package;
use crate::pricing::Labels;
use crate::promo::PromoTable;

/// Packages on sale, the promo codes that apply to them, and display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct Catalog {
    labels: Labels,
    packages: Vec<Package>,
    promo_codes: PromoTable,
}

/// On-disk shape of a catalog, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_currency_name")]
    pub currency_name: String,
    #[serde(default = "default_price_symbol")]
    pub price_symbol: String,
    pub packages: Vec<Package>,
    #[serde(default = "PromoTable::builtin")]
    pub promo_codes: PromoTable,
}

fn default_currency_name() -> String {
    Labels::default().currency_name
}

fn default_price_symbol() -> String {
    Labels::default().price_symbol
}

impl Default for Catalog {
    fn default() -> Self {
        let packages = [
            (1, 400, 299, 0, false),
            (2, 800, 549, 50, false),
            (3, 1700, 999, 200, true),
            (4, 4500, 2499, 500, false),
            (5, 10000, 4999, 1500, false),
            (6, 22500, 9999, 3500, false),
        ]
        .into_iter()
        .map(|(id, amount, price, bonus, popular)| Package {
            id,
            amount,
            price,
            bonus,
            popular,
        })
        .collect();

        Self {
            labels: Labels::default(),
            packages,
            promo_codes: PromoTable::builtin(),
        }
    }
}

impl Catalog {
    pub fn new(labels: Labels, packages: Vec<Package>, promo_codes: PromoTable) -> Result<Self> {
        let mut seen = HashSet::new();
        for package in &packages {
            if !seen.insert(package.id) {
                return Err(StorefrontError::DuplicatePackage(package.id));
            }
            if package.amount.checked_add(package.bonus).is_none() {
                return Err(StorefrontError::AmountOverflow(package.id));
            }
        }

        let popular = packages.iter().filter(|p| p.popular).count();
        if popular != 1 && !packages.is_empty() {
            tracing::warn!("Catalog has {} popular packages, expected exactly one", popular);
        }

        Ok(Self {
            labels,
            packages,
            promo_codes,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded catalog from {}: {} packages, {} promo codes",
            path.display(),
            catalog.packages.len(),
            catalog.promo_codes.len()
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, id: u32) -> Result<&Package> {
        self.packages
            .iter()
            .find(|p| p.id == id)
            .ok_or(StorefrontError::UnknownPackage(id))
    }

    pub fn promo_codes(&self) -> &PromoTable {
        &self.promo_codes
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = StorefrontError;

    fn try_from(file: CatalogFile) -> Result<Self> {
        Self::new(
            Labels {
                currency_name: file.currency_name,
                price_symbol: file.price_symbol,
            },
            file.packages,
            file.promo_codes,
        )
    }
}

impl From<Catalog> for CatalogFile {
    fn from(catalog: Catalog) -> Self {
        Self {
            currency_name: catalog.labels.currency_name,
            price_symbol: catalog.labels.price_symbol,
            packages: catalog.packages,
            promo_codes: catalog.promo_codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.packages().len(), 6);
        assert_eq!(catalog.packages().iter().filter(|p| p.popular).count(), 1);
        assert_eq!(catalog.package(3).unwrap().total_amount(), 1900);
        assert_eq!(catalog.promo_codes().len(), 4);
        assert_eq!(catalog.labels().currency_name, "Robux");
    }

    #[test]
    fn test_unknown_package() {
        let catalog = Catalog::default();
        assert!(matches!(
            catalog.package(42),
            Err(StorefrontError::UnknownPackage(42))
        ));
    }

    #[test]
    fn test_from_json_with_defaults() {
        let catalog = Catalog::from_json(
            r#"{"packages":[{"id":7,"amount":100,"price":99,"bonus":5,"popular":true}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.packages().len(), 1);
        assert_eq!(catalog.labels(), &Labels::default());
        assert_eq!(catalog.promo_codes(), &PromoTable::builtin());
    }

    #[test]
    fn test_from_json_full_shape() {
        let catalog = Catalog::from_json(
            r#"{
                "currency_name": "Gems",
                "price_symbol": "$",
                "packages": [
                    {"id": 1, "amount": 50, "price": 5, "bonus": 0, "popular": false},
                    {"id": 2, "amount": 120, "price": 10, "bonus": 20, "popular": true}
                ],
                "promo_codes": [{"code": "launch", "discount_percent": 25}]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.labels().currency_name, "Gems");
        assert_eq!(catalog.labels().price(10), "10$");
        assert_eq!(catalog.promo_codes().get("LAUNCH").map(|d| d.percent()), Some(25));
        assert!(catalog.promo_codes().get("START10").is_none());
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let result = Catalog::from_json(
            r#"{"packages":[{"id":1,"amount":1,"price":1},{"id":1,"amount":2,"price":2}]}"#,
        );
        assert!(matches!(result, Err(StorefrontError::Parse(_))));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let package = Catalog::default().packages()[0];
        let result = Catalog::new(Labels::default(), vec![package, package], PromoTable::new());
        assert!(matches!(result, Err(StorefrontError::DuplicatePackage(1))));
    }

    #[test]
    fn test_rejects_overflowing_total_amount() {
        let package = Package {
            id: 1,
            amount: u64::MAX,
            price: 1,
            bonus: 1,
            popular: true,
        };
        let result = Catalog::new(Labels::default(), vec![package], PromoTable::new());
        assert!(matches!(result, Err(StorefrontError::AmountOverflow(1))));

        let result = Catalog::from_json(
            r#"{"packages":[{"id":1,"amount":18446744073709551615,"price":1,"bonus":1,"popular":true}]}"#,
        );
        assert!(matches!(result, Err(StorefrontError::Parse(_))));

        let package = Package { bonus: 0, ..package };
        let catalog = Catalog::new(Labels::default(), vec![package], PromoTable::new()).unwrap();
        assert_eq!(catalog.package(1).unwrap().total_amount(), u64::MAX);
    }

    #[test]
    fn test_from_json_rejects_bad_discount() {
        let result = Catalog::from_json(
            r#"{"packages":[],"promo_codes":[{"code":"X","discount_percent":250}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let catalog = Catalog::default();
        let json = catalog.to_json().unwrap();
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn test_example_catalog_matches_builtin() {
        let catalog = Catalog::from_json(include_str!("../../catalog.example.json")).unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/storefront-catalog.json");
        assert!(matches!(result, Err(StorefrontError::Io(_))));
    }
}
