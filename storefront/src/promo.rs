use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};
use crate::models::{AppliedPromo, Discount};

/// A promo code entry as it appears in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromoCode {
    pub code: String,
    pub discount_percent: Discount,
}

/// Lookup table from canonical promo code to discount.
///
/// Codes are stored normalized (trimmed, uppercase), so lookups are
/// case-insensitive regardless of how the table was configured. Entries
/// keep the order they were added in, which is the order they are advertised.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<PromoCode>", into = "Vec<PromoCode>")]
pub struct PromoTable {
    codes: Vec<(String, Discount)>,
}

/// Canonical form of user-entered promo input.
pub fn normalize_code(input: &str) -> String {
    input.trim().to_uppercase()
}

impl PromoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (code, percent) in [("START10", 10), ("MEGA20", 20), ("VIP50", 50), ("STANDOFF444", 44)] {
            // Built-in entries are known valid
            if let Ok(discount) = Discount::new(percent) {
                table.codes.push((code.to_string(), discount));
            }
        }
        table
    }

    pub fn insert(&mut self, code: &str, discount: Discount) -> Result<()> {
        let code = normalize_code(code);
        if code.is_empty() {
            return Err(StorefrontError::EmptyPromoCode);
        }
        if self.get(&code).is_some() {
            return Err(StorefrontError::DuplicatePromoCode(code));
        }
        self.codes.push((code, discount));
        Ok(())
    }

    pub fn with_code(mut self, code: &str, discount: Discount) -> Result<Self> {
        self.insert(code, discount)?;
        Ok(self)
    }

    /// Looks up already-normalized input.
    pub fn get(&self, code: &str) -> Option<Discount> {
        self.codes
            .iter()
            .find(|(known, _)| known == code)
            .map(|(_, discount)| *discount)
    }

    pub fn codes(&self) -> impl Iterator<Item = (&str, Discount)> {
        self.codes.iter().map(|(code, discount)| (code.as_str(), *discount))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Largest discount on offer, used for the "up to N%" teaser.
    pub fn max_discount(&self) -> Option<Discount> {
        self.codes.iter().map(|(_, discount)| *discount).max()
    }
}

impl TryFrom<Vec<PromoCode>> for PromoTable {
    type Error = StorefrontError;

    fn try_from(entries: Vec<PromoCode>) -> Result<Self> {
        let mut table = Self::new();
        for entry in entries {
            table.insert(&entry.code, entry.discount_percent)?;
        }
        Ok(table)
    }
}

impl From<PromoTable> for Vec<PromoCode> {
    fn from(table: PromoTable) -> Self {
        table
            .codes
            .into_iter()
            .map(|(code, discount_percent)| PromoCode {
                code,
                discount_percent,
            })
            .collect()
    }
}

/// Resolves user input against the table.
///
/// Input is trimmed and uppercased first. Empty input never matches.
pub fn apply_promo(input: &str, table: &PromoTable) -> Result<AppliedPromo> {
    let code = normalize_code(input);
    match table.get(&code) {
        Some(discount) if !code.is_empty() => {
            tracing::debug!("Promo code {} resolved to {}", code, discount);
            Ok(AppliedPromo { code, discount })
        }
        _ => {
            tracing::debug!("Promo code {:?} not found", code);
            Err(StorefrontError::PromoNotFound { code })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_promo_case_insensitive() {
        let table = PromoTable::builtin();
        let promo = apply_promo("start10", &table).unwrap();
        assert_eq!(promo.code, "START10");
        assert_eq!(promo.discount.percent(), 10);

        let promo = apply_promo("Vip50", &table).unwrap();
        assert_eq!(promo.code, "VIP50");
        assert_eq!(promo.discount.percent(), 50);
    }

    #[test]
    fn test_apply_promo_trims_whitespace() {
        let table = PromoTable::builtin();
        let promo = apply_promo("  standoff444\t", &table).unwrap();
        assert_eq!(promo.code, "STANDOFF444");
        assert_eq!(promo.discount.percent(), 44);
    }

    #[test]
    fn test_apply_promo_not_found() {
        let table = PromoTable::builtin();
        assert!(matches!(
            apply_promo("bogus", &table),
            Err(StorefrontError::PromoNotFound { code }) if code == "BOGUS"
        ));
        assert!(matches!(
            apply_promo("", &table),
            Err(StorefrontError::PromoNotFound { .. })
        ));
        assert!(matches!(
            apply_promo("   ", &table),
            Err(StorefrontError::PromoNotFound { .. })
        ));
    }

    #[test]
    fn test_apply_promo_is_idempotent() {
        let table = PromoTable::builtin();
        let first = apply_promo("mega20", &table).unwrap();
        let second = apply_promo("MEGA20", &table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_injected_table() {
        let table = PromoTable::new()
            .with_code("free", Discount::new(100).unwrap())
            .unwrap()
            .with_code("zero", Discount::new(0).unwrap())
            .unwrap();

        assert_eq!(apply_promo("FREE", &table).unwrap().discount.percent(), 100);
        assert_eq!(apply_promo("zero", &table).unwrap().discount.percent(), 0);
        assert!(apply_promo("start10", &table).is_err());
    }

    #[test]
    fn test_insert_rejects_empty_and_duplicates() {
        let mut table = PromoTable::new();
        let discount = Discount::new(15).unwrap();
        assert!(matches!(
            table.insert("  ", discount),
            Err(StorefrontError::EmptyPromoCode)
        ));
        table.insert("spring", discount).unwrap();
        assert!(matches!(
            table.insert("SPRING ", discount),
            Err(StorefrontError::DuplicatePromoCode(code)) if code == "SPRING"
        ));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_codes_keep_insertion_order() {
        let advertised: Vec<_> = PromoTable::builtin().codes().map(|(code, _)| code.to_string()).collect();
        assert_eq!(advertised, vec!["START10", "MEGA20", "VIP50", "STANDOFF444"]);

        let table: PromoTable = serde_json::from_str(
            r#"[{"code":"zeta","discount_percent":5},{"code":"alpha","discount_percent":7}]"#,
        )
        .unwrap();
        let codes: Vec<_> = table.codes().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["ZETA", "ALPHA"]);
        let entries: Vec<PromoCode> = table.into();
        assert_eq!(entries[0].code, "ZETA");
    }

    #[test]
    fn test_promo_table_json_shape() {
        let table: PromoTable = serde_json::from_str(
            r#"[{"code":"summer5","discount_percent":5},{"code":"VIP50","discount_percent":50}]"#,
        )
        .unwrap();
        assert_eq!(table.get("SUMMER5").map(Discount::percent), Some(5));
        assert_eq!(table.max_discount().map(Discount::percent), Some(50));

        assert!(
            serde_json::from_str::<PromoTable>(r#"[{"code":"BAD","discount_percent":101}]"#)
                .is_err()
        );
    }
}
