use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StorefrontError;

/// A purchasable bundle of virtual currency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Package {
    pub id: u32,
    pub amount: u64,
    pub price: u64,
    #[serde(default)]
    pub bonus: u64,
    #[serde(default)]
    pub popular: bool,
}

impl Package {
    /// Currency granted on purchase, bonus included.
    ///
    /// `Catalog` rejects packages where this would overflow.
    pub fn total_amount(&self) -> u64 {
        self.amount + self.bonus
    }

    pub fn has_bonus(&self) -> bool {
        self.bonus > 0
    }
}

/// Percentage discount, always within `0..=100`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u16", into = "u8")]
pub struct Discount(u8);

impl Discount {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> crate::Result<Self> {
        Self::try_from(u16::from(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u16> for Discount {
    type Error = StorefrontError;

    fn try_from(percent: u16) -> Result<Self, Self::Error> {
        if percent > u16::from(Self::MAX) {
            return Err(StorefrontError::InvalidDiscount(percent));
        }
        Ok(Self(percent as u8))
    }
}

impl From<Discount> for u8 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The single promo currently active for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedPromo {
    pub code: String,
    pub discount: Discount,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Record of a confirmed (simulated) purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    pub package_id: u32,
    pub total_amount: u64,
    pub base_price: u64,
    pub final_price: u64,
    pub promo_code: Option<String>,
    pub issued_at: DateTime<Utc>,
}
