use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("promo code not found: {code:?}")]
    PromoNotFound { code: String },
    #[error("discount out of range: {0}%")]
    InvalidDiscount(u16),
    #[error("duplicate package id: {0}")]
    DuplicatePackage(u32),
    #[error("duplicate promo code: {0}")]
    DuplicatePromoCode(String),
    #[error("promo code must not be empty")]
    EmptyPromoCode,
    #[error("package {0}: amount plus bonus overflows")]
    AmountOverflow(u32),
    #[error("unknown package id: {0}")]
    UnknownPackage(u32),
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, StorefrontError>;
