//! Error types for the state model
//!
//! Comprehensive error taxonomy using thiserror. These cover value-type
//! construction and arithmetic only; business-rule rejections live in
//! the contract layer.

use crate::money::Currency;
use thiserror::Error;

/// State-model errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Amount must be positive: got {quantity} {currency}")]
    NonPositiveAmount { quantity: i64, currency: Currency },

    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    #[error("Arithmetic overflow in amount calculation")]
    Overflow,

    #[error("Lender and borrower cannot share an identity: {name}")]
    SharedIdentity { name: String },
}
