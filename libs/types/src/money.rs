//! Money types for the obligation ledger
//!
//! Amounts are 64-bit integer minor units (cents) tagged with an
//! ISO 4217 currency. All arithmetic is checked: overflow and
//! cross-currency operations surface as errors, never panics or wraps.

use crate::errors::StateError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217 currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound
    GBP,
    /// UAE Dirham
    AED,
    /// Indian Rupee
    INR,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AED => "AED",
            Currency::INR => "INR",
        }
    }

    /// Parse from a 3-letter code
    pub fn from_code(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "AED" => Some(Currency::AED),
            "INR" => Some(Currency::INR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A quantity of money in a single currency
///
/// The quantity is in minor units (e.g. cents for USD). The type is
/// deliberately permissive: negative quantities are representable so
/// that intermediate arithmetic stays total, and constructors that
/// require positivity live on the operations that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    quantity: i64,
    currency: Currency,
}

impl Amount {
    /// Create an amount from minor units
    pub fn new(quantity: i64, currency: Currency) -> Self {
        Self { quantity, currency }
    }

    /// Zero in the given currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            quantity: 0,
            currency,
        }
    }

    /// Quantity in minor units
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Currency tag
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// True if the quantity is strictly positive
    pub fn is_positive(&self) -> bool {
        self.quantity > 0
    }

    /// True if the quantity is zero
    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// Checked same-currency addition
    pub fn checked_add(&self, other: Amount) -> Result<Amount, StateError> {
        self.require_same_currency(other)?;
        let quantity = self
            .quantity
            .checked_add(other.quantity)
            .ok_or(StateError::Overflow)?;
        Ok(Amount::new(quantity, self.currency))
    }

    /// Checked same-currency subtraction
    pub fn checked_sub(&self, other: Amount) -> Result<Amount, StateError> {
        self.require_same_currency(other)?;
        let quantity = self
            .quantity
            .checked_sub(other.quantity)
            .ok_or(StateError::Overflow)?;
        Ok(Amount::new(quantity, self.currency))
    }

    fn require_same_currency(&self, other: Amount) -> Result<(), StateError> {
        if self.currency != other.currency {
            return Err(StateError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Amount {
    /// Minor units followed by the currency code, e.g. `10000 USD`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.currency)
    }
}
