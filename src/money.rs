//! Money Module
//!
//! Exact decimal monetary amounts with a fixed scale of 2 decimal places.
//!
//! ## Rules
//! 1. Every amount that reaches the ledger is a `rust_decimal::Decimal`, never a float
//! 2. The core REJECTS values with more than 2 significant decimal places
//! 3. The gateway normalizes client input with [`truncate_to_scale`] before it
//!    reaches the core (so "10.999" from a client becomes "10.99")
//! 4. Amounts and balances stay strictly below [`LIMIT`], the column capacity
//!
//! ## Usage
//! ```rust
//! use internal_transfers::money::{Money, parse_decimal_str};
//!
//! let raw = parse_decimal_str("30.5").unwrap();
//! let amount = Money::positive(raw).unwrap();
//! assert_eq!(amount.to_string(), "30.50");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Fixed number of decimal places for every amount in the ledger
pub const SCALE: u32 = 2;

/// Exclusive upper bound on any amount or balance (`NUMERIC(20, 2)` holds 18
/// integer digits)
pub const LIMIT: i64 = 1_000_000_000_000_000_000;

// ============================================================================
// Error Types
// ============================================================================

/// Money validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount must be positive")]
    NotPositive,

    #[error("Amount out of range: must be below {limit}")]
    OutOfRange { limit: i64 },

    #[error("Precision overflow: provided {provided} decimals, max allowed {max}")]
    PrecisionOverflow { provided: u32, max: u32 },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

// ============================================================================
// Money
// ============================================================================

/// Exact decimal amount, always carried at scale 2
///
/// Serialized as a string ("70.00") so no precision is lost in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Strictly positive amount (transfer amounts, initial balances)
    pub fn positive(value: Decimal) -> Result<Self, MoneyError> {
        if value <= Decimal::ZERO {
            return Err(MoneyError::NotPositive);
        }
        check_limit(value)?;
        Self::checked_scale(value)
    }

    /// Sum that must still fit under [`LIMIT`] (credits)
    pub fn checked_add(self, other: Money) -> Result<Self, MoneyError> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::OutOfRange { limit: LIMIT })?;
        check_limit(sum)?;
        Ok(Self(sum))
    }

    /// Wrap a value read back from a `NUMERIC(_, 2)` column
    pub(crate) fn from_stored(value: Decimal) -> Self {
        let mut v = value;
        v.rescale(SCALE);
        Self(v)
    }

    fn checked_scale(value: Decimal) -> Result<Self, MoneyError> {
        // Trailing zeros ("1.500") carry no extra precision
        let significant = value.normalize().scale();
        if significant > SCALE {
            return Err(MoneyError::PrecisionOverflow {
                provided: significant,
                max: SCALE,
            });
        }
        let mut v = value;
        v.rescale(SCALE);
        Ok(Self(v))
    }

    /// Inner decimal value (scale 2)
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.prec$}", self.0, prec = SCALE as usize)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

fn check_limit(value: Decimal) -> Result<(), MoneyError> {
    if value >= Decimal::from(LIMIT) {
        return Err(MoneyError::OutOfRange { limit: LIMIT });
    }
    Ok(())
}

// ============================================================================
// Client input helpers (gateway boundary)
// ============================================================================

/// Parse a client-supplied decimal string with strict formatting
///
/// Rejects empty strings, `.5`, `5.`, explicit `+`, and scientific notation.
/// The sign is preserved so the caller can report non-positive values itself.
pub fn parse_decimal_str(s: &str) -> Result<Decimal, MoneyError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }
    if s.starts_with('+') {
        return Err(MoneyError::InvalidFormat("explicit '+' sign".into()));
    }
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    if unsigned.starts_with('.') {
        return Err(MoneyError::InvalidFormat(
            "missing leading zero (e.g., use 0.5 instead of .5)".into(),
        ));
    }
    if unsigned.ends_with('.') {
        return Err(MoneyError::InvalidFormat(
            "missing fractional part (e.g., use 5.0 instead of 5.)".into(),
        ));
    }
    if !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(MoneyError::InvalidFormat(format!("invalid characters in '{}'", s)));
    }
    Decimal::from_str(s).map_err(|e| MoneyError::InvalidFormat(e.to_string()))
}

/// Drop digits beyond 2 decimal places (toward zero)
pub fn truncate_to_scale(value: Decimal) -> Decimal {
    value.trunc_with_scale(SCALE)
}
