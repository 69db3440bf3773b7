//! Money types for API boundary enforcement
//!
//! - `StrictDecimal`: Format-validated, non-negative price input

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

use crate::money::{self, MoneyError};

/// Strict, non-negative Decimal validated during deserialization.
///
/// Accepts either a JSON number (`2399.00`) or a decimal string (`"2399.00"`).
/// Strings go through the strict format checks in [`money::parse_price`]:
/// - Rejects `.5` (must be `0.5`)
/// - Rejects `5.` (must be `5.0` or `5`)
/// - Rejects scientific notation and a `+` prefix
/// - Rejects empty strings
///
/// Negative values are rejected in both forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrictDecimal(Decimal);

impl StrictDecimal {
    /// Get the inner Decimal value
    pub fn inner(self) -> Decimal {
        self.0
    }
}

impl std::ops::Deref for StrictDecimal {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

struct StrictDecimalVisitor;

impl serde::de::Visitor<'_> for StrictDecimalVisitor {
    type Value = StrictDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative decimal number or decimal string")
    }

    fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
        money::parse_price(s).map(StrictDecimal).map_err(reject)
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
        money::price_from_f64(v).map(StrictDecimal).map_err(reject)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(StrictDecimal(Decimal::from(v)))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        if v < 0 {
            return Err(reject(MoneyError::Negative));
        }
        Ok(StrictDecimal(Decimal::from(v)))
    }
}

fn reject<E: serde::de::Error>(e: MoneyError) -> E {
    E::custom(match e {
        MoneyError::Negative => "Amount cannot be negative".to_string(),
        MoneyError::InvalidFormat(msg) => format!("Invalid format: {}", msg),
        MoneyError::Overflow => "Amount too large".to_string(),
    })
}

impl<'de> Deserialize<'de> for StrictDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(StrictDecimalVisitor)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
