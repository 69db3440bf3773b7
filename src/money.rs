//! Money Module
//!
//! All monetary arithmetic goes through this module.
//!
//! ## Representation
//! - Prices and amounts are `rust_decimal::Decimal` (96-bit mantissa, scale 0..=28)
//! - Multiplication is exact: no rounding is ever applied to a computed amount
//! - Overflow is an explicit error, never a panic or a silent wrap
//!
//! ## Usage
//! ```rust
//! use order_desk::money::line_amount;
//! use rust_decimal::Decimal;
//!
//! let amount = line_amount(Decimal::new(1500, 0), 5).unwrap();
//! assert_eq!(amount, Decimal::new(7500, 0));
//! ```

use rust_decimal::prelude::*;
use thiserror::Error;

/// Money arithmetic errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount too large, would overflow")]
    Overflow,

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Amount cannot be negative")]
    Negative,
}

/// `unit_price × quantity`, exact.
///
/// Negative inputs are accepted here; the entity layer does not validate.
pub fn line_amount(unit_price: Decimal, quantity: i32) -> Result<Decimal, MoneyError> {
    unit_price
        .checked_mul(Decimal::from(quantity))
        .ok_or(MoneyError::Overflow)
}

/// Most fractional digits a `Decimal` can hold
pub const MAX_SCALE: usize = 28;

/// Parse a client-supplied decimal string with strict formatting rules.
///
/// Rejects: empty strings, `.5`, `5.`, scientific notation, a `+` prefix,
/// more than [`MAX_SCALE`] fractional digits, and negative values.
pub fn parse_price(s: &str) -> Result<Decimal, MoneyError> {
    if s.is_empty() {
        return Err(MoneyError::InvalidFormat("empty string".into()));
    }
    if s.starts_with('.') {
        return Err(MoneyError::InvalidFormat("use 0.5 not .5".into()));
    }
    if s.ends_with('.') {
        return Err(MoneyError::InvalidFormat("use 5.0 not 5.".into()));
    }
    if s.contains('e') || s.contains('E') {
        return Err(MoneyError::InvalidFormat(
            "scientific notation not allowed".into(),
        ));
    }
    if s.starts_with('+') {
        return Err(MoneyError::InvalidFormat("+ prefix not allowed".into()));
    }

    let d = parse_exact(s)?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(MoneyError::Negative);
    }
    Ok(d.normalize())
}

/// Convert a JSON float to a Decimal through its shortest round-trip text.
///
/// `2399.00` arrives as `2399f64` and becomes `2399`; `599.99` stays `599.99`
/// instead of picking up binary noise.
pub fn price_from_f64(v: f64) -> Result<Decimal, MoneyError> {
    if !v.is_finite() {
        return Err(MoneyError::InvalidFormat("not a finite number".into()));
    }
    if v < 0.0 {
        return Err(MoneyError::Negative);
    }
    // f64 Display never uses exponent notation
    parse_exact(&v.to_string()).map(|d| d.normalize())
}

/// Plain decimal text to `Decimal` without rounding.
///
/// Too many fractional digits is `InvalidFormat`; an integer part beyond
/// `Decimal::MAX` is `Overflow`.
fn parse_exact(s: &str) -> Result<Decimal, MoneyError> {
    let digits = s.trim_start_matches('-');
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    if frac_part.len() > MAX_SCALE {
        return Err(MoneyError::InvalidFormat(format!(
            "more than {} decimal places",
            MAX_SCALE
        )));
    }

    Decimal::from_str_exact(s).map_err(|e| {
        let significant = int_part.trim_start_matches('0').len();
        if significant > MAX_SCALE {
            MoneyError::Overflow
        } else {
            MoneyError::InvalidFormat(e.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_amount_exact() {
        assert_eq!(
            line_amount(Decimal::new(1500, 0), 5).unwrap(),
            Decimal::new(7500, 0)
        );
        // 599.99 * 3 = 1799.97, no binary rounding drift
        assert_eq!(
            line_amount(Decimal::new(59999, 2), 3).unwrap(),
            Decimal::new(179997, 2)
        );
        // 0.1 * 3 is exactly 0.3
        assert_eq!(
            line_amount(Decimal::new(1, 1), 3).unwrap(),
            Decimal::new(3, 1)
        );
    }

    #[test]
    fn test_line_amount_zero_and_negative_accepted() {
        assert_eq!(line_amount(Decimal::new(699, 0), 0).unwrap(), Decimal::ZERO);
        assert_eq!(
            line_amount(Decimal::new(10, 0), -2).unwrap(),
            Decimal::new(-20, 0)
        );
    }

    #[test]
    fn test_line_amount_overflow() {
        assert_eq!(line_amount(Decimal::MAX, 2), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("2399.00").unwrap(), Decimal::new(2399, 0));
        assert_eq!(parse_price("0.5").unwrap(), Decimal::new(5, 1));
        assert!(matches!(parse_price(".5"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_price("5."), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_price("1e3"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_price("+1"), Err(MoneyError::InvalidFormat(_))));
        assert!(matches!(parse_price(""), Err(MoneyError::InvalidFormat(_))));
        assert_eq!(parse_price("-1.5"), Err(MoneyError::Negative));
        assert!(matches!(parse_price("1.2.3"), Err(MoneyError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_price_scale_limit() {
        let max_scale = format!("0.{}1", "0".repeat(MAX_SCALE - 1));
        assert_eq!(parse_price(&max_scale).unwrap(), Decimal::new(1, 28));

        let too_fine = format!("0.{}1", "0".repeat(MAX_SCALE));
        assert!(matches!(parse_price(&too_fine), Err(MoneyError::InvalidFormat(_))));

        let too_big = "1".repeat(30);
        assert_eq!(parse_price(&too_big), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_price_from_f64() {
        assert_eq!(price_from_f64(2399.00).unwrap(), Decimal::new(2399, 0));
        assert_eq!(price_from_f64(599.99).unwrap(), Decimal::new(59999, 2));
        assert_eq!(price_from_f64(0.0).unwrap(), Decimal::ZERO);
        assert_eq!(price_from_f64(-1.0), Err(MoneyError::Negative));
        assert!(price_from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_price_from_f64_rejects_sub_scale_values() {
        assert!(matches!(
            price_from_f64(1e-30),
            Err(MoneyError::InvalidFormat(_))
        ));
        assert_eq!(price_from_f64(1e-28).unwrap(), Decimal::new(1, 28));
        assert_eq!(price_from_f64(1e30), Err(MoneyError::Overflow));
    }
}
