//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    113.00 × 0.2 = 22.600000000000001  ❌ WRONG!                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    11300 cents × 2000 bps / 10000 = 2260 cents  ✅ EXACT                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::money::Money;
//!
//! // Create from cents (preferred)
//! let steak = Money::from_cents(450); // 4.50
//!
//! // Checked arithmetic: None instead of overflow
//! let two_steaks = steak.checked_mul_quantity(2).unwrap();           // 9.00
//! let with_cola = two_steaks.checked_add(Money::from_cents(50)).unwrap(); // 9.50
//! assert_eq!(with_cola.to_string(), "9.50");
//!
//! // Parse from a menu file
//! let cola: Money = "0.50".parse().unwrap();
//! assert_eq!(cola.cents(), 50);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::ChargeRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing can see a negative amount, validation rejects it
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, serialized as cents
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  MenuItem.unit_cost ──► OrderLine.line_total ──► Bill.item_total        │
/// │                                                          │              │
/// │                               ServiceChargePolicy ◄──────┘              │
/// │                                      │                                  │
/// │                                      ▼                                  │
/// │                             Bill.service_charge ──► Bill.total()        │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents 4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Takes a percentage of this amount, rounded to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds halves up (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    /// use cafe_core::types::ChargeRate;
    ///
    /// let item_total = Money::from_cents(700);   // 7.00
    /// let rate = ChargeRate::from_bps(2000);     // 20%
    ///
    /// assert_eq!(item_total.percentage(rate).cents(), 140); // 1.40
    /// ```
    pub fn percentage(&self, rate: ChargeRate) -> Money {
        // i128 so that large totals cannot overflow mid-calculation
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let cola = Money::from_cents(50);
    /// assert_eq!(cola.checked_mul_quantity(4).unwrap().cents(), 200);
    /// assert!(Money::from_cents(i64::MAX).checked_mul_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two decimal places, no currency symbol. Honors width and alignment.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}{}.{:02}", sign, self.major().abs(), self.minor());
        f.pad(&text)
    }
}

/// Parses decimal strings such as `"4.50"`, `"4.5"` or `"4"`.
///
/// At most two fraction digits are accepted; anything finer than a cent
/// is rejected instead of being silently rounded.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number like 4.50"));
        }
        if !minor.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number like 4.50"));
        }
        if minor.len() > 2 {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let major: i64 = major.parse().map_err(|_| invalid("amount is too large"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => minor.parse().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Unchecked; callers summing untrusted amounts use [`Money::checked_add`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(840).to_string(), "8.40");
        assert_eq!(Money::from_cents(13300).to_string(), "133.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(format!("{:>7}", Money::from_cents(140)), "   1.40");
    }

    #[test]
    fn test_parse() {
        assert_eq!("4.50".parse::<Money>().unwrap().cents(), 450);
        assert_eq!("4.5".parse::<Money>().unwrap().cents(), 450);
        assert_eq!("4".parse::<Money>().unwrap().cents(), 400);
        assert_eq!(" 0.05 ".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("-1.25".parse::<Money>().unwrap().cents(), -125);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".50".parse::<Money>().is_err());
        assert!("4.505".parse::<Money>().is_err());
        assert!("four".parse::<Money>().is_err());
        assert!("4,50".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(450);
        let b = Money::from_cents(50);

        assert_eq!((a + b).cents(), 500);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(500)));
        assert_eq!(a.checked_mul_quantity(25), Some(Money::from_cents(11250)));
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Money::from_cents(i64::MAX);
        assert_eq!(huge.checked_add(Money::from_cents(1)), None);
        assert_eq!(huge.checked_mul_quantity(2), None);
        assert_eq!(huge.checked_mul_quantity(1), Some(huge));
    }

    #[test]
    fn test_percentage_exact() {
        // 113.00 at 20% = 22.60, no float drift
        let total = Money::from_cents(11300);
        assert_eq!(total.percentage(ChargeRate::from_bps(2000)).cents(), 2260);

        // 201.00 at 10% = 20.10
        let total = Money::from_cents(20100);
        assert_eq!(total.percentage(ChargeRate::from_bps(1000)).cents(), 2010);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 0.25 at 10% = 0.025 -> 0.03
        let total = Money::from_cents(25);
        assert_eq!(total.percentage(ChargeRate::from_bps(1000)).cents(), 3);

        // 0.24 at 10% = 0.024 -> 0.02
        let total = Money::from_cents(24);
        assert_eq!(total.percentage(ChargeRate::from_bps(1000)).cents(), 2);
    }
}
