//! # Money Module
//!
//! Provides the `Money` type for balances and game prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    40.00 - 20.00 × 0.9 = 22.000000000000004  ❌                         │
//! │                                                                         │
//! │  With integer cents:                                                    │
//! │    4000 - 2000 × 9000 / 10000 = 2200          ✅                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use arcade_core::money::Money;
//!
//! let price = Money::from_major_minor(20, 0); // $20.00
//! let credit = Money::parse_decimal("40.00").unwrap();
//! assert_eq!((credit - price).cents(), 2000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;
use crate::tier::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed: customer balances may go negative (credit top-ups are not
/// validated), and game prices are checked separately by the game factory.
///
/// Arithmetic saturates at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal amount such as `"40"`, `"20.5"` or `"-3.25"`.
    ///
    /// At most two fractional digits are accepted.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("20.5").unwrap().cents(), 2050);
    /// assert_eq!(Money::parse_decimal(" -3.25 ").unwrap().cents(), -325);
    /// assert!(Money::parse_decimal("1.234").is_err());
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }
        if minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("at most two decimal places are allowed"));
        }

        let major: i64 = major
            .parse()
            .map_err(|_| invalid("amount is too large"))?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => minor.parse().map_err(|_| invalid("bad cents"))?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Whole units rounded toward negative infinity.
    ///
    /// This is the `floor(price)` used by the purchase points formulas.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1999).floor_units(), 19);
    /// assert_eq!(Money::from_cents(-50).floor_units(), -1);
    /// ```
    #[inline]
    pub const fn floor_units(&self) -> i64 {
        self.0.div_euclid(100)
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

    /// Returns the price left after taking `rate` off, rounded up to the
    /// next whole cent. The store never charges less than the exact
    /// discounted price.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    /// use arcade_core::tier::DiscountRate;
    ///
    /// let price = Money::from_cents(2000); // $20.00
    /// let paid = price.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(paid.cents(), 1800);
    ///
    /// // exact price is 13.5 cents
    /// assert_eq!(Money::from_cents(15).apply_discount(DiscountRate::from_bps(1000)).cents(), 14);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 keeps large balances from overflowing mid-calculation
        let scaled = self.0 as i128 * rate.remaining_bps() as i128;
        let mut paid = scaled.div_euclid(BPS_SCALE);
        if scaled.rem_euclid(BPS_SCALE) != 0 {
            paid += 1;
        }
        Money::from_cents(clamp_cents(paid))
    }

    /// Whether this amount covers `price` after `rate` is taken off, compared
    /// exactly: `self >= price × (1 - rate)` with no rounding.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    /// use arcade_core::tier::DiscountRate;
    ///
    /// let ten_percent = DiscountRate::from_bps(1000);
    /// assert!(Money::from_cents(1800).covers(Money::from_cents(2000), ten_percent));
    /// assert!(!Money::from_cents(13).covers(Money::from_cents(15), ten_percent));
    /// ```
    pub fn covers(&self, price: Money, rate: DiscountRate) -> bool {
        self.0 as i128 * BPS_SCALE >= price.0 as i128 * rate.remaining_bps() as i128
    }

    /// Adds `other`, clamping at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts `other`, clamping at the `i64` bounds.
    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Basis points in one whole (100%).
const BPS_SCALE: i128 = 10_000;

fn clamp_cents(value: i128) -> i64 {
    value.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. Presentation layers format amounts themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = self.saturating_sub(other);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
