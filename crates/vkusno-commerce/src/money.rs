//! Money type for representing prices.
//!
//! The storefront prices everything in whole rubles, so amounts are plain
//! integers with no minor unit. Arithmetic saturates: pricing must stay a total
//! function over any cart the UI can build.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Symbol shown after every amount.
pub const RUBLE_SIGN: &str = "\u{20bd}";

/// An amount of whole rubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rubles.
    pub const ZERO: Money = Money(0);

    /// Create a new amount.
    pub const fn rub(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in rubles.
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiply by a quantity.
    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Subtract, flooring at zero.
    pub fn saturating_sub_to_zero(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Format as a display string (e.g., "299 ₽").
    pub fn display(&self) -> String {
        format!("{} {}", self.0, RUBLE_SIGN)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::rub(299).display(), "299 \u{20bd}");
        assert_eq!(Money::ZERO.to_string(), "0 \u{20bd}");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::rub(1000);
        let b = Money::rub(199);
        assert_eq!(a + b, Money::rub(1199));
        assert_eq!(a - b, Money::rub(801));
        assert_eq!(b * 3, Money::rub(597));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::rub(299), Money::rub(189), Money::rub(159)]
            .iter()
            .sum();
        assert_eq!(total, Money::rub(647));
    }

    #[test]
    fn test_money_saturates() {
        let max = Money::rub(i64::MAX);
        assert_eq!(max + Money::rub(1), max);
        assert_eq!(max.times(2), max);
        assert_eq!(Money::rub(5).saturating_sub_to_zero(Money::rub(9)), Money::ZERO);
    }

    #[test]
    fn test_money_deserializes_from_integer() {
        let m: Money = serde_json::from_str("1000").unwrap();
        assert_eq!(m, Money::rub(1000));
    }
}
