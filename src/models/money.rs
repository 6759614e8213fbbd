//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 paise/cents) to avoid
//! floating-point precision issues. Provides safe arithmetic and
//! currency-aware formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Fraction of `self` over `whole`, as an f64 (0.0 when `whole` is zero)
    pub fn fraction_of(&self, whole: Money) -> f64 {
        if whole.0 == 0 {
            0.0
        } else {
            self.0 as f64 / whole.0 as f64
        }
    }

    /// Format with a currency symbol and locale-style digit grouping
    ///
    /// INR uses en-IN grouping (`₹1,23,456.78`); everything else groups
    /// digits in threes. Unknown currency codes are used as a prefix.
    pub fn format(&self, currency: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.abs().format_plain(currency == "INR");
        match currency {
            "INR" => format!("{}₹{}", sign, digits),
            "USD" => format!("{}${}", sign, digits),
            "EUR" => format!("{}€{}", sign, digits),
            "GBP" => format!("{}£{}", sign, digits),
            "JPY" => format!("{}¥{}", sign, digits),
            other => format!("{} {}{}", other, sign, digits),
        }
    }

    fn format_plain(&self, indian_grouping: bool) -> String {
        let minor = self.0.abs();
        let units = (minor / 100).to_string();
        let cents = minor % 100;
        let grouped = if indian_grouping {
            group_indian(&units)
        } else {
            group_thousands(&units)
        };
        format!("{}.{:02}", grouped, cents)
    }
}

/// Group digits in threes: 1234567 -> 1,234,567
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Group digits en-IN style: last three, then twos: 1234567 -> 12,34,567
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::new();
    let offset = head.len() % 2;
    for (i, c) in head.chars().enumerate() {
        if i != 0 && (i + 2 - offset) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let minor = self.0.abs();
        write!(f, "{}{}.{:02}", sign, minor / 100, minor % 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}
