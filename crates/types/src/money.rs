//! Fixed-point monetary amounts.
//!
//! Every price, cost, revenue and profit figure is an exact count of cents.
//! Binary floating point never enters the arithmetic:
//! - $5.00 → `Cents(500)`
//! - $0.04 → `Cents(4)`
//! - -$358.80 → `Cents(-35_880)`
//!
//! Conversion to a dollar string happens only at the display boundary.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};
use std::str::FromStr;

/// A signed amount of money, in whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Build an amount from whole dollars and cents, e.g. `from_dollars(4, 20)` = $4.20.
    pub const fn from_dollars(dollars: i64, cents: i64) -> Self {
        Cents(dollars * 100 + cents)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Cents {
    /// Two-decimal dollar rendering without a currency sign: `415.20`, `-358.80`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Cents {
    type Err = ValidationError;

    /// Parse a decimal dollar amount such as `"4.2"`, `"4.20"`, `"4"` or `"-1.05"`.
    ///
    /// Digits past the second decimal place round half-up on the magnitude:
    /// `"4.205"` → 421, `"4.2049"` → 420, `"-4.205"` → -421.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidAmount { value: s.to_string() };

        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digits: Vec<i64> = frac.bytes().map(|b| i64::from(b - b'0')).collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = digits.get(2).is_some_and(|&d| d >= 5);

        let magnitude = dollars
            .checked_mul(100)
            .and_then(|v| v.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .ok_or_else(invalid)?;

        Ok(Cents(if negative { -magnitude } else { magnitude }))
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Sub for Cents {
    type Output = Cents;

    fn sub(self, rhs: Cents) -> Cents {
        Cents(self.0 - rhs.0)
    }
}

impl Neg for Cents {
    type Output = Cents;

    fn neg(self) -> Cents {
        Cents(-self.0)
    }
}

/// Scale an amount by a head count (price × attendance, cost × attendees).
impl Mul<i64> for Cents {
    type Output = Cents;

    fn mul(self, count: i64) -> Cents {
        Cents(self.0 * count)
    }
}
