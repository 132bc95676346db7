//! Exact decimal currency amounts.
//!
//! Statement amounts are kept exactly as exported (spend negative, credits
//! positive); no floating point is involved anywhere in the pipeline.
//! Amounts that cannot be held without rounding are rejected at parse time,
//! and sums that leave the representable range are errors, never panics.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::ops::Neg;
use thiserror::Error;

/// Currency sigil accepted in front of amounts
pub const SIGIL: char = '$';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to parse {input:?} as currency")]
pub struct ParseMoneyError {
    pub input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amount out of range: {lhs} {op} {rhs}")]
pub struct MoneyOverflowError {
    pub lhs: Money,
    pub op: char,
    pub rhs: Money,
}

/// An exact decimal amount of money
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Whole currency units, e.g. `Money::from_units(1000)` is $1000.
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse `12.50`, `$12.50`, `-$12.50` or `$-12.50`.
    ///
    /// Fails rather than rounds when the digits do not fit exactly.
    pub fn parse(input: &str) -> Result<Self, ParseMoneyError> {
        let err = || ParseMoneyError {
            input: input.to_string(),
        };

        let s = input.trim();
        let signed = s.starts_with(['-', '+']);
        let negative = s.starts_with('-');
        let rest = if signed { &s[1..] } else { s };

        // A sign is allowed on one side of the sigil, not both.
        let rest = match rest.strip_prefix(SIGIL) {
            Some(after) if signed && after.starts_with(['-', '+']) => return Err(err()),
            Some(after) => after,
            None if signed && rest.starts_with(['-', '+']) => return Err(err()),
            None => rest,
        };
        if rest.is_empty() {
            return Err(err());
        }

        let value = Decimal::from_str_exact(rest).map_err(|_| err())?;
        Ok(Self(if negative { -value } else { value }))
    }

    /// Exact `self + rhs`. Results that would need rounding are out of range too.
    pub fn checked_add(self, rhs: Money) -> Result<Money, MoneyOverflowError> {
        exact(self.0.checked_add(rhs.0), self, '+', rhs)
    }

    /// Exact `self - rhs`. Results that would need rounding are out of range too.
    pub fn checked_sub(self, rhs: Money) -> Result<Money, MoneyOverflowError> {
        exact(self.0.checked_sub(rhs.0), self, '-', rhs)
    }

    /// Exact sum of all amounts, failing on the first out-of-range step.
    pub fn checked_sum<I>(amounts: I) -> Result<Money, MoneyOverflowError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(m))
    }
}

// rust_decimal drops fractional digits instead of failing when a result
// needs more precision than it holds; a lost scale means a rounded result.
fn exact(result: Option<Decimal>, lhs: Money, op: char, rhs: Money) -> Result<Money, MoneyOverflowError> {
    let scale = lhs.0.scale().max(rhs.0.scale());
    match result {
        Some(value) if value.scale() >= scale => Ok(Money(value)),
        _ => Err(MoneyOverflowError { lhs, op, rhs }),
    }
}

impl std::str::FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl fmt::Display for Money {
    /// Exact decimal without trailing fractional zeros (`250.00` -> `250`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}
