use anyhow::bail;
use serde_with::DeserializeFromStr;

use std::{
    fmt::{Debug, Display},
    ops::AddAssign,
    str::FromStr,
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored internally as an integer number of cents, but the
/// [`Display`] implementation formats it in currency style: dollar sign,
/// thousands separators, two decimal places.
///
/// ```
/// use order_split::Usd;
/// assert_eq!(Usd::from_cents(123_456_789).to_string(), "$1,234,567.89");
/// ```
#[derive(Clone, Copy, Default, DeserializeFromStr, Eq, PartialEq, Ord, PartialOrd)]
pub struct Usd(i64);

impl Usd {
    /// Creates an amount from a whole number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount as a whole number of cents.
    #[must_use]
    pub const fn as_cents(self) -> i64 {
        self.0
    }

    /// Multiplies the amount by a unit count, returning `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Self)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let mut dollars = String::new();
        for (i, digit) in (cents / 100).to_string().chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                dollars.push(',');
            }
            dollars.push(digit);
        }
        let dollars: String = dollars.chars().rev().collect();
        write!(f, "{sign}${dollars}.{:02}", cents % 100)
    }
}

impl FromStr for Usd {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let raw = s.trim().trim_start_matches('$').replace(',', "");
        let (sign, digits) = match raw.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, raw.as_str()),
        };
        if digits.is_empty() {
            bail!("empty money amount {s:?}");
        }
        let (dollars, cents) = match digits.split_once('.') {
            Some((d, c)) => (d, c),
            None => (digits, ""),
        };
        let dollars: i64 = if dollars.is_empty() { 0 } else { dollars.parse()? };
        let cents: i64 = match cents.len() {
            0 => 0,
            1 => cents.parse::<i64>()? * 10,
            2 => cents.parse()?,
            _ => bail!("too many decimal places in money amount {s:?}"),
        };
        let Some(total) = dollars.checked_mul(100).and_then(|d| d.checked_add(cents)) else {
            bail!("money amount {s:?} is out of range");
        };
        Ok(Self(sign * total))
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
