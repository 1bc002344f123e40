//! Amount type for handling the monetary value of an expense.
//!
//! This module provides the `Amount` type which wraps a finite `f64` and handles parsing the text
//! a user typed into it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::num::ParseFloatError;
use std::str::FromStr;

/// Represents the amount of an expense in dollars.
///
/// The value is always finite. It is stored on disk as a bare JSON number and displayed with a
/// dollar sign, thousands separators and two decimal places.
///
/// # Examples
///
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str(" 1234.5 ").unwrap();
/// assert_eq!(amount.value(), 1234.5);
/// assert_eq!(amount.to_string(), "$1,234.50");
/// ```
///
/// Text that is not a finite number is rejected:
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// assert!(Amount::from_str("abc").is_err());
/// assert!(Amount::from_str("inf").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Creates a new `Amount`, returning an error if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(AmountError::NotFinite(value))
        }
    }

    /// Returns the underlying value.
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

/// An error that can occur when parsing strings into `Amount` values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmountError {
    #[error(transparent)]
    Parse(#[from] ParseFloatError),
    #[error("{0} is not a finite number")]
    NotFinite(f64),
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = f64::from_str(s.trim())?;
        Amount::new(value)
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let num = self.0.abs();
        write!(f, "{sign}${}", format_num::format_num!(",.2", num))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Amount::new(value).map_err(serde::de::Error::custom)
    }
}
