//! Amount type for handling monetary values with optional dollar signs.
//!
//! This module provides the `Amount` type which wraps a finite `f64` and handles
//! parsing values that may or may not include a dollar sign and commas.

use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Represents how dollar amounts were (or should be) formatted.
///
/// # Examples
///  - `AmountFormat{ dollar: true, commas: true }` -> `-$60,000.00`
///  - `AmountFormat{ dollar: false, commas: true }` -> `-60,000.00`
///  - `AmountFormat{ dollar: false, commas: false }` -> `-60000.00`
///  - `AmountFormat{ dollar: true, commas: false }` -> `-$60000.00`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmountFormat {
    /// Whether a dollar sign is present in the formatting.
    dollar: bool,
    /// Whether commas are present as thousands separators in the formatting.
    commas: bool,
}

impl Default for AmountFormat {
    fn default() -> Self {
        DEFAULT_FORMAT
    }
}

/// The default format has a dollar sign and commas: e.g. `-$60,000.00`.
const DEFAULT_FORMAT: AmountFormat = AmountFormat {
    dollar: true,
    commas: true,
};

/// Represents a dollar amount.
///
/// This type wraps a finite `f64` and provides custom serialization/deserialization so that a
/// value can be read from either a JSON number or a string formatted with a dollar sign or
/// commas. Construction rejects NaN and infinities, so a value that made it into an `Amount` is
/// always safe to sum.
///
/// Formatting is considered significant for the purposes of equality, so for numeric comparisons,
/// you should access the `f64` value and use that.
///
/// # Examples
///
/// Parsing with dollar sign:
/// ```
/// # use spendchart::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-$50.00").unwrap();
/// assert_eq!(amount.to_string(), "-$50.00");
/// ```
///
/// Parsing without dollar sign:
/// ```
/// # use spendchart::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("-50.00").unwrap();
/// assert_ne!(amount.to_string(), "-$50.00");
/// assert_eq!(amount.to_string(), "-50.00");
/// ```
///
/// Value equivalency, but not absolute equivalency
/// ```
/// # use spendchart::model::Amount;
/// # use std::str::FromStr;
/// let a = Amount::from_str("-5000.00").unwrap();
/// let b = Amount::from_str("-$5,000.00").unwrap();
/// assert_ne!(a, b);
/// assert_ne!(a.to_string(), b.to_string());
/// assert_eq!(a.value(), b.value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount {
    /// The parsed numerical value. Always finite.
    value: f64,
    /// The way the numerical value was parsed from, or should be written to, a `String`.
    format: AmountFormat,
}

impl Amount {
    /// Creates a new Amount with default `String` formatting. Errors if `value` is not finite.
    pub fn new(value: f64) -> Result<Self, AmountError> {
        Self::new_with_format(value, DEFAULT_FORMAT)
    }

    /// Creates a new Amount with the specified formatting. Errors if `value` is not finite.
    pub fn new_with_format(value: f64, format: AmountFormat) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError(format!("Not a finite amount: {value}")));
        }
        Ok(Self { value, format })
    }

    /// Returns the underlying `f64` value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }
}

/// An error that can occur when parsing or constructing an `Amount`.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AmountError(String);

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for AmountError {}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut dollar_sign = false;

        // Remove whitespace
        let trimmed = s.trim();

        // Handle empty string
        if trimmed.is_empty() {
            return Ok(Amount::default());
        }

        // Remove dollar sign if present
        let without_dollar = if let Some(after_minus) = trimmed.strip_prefix('-') {
            // Negative number: could be "-$50.00" or "-50.00"
            if let Some(after_dollar) = after_minus.strip_prefix('$') {
                dollar_sign = true;
                format!("-{after_dollar}")
            } else {
                trimmed.to_string()
            }
        } else if let Some(after_dollar) = trimmed.strip_prefix('$') {
            // Positive number with dollar sign: "$50.00"
            dollar_sign = true;
            after_dollar.to_string()
        } else {
            // No dollar sign
            trimmed.to_string()
        };

        // Remove commas (thousand separators)
        let without_commas = without_dollar.replace(',', "");
        let commas = without_commas.len() < without_dollar.len();

        // `f64::from_str` accepts "NaN" and "inf", so the finiteness check in
        // `new_with_format` must run on the parsed result.
        let value = f64::from_str(&without_commas)
            .map_err(|e| AmountError(format!("Invalid amount '{s}': {e}")))?;
        Amount::new_with_format(
            value,
            AmountFormat {
                dollar: dollar_sign,
                commas,
            },
        )
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sign, num) = if self.is_negative() {
            ("-", self.value.abs())
        } else {
            ("", self.value)
        };

        let dol = if self.format.dollar { "$" } else { "" };

        if self.format.commas {
            write!(f, "{sign}{dol}{}", format_num::format_num!(",.2", num))
        } else {
            write!(f, "{sign}{dol}{num:.2}")
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a plain number, the form chart consumers expect
        serializer.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "a number or a formatted amount string")
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Amount::new(v).map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Amount::new(v as f64).map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Amount::new(v as f64).map_err(E::custom)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Amount::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
