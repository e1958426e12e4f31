use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A loosely-typed attribute value as the backend sends it.
///
/// The backend serializes missing properties as `null` and most present
/// ones as strings, but numbers show up too (occupancy in particular).
/// Popups show the value verbatim, so the raw JSON value is kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Attribute(pub Option<Value>);

impl Attribute {
    pub fn is_missing(&self) -> bool {
        matches!(self.0, None | Some(Value::Null))
    }

    /// Numeric view of the attribute, parsed leniently.
    ///
    /// Strings are read up to the first character that can't be part of a
    /// float, so `"45%"` and `" 12.5 "` both parse. Returns `None` for
    /// anything that yields no number (including NaN).
    pub fn as_number(&self) -> Option<f64> {
        let value = match &self.0 {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_leading_float(s),
            _ => None,
        }?;

        if value.is_nan() { None } else { Some(value) }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None | Some(Value::Null) => write!(f, "null"),
            Some(Value::String(s)) => write!(f, "{}", s),
            // Integral floats print without a fraction: 35.0 reads as 35
            Some(Value::Number(n)) => match n.as_f64() {
                Some(value) => write!(f, "{}", value),
                None => write!(f, "{}", n),
            },
            Some(other) => write!(f, "{}", other),
        }
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Self(Some(Value::String(value.to_string())))
    }
}

impl From<f64> for Attribute {
    fn from(value: f64) -> Self {
        Self(serde_json::Number::from_f64(value).map(Value::Number))
    }
}

fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();

    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    if unsigned.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());

    (1..=end).rev().find_map(|i| s[..i].parse::<f64>().ok())
}
