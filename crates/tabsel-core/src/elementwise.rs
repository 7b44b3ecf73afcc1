//! Element-wise scaling.
//!
//! Typed slices scale infallibly. Untyped input (tokens from a command line
//! or a text column) is parsed into [`Value`]s first, and scaling those fails
//! at the first non-numeric element.

use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabselError};

/// Multiply every element by `factor`, preserving order and length.
pub fn scale<T>(values: &[T], factor: T) -> Vec<T>
where
    T: Copy + Mul<Output = T>,
{
    values.iter().map(|&v| v * factor).collect()
}

/// In-place variant of [`scale`].
pub fn scale_in_place<T>(values: &mut [T], factor: T)
where
    T: Copy + Mul<Output = T>,
{
    for v in values.iter_mut() {
        *v = *v * factor;
    }
}

/// A single untyped input element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parse raw tokens into values; anything that is not an `f64` stays text.
pub fn parse_values<S: AsRef<str>>(tokens: &[S]) -> Vec<Value> {
    tokens
        .iter()
        .map(|t| match t.as_ref().parse::<Value>() {
            Ok(v) => v,
            Err(never) => match never {},
        })
        .collect()
}

/// Scale untyped values, failing with `TypeMismatch` on the first text element.
pub fn scale_values(values: &[Value], factor: f64) -> Result<Vec<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for (position, value) in values.iter().enumerate() {
        match value {
            Value::Number(n) => out.push(n * factor),
            Value::Text(s) => {
                return Err(TabselError::TypeMismatch {
                    position,
                    found: s.clone(),
                })
            }
        }
    }
    Ok(out)
}
