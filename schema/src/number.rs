//! Lenient numeric deserializers.
//!
//! The backend stores documents written by several API generations, so
//! integer fields occasionally arrive as `3.0`. These helpers accept any
//! integer-compatible JSON number.

#[cfg(test)]
#[path = "number_test.rs"]
mod number_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub(crate) fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Accept a JSON number or a string with a leading number (`"25g"`, `"400 kcal"`).
/// AI-generated payloads mix both.
pub(crate) fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .filter(|f| f.is_finite())
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(text) => leading_number(&text)
            .ok_or_else(|| D::Error::custom(format!("expected numeric text, got {text:?}"))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse::<f64>().ok()
}
