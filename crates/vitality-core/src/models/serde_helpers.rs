// ABOUTME: Lenient serde adapters for values the mobile app stored as either text or numbers
// ABOUTME: Accepts "30" and 30 alike so legacy profile records keep loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Deserialize a decimal that may have been stored as a JSON number
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(value) => value.to_string(),
        TextOrNumber::Float(value) => value.to_string(),
    })
}

/// Deserialize an age stored as a number or numeric text; blank text maps to 0
pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) if text.trim().is_empty() => Ok(0),
        TextOrNumber::Text(text) => text.trim().parse().map_err(D::Error::custom),
        TextOrNumber::Integer(value) => u32::try_from(value).map_err(D::Error::custom),
        TextOrNumber::Float(value) => Err(D::Error::custom(format!(
            "expected a whole number, found {value}"
        ))),
    }
}
