//! ISO-8601 timestamps as stored in the collection files.
//!
//! Values are kept without an offset. Input carrying an offset (`Z`, `+07:00`)
//! is normalised to UTC first.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, de::Error};

pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.naive_utc()),
        Err(_) => raw.parse::<NaiveDateTime>(),
    }
}

/// Serde helper for `Option<NaiveDateTime>` fields; use with `#[serde(default)]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse(&raw).map_err(|e| D::Error::custom(format!("invalid timestamp '{raw}': {e}"))))
        .transpose()
}
