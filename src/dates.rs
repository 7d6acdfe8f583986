//! Calendar date parsing for request payloads.
//!
//! Clients send either plain `YYYY-MM-DD` dates or full timestamps
//! (`2024-07-01T18:30:00.000Z`). Only the calendar date as written is kept;
//! time-of-day and offset are discarded.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Today's date at local midnight; anything earlier is in the past.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a calendar date from a plain date or a timestamp string.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Serde helper for a required calendar date.
pub mod calendar_date {
    use super::*;
    use serde::de::Error;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid calendar date '{}'", raw)))
    }
}

/// Serde helper for an optional calendar date.
///
/// Null, empty and unparseable strings all become `None` so a half-filled
/// form still gets a quote.
pub mod calendar_date_option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_calendar_date))
    }
}

/// Serde helper for an optional calendar date that must be readable when
/// present. Null, absent and empty strings become `None`; anything else
/// that is not a date is an error.
pub mod calendar_date_nullable {
    use super::*;
    use serde::de::Error;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) if !raw.trim().is_empty() => parse_calendar_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid calendar date '{}'", raw))),
            _ => Ok(None),
        }
    }
}

/// Serde helper for a list of calendar dates. Null becomes an empty list.
pub mod calendar_date_vec {
    use super::*;
    use serde::de::Error;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
        raw.iter()
            .map(|value| {
                parse_calendar_date(value)
                    .ok_or_else(|| D::Error::custom(format!("invalid calendar date '{}'", value)))
            })
            .collect()
    }
}
