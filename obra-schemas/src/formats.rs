//! Display formats shared by seed files, the state dump and the journal.
//!
//! Inventory timestamps are kept at minute precision on the wire
//! (`2026-02-17 14:30`) and approval dates use the short day-month-year form
//! (`13 Feb 2026`).

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const APPROVAL_DATE_FORMAT: &str = "%d %b %Y";

pub mod minute_timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S"))
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
    }
}

pub mod approval_date {
    use super::APPROVAL_DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(APPROVAL_DATE_FORMAT))
    }

    // ISO dates are accepted too so hand-written seed files can use either.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, APPROVAL_DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(&raw, "%Y-%m-%d"))
            .map_err(|e| D::Error::custom(format!("invalid date '{}': {}", raw, e)))
    }
}
