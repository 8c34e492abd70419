//! Wire encoding for timestamps.
//!
//! The historical API serialized timestamps as Unix-seconds *strings*. All
//! tables store timestamps canonically; the conversion happens only here, so
//! every read path produces the same bytes for the same row.

use chrono::{DateTime, NaiveDateTime};

pub fn to_unix_string(value: &NaiveDateTime) -> String {
    value.and_utc().timestamp().to_string()
}

pub fn from_unix_string(value: &str) -> Option<NaiveDateTime> {
    let secs: i64 = value.parse().ok()?;
    DateTime::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
}

pub mod unix_seconds {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_unix_string(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::from_unix_string(&raw).ok_or_else(|| D::Error::custom(format!("invalid unix timestamp: {raw}")))
    }
}

pub mod unix_seconds_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&super::to_unix_string(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(raw) => super::from_unix_string(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid unix timestamp: {raw}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_round_trip() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap();
        let encoded = to_unix_string(&ts);
        assert_eq!(encoded, "1715970600");
        assert_eq!(from_unix_string(&encoded), Some(ts));
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(from_unix_string("not-a-number"), None);
        assert_eq!(from_unix_string(""), None);
    }
}
