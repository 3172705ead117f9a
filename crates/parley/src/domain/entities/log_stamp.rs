//! LogStamp - Timestamp fields shared by persisted log records
//!
//! Records are keyed by a local ISO-8601 timestamp plus derived
//! `date` (`%Y-%m-%d`) and `time` (`%H:%M:%S`) strings.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// When a log record was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStamp {
    #[serde(with = "iso_local")]
    pub timestamp: NaiveDateTime,
    pub date: String,
    pub time: String,
}

impl LogStamp {
    /// Stamp for the current local time
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Stamp for a given local time, truncated to microseconds
    pub fn at(timestamp: NaiveDateTime) -> Self {
        let micros = timestamp.nanosecond() / 1_000 * 1_000;
        let timestamp = timestamp.with_nanosecond(micros).unwrap_or(timestamp);
        Self {
            date: timestamp.format("%Y-%m-%d").to_string(),
            time: timestamp.format("%H:%M:%S").to_string(),
            timestamp,
        }
    }
}

mod iso_local {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_derives_date_and_time() {
        let ts = NaiveDate::from_ymd_opt(2025, 11, 23)
            .unwrap()
            .and_hms_micro_opt(9, 5, 7, 123_456)
            .unwrap();
        let stamp = LogStamp::at(ts);
        assert_eq!(stamp.date, "2025-11-23");
        assert_eq!(stamp.time, "09:05:07");

        let json = serde_json::to_value(&stamp).unwrap();
        assert_eq!(json["timestamp"], "2025-11-23T09:05:07.123456");
    }

    #[test]
    fn test_reads_timestamps_without_fraction() {
        let stamp: LogStamp = serde_json::from_str(
            r#"{"timestamp":"2025-11-23T09:05:07","date":"2025-11-23","time":"09:05:07"}"#,
        )
        .unwrap();
        assert_eq!(stamp.timestamp.format("%H:%M").to_string(), "09:05");
    }
}
