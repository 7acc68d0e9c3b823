//! Serde helpers for wall-clock times.
//!
//! Times are written as `HH:MM`. On input the CMS may also send
//! `HH:MM:SS` or `HH:MM:SS.fff`, so all three forms are accepted.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer, de};

const OUTPUT_FORMAT: &str = "%H:%M";
const INPUT_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parses a wall-clock time in any of the accepted input formats.
///
/// # Example
///
/// ```
/// use booking_engine::models::time_format::parse_time;
/// use chrono::NaiveTime;
///
/// let expected = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(parse_time("09:30"), Some(expected));
/// assert_eq!(parse_time("09:30:00.000"), Some(expected));
/// assert_eq!(parse_time("half past nine"), None);
/// ```
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
}

/// Serializes a time as `HH:MM`.
pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format(OUTPUT_FORMAT).to_string())
}

/// Deserializes a time from `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).ok_or_else(|| de::Error::custom(format!("invalid time '{raw}', expected HH:MM")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: NaiveTime,
    }

    #[test]
    fn test_parse_time_accepts_cms_formats() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_time("09:00"), Some(nine));
        assert_eq!(parse_time("09:00:00"), Some(nine));
        assert_eq!(parse_time("09:00:00.000"), Some(nine));
        assert_eq!(parse_time(" 09:00 "), Some(nine));
    }

    #[test]
    fn test_parse_time_rejects_garbage() {
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("9am"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn test_serializes_as_hours_and_minutes() {
        let wrapper = Wrapper {
            at: NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
        };
        assert_eq!(serde_json::to_string(&wrapper).unwrap(), r#"{"at":"23:59"}"#);
    }

    #[test]
    fn test_deserialize_error_mentions_value() {
        let err = serde_json::from_str::<Wrapper>(r#"{"at":"noon"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid time 'noon'"));
    }
}
