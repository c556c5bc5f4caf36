//! Builder-wide defaults.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};

/// Key used by the identifier view when no other key is configured.
pub const DEFAULT_ID_KEY: &str = "_id";

/// Settings shared by every view a builder hands out.
///
/// # Example
///
/// ```
/// use filterkit::{DateFormat, FilterConfig};
///
/// let config: FilterConfig =
///     serde_json::from_str(r#"{ "id_key": "uid", "date_format": "%Y-%m-%d" }"#).unwrap();
/// assert_eq!(config.id_key, "uid");
/// assert_eq!(config.date_format, DateFormat::Custom("%Y-%m-%d".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Field key the identifier view writes to.
    pub id_key: String,
    /// Format used by date views built without an explicit one.
    pub date_format: DateFormat,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            id_key: DEFAULT_ID_KEY.to_string(),
            date_format: DateFormat::Rfc3339,
        }
    }
}

/// How date text is turned into a timestamp.
///
/// Serialized as a plain string: `"rfc3339"` selects [`DateFormat::Rfc3339`],
/// anything else is taken as a strftime format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DateFormat {
    /// RFC 3339 with optional fractional seconds down to nanoseconds.
    #[default]
    Rfc3339,
    /// A chrono strftime format string.
    ///
    /// Tried as a datetime with offset, then a naive datetime read as UTC,
    /// then a bare date at midnight UTC.
    Custom(String),
}

impl DateFormat {
    const RFC3339_NAME: &'static str = "rfc3339";

    /// Parses `input` into a UTC timestamp.
    pub fn parse(&self, input: &str) -> Result<DateTime<Utc>> {
        let parsed = match self {
            DateFormat::Rfc3339 => {
                DateTime::parse_from_rfc3339(input).map(|dt| dt.with_timezone(&Utc))
            }
            DateFormat::Custom(fmt) => DateTime::parse_from_str(input, fmt)
                .map(|dt| dt.with_timezone(&Utc))
                .or_else(|_| NaiveDateTime::parse_from_str(input, fmt).map(|dt| dt.and_utc()))
                .or_else(|_| {
                    NaiveDate::parse_from_str(input, fmt)
                        .map(|d| d.and_time(NaiveTime::default()).and_utc())
                }),
        };

        parsed.map_err(|source| FilterError::InvalidDate {
            input: input.to_string(),
            format: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Rfc3339 => f.write_str(Self::RFC3339_NAME),
            DateFormat::Custom(fmt) => f.write_str(fmt),
        }
    }
}

impl From<String> for DateFormat {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case(Self::RFC3339_NAME) {
            DateFormat::Rfc3339
        } else {
            DateFormat::Custom(s)
        }
    }
}

impl From<&str> for DateFormat {
    fn from(s: &str) -> Self {
        DateFormat::from(s.to_string())
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.id_key, "_id");
        assert_eq!(config.date_format, DateFormat::Rfc3339);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: FilterConfig = serde_json::from_str(r#"{ "id_key": "uid" }"#).unwrap();
        assert_eq!(config.id_key, "uid");
        assert_eq!(config.date_format, DateFormat::Rfc3339);

        let config: FilterConfig =
            serde_json::from_str(r#"{ "date_format": "RFC3339" }"#).unwrap();
        assert_eq!(config.date_format, DateFormat::Rfc3339);
    }

    #[test]
    fn rfc3339_with_nanos() {
        let dt = DateFormat::Rfc3339
            .parse("2024-01-29T10:20:30.123456789+02:00")
            .unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.nanosecond(), 123_456_789);
    }

    #[test]
    fn custom_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 29, 0, 0, 0).unwrap();
        assert_eq!(
            DateFormat::from("%Y-%m-%d").parse("2024-01-29").unwrap(),
            expected
        );

        let expected = Utc.with_ymd_and_hms(2024, 1, 29, 13, 5, 0).unwrap();
        assert_eq!(
            DateFormat::from("%d/%m/%Y %H:%M").parse("29/01/2024 13:05").unwrap(),
            expected
        );

        let expected = Utc.with_ymd_and_hms(2024, 1, 29, 12, 0, 0).unwrap();
        assert_eq!(
            DateFormat::from("%Y-%m-%d %H:%M %z")
                .parse("2024-01-29 13:00 +0100")
                .unwrap(),
            expected
        );
    }

    #[test]
    fn parse_failure_names_input_and_format() {
        let err = DateFormat::Rfc3339.parse("yesterday").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'yesterday'"));
        assert!(msg.contains("'rfc3339'"));

        let err = DateFormat::from("%Y-%m-%d").parse("2024/01/29").unwrap_err();
        assert!(err.to_string().contains("'%Y-%m-%d'"));
    }
}
