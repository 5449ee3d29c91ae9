//! Event input types.
//!
//! The host calendar hands us an `EventDescriptor`; everything the link
//! builder needs is on it. Times are kept exactly as the host exposes them,
//! either with a UTC offset or as floating wall-clock values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LinkError, LinkResult};

/// Singular noun used for events in the truncation note
pub const DEFAULT_EVENT_LABEL: &str = "Event";

/// Wall-clock formats accepted without an offset, tried in order
const FLOATING_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

fn default_label() -> String {
    DEFAULT_EVENT_LABEL.to_string()
}

/// The fields of an event that go into an Outlook deep link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    /// Event name, may contain markup
    pub title: String,
    /// HTML event body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    #[serde(default)]
    pub all_day: bool,
    /// Canonical URL of the event page
    #[serde(default)]
    pub permalink: String,
    #[serde(default = "default_label")]
    pub label: String,
}

impl EventDescriptor {
    pub fn new(title: impl Into<String>, start: EventTime, end: EventTime) -> Self {
        EventDescriptor {
            title: title.into(),
            description: None,
            start,
            end,
            all_day: false,
            permalink: String::new(),
            label: default_label(),
        }
    }
}

/// A point in time as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// Instant with a known UTC offset
    Offset(DateTime<FixedOffset>),
    /// Wall-clock time with no zone attached
    Floating(NaiveDateTime),
}

impl EventTime {
    /// Wall-clock reading of this time.
    ///
    /// Offset-bearing times are shifted into `tz` first when one is given.
    /// Floating times are returned untouched.
    pub fn wall_clock(&self, tz: Option<Tz>) -> NaiveDateTime {
        match (self, tz) {
            (EventTime::Offset(dt), Some(tz)) => dt.with_timezone(&tz).naive_local(),
            (EventTime::Offset(dt), None) => dt.naive_local(),
            (EventTime::Floating(dt), _) => *dt,
        }
    }
}

impl From<DateTime<FixedOffset>> for EventTime {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        EventTime::Offset(dt)
    }
}

impl From<NaiveDateTime> for EventTime {
    fn from(dt: NaiveDateTime) -> Self {
        EventTime::Floating(dt)
    }
}

impl FromStr for EventTime {
    type Err = LinkError;

    fn from_str(s: &str) -> LinkResult<Self> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(EventTime::Offset(dt));
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
            return Ok(EventTime::Offset(dt));
        }

        for format in FLOATING_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(EventTime::Floating(dt));
            }
        }

        // Bare dates start at midnight
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(EventTime::Floating(date.and_time(NaiveTime::MIN)));
        }

        Err(LinkError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::Offset(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            EventTime::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

impl Serialize for EventTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339_with_offset() {
        let time: EventTime = "2024-05-01T10:00:00-04:00".parse().unwrap();
        match time {
            EventTime::Offset(dt) => {
                assert_eq!(dt.offset().local_minus_utc(), -4 * 3600);
                assert_eq!(dt.hour(), 10);
            }
            other => panic!("Expected offset time, got {:?}", other),
        }
    }

    #[test]
    fn parses_host_storage_format_as_floating() {
        let time: EventTime = "2024-05-01 10:30:00".parse().unwrap();
        assert_eq!(
            time,
            EventTime::Floating(
                NaiveDate::from_ymd_opt(2024, 5, 1)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn parses_minutes_only_and_bare_date() {
        let time: EventTime = "2024-05-01T09:15".parse().unwrap();
        assert_eq!(time.wall_clock(None).minute(), 15);

        let date: EventTime = "2024-12-24".parse().unwrap();
        let wall = date.wall_clock(None);
        assert_eq!(wall.day(), 24);
        assert_eq!(wall.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        let err = "next tuesday".parse::<EventTime>().unwrap_err();
        assert!(
            matches!(err, LinkError::InvalidDate(ref s) if s == "next tuesday"),
            "Unexpected error: {}",
            err
        );
    }

    #[test]
    fn wall_clock_keeps_offset_local_time() {
        let time: EventTime = "2024-05-01T10:00:00-04:00".parse().unwrap();
        assert_eq!(time.wall_clock(None).to_string(), "2024-05-01 10:00:00");
    }

    #[test]
    fn wall_clock_shifts_into_timezone() {
        let time: EventTime = "2024-05-01T14:00:00Z".parse().unwrap();
        let wall = time.wall_clock(Some(chrono_tz::Europe::Berlin));
        assert_eq!(wall.to_string(), "2024-05-01 16:00:00");
    }

    #[test]
    fn floating_time_ignores_timezone() {
        let time: EventTime = "2024-05-01T14:00:00".parse().unwrap();
        let wall = time.wall_clock(Some(chrono_tz::Asia::Tokyo));
        assert_eq!(wall.to_string(), "2024-05-01 14:00:00");
    }

    #[test]
    fn descriptor_from_json_applies_defaults() {
        let json = r#"{
            "title": "Board Meeting",
            "start": "2024-05-01T10:00:00-04:00",
            "end": "2024-05-01 11:00:00"
        }"#;

        let event: EventDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(event.title, "Board Meeting");
        assert!(event.description.is_none());
        assert!(!event.all_day);
        assert_eq!(event.label, DEFAULT_EVENT_LABEL);
        assert!(matches!(event.end, EventTime::Floating(_)));
    }

    #[test]
    fn descriptor_json_rejects_bad_date() {
        let json = r#"{"title": "x", "start": "soon", "end": "2024-05-01"}"#;
        let err = serde_json::from_str::<EventDescriptor>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid date"), "Got: {}", err);
    }

    #[test]
    fn event_time_serializes_as_string() {
        let event = EventDescriptor::new(
            "Lunch",
            "2024-05-01T12:00:00Z".parse().unwrap(),
            "2024-05-01T13:00:00".parse().unwrap(),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["start"], "2024-05-01T12:00:00Z");
        assert_eq!(json["end"], "2024-05-01T13:00:00");
    }
}
