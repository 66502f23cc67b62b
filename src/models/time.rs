//! Wall-clock time models.
//!
//! Shifts and opening hours recur every day, so times carry no date:
//! a `TimeOfDay` is minutes since midnight, written `HH:MM`.
//!
//! # Midnight
//! A range whose end is earlier than its start crosses midnight
//! (e.g. 22:00–06:00 is eight hours). A range whose end equals its
//! start is empty.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TimeParseError;

use super::Weekday;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self { minutes: 0 };

    /// Creates a time from hour and minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::Minute(minute));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    // Unchecked; for in-range constants only.
    pub(crate) const fn hm(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.minutes)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || TimeParseError::Format(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(format_err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(format_err());
        }
        let hour: u32 = h.parse().map_err(|_| format_err())?;
        let minute: u32 = m.parse().map_err(|_| format_err())?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A daily window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Window start (inclusive).
    pub start: TimeOfDay,
    /// Window end (exclusive).
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Creates a new range.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses a range from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeParseError> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Length of the window in minutes, wrapping past midnight.
    pub fn duration_minutes(&self) -> u32 {
        let start = self.start.minutes;
        let end = self.end.minutes;
        let minutes = if end >= start {
            end - start
        } else {
            MINUTES_PER_DAY - start + end
        };
        u32::from(minutes)
    }

    /// Whether the window ends on the following day.
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Whether the window has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether a time falls within this window.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        if self.crosses_midnight() {
            time >= self.start || time < self.end
        } else {
            time >= self.start && time < self.end
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Opening hours, split into weekdays and weekends.
///
/// Collected alongside the shift definitions but not consulted during
/// assignment: shift times are authoritative once shifts are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    /// Monday through Friday.
    pub weekdays: TimeRange,
    /// Saturday and Sunday.
    pub weekends: TimeRange,
}

impl OperatingHours {
    /// Creates opening hours.
    pub fn new(weekdays: TimeRange, weekends: TimeRange) -> Self {
        Self { weekdays, weekends }
    }

    /// The opening window that applies on a given day.
    pub fn for_day(&self, day: Weekday) -> TimeRange {
        if day.is_weekend() {
            self.weekends
        } else {
            self.weekdays
        }
    }
}

impl Default for OperatingHours {
    /// Weekdays 09:00–17:00, weekends 10:00–16:00.
    fn default() -> Self {
        Self {
            weekdays: TimeRange::new(TimeOfDay::hm(9, 0), TimeOfDay::hm(17, 0)),
            weekends: TimeRange::new(TimeOfDay::hm(10, 0), TimeOfDay::hm(16, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(t("09:00").to_string(), "09:00");
        assert_eq!(t("9:05").to_string(), "09:05");
        assert_eq!(t("23:59").minutes_since_midnight(), 23 * 60 + 59);
        assert_eq!(t("00:00"), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!("9am".parse::<TimeOfDay>(), Err(TimeParseError::Format("9am".into())));
        assert!("09:0".parse::<TimeOfDay>().is_err());
        assert!(":30".parse::<TimeOfDay>().is_err());
        assert_eq!("24:00".parse::<TimeOfDay>(), Err(TimeParseError::Hour(24)));
        assert_eq!("12:60".parse::<TimeOfDay>(), Err(TimeParseError::Minute(60)));
    }

    #[test]
    fn test_range_duration() {
        let day = TimeRange::parse("09:00", "14:00").unwrap();
        assert_eq!(day.duration_minutes(), 300);
        assert!(!day.crosses_midnight());

        let night = TimeRange::parse("22:00", "06:00").unwrap();
        assert_eq!(night.duration_minutes(), 480);
        assert!(night.crosses_midnight());

        let empty = TimeRange::parse("10:00", "10:00").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.duration_minutes(), 0);
    }

    #[test]
    fn test_range_contains() {
        let day = TimeRange::parse("09:00", "14:00").unwrap();
        assert!(day.contains(t("09:00")));
        assert!(day.contains(t("13:59")));
        assert!(!day.contains(t("14:00")));

        let night = TimeRange::parse("22:00", "06:00").unwrap();
        assert!(night.contains(t("23:30")));
        assert!(night.contains(t("02:00")));
        assert!(!night.contains(t("12:00")));
    }

    #[test]
    fn test_serde_as_string() {
        let range = TimeRange::parse("09:00", "17:30").unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":"09:00","end":"17:30"}"#);

        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);

        assert!(serde_json::from_str::<TimeOfDay>(r#""25:00""#).is_err());
    }

    #[test]
    fn test_operating_hours_default_and_for_day() {
        let hours = OperatingHours::default();
        assert_eq!(hours.weekdays.to_string(), "09:00-17:00");
        assert_eq!(hours.weekends.to_string(), "10:00-16:00");
        assert_eq!(hours.for_day(Weekday::Wednesday), hours.weekdays);
        assert_eq!(hours.for_day(Weekday::Sunday), hours.weekends);
    }
}
