use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time as minutes since midnight.
///
/// Slot arithmetic works on this integer rather than on `NaiveTime` so that
/// daylight-saving shifts and timezones never enter the computation; the
/// calendar date is the caller's concern. Serialized as `"HH:MM"`.
///
/// The range is 00:00 to 23:59. There is no `24:00`, and seconds are
/// truncated when converting from `NaiveTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_minutes(minutes: u16) -> Result<Self, ClinicError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ClinicError::Validation(format!(
                "{} minutes is past the end of the day",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ClinicError> {
        if hour >= 24 || minute >= 60 {
            return Err(ClinicError::Validation(format!(
                "Invalid time of day {}:{:02}",
                hour, minute
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Moves forward by `minutes`, or `None` when that crosses midnight.
    pub fn checked_add(self, minutes: u16) -> Option<Self> {
        let next = self.0.checked_add(minutes)?;
        (next < MINUTES_PER_DAY).then_some(Self(next))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ClinicError;

    /// Accepts `HH:MM` and `HH:MM:SS`; seconds are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(Self::from)
            .map_err(|_| ClinicError::Validation(format!("Invalid time '{}', expected HH:MM", s)))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ClinicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // hour() < 24 and minute() < 60, so this never leaves the day
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(u32::from(time.hour()), u32::from(time.minute()), 0)
            .unwrap_or_default()
    }
}
