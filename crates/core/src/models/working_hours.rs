use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;
use crate::models::time_of_day::TimeOfDay;

/// Open hours of the clinic for one stretch of a day.
///
/// `end > start` always holds; the only way to build one is through
/// [`WorkingWindow::new`], including when deserializing.
///
/// Both ends are [`TimeOfDay`] values, so the latest a window can close is
/// 23:59; a timetable closing at midnight is stored as `23:59`. Seconds are
/// dropped on the way in, which means a stored `09:00:00`-`09:00:30` row
/// collapses to an empty range and is rejected like an inverted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct WorkingWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawWindow> for WorkingWindow {
    type Error = ClinicError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        WorkingWindow::new(raw.start, raw.end)
    }
}

impl WorkingWindow {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, ClinicError> {
        if end <= start {
            return Err(ClinicError::Configuration(format!(
                "Working window must close after it opens (start {}, end {})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn length_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether `minutes` starting at `start` stay inside the window.
    pub fn fits(&self, start: TimeOfDay, minutes: u16) -> bool {
        let end = u32::from(start.minutes()) + u32::from(minutes);
        self.start <= start && end <= u32::from(self.end.minutes())
    }
}

/// ISO weekday number, Monday = 1 through Sunday = 7.
pub fn iso_weekday(date: NaiveDate) -> i16 {
    date.weekday().number_from_monday() as i16
}

/// One stored row of a dentist's weekly timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub id: i64,
    pub dentist_id: i64,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl WorkingHours {
    pub fn window(&self) -> Result<WorkingWindow, ClinicError> {
        WorkingWindow::new(self.start_time.into(), self.end_time.into())
    }
}
