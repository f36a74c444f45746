use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ClinicError;
use crate::models::time_of_day::TimeOfDay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pendiente,
    Confirmada,
    Completada,
    Cancelada,
    Inasistencia,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        AppointmentStatus::Pendiente,
        AppointmentStatus::Confirmada,
        AppointmentStatus::Completada,
        AppointmentStatus::Cancelada,
        AppointmentStatus::Inasistencia,
    ];

    /// Cancelled and no-show appointments free their time again.
    pub fn blocks_schedule(self) -> bool {
        !matches!(self, AppointmentStatus::Cancelada | AppointmentStatus::Inasistencia)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "PENDIENTE",
            AppointmentStatus::Confirmada => "CONFIRMADA",
            AppointmentStatus::Completada => "COMPLETADA",
            AppointmentStatus::Cancelada => "CANCELADA",
            AppointmentStatus::Inasistencia => "INASISTENCIA",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClinicError::Validation(format!("Unknown appointment status '{}'", s)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub dentist_id: i64,
    pub service_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn booking(&self) -> Booking {
        Booking::new(self.start_time.into(), self.end_time.into())
    }
}

/// The span of the day an appointment holds, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Booking {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Booking {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Whether `[start, start + minutes)` shares any minute with this booking.
    ///
    /// A booking whose end is not after its start holds no time.
    pub fn overlaps(&self, start: TimeOfDay, minutes: u16) -> bool {
        let start = u32::from(start.minutes());
        let end = start + u32::from(minutes);
        start < u32::from(self.end.minutes()) && end > u32::from(self.start.minutes())
    }
}
