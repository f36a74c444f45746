use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use consultorio_core::{
    errors::ClinicError,
    models::{
        appointment::{Appointment, AppointmentStatus},
        service::Service,
        working_hours::WorkingHours,
    },
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: i64,
    pub dentist_id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWorkingHours {
    pub id: i64,
    pub dentist_id: i64,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: i64,
    pub dentist_id: i64,
    pub service_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Self {
            id: row.id,
            dentist_id: row.dentist_id,
            name: row.name,
            description: row.description,
            price_cents: row.price_cents,
            duration_minutes: row.duration_minutes,
            active: row.active,
        }
    }
}

impl From<DbWorkingHours> for WorkingHours {
    fn from(row: DbWorkingHours) -> Self {
        Self {
            id: row.id,
            dentist_id: row.dentist_id,
            weekday: row.weekday,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = ClinicError;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        let status: AppointmentStatus = row.status.parse()?;
        Ok(Self {
            id: row.id,
            dentist_id: row.dentist_id,
            service_id: row.service_id,
            date: row.date,
            start_time: row.start_time,
            end_time: row.end_time,
            status,
            created_at: row.created_at,
        })
    }
}
