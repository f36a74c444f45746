//! # Slot Availability Handlers
//!
//! Serves the list of start times for a date and a service. The web staff
//! pages, the patient portal and the mobile app all call this one endpoint
//! instead of each computing slots on their own.
//!
//! ## Flow
//!
//! 1. Validate `fecha` (YYYY-MM-DD), `servicio_id` and the optional
//!    `dentista_id` (integer ids)
//! 2. Check the service exists, is active and belongs to that dentist
//! 3. Load the dentist's working windows for the date's ISO weekday
//! 4. Load the dentist's appointments on that date that still hold their time
//! 5. Run the generator on the slot grid, then keep only the starts that
//!    leave room for the whole service and have not already passed
//!
//! A weekday without working hours answers `200` with no slots and a
//! `mensaje`, so the client can tell "closed" apart from "fully booked".

use std::cmp::Ordering;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Local, NaiveDate, NaiveDateTime};
use consultorio_core::{
    errors::{ClinicError, ClinicResult},
    models::{
        appointment::{Appointment, Booking},
        service::Service,
        slot::{SlotStatus, SlotsResponse},
        time_of_day::{MINUTES_PER_DAY, TimeOfDay},
        working_hours::{WorkingHours, WorkingWindow, iso_weekday},
    },
    slots::{Recommendation, SlotInterval, expand_bookings_for, generate_day_slots, recommend},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the slot endpoint
///
/// The Spanish names are what the existing clients send; the English
/// aliases are accepted too. All are kept as raw strings so a malformed
/// value produces a JSON validation error instead of a bare rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SlotsQuery {
    /// Target date, `YYYY-MM-DD`
    #[serde(alias = "date")]
    pub fecha: Option<String>,

    /// Service being booked
    #[serde(alias = "service_id")]
    pub servicio_id: Option<String>,

    /// Dentist the mobile app has selected, if any
    #[serde(alias = "dentist_id")]
    pub dentista_id: Option<String>,
}

/// A slot request after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub service_id: i64,
    pub dentist_id: Option<i64>,
}

impl SlotsQuery {
    pub fn validate(&self) -> ClinicResult<SlotRequest> {
        let fecha = required(&self.fecha, "fecha")?;
        let servicio_id = required(&self.servicio_id, "servicio_id")?;

        let date = NaiveDate::parse_from_str(fecha, "%Y-%m-%d").map_err(|_| {
            ClinicError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", fecha))
        })?;
        let service_id = parse_id(servicio_id, "service id")?;
        let dentist_id = optional(&self.dentista_id)
            .map(|value| parse_id(value, "dentist id"))
            .transpose()?;

        Ok(SlotRequest {
            date,
            service_id,
            dentist_id,
        })
    }
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(value: &'a Option<String>, name: &str) -> ClinicResult<&'a str> {
    optional(value)
        .ok_or_else(|| ClinicError::Validation(format!("Missing query parameter '{}'", name)))
}

fn parse_id(value: &str, what: &str) -> ClinicResult<i64> {
    value
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ClinicError::Validation(format!("Invalid {} '{}'", what, value)))
}

/// The service a request can book: it must exist, be active and, when the
/// client named a dentist, belong to that dentist.
pub fn bookable_service(service: Option<Service>, request: &SlotRequest) -> ClinicResult<Service> {
    let not_found = || {
        ClinicError::NotFound(match request.dentist_id {
            Some(dentist_id) => format!(
                "Service with ID {} not found for dentist {}",
                request.service_id, dentist_id
            ),
            None => format!("Service with ID {} not found", request.service_id),
        })
    };

    let service = service.filter(|service| service.active).ok_or_else(not_found)?;
    match request.dentist_id {
        Some(dentist_id) if dentist_id != service.dentist_id => Err(not_found()),
        _ => Ok(service),
    }
}

/// Everything besides the stored rows that decides which slots are offered.
#[derive(Debug, Clone, Copy)]
pub struct SlotContext {
    pub date: NaiveDate,
    pub interval: SlotInterval,
    /// Minutes the requested service takes
    pub duration: u16,
    /// Local wall-clock time of the request
    pub now: NaiveDateTime,
}

impl SlotContext {
    pub fn new(
        date: NaiveDate,
        interval: SlotInterval,
        service: &Service,
        now: NaiveDateTime,
    ) -> ClinicResult<Self> {
        let duration = u16::try_from(service.duration_minutes)
            .ok()
            .filter(|minutes| *minutes > 0 && *minutes <= MINUTES_PER_DAY)
            .ok_or_else(|| {
                ClinicError::Configuration(format!(
                    "Service {} has an invalid duration of {} minutes",
                    service.id, service.duration_minutes
                ))
            })?;

        Ok(Self {
            date,
            interval,
            duration,
            now,
        })
    }

    /// Past dates offer nothing; today only offers starts after `now`.
    fn is_upcoming(&self, time: TimeOfDay) -> bool {
        match self.date.cmp(&self.now.date()) {
            Ordering::Greater => true,
            Ordering::Equal => time > TimeOfDay::from(self.now.time()),
            Ordering::Less => false,
        }
    }
}

/// Builds the response body from what the store returned for one date.
///
/// Stored windows are validated here; a row that closes before it opens is
/// a configuration error. Cancelled and no-show appointments are ignored
/// even if the store handed them over.
///
/// Slots stay on the configured grid. A start is only kept when the whole
/// service fits before its window closes, and it is occupied when
/// `[start, start + duration)` overlaps an appointment. Starts that are
/// already past are dropped before the first free one is recommended.
pub fn build_slots_response(
    hours: &[WorkingHours],
    appointments: &[Appointment],
    ctx: &SlotContext,
) -> ClinicResult<SlotsResponse> {
    if hours.is_empty() {
        return Ok(SlotsResponse::day_off());
    }

    let windows = hours
        .iter()
        .map(WorkingHours::window)
        .collect::<ClinicResult<Vec<WorkingWindow>>>()?;

    let bookings: Vec<Booking> = appointments
        .iter()
        .filter(|appointment| appointment.status.blocks_schedule())
        .map(Appointment::booking)
        .collect();

    let booked = expand_bookings_for(&bookings, &windows, ctx.interval, ctx.duration);
    let mut slots = generate_day_slots(&windows, ctx.interval, &booked, &Recommendation::None);

    slots.retain(|slot| {
        let fits = windows.iter().any(|window| window.fits(slot.time, ctx.duration));
        fits && ctx.is_upcoming(slot.time)
    });
    recommend(&mut slots, &Recommendation::FirstAvailable);

    Ok(SlotsResponse::from_slots(&slots))
}

/// Returns the bookable start times for a date and service
///
/// # Endpoint
///
/// ```text
/// GET /api/slots/?fecha=2025-03-03&servicio_id=3&dentista_id=1
/// ```
///
/// # Errors
///
/// * `ClinicError::Validation` - Missing or malformed query parameters
/// * `ClinicError::NotFound` - Unknown or inactive service, or one that
///   belongs to another dentist
/// * `ClinicError::Configuration` - A stored working window is inverted or
///   the service has no usable duration
/// * `ClinicError::Database` - Database error
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let request = query.validate()?;

    let service = consultorio_db::repositories::service::get_service_by_id(&state.db_pool, request.service_id)
        .await
        .map_err(ClinicError::Database)?
        .map(Service::from);
    let service = bookable_service(service, &request)?;
    let ctx = SlotContext::new(
        request.date,
        state.slot_interval,
        &service,
        Local::now().naive_local(),
    )?;

    let weekday = iso_weekday(request.date);
    let hours: Vec<WorkingHours> = consultorio_db::repositories::working_hours::get_working_hours_by_weekday(
        &state.db_pool,
        service.dentist_id,
        weekday,
    )
    .await
    .map_err(ClinicError::Database)?
    .into_iter()
    .map(WorkingHours::from)
    .collect();

    if hours.is_empty() {
        debug!(
            "{} (weekday {}) is not a working day for dentist {}",
            request.date, weekday, service.dentist_id
        );
        return Ok(Json(SlotsResponse::day_off()));
    }

    let appointments = consultorio_db::repositories::appointment::get_active_appointments_by_date(
        &state.db_pool,
        service.dentist_id,
        request.date,
    )
    .await
    .map_err(ClinicError::Database)?
    .into_iter()
    .map(Appointment::try_from)
    .collect::<ClinicResult<Vec<Appointment>>>()?;

    let response = build_slots_response(&hours, &appointments, &ctx)?;

    info!(
        "Slots for {} ({} min) on {}: {} offered, {} free",
        service.name,
        ctx.duration,
        request.date,
        response.slots.len(),
        response
            .slots
            .iter()
            .filter(|slot| slot.estado == SlotStatus::Libre)
            .count()
    );

    Ok(Json(response))
}
