use crate::models::DbAppointment;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// A dentist's appointments on `date` that still hold their time.
pub async fn get_active_appointments_by_date(
    pool: &Pool<Postgres>,
    dentist_id: i64,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(
        r#"
        SELECT id, dentist_id, service_id, date, start_time, end_time, status, created_at
        FROM appointments
        WHERE dentist_id = $1
          AND date = $2
          AND status NOT IN ('CANCELADA', 'INASISTENCIA')
        ORDER BY start_time ASC
        "#,
    )
    .bind(dentist_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Dentist {} has {} active appointments on {}",
        dentist_id,
        appointments.len(),
        date
    );
    Ok(appointments)
}
