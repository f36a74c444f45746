use crate::models::DbWorkingHours;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// A dentist's rows for an ISO weekday (Monday = 1), earliest opening first.
pub async fn get_working_hours_by_weekday(
    pool: &Pool<Postgres>,
    dentist_id: i64,
    weekday: i16,
) -> Result<Vec<DbWorkingHours>> {
    let hours = sqlx::query_as::<_, DbWorkingHours>(
        r#"
        SELECT id, dentist_id, weekday, start_time, end_time
        FROM working_hours
        WHERE dentist_id = $1
          AND weekday = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(dentist_id)
    .bind(weekday)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Dentist {} has {} working windows on weekday {}",
        dentist_id,
        hours.len(),
        weekday
    );
    Ok(hours)
}
