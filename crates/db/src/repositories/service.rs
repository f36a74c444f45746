use crate::models::DbService;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn list_active_services(pool: &Pool<Postgres>) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, dentist_id, name, description, price_cents, duration_minutes, active
        FROM services
        WHERE active = TRUE
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} active services", services.len());
    Ok(services)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<DbService>> {
    tracing::debug!("Getting service by id: {}", id);

    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, dentist_id, name, description, price_cents, duration_minutes, active
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}
