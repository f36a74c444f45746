use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create dentists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dentists (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(200) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id BIGSERIAL PRIMARY KEY,
            dentist_id BIGINT NOT NULL REFERENCES dentists(id) ON DELETE CASCADE,
            name VARCHAR(200) NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            price_cents BIGINT NOT NULL DEFAULT 0,
            duration_minutes INTEGER NOT NULL DEFAULT 30,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            CONSTRAINT positive_duration CHECK (duration_minutes > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create working_hours table
    // end_time > start_time is checked by the slot generator so a bad row
    // shows up as a configuration error instead of being rejected silently
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS working_hours (
            id BIGSERIAL PRIMARY KEY,
            dentist_id BIGINT NOT NULL REFERENCES dentists(id) ON DELETE CASCADE,
            weekday SMALLINT NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            CONSTRAINT iso_weekday CHECK (weekday BETWEEN 1 AND 7)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id BIGSERIAL PRIMARY KEY,
            dentist_id BIGINT NOT NULL REFERENCES dentists(id) ON DELETE CASCADE,
            service_id BIGINT NOT NULL REFERENCES services(id) ON DELETE CASCADE,
            date DATE NOT NULL,
            start_time TIME NOT NULL,
            end_time TIME NOT NULL,
            status VARCHAR(20) NOT NULL DEFAULT 'PENDIENTE',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_services_dentist_id ON services(dentist_id);
        CREATE INDEX IF NOT EXISTS idx_working_hours_dentist_weekday ON working_hours(dentist_id, weekday);
        CREATE INDEX IF NOT EXISTS idx_appointments_dentist_date ON appointments(dentist_id, date);
        CREATE INDEX IF NOT EXISTS idx_appointments_service_id ON appointments(service_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
