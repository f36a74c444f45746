use axum::{Json, extract::State};
use consultorio_core::{
    errors::ClinicError,
    models::service::{Service, ServiceResponse},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists the active services, alphabetically
///
/// ```text
/// GET /api/servicios/
/// ```
#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = consultorio_db::repositories::service::list_active_services(&state.db_pool)
        .await
        .map_err(ClinicError::Database)?
        .into_iter()
        .map(Service::from)
        .map(ServiceResponse::from)
        .collect();

    Ok(Json(services))
}
