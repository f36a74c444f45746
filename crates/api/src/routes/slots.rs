use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

/// Every client reaches the same handler through its own path: the mobile
/// app under `/api/slots/`, the dentist dashboard under
/// `/dentista/api/slots/` (and the older `get-slots/`), the patient portal
/// under `/paciente/api/horarios/`. Trailing slashes are part of the path.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", get(handlers::slots::get_slots))
        .route("/api/slots/", get(handlers::slots::get_slots))
        .route("/dentista/api/slots/", get(handlers::slots::get_slots))
        .route("/dentista/api/get-slots/", get(handlers::slots::get_slots))
        .route("/paciente/api/horarios/", get(handlers::slots::get_slots))
}
