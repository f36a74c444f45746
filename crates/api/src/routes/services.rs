use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/servicios", get(handlers::services::list_services))
        .route("/api/servicios/", get(handlers::services::list_services))
}
