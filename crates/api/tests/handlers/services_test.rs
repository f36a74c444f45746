use axum::Json;
use consultorio_api::middleware::error_handling::AppError;
use consultorio_core::models::service::{Service, ServiceResponse};
use consultorio_db::models::DbService;
use pretty_assertions::assert_eq;

use crate::test_utils::TestContext;

async fn list_services_wrapper(ctx: &mut TestContext) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let services = ctx
        .service_repo
        .list_active_services()
        .await?
        .into_iter()
        .map(Service::from)
        .map(ServiceResponse::from)
        .collect();

    Ok(Json(services))
}

fn service(id: i64, name: &str, duration_minutes: i32) -> DbService {
    DbService {
        id,
        dentist_id: 1,
        name: name.to_string(),
        description: format!("{} description", name),
        price_cents: 40_000,
        duration_minutes,
        active: true,
    }
}

#[tokio::test]
async fn test_list_services() {
    let mut ctx = TestContext::new();
    let rows = vec![service(4, "Extracción", 60), service(2, "Limpieza", 30)];
    let expected = rows.clone();

    ctx.service_repo
        .expect_list_active_services()
        .times(1)
        .returning(move || Ok(rows.clone()));

    let Json(services) = list_services_wrapper(&mut ctx).await.expect("services");

    assert_eq!(services.len(), 2);
    assert_eq!(services[0].id, expected[0].id);
    assert_eq!(services[0].name, "Extracción");
    assert_eq!(services[1].duration_minutes, 30);
    assert!(services.iter().all(|service| service.active && service.dentist_id == 1));
}

#[tokio::test]
async fn test_list_services_database_error() {
    let mut ctx = TestContext::new();

    ctx.service_repo
        .expect_list_active_services()
        .returning(|| Err(eyre::eyre!("connection refused")));

    let result = list_services_wrapper(&mut ctx).await;

    assert_eq!(
        result.unwrap_err().status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
