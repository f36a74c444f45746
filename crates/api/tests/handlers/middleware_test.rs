use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use consultorio_api::middleware::error_handling::{AppError, CONFIGURATION_ERROR_MESSAGE};
use consultorio_core::errors::ClinicError;
use rstest::rstest;
use serde_json::Value;

async fn body_of(error: ClinicError) -> (StatusCode, Value) {
    let response = AppError(error).into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, serde_json::from_slice(&bytes).expect("JSON body"))
}

#[rstest]
#[case(ClinicError::NotFound("Service not found".to_string()), StatusCode::NOT_FOUND)]
#[case(ClinicError::Validation("Invalid date".to_string()), StatusCode::BAD_REQUEST)]
#[case(ClinicError::Configuration("interval 0".to_string()), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(ClinicError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    ClinicError::Internal(Box::new(std::io::Error::other("Internal error"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: ClinicError, #[case] expected: StatusCode) {
    let (status, body) = body_of(error).await;

    assert_eq!(status, expected);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_validation_message_reaches_client() {
    let (_, body) = body_of(ClinicError::Validation("Invalid date '2025-13-01'".to_string())).await;

    assert_eq!(body["error"], "Validation error: Invalid date '2025-13-01'");
}

#[tokio::test]
async fn test_configuration_detail_is_hidden_from_client() {
    let (_, body) = body_of(ClinicError::Configuration(
        "Working window must close after it opens (start 18:00, end 09:00)".to_string(),
    ))
    .await;

    assert_eq!(body["error"], CONFIGURATION_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_eyre_report_converts_to_database_error() {
    let error: AppError = eyre::eyre!("pool exhausted").into();

    assert!(matches!(error.0, ClinicError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
