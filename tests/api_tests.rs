//! HTTP API integration tests
//!
//! Drives the routes through `actix_web::test` with temp-dir fixtures.

mod common;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use common::{Fixture, MemoryLog, fixture};
use symptomatic::api::services::AppStartTime;
use symptomatic::api::middleware::RequestIdMiddleware;
use symptomatic::services::PredictionService;
use symptomatic::storage::SharedPredictionLog;

macro_rules! init_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(Arc::new($service)))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(symptomatic::api::configure),
        )
        .await
    };
}

fn service(fx: &Fixture) -> PredictionService {
    fx.service(None)
}

// =============================================================================
// POST /predict
// =============================================================================

#[actix_rt::test]
async fn test_predict_returns_ranked_report() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "age": 34, "symptoms": ["fever"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["top_prediction"]["disease"], "Flu");
    assert_eq!(body["top_prediction"]["severity"], "severe");
    assert_eq!(body["top_prediction"]["age_group"], "Adult");
    assert_eq!(body["top_prediction"]["remedies"], json!(["Rest", "Fluids"]));
    assert_eq!(body["other_predictions"].as_array().unwrap().len(), 2);
}

#[actix_rt::test]
async fn test_predict_accepts_fractional_age() {
    let fx = fixture();
    let log = Arc::new(MemoryLog::default());
    let app = init_app!(fx.service(Some(log.clone() as SharedPredictionLog)));

    let req = TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "age": 34.5, "symptoms": ["fever"], "patient_name": "Lin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["top_prediction"]["disease"], "Flu");
    assert_eq!(body["top_prediction"]["age_group"], "Adult");

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].age, 34);
}

#[actix_rt::test]
async fn test_predict_negative_age_is_bad_request() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "age": -2.5, "symptoms": ["fever"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2000);
}

#[actix_rt::test]
async fn test_predict_without_symptoms_is_bad_request() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "age": 34, "symptoms": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Age and symptoms are required.");
    assert_eq!(body["code"], 2000);
}

#[actix_rt::test]
async fn test_predict_malformed_json_uses_error_shape() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::post()
        .uri("/predict")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[actix_rt::test]
async fn test_predict_missing_model_is_server_error() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "age": 4, "symptoms": ["rash"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2001);
    assert!(body["error"].as_str().unwrap().contains("child_model.json"));
}

#[actix_rt::test]
async fn test_predict_logs_named_patient() {
    let fx = fixture();
    let log = Arc::new(MemoryLog::default());
    let app = init_app!(fx.service(Some(log.clone() as SharedPredictionLog)));

    let req = TestRequest::post()
        .uri("/predict")
        .set_json(json!({ "age": 34, "symptoms": ["headache"], "patient_name": "Mira" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let entries = log.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].disease, "Migraine");
}

// =============================================================================
// GET /get_symptoms
// =============================================================================

#[actix_rt::test]
async fn test_get_symptoms_for_adult() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_symptoms?age=30").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["symptoms"], json!(["fever", "cough", "headache"]));
}

#[actix_rt::test]
async fn test_get_symptoms_defaults_to_child() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_symptoms").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["symptoms"], json!([]));
}

#[actix_rt::test]
async fn test_get_symptoms_negative_age_maps_to_child() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_symptoms?age=-5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["symptoms"], json!([]));
}

#[actix_rt::test]
async fn test_get_symptoms_non_numeric_age_is_bad_request() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_symptoms?age=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

// =============================================================================
// GET /get_recovery
// =============================================================================

#[actix_rt::test]
async fn test_get_recovery_returns_file_contents() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_recovery").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "Flu": "7-10 days", "Migraine": "4-72 hours" }));
}

#[actix_rt::test]
async fn test_get_recovery_missing_file_is_not_found() {
    let fx = fixture();
    std::fs::remove_file(&fx.config.data.recovery_file).unwrap();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_recovery").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1004);
}

#[actix_rt::test]
async fn test_get_recovery_invalid_json_is_server_error() {
    let fx = fixture();
    std::fs::write(&fx.config.data.recovery_file, "{ broken").unwrap();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/get_recovery").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Health
// =============================================================================

#[actix_rt::test]
async fn test_health_reports_storage_and_models() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "disabled");
    assert_eq!(body["checks"]["models"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_health_unhealthy_when_log_fails() {
    let fx = fixture();
    let app = init_app!(fx.service(Some(Arc::new(MemoryLog::failing()) as SharedPredictionLog)));

    let req = TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_rt::test]
async fn test_health_probes() {
    let fx = fixture();
    let app = init_app!(service(&fx));

    let resp = test::call_service(&app, TestRequest::get().uri("/health/ready").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, TestRequest::get().uri("/health/live").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
