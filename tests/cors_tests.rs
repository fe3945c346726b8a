//! CORS middleware tests
//!
//! Builds the middleware from `CorsConfig` and checks preflight responses.

use actix_web::http::{Method, StatusCode, header};
use actix_web::test::{self, TestRequest};
use actix_web::{App, HttpResponse, web};

use symptomatic::config::CorsConfig;
use symptomatic::runtime::modes::server::build_cors_middleware;

async fn ok_handler() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

fn preflight(origin: &str) -> TestRequest {
    TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/predict")
        .insert_header((header::ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
}

#[actix_rt::test]
async fn test_allowed_origin_preflight() {
    let config = CorsConfig {
        enabled: true,
        allowed_origins: vec!["https://clinic.example.com".to_string()],
        max_age: 600,
    };
    let app = test::init_service(
        App::new()
            .wrap(build_cors_middleware(&config))
            .route("/predict", web::post().to(ok_handler)),
    )
    .await;

    let resp = test::call_service(&app, preflight("https://clinic.example.com").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://clinic.example.com"
    );
}

#[actix_rt::test]
async fn test_unlisted_origin_is_rejected() {
    let config = CorsConfig {
        enabled: true,
        allowed_origins: vec!["https://clinic.example.com".to_string()],
        max_age: 600,
    };
    let app = test::init_service(
        App::new()
            .wrap(build_cors_middleware(&config))
            .route("/predict", web::post().to(ok_handler)),
    )
    .await;

    let resp = test::call_service(&app, preflight("https://evil.example.com").to_request()).await;
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[actix_rt::test]
async fn test_wildcard_allows_any_origin() {
    let config = CorsConfig {
        enabled: true,
        allowed_origins: vec!["*".to_string()],
        max_age: 600,
    };
    let app = test::init_service(
        App::new()
            .wrap(build_cors_middleware(&config))
            .route("/predict", web::post().to(ok_handler)),
    )
    .await;

    let resp = test::call_service(&app, preflight("https://anywhere.example.org").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some());
}

#[actix_rt::test]
async fn test_same_origin_request_passes_when_disabled() {
    let app = test::init_service(
        App::new()
            .wrap(build_cors_middleware(&CorsConfig::default()))
            .route("/predict", web::post().to(ok_handler)),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::post().uri("/predict").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
