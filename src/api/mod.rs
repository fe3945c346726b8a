//! HTTP API: route handlers and middleware

pub mod middleware;
pub mod services;

use actix_web::web;

/// Register extractor configs and every route on an app
///
/// Handlers expect `web::Data<Arc<PredictionService>>` and
/// `web::Data<AppStartTime>` to be provided by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(services::json_config())
        .app_data(services::query_config())
        .configure(services::prediction_routes)
        .service(services::health_routes());
}
