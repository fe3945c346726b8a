//! Prediction endpoints
//!
//! - `POST /predict`
//! - `GET /get_symptoms?age=<int>`
//! - `GET /get_recovery`

use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use std::sync::Arc;
use tracing::trace;

use super::helpers::api_result;
use crate::services::{PredictRequest, PredictionService};

#[derive(Debug, Deserialize)]
pub struct SymptomsQuery {
    #[serde(default)]
    pub age: i32,
}

pub async fn predict(
    service: web::Data<Arc<PredictionService>>,
    body: web::Json<PredictRequest>,
) -> impl Responder {
    let request = body.into_inner();
    trace!(
        "Predict request: age={:?}, {} symptoms",
        request.age,
        request.symptoms.len()
    );
    api_result(service.predict(request).await)
}

pub async fn get_symptoms(
    service: web::Data<Arc<PredictionService>>,
    query: web::Query<SymptomsQuery>,
) -> impl Responder {
    api_result(service.symptoms_for_age(query.age).await)
}

pub async fn get_recovery(service: web::Data<Arc<PredictionService>>) -> HttpResponse {
    api_result(service.recovery_estimates().await)
}

/// 预测路由配置
pub fn prediction_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/predict", web::post().to(predict))
        .route("/get_symptoms", web::get().to(get_symptoms))
        .route("/get_recovery", web::get().to(get_recovery));
}
