pub mod error_code;
pub mod health;
pub mod helpers;
pub mod prediction;

pub use error_code::ErrorCode;
pub use health::{AppStartTime, HealthService, health_routes};
pub use helpers::{ErrorBody, api_result, error_from_symptomatic, error_response, json_ok};
pub use prediction::prediction_routes;

use actix_web::{HttpRequest, error::InternalError, http::StatusCode, web};

use crate::errors::SymptomaticError;

/// 请求体 JSON 解析失败时也返回统一错误格式
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = format!("Invalid JSON body: {}", err);
        let response = error_from_symptomatic(&SymptomaticError::serialization(message));
        InternalError::from_response(err, response).into()
    })
}

/// 查询参数解析失败时也返回统一错误格式
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        let response = error_response(
            StatusCode::BAD_REQUEST,
            ErrorCode::BadRequest,
            format!("Invalid query string: {}", err),
        );
        InternalError::from_response(err, response).into()
    })
}
