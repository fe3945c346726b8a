//! 响应构建帮助函数

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::error_code::ErrorCode;
use crate::errors::SymptomaticError;

/// `{ "error": "<message>", "code": <int> }`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

/// 构建 JSON 成功响应
pub fn json_ok<T: Serialize>(data: &T) -> HttpResponse {
    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(data)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ErrorBody {
            error: message.into(),
            code,
        })
}

/// 从 SymptomaticError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_symptomatic(err: &SymptomaticError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("{} [{}]: {}", err.error_type(), err.code(), err.message());
    } else {
        warn!("{} [{}]: {}", err.error_type(), err.code(), err.message());
    }
    error_response(status, ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T: Serialize>(result: Result<T, SymptomaticError>) -> HttpResponse {
    match result {
        Ok(data) => json_ok(&data),
        Err(e) => error_from_symptomatic(&e),
    }
}
