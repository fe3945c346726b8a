//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::SymptomaticError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 1000-1099: 通用错误
/// - 2000-2099: 预测错误
/// - 3000-3099: 存储与文件错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 预测错误 2000-2099
    ValidationFailed = 2000,
    ModelUnavailable = 2001,
    PredictionFailed = 2002,

    // 存储与文件错误 3000-3099
    DatabaseError = 3000,
    FileReadError = 3001,
}

impl From<&SymptomaticError> for ErrorCode {
    fn from(err: &SymptomaticError) -> Self {
        match err {
            SymptomaticError::Validation(_) => ErrorCode::ValidationFailed,
            SymptomaticError::Serialization(_) => ErrorCode::BadRequest,
            SymptomaticError::NotFound(_) => ErrorCode::NotFound,
            SymptomaticError::ModelLoad(_) => ErrorCode::ModelUnavailable,
            SymptomaticError::Prediction(_) => ErrorCode::PredictionFailed,
            SymptomaticError::DatabaseConnection(_) => ErrorCode::ServiceUnavailable,
            SymptomaticError::DatabaseConfig(_) | SymptomaticError::DatabaseOperation(_) => {
                ErrorCode::DatabaseError
            }
            SymptomaticError::FileOperation(_) => ErrorCode::FileReadError,
        }
    }
}
