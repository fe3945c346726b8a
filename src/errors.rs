use std::fmt;

#[derive(Debug, Clone)]
pub enum SymptomaticError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    ModelLoad(String),
    Prediction(String),
}

impl SymptomaticError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            SymptomaticError::DatabaseConfig(_) => "E001",
            SymptomaticError::DatabaseConnection(_) => "E002",
            SymptomaticError::DatabaseOperation(_) => "E003",
            SymptomaticError::FileOperation(_) => "E004",
            SymptomaticError::Validation(_) => "E005",
            SymptomaticError::NotFound(_) => "E006",
            SymptomaticError::Serialization(_) => "E007",
            SymptomaticError::ModelLoad(_) => "E008",
            SymptomaticError::Prediction(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            SymptomaticError::DatabaseConfig(_) => "Database Configuration Error",
            SymptomaticError::DatabaseConnection(_) => "Database Connection Error",
            SymptomaticError::DatabaseOperation(_) => "Database Operation Error",
            SymptomaticError::FileOperation(_) => "File Operation Error",
            SymptomaticError::Validation(_) => "Validation Error",
            SymptomaticError::NotFound(_) => "Resource Not Found",
            SymptomaticError::Serialization(_) => "Serialization Error",
            SymptomaticError::ModelLoad(_) => "Model Load Error",
            SymptomaticError::Prediction(_) => "Prediction Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            SymptomaticError::DatabaseConfig(msg) => msg,
            SymptomaticError::DatabaseConnection(msg) => msg,
            SymptomaticError::DatabaseOperation(msg) => msg,
            SymptomaticError::FileOperation(msg) => msg,
            SymptomaticError::Validation(msg) => msg,
            SymptomaticError::NotFound(msg) => msg,
            SymptomaticError::Serialization(msg) => msg,
            SymptomaticError::ModelLoad(msg) => msg,
            SymptomaticError::Prediction(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    pub fn http_status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            SymptomaticError::Validation(_) | SymptomaticError::Serialization(_) => {
                StatusCode::BAD_REQUEST
            }
            SymptomaticError::NotFound(_) => StatusCode::NOT_FOUND,
            SymptomaticError::DatabaseConnection(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SymptomaticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SymptomaticError {}

// 便捷的构造函数
impl SymptomaticError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::Serialization(msg.into())
    }

    pub fn model_load<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::ModelLoad(msg.into())
    }

    pub fn prediction<T: Into<String>>(msg: T) -> Self {
        SymptomaticError::Prediction(msg.into())
    }
}

impl From<sea_orm::DbErr> for SymptomaticError {
    fn from(err: sea_orm::DbErr) -> Self {
        SymptomaticError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SymptomaticError {
    fn from(err: std::io::Error) -> Self {
        SymptomaticError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SymptomaticError {
    fn from(err: serde_json::Error) -> Self {
        SymptomaticError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for SymptomaticError {
    fn from(err: csv::Error) -> Self {
        SymptomaticError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SymptomaticError>;
