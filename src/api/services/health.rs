use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tracing::{error, info, trace};

use crate::prediction::AgeGroup;
use crate::services::PredictionService;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthStorageCheck {
    pub status: String,
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions_logged: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthModelCheck {
    pub age_group: AgeGroup,
    pub loaded: bool,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthChecks {
    pub storage: HealthStorageCheck,
    pub models: Vec<HealthModelCheck>,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub checks: HealthChecks,
    pub response_time_ms: u32,
}

/// "1d 2h 3m 4s"，省略前导的零单位
fn format_uptime(seconds: i64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    let secs = seconds % 60;
    match (days, hours, minutes) {
        (0, 0, 0) => format!("{}s", secs),
        (0, 0, _) => format!("{}m {}s", minutes, secs),
        (0, _, _) => format!("{}h {}m {}s", hours, minutes, secs),
        _ => format!("{}d {}h {}m {}s", days, hours, minutes, secs),
    }
}

/// Health Service
///
/// 直接查询预测日志与模型缓存，不经过预测流水线。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<Arc<PredictionService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let storage_status = match service.prediction_log() {
            None => HealthStorageCheck {
                status: "disabled".to_string(),
                backend: None,
                predictions_logged: None,
                error: None,
            },
            Some(log) => {
                let backend = Some(log.backend_name());
                match tokio::time::timeout(Duration::from_secs(5), log.logged_count()).await {
                    Ok(Ok(count)) => {
                        trace!("Storage health check passed, {} predictions logged", count);
                        HealthStorageCheck {
                            status: "healthy".to_string(),
                            backend,
                            predictions_logged: Some(count),
                            error: None,
                        }
                    }
                    Ok(Err(e)) => {
                        error!("Storage health check failed: {}", e);
                        HealthStorageCheck {
                            status: "unhealthy".to_string(),
                            backend,
                            predictions_logged: None,
                            error: Some(format!("database error: {}", e)),
                        }
                    }
                    Err(_) => {
                        error!("Storage health check timeout");
                        HealthStorageCheck {
                            status: "unhealthy".to_string(),
                            backend,
                            predictions_logged: None,
                            error: Some("timeout".to_string()),
                        }
                    }
                }
            }
        };

        let models = AgeGroup::iter()
            .map(|group| HealthModelCheck {
                age_group: group,
                loaded: service.registry().is_loaded(group),
            })
            .collect();

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0);

        let is_healthy = storage_status.status != "unhealthy";
        let status = if is_healthy { "healthy" } else { "unhealthy" };

        let health_data = HealthResponse {
            status: status.to_string(),
            timestamp: now.to_rfc3339(),
            uptime: uptime_seconds as u32,
            checks: HealthChecks {
                storage: storage_status,
                models,
            },
            response_time_ms: start_time.elapsed().as_millis() as u32,
        };

        info!(
            "Health check completed in {:?}, status: {}, uptime: {}",
            start_time.elapsed(),
            status,
            format_uptime(uptime_seconds)
        );

        let response_status = if is_healthy {
            actix_web::http::StatusCode::OK
        } else {
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        };

        HttpResponse::build(response_status)
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(health_data)
    }

    // 简单的就绪检查，只返回 200 状态码
    pub async fn readiness_check() -> impl Responder {
        trace!("Received readiness check request");

        HttpResponse::Ok()
            .append_header(("Content-Type", "text/plain"))
            .body("OK")
    }

    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/ready", web::head().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
        .route("/live", web::head().to(HealthService::liveness_check))
}
