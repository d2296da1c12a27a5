use actix_web::{web, HttpResponse};

use super::AppState;
use crate::error::{ok_json, ApiResult};
use crate::models::HealthResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Liveness probe
async fn health_check(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    ok_json(&HealthResponse {
        status: "ok".to_string(),
        message: "Backend is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
