// Route exports
pub mod auth;
pub mod discover;
pub mod health;
pub mod messages;
pub mod profile;
pub mod user;

use actix_web::{web, HttpRequest, HttpResponse};
use std::time::Instant;

use crate::config::OtpSettings;
use crate::error::ApiError;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub started_at: Instant,
    pub otp: OtpSettings,
}

impl AppState {
    pub fn new(otp: OtpSettings) -> Self {
        Self {
            started_at: Instant::now(),
            otp,
        }
    }
}

/// Method and path of every route, in registration order
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health"),
    ("POST", "/api/auth/send-otp"),
    ("POST", "/api/auth/verify-otp"),
    ("POST", "/api/auth/refresh"),
    ("POST", "/api/auth/logout"),
    ("GET", "/api/user/me"),
    ("PATCH", "/api/profile/update"),
    ("GET", "/api/profile/{userId}"),
    ("GET", "/api/discover/profiles"),
    ("POST", "/api/discover/swipe"),
    ("GET", "/api/discover/matches"),
    ("GET", "/api/messages/conversations"),
    ("POST", "/api/messages/send"),
    ("GET", "/api/messages/{conversationId}"),
    ("PATCH", "/api/messages/{messageId}/read"),
];

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure).service(
        web::scope("/api")
            .service(web::scope("/auth").configure(auth::configure))
            .service(web::scope("/user").configure(user::configure))
            .service(web::scope("/profile").configure(profile::configure))
            .service(web::scope("/discover").configure(discover::configure))
            .service(web::scope("/messages").configure(messages::configure)),
    );
}

/// Fallback for any method/path pair no route claims
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::info!("No route for {} {}", req.method(), req.path());
    Err(ApiError::not_found(&req))
}
