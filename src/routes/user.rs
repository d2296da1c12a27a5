use actix_web::{web, HttpResponse};

use crate::core::fixtures;
use crate::error::{ok_json, ApiResult};
use crate::models::UserResponse;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(current_user));
}

/// GET /api/user/me
///
/// No token is read; the same account comes back for every caller.
async fn current_user() -> ApiResult<HttpResponse> {
    ok_json(&UserResponse {
        success: true,
        user: fixtures::current_user(),
    })
}
