use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::fixtures;
use crate::error::{ok_json, ApiResult};
use crate::models::{ProfileResponse, UpdateProfileRequest, UpdateProfileResponse};

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/update", web::patch().to(update_profile))
        .route("/{userId}", web::get().to(get_profile));
}

/// GET /api/profile/{userId}
async fn get_profile(user_id: web::Path<String>) -> ApiResult<HttpResponse> {
    let user_id = user_id.into_inner();
    tracing::debug!("Serving profile for {}", user_id);

    ok_json(&ProfileResponse {
        success: true,
        profile: fixtures::profile(&user_id),
    })
}

/// Update profile endpoint
///
/// PATCH /api/profile/update
///
/// Request body (every field optional):
/// ```json
/// {
///   "firstName": "John",
///   "lastName": "Doe",
///   "age": 28,
///   "gender": "male",
///   "bio": "string",
///   "photos": ["url"],
///   "interests": ["string"],
///   "location": { "city": "Hanoi", "country": "Vietnam" }
/// }
/// ```
///
/// Provided fields are echoed back over the default profile. Nothing is kept.
async fn update_profile(req: web::Json<UpdateProfileRequest>) -> ApiResult<HttpResponse> {
    let update = req.into_inner();

    if let Err(errors) = update.validate() {
        tracing::info!("Validation failed for profile update: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let profile = fixtures::apply_update(fixtures::current_profile(), update);

    ok_json(&UpdateProfileResponse {
        success: true,
        message: "Profile updated successfully".to_string(),
        profile,
        updated_at: chrono::Utc::now(),
    })
}
