use actix_web::{web, HttpResponse};

use crate::core::{fixtures, tokens};
use crate::error::{ok_json, ApiError, ApiResult};
use crate::models::{
    present, DiscoverProfilesResponse, MatchesResponse, NewMatch, SwipeDirection, SwipeRequest,
    SwipeResponse,
};

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::get().to(discover_profiles))
        .route("/swipe", web::post().to(swipe))
        .route("/matches", web::get().to(list_matches));
}

/// GET /api/discover/profiles
async fn discover_profiles() -> ApiResult<HttpResponse> {
    let profiles = fixtures::discovery_deck();

    ok_json(&DiscoverProfilesResponse {
        success: true,
        total: profiles.len(),
        profiles,
    })
}

/// Swipe endpoint
///
/// POST /api/discover/swipe
///
/// Request body:
/// ```json
/// {
///   "targetUserId": "string",
///   "direction": "like|pass"
/// }
/// ```
///
/// A pass never matches. A like matches on a coin flip.
async fn swipe(req: web::Json<SwipeRequest>) -> ApiResult<HttpResponse> {
    let (target_user_id, direction) = match (present(&req.target_user_id), present(&req.direction)) {
        (Some(target), Some(direction)) => (target, direction),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: targetUserId, direction",
            ))
        }
    };

    let direction: SwipeDirection = direction.parse().map_err(|_| {
        ApiError::bad_request("Invalid swipe direction. Must be 'like' or 'pass'")
    })?;

    let is_match = direction == SwipeDirection::Like && tokens::coin_flip();

    let new_match = is_match.then(|| NewMatch {
        id: tokens::match_id(),
        user_id: target_user_id.to_string(),
        matched_at: chrono::Utc::now(),
    });

    tracing::info!("Swipe {} on {} (match: {})", direction, target_user_id, is_match);

    ok_json(&SwipeResponse {
        success: true,
        target_user_id: target_user_id.to_string(),
        direction,
        is_match,
        new_match,
    })
}

/// GET /api/discover/matches
async fn list_matches() -> ApiResult<HttpResponse> {
    ok_json(&MatchesResponse {
        success: true,
        matches: fixtures::matches(chrono::Utc::now()),
    })
}
