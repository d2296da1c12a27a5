use actix_web::{web, HttpResponse};
use validator::Validate;

use super::AppState;
use crate::core::{is_valid_otp_code, is_valid_phone, tokens};
use crate::error::{ok_json, ApiError, ApiResult};
use crate::models::{
    present, RefreshTokenRequest, RefreshTokenResponse, SendOtpRequest, SendOtpResponse,
    SuccessResponse, User, VerifyOtpRequest, VerifyOtpResponse,
};

/// Configure all auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/send-otp", web::post().to(send_otp))
        .route("/verify-otp", web::post().to(verify_otp))
        .route("/refresh", web::post().to(refresh))
        .route("/logout", web::post().to(logout));
}

/// Send OTP endpoint
///
/// POST /api/auth/send-otp
///
/// Request body:
/// ```json
/// {
///   "phone": "+84912345678",
///   "email": "optional@example.com"
/// }
/// ```
///
/// No message is delivered; the generated code only shows up in the log.
async fn send_otp(
    state: web::Data<AppState>,
    req: web::Json<SendOtpRequest>,
) -> ApiResult<HttpResponse> {
    let req = req.into_inner();

    let phone = present(&req.phone).ok_or_else(|| ApiError::bad_request("Phone number required"))?;

    if !is_valid_phone(phone) {
        tracing::info!("Rejected send-otp for malformed phone {:?}", phone);
        return Err(ApiError::bad_request("Invalid phone format"));
    }

    if req.validate().is_err() {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let otp = tokens::otp_code();
    if state.otp.log_codes {
        tracing::info!("OTP for {}: {}", phone, otp);
    }

    ok_json(&SendOtpResponse {
        success: true,
        message: "OTP sent successfully".to_string(),
        phone: phone.to_string(),
        email: req.email.clone(),
        expires_in: state.otp.expires_in_secs,
    })
}

/// Verify OTP endpoint
///
/// POST /api/auth/verify-otp
///
/// Any six-digit code verifies. Returns a freshly fabricated user and token
/// pair on every call.
async fn verify_otp(req: web::Json<VerifyOtpRequest>) -> ApiResult<HttpResponse> {
    let req = req.into_inner();

    let (phone, code, first_name, last_name) = match (
        present(&req.phone),
        present(&req.code),
        present(&req.first_name),
        present(&req.last_name),
    ) {
        (Some(phone), Some(code), Some(first), Some(last)) => (phone, code, first, last),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: phone, code, firstName, lastName",
            ))
        }
    };

    if !is_valid_otp_code(code) {
        return Err(ApiError::bad_request("Invalid OTP format"));
    }

    if req.validate().is_err() {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    let user = User {
        id: tokens::user_id(),
        phone: phone.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: req.email.clone(),
        verified: true,
        created_at: Some(chrono::Utc::now()),
    };

    tracing::info!("User verified: {} {} ({})", user.first_name, user.last_name, user.phone);

    ok_json(&VerifyOtpResponse {
        success: true,
        message: "Phone verified successfully".to_string(),
        user,
        tokens: tokens::token_pair(),
    })
}

/// Refresh token endpoint
///
/// POST /api/auth/refresh
async fn refresh(req: web::Json<RefreshTokenRequest>) -> ApiResult<HttpResponse> {
    if present(&req.refresh_token).is_none() {
        return Err(ApiError::bad_request("Refresh token required"));
    }

    tracing::debug!("Issuing access token for refresh request");

    ok_json(&RefreshTokenResponse {
        success: true,
        access_token: tokens::access_token(),
    })
}

/// Logout endpoint; the body, if any, is ignored
async fn logout() -> ApiResult<HttpResponse> {
    ok_json(&SuccessResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    })
}
