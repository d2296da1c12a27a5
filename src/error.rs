use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a handler can surface to a client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid JSON: {0}")]
    InvalidPayload(String),

    #[error("Not found: {method} {path}")]
    NotFound { path: String, method: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        ApiError::BadRequest(reason.into())
    }

    pub fn not_found(req: &HttpRequest) -> Self {
        ApiError::NotFound {
            path: req.path().to_string(),
            method: req.method().to_string(),
        }
    }

    /// Uniform JSON envelope for this error
    pub fn envelope(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(reason) => ErrorResponse::new(reason.clone()),
            ApiError::Validation(errors) => {
                ErrorResponse::new("Validation failed").with_message(errors.to_string())
            }
            ApiError::InvalidPayload(message) => {
                ErrorResponse::new("Invalid JSON").with_message(message.clone())
            }
            ApiError::NotFound { path, method } => ErrorResponse {
                error: "Not found".to_string(),
                path: Some(path.clone()),
                method: Some(method.clone()),
                message: None,
            },
            ApiError::Internal(message) => {
                ErrorResponse::new("Internal server error").with_message(message.clone())
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error envelope: `{error, path?, method?, message?}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            path: None,
            method: None,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) | ApiError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(message) = self {
            tracing::error!("Unhandled error: {}", message);
        }
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

/// Serialize `body` into a 200 response, routing serialization failures
/// through the 500 envelope
pub fn ok_json<T: Serialize>(body: &T) -> ApiResult<HttpResponse> {
    let bytes = serde_json::to_vec(body)?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(bytes))
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidPayload(err.to_string()).into()
}
