use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Location;

// Fields the client must send are still `Option` so a missing field
// surfaces as a named 400 instead of a generic deserialization error.

/// Request a one-time code
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
}

/// Submit a one-time code and the new account's name
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Partial profile update; only provided fields are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 50))]
    #[serde(default)]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    #[serde(default)]
    pub last_name: Option<String>,
    #[validate(range(min = 18, max = 100))]
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub bio: Option<String>,
    #[validate(length(max = 6))]
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRequest {
    #[serde(default)]
    pub target_user_id: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Returns the field's value unless it is absent or empty
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
