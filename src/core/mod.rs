// Core exports
pub mod fixtures;
pub mod tokens;
pub mod validation;

pub use validation::{is_valid_message_text, is_valid_otp_code, is_valid_phone, MAX_MESSAGE_CHARS};
