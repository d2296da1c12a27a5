//! Lume API Mock - stateless stand-in for the Lume dating app backend
//!
//! Serves the auth, profile, discovery and messaging endpoints the mobile
//! client talks to. Responses are canned, randomly fabricated, or echoed
//! from the request; nothing is stored between calls.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

use actix_web::web;

// Re-export commonly used types
pub use config::Settings;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{configure_routes, not_found, AppState};

/// JSON extractor config that renders body errors in the API's envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::handle_json_payload_error)
}
