// Unit tests for Lume API Mock

use chrono::Utc;
use lume_api_mock::core::{fixtures, is_valid_otp_code, is_valid_phone, tokens};
use lume_api_mock::models::{SwipeDirection, UpdateProfileRequest};
use lume_api_mock::{ApiError, ErrorResponse};

#[test]
fn test_phone_examples_from_clients() {
    for phone in ["+84912345678", "+14155550123", "447911123456"] {
        assert!(is_valid_phone(phone), "{} should be accepted", phone);
    }
    for phone in ["+84 912 345 678", "(415) 555-0123", "+"] {
        assert!(!is_valid_phone(phone), "{} should be rejected", phone);
    }
}

#[test]
fn test_every_generated_otp_verifies() {
    for _ in 0..100 {
        assert!(is_valid_otp_code(&tokens::otp_code()));
    }
}

#[test]
fn test_generated_ids_differ() {
    // Shape only; collisions are astronomically unlikely but not impossible
    let a = tokens::access_token();
    let b = tokens::access_token();
    assert!(a.starts_with("access_") && b.starts_with("access_"));
    assert_eq!(a.len(), b.len());
}

#[test]
fn test_update_keeps_current_user_identity() {
    let update = UpdateProfileRequest {
        first_name: Some("Johnny".to_string()),
        ..Default::default()
    };

    let profile = fixtures::apply_update(fixtures::current_profile(), update);

    assert_eq!(profile.user_id, fixtures::CURRENT_USER_ID);
    assert_eq!(profile.first_name, "Johnny");
    assert_eq!(profile.last_name, fixtures::current_user().last_name);
}

#[test]
fn test_discovery_deck_excludes_current_user() {
    assert!(fixtures::discovery_deck()
        .iter()
        .all(|card| card.user_id != fixtures::CURRENT_USER_ID));
}

#[test]
fn test_thread_includes_both_participants() {
    let messages = fixtures::thread("conv_001", Utc::now());
    assert!(messages.iter().any(|m| m.sender_id == fixtures::CURRENT_USER_ID));
    assert!(messages.iter().any(|m| m.sender_id != fixtures::CURRENT_USER_ID));
}

#[test]
fn test_swipe_direction_wire_format() {
    assert_eq!(serde_json::to_value(SwipeDirection::Like).unwrap(), "like");
    assert_eq!(SwipeDirection::Pass.to_string(), "pass");
}

#[test]
fn test_error_envelope_omits_absent_keys() {
    let body = serde_json::to_value(ErrorResponse::new("Refresh token required")).unwrap();
    assert_eq!(body.as_object().unwrap().len(), 1);

    let internal = serde_json::to_value(ApiError::Internal("disk on fire".into()).envelope()).unwrap();
    assert_eq!(internal["message"], "disk on fire");
    assert!(internal.get("path").is_none());
}
