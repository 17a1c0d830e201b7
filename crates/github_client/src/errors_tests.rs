//! Tests for the github_client error types.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::ApiError();
    assert_eq!(error.to_string(), "API request failed");
}

#[test]
fn test_auth_error_display_includes_detail() {
    let error = Error::AuthError("bad token".to_string());
    assert_eq!(
        error.to_string(),
        "Failed to authenticate or initialize GitHub client: bad token"
    );
}

#[test]
fn test_deserialization_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = Error::from(serde_error);
    assert!(matches!(error, Error::Deserialization(_)));
    assert!(error.to_string().starts_with("Failed to deserialize"));
}

#[test]
fn test_not_found_display() {
    assert_eq!(Error::NotFound.to_string(), "Resource not found");
}

#[test]
fn test_rate_limit_display() {
    assert_eq!(Error::RateLimitExceeded.to_string(), "Rate limit exceeded");
}
