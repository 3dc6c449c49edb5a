use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(401).to_string(), "request failed: 401");
}

#[test]
fn only_status_errors_are_rejections() {
    assert!(ApiError::Status(400).is_rejection());
    assert!(!ApiError::Network("reset".to_owned()).is_rejection());
    assert!(!ApiError::Decode("missing field `access`".to_owned()).is_rejection());
    assert!(!ApiError::Unavailable.is_rejection());
}
