use super::*;

#[test]
fn credentials_serialize_with_backend_field_names() {
    let body = serde_json::to_value(Credentials {
        username: "testuser".to_owned(),
        password: "testpassword".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "username": "testuser", "password": "testpassword" }));
}

#[test]
fn registration_request_serializes_all_three_fields() {
    let body = serde_json::to_value(RegistrationRequest {
        username: "a".to_owned(),
        email: "a@x.com".to_owned(),
        password: "p".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "username": "a", "email": "a@x.com", "password": "p" }));
}

#[test]
fn login_response_ignores_extra_fields() {
    let parsed: LoginResponse =
        serde_json::from_value(serde_json::json!({ "access": "tok123", "refresh": "r-1" })).unwrap();
    assert_eq!(parsed.access, "tok123");
}

#[test]
fn login_response_requires_access() {
    let parsed = serde_json::from_value::<LoginResponse>(serde_json::json!({ "error": "Invalid credentials" }));
    assert!(parsed.is_err());
}

#[test]
fn home_response_reads_message() {
    let parsed: HomeResponse =
        serde_json::from_value(serde_json::json!({ "message": "Welcome to the API!", "user": 7 })).unwrap();
    assert_eq!(parsed.message, "Welcome to the API!");
}
