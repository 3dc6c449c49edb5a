use super::*;

#[test]
fn new_trims_trailing_slash() {
    let api = HttpApi::new("http://localhost:8000/api/");
    assert_eq!(api.base_url(), "http://localhost:8000/api");
}

#[test]
fn endpoint_formats_backend_path_with_trailing_slash() {
    let api = HttpApi::new(DEFAULT_API_URL);
    assert_eq!(api.endpoint("login"), "http://127.0.0.1:8000/api/login/");
    assert_eq!(api.endpoint("home"), "http://127.0.0.1:8000/api/home/");
    assert_eq!(api.endpoint("register"), "http://127.0.0.1:8000/api/register/");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

#[test]
fn default_matches_build_env() {
    assert_eq!(HttpApi::default(), HttpApi::from_build_env());
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_calls_are_unavailable_outside_the_browser() {
    let api = HttpApi::new(DEFAULT_API_URL);
    let credentials = Credentials { username: "u".to_owned(), password: "p".to_owned() };
    assert_eq!(api.login(&credentials).await, Err(ApiError::Unavailable));
    assert_eq!(api.fetch_home("tok").await, Err(ApiError::Unavailable));
}
