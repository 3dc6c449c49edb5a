use super::*;

#[test]
fn from_lookup_defaults_port() {
    let cfg = ServerConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_port() {
    let cfg = ServerConfig::from_lookup(|key| (key == "PORT").then(|| " 8080 ".to_owned())).unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(|_| Some("eighty".to_owned())).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT value: eighty");
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    assert!(ServerConfig::from_lookup(|_| Some("70000".to_owned())).is_err());
}
