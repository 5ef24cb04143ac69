use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind, DEFAULT_BIND);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("BALANCEBITE_BIND", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn rejects_invalid_bind() {
    let err = ServerConfig::from_lookup(lookup(&[("BALANCEBITE_BIND", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "BALANCEBITE_BIND", value: "localhost".to_owned() });
}
