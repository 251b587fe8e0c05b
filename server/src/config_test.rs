use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", " 8080 "),
        ("BIND_ADDR", "127.0.0.1"),
        ("STOREFRONT_LOG", "storefront=debug,tower_http=info"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
    assert_eq!(cfg.log_filter, "storefront=debug,tower_http=info");
}

#[test]
fn ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.addr, "[::1]:3000".parse().unwrap());
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: 70000");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
}

#[test]
fn blank_log_filter_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("STOREFRONT_LOG", "  ")])).unwrap();
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}
