use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE", "No"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert!(config.auth.is_none());
    assert!(!config.cookie_secure);
}

#[test]
fn port_is_parsed() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn api_url_comes_from_public_variable() {
    let config = ServerConfig::from_lookup(lookup(&[("NEXT_PUBLIC_API_URL", "https://api.example.com")])).unwrap();
    assert_eq!(config.api.base_url, "https://api.example.com");
}

#[test]
fn auth_configured_when_both_values_present() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("NEXT_PUBLIC_SUPABASE_URL", "http://auth.local"),
        ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    let auth = config.auth.unwrap();
    assert_eq!(auth.url, "http://auth.local");
    assert_eq!(auth.anon_key, "anon");
}

#[test]
fn cookie_secure_inferred_from_https_auth_url() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("NEXT_PUBLIC_SUPABASE_URL", "https://auth.example.com"),
        ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert!(config.cookie_secure);
}

#[test]
fn cookie_secure_inferred_from_https_api_url() {
    let config = ServerConfig::from_lookup(lookup(&[("NEXT_PUBLIC_API_URL", "https://api.example.com")])).unwrap();
    assert!(config.cookie_secure);
}

#[test]
fn cookie_secure_override_wins() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("NEXT_PUBLIC_API_URL", "https://api.example.com"),
        ("COOKIE_SECURE", "off"),
    ]))
    .unwrap();
    assert!(!config.cookie_secure);

    let config = ServerConfig::from_lookup(lookup(&[("COOKIE_SECURE", "yes")])).unwrap();
    assert!(config.cookie_secure);
}

#[test]
fn unparseable_cookie_secure_falls_back_to_inference() {
    let config = ServerConfig::from_lookup(lookup(&[("COOKIE_SECURE", "maybe")])).unwrap();
    assert!(!config.cookie_secure);
}
