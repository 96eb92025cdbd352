use super::*;

#[test]
fn from_value_unset_uses_default() {
    assert_eq!(ApiConfig::from_value(None).base_url, DEFAULT_API_URL);
}

#[test]
fn from_value_empty_uses_default() {
    assert_eq!(ApiConfig::from_value(Some("")).base_url, DEFAULT_API_URL);
}

#[test]
fn from_value_keeps_explicit_url() {
    let cfg = ApiConfig::from_value(Some("https://api.example.test"));
    assert_eq!(cfg.base_url, "https://api.example.test");
}

#[test]
fn default_matches_local_api() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:8000");
}

#[test]
fn url_for_concatenates_without_normalizing() {
    let cfg = ApiConfig::new("http://localhost:8000");
    assert_eq!(cfg.url_for("/users/me"), "http://localhost:8000/users/me");

    let trailing = ApiConfig::new("http://api.test/v1/");
    assert_eq!(trailing.url_for("/users/me"), "http://api.test/v1//users/me");
}

#[test]
fn from_env_reads_api_url() {
    unsafe { std::env::set_var(API_URL_ENV, "http://from-env.test") };
    assert_eq!(ApiConfig::from_env().base_url, "http://from-env.test");
    unsafe { std::env::remove_var(API_URL_ENV) };
    assert_eq!(ApiConfig::from_env().base_url, DEFAULT_API_URL);
}
