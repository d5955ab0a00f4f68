use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.rest_url, "/scm/api/rest/");
    assert_eq!(config.upstream_url, None);
    assert_eq!(config.title, "SCM Manager");
}

#[test]
fn explicit_values_are_normalized() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("SCM_REST_URL", "/api/rest"),
        ("SCM_UPSTREAM_URL", "http://scm.local:8081/"),
        ("CONSOLE_TITLE", "  Build Server  "),
    ])
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.rest_url, "/api/rest/");
    assert_eq!(config.upstream_url.as_deref(), Some("http://scm.local:8081"));
    assert_eq!(config.title, "Build Server");
    assert_eq!(config.proxy_prefix(), "/api/rest");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = config_from(&[("PORT", " "), ("SCM_UPSTREAM_URL", ""), ("CONSOLE_TITLE", "")]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.upstream_url, None);
    assert_eq!(config.title, "SCM Manager");
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn relative_rest_url_is_rejected() {
    assert_eq!(
        config_from(&[("SCM_REST_URL", "api/rest")]),
        Err(ConfigError::InvalidRestUrl("api/rest/".to_owned()))
    );
}

#[test]
fn non_http_upstream_is_rejected() {
    assert!(matches!(config_from(&[("SCM_UPSTREAM_URL", "scm.local")]), Err(ConfigError::InvalidUpstream(_))));
}

#[test]
fn settings_carry_rest_url_and_title() {
    let config = config_from(&[("SCM_REST_URL", "/r/"), ("CONSOLE_TITLE", "T")]).unwrap();
    let settings = config.settings();
    assert_eq!(settings.rest_url, "/r/");
    assert_eq!(settings.title, "T");
}
