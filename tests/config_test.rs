use std::{collections::HashMap, net::SocketAddr, path::PathBuf, time::Duration};

use artistscope::{
    config::{self, Settings},
    error::ConfigError,
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

const CREDENTIALS: [(&str, &str); 2] = [
    ("SPOTIFY_API_AUTH_CLIENT_ID", "id"),
    ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
];

#[test]
fn test_defaults_apply() {
    let settings = Settings::from_lookup(lookup(&CREDENTIALS)).unwrap();

    assert_eq!(settings.client_id, "id");
    assert_eq!(settings.client_secret, "secret");
    assert_eq!(settings.api_url, config::DEFAULT_API_URL);
    assert_eq!(settings.token_url, config::DEFAULT_TOKEN_URL);
    assert_eq!(
        settings.server_addr,
        "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
    );
    assert_eq!(settings.image_fallback, config::DEFAULT_IMAGE_FALLBACK);
    assert_eq!(settings.request_timeout, Duration::from_secs(10));
    assert_eq!(settings.search_page_size, 50);
    assert_eq!(settings.search_max_results, 1000);
    assert_eq!(settings.public_dir, PathBuf::from("public"));
}

#[test]
fn test_missing_client_secret() {
    let err = Settings::from_lookup(lookup(&[("SPOTIFY_API_AUTH_CLIENT_ID", "id")])).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_SECRET")
    ));
}

#[test]
fn test_blank_value_counts_as_missing() {
    let err = Settings::from_lookup(lookup(&[
        ("SPOTIFY_API_AUTH_CLIENT_ID", "  "),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID")));
}

#[test]
fn test_overrides_are_parsed() {
    let mut vars = CREDENTIALS.to_vec();
    vars.extend([
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
        ("SERVER_ADDRESS", "0.0.0.0:8080"),
        ("REQUEST_TIMEOUT_SECS", "3"),
        ("SEARCH_PAGE_SIZE", "20"),
        ("IMAGE_FALLBACK_URL", "/fallback.png"),
    ]);

    let settings = Settings::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(settings.api_url, "http://localhost:9000/v1");
    assert_eq!(settings.server_addr.port(), 8080);
    assert_eq!(settings.request_timeout, Duration::from_secs(3));
    assert_eq!(settings.search_page_size, 20);
    assert_eq!(settings.image_fallback, "/fallback.png");
}

#[test]
fn test_invalid_numbers_are_reported() {
    let mut vars = CREDENTIALS.to_vec();
    vars.push(("REQUEST_TIMEOUT_SECS", "soon"));
    let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            name: "REQUEST_TIMEOUT_SECS",
            ..
        }
    ));
}

#[test]
fn test_page_size_must_be_in_range() {
    for bad in ["0", "51"] {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("SEARCH_PAGE_SIZE", bad));
        let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "SEARCH_PAGE_SIZE",
                ..
            }
        ));
    }
}

#[test]
fn test_debug_hides_secret() {
    let settings = Settings::from_lookup(lookup(&CREDENTIALS)).unwrap();
    let printed = format!("{:?}", settings);
    assert!(printed.contains("<redacted>"));
    assert!(!printed.contains("\"secret\""));
}

#[test]
fn test_max_results_must_be_in_range() {
    for bad in ["0", "1001"] {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("SEARCH_MAX_RESULTS", bad));
        let err = Settings::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "SEARCH_MAX_RESULTS",
                ..
            }
        ));
    }

    let mut vars = CREDENTIALS.to_vec();
    vars.push(("SEARCH_MAX_RESULTS", "200"));
    let settings = Settings::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(settings.search_max_results, 200);
}
