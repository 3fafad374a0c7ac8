use super::{apply_env_overrides, apply_file_overrides, resolve_settings, Settings};

use std::{collections::HashMap, path::PathBuf};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_bind_locally_without_static_dir() {
    let settings = Settings::default();
    assert_eq!(settings.server_bind, "127.0.0.1:5000");
    assert_eq!(settings.static_dir, None);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_overrides_replace_only_present_keys() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "bind_addr = \"0.0.0.0:8080\"\nstatic_dir = \"dist\"\n")
        .expect("parse");
    assert_eq!(settings.server_bind, "0.0.0.0:8080");
    assert_eq!(settings.static_dir, Some(PathBuf::from("dist")));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_accepts_server_bind_alias() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "server_bind = \"127.0.0.1:9000\"").expect("parse");
    assert_eq!(settings.server_bind, "127.0.0.1:9000");
}

#[test]
fn malformed_file_is_an_error_and_leaves_settings_alone() {
    let mut settings = Settings::default();
    assert!(apply_file_overrides(&mut settings, "bind_addr = [").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn prefixed_env_vars_win_over_short_names() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("SERVER_BIND", "127.0.0.1:1"),
            ("APP__BIND_ADDR", "127.0.0.1:2"),
            ("APP__LOG_FILTER", "debug,tower_http=trace"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2");
    assert_eq!(settings.log_filter, "debug,tower_http=trace");
}

#[test]
fn blank_static_dir_disables_static_hosting() {
    let mut settings = Settings {
        static_dir: Some(PathBuf::from("dist")),
        ..Settings::default()
    };
    apply_env_overrides(&mut settings, env(&[("APP__STATIC_DIR", "  ")]));
    assert_eq!(settings.static_dir, None);
}

#[test]
fn blank_log_filter_is_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, env(&[("RUST_LOG", "")]));
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_returned_to_the_caller() {
    let (settings, error) = resolve_settings(
        Some("bind_addr = ["),
        env(&[("APP__BIND_ADDR", "127.0.0.1:7000")]),
    );
    let error = error.expect("parse error is reported");
    assert!(format!("{error:#}").contains("failed to parse server config"));
    assert_eq!(settings.server_bind, "127.0.0.1:7000");
    assert_eq!(settings.static_dir, None);
}

#[test]
fn missing_file_resolves_without_error() {
    let (settings, error) = resolve_settings(None, env(&[]));
    assert!(error.is_none());
    assert_eq!(settings, Settings::default());

    let (settings, error) = resolve_settings(Some("log_filter = \"debug\""), env(&[]));
    assert!(error.is_none());
    assert_eq!(settings.log_filter, "debug");
}
