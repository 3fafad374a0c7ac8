use std::{fs, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    /// Directory holding the built single-page client. When unset only the
    /// API routes are served.
    pub static_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            static_dir: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(alias = "server_bind")]
    bind_addr: Option<String>,
    static_dir: Option<String>,
    log_filter: Option<String>,
}

/// Defaults, then `server.toml` in the working directory, then environment.
///
/// A malformed file is skipped and handed back so the caller can report it
/// once logging is up.
pub fn load_settings() -> (Settings, Option<anyhow::Error>) {
    let raw = fs::read_to_string(CONFIG_FILE).ok();
    resolve_settings(raw.as_deref(), |key| std::env::var(key).ok())
}

pub fn resolve_settings(
    raw_file: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Settings, Option<anyhow::Error>) {
    let mut settings = Settings::default();
    let file_error = raw_file.and_then(|raw| apply_file_overrides(&mut settings, raw).err());
    apply_env_overrides(&mut settings, lookup);
    (settings, file_error)
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileConfig = toml::from_str(raw).context("failed to parse server config")?;
    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.static_dir {
        settings.static_dir = non_empty_path(&v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    Ok(())
}

/// Later keys in each group win, so `APP__*` overrides the short form.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["SERVER_BIND", "APP__BIND_ADDR"] {
        if let Some(v) = lookup(key) {
            settings.server_bind = v;
        }
    }

    for key in ["STATIC_DIR", "APP__STATIC_DIR"] {
        if let Some(v) = lookup(key) {
            settings.static_dir = non_empty_path(&v);
        }
    }

    for key in ["RUST_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = lookup(key) {
            if !v.trim().is_empty() {
                settings.log_filter = v;
            }
        }
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| PathBuf::from(raw))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
