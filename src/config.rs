// src/config.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

pub const CONFIG_FILE: &str = "lead_exchange.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub max_workers: usize,
    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "lead_exchange=debug".
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            max_workers: 8,
            log_filter: "info".into(),
        }
    }
}

/// Optional overrides read from `lead_exchange.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    max_workers: Option<usize>,
    log_filter: Option<String>,
}

impl Settings {
    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.bind_addr {
            self.bind_addr = v;
        }
        if let Some(v) = file.max_workers {
            self.max_workers = v;
        }
        if let Some(v) = file.log_filter {
            self.log_filter = v;
        }
    }

    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LEAD_EXCHANGE_BIND") {
            self.bind_addr = v;
        }
        if let Some(v) = lookup("LEAD_EXCHANGE_WORKERS") {
            match v.parse::<usize>() {
                Ok(n) if n > 0 => self.max_workers = n,
                _ => warn!(value = %v, "ignoring invalid LEAD_EXCHANGE_WORKERS"),
            }
        }
        if let Some(v) = lookup("LEAD_EXCHANGE_LOG") {
            self.log_filter = v;
        }
    }
}

fn read_file_settings(path: &Path) -> Option<FileSettings> {
    let raw = fs::read_to_string(path).ok()?;
    match toml::from_str::<FileSettings>(&raw) {
        Ok(file) => Some(file),
        Err(e) => {
            // The subscriber is not installed yet, so this goes to stderr.
            eprintln!("Ignoring malformed {}: {e}", path.display());
            None
        }
    }
}

/// Defaults, then the config file (if any), then environment variables.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from<F>(path: &Path, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();
    if let Some(file) = read_file_settings(path) {
        settings.apply_file(file);
    }
    settings.apply_env(lookup);
    settings
}
