use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const SETTINGS_FILE: &str = "mhr.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub summary_mode: bool,
    pub draft_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            summary_mode: false,
            draft_path: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    log_filter: Option<String>,
    summary_mode: Option<bool>,
    draft_path: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        let mut settings = Settings::default();
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
        if let Some(v) = file_cfg.summary_mode {
            settings.summary_mode = v;
        }
        settings.draft_path = file_cfg.draft_path;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("MHR_LOG") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("APP__LOG_FILTER") {
            self.log_filter = v;
        }
        if let Some(v) = lookup("APP__SUMMARY_MODE") {
            if let Ok(parsed) = v.trim().parse::<bool>() {
                self.summary_mode = parsed;
            }
        }
        if let Some(v) = lookup("APP__DRAFT_PATH") {
            self.draft_path = Some(PathBuf::from(v));
        }
    }
}

/// File layer from `mhr.toml` when present, then environment overrides.
/// A malformed file is reported and the defaults are used instead.
pub fn load_settings() -> Settings {
    let path = Path::new(SETTINGS_FILE);
    let mut settings = if path.exists() {
        match Settings::from_file(path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("ignoring {SETTINGS_FILE}: {err}");
                Settings::default()
            }
        }
    } else {
        Settings::default()
    };

    settings.apply_env(|name| {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    });
    settings
}
