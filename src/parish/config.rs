use crate::confirm::{ConfirmLabels, DEFAULT_CANCEL_LABEL, DEFAULT_CONFIRM_LABEL};
use crate::controller::DEFAULT_LOAD_TIMEOUT;
use crate::error::{ParishError, Result};
use crate::failure::DEFAULT_LOGIN_PATH;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the config directory when set.
pub const CONFIG_DIR_ENV: &str = "PARISH_CONFIG_DIR";
const DEFAULT_LATENCY_MS: u64 = 300;

pub const KEYS: [&str; 5] = [
    "latency-ms",
    "load-timeout-ms",
    "login-path",
    "confirm-label",
    "cancel-label",
];

/// Configuration for parish, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ParishConfig {
    /// Simulated latency of the built-in demo data source
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Upper bound for a single data source load
    #[serde(default = "default_load_timeout_ms")]
    pub load_timeout_ms: u64,

    /// Where expired sessions are sent
    #[serde(default = "default_login_path")]
    pub login_path: String,

    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,

    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
}

fn default_latency_ms() -> u64 {
    DEFAULT_LATENCY_MS
}

fn default_load_timeout_ms() -> u64 {
    DEFAULT_LOAD_TIMEOUT.as_millis() as u64
}

fn default_login_path() -> String {
    DEFAULT_LOGIN_PATH.to_string()
}

fn default_confirm_label() -> String {
    DEFAULT_CONFIRM_LABEL.to_string()
}

fn default_cancel_label() -> String {
    DEFAULT_CANCEL_LABEL.to_string()
}

impl Default for ParishConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            load_timeout_ms: default_load_timeout_ms(),
            login_path: default_login_path(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
        }
    }
}

impl ParishConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ParishConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    pub fn labels(&self) -> ConfirmLabels {
        ConfirmLabels::new(&self.confirm_label, &self.cancel_label)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "latency-ms" => Some(self.latency_ms.to_string()),
            "load-timeout-ms" => Some(self.load_timeout_ms.to_string()),
            "login-path" => Some(self.login_path.clone()),
            "confirm-label" => Some(self.confirm_label.clone()),
            "cancel-label" => Some(self.cancel_label.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "latency-ms" => self.latency_ms = parse_millis(key, value)?,
            "load-timeout-ms" => {
                let millis = parse_millis(key, value)?;
                if millis == 0 {
                    return Err(ParishError::Config(
                        "load-timeout-ms must be greater than zero".into(),
                    ));
                }
                self.load_timeout_ms = millis;
            }
            "login-path" => {
                if !value.starts_with('/') {
                    return Err(ParishError::Config(format!(
                        "login-path must start with '/': {}",
                        value
                    )));
                }
                self.login_path = value.to_string();
            }
            "confirm-label" => self.confirm_label = non_empty(key, value)?,
            "cancel-label" => self.cancel_label = non_empty(key, value)?,
            other => {
                return Err(ParishError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

/// The directory holding `config.json`: `$PARISH_CONFIG_DIR` when set,
/// otherwise the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "parish", "parish")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ParishError::Config("Could not determine config dir".into()))
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ParishError::Config(format!("{} expects milliseconds, got '{}'", key, value)))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ParishError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}
