//! Configuration for the uispond CLI.
//!
//! TOML file + `UISPOND_*` environment overrides, token resolution
//! (env var → keyring → plaintext), and translation to
//! `uispond_core::UispConfig`. The binary owns flag overrides on top.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use uispond_core::{NeighbourSource, TlsVerification, UispConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no auth token configured (set `token`, `token_env`, or the keyring entry)")]
    NoToken,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// On-disk configuration, merged with `UISPOND_*` environment variables.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Controller API base URL
    /// (e.g., "https://uisp.example.com/nms/api/v2.1").
    pub controller: Option<String>,

    /// Auth token (plaintext — prefer keyring or `token_env`).
    pub token: Option<String>,

    /// Environment variable name containing the auth token.
    pub token_env: Option<String>,

    /// Neighbour resolution: "data-links" or "device-attributes".
    #[serde(default = "default_neighbour_source")]
    pub neighbour_source: String,

    /// Skip TLS verification (self-signed controllers).
    #[serde(default)]
    pub insecure: bool,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            controller: None,
            token: None,
            token_env: None,
            neighbour_source: default_neighbour_source(),
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
        }
    }
}

fn default_neighbour_source() -> String {
    "data-links".into()
}
fn default_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("net", "uispond", "uispond").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("uispond");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the Config from the canonical file path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the Config from an explicit file path + environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("UISPOND_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve the auth token from the credential chain.
pub fn resolve_token(cfg: &Config) -> Result<SecretString, ConfigError> {
    // 1. Config's token_env → env var lookup
    if let Some(ref env_name) = cfg.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new("uispond", "api-token") {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = cfg.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoToken)
}

// ── Translation to runtime config ───────────────────────────────────

/// Build a `UispConfig` from the merged file/env/flag configuration.
pub fn to_uisp_config(cfg: &Config) -> Result<UispConfig, ConfigError> {
    let raw_url = cfg
        .controller
        .as_deref()
        .ok_or_else(|| ConfigError::Validation {
            field: "controller".into(),
            reason: "not set".into(),
        })?;

    let url: url::Url = raw_url.parse().map_err(|_| ConfigError::Validation {
        field: "controller".into(),
        reason: format!("invalid URL: {raw_url}"),
    })?;

    let token = resolve_token(cfg)?;

    let neighbour_source = NeighbourSource::from_str(&cfg.neighbour_source).map_err(|_| {
        ConfigError::Validation {
            field: "neighbour_source".into(),
            reason: format!(
                "expected 'data-links' or 'device-attributes', got '{}'",
                cfg.neighbour_source
            ),
        }
    })?;

    let tls = if cfg.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(UispConfig {
        url,
        token,
        neighbour_source,
        tls,
        timeout: Duration::from_secs(cfg.timeout),
    })
}
