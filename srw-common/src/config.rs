//! Gateway configuration resolution
//!
//! Startup settings follow the standard priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable config file never aborts startup; resolution
//! falls through to the compiled defaults.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

/// Default listen address
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5730";

/// Environment variable for the listen address
pub const LISTEN_ADDR_ENV: &str = "SRW_LISTEN_ADDR";
/// Environment variable for the recognition mode
pub const MODE_ENV: &str = "SRW_MODE";
/// Environment variable for the upstream prediction service base URL
pub const UPSTREAM_BASE_URL_ENV: &str = "SRW_UPSTREAM_BASE_URL";

/// Recognition deployment mode. One deployment runs exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognitionMode {
    /// Fabricate results locally after an artificial delay
    #[default]
    Simulated,
    /// Forward uploads to an external prediction service
    Proxied,
}

impl FromStr for RecognitionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(RecognitionMode::Simulated),
            "proxied" => Ok(RecognitionMode::Proxied),
            other => Err(Error::Config(format!(
                "Invalid recognition mode: {} (expected 'simulated' or 'proxied')",
                other
            ))),
        }
    }
}

impl fmt::Display for RecognitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionMode::Simulated => write!(f, "simulated"),
            RecognitionMode::Proxied => write!(f, "proxied"),
        }
    }
}

/// Optional TOML config file schema
///
/// Located at `srw/srw-gw.toml` under the platform config directory
/// (e.g. `~/.config/srw/srw-gw.toml` on Linux).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub listen_addr: Option<String>,
    pub mode: Option<String>,
    pub upstream_base_url: Option<String>,
}

impl TomlConfig {
    /// Load the config file from its platform location, if present.
    pub fn load() -> TomlConfig {
        match config_file_path() {
            Some(path) if path.exists() => match Self::load_from(&path) {
                Ok(config) => {
                    info!("Loaded config file: {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Ignoring unreadable config file {}: {}", path.display(), e);
                    TomlConfig::default()
                }
            },
            _ => TomlConfig::default(),
        }
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: &Path) -> Result<TomlConfig> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    }
}

/// Platform config file location
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("srw").join("srw-gw.toml"))
}

/// Command-line overrides (highest priority tier)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub listen_addr: Option<String>,
    pub mode: Option<String>,
    pub upstream_base_url: Option<String>,
}

/// Process-wide gateway configuration.
///
/// Resolved once at startup and injected into the router state; never
/// read from ambient globals after that.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    /// Active recognition variant for this deployment
    pub mode: RecognitionMode,
    /// Base URL of the upstream prediction service (proxied mode)
    pub upstream_base_url: Option<String>,
}

impl GatewayConfig {
    /// Resolve the full configuration from all tiers.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<GatewayConfig> {
        let toml_config = TomlConfig::load();
        Self::resolve_with(overrides, &toml_config)
    }

    /// Resolve with an explicit TOML tier (tests inject their own).
    pub fn resolve_with(
        overrides: &ConfigOverrides,
        toml_config: &TomlConfig,
    ) -> Result<GatewayConfig> {
        let listen_addr_raw = resolve_setting(
            overrides.listen_addr.as_deref(),
            LISTEN_ADDR_ENV,
            toml_config.listen_addr.as_deref(),
        )
        .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let listen_addr: SocketAddr = listen_addr_raw
            .parse()
            .map_err(|_| Error::Config(format!("Invalid listen address: {}", listen_addr_raw)))?;

        let mode = match resolve_setting(
            overrides.mode.as_deref(),
            MODE_ENV,
            toml_config.mode.as_deref(),
        ) {
            Some(raw) => raw.parse()?,
            None => RecognitionMode::default(),
        };

        let upstream_base_url = resolve_setting(
            overrides.upstream_base_url.as_deref(),
            UPSTREAM_BASE_URL_ENV,
            toml_config.upstream_base_url.as_deref(),
        );

        if mode == RecognitionMode::Proxied && upstream_base_url.is_none() {
            return Err(Error::Config(format!(
                "Proxied mode requires an upstream base URL. Configure using one of:\n\
                 1. CLI: --upstream-base-url https://host\n\
                 2. Environment: {}=https://host\n\
                 3. TOML config: srw/srw-gw.toml (upstream_base_url = \"https://host\")",
                UPSTREAM_BASE_URL_ENV
            )));
        }

        if mode == RecognitionMode::Simulated && upstream_base_url.is_some() {
            warn!("Upstream base URL is configured but mode is simulated; it will not be used");
        }

        Ok(GatewayConfig {
            listen_addr,
            mode,
            upstream_base_url,
        })
    }
}

/// Single-setting resolution: CLI argument → environment variable → TOML.
///
/// Returns None when no tier supplies a value.
fn resolve_setting(cli: Option<&str>, env_var: &str, toml_value: Option<&str>) -> Option<String> {
    if let Some(value) = cli {
        return Some(value.to_string());
    }

    if let Ok(value) = std::env::var(env_var) {
        if !value.trim().is_empty() {
            return Some(value);
        }
    }

    toml_value.map(|v| v.to_string())
}
