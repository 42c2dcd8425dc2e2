//! Configuration loading for DataSync services
//!
//! Each setting resolves with the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::reconcile::DEFAULT_RELATIVE_TOLERANCE;
use crate::{Error, Result};

/// Default bind address for the reconciliation console
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5740";

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Relative tolerance for the reconciliation pass/fail check
    pub relative_tolerance: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            // Compiled default is valid by construction
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
        }
    }
}

/// On-disk config file shape (`datasync/config.toml`)
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    bind_addr: Option<String>,
    relative_tolerance: Option<f64>,
}

impl ServiceConfig {
    /// Resolve configuration from CLI args, environment, and config file
    ///
    /// `cli_bind` and `cli_tolerance` come from clap; environment variables
    /// are `DATASYNC_BIND_ADDR` and `DATASYNC_TOLERANCE`.
    pub fn resolve(cli_bind: Option<&str>, cli_tolerance: Option<f64>) -> Result<Self> {
        let file = load_config_file()?;

        let bind_str = match cli_bind {
            Some(addr) => addr.to_string(),
            None => match std::env::var("DATASYNC_BIND_ADDR") {
                Ok(addr) => addr,
                Err(_) => file
                    .bind_addr
                    .clone()
                    .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            },
        };
        let bind_addr: SocketAddr = bind_str
            .parse()
            .map_err(|_| Error::Config(format!("Invalid bind address: {bind_str}")))?;

        let relative_tolerance = match cli_tolerance {
            Some(t) => t,
            None => match std::env::var("DATASYNC_TOLERANCE") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid tolerance: {raw}")))?,
                Err(_) => file
                    .relative_tolerance
                    .unwrap_or(DEFAULT_RELATIVE_TOLERANCE),
            },
        };
        if !(relative_tolerance.is_finite() && relative_tolerance >= 0.0) {
            return Err(Error::Config(format!(
                "Tolerance must be a non-negative number, got {relative_tolerance}"
            )));
        }

        Ok(Self {
            bind_addr,
            relative_tolerance,
        })
    }
}

/// Load the TOML config file if one exists
///
/// Looks in the user config directory (`~/.config/datasync/config.toml` on
/// Linux), then `/etc/datasync/config.toml`. A missing file is not an
/// error; a malformed one is.
fn load_config_file() -> Result<ConfigFile> {
    for path in candidate_config_paths() {
        if path.exists() {
            debug!("Loading config file: {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            return toml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {e}", path.display())));
        }
    }
    Ok(ConfigFile::default())
}

fn candidate_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("datasync").join("config.toml"));
    }
    if cfg!(target_os = "linux") {
        paths.push(PathBuf::from("/etc/datasync/config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr.port(), 5740);
        assert_eq!(config.relative_tolerance, DEFAULT_RELATIVE_TOLERANCE);
    }

    #[test]
    fn cli_args_take_priority() {
        let config = ServiceConfig::resolve(Some("0.0.0.0:8080"), Some(0.01)).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.relative_tolerance, 0.01);
    }

    #[test]
    fn invalid_bind_addr_rejected() {
        assert!(ServiceConfig::resolve(Some("not-an-address"), None).is_err());
    }

    #[test]
    fn negative_tolerance_rejected() {
        assert!(ServiceConfig::resolve(None, Some(-0.5)).is_err());
    }
}
