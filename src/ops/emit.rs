//! Resolved-configuration emission.
//!
//! Resolves everything the bundler-side configuration needs in one shot and
//! serializes it as JSON. The bundler config file reads this instead of
//! duplicating the resolution rules in JavaScript.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{BuildConfig, ConfigError, DevServerConfig, EnvSnapshot};
use crate::util::fs;

/// The full configuration produced by one process invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub dev_server: DevServerConfig,
    pub build: BuildConfig,
}

impl ResolvedConfig {
    /// Resolve dev-server and build configuration together.
    pub fn resolve(env: &EnvSnapshot, project_root: &Path) -> Result<ResolvedConfig, ConfigError> {
        Ok(ResolvedConfig {
            dev_server: DevServerConfig::resolve(env)?,
            build: BuildConfig::resolve(project_root)?,
        })
    }

    /// Serialize to JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.context("failed to serialize resolved configuration")
    }
}

/// Write a JSON payload to a file, creating parent directories.
pub fn write_json(path: &Path, json: &str) -> Result<()> {
    fs::write_string(path, json)?;
    tracing::debug!("wrote resolved configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from(r"C:\srv\app")
        } else {
            PathBuf::from("/srv/app")
        }
    }

    #[test]
    fn test_resolve_and_serialize() {
        let config = ResolvedConfig::resolve(&EnvSnapshot::empty(), &root()).unwrap();
        let json = config.to_json(false).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dev_server"]["port"], 5173);
        assert_eq!(value["dev_server"]["strict_port"], true);
        assert_eq!(value["build"]["manifest_enabled"], true);
        assert!(value["build"]["entry_points"]["app"]
            .as_str()
            .unwrap()
            .ends_with("app.js"));
    }

    #[test]
    fn test_resolve_propagates_config_errors() {
        let env = EnvSnapshot::from([("DEV_PORT", "abc")]);
        let err = ResolvedConfig::resolve(&env, &root()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn test_write_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("out/viaduct.json");

        let config = ResolvedConfig::resolve(&EnvSnapshot::empty(), &root()).unwrap();
        write_json(&out, &config.to_json(true).unwrap()).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.contains("\"port\": 5173"));
    }
}
