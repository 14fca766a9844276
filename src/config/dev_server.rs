//! Dev server configuration.
//!
//! Resolves the host, port, and CORS allow-list the front-end dev server
//! should bind with. Resolution is pure: it reads nothing but the supplied
//! [`EnvSnapshot`] and fails fast on values that would produce an invalid
//! listener.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::defaults::{
    self, env_vars, CORS_CREDENTIALS, DEFAULT_CORS_ORIGINS, DEFAULT_DEV_HOST, DEFAULT_DEV_PORT,
    STRICT_PORT,
};
use crate::config::{ConfigError, EnvSnapshot};

/// Resolved dev server configuration.
///
/// Immutable once constructed; produced once per process invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerConfig {
    /// Host the dev server binds to.
    pub host: String,

    /// Port the dev server binds to.
    pub port: u16,

    /// Fail instead of silently falling back to another port.
    ///
    /// Always true: a misconfigured front-end proxy must not end up pointing
    /// at the wrong port.
    pub strict_port: bool,

    /// Origins allowed to make cross-origin requests to the dev server.
    pub cors_origins: BTreeSet<String>,

    /// Whether CORS responses allow credentials. Fixed policy, always true.
    pub cors_credentials: bool,
}

impl DevServerConfig {
    /// Resolve the dev server configuration from an environment snapshot.
    ///
    /// - `DEV_HOST`: host, defaults to `localhost`.
    /// - `DEV_PORT`: port, defaults to 5173. A present, non-empty value must
    ///   be a decimal integer in 1-65535 or resolution fails.
    /// - `DEV_CORS_ORIGINS`: comma-separated origin list; falls back to the
    ///   localhost defaults when unset or empty after trimming.
    pub fn resolve(env: &EnvSnapshot) -> Result<DevServerConfig, ConfigError> {
        let host = env
            .get_non_empty(env_vars::DEV_HOST)
            .unwrap_or(DEFAULT_DEV_HOST)
            .to_string();

        let port = resolve_port(env)?;
        let cors_origins = resolve_cors_origins(env);

        Ok(DevServerConfig {
            host,
            port,
            strict_port: STRICT_PORT,
            cors_origins,
            cors_credentials: CORS_CREDENTIALS,
        })
    }

    /// Base URL of the dev server, e.g. `http://localhost:5173`.
    pub fn server_url(&self) -> String {
        format!(
            "{}://{}:{}",
            defaults::DEV_SERVER_PROTOCOL,
            self.host,
            self.port
        )
    }

    /// URL of the bundler's hot-reload client module.
    pub fn hmr_client_url(&self) -> String {
        format!("{}/{}", self.server_url(), defaults::HMR_CLIENT_PATH)
    }
}

fn resolve_port(env: &EnvSnapshot) -> Result<u16, ConfigError> {
    let raw = match env.get_non_empty(env_vars::DEV_PORT) {
        Some(raw) => raw,
        None => return Ok(DEFAULT_DEV_PORT),
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort {
            var: env_vars::DEV_PORT,
            value: raw.to_string(),
        })?;

    if !(1..=65535).contains(&value) {
        return Err(ConfigError::PortOutOfRange {
            var: env_vars::DEV_PORT,
            value,
        });
    }

    Ok(value as u16)
}

fn resolve_cors_origins(env: &EnvSnapshot) -> BTreeSet<String> {
    let origins: BTreeSet<String> = env
        .get(env_vars::DEV_CORS_ORIGINS)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if origins.is_empty() {
        return DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect();
    }

    for origin in &origins {
        if url::Url::parse(origin).is_err() {
            tracing::warn!("CORS origin `{}` does not look like a URL", origin);
        }
    }

    origins
}
