//! Serve-side runtime configuration.
//!
//! The server fronting the application needs to know whether it is proxying a
//! live dev server or serving built assets, and where those assets live.

use std::path::PathBuf;

use url::Url;

use crate::config::defaults::env_vars;
use crate::config::{BuildConfig, ConfigError, EnvSnapshot};

/// How the serve side locates front-end assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Serve assets from the dev server instead of the build output.
    pub dev_mode: bool,

    /// Absolute URL built assets are served from (CDN or static host).
    /// When unset, assets are referenced relative to the site root.
    pub static_url: Option<Url>,

    /// Explicit manifest location, overriding the build-derived default.
    pub manifest_path: Option<PathBuf>,
}

impl ServeConfig {
    /// Resolve the serve configuration from an environment snapshot.
    pub fn resolve(env: &EnvSnapshot) -> Result<ServeConfig, ConfigError> {
        let dev_mode = match env.get_non_empty(env_vars::DEV_MODE) {
            None => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| ConfigError::InvalidBool {
                var: env_vars::DEV_MODE,
                value: raw.to_string(),
            })?,
        };

        let static_url = env
            .get_non_empty(env_vars::STATIC_URL)
            .map(|raw| {
                Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
                    var: env_vars::STATIC_URL,
                    value: raw.to_string(),
                    source,
                })
            })
            .transpose()?;

        let manifest_path = env
            .get_non_empty(env_vars::MANIFEST_PATH)
            .map(PathBuf::from);

        Ok(ServeConfig {
            dev_mode,
            static_url,
            manifest_path,
        })
    }

    /// URL prefix for built asset paths, without a trailing slash.
    ///
    /// Empty when no static URL is configured: asset paths are then rooted at
    /// the serving host (`/build/assets/app-4589e4.js`).
    pub fn asset_base(&self) -> String {
        match &self.static_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => String::new(),
        }
    }

    /// The manifest location: the explicit override, or where the build
    /// configuration says the bundler emits it.
    pub fn manifest_path_or(&self, build: &BuildConfig) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| build.manifest_path())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = ServeConfig::resolve(&EnvSnapshot::empty()).unwrap();
        assert!(!config.dev_mode);
        assert_eq!(config.static_url, None);
        assert_eq!(config.manifest_path, None);
        assert_eq!(config.asset_base(), "");
    }

    #[test]
    fn test_dev_mode_spellings() {
        for raw in ["1", "true", "TRUE", "yes", "Yes"] {
            let env = EnvSnapshot::from([("VIADUCT_DEV_MODE", raw)]);
            assert!(ServeConfig::resolve(&env).unwrap().dev_mode, "{raw}");
        }
        for raw in ["0", "false", "no", "NO", ""] {
            let env = EnvSnapshot::from([("VIADUCT_DEV_MODE", raw)]);
            assert!(!ServeConfig::resolve(&env).unwrap().dev_mode, "{raw}");
        }
    }

    #[test]
    fn test_dev_mode_rejects_garbage() {
        let env = EnvSnapshot::from([("VIADUCT_DEV_MODE", "maybe")]);
        let err = ServeConfig::resolve(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
        assert!(err.to_string().contains("VIADUCT_DEV_MODE"));
    }

    #[test]
    fn test_static_url_trims_trailing_slash() {
        let env = EnvSnapshot::from([("VIADUCT_STATIC_URL", "https://cdn.example.com/assets/")]);
        let config = ServeConfig::resolve(&env).unwrap();
        assert_eq!(config.asset_base(), "https://cdn.example.com/assets");
    }

    #[test]
    fn test_static_url_rejects_relative() {
        let env = EnvSnapshot::from([("VIADUCT_STATIC_URL", "assets/static")]);
        let err = ServeConfig::resolve(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
        assert!(err.to_string().contains("VIADUCT_STATIC_URL"));
    }

    #[test]
    fn test_manifest_path_override() {
        let root = if cfg!(windows) {
            Path::new(r"C:\srv\app")
        } else {
            Path::new("/srv/app")
        };
        let build = BuildConfig::resolve(root).unwrap();

        let config = ServeConfig::resolve(&EnvSnapshot::empty()).unwrap();
        assert_eq!(config.manifest_path_or(&build), build.manifest_path());

        let env = EnvSnapshot::from([("VIADUCT_MANIFEST_PATH", "/srv/app/dist/manifest.json")]);
        let config = ServeConfig::resolve(&env).unwrap();
        assert_eq!(
            config.manifest_path_or(&build),
            PathBuf::from("/srv/app/dist/manifest.json")
        );
    }
}
