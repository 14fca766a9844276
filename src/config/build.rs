//! Build configuration.
//!
//! Entry points, the output directory, and the source alias are static
//! policy: only the project root varies. Everything is resolved to an
//! absolute path at construction time, never at consumption time. The
//! resolver does no filesystem I/O; the paths it produces may not exist yet.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{
    APP_ENTRY_NAME, APP_ENTRY_SOURCE, ASSET_SOURCE_DIR, BUILD_OUTPUT_DIR, MANIFEST_SUBPATH,
    SOURCE_ALIAS,
};
use crate::config::ConfigError;

/// Resolved build configuration.
///
/// Immutable once constructed. Resolution is idempotent: the same project
/// root always yields identical values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    /// Emit a manifest mapping entry names to hashed output files.
    ///
    /// Always true: the consuming server locates built assets through the
    /// manifest at request time.
    pub manifest_enabled: bool,

    /// Absolute directory the bundler writes build output into.
    pub output_dir: PathBuf,

    /// Logical entry name to absolute source path.
    pub entry_points: BTreeMap<String, PathBuf>,

    /// Import alias to the absolute directory it substitutes for.
    ///
    /// The alias must resolve identically in dev and production builds, so it
    /// is fixed here rather than derived per mode.
    pub path_aliases: BTreeMap<String, PathBuf>,
}

impl BuildConfig {
    /// Resolve the build configuration against an absolute project root.
    pub fn resolve(project_root: &Path) -> Result<BuildConfig, ConfigError> {
        if !project_root.is_absolute() {
            return Err(ConfigError::ProjectRootNotAbsolute {
                path: project_root.to_path_buf(),
            });
        }

        let mut entry_points = BTreeMap::new();
        entry_points.insert(
            APP_ENTRY_NAME.to_string(),
            project_root.join(APP_ENTRY_SOURCE),
        );

        let mut path_aliases = BTreeMap::new();
        path_aliases.insert(
            SOURCE_ALIAS.to_string(),
            project_root.join(ASSET_SOURCE_DIR),
        );

        Ok(BuildConfig {
            manifest_enabled: true,
            output_dir: project_root.join(BUILD_OUTPUT_DIR),
            entry_points,
            path_aliases,
        })
    }

    /// Where the bundler emits the manifest, inside the output directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(MANIFEST_SUBPATH)
    }

    /// The source path of the single application entry.
    pub fn app_entry(&self) -> &Path {
        &self.entry_points[APP_ENTRY_NAME]
    }
}
