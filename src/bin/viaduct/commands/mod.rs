//! Command implementations

use std::path::PathBuf;

use anyhow::{Context, Result};

pub mod assets;
pub mod completions;
pub mod config;
pub mod doctor;

/// Absolutize the `--root` argument against the current directory.
///
/// The library rejects relative roots, so the boundary work happens here.
pub fn project_root(arg: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(match arg {
        Some(path) => viaduct::util::fs::absolutize(&cwd, &path),
        None => cwd,
    })
}
