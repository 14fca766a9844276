//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Absolutize a path against a base directory, leaving absolute paths alone.
///
/// Lexical only: the result is not canonicalized and need not exist.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/file.json");

        write_string(&path, "{}").unwrap();

        assert_eq!(read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let tmp = TempDir::new().unwrap();
        let err = read_to_string(&tmp.path().join("missing.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.json"));
    }

    #[test]
    fn test_absolutize() {
        let base = if cfg!(windows) {
            PathBuf::from(r"C:\srv")
        } else {
            PathBuf::from("/srv")
        };

        assert_eq!(absolutize(&base, Path::new("app")), base.join("app"));
        assert_eq!(absolutize(&base, &base.join("other")), base.join("other"));
    }
}
