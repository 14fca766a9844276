//! Bundler manifest parsing.
//!
//! A production build emits `manifest.json`: a mapping from source chunk
//! names to content-hashed output files, plus the CSS and import edges each
//! chunk carries. The serve side reads it at request time to locate built
//! assets; this module owns loading and lookups, [`assets`] owns turning an
//! entry into the assets a page needs.
//!
//! Only the published fields viaduct consumes are deserialized; unknown
//! fields are ignored so bundler-side schema growth is not a break.

pub mod assets;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub use assets::EntrypointAssets;

/// One manifest record: a built chunk and its edges.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Hashed output file, relative to the build output directory.
    pub file: String,

    /// Source path this chunk was built from.
    #[serde(default)]
    pub src: Option<String>,

    /// Whether this chunk is a configured entry point.
    #[serde(default)]
    pub is_entry: bool,

    /// Whether this chunk is only reachable through a dynamic import.
    #[serde(default)]
    pub is_dynamic_entry: bool,

    /// CSS files extracted from this chunk.
    #[serde(default)]
    pub css: Vec<String>,

    /// Static assets referenced by this chunk.
    #[serde(default)]
    pub assets: Vec<String>,

    /// Manifest keys of chunks this one statically imports.
    #[serde(default)]
    pub imports: Vec<String>,

    /// Manifest keys of chunks this one dynamically imports.
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
}

/// A parsed asset manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    chunks: BTreeMap<String, Chunk>,
}

/// Failure to read or use a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest at {path}", path = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest at {path}", path = .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry `{entry}` not found in manifest (entries: {})", .available.join(", "))]
    EntryNotFound {
        entry: String,
        available: Vec<String>,
    },
}

impl Manifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let chunks: BTreeMap<String, Chunk> =
            serde_json::from_str(&contents).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("loaded manifest with {} chunks from {}", chunks.len(), path.display());
        Ok(Manifest { chunks })
    }

    /// Parse a manifest from a JSON string.
    pub fn parse(json: &str) -> Result<Manifest, serde_json::Error> {
        let chunks: BTreeMap<String, Chunk> = serde_json::from_str(json)?;
        Ok(Manifest { chunks })
    }

    /// Look up a chunk by manifest key.
    pub fn chunk(&self, key: &str) -> Option<&Chunk> {
        self.chunks.get(key)
    }

    /// Look up an entry chunk, failing with the list of keys that do exist.
    pub fn entry(&self, key: &str) -> Result<&Chunk, ManifestError> {
        self.chunks
            .get(key)
            .ok_or_else(|| ManifestError::EntryNotFound {
                entry: key.to_string(),
                available: self.entry_names().map(str::to_string).collect(),
            })
    }

    /// Names of all configured entry points in the manifest.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.chunks
            .iter()
            .filter(|(_, c)| c.is_entry)
            .map(|(k, _)| k.as_str())
    }

    /// Number of chunks in the manifest.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the manifest has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[cfg(test)]
pub(crate) const SAMPLE_MANIFEST: &str = r#"{
  "resources/assets/js/app.js": {
    "file": "assets/app-BTcW0bAr.js",
    "name": "app",
    "src": "resources/assets/js/app.js",
    "isEntry": true,
    "imports": ["_vendor-DMv3yPyK.js"],
    "css": ["assets/app-Ch8PCA77.css"]
  },
  "_vendor-DMv3yPyK.js": {
    "file": "assets/vendor-DMv3yPyK.js",
    "css": ["assets/vendor-5ezV5qPV.css"]
  },
  "resources/assets/js/admin.js": {
    "file": "assets/admin-C3dPDrhW.js",
    "src": "resources/assets/js/admin.js",
    "isEntry": true,
    "imports": ["_vendor-DMv3yPyK.js"]
  }
}"#;
