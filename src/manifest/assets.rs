//! Entry asset resolution and tag rendering.
//!
//! Resolves an entry chunk into the concrete assets a page needs (the
//! stylesheets pulled in by the entry and everything it statically imports,
//! plus the entry script itself) and renders them as HTML tags. Dynamic
//! imports are left to the module loader at runtime.

use std::collections::BTreeSet;

use crate::config::DevServerConfig;
use crate::manifest::{Manifest, ManifestError};

/// Assets required to boot one entry point, as URL paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrypointAssets {
    /// Module scripts, in load order.
    pub scripts: Vec<String>,

    /// Stylesheets, in first-seen import order.
    pub stylesheets: Vec<String>,
}

impl EntrypointAssets {
    /// Render the assets as HTML tags: stylesheets first, then scripts.
    pub fn render_tags(&self) -> String {
        let mut tags: Vec<String> = self.stylesheets.iter().map(|href| link_tag(href)).collect();
        tags.extend(self.scripts.iter().map(|src| script_tag(src)));
        tags.join("\n")
    }
}

/// Resolve an entry chunk to its assets.
///
/// Walks the static import graph depth-first, collecting each chunk's CSS
/// exactly once in first-seen order (imports before the chunk that pulls them
/// in), then the entry's own output file as the script. `base` prefixes every
/// path; empty means site-root relative.
pub fn resolve_entry(
    manifest: &Manifest,
    entry: &str,
    base: &str,
) -> Result<EntrypointAssets, ManifestError> {
    let entry = entry.trim_start_matches('/');
    let chunk = manifest.entry(entry)?;

    let mut stylesheets = Vec::new();
    let mut seen_css = BTreeSet::new();
    let mut visited = BTreeSet::new();
    collect_css(manifest, entry, base, &mut visited, &mut seen_css, &mut stylesheets);

    Ok(EntrypointAssets {
        scripts: vec![prefix(base, &chunk.file)],
        stylesheets,
    })
}

/// Module script tag pointing at the dev server's copy of a source file.
pub fn dev_entry_tag(dev: &DevServerConfig, src_path: &str) -> String {
    let src_path = src_path.trim_start_matches('/');
    script_tag(&format!("{}/{}", dev.server_url(), src_path))
}

/// Module script tag for the bundler's hot-reload client.
///
/// Only meaningful in dev mode; production pages have no HMR client.
pub fn hmr_client_tag(dev: &DevServerConfig) -> String {
    script_tag(&dev.hmr_client_url())
}

fn collect_css(
    manifest: &Manifest,
    key: &str,
    base: &str,
    visited: &mut BTreeSet<String>,
    seen: &mut BTreeSet<String>,
    out: &mut Vec<String>,
) {
    // Shared chunks appear on many import paths and may form cycles; visit
    // each chunk once.
    if !visited.insert(key.to_string()) {
        return;
    }

    let Some(chunk) = manifest.chunk(key) else {
        tracing::warn!("manifest import `{}` has no chunk record", key);
        return;
    };

    for import in &chunk.imports {
        collect_css(manifest, import, base, visited, seen, out);
    }

    for css in &chunk.css {
        if seen.insert(css.clone()) {
            out.push(prefix(base, css));
        }
    }
}

fn prefix(base: &str, file: &str) -> String {
    format!("{}/{}", base, file.trim_start_matches('/'))
}

fn script_tag(src: &str) -> String {
    format!(r#"<script src="{}" type="module"></script>"#, src)
}

fn link_tag(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}" />"#, href)
}
