//! `viaduct assets` command

use anyhow::Result;

use viaduct::config::{BuildConfig, DevServerConfig, EnvSnapshot, ServeConfig};
use viaduct::manifest::{assets, Manifest, ManifestError};
use viaduct::util::diagnostic::{self, suggestions, Diagnostic};

use crate::cli::AssetsArgs;
use crate::commands::project_root;

pub fn execute(args: AssetsArgs, color: bool) -> Result<()> {
    let env = EnvSnapshot::from_process();
    let root = project_root(args.root)?;

    let build = BuildConfig::resolve(&root)?;
    let serve = ServeConfig::resolve(&env)?;

    // Dev mode never touches the manifest: assets come straight from the dev
    // server, plus the hot-reload client.
    if args.dev || serve.dev_mode {
        let dev = DevServerConfig::resolve(&env)?;
        println!("{}", assets::hmr_client_tag(&dev));
        println!("{}", assets::dev_entry_tag(&dev, &args.entry));
        return Ok(());
    }

    let manifest_path = match args.manifest {
        Some(path) => viaduct::util::fs::absolutize(&root, &path),
        None => serve.manifest_path_or(&build),
    };

    let manifest = match Manifest::load(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            diagnostic::emit(
                &Diagnostic::error(e.to_string())
                    .with_location(manifest_path)
                    .with_suggestion(suggestions::NO_MANIFEST),
                color,
            );
            std::process::exit(1);
        }
    };

    match assets::resolve_entry(&manifest, &args.entry, &serve.asset_base()) {
        Ok(resolved) => {
            println!("{}", resolved.render_tags());
            Ok(())
        }
        Err(e @ ManifestError::EntryNotFound { .. }) => {
            diagnostic::emit(
                &Diagnostic::error(e.to_string())
                    .with_location(manifest_path)
                    .with_suggestion(suggestions::ENTRY_NOT_FOUND),
                color,
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
