//! `viaduct config` command

use anyhow::{Context, Result};

use viaduct::config::{BuildConfig, DevServerConfig, EnvSnapshot};
use viaduct::ops::{write_json, ResolvedConfig};

use crate::cli::ConfigArgs;
use crate::commands::project_root;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let env = EnvSnapshot::from_process();
    let root = project_root(args.root)?;

    let json = if args.dev_server {
        let config = DevServerConfig::resolve(&env)?;
        to_json(&config, args.pretty)?
    } else if args.build {
        let config = BuildConfig::resolve(&root)?;
        to_json(&config, args.pretty)?
    } else {
        ResolvedConfig::resolve(&env, &root)?.to_json(args.pretty)?
    };

    match args.out {
        Some(out) => {
            let out = viaduct::util::fs::absolutize(&root, &out);
            write_json(&out, &json)?;
            eprintln!("    Wrote configuration to {}", out.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize configuration")
}
