//! Viaduct - build and dev-server configuration for bundler-built front ends
//!
//! This crate provides the core library functionality for Viaduct: resolving
//! dev-server and build configuration from the environment, and reading the
//! asset manifest the bundler emits so a server-rendered application can
//! locate its built assets.

pub mod config;
pub mod manifest;
pub mod ops;
pub mod util;

pub use config::{BuildConfig, ConfigError, DevServerConfig, EnvSnapshot, ServeConfig};
pub use manifest::{Chunk, EntrypointAssets, Manifest, ManifestError};
pub use ops::ResolvedConfig;
