//! Configuration resolution.
//!
//! Turns an environment snapshot and a project root into immutable
//! configuration values. Resolution runs once at process start, is
//! single-threaded and synchronous, and touches nothing but the snapshot and
//! lexical path joins. Validation failures abort startup instead of letting
//! an invalid listener or a half-resolved build proceed.

pub mod build;
pub mod defaults;
pub mod dev_server;
pub mod env;
pub mod error;
pub mod serve;

pub use build::BuildConfig;
pub use dev_server::DevServerConfig;
pub use env::EnvSnapshot;
pub use error::ConfigError;
pub use serve::ServeConfig;
