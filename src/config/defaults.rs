//! Fixed defaults and environment variable names.
//!
//! Everything the resolver does not read from the environment lives here as a
//! named constant, so the static policy surface is visible in one place.

/// Environment variable names read by the resolvers.
pub mod env_vars {
    /// Dev server host override.
    pub const DEV_HOST: &str = "DEV_HOST";

    /// Dev server port override (decimal integer, 1-65535).
    pub const DEV_PORT: &str = "DEV_PORT";

    /// Comma-separated CORS origin allow-list for the dev server.
    pub const DEV_CORS_ORIGINS: &str = "DEV_CORS_ORIGINS";

    /// Serve-side dev mode flag (1/true/yes or 0/false/no).
    pub const DEV_MODE: &str = "VIADUCT_DEV_MODE";

    /// Absolute URL that built assets are served from.
    pub const STATIC_URL: &str = "VIADUCT_STATIC_URL";

    /// Override for the manifest location emitted by the bundler.
    pub const MANIFEST_PATH: &str = "VIADUCT_MANIFEST_PATH";
}

/// Dev server host when `DEV_HOST` is unset.
pub const DEFAULT_DEV_HOST: &str = "localhost";

/// Dev server port when `DEV_PORT` is unset.
pub const DEFAULT_DEV_PORT: u16 = 5173;

/// Protocol the dev server speaks.
pub const DEV_SERVER_PROTOCOL: &str = "http";

/// CORS origins allowed when `DEV_CORS_ORIGINS` is unset or empty.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost", "http://127.0.0.1"];

/// CORS credential support is a fixed policy for this integration.
pub const CORS_CREDENTIALS: bool = true;

/// The dev server must fail rather than silently pick another port.
pub const STRICT_PORT: bool = true;

/// Module path of the bundler's hot-reload client, relative to the dev server.
pub const HMR_CLIENT_PATH: &str = "@vite/client";

/// Logical name of the single application entry point.
pub const APP_ENTRY_NAME: &str = "app";

/// Entry point source file, relative to the project root.
pub const APP_ENTRY_SOURCE: &str = "resources/assets/js/app.js";

/// Import alias exposed to application source.
pub const SOURCE_ALIAS: &str = "@";

/// Directory the alias resolves to, relative to the project root.
pub const ASSET_SOURCE_DIR: &str = "resources/assets";

/// Build output directory, relative to the project root.
pub const BUILD_OUTPUT_DIR: &str = "public/build";

/// Manifest location inside the build output directory.
pub const MANIFEST_SUBPATH: &str = ".vite/manifest.json";
