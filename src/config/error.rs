//! Configuration error taxonomy.
//!
//! Every variant names the offending environment variable (or path) and the
//! invalid value, so the caller can abort startup with a message the user can
//! act on. These errors are fatal: there is no retry or fallback once a value
//! is rejected.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// An invalid or out-of-range environment-derived configuration value.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The port variable did not parse as a decimal integer.
    #[error("invalid value for {var}: `{value}` is not a decimal integer")]
    #[diagnostic(
        code(viaduct::config::invalid_port),
        help("set {var} to a port number between 1 and 65535, or unset it to use the default")
    )]
    InvalidPort { var: &'static str, value: String },

    /// The port parsed but is outside the valid listener range.
    #[error("invalid value for {var}: port {value} is out of range 1-65535")]
    #[diagnostic(
        code(viaduct::config::port_out_of_range),
        help("set {var} to a port number between 1 and 65535, or unset it to use the default")
    )]
    PortOutOfRange { var: &'static str, value: i64 },

    /// A boolean flag variable held something other than a boolean.
    #[error("invalid value for {var}: `{value}` is not a boolean (use 1/true/yes or 0/false/no)")]
    #[diagnostic(code(viaduct::config::invalid_bool))]
    InvalidBool { var: &'static str, value: String },

    /// A URL variable did not parse as an absolute URL.
    #[error("invalid value for {var}: `{value}` is not an absolute URL")]
    #[diagnostic(
        code(viaduct::config::invalid_url),
        help("use a full URL including the scheme, e.g. https://cdn.example.com/assets")
    )]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Build paths must be resolved against an absolute project root.
    #[error("project root `{path}` is not an absolute path", path = .path.display())]
    #[diagnostic(code(viaduct::config::relative_project_root))]
    ProjectRootNotAbsolute { path: PathBuf },
}

impl ConfigError {
    /// The environment variable this error is about, if any.
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidPort { var, .. }
            | ConfigError::PortOutOfRange { var, .. }
            | ConfigError::InvalidBool { var, .. }
            | ConfigError::InvalidUrl { var, .. } => Some(var),
            ConfigError::ProjectRootNotAbsolute { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_variable_and_value() {
        let err = ConfigError::InvalidPort {
            var: "DEV_PORT",
            value: "abc".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("DEV_PORT"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ConfigError::PortOutOfRange {
            var: "DEV_PORT",
            value: 70000,
        };
        let msg = err.to_string();
        assert!(msg.contains("70000"));
        assert!(msg.contains("1-65535"));
    }

    #[test]
    fn test_env_var_accessor() {
        let err = ConfigError::InvalidBool {
            var: "VIADUCT_DEV_MODE",
            value: "maybe".to_string(),
        };
        assert_eq!(err.env_var(), Some("VIADUCT_DEV_MODE"));

        let err = ConfigError::ProjectRootNotAbsolute {
            path: PathBuf::from("relative/root"),
        };
        assert_eq!(err.env_var(), None);
    }
}
