//! Environment snapshot.
//!
//! Resolvers never read `std::env` directly. The process environment is
//! captured once into an [`EnvSnapshot`] and passed in explicitly, so tests
//! can supply synthetic environments without mutating process state.

use std::collections::BTreeMap;

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        EnvSnapshot {
            vars: std::env::vars().collect(),
        }
    }

    /// An empty snapshot.
    pub fn empty() -> Self {
        EnvSnapshot::default()
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Look up a variable, treating an empty value as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        EnvSnapshot {
            vars: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, &str); N]> for EnvSnapshot {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let env = EnvSnapshot::empty();
        assert_eq!(env.get("DEV_HOST"), None);
    }

    #[test]
    fn test_lookup() {
        let env = EnvSnapshot::from([("DEV_HOST", "0.0.0.0"), ("DEV_PORT", "")]);
        assert_eq!(env.get("DEV_HOST"), Some("0.0.0.0"));
        assert_eq!(env.get("DEV_PORT"), Some(""));
        assert_eq!(env.get_non_empty("DEV_PORT"), None);
        assert_eq!(env.get("UNSET"), None);
    }

    #[test]
    fn test_from_process_captures_once() {
        // The snapshot holds whatever was set at capture time; later lookups
        // go through the map, not the live environment.
        let env = EnvSnapshot::from_process();
        assert_eq!(env.get("VIADUCT_TEST_NEVER_SET_ANYWHERE"), None);
    }
}
