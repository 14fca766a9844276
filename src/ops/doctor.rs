//! Project and configuration health checks.
//!
//! The `doctor` command verifies that configuration resolves and that the
//! project layout matches what the resolver expects.
//!
//! ## Checks Performed
//!
//! - Dev server, build, and serve configuration resolve from the environment
//! - Entry point source and aliased asset directory exist
//! - Build output and manifest are present and parseable (optional before the
//!   first front-end build)

use std::path::{Path, PathBuf};

use crate::config::defaults::SOURCE_ALIAS;
use crate::config::{BuildConfig, DevServerConfig, EnvSnapshot, ServeConfig};
use crate::manifest::Manifest;

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path the check looked at (if applicable)
    pub path: Option<PathBuf>,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the path the check looked at.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        DoctorReport::default()
    }

    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Get the count of passed checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get the count of failed checks.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Get the count of required failed checks.
    pub fn required_failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .count()
    }
}

/// Run all health checks against a project root.
pub fn doctor(env: &EnvSnapshot, project_root: &Path) -> DoctorReport {
    let mut report = DoctorReport::new();

    report.add(check_dev_server(env));
    report.add(check_serve(env));

    let build = match BuildConfig::resolve(project_root) {
        Ok(build) => {
            report.add(
                CheckResult::pass("Build config", "resolved")
                    .with_path(build.output_dir.clone()),
            );
            build
        }
        Err(e) => {
            report.add(CheckResult::fail("Build config", e.to_string()));
            return report;
        }
    };

    report.add(check_file(
        "Entry source",
        build.app_entry().to_path_buf(),
        true,
    ));
    report.add(check_dir(
        "Asset directory",
        build.path_aliases[SOURCE_ALIAS].clone(),
        true,
    ));
    report.add(check_dir("Build output", build.output_dir.clone(), false));
    report.add(check_manifest(env, &build));

    report
}

fn check_dev_server(env: &EnvSnapshot) -> CheckResult {
    match DevServerConfig::resolve(env) {
        Ok(config) => CheckResult::pass(
            "Dev server config",
            format!(
                "{} ({} CORS origins)",
                config.server_url(),
                config.cors_origins.len()
            ),
        ),
        Err(e) => CheckResult::fail("Dev server config", e.to_string()),
    }
}

fn check_serve(env: &EnvSnapshot) -> CheckResult {
    match ServeConfig::resolve(env) {
        Ok(config) => {
            let mode = if config.dev_mode { "dev" } else { "production" };
            CheckResult::pass("Serve config", format!("{} mode", mode))
        }
        Err(e) => CheckResult::fail("Serve config", e.to_string()),
    }
}

fn check_file(name: &str, path: PathBuf, required: bool) -> CheckResult {
    let result = if path.is_file() {
        CheckResult::pass(name, "found")
    } else {
        CheckResult::fail(name, "missing")
    };
    let result = result.with_path(path);
    if required {
        result
    } else {
        result.optional()
    }
}

fn check_dir(name: &str, path: PathBuf, required: bool) -> CheckResult {
    let result = if path.is_dir() {
        CheckResult::pass(name, "found")
    } else {
        CheckResult::fail(name, "missing")
    };
    let result = result.with_path(path);
    if required {
        result
    } else {
        result.optional()
    }
}

fn check_manifest(env: &EnvSnapshot, build: &BuildConfig) -> CheckResult {
    // Respect the serve-side override so doctor inspects the same manifest
    // the server would.
    let path = match ServeConfig::resolve(env) {
        Ok(serve) => serve.manifest_path_or(build),
        Err(_) => build.manifest_path(),
    };

    if !path.is_file() {
        return CheckResult::fail("Manifest", "not built yet")
            .with_path(path)
            .optional();
    }

    match Manifest::load(&path) {
        Ok(manifest) => {
            let entries: Vec<_> = manifest.entry_names().collect();
            if entries.is_empty() {
                CheckResult::fail("Manifest", "parsed, but contains no entry points")
                    .with_path(path)
                    .optional()
            } else {
                CheckResult::pass(
                    "Manifest",
                    format!("{} chunks, entries: {}", manifest.len(), entries.join(", ")),
                )
                .with_path(path)
                .optional()
            }
        }
        Err(e) => CheckResult::fail("Manifest", e.to_string())
            .with_path(path)
            .optional(),
    }
}

/// Format the doctor report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "Viaduct Doctor").unwrap();
    writeln!(output, "==============\n").unwrap();

    writeln!(output, "Checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };

        writeln!(output, "  {} {}{}", status, check.name, required).unwrap();

        if verbose || !check.passed {
            writeln!(output, "      {}", check.message).unwrap();
            if let Some(path) = &check.path {
                writeln!(output, "      Path: {}", path.display()).unwrap();
            }
        }
    }

    writeln!(output).unwrap();

    let passed = report.passed_count();
    let failed = report.failed_count();
    let required_failed = report.required_failed_count();

    writeln!(output, "Summary: {} passed, {} failed", passed, failed).unwrap();

    if required_failed > 0 {
        writeln!(
            output,
            "\n{} required check(s) failed. Fix these before running the build.",
            required_failed
        )
        .unwrap();
    } else if failed > 0 {
        writeln!(
            output,
            "\nAll required checks passed. {} optional check(s) failed.",
            failed
        )
        .unwrap();
    } else {
        writeln!(output, "\nAll checks passed. The project is ready to build.").unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_result_pass() {
        let result = CheckResult::pass("test", "passed");
        assert!(result.passed);
        assert!(result.required);
    }

    #[test]
    fn test_check_result_optional() {
        let result = CheckResult::pass("test", "passed").optional();
        assert!(result.passed);
        assert!(!result.required);
    }

    #[test]
    fn test_doctor_report_all_passed() {
        let mut report = DoctorReport::new();
        report.add(CheckResult::pass("check1", "ok"));
        report.add(CheckResult::pass("check2", "ok"));

        assert!(report.all_required_passed());
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_doctor_report_optional_failed() {
        let mut report = DoctorReport::new();
        report.add(CheckResult::pass("required", "ok"));
        report.add(CheckResult::fail("optional", "missing").optional());

        assert!(report.all_required_passed());
        assert_eq!(report.required_failed_count(), 0);
    }

    #[test]
    fn test_doctor_report_required_failed() {
        let mut report = DoctorReport::new();
        report.add(CheckResult::pass("check1", "ok"));
        report.add(CheckResult::fail("check2", "missing"));

        assert!(!report.all_required_passed());
        assert_eq!(report.required_failed_count(), 1);
    }

    #[test]
    fn test_doctor_on_empty_project() {
        let tmp = TempDir::new().unwrap();
        let report = doctor(&EnvSnapshot::empty(), tmp.path());

        // Config checks pass; layout checks fail because nothing exists yet.
        assert!(!report.all_required_passed());
        let entry = report
            .checks
            .iter()
            .find(|c| c.name == "Entry source")
            .unwrap();
        assert!(!entry.passed);
    }

    #[test]
    fn test_doctor_on_populated_project() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("resources/assets/js")).unwrap();
        std::fs::write(root.join("resources/assets/js/app.js"), "export {}\n").unwrap();
        std::fs::create_dir_all(root.join("public/build/.vite")).unwrap();
        std::fs::write(
            root.join("public/build/.vite/manifest.json"),
            crate::manifest::SAMPLE_MANIFEST,
        )
        .unwrap();

        let report = doctor(&EnvSnapshot::empty(), root);
        assert!(report.all_required_passed(), "{:?}", report.checks);
        assert_eq!(report.failed_count(), 0);
    }

    #[test]
    fn test_doctor_bad_environment_fails_required() {
        let tmp = TempDir::new().unwrap();
        let env = EnvSnapshot::from([("DEV_PORT", "abc")]);
        let report = doctor(&env, tmp.path());

        let dev = report
            .checks
            .iter()
            .find(|c| c.name == "Dev server config")
            .unwrap();
        assert!(!dev.passed);
        assert!(dev.message.contains("DEV_PORT"));
    }

    #[test]
    fn test_format_report_shows_failures() {
        let tmp = TempDir::new().unwrap();
        let report = doctor(&EnvSnapshot::empty(), tmp.path());
        let output = format_report(&report, false);

        assert!(output.contains("Viaduct Doctor"));
        assert!(output.contains("[!!] Entry source"));
        assert!(output.contains("required check(s) failed"));
    }
}
