//! `viaduct doctor` command

use anyhow::Result;

use viaduct::config::EnvSnapshot;
use viaduct::ops::{doctor, format_report};

use crate::cli::DoctorArgs;
use crate::commands::project_root;

pub fn execute(args: DoctorArgs, verbose: bool) -> Result<()> {
    let env = EnvSnapshot::from_process();
    let root = project_root(args.root)?;

    let report = doctor(&env, &root);

    // Print the formatted report
    let output = format_report(&report, verbose);
    print!("{}", output);

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
