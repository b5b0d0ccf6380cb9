//! Run command - execute every registered suite

use crate::suites;
use anyhow::Result;
use colored::*;
use minunit_runtime::{run_main, Markers, Runner, Summary};
use std::io::{self, IsTerminal, Write};
use tracing::info;

/// Arguments for the run command
#[derive(Debug, Default)]
pub struct RunArgs {
    /// Disable colored output
    pub no_color: bool,
}

/// Run the run command
///
/// Failing tests are part of the report, not an error: the command returns
/// `Ok` whatever the summary says.
pub fn run(args: RunArgs) -> Result<()> {
    let color = !args.no_color && io::stdout().is_terminal();
    let summary = run_with(io::stdout(), markers(color))?;
    info!(
        failures = summary.failures,
        success = summary.is_success(),
        "run complete"
    );
    Ok(())
}

/// Run every suite against `out` with the given progress markers
pub fn run_with<W: Write>(out: W, markers: Markers) -> Result<Summary> {
    let registry = suites::registry()?;
    let mut runner = Runner::new(out).with_markers(markers);
    Ok(run_main(&registry, &mut runner))
}

/// Progress markers, green `.` and bold red `F` when colored
pub fn markers(color: bool) -> Markers {
    if !color {
        return Markers::default();
    }
    Markers {
        pass: ".".green().to_string(),
        fail: "F".red().bold().to_string(),
    }
}
