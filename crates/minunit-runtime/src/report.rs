//! Reporter - time the whole run and print the closing summary

use crate::registry::{run_all_suites, SuiteRegistry};
use crate::runner::Runner;
use crate::state::RunState;
use crate::timer::{Elapsed, TimerSnapshot};
use std::fmt;
use std::io::Write;
use tracing::info;

/// Final counters of a run together with its duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub tests_run: u64,
    pub assertions_checked: u64,
    pub failures: u64,
    pub elapsed: Elapsed,
}

impl Summary {
    pub fn new(state: &RunState, elapsed: Elapsed) -> Self {
        Self {
            tests_run: state.tests_run(),
            assertions_checked: state.assertions_checked(),
            failures: state.failures(),
            elapsed,
        }
    }

    /// Whether every test passed
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\n{} tests, {} assertions, {} failures\n",
            self.tests_run, self.assertions_checked, self.failures
        )?;
        write!(f, "\nFinished in {}\n\n", self.elapsed)
    }
}

/// Run every suite, then write the summary to the runner's output.
///
/// The returned summary is informational; a run with failures is still a
/// completed run.
pub fn run_main<W: Write>(registry: &SuiteRegistry<W>, runner: &mut Runner<W>) -> Summary {
    let start = TimerSnapshot::capture();
    run_all_suites(registry, runner);
    let end = TimerSnapshot::capture();

    let summary = Summary::new(runner.state(), end.elapsed_since(&start));
    info!(
        tests = summary.tests_run,
        assertions = summary.assertions_checked,
        failures = summary.failures,
        "run finished"
    );

    let out = runner.output_mut();
    let _ = write!(out, "{}", summary);
    let _ = out.flush();
    summary
}
