//! Test lifecycle runner - execute one test between its suite's hooks

use crate::assert::{TestContext, TestResult};
use crate::state::RunState;
use std::io::{self, Write};
use tracing::{debug, warn};

/// A setup or teardown procedure bound for the active suite
pub type Hook = Box<dyn FnMut(&mut TestContext<'_>) -> TestResult>;

/// Setup/teardown pair of the suite currently running
#[derive(Default)]
pub struct Hooks {
    setup: Option<Hook>,
    teardown: Option<Hook>,
}

impl Hooks {
    /// Whether a setup hook is bound
    pub fn has_setup(&self) -> bool {
        self.setup.is_some()
    }

    /// Whether a teardown hook is bound
    pub fn has_teardown(&self) -> bool {
        self.teardown.is_some()
    }
}

/// Progress markers written for a passing assertion and a failing test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub pass: String,
    pub fail: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            pass: ".".to_string(),
            fail: "F".to_string(),
        }
    }
}

/// Executes tests one at a time and owns the state of the run
pub struct Runner<W: Write = io::Stdout> {
    state: RunState,
    hooks: Hooks,
    markers: Markers,
    out: W,
}

impl Runner<io::Stdout> {
    /// Runner writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Runner<W> {
    /// Create a runner writing progress and failures to `out`
    pub fn new(out: W) -> Self {
        Self {
            state: RunState::new(),
            hooks: Hooks::default(),
            markers: Markers::default(),
            out,
        }
    }

    /// Replace the progress markers
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Counters of the run so far
    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Hooks currently bound
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Output the runner writes to
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consume the runner, returning its output
    pub fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Bind setup and teardown for the tests that follow.
    ///
    /// Either may be `None`. The driver clears both when the suite returns.
    pub fn configure(&mut self, setup: Option<Hook>, teardown: Option<Hook>) {
        self.hooks = Hooks { setup, teardown };
    }

    /// Bind a setup hook
    pub fn set_setup<F>(&mut self, setup: F)
    where
        F: FnMut(&mut TestContext<'_>) -> TestResult + 'static,
    {
        self.hooks.setup = Some(Box::new(setup));
    }

    /// Bind a teardown hook
    pub fn set_teardown<F>(&mut self, teardown: F)
    where
        F: FnMut(&mut TestContext<'_>) -> TestResult + 'static,
    {
        self.hooks.teardown = Some(Box::new(teardown));
    }

    /// Unbind both hooks
    pub fn clear_hooks(&mut self) {
        self.hooks = Hooks::default();
    }

    /// Run a single test.
    ///
    /// The setup hook runs in the test's context, so its assertions count
    /// and a failure in it fails the test. The body runs either way. The
    /// teardown hook always runs, after the verdict has been printed.
    pub fn run_test<F>(&mut self, name: &str, body: F)
    where
        F: FnOnce(&mut TestContext<'_>) -> TestResult,
    {
        self.state.begin_test();

        let verdict = {
            let mut ctx = TestContext::new(name, &mut self.state, &mut self.out, &self.markers.pass);
            let setup = match self.hooks.setup.as_mut() {
                Some(setup) => setup(&mut ctx),
                None => Ok(()),
            };
            let outcome = body(&mut ctx);
            setup.and(outcome)
        };

        if let Err(failure) = verdict {
            if !self.state.is_failed() {
                self.state.record_failure(failure.message());
            }
        }

        let failed = self.state.finish_test();
        debug!(test = name, passed = !failed, "test finished");
        if failed {
            let _ = write!(
                self.out,
                "{}\n{}\n",
                self.markers.fail,
                self.state.last_message()
            );
        }
        let _ = self.out.flush();

        if let Some(teardown) = self.hooks.teardown.as_mut() {
            let mut ctx = TestContext::new(name, &mut self.state, &mut self.out, &self.markers.pass);
            if let Err(failure) = teardown(&mut ctx) {
                warn!(test = name, "teardown failed: {}", failure);
            }
        }
    }
}

/// Run a test function, naming it after its identifier
#[macro_export]
macro_rules! mu_run_test {
    ($runner:expr, $test:ident $(,)?) => {
        $runner.run_test(stringify!($test), $test)
    };
}

/// Bind setup and teardown functions for the current suite
#[macro_export]
macro_rules! mu_suite_configure {
    ($runner:expr, $setup:expr, $teardown:expr $(,)?) => {
        $runner.configure(
            ::core::option::Option::Some(::std::boxed::Box::new($setup)),
            ::core::option::Option::Some(::std::boxed::Box::new($teardown)),
        )
    };
}
