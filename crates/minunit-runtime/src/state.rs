//! Run state - counters and the last failure message of a run

/// Maximum size of the stored failure message, terminator included.
pub const MESSAGE_LEN: usize = 1024;

/// Pass/fail status of the test currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestStatus {
    #[default]
    Passed,
    Failed,
}

/// Counters shared by the assertion engine, the lifecycle runner and the
/// reporter for the whole run.
///
/// Counters only ever grow: running the same suite twice doubles them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunState {
    tests_run: u64,
    assertions_checked: u64,
    failures: u64,
    status: TestStatus,
    last_message: String,
}

impl RunState {
    /// Create an empty run state
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tests executed so far
    pub fn tests_run(&self) -> u64 {
        self.tests_run
    }

    /// Number of assertions evaluated so far, passing or not
    pub fn assertions_checked(&self) -> u64 {
        self.assertions_checked
    }

    /// Number of tests that ended in the failed state
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Status of the test currently (or most recently) executing
    pub fn status(&self) -> TestStatus {
        self.status
    }

    /// Whether the current test has failed
    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed
    }

    /// Message of the most recent failing assertion.
    ///
    /// Only meaningful while [`RunState::is_failed`] holds.
    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub(crate) fn begin_test(&mut self) {
        self.status = TestStatus::Passed;
    }

    pub(crate) fn count_assertion(&mut self) {
        self.assertions_checked += 1;
    }

    pub(crate) fn record_failure(&mut self, message: &str) {
        self.status = TestStatus::Failed;
        self.last_message.clear();
        self.last_message.push_str(bounded(message));
    }

    /// Close the current test, returning whether it failed.
    pub(crate) fn finish_test(&mut self) -> bool {
        self.tests_run += 1;
        if self.is_failed() {
            self.failures += 1;
        }
        self.is_failed()
    }
}

/// Truncate `message` so it fits in `MESSAGE_LEN` with room for a terminator.
pub(crate) fn bounded(message: &str) -> &str {
    let limit = MESSAGE_LEN - 1;
    if message.len() <= limit {
        return message;
    }
    let mut end = limit;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}
