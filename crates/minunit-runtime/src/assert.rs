//! Assertion engine
//!
//! Assertions are methods on [`TestContext`], the handle every test body and
//! lifecycle hook receives. Each one counts itself in the run state exactly
//! once, writes a `.` progress marker when it holds, and otherwise records a
//! failure message and returns `Err(Failure)`. The `mu_*` macros wrap the
//! methods and apply `?`, so a failing assertion ends the test body on the
//! spot.
//!
//! # Failure message
//!
//! ```text
//! <test-name> failed:
//! 	<file>:<line>: <detail>
//! ```

use crate::state::RunState;
use std::fmt;
use std::io::Write;
use std::panic::Location;
use thiserror::Error;

/// Absolute tolerance for floating-point equality
pub const EPSILON: f64 = 1e-12;

/// Rendering of an absent string operand
const NULL_STR: &str = "<null pointer>";

/// Signal that an assertion failed and the current test must stop.
///
/// Only a [`TestContext`] creates one, and only the lifecycle runner
/// consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    /// Formatted failure message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a test body or lifecycle hook
pub type TestResult = Result<(), Failure>;

/// Handle through which a test evaluates assertions.
pub struct TestContext<'a> {
    name: &'a str,
    state: &'a mut RunState,
    out: &'a mut dyn Write,
    pass_marker: &'a str,
}

impl<'a> TestContext<'a> {
    pub(crate) fn new(
        name: &'a str,
        state: &'a mut RunState,
        out: &'a mut dyn Write,
        pass_marker: &'a str,
    ) -> Self {
        Self {
            name,
            state,
            out,
            pass_marker,
        }
    }

    /// Name of the test this context belongs to
    pub fn test_name(&self) -> &str {
        self.name
    }

    /// Read-only view of the run counters
    pub fn state(&self) -> &RunState {
        self.state
    }

    /// Fail unless `condition` holds; the detail is `source`, the
    /// condition's source text.
    #[track_caller]
    pub fn check(&mut self, condition: bool, source: &str) -> TestResult {
        self.evaluate(condition, Location::caller(), || source.to_string())
    }

    /// Fail with `message` unless `condition` holds
    #[track_caller]
    pub fn check_with_message(&mut self, condition: bool, message: &str) -> TestResult {
        self.evaluate(condition, Location::caller(), || message.to_string())
    }

    /// Fail unconditionally
    #[track_caller]
    pub fn fail(&mut self, message: &str) -> TestResult {
        self.evaluate(false, Location::caller(), || message.to_string())
    }

    /// Exact integer equality
    #[track_caller]
    pub fn check_int_eq(&mut self, expected: i64, actual: i64) -> TestResult {
        self.evaluate(expected == actual, Location::caller(), || {
            mismatch(expected, actual)
        })
    }

    /// Floating-point equality within [`EPSILON`].
    ///
    /// Equal infinities match; NaN never does.
    #[track_caller]
    pub fn check_double_eq(&mut self, expected: f64, actual: f64) -> TestResult {
        let equal = expected == actual || (expected - actual).abs() <= EPSILON;
        self.evaluate(equal, Location::caller(), || {
            mismatch(float_text(expected), float_text(actual))
        })
    }

    /// String equality where either side may be absent.
    ///
    /// Two absent strings are equal; an absent and a present one are not.
    #[track_caller]
    pub fn check_string_eq(&mut self, expected: Option<&str>, actual: Option<&str>) -> TestResult {
        self.evaluate(expected == actual, Location::caller(), || {
            format!(
                "'{}' expected but was '{}'",
                expected.unwrap_or(NULL_STR),
                actual.unwrap_or(NULL_STR)
            )
        })
    }

    fn evaluate(
        &mut self,
        holds: bool,
        location: &Location<'_>,
        detail: impl FnOnce() -> String,
    ) -> TestResult {
        self.state.count_assertion();
        if holds {
            let _ = self.out.write_all(self.pass_marker.as_bytes());
            return Ok(());
        }

        let message = format!(
            "{} failed:\n\t{}:{}: {}",
            self.name,
            location.file(),
            location.line(),
            detail()
        );
        self.state.record_failure(&message);
        Err(Failure {
            message: self.state.last_message().to_string(),
        })
    }
}

fn mismatch(expected: impl fmt::Display, actual: impl fmt::Display) -> String {
    format!("{} expected but was {}", expected, actual)
}

/// Plain decimal for ordinary magnitudes, exponent form outside them
fn float_text(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && magnitude.is_finite() && !(1e-4..1e16).contains(&magnitude) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}

/// Stop the test unless the condition holds; reports the condition text.
#[macro_export]
macro_rules! mu_check {
    ($ctx:expr, $cond:expr $(,)?) => {
        $ctx.check($cond, stringify!($cond))?
    };
}

/// Stop the test with `message` unless the condition holds.
#[macro_export]
macro_rules! mu_assert {
    ($ctx:expr, $cond:expr, $message:expr $(,)?) => {
        $ctx.check_with_message($cond, $message)?
    };
}

/// Stop the test with `message`.
#[macro_export]
macro_rules! mu_fail {
    ($ctx:expr, $message:expr $(,)?) => {
        return $ctx.fail($message).map_err(::core::convert::Into::into)
    };
}

/// Stop the test unless two integers are equal.
#[macro_export]
macro_rules! mu_assert_int_eq {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $ctx.check_int_eq($expected, $actual)?
    };
}

/// Stop the test unless two floats are within [`EPSILON`](crate::EPSILON).
#[macro_export]
macro_rules! mu_assert_double_eq {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $ctx.check_double_eq($expected, $actual)?
    };
}

/// Stop the test unless two optional strings are equal.
#[macro_export]
macro_rules! mu_assert_string_eq {
    ($ctx:expr, $expected:expr, $actual:expr $(,)?) => {
        $ctx.check_string_eq($expected, $actual)?
    };
}
