//! Minunit Runtime - execution engine of the minunit test harness
//!
//! This library provides:
//! - Assertion primitives that count themselves and end a test early on failure
//! - A lifecycle runner bracketing each test with optional setup/teardown hooks
//! - A suite registry and driver running suites in registration order
//! - Wall-clock and process CPU timers
//! - The closing summary report
//!
//! Tests run strictly one after another on the calling thread. All state of a
//! run lives in a [`Runner`].
//!
//! # Example
//!
//! ```
//! use minunit_runtime::{
//!     mu_assert_int_eq, mu_check, mu_run_test, run_main, suite_map, Runner, TestContext,
//!     TestResult,
//! };
//! use std::io::Write;
//!
//! fn test_arithmetic(ctx: &mut TestContext<'_>) -> TestResult {
//!     mu_assert_int_eq!(ctx, 4, 2 + 2);
//!     mu_check!(ctx, 3 > 2);
//!     Ok(())
//! }
//!
//! fn math_suite<W: Write>(runner: &mut Runner<W>) {
//!     mu_run_test!(runner, test_arithmetic);
//! }
//!
//! let registry = suite_map![math_suite].unwrap();
//! let mut runner = Runner::new(Vec::<u8>::new());
//! let summary = run_main(&registry, &mut runner);
//! assert_eq!(summary.tests_run, 1);
//! assert_eq!(summary.assertions_checked, 2);
//! assert!(summary.is_success());
//! ```

/// Minunit runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assert;
pub mod registry;
pub mod report;
pub mod runner;
pub mod state;
pub mod timer;

pub use assert::{Failure, TestContext, TestResult, EPSILON};
pub use registry::{run_all_suites, run_suite, RegistryError, SuiteEntry, SuiteFn, SuiteRegistry};
pub use report::{run_main, Summary};
pub use runner::{Hook, Hooks, Markers, Runner};
pub use state::{RunState, TestStatus, MESSAGE_LEN};
pub use timer::{now_cpu, now_real, Elapsed, TimerSnapshot, TIMER_UNAVAILABLE};
