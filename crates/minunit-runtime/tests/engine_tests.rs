//! End-to-end tests of the execution engine
//!
//! Drives suites through the public API only and checks counters, hook
//! sequencing and the exact console text.

use minunit_runtime::{
    mu_assert, mu_assert_double_eq, mu_assert_int_eq, mu_assert_string_eq, mu_check, mu_fail,
    mu_run_test, mu_suite_configure, run_all_suites, run_main, run_suite, suite_map, Runner,
    SuiteEntry, TestContext, TestResult,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::cell::RefCell;
use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};

fn new_runner() -> Runner<Vec<u8>> {
    Runner::new(Vec::new())
}

fn output(runner: Runner<Vec<u8>>) -> String {
    String::from_utf8(runner.into_output()).unwrap()
}

// ============================================================================
// Example suite
// ============================================================================

static FAIL_LINE: AtomicU32 = AtomicU32::new(0);

fn test_pass(ctx: &mut TestContext<'_>) -> TestResult {
    mu_check!(ctx, 10 > 1);
    Ok(())
}

fn test_fail(ctx: &mut TestContext<'_>) -> TestResult {
    FAIL_LINE.store(line!() + 1, Ordering::Relaxed);
    mu_assert!(ctx, 10 < 1, "ten is not below one");
    Ok(())
}

fn two_test_suite<W: Write>(runner: &mut Runner<W>) {
    mu_run_test!(runner, test_pass);
    mu_run_test!(runner, test_fail);
}

#[test]
fn test_two_tests_one_failure() {
    let registry = suite_map![two_test_suite].unwrap();
    let mut runner = new_runner();
    let summary = run_main(&registry, &mut runner);

    assert_eq!(summary.tests_run, 2);
    assert_eq!(summary.assertions_checked, 2);
    assert_eq!(summary.failures, 1);

    let out = output(runner);
    let (progress, report) = out.split_at(out.find("\n\n2 tests").unwrap());
    assert_eq!(
        progress,
        format!(
            ".F\ntest_fail failed:\n\t{}:{}: ten is not below one\n",
            file!(),
            FAIL_LINE.load(Ordering::Relaxed)
        )
    );
    assert!(report.starts_with("\n\n2 tests, 2 assertions, 1 failures\n\nFinished in "));
    assert!(report.contains(" seconds (real) "));
    assert!(report.ends_with(" seconds (proc)\n\n"));
}

#[test]
fn test_running_suite_twice_doubles_counters() {
    let entry = SuiteEntry::new("two_test_suite", two_test_suite);
    let mut runner = new_runner();

    run_suite(&entry, &mut runner);
    let first = runner.state().clone();
    run_suite(&entry, &mut runner);

    assert_eq!(runner.state().tests_run(), 2 * first.tests_run());
    assert_eq!(
        runner.state().assertions_checked(),
        2 * first.assertions_checked()
    );
    assert_eq!(runner.state().failures(), 2 * first.failures());
}

// ============================================================================
// Early termination
// ============================================================================

thread_local! {
    static TRACE: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn trace(event: &'static str) {
    TRACE.with(|t| t.borrow_mut().push(event));
}

fn take_trace() -> Vec<&'static str> {
    TRACE.with(|t| t.borrow_mut().drain(..).collect())
}

fn test_stops_after_failure(ctx: &mut TestContext<'_>) -> TestResult {
    mu_check!(ctx, true);
    mu_check!(ctx, true);
    trace("before");
    mu_fail!(ctx, "stop here");
}

fn test_stops_mid_body(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_int_eq!(ctx, 1, 2);
    trace("after");
    Ok(())
}

#[test]
fn test_failure_ends_body_and_counts_once() {
    take_trace();
    let mut runner = new_runner();
    mu_run_test!(runner, test_stops_after_failure);
    mu_run_test!(runner, test_stops_mid_body);

    assert_eq!(take_trace(), vec!["before"]);
    assert_eq!(runner.state().tests_run(), 2);
    assert_eq!(runner.state().assertions_checked(), 4);
    assert_eq!(runner.state().failures(), 2);

    let out = output(runner);
    assert!(out.starts_with("..F\ntest_stops_after_failure failed:\n\t"));
    assert!(out.contains(": stop here\nF\ntest_stops_mid_body failed:\n\t"));
    assert!(out.ends_with(": 1 expected but was 2\n"));
}

// ============================================================================
// Lifecycle hooks
// ============================================================================

fn setup_trace(_ctx: &mut TestContext<'_>) -> TestResult {
    trace("setup");
    Ok(())
}

fn teardown_trace(_ctx: &mut TestContext<'_>) -> TestResult {
    trace("teardown");
    Ok(())
}

fn test_traced_pass(ctx: &mut TestContext<'_>) -> TestResult {
    trace("pass");
    mu_check!(ctx, true);
    Ok(())
}

fn test_traced_fail(ctx: &mut TestContext<'_>) -> TestResult {
    trace("fail");
    mu_check!(ctx, false);
    trace("unreachable");
    Ok(())
}

fn hooked_suite<W: Write>(runner: &mut Runner<W>) {
    mu_suite_configure!(runner, setup_trace, teardown_trace);
    mu_run_test!(runner, test_traced_pass);
    mu_run_test!(runner, test_traced_fail);
    mu_run_test!(runner, test_traced_pass);
}

fn unhooked_suite<W: Write>(runner: &mut Runner<W>) {
    mu_run_test!(runner, test_traced_pass);
}

#[test]
fn test_hooks_wrap_each_test_and_teardown_follows_failure() {
    take_trace();
    let registry = suite_map![hooked_suite, unhooked_suite].unwrap();
    let mut runner = new_runner();
    run_all_suites(&registry, &mut runner);

    assert_eq!(
        take_trace(),
        vec![
            "setup", "pass", "teardown", //
            "setup", "fail", "teardown", //
            "setup", "pass", "teardown", //
            "pass",
        ]
    );
    assert_eq!(runner.state().tests_run(), 4);
    assert_eq!(runner.state().failures(), 1);
}

// ============================================================================
// Typed equality
// ============================================================================

#[rstest]
#[case(1.0, 1.0, true)]
#[case(1.0, 1.0 + 1e-13, true)]
#[case(1.0, 1.0 + 1e-6, false)]
#[case(-2.5, -2.5, true)]
#[case(0.0, -0.0, true)]
#[case(f64::INFINITY, f64::INFINITY, true)]
#[case(f64::INFINITY, f64::NEG_INFINITY, false)]
#[case(f64::NAN, 0.0, false)]
fn test_double_equality(#[case] expected: f64, #[case] actual: f64, #[case] passes: bool) {
    let mut runner = new_runner();
    runner.run_test("test_double", |ctx| {
        mu_assert_double_eq!(ctx, expected, actual);
        Ok(())
    });
    assert_eq!(runner.state().failures() == 0, passes);
    assert_eq!(runner.state().assertions_checked(), 1);
}

#[rstest]
#[case(None, None, true)]
#[case(Some("abcd"), None, false)]
#[case(None, Some("abcd"), false)]
#[case(Some(""), Some(""), true)]
#[case(Some("abcd"), Some("abcd"), true)]
#[case(Some("abcd"), Some("abce"), false)]
fn test_string_equality(
    #[case] expected: Option<&'static str>,
    #[case] actual: Option<&'static str>,
    #[case] passes: bool,
) {
    let mut runner = new_runner();
    runner.run_test("test_string", |ctx| {
        mu_assert_string_eq!(ctx, expected, actual);
        Ok(())
    });
    assert_eq!(runner.state().failures() == 0, passes);
}

#[rstest]
#[case(25, 5 * 5, true)]
#[case(0, -0, true)]
#[case(i64::MAX, i64::MAX, true)]
#[case(7, 8, false)]
fn test_int_equality(#[case] expected: i64, #[case] actual: i64, #[case] passes: bool) {
    let mut runner = new_runner();
    runner.run_test("test_int", |ctx| {
        mu_assert_int_eq!(ctx, expected, actual);
        Ok(())
    });
    assert_eq!(runner.state().failures() == 0, passes);
}

#[test]
fn test_string_mismatch_message() {
    let mut runner = new_runner();
    runner.run_test("test_string", |ctx| {
        mu_assert_string_eq!(ctx, Some("abcd"), None);
        Ok(())
    });
    assert!(output(runner).ends_with(": 'abcd' expected but was '<null pointer>'\n"));
}

#[test]
fn test_long_failure_message_is_bounded() {
    let long = "x".repeat(4096);
    let mut runner = new_runner();
    runner.run_test("test_long", |ctx| ctx.fail(&long));

    assert_eq!(
        runner.state().last_message().len(),
        minunit_runtime::MESSAGE_LEN - 1
    );
}

// ============================================================================
// Counter properties
// ============================================================================

proptest! {
    #[test]
    fn prop_true_checks_only_add_assertions(n in 0usize..200) {
        let mut runner = new_runner();
        runner.run_test("test_many", |ctx| {
            for _ in 0..n {
                mu_check!(ctx, true);
            }
            Ok(())
        });

        prop_assert_eq!(runner.state().assertions_checked(), n as u64);
        prop_assert_eq!(runner.state().failures(), 0);
        prop_assert_eq!(output(runner), ".".repeat(n));
    }

    #[test]
    fn prop_one_failure_per_test(passing in 0usize..50, trailing in 0usize..50) {
        let mut runner = new_runner();
        runner.run_test("test_mixed", |ctx| {
            for _ in 0..passing {
                mu_check!(ctx, true);
            }
            mu_check!(ctx, false);
            for _ in 0..trailing {
                mu_check!(ctx, false);
            }
            Ok(())
        });

        prop_assert_eq!(runner.state().failures(), 1);
        prop_assert_eq!(runner.state().assertions_checked(), passing as u64 + 1);
        prop_assert!(runner.state().failures() <= runner.state().tests_run());
    }
}
