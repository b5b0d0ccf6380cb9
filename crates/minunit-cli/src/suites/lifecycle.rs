//! Fixture-driven suite covering every assertion kind
//!
//! Setup installs a fresh fixture before each test and teardown removes it,
//! so a test that mutates the fixture cannot influence the next one.

use minunit_runtime::{
    mu_assert, mu_assert_double_eq, mu_assert_int_eq, mu_assert_string_eq, mu_check, mu_fail,
    mu_run_test, Runner, TestContext, TestResult,
};
use std::cell::RefCell;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
struct Fixture {
    foo: i64,
    bar: i64,
    dbar: f64,
    foo_str: Option<&'static str>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            foo: 7,
            bar: 4,
            dbar: 0.1,
            foo_str: Some("abcd"),
        }
    }
}

thread_local! {
    static FIXTURE: RefCell<Option<Fixture>> = const { RefCell::new(None) };
}

fn fixture() -> Fixture {
    FIXTURE.with(|f| f.borrow().clone()).unwrap_or_else(Fixture::new)
}

fn setup(_ctx: &mut TestContext<'_>) -> TestResult {
    FIXTURE.with(|f| *f.borrow_mut() = Some(Fixture::new()));
    Ok(())
}

fn teardown(_ctx: &mut TestContext<'_>) -> TestResult {
    FIXTURE.with(|f| *f.borrow_mut() = None);
    Ok(())
}

fn test_check(ctx: &mut TestContext<'_>) -> TestResult {
    mu_check!(ctx, fixture().foo == 7);
    Ok(())
}

fn test_check_fail(ctx: &mut TestContext<'_>) -> TestResult {
    mu_check!(ctx, fixture().foo != 7);
    Ok(())
}

fn test_assert(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert!(ctx, fixture().foo == 7, "foo should be 7");
    Ok(())
}

fn test_assert_int_eq(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_int_eq!(ctx, 4, fixture().bar);
    Ok(())
}

fn test_assert_double_eq(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_double_eq!(ctx, 0.1, fixture().dbar);
    Ok(())
}

fn test_assert_double_eq_fail(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_double_eq!(ctx, 0.2, fixture().dbar);
    Ok(())
}

fn test_string_eq(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_string_eq!(ctx, Some("abcd"), fixture().foo_str);
    Ok(())
}

fn test_string_eq_fail(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_string_eq!(ctx, Some("abce"), fixture().foo_str);
    Ok(())
}

fn test_string_eq_absent(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_string_eq!(ctx, None, None);
    Ok(())
}

fn test_fail(ctx: &mut TestContext<'_>) -> TestResult {
    mu_fail!(ctx, "Fail now!");
}

pub fn lifecycle_suite<W: Write>(runner: &mut Runner<W>) {
    runner.set_setup(setup);
    runner.set_teardown(teardown);

    mu_run_test!(runner, test_check);
    mu_run_test!(runner, test_check_fail);
    mu_run_test!(runner, test_assert);
    mu_run_test!(runner, test_assert_int_eq);
    mu_run_test!(runner, test_assert_double_eq);
    mu_run_test!(runner, test_assert_double_eq_fail);
    mu_run_test!(runner, test_string_eq);
    mu_run_test!(runner, test_string_eq_fail);
    mu_run_test!(runner, test_string_eq_absent);
    mu_run_test!(runner, test_fail);
}
