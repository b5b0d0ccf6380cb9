//! Two failing tests: the smallest suite that exercises every output path

use minunit_runtime::{
    mu_assert, mu_assert_int_eq, mu_check, mu_run_test, Runner, TestContext, TestResult,
};
use std::io::Write;

fn test_assert(ctx: &mut TestContext<'_>) -> TestResult {
    mu_assert_int_eq!(ctx, 5 * 5, 25);
    let zero = 0;
    mu_assert!(ctx, zero != 0, "zero isn't true");
    Ok(())
}

fn test_check(ctx: &mut TestContext<'_>) -> TestResult {
    let one = 1;
    mu_check!(ctx, one != 1);
    Ok(())
}

pub fn example_suite<W: Write>(runner: &mut Runner<W>) {
    mu_run_test!(runner, test_assert);
    mu_run_test!(runner, test_check);
}
