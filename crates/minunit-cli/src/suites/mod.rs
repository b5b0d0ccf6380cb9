//! Demonstration suites bundled with the `minunit` binary

mod example;
mod lifecycle;

pub use example::example_suite;
pub use lifecycle::lifecycle_suite;

use minunit_runtime::{suite_map, RegistryError, SuiteRegistry};
use std::io::Write;

/// Every bundled suite, in the order they run
pub fn registry<W: Write>() -> Result<SuiteRegistry<W>, RegistryError> {
    suite_map![example_suite, lifecycle_suite]
}
