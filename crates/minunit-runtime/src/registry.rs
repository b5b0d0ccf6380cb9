//! Suite registry and driver
//!
//! Suites are enumerated up front, usually with [`suite_map!`](crate::suite_map),
//! and run in registration order. The driver has no view of individual
//! tests, only of suite boundaries; after every suite it unbinds the
//! lifecycle hooks so none leak into the next one.

use crate::runner::Runner;
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

/// Errors raised while assembling a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("suite '{0}' is registered more than once")]
    DuplicateSuite(String),
}

/// Entry point of a suite
pub type SuiteFn<W> = fn(&mut Runner<W>);

/// A named suite entry point
pub struct SuiteEntry<W: Write = io::Stdout> {
    name: &'static str,
    run: SuiteFn<W>,
}

impl<W: Write> SuiteEntry<W> {
    pub fn new(name: &'static str, run: SuiteFn<W>) -> Self {
        Self { name, run }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<W: Write> fmt::Debug for SuiteEntry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteEntry").field("name", &self.name).finish()
    }
}

/// Ordered list of suites known before the run starts
#[derive(Debug)]
pub struct SuiteRegistry<W: Write = io::Stdout> {
    suites: Vec<SuiteEntry<W>>,
}

impl<W: Write> Default for SuiteRegistry<W> {
    fn default() -> Self {
        Self { suites: Vec::new() }
    }
}

impl<W: Write> SuiteRegistry<W> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from entries, keeping their order
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = SuiteEntry<W>>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry)?;
        }
        Ok(registry)
    }

    /// Append a suite; names must be unique
    pub fn register(&mut self, entry: SuiteEntry<W>) -> Result<(), RegistryError> {
        if self.suites.iter().any(|s| s.name == entry.name) {
            return Err(RegistryError::DuplicateSuite(entry.name.to_string()));
        }
        self.suites.push(entry);
        Ok(())
    }

    /// Suite names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.suites.iter().map(|s| s.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuiteEntry<W>> {
        self.suites.iter()
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

/// Run one suite, then unbind its hooks
pub fn run_suite<W: Write>(entry: &SuiteEntry<W>, runner: &mut Runner<W>) {
    debug!(suite = entry.name, "running suite");
    (entry.run)(runner);
    runner.clear_hooks();
    debug!(
        suite = entry.name,
        tests_run = runner.state().tests_run(),
        "suite finished"
    );
}

/// Run every registered suite in order
pub fn run_all_suites<W: Write>(registry: &SuiteRegistry<W>, runner: &mut Runner<W>) {
    for entry in registry.iter() {
        run_suite(entry, runner);
    }
}

/// Build a [`SuiteRegistry`] from suite functions, named after their
/// identifiers. Evaluates to `Result<SuiteRegistry<_>, RegistryError>`.
#[macro_export]
macro_rules! suite_map {
    ($($suite:ident),* $(,)?) => {
        $crate::SuiteRegistry::from_entries([
            $($crate::SuiteEntry::new(stringify!($suite), $suite)),*
        ])
    };
}
