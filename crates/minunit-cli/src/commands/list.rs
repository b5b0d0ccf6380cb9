//! List command - print registered suite names

use crate::suites;
use anyhow::Result;
use std::io::{self, Write};

/// Print every registered suite name, one per line, in run order
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    list_with(&mut stdout.lock())
}

fn list_with<W: Write>(out: &mut W) -> Result<()> {
    let registry = suites::registry::<io::Sink>()?;
    for name in registry.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
