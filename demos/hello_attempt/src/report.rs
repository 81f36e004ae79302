//! Renders outcomes for the terminal.

use std::io::{self, Write};

use attempt::{Fault, Outcome};
use serde::Serialize;

use crate::error::Result;

/// Writes `outcome` as a single JSON line.
///
/// Failures are rendered through their `Display` implementation.
///
/// # Errors
///
/// Returns an error when encoding or writing fails.
pub fn write_outcome_to<W, T, E>(writer: &mut W, outcome: &Outcome<T, Fault<E>>) -> Result<()>
where
    W: Write,
    T: Serialize,
    E: std::fmt::Display,
{
    let rendered = outcome.as_ref().map_err(ToString::to_string);
    serde_json::to_writer(&mut *writer, &rendered)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes `outcome` to standard output.
///
/// # Errors
///
/// Returns an error when encoding or writing fails.
pub fn print_outcome<T, E>(outcome: &Outcome<T, Fault<E>>) -> Result<()>
where
    T: Serialize,
    E: std::fmt::Display,
{
    let mut stdout = io::stdout().lock();
    write_outcome_to(&mut stdout, outcome)
}
