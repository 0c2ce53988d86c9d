//! Subcommand implementations

pub mod properties;
pub mod reservations;
pub mod user;

use anyhow::Result;
use serde::Serialize;

/// Print a result as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
