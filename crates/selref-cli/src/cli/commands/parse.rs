//! `selref parse <target>` – split and resolve.

use anyhow::Result;
use selref_core::config::OutputFormat;
use selref_core::Location;

use super::output::render;

pub fn run_parse(target: &str, location: &dyn Location, format: OutputFormat) -> Result<()> {
    let parsed = selref_core::parse_and_resolve_at(Some(target), location);
    println!("{}", render(&parsed, format)?);
    Ok(())
}
