//! `selref split <target>` – split without resolving.

use anyhow::Result;
use selref_core::config::OutputFormat;

use super::output::render;

pub fn run_split(target: &str, format: OutputFormat) -> Result<()> {
    let parsed = selref_core::split(Some(target));
    println!("{}", render(&parsed, format)?);
    Ok(())
}
