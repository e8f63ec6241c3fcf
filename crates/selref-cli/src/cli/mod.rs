//! CLI for selref target parsing.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use selref_core::config::{self, OutputFormat, SelrefConfig};

use commands::{run_completions, run_parse, run_resolve, run_split};

/// Top-level CLI for selref.
#[derive(Debug, Parser)]
#[command(name = "selref")]
#[command(about = "Split href#(selector=...) targets and resolve their hrefs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a target into its href and selector without resolving.
    Split {
        /// Target such as `/page#(selector=tr:nth-child(2))`.
        target: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve an href against a base URL.
    Resolve {
        /// Relative or absolute href.
        href: String,
        /// Base URL (default: config `default_base`, then the current directory).
        #[arg(long, value_name = "URL")]
        base: Option<String>,
    },

    /// Split a target and resolve its href against a base URL.
    Parse {
        /// Target such as `../list.html#(selector=li)`.
        target: String,
        /// Base URL (default: config `default_base`, then the current directory).
        #[arg(long, value_name = "URL")]
        base: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `--json` wins over the configured format.
fn output_format(json: bool, cfg: &SelrefConfig) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Split { target, json } => run_split(&target, output_format(json, &cfg))?,
            CliCommand::Resolve { href, base } => {
                run_resolve(&href, cfg.location(base.as_deref()).as_ref())
            }
            CliCommand::Parse { target, base, json } => run_parse(
                &target,
                cfg.location(base.as_deref()).as_ref(),
                output_format(json, &cfg),
            )?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
