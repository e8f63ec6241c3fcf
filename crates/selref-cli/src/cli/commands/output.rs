//! Rendering of parse results for the terminal.

use anyhow::Result;
use selref_core::config::OutputFormat;
use selref_core::ParsedTarget;

/// Placeholder printed for an absent part.
const NONE_MARK: &str = "-";

/// Renders `parsed` as `href:`/`selector:` lines or a JSON object.
pub fn render(parsed: &ParsedTarget, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => format!(
            "href: {}\nselector: {}",
            parsed.href.as_deref().unwrap_or(NONE_MARK),
            parsed.selector.as_deref().unwrap_or(NONE_MARK)
        ),
        OutputFormat::Json => serde_json::to_string_pretty(parsed)?,
    })
}
