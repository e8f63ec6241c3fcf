//! Target parsing: split `href#(selector=...)` strings and resolve the href.
//!
//! A target carries an href, an embedded selector directive, both, or
//! neither. Malformed selectors and unresolvable hrefs are not errors for
//! callers of the lenient operations: they are reported to the parser's
//! [`Diagnostics`] and a degraded value is returned.

mod resolve;
mod split;

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::TargetError;
use crate::location::Location;

pub use resolve::{is_absolute_http, try_resolve};
pub use split::{try_split, SELECTOR_MARKER};

/// The two parts of a target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedTarget {
    pub href: Option<String>,
    pub selector: Option<String>,
}

impl ParsedTarget {
    pub fn is_empty(&self) -> bool {
        self.href.is_none() && self.selector.is_none()
    }

    /// Joins the parts back into target syntax: the href, then
    /// `#(selector=...)` if a selector is set.
    pub fn to_target_string(&self) -> String {
        let mut out = self.href.clone().unwrap_or_default();
        if let Some(selector) = &self.selector {
            out.push_str(SELECTOR_MARKER);
            out.push_str(selector);
            out.push(')');
        }
        out
    }
}

/// Splits targets and resolves hrefs, reporting recoverable failures to `D`.
#[derive(Debug, Clone, Default)]
pub struct SelectorRequestParser<D = TracingDiagnostics> {
    diagnostics: D,
}

impl SelectorRequestParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Diagnostics> SelectorRequestParser<D> {
    pub fn with_diagnostics(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Splits `target` into `{href, selector}`.
    ///
    /// An unclosed selector marker is reported as a warning and the whole
    /// target becomes the href.
    ///
    /// # Examples
    ///
    /// - `"/path"` → `{href: "/path", selector: None}`
    /// - `"/page#(selector=tr:nth-child(15))"` → `{href: "/page", selector: "tr:nth-child(15)"}`
    pub fn split(&self, target: Option<&str>) -> ParsedTarget {
        match try_split(target) {
            Ok(parsed) => parsed,
            Err(err) => {
                let raw = target.unwrap_or_default();
                let detail = err.to_string();
                self.diagnostics.warn(
                    "unmatched parenthesis in selector; treating target as href",
                    &[("target", raw), ("error", detail.as_str())],
                );
                ParsedTarget {
                    href: Some(raw.to_string()),
                    selector: None,
                }
            }
        }
    }

    /// Resolves `href` against `base`. On failure the error is reported and
    /// the href is returned unchanged.
    pub fn resolve(&self, href: Option<&str>, base: &str) -> Option<String> {
        match try_resolve(href, base) {
            Ok(resolved) => resolved,
            Err(err) => {
                let href = href.unwrap_or_default();
                let detail = match &err {
                    TargetError::UrlResolution { source, .. } => source.to_string(),
                    other => other.to_string(),
                };
                self.diagnostics.error(
                    "failed to resolve href against base",
                    &[("href", href), ("base", base), ("error", detail.as_str())],
                );
                Some(href.to_string())
            }
        }
    }

    /// Splits `target`, then resolves its href against `base`.
    ///
    /// A selector without an href applies to the base page itself, so the
    /// href becomes `base` verbatim.
    pub fn parse_and_resolve(&self, target: Option<&str>, base: &str) -> ParsedTarget {
        let ParsedTarget { href, selector } = self.split(target);
        let href = match (href, &selector) {
            (None, Some(_)) => Some(base.to_string()),
            (Some(href), _) => self.resolve(Some(href.as_str()), base),
            (None, None) => None,
        };
        ParsedTarget { href, selector }
    }

    /// [`parse_and_resolve`](Self::parse_and_resolve) with the base taken
    /// from `location`.
    pub fn parse_and_resolve_at<L: Location + ?Sized>(
        &self,
        target: Option<&str>,
        location: &L,
    ) -> ParsedTarget {
        self.parse_and_resolve(target, &location.href())
    }
}

/// [`SelectorRequestParser::split`] with `tracing` diagnostics.
pub fn split(target: Option<&str>) -> ParsedTarget {
    SelectorRequestParser::new().split(target)
}

/// [`SelectorRequestParser::resolve`] with `tracing` diagnostics.
pub fn resolve(href: Option<&str>, base: &str) -> Option<String> {
    SelectorRequestParser::new().resolve(href, base)
}

/// [`SelectorRequestParser::parse_and_resolve`] with `tracing` diagnostics.
pub fn parse_and_resolve(target: Option<&str>, base: &str) -> ParsedTarget {
    SelectorRequestParser::new().parse_and_resolve(target, base)
}

/// [`SelectorRequestParser::parse_and_resolve_at`] with `tracing` diagnostics.
pub fn parse_and_resolve_at<L: Location + ?Sized>(
    target: Option<&str>,
    location: &L,
) -> ParsedTarget {
    SelectorRequestParser::new().parse_and_resolve_at(target, location)
}
