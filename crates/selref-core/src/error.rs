//! Error types for target splitting and href resolution.

use thiserror::Error;

/// Failure while interpreting a target string.
///
/// The lenient operations never return these; they report them to
/// [`Diagnostics`](crate::Diagnostics) and degrade instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// The `(` opened by the selector marker is never closed.
    #[error("unmatched '(' after selector marker in {target:?}")]
    MalformedSelector { target: String },

    /// The base or the href could not be parsed into an absolute URL.
    #[error("cannot resolve {href:?} against {base:?}: {source}")]
    UrlResolution {
        href: String,
        base: String,
        #[source]
        source: url::ParseError,
    },
}
