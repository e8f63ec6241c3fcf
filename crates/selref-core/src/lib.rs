//! Parsing of `href#(selector=...)` targets and resolution of their hrefs.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod location;
pub mod logging;
pub mod target;

pub use diagnostics::{Diagnostics, RecordingDiagnostics, TracingDiagnostics};
pub use error::TargetError;
pub use location::{CurrentDirLocation, FixedLocation, Location};
pub use target::{
    parse_and_resolve, parse_and_resolve_at, resolve, split, try_resolve, try_split,
    ParsedTarget, SelectorRequestParser,
};
