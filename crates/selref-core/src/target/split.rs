//! Balanced-parenthesis splitting of a target into href and selector.

use crate::error::TargetError;

use super::ParsedTarget;

/// Literal that introduces an embedded selector. Its `(` is closed by the
/// matching `)` at the end of the selector expression.
pub const SELECTOR_MARKER: &str = "#(selector=";

/// Splits `target` into href and selector, failing on an unclosed marker.
///
/// Only the leftmost marker is honoured. Text following the selector's
/// closing `)` is dropped.
pub fn try_split(target: Option<&str>) -> Result<ParsedTarget, TargetError> {
    let target = match target {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(ParsedTarget::default()),
    };

    let Some(marker_start) = target.find(SELECTOR_MARKER) else {
        return Ok(ParsedTarget {
            href: Some(target.to_string()),
            selector: None,
        });
    };

    let body_start = marker_start + SELECTOR_MARKER.len();
    let body_len = closing_paren(&target[body_start..]).ok_or_else(|| {
        TargetError::MalformedSelector {
            target: target.to_string(),
        }
    })?;

    let href = &target[..marker_start];
    Ok(ParsedTarget {
        href: (!href.is_empty()).then(|| href.to_string()),
        selector: Some(target[body_start..body_start + body_len].to_string()),
    })
}

/// Byte offset in `body` of the `)` that brings the depth (seeded at 1) to zero.
fn closing_paren(body: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in body.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
