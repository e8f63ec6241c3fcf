//! Resolution of relative hrefs against a base URL.

use url::Url;

use crate::error::TargetError;

/// True for hrefs that start with `http://` or `https://` (scheme compared
/// ASCII case-insensitively).
pub fn is_absolute_http(href: &str) -> bool {
    let has_prefix = |prefix: &str| {
        href.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    has_prefix("http://") || has_prefix("https://")
}

/// Resolves `href` against `base`, failing if either cannot be parsed.
///
/// Absolute `http(s)` hrefs are returned verbatim. Everything else goes
/// through [`Url::join`], so a non-http absolute href (`mailto:`, `file:`)
/// comes back in its normalised serialization.
pub fn try_resolve(href: Option<&str>, base: &str) -> Result<Option<String>, TargetError> {
    let href = match href {
        Some(h) if !h.is_empty() => h,
        _ => return Ok(None),
    };

    if is_absolute_http(href) {
        return Ok(Some(href.to_string()));
    }

    let joined = Url::parse(base)
        .and_then(|base_url| base_url.join(href))
        .map_err(|source| TargetError::UrlResolution {
            href: href.to_string(),
            base: base.to_string(),
            source,
        })?;
    Ok(Some(joined.into()))
}
