//! Providers of the "current location" used as the default base URL.
//!
//! Parsing functions always take the base explicitly; these types live at
//! the integration boundary and decide what "here" means.

use url::Url;

/// Base used when no directory can be turned into a `file:` URL.
const ROOT_FILE_URL: &str = "file:///";

/// Source of the base URL that relative hrefs resolve against.
pub trait Location {
    fn href(&self) -> String;
}

/// A base supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocation(String);

impl FixedLocation {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }
}

impl Location for FixedLocation {
    fn href(&self) -> String {
        self.0.clone()
    }
}

/// The process working directory as a `file:` URL ending in `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentDirLocation;

impl Location for CurrentDirLocation {
    fn href(&self) -> String {
        std::env::current_dir()
            .ok()
            .and_then(|dir| Url::from_directory_path(dir).ok())
            .map(String::from)
            .unwrap_or_else(|| ROOT_FILE_URL.to_string())
    }
}

impl<L: Location + ?Sized> Location for Box<L> {
    fn href(&self) -> String {
        (**self).href()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_location_returns_input_verbatim() {
        let loc = FixedLocation::new("http://y.com/page");
        assert_eq!(loc.href(), "http://y.com/page");
    }

    #[test]
    fn current_dir_is_file_directory_url() {
        let href = CurrentDirLocation.href();
        assert!(href.starts_with("file:///"), "{href}");
        assert!(href.ends_with('/'), "{href}");
    }

    #[test]
    fn boxed_location_forwards() {
        let loc: Box<dyn Location> = Box::new(FixedLocation::new("http://a/"));
        assert_eq!(loc.href(), "http://a/");
    }
}
