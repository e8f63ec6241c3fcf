//! Integration test: public API end to end with recorded diagnostics.
//!
//! Runs a batch of realistic targets through one parser and checks both the
//! results and the diagnostics the parser reported along the way.

use selref_core::diagnostics::Level;
use selref_core::{
    try_split, FixedLocation, ParsedTarget, RecordingDiagnostics, SelectorRequestParser,
    TargetError,
};

fn target(href: Option<&str>, selector: Option<&str>) -> ParsedTarget {
    ParsedTarget {
        href: href.map(String::from),
        selector: selector.map(String::from),
    }
}

#[test]
fn batch_of_targets_against_page_base() {
    let sink = RecordingDiagnostics::new();
    let parser = SelectorRequestParser::with_diagnostics(&sink);
    let base = "https://docs.example.com/guide/intro.html";

    let cases = [
        (
            "#(selector=table > tr:nth-child(15))",
            target(Some(base), Some("table > tr:nth-child(15)")),
        ),
        (
            "setup.html#(selector=#install)",
            target(
                Some("https://docs.example.com/guide/setup.html"),
                Some("#install"),
            ),
        ),
        (
            "/api/index.html",
            target(Some("https://docs.example.com/api/index.html"), None),
        ),
        (
            "http://mirror.example.org/x#(selector=main)",
            target(Some("http://mirror.example.org/x"), Some("main")),
        ),
        (
            "#(selector=li:nth-of-type(2)",
            target(
                Some("https://docs.example.com/guide/intro.html#(selector=li:nth-of-type(2)"),
                None,
            ),
        ),
    ];

    for (input, want) in cases {
        assert_eq!(parser.parse_and_resolve(Some(input), base), want, "{input}");
    }

    let events = sink.events();
    assert_eq!(events.len(), 1, "{events:?}");
    assert_eq!(events[0].level, Level::Warn);
    assert_eq!(events[0].get("target"), Some("#(selector=li:nth-of-type(2)"));
}

#[test]
fn unresolvable_base_degrades_to_raw_href() {
    let sink = RecordingDiagnostics::new();
    let parser = SelectorRequestParser::with_diagnostics(&sink);

    let result = parser.parse_and_resolve(Some("../up.html#(selector=p)"), "relative/base");
    assert_eq!(result, target(Some("../up.html"), Some("p")));

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get("href"), Some("../up.html"));
    assert_eq!(errors[0].get("base"), Some("relative/base"));
    assert!(errors[0].get("error").is_some());
}

#[test]
fn selector_only_with_location() {
    let parser = SelectorRequestParser::new();
    let here = FixedLocation::new("http://y.com/page");
    assert_eq!(
        parser.parse_and_resolve_at(Some("#(selector=p)"), &here),
        target(Some("http://y.com/page"), Some("p"))
    );
}

#[test]
fn strict_split_reports_malformed() {
    assert!(matches!(
        try_split(Some("/a#(selector=(")),
        Err(TargetError::MalformedSelector { .. })
    ));
}
