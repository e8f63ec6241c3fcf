//! `selref resolve <href>` – resolve an href against the base.

use selref_core::Location;

pub fn run_resolve(href: &str, location: &dyn Location) {
    let base = location.href();
    tracing::debug!("resolving {href} against {base}");
    if let Some(resolved) = selref_core::resolve(Some(href), &base) {
        println!("{resolved}");
    }
}
