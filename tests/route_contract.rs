#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Route Contract Tests
//!
//! Public and admin URLs are linked from rendered pages and bookmarked by
//! the site owner, so they must not change by accident.
//! The golden file at tests/fixtures/site_routes.txt is the source of truth.
//!
//! If this test fails:
//! 1. Review the route changes carefully
//! 2. Update site_routes.txt if the change is intentional
//! 3. Check every page that links to the changed route
//!
//! Run with: cargo test --test route_contract

use std::collections::BTreeSet;
use std::fs;

const GOLDEN: &str = "tests/fixtures/site_routes.txt";

fn golden_lines() -> Vec<String> {
    fs::read_to_string(GOLDEN)
        .expect("Failed to read site_routes.txt")
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// Extract routes from the router in src/web/mod.rs
///
/// A `.route(` call may span several lines, so comments are dropped and the
/// rest is split on `.route(` before looking at each call.
fn extract_routes_from_source() -> BTreeSet<String> {
    let content = fs::read_to_string("src/web/mod.rs").expect("Failed to read src/web/mod.rs");
    let code: String = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut routes = BTreeSet::new();
    for call in code.split(".route(").skip(1) {
        let call = call.trim_start();
        let Some(rest) = call.strip_prefix('"') else {
            continue;
        };
        let Some(end) = rest.find('"') else {
            continue;
        };
        let path = &rest[..end];
        // The call ends at the first `))`: handler(...) closing, then route(...)
        let handler = rest[end..].split("))").next().unwrap_or_default();

        for (method, marker) in [("GET", "get("), ("POST", "post(")] {
            if handler.contains(marker) {
                routes.insert(format!("{method} {path}"));
            }
        }
    }
    routes
}

#[test]
fn site_routes_match_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let actual = extract_routes_from_source();

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    if !added.is_empty() || !removed.is_empty() {
        let mut msg = String::from("\n\nROUTE CONTRACT VIOLATION!\n\n");

        if !added.is_empty() {
            msg.push_str("Routes ADDED (not in contract):\n");
            for route in &added {
                msg.push_str(&format!("  + {}\n", route));
            }
            msg.push('\n');
        }

        if !removed.is_empty() {
            msg.push_str("Routes REMOVED (missing from router):\n");
            for route in &removed {
                msg.push_str(&format!("  - {}\n", route));
            }
            msg.push('\n');
        }

        msg.push_str("To fix: if intentional, update tests/fixtures/site_routes.txt\n");
        panic!("{}", msg);
    }
}

#[test]
fn golden_file_is_sorted() {
    let routes = golden_lines();
    let mut sorted = routes.clone();
    sorted.sort();

    assert_eq!(
        routes, sorted,
        "site_routes.txt should be sorted alphabetically for easy diffing"
    );
}

#[test]
fn admin_routes_share_the_secret_prefix() {
    for route in golden_lines() {
        let path = route.split_once(' ').map(|(_, p)| p).unwrap();
        if path.contains("admin") {
            assert!(
                path.starts_with("/admin-secret-panel"),
                "admin route outside the panel prefix: {route}"
            );
        }
    }
}
