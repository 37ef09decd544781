//! Shared test utilities for the simple-series test suite.
//!
//! Provides post builders for the pure series functions, plus fixture setup
//! and manifest lookups for scan and generate tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let posts = vec![
//!     series_post("a", "2025-01-01", "Axum", Some(1)),
//!     post("plain", "2025-01-02"),
//! ];
//! let members = series_members(&posts, &all_posts, "axum");
//! assert_eq!(ids(&members), vec!["a"]);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::Post;

// =========================================================================
// Post builders
// =========================================================================

/// Midnight UTC on a `YYYY-MM-DD` date. Panics on a malformed date.
pub fn at(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date '{date}': {e}"))
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// A published post outside any series.
pub fn post(id: &str, date: &str) -> Post {
    Post {
        id: id.to_string(),
        title: id.replace('-', " "),
        published: at(date),
        series_name: None,
        series_order: None,
        draft: false,
        excluded: false,
        source_path: format!("{id}.md"),
    }
}

/// A published post in `series`, optionally with an explicit order.
pub fn series_post(id: &str, date: &str, series: &str, order: Option<u32>) -> Post {
    Post {
        series_name: Some(series.to_string()),
        series_order: order,
        ..post(id, date)
    }
}

/// The worked example: three weekly parts, given in reading order.
pub fn coding_agent_series() -> Vec<Post> {
    let name = "Building a Coding Agent in Rust";
    vec![
        series_post("part-1", "2025-10-26", name, Some(1)),
        series_post("part-2", "2025-11-02", name, Some(2)),
        series_post("part-3", "2025-11-09", name, Some(3)),
    ]
}

/// Filter that admits every post.
pub fn all_posts(_: &Post) -> bool {
    true
}

/// Ids of a post list, in order.
pub fn ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
    posts.iter().map(|p| p.id.as_str()).collect()
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a post by id. Panics if not found.
pub fn find_post<'a>(manifest: &'a Manifest, id: &str) -> &'a Post {
    manifest
        .posts
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| {
            let ids = post_ids(manifest);
            panic!("post '{id}' not found. Available: {ids:?}")
        })
}

/// All post ids in manifest order.
pub fn post_ids(manifest: &Manifest) -> Vec<&str> {
    manifest.posts.iter().map(|p| p.id.as_str()).collect()
}
