//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (series, post) is its semantic identity — title and
//! positional index — with filesystem paths shown as secondary context via
//! indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Posts
//! 001 The Agent Loop
//!     Source: 2025-10-26-agent-loop.md
//!     Series: Building a Coding Agent in Rust (#1)
//! 002 A Standalone Post
//!     Source: 2025-08-15-standalone.md
//!
//! Skipped
//!     notes/broken.md: no front matter block
//! ```
//!
//! ## Check (series as the generator will see them)
//!
//! ```text
//! Series
//! 001 Building a Coding Agent in Rust (3 posts)
//!     001 The Agent Loop
//!         Source: 2025-10-26-agent-loop.md
//! ```
//!
//! ## Generate
//!
//! ```text
//! Series index → series/index.html
//! 001 Building a Coding Agent in Rust → series/building-a-coding-agent-in-rust/index.html
//!     page 2 → series/building-a-coding-agent-in-rust/page/2/index.html
//!     3 navigation fragments
//!
//! Generated 1 series, 2 listing pages, 3 navigation fragments
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure —
//! no I/O, no side effects.

use crate::filter::Eligibility;
use crate::generate::GenerateReport;
use crate::scan::Manifest;
use crate::series;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: positional index + title, with optional count.
///
/// ```text
/// 001 Building a Coding Agent in Rust (3 posts)
/// 001 The Agent Loop
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(1) => format!("{} {} (1 post)", format_index(index), title),
        Some(n) => format!("{} {} ({} posts)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output: every parsed post, then skipped files.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];

    for (i, post) in manifest.posts.iter().enumerate() {
        lines.push(entity_header(i + 1, &post.title, None));
        lines.push(format!("{}Source: {}", indent(1), post.source_path));
        if let Some(name) = &post.series_name {
            match post.series_order {
                Some(order) => lines.push(format!("{}Series: {} (#{})", indent(1), name.trim(), order)),
                None => lines.push(format!("{}Series: {}", indent(1), name.trim())),
            }
        }
        let mut flags = Vec::new();
        if post.draft {
            flags.push("draft");
        }
        if post.excluded {
            flags.push("excluded");
        }
        if !flags.is_empty() {
            lines.push(format!("{}Status: {}", indent(1), flags.join(", ")));
        }
    }

    if !manifest.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &manifest.skipped {
            lines.push(format!(
                "{}{}: {}",
                indent(1),
                skipped.source_path,
                skipped.reason
            ));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Check: series as seen through the filter
// ============================================================================

/// Format the series that the generator would produce for `filter`.
pub fn format_series_output(manifest: &Manifest, filter: &impl Eligibility) -> Vec<String> {
    let posts = &manifest.posts;
    let summaries = series::list_series(posts, filter);
    if summaries.is_empty() {
        return vec!["Series".to_string(), format!("{}(none)", indent(1))];
    }

    let mut lines = vec!["Series".to_string()];
    for (i, summary) in summaries.iter().enumerate() {
        lines.push(entity_header(
            i + 1,
            summary.display_name.trim(),
            Some(summary.member_count),
        ));
        let ordered =
            series::order_series(series::series_members(posts, filter, &summary.identifier));
        for (j, post) in ordered.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), entity_header(j + 1, &post.title, None)));
            lines.push(format!("{}Source: {}", indent(2), post.source_path));
        }
    }
    lines
}

/// Print series output to stdout.
pub fn print_series_output(manifest: &Manifest, filter: &impl Eligibility) {
    for line in format_series_output(manifest, filter) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output showing which files each series produced.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Series index → {}/index.html", report.series_path)];

    let mut listing_pages = 0;
    let mut fragments = 0;
    for (i, generated) in report.series.iter().enumerate() {
        let first = generated.pages.first().map(String::as_str).unwrap_or("");
        lines.push(format!(
            "{} → {}",
            entity_header(i + 1, generated.display_name.trim(), None),
            first
        ));
        for (n, page) in generated.pages.iter().enumerate().skip(1) {
            lines.push(format!("{}page {} → {}", indent(1), n + 1, page));
        }
        lines.push(format!(
            "{}{}",
            indent(1),
            plural(generated.nav_fragments, "navigation fragment", "navigation fragments")
        ));
        listing_pages += generated.pages.len();
        fragments += generated.nav_fragments;
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(report.series.len(), "series", "series"),
        plural(listing_pages, "listing page", "listing pages"),
        plural(fragments, "navigation fragment", "navigation fragments"),
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
