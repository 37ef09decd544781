//! # Simple Series
//!
//! A minimal series organizer for static blogs. Posts declare the series they
//! belong to in front matter; Simple Series groups them, puts each series in
//! reading order, and renders series listing pages plus previous/next
//! navigation for every post in a series.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (markdown files → typed posts)
//! 2. Generate  manifest  →  dist/series/     (series pages, nav fragments, series.json)
//! ```
//!
//! Between the two stages sits the series core ([`series`]): pure functions
//! over an in-memory `&[Post]` with no I/O, no caching, and no global state.
//! Every call takes the full collection and an eligibility filter explicitly,
//! so the whole core is testable with hand-built fixtures.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, parses front matter, produces the manifest |
//! | [`generate`] | Stage 2 — renders series pages with Maud and writes `series.json` |
//! | [`series`] | Grouping, member selection, ordering, navigation, pagination |
//! | [`filter`] | Which posts count as published |
//! | [`naming`] | Series identifier normalization and `YYYY-MM-DD-slug` filename parsing |
//! | [`config`] | `config.toml` loading, validation, and merging over stock defaults |
//! | [`types`] | Shared types (`Post`, `SeriesSummary`, `SeriesNavigation`, `SeriesPage`) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Normalized Series Identifiers
//!
//! Authors retype series names by hand, so `"Backend Engineering in Axum "`
//! and `"backend engineering in axum"` must be the same series. Grouping is
//! keyed on [`naming::normalize`], never on the raw string. The display name
//! of a series is the raw name on the first eligible post in collection order.
//!
//! ## Total Ordering
//!
//! Within a series, posts sort by explicit `series_order`, then publication
//! date, then id. Unordered posts go last. Including the id makes the order
//! independent of input order, so two builds of the same content produce
//! byte-identical pages.
//!
//! ## Absence Is Not an Error
//!
//! An unknown series yields an empty list; a post outside any series has no
//! navigation. Only caller contract violations (page out of range, zero page
//! size, a post without an id) are errors.

pub mod config;
pub mod filter;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod series;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
