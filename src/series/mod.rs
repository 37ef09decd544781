//! Series computations over an in-memory post collection.
//!
//! Every function takes the full collection plus an [`Eligibility`] filter
//! and returns freshly built results; nothing is cached between calls.
//!
//! ```text
//! filter ─┬─ group::list_series                 (site-wide series index)
//!         └─ select::series_members
//!              └─ order::order_series
//!                   ├─ navigate::series_navigation   (per-post prev/next)
//!                   └─ paginate::series_page         (per-series listing)
//! ```
//!
//! Absence is never an error here: an unknown series yields an empty list and
//! a post outside any series yields `None` navigation. [`SeriesError`] is
//! reserved for caller contract violations.
//!
//! [`Eligibility`]: crate::filter::Eligibility

pub mod group;
pub mod navigate;
pub mod order;
pub mod paginate;
pub mod select;

pub use group::list_series;
pub use navigate::{navigation_for_series, series_navigation};
pub use order::order_series;
pub use paginate::{paginate, series_page};
pub use select::series_members;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeriesError {
    #[error("page size must be at least 1")]
    InvalidPageSize,
    #[error("page {page} is out of range (series has {total_pages} pages)")]
    PageOutOfRange { page: usize, total_pages: usize },
    #[error("post has no id")]
    MissingPostId,
}
