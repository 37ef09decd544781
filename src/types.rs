//! Shared types used across the scan and generate stages and the series core.
//!
//! [`Post`] is serialized into the scan manifest and read back by the
//! generate stage, so its shape is the contract between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::naming;

/// A blog post as loaded from the content directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable unique identifier, also the URL slug.
    pub id: String,
    pub title: String,
    /// Publication time. Fallback ordering key inside a series and input to
    /// the future-post filter.
    pub published: DateTime<Utc>,
    /// Human-readable series name. `None` means the post is not in a series;
    /// never `Some("")`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    /// Explicit position within the series. Not guaranteed unique or
    /// contiguous; `Some(0)` is a real position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_order: Option<u32>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub excluded: bool,
    /// Source file relative to the content root.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source_path: String,
}

impl Post {
    /// The normalized series identifier, if the post belongs to a series.
    pub fn series_id(&self) -> Option<String> {
        naming::series_id(self.series_name.as_deref())
    }
}

/// One entry of the site-wide series index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub identifier: String,
    /// Series name as written on the first post encountered.
    pub display_name: String,
    pub member_count: usize,
}

/// Where a post sits inside its series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesNavigation<'a> {
    pub previous: Option<&'a Post>,
    pub next: Option<&'a Post>,
    /// 1-based.
    pub position: usize,
    pub total: usize,
    pub series_name: &'a str,
}

/// One chunk of an ordered series for a listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPage<'a> {
    pub items: Vec<&'a Post>,
    /// 1-based.
    pub page_number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl SeriesPage<'_> {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// 1-based position in the whole series of the first item on this page.
    pub fn first_position(&self, page_size: usize) -> usize {
        (self.page_number - 1) * page_size + 1
    }
}
