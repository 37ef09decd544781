//! Post eligibility.
//!
//! Every series operation works on the eligible subset of the collection
//! only. Eligibility is abstracted behind [`Eligibility`] so callers can pass
//! the configured [`PostFilter`] or any `Fn(&Post) -> bool`.

use chrono::{DateTime, Utc};

use crate::config::PostsConfig;
use crate::types::Post;

/// Decides whether a post takes part in series computations.
pub trait Eligibility {
    fn is_eligible(&self, post: &Post) -> bool;
}

impl<F> Eligibility for F
where
    F: Fn(&Post) -> bool,
{
    fn is_eligible(&self, post: &Post) -> bool {
        self(post)
    }
}

/// The standard publication filter.
///
/// A post is eligible when it has a non-blank id, is not excluded, is not a
/// draft (unless drafts are included), and is not published after `now`
/// (unless future posts are included).
#[derive(Debug, Clone)]
pub struct PostFilter {
    pub now: DateTime<Utc>,
    pub include_drafts: bool,
    pub include_future: bool,
}

impl PostFilter {
    /// Strict filter at the given reference time.
    pub fn published_at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            include_drafts: false,
            include_future: false,
        }
    }

    pub fn from_config(config: &PostsConfig, now: DateTime<Utc>) -> Self {
        Self {
            now,
            include_drafts: config.include_drafts,
            include_future: config.include_future,
        }
    }
}

impl Eligibility for PostFilter {
    fn is_eligible(&self, post: &Post) -> bool {
        if post.id.trim().is_empty() || post.excluded {
            return false;
        }
        if post.draft && !self.include_drafts {
            return false;
        }
        self.include_future || post.published <= self.now
    }
}
