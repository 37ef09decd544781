use crate::filter::Eligibility;
use crate::types::Post;

/// All eligible posts whose series identifier equals `series_id`, in input
/// order. An unknown identifier yields an empty list.
pub fn series_members<'a>(
    posts: &'a [Post],
    filter: &impl Eligibility,
    series_id: &str,
) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| filter.is_eligible(p))
        .filter(|p| p.series_id().as_deref() == Some(series_id))
        .collect()
}
