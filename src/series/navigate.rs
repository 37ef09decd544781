use super::SeriesError;
use super::order::order_series;
use super::select::series_members;
use crate::filter::Eligibility;
use crate::types::{Post, SeriesNavigation};

/// Locate `current` inside its ordered series and derive its neighbours.
///
/// Returns `Ok(None)` when the post has no series, or when it is not among
/// the eligible members of its own series (a draft being previewed, or a
/// collection that does not contain it). The post is matched by `id`, not by
/// reference, so `current` may come from a different copy of the collection.
///
/// The reported series name is the display name of the series, i.e. the name
/// on its first eligible member in collection order.
pub fn series_navigation<'a>(
    posts: &'a [Post],
    filter: &impl Eligibility,
    current: &Post,
) -> Result<Option<SeriesNavigation<'a>>, SeriesError> {
    if current.id.trim().is_empty() {
        return Err(SeriesError::MissingPostId);
    }
    let Some(series_id) = current.series_id() else {
        return Ok(None);
    };

    let members = series_members(posts, filter, &series_id);
    let Some(series_name) = members.first().copied().and_then(|p| p.series_name.as_deref())
    else {
        return Ok(None);
    };
    let ordered = order_series(members);

    let Some(index) = ordered.iter().position(|p| p.id == current.id) else {
        tracing::debug!(post = %current.id, series = %series_id, "post not found in its series");
        return Ok(None);
    };

    Ok(Some(navigation_at(&ordered, index, series_name)))
}

/// Navigation for every member of an already ordered series, in reading
/// order. Equivalent to calling [`series_navigation`] for each member, without
/// re-selecting and re-sorting the series per post.
///
/// `series_name` should be the series display name, as reported by
/// [`list_series`](super::list_series).
pub fn navigation_for_series<'a>(
    ordered: &[&'a Post],
    series_name: &'a str,
) -> Vec<SeriesNavigation<'a>> {
    (0..ordered.len())
        .map(|index| navigation_at(ordered, index, series_name))
        .collect()
}

fn navigation_at<'a>(
    ordered: &[&'a Post],
    index: usize,
    series_name: &'a str,
) -> SeriesNavigation<'a> {
    SeriesNavigation {
        previous: index.checked_sub(1).map(|i| ordered[i]),
        next: ordered.get(index + 1).copied(),
        position: index + 1,
        total: ordered.len(),
        series_name,
    }
}
