use super::SeriesError;
use super::order::order_series;
use super::select::series_members;
use crate::filter::Eligibility;
use crate::types::{Post, SeriesPage};

/// One page of a series' ordered member list.
///
/// `page_number` is 1-based and must lie in `[1, total_pages]`; anything else
/// (including any page of an empty series) is [`SeriesError::PageOutOfRange`].
pub fn series_page<'a>(
    posts: &'a [Post],
    filter: &impl Eligibility,
    series_id: &str,
    page_number: usize,
    page_size: usize,
) -> Result<SeriesPage<'a>, SeriesError> {
    if page_size == 0 {
        return Err(SeriesError::InvalidPageSize);
    }
    let ordered = order_series(series_members(posts, filter, series_id));
    let total_items = ordered.len();
    let total_pages = total_items.div_ceil(page_size);
    if page_number == 0 || page_number > total_pages {
        return Err(SeriesError::PageOutOfRange {
            page: page_number,
            total_pages,
        });
    }

    let start = (page_number - 1) * page_size;
    let end = (start + page_size).min(total_items);
    Ok(SeriesPage {
        items: ordered[start..end].to_vec(),
        page_number,
        total_pages,
        total_items,
    })
}

/// Split an already ordered list into every page, in order.
///
/// An empty list yields no pages.
pub fn paginate<'a>(
    ordered: &[&'a Post],
    page_size: usize,
) -> Result<Vec<SeriesPage<'a>>, SeriesError> {
    if page_size == 0 {
        return Err(SeriesError::InvalidPageSize);
    }
    let total_items = ordered.len();
    let total_pages = total_items.div_ceil(page_size);
    Ok(ordered
        .chunks(page_size)
        .enumerate()
        .map(|(i, chunk)| SeriesPage {
            items: chunk.to_vec(),
            page_number: i + 1,
            total_pages,
            total_items,
        })
        .collect())
}
