use std::cmp::Ordering;
use std::collections::HashMap;

use feruca::Collator;

use crate::filter::Eligibility;
use crate::types::{Post, SeriesSummary};

/// Build the distinct set of series across all eligible posts.
///
/// The display name comes from the first eligible post seen for each
/// identifier; later posts only bump the member count. Sorted by display
/// name under the Unicode collation algorithm (CLDR root locale), with the
/// raw name and identifier as tie-breaks so the order is total.
pub fn list_series(posts: &[Post], filter: &impl Eligibility) -> Vec<SeriesSummary> {
    let mut summaries: Vec<SeriesSummary> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for post in posts.iter().filter(|p| filter.is_eligible(p)) {
        let (Some(name), Some(identifier)) = (post.series_name.as_deref(), post.series_id())
        else {
            continue;
        };
        match slots.get(&identifier) {
            Some(&slot) => summaries[slot].member_count += 1,
            None => {
                slots.insert(identifier.clone(), summaries.len());
                summaries.push(SeriesSummary {
                    identifier,
                    display_name: name.to_string(),
                    member_count: 1,
                });
            }
        }
    }

    let mut collator = Collator::default();
    summaries.sort_by(|a, b| compare_display_names(&mut collator, a, b));
    tracing::debug!(series = summaries.len(), "grouped series");
    summaries
}

fn compare_display_names(
    collator: &mut Collator,
    a: &SeriesSummary,
    b: &SeriesSummary,
) -> Ordering {
    collator
        .collate(a.display_name.as_str(), b.display_name.as_str())
        .then_with(|| a.display_name.cmp(&b.display_name))
        .then_with(|| a.identifier.cmp(&b.identifier))
}
