use std::cmp::Ordering;

use crate::types::Post;

/// Order a series' members for reading.
///
/// Sort key, ascending: `(series_order, published, id)`. Posts without an
/// explicit order sort after every ordered post. The `id` component makes the
/// comparison total, so the output does not depend on input order.
pub fn order_series<'a>(mut members: Vec<&'a Post>) -> Vec<&'a Post> {
    members.sort_by(|a, b| compare(a, b));
    members
}

/// Total order over series members.
pub fn compare(a: &Post, b: &Post) -> Ordering {
    order_key(a)
        .cmp(&order_key(b))
        .then_with(|| a.published.cmp(&b.published))
        .then_with(|| a.id.cmp(&b.id))
}

// (false, n) sorts before (true, _), placing unordered posts last.
fn order_key(post: &Post) -> (bool, u32) {
    match post.series_order {
        Some(n) => (false, n),
        None => (true, 0),
    }
}
