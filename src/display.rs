//! Display Helpers
//!
//! Pure formatting used by the roadmap cards.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{Post, RoadmapColumn};

/// Description length shown on a card before truncation
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
/// Tags shown on a card before collapsing into "+N"
pub const MAX_VISIBLE_TAGS: usize = 2;

const SLUG: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// First 100 characters followed by "..." when the description is longer
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

/// Tags to render and the overflow label, if any
pub fn visible_tags(tags: &[String]) -> (&[String], Option<String>) {
    if tags.len() > MAX_VISIBLE_TAGS {
        (&tags[..MAX_VISIBLE_TAGS], Some(format!("+{}", tags.len() - MAX_VISIBLE_TAGS)))
    } else {
        (tags, None)
    }
}

/// Link to the post's own page
pub fn post_url(post: &Post) -> String {
    format!("/posts/{}/{}", post.number, utf8_percent_encode(&post.slug, SLUG))
}

/// Ids of the columns left and right of `column_id` on the board
pub fn neighbour_columns(columns: &[RoadmapColumn], column_id: i64) -> (Option<i64>, Option<i64>) {
    let Some(index) = columns.iter().position(|c| c.id == column_id) else {
        return (None, None);
    };
    let previous = index.checked_sub(1).map(|i| columns[i].id);
    let next = columns.get(index + 1).map(|c| c.id);
    (previous, next)
}
