//! Roadmap Column Component
//!
//! One board column: its title and the post cards in server order.

use leptos::prelude::*;

use crate::components::RoadmapPostCard;
use crate::i18n::t;
use crate::models::RoadmapColumn as RoadmapColumnModel;

#[component]
pub fn RoadmapColumn(
    column: RoadmapColumnModel,
    is_staff: bool,
    /// Columns left and right of this one
    neighbours: (Option<i64>, Option<i64>),
    /// (post number, from column id, to column id, new position)
    on_post_moved: Callback<(i64, i64, i64, i32)>,
    on_post_repositioned: Callback<(i64, i32)>,
    on_post_removed: Callback<i64>,
) -> impl IntoView {
    let column_id = column.id;
    let count = column.posts.len();

    let on_moved = Callback::new(move |(post_number, to_column_id, new_position): (i64, i64, i32)| {
        on_post_moved.run((post_number, column_id, to_column_id, new_position));
    });

    let posts = if column.posts.is_empty() {
        view! {
            <div class="c-roadmap-column__empty">
                <p class="text-muted text-sm">{t("roadmap.column.empty")}</p>
            </div>
        }
        .into_any()
    } else {
        column
            .posts
            .into_iter()
            .enumerate()
            .map(|(index, post)| {
                view! {
                    <RoadmapPostCard
                        post=post
                        position=index as i32
                        is_last={index + 1 == count}
                        is_staff=is_staff
                        neighbours=neighbours
                        on_moved=on_moved
                        on_repositioned=on_post_repositioned
                        on_removed=on_post_removed
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="c-roadmap-column">
            <div class="c-roadmap-column__header">
                <h3 class="c-roadmap-column__title">{column.name}</h3>
            </div>
            <div class="c-roadmap-column__posts">{posts}</div>
        </div>
    }
}
