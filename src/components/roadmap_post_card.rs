//! Roadmap Post Card Component
//!
//! One post summary on the board. Clicking the card opens the post; staff get
//! remove and move controls that do not trigger the card click.

use leptos::prelude::*;

use crate::display::{post_url, truncate_description, visible_tags};
use crate::i18n::t;
use crate::models::{Post, PostStatus};

#[component]
pub fn RoadmapPostCard(
    post: Post,
    /// Index of the card within its column
    position: i32,
    /// Whether this is the last card of its column
    is_last: bool,
    is_staff: bool,
    /// Columns left and right of this card's column
    neighbours: (Option<i64>, Option<i64>),
    /// (post number, target column id, new position)
    on_moved: Callback<(i64, i64, i32)>,
    /// (post number, new position within the same column)
    on_repositioned: Callback<(i64, i32)>,
    on_removed: Callback<i64>,
) -> impl IntoView {
    let number = post.number;
    let url = post_url(&post);
    let status = PostStatus::get(&post.status);
    let description = truncate_description(&post.description);
    let (tags, more_tags) = visible_tags(&post.tags);
    let tags = tags.to_vec();

    let card_class = if is_staff {
        "c-roadmap-post-card c-roadmap-post-card--draggable"
    } else {
        "c-roadmap-post-card"
    };

    let open_post = move |_| {
        if let Err(e) = window().location().set_href(&url) {
            log::warn!("[ROADMAP] failed to open {}: {:?}", url, e);
        }
    };

    let staff_controls = is_staff.then(|| {
        let (previous, next) = neighbours;
        view! {
            <div class="c-roadmap-post-card__controls">
                {previous.map(|to| view! {
                    <button class="c-roadmap-post-card__move" title=t("roadmap.card.move.previous") on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_moved.run((number, to, 0));
                    }>"←"</button>
                })}
                {(position > 0).then(|| view! {
                    <button class="c-roadmap-post-card__move" title=t("roadmap.card.move.up") on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_repositioned.run((number, position - 1));
                    }>"↑"</button>
                })}
                {(!is_last).then(|| view! {
                    <button class="c-roadmap-post-card__move" title=t("roadmap.card.move.down") on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_repositioned.run((number, position + 1));
                    }>"↓"</button>
                })}
                {next.map(|to| view! {
                    <button class="c-roadmap-post-card__move" title=t("roadmap.card.move.next") on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_moved.run((number, to, 0));
                    }>"→"</button>
                })}
                <button
                    class="c-roadmap-post-card__remove"
                    title=t("roadmap.card.remove")
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_removed.run(number);
                    }
                >
                    "×"
                </button>
            </div>
        }
    });

    view! {
        <div class=card_class on:click=open_post>
            <div class="c-roadmap-post-card__header">
                <h4 class="c-roadmap-post-card__title">{post.title}</h4>
                {staff_controls}
            </div>

            <div class="c-roadmap-post-card__content">
                <p class="c-roadmap-post-card__description">{description}</p>
            </div>

            <div class="c-roadmap-post-card__footer">
                <div class="c-roadmap-post-card__meta">
                    <span class="c-vote-counter">{post.votes_count}</span>
                    <span class=format!("c-status {}", status.css_class())>{status.label()}</span>
                </div>

                {(!tags.is_empty()).then(|| view! {
                    <div class="c-roadmap-post-card__tags">
                        {tags.into_iter().map(|tag| view! { <span class="c-tag">{tag}</span> }).collect_view()}
                        {more_tags.map(|more| view! { <span class="c-roadmap-post-card__more-tags">{more}</span> })}
                    </div>
                })}
            </div>
        </div>
    }
}
