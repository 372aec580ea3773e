//! Roadmap Page
//!
//! Public board. Read-only for visitors; staff can move and remove posts.
//! Every change reloads the whole board from the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Message, MessageKind, RoadmapColumn};
use crate::context::{use_app_context, AppContext};
use crate::display::neighbour_columns;
use crate::i18n::t;
use crate::state::{load_board, move_post, remove_post, reposition_post, BoardState, BoardView};

#[component]
pub fn RoadmapPage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let is_staff = ctx.with_value(AppContext::is_staff);
    let state = RwSignal::new(BoardState::default());

    // Load board on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.with_value(AppContext::roadmap_api);
            load_board(&api, &state).await;
        });
    });

    let on_post_moved = Callback::new(move |(post_number, from, to, position): (i64, i64, i64, i32)| {
        spawn_local(async move {
            let api = ctx.with_value(AppContext::roadmap_api);
            move_post(&api, &state, post_number, from, to, position).await;
        });
    });

    let on_post_repositioned = Callback::new(move |(post_number, position): (i64, i32)| {
        spawn_local(async move {
            let api = ctx.with_value(AppContext::roadmap_api);
            reposition_post(&api, &state, post_number, position).await;
        });
    });

    let on_post_removed = Callback::new(move |post_number: i64| {
        spawn_local(async move {
            let api = ctx.with_value(AppContext::roadmap_api);
            remove_post(&api, &state, post_number).await;
        });
    });

    move || {
        let snapshot = state.get();
        match snapshot.view() {
            BoardView::Loading => view! {
                <div class="c-loader">{t("roadmap.loading")}</div>
            }
            .into_any(),
            BoardView::Error(text) => view! {
                <Message kind=MessageKind::Error text=text />
            }
            .into_any(),
            BoardView::Empty => view! {
                <div class="text-center p-8">
                    <Message kind=MessageKind::Warning text=t("roadmap.empty") />
                </div>
            }
            .into_any(),
            BoardView::Ready(data) => {
                let columns = data
                    .columns
                    .iter()
                    .map(|column| {
                        let neighbours = neighbour_columns(&data.columns, column.id);
                        view! {
                            <RoadmapColumn
                                column=column.clone()
                                is_staff=is_staff
                                neighbours=neighbours
                                on_post_moved=on_post_moved
                                on_post_repositioned=on_post_repositioned
                                on_post_removed=on_post_removed
                            />
                        }
                    })
                    .collect_view();
                view! {
                    <div id="p-roadmap" class="page">
                        <div class="container">
                            <div class="p-roadmap__header mb-6">
                                <h1 class="text-2xl font-bold">{t("roadmap.title")}</h1>
                                <p class="text-muted mt-2">{t("roadmap.description")}</p>
                            </div>
                            <div class="p-roadmap__columns">
                                <div class="c-roadmap-columns">{columns}</div>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    }
}
