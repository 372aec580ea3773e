//! Post Roadmap Panel
//!
//! Staff-only block on a post page showing where the post sits on the
//! roadmap, with a button that opens the assignment modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::AssignToRoadmapModal;
use crate::context::{use_app_context, AppContext};
use crate::i18n::{t, t_with};
use crate::models::Post;
use crate::services::{get_post, RoadmapApi};

#[component]
pub fn PostRoadmapPanel(post_number: i64) -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let is_staff = ctx.with_value(AppContext::is_staff);

    let (post, set_post) = signal::<Option<Post>>(None);
    let (current_column, set_current_column) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (is_open, set_is_open) = signal(false);

    // Load post once
    Effect::new(move |_| {
        if !is_staff {
            return;
        }
        spawn_local(async move {
            let client = ctx.with_value(AppContext::api_client);
            match get_post(&client, post_number).await {
                Ok(loaded) => set_post.set(Some(loaded)),
                Err(e) => log::error!("[POST] failed to load post #{}: {}", post_number, e),
            }
        });
    });

    // Current column, refreshed after every assign/remove
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if !is_staff {
            return;
        }
        spawn_local(async move {
            log::debug!("[POST] loading roadmap placement for #{}, trigger={}", post_number, trigger);
            let api = ctx.with_value(AppContext::roadmap_api);
            match api.get_roadmap().await {
                Ok(data) => set_current_column.set(data.column_of_post(post_number).map(|c| c.name.clone())),
                Err(e) => log::warn!("[POST] failed to load roadmap for #{}: {}", post_number, e),
            }
        });
    });

    let on_close = Callback::new(move |_| set_is_open.set(false));
    let on_assigned = Callback::new(move |_| set_reload_trigger.update(|n| *n += 1));

    move || {
        post.get().map(|post| {
            view! {
                <div class="c-post-roadmap-panel">
                    <span class="text-sm text-muted">
                        {move || match current_column.get() {
                            Some(column) => t_with("roadmap.panel.current", &[("column", &column)]),
                            None => t("roadmap.panel.none"),
                        }}
                    </span>
                    <button class="c-button c-button--secondary c-button--small" on:click=move |_| set_is_open.set(true)>
                        {t("roadmap.modal.open")}
                    </button>
                    <AssignToRoadmapModal
                        post=post
                        is_open=is_open
                        on_close=on_close
                        on_assigned=on_assigned
                    />
                </div>
            }
        })
    }
}
