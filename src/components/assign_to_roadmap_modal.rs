//! Assign To Roadmap Modal
//!
//! Lets staff place a post into a roadmap column or take it off the roadmap.
//! Columns are fetched every time the modal opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Message, MessageKind, Modal};
use crate::context::{use_app_context, AppContext};
use crate::i18n::{t, t_with};
use crate::models::Post;
use crate::state::{assign_post, open_assign_modal, unassign_post, AssignState};

#[component]
pub fn AssignToRoadmapModal(
    post: Post,
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    /// Run after a successful assign or remove, before closing
    #[prop(optional)]
    on_assigned: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let state = RwSignal::new(AssignState::default());
    let post_number = post.number;
    let post_info = StoredValue::new(t_with("roadmap.modal.post.info", &[("title", &post.title)]));

    Effect::new(move |_| {
        if is_open.get() {
            spawn_local(async move {
                let api = ctx.with_value(AppContext::roadmap_api);
                open_assign_modal(&api, &state).await;
            });
        }
    });

    let finish = move || {
        if let Some(on_assigned) = on_assigned {
            on_assigned.run(());
        }
        on_close.run(());
    };

    let on_assign = move |_| {
        spawn_local(async move {
            let api = ctx.with_value(AppContext::roadmap_api);
            if assign_post(&api, &state, post_number).await {
                finish();
            }
        });
    };

    let on_remove = move |_| {
        spawn_local(async move {
            let api = ctx.with_value(AppContext::roadmap_api);
            if unassign_post(&api, &state, post_number).await {
                finish();
            }
        });
    };

    let columns = Memo::new(move |_| state.with(|s| s.columns.clone()));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <Show when=move || is_open.get()>
            <Modal title=t("roadmap.modal.title") on_close=on_close>
                <div class="c-modal-window__content">
                    {move || error.get().map(|text| view! { <Message kind=MessageKind::Error text=text /> })}
                    <div class="mb-4">
                        <p class="text-sm text-muted mb-2">{t("roadmap.modal.description")}</p>
                        <label class="editor-label">{t("roadmap.modal.column.label")}</label>
                        <select
                            class="c-select"
                            prop:value=move || state.with(|s| s.selected_column_id.map(|id| id.to_string()).unwrap_or_default())
                            on:change=move |ev| state.update(|s| s.select(&event_target_value(&ev)))
                        >
                            <option value="">{t("roadmap.modal.column.placeholder")}</option>
                            <For
                                each=move || columns.get()
                                key=|column| column.id
                                children=move |column| view! {
                                    <option value=column.id.to_string()>{column.name}</option>
                                }
                            />
                        </select>
                    </div>
                    <div class="text-sm text-muted">{move || post_info.get_value()}</div>
                </div>
                <div class="c-modal-window__footer">
                    <button class="c-button c-button--tertiary" on:click=move |_| on_close.run(())>
                        {t("roadmap.modal.cancel")}
                    </button>
                    <button
                        class="c-button c-button--danger mr-2"
                        disabled=move || !state.with(|s| s.can_remove())
                        on:click=on_remove
                    >
                        {t("roadmap.modal.remove")}
                    </button>
                    <button
                        class="c-button c-button--primary"
                        disabled=move || !state.with(|s| s.can_assign())
                        on:click=on_assign
                    >
                        {t("roadmap.modal.assign")}
                    </button>
                </div>
            </Modal>
        </Show>
    }
}
