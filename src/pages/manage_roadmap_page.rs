//! Manage Roadmap Page
//!
//! Admin CRUD over roadmap columns: list, create, edit, delete and reorder.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ColumnFormFields, DeleteConfirmButton, Message, MessageKind, Modal};
use crate::context::{use_app_context, AppContext};
use crate::i18n::{t, t_with};
use crate::models::RoadmapColumn;
use crate::state::{
    create_column, delete_column, load_columns, move_column, save_column, ManageColumnsState, MoveDirection,
};

/// One row of the column list
#[component]
fn ColumnRow(
    column: RoadmapColumn,
    can_move_up: bool,
    can_move_down: bool,
    on_edit: Callback<RoadmapColumn>,
    on_delete: Callback<i64>,
    on_move: Callback<(i64, MoveDirection)>,
) -> impl IntoView {
    let id = column.id;
    let (visibility_class, visibility_label) = if column.is_visible_to_public {
        ("c-roadmap-column-admin__visibility public", t("admin.roadmap.public"))
    } else {
        ("c-roadmap-column-admin__visibility private", t("admin.roadmap.private"))
    };
    let position = t_with("admin.roadmap.position", &[("position", &column.position.to_string())]);
    let confirm_text = t_with("admin.roadmap.confirm.delete", &[("name", &column.name)]);
    let name = column.name.clone();

    view! {
        <div class="c-roadmap-column-admin">
            <div class="c-roadmap-column-admin__header">
                <div class="c-roadmap-column-admin__info">
                    <h3 class="c-roadmap-column-admin__name">{name}</h3>
                    <div class="c-roadmap-column-admin__meta">
                        <span class="c-roadmap-column-admin__position">{position}</span>
                        <span class=visibility_class>{visibility_label}</span>
                    </div>
                </div>
                <div class="c-roadmap-column-admin__actions">
                    <button
                        class="c-button c-button--secondary c-button--small"
                        title=t("admin.roadmap.move.up")
                        disabled=!can_move_up
                        on:click=move |_| on_move.run((id, MoveDirection::Up))
                    >
                        "↑"
                    </button>
                    <button
                        class="c-button c-button--secondary c-button--small"
                        title=t("admin.roadmap.move.down")
                        disabled=!can_move_down
                        on:click=move |_| on_move.run((id, MoveDirection::Down))
                    >
                        "↓"
                    </button>
                    <button
                        class="c-button c-button--secondary c-button--small"
                        on:click=move |_| on_edit.run(column.clone())
                    >
                        {t("admin.roadmap.edit")}
                    </button>
                    <DeleteConfirmButton
                        confirm_text=confirm_text
                        on_confirm=Callback::new(move |_| on_delete.run(id))
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ManageRoadmapPage() -> impl IntoView {
    let ctx = StoredValue::new(use_app_context());
    let state = RwSignal::new(ManageColumnsState::default());
    let api = move || ctx.with_value(AppContext::roadmap_api);

    // Load columns on mount
    Effect::new(move |_| {
        spawn_local(async move {
            load_columns(&api(), &state).await;
        });
    });

    // Narrow views so typing in a form does not rebuild the list
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let columns = Memo::new(move |_| state.with(|s| s.columns.clone()));
    let show_create = Memo::new(move |_| state.with(|s| s.show_create));
    let editing_id = Memo::new(move |_| state.with(|s| s.editing.as_ref().map(|e| e.column_id)));

    let on_edit = Callback::new(move |column: RoadmapColumn| state.update(|s| s.start_edit(&column)));
    let on_delete = Callback::new(move |id: i64| {
        spawn_local(async move {
            delete_column(&api(), &state, id).await;
        });
    });
    let on_move = Callback::new(move |(id, direction): (i64, MoveDirection)| {
        spawn_local(async move {
            move_column(&api(), &state, id, direction).await;
        });
    });
    let close_create = Callback::new(move |_| state.update(ManageColumnsState::close_create));
    let close_edit = Callback::new(move |_| state.update(ManageColumnsState::cancel_edit));

    let on_create = move |_| {
        spawn_local(async move {
            create_column(&api(), &state).await;
        });
    };
    let on_save = move |_| {
        spawn_local(async move {
            save_column(&api(), &state).await;
        });
    };

    let column_list = move || {
        let columns = columns.get();
        if columns.is_empty() {
            return view! {
                <div class="text-center p-8 text-muted">{t("admin.roadmap.empty")}</div>
            }
            .into_any();
        }
        let count = columns.len();
        view! {
            <div class="c-roadmap-columns-admin">
                {columns
                    .into_iter()
                    .enumerate()
                    .map(|(index, column)| view! {
                        <ColumnRow
                            column=column
                            can_move_up={index > 0}
                            can_move_down={index + 1 < count}
                            on_edit=on_edit
                            on_delete=on_delete
                            on_move=on_move
                        />
                    })
                    .collect_view()}
            </div>
        }
        .into_any()
    };

    let create_modal = move || {
        show_create.get().then(|| view! {
            <Modal title=t("admin.roadmap.create.title") on_close=close_create>
                <div class="c-modal-window__content">
                    <ColumnFormFields
                        name=Signal::derive(move || state.with(|s| s.new_column.name.clone()))
                        on_name=Callback::new(move |name: String| state.update(|s| s.new_column.name = name))
                        is_public=Signal::derive(move || state.with(|s| s.new_column.is_public))
                        on_public=Callback::new(move |public: bool| state.update(|s| s.new_column.is_public = public))
                        show_help=true
                    />
                </div>
                <div class="c-modal-window__footer">
                    <button class="c-button c-button--tertiary" on:click=move |_| close_create.run(())>
                        {t("admin.roadmap.cancel")}
                    </button>
                    <button
                        class="c-button c-button--primary"
                        disabled=move || !state.with(|s| s.new_column.can_submit())
                        on:click=on_create
                    >
                        {t("admin.roadmap.create.button")}
                    </button>
                </div>
            </Modal>
        })
    };

    let edit_modal = move || {
        editing_id.get().map(|_| view! {
            <Modal title=t("admin.roadmap.edit.title") on_close=close_edit>
                <div class="c-modal-window__content">
                    <ColumnFormFields
                        name=Signal::derive(move || {
                            state.with(|s| s.editing.as_ref().map(|e| e.form.name.clone()).unwrap_or_default())
                        })
                        on_name=Callback::new(move |name: String| state.update(|s| {
                            if let Some(editing) = s.editing.as_mut() {
                                editing.form.name = name;
                            }
                        }))
                        is_public=Signal::derive(move || {
                            state.with(|s| s.editing.as_ref().map(|e| e.form.is_public).unwrap_or(true))
                        })
                        on_public=Callback::new(move |public: bool| state.update(|s| {
                            if let Some(editing) = s.editing.as_mut() {
                                editing.form.is_public = public;
                            }
                        }))
                    />
                </div>
                <div class="c-modal-window__footer">
                    <button class="c-button c-button--tertiary" on:click=move |_| close_edit.run(())>
                        {t("admin.roadmap.cancel")}
                    </button>
                    <button
                        class="c-button c-button--primary"
                        disabled=move || !state.with(|s| s.editing.as_ref().is_some_and(|e| e.form.can_submit()))
                        on:click=on_save
                    >
                        {t("admin.roadmap.save")}
                    </button>
                </div>
            </Modal>
        })
    };

    view! {
        <div id="p-admin-roadmap" class="page p-admin-roadmap">
            <div class="p-admin-roadmap__header mb-6">
                <h1 class="text-2xl font-bold">{t("admin.roadmap.title")}</h1>
                <p class="text-muted mt-2">{t("admin.roadmap.description")}</p>
            </div>

            {move || if loading.get() {
                view! {
                    <div class="text-center p-8">{t("admin.roadmap.loading")}</div>
                }.into_any()
            } else {
                view! {
                    {move || error.get().map(|text| view! { <Message kind=MessageKind::Error text=text /> })}

                    <div class="p-admin-roadmap__actions mb-6">
                        <button
                            class="c-button c-button--primary"
                            on:click=move |_| state.update(ManageColumnsState::open_create)
                        >
                            {t("admin.roadmap.create")}
                        </button>
                    </div>

                    <div class="p-admin-roadmap__columns">{column_list}</div>

                    {create_modal}
                    {edit_modal}
                }.into_any()
            }}
        </div>
    }
}
