//! Column Form Fields
//!
//! Name input and visibility toggle shared by the create and edit modals.

use leptos::prelude::*;

use crate::components::VisibilityToggle;
use crate::i18n::t;

#[component]
pub fn ColumnFormFields(
    #[prop(into)] name: Signal<String>,
    on_name: Callback<String>,
    #[prop(into)] is_public: Signal<bool>,
    on_public: Callback<bool>,
    #[prop(optional)] show_help: bool,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="editor-label">{t("admin.roadmap.name.label")}</label>
            <input
                type="text"
                class="c-input"
                placeholder=t("admin.roadmap.name.placeholder")
                prop:value=move || name.get()
                on:input=move |ev| on_name.run(event_target_value(&ev))
            />
        </div>
        <div class="mb-4">
            <VisibilityToggle label=t("admin.roadmap.public.label") active=is_public on_toggle=on_public />
            {show_help.then(|| view! {
                <p class="text-sm text-muted mt-1">{t("admin.roadmap.public.help")}</p>
            })}
        </div>
    }
}
