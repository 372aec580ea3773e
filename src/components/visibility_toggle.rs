//! Visibility Toggle Component
//!
//! Public/private switch for roadmap columns.

use leptos::prelude::*;

/// Labelled on/off switch
#[component]
pub fn VisibilityToggle(
    #[prop(into)] label: String,
    #[prop(into)] active: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="c-toggle">
            <input
                type="checkbox"
                class="c-toggle__input"
                prop:checked=move || active.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class=move || if active.get() { "c-toggle__switch active" } else { "c-toggle__switch" }></span>
            <span class="c-toggle__label">{label}</span>
        </label>
    }
}
