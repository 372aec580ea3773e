//! Delete Confirm Button Component
//!
//! Inline delete confirmation naming what will be deleted.

use leptos::prelude::*;

use crate::i18n::t;

/// Inline delete confirmation button
///
/// Shows the delete button initially. When clicked, shows the confirmation
/// text with ✓/✗ buttons; only ✓ runs `on_confirm`.
///
/// # Arguments
/// * `confirm_text` - Question shown while confirming, should name the target
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] confirm_text: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="c-button c-button--danger c-button--small"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {t("admin.roadmap.delete")}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{confirm_text.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
