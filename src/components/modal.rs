//! Modal Window Component
//!
//! Backdrop + small window with a titled header. Callers supply content and footer.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="c-modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="c-modal-window c-modal-window--small"
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            >
                <div class="c-modal-window__header">
                    <span class="c-modal-window__title">{title}</span>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind {
    Error,
    Warning,
}

/// Inline status message
#[component]
pub fn Message(kind: MessageKind, #[prop(into)] text: String) -> impl IntoView {
    let class = match kind {
        MessageKind::Error => "c-message c-message--error",
        MessageKind::Warning => "c-message c-message--warning",
    };
    view! { <div class=class>{text}</div> }
}
