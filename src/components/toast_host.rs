//! Toast Host Component
//!
//! Renders the toast queue from the app context.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || ctx.toasts.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status">
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <div class="toast-content">
                                {toast.title.map(|t| view! { <p class="toast-title">{t}</p> })}
                                <p class="toast-message">{toast.message}</p>
                            </div>
                            <button class="toast-close" aria-label="Đóng" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
