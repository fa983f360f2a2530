//! Modal Component
//!
//! Generic titled overlay. Backdrop click, the close button and Escape
//! all close it; clicks inside the panel do not reach the backdrop.

use leptos::prelude::*;

use super::hooks::{use_modal_keys, use_scroll_lock};
use crate::keys::{dialog_key, ModalKey};

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    use_scroll_lock(open);
    use_modal_keys(
        open,
        dialog_key,
        Callback::new(move |key: ModalKey| {
            if key == ModalKey::Close {
                on_close.run(());
            }
        }),
    );

    view! {
        <Show when=move || open.get()>
            <div class="ui-modal-overlay" on:click=move |_| on_close.run(())>
                <div class="ui-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="ui-modal-header">
                        <h3>{move || title.get()}</h3>
                        <button
                            class="ui-btn ui-btn-icon"
                            aria-label="Đóng"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="ui-modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
