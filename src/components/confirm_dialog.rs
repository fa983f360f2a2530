//! Confirm Dialog Component
//!
//! Yes/no question over a dimmed backdrop. Backdrop click and Escape cancel.

use leptos::prelude::*;

use super::hooks::{use_modal_keys, use_scroll_lock};
use crate::keys::{dialog_key, ModalKey};

#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into, default = "Xác nhận".to_string())] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Xác nhận".to_string())] confirm_label: String,
    #[prop(into, default = "Hủy".to_string())] cancel_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    use_scroll_lock(open);
    use_modal_keys(
        open,
        dialog_key,
        Callback::new(move |key: ModalKey| {
            if key == ModalKey::Close {
                on_cancel.run(());
            }
        }),
    );

    view! {
        <Show when=move || open.get()>
            <div class="confirm-dialog">
                <div
                    class="confirm-dialog-backdrop"
                    aria-hidden="true"
                    on:click=move |_| on_cancel.run(())
                ></div>
                <div class="confirm-dialog-panel" role="dialog" aria-modal="true">
                    <div class="confirm-dialog-header">
                        <h3>{title.clone()}</h3>
                    </div>
                    <div class="confirm-dialog-body">
                        <p>{message.clone()}</p>
                    </div>
                    <div class="confirm-dialog-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            {cancel_label.clone()}
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
