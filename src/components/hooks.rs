//! Modal Hooks
//!
//! Scroll lock leases and window keyboard bindings shared by every modal.

use leptos::ev;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::keys::ModalKey;

/// Hold a scroll lock lease while `open` is true and release it on unmount
pub fn use_scroll_lock(open: Signal<bool>) {
    let ctx = use_app_context();
    let held = StoredValue::new(false);

    Effect::new(move |_| {
        let want = open.get();
        let has = held.get_value();
        if want && !has {
            ctx.lock_scroll();
            held.set_value(true);
        } else if !want && has {
            ctx.unlock_scroll();
            held.set_value(false);
        }
    });

    on_cleanup(move || {
        if held.try_get_value().unwrap_or(false) {
            ctx.unlock_scroll();
        }
    });
}

/// Listen for `keymap` keys on the window while `open` is true
pub fn use_modal_keys(
    open: Signal<bool>,
    keymap: fn(&str) -> Option<ModalKey>,
    on_key: Callback<ModalKey>,
) {
    let listener = StoredValue::new(None::<WindowListenerHandle>);

    Effect::new(move |_| {
        let is_open = open.get();
        if let Some(handle) = listener.try_update_value(|slot| slot.take()).flatten() {
            handle.remove();
        }
        if !is_open {
            return;
        }
        let handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
            if let Some(key) = keymap(&ev.key()) {
                ev.prevent_default();
                on_key.run(key);
            }
        });
        listener.set_value(Some(handle));
    });

    on_cleanup(move || {
        if let Some(handle) = listener.try_update_value(|slot| slot.take()).flatten() {
            handle.remove();
        }
    });
}
