//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::UserProfile;
use crate::scroll_lock::ScrollLockDepth;
use crate::session::{self, Session};
use crate::toast::{ToastKind, ToastQueue, TOAST_DURATION_MS};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persisted login - read
    pub session: ReadSignal<Session>,
    /// Persisted login - write
    set_session: WriteSignal<Session>,
    /// Visible notifications - read
    pub toasts: ReadSignal<ToastQueue>,
    /// Visible notifications - write
    set_toasts: WriteSignal<ToastQueue>,
    /// Open modals holding the page scroll lock
    scroll_lock: StoredValue<ScrollLockDepth>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Session>, WriteSignal<Session>),
        toasts: (ReadSignal<ToastQueue>, WriteSignal<ToastQueue>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            scroll_lock: StoredValue::new(ScrollLockDepth::default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.with(|s| s.user.clone())
    }

    /// Merge a returned profile into the session and persist it
    pub fn update_user(&self, user: UserProfile) {
        session::persist_user(&user);
        self.set_session.update(|s| {
            let merged = match s.user.take() {
                Some(current) => UserProfile {
                    user_id: user.user_id.or(current.user_id),
                    email: user.email.or(current.email),
                    first_name: user.first_name.or(current.first_name),
                    last_name: user.last_name.or(current.last_name),
                    phone_number: user.phone_number.or(current.phone_number),
                    profile_picture: user.profile_picture.or(current.profile_picture),
                },
                None => user,
            };
            s.user = Some(merged);
        });
    }

    // ========================
    // Scroll Lock
    // ========================

    /// Take a scroll lock lease; the first lease hides body overflow
    pub fn lock_scroll(&self) {
        let lock_now = self.scroll_lock.try_update_value(|lock| lock.acquire()).unwrap_or(false);
        if lock_now {
            set_body_overflow(Some("hidden"));
        }
    }

    /// Return a lease; the last one restores body overflow
    pub fn unlock_scroll(&self) {
        let unlock_now = self.scroll_lock.try_update_value(|lock| lock.release()).unwrap_or(false);
        if unlock_now {
            set_body_overflow(None);
        }
    }

    // ========================
    // Toasts
    // ========================

    /// Show a toast and dismiss it after a short delay
    pub fn toast(&self, kind: ToastKind, title: Option<&str>, message: impl Into<String>) {
        let message = message.into();
        log::debug!("[TOAST] {:?}: {}", kind, message);
        let mut id = 0;
        self.set_toasts.update(|queue| {
            id = queue.push(kind, title.map(str::to_string), message);
        });
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.try_update(|queue| queue.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.toast(ToastKind::Success, None, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.toast(ToastKind::Error, None, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|queue| queue.dismiss(id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if result.is_err() {
        log::warn!("[SCROLL] Failed to update body overflow");
    }
}
