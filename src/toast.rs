//! Toast Queue
//!
//! App-wide notifications. The queue itself is plain data; the context
//! schedules auto-dismiss.

/// Milliseconds a toast stays visible
pub const TOAST_DURATION_MS: u32 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
            Self::Warning => "toast toast-warning",
            Self::Info => "toast toast-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "!",
            Self::Info => "i",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its id
    pub fn push(&mut self, kind: ToastKind, title: Option<String>, message: String) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, title, message });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|toast| toast.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}
