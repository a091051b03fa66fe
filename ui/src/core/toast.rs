//! Toast notification state. The rendering host and the context handle live
//! in `components/toast_host.rs`; this module is the pure store.

/// How long a non-loading toast stays on screen.
pub const TOAST_DURATION_MS: u64 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Loading,
}

impl ToastKind {
    /// Modifier class for the toast card.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Info => "toast--info",
            ToastKind::Loading => "toast--loading",
        }
    }

    /// Loading toasts stay until dismissed explicitly.
    pub fn auto_dismisses(self) -> bool {
        !matches!(self, ToastKind::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered toast list with unique ids. Single-threaded event-loop semantics;
/// mutation happens through the owning signal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStore {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStore {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove one toast. Unknown ids are a no-op (it may have auto-dismissed).
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
