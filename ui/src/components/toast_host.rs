use dioxus::prelude::*;

use crate::core::platform;
use crate::core::timing;
use crate::core::toast::{ToastKind, ToastStore, TOAST_DURATION_MS};
use crate::t;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Handle for raising toasts from anywhere under a [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    store: Signal<ToastStore>,
}

impl Toasts {
    pub fn show_success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    pub fn show_info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message.into());
    }

    /// Loading toasts stay until dismissed; the id is the caller's handle.
    pub fn show_loading(&self, message: impl Into<String>) -> u64 {
        let mut store = self.store;
        store.with_mut(|s| s.push(ToastKind::Loading, message.into()))
    }

    pub fn dismiss(&self, id: u64) {
        let mut store = self.store;
        store.with_mut(|s| s.dismiss(id));
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let mut store = self.store;
        let id = store.with_mut(|s| s.push(kind, message));
        if kind.auto_dismisses() {
            platform::spawn_future(async move {
                timing::sleep_ms(TOAST_DURATION_MS).await;
                store.with_mut(|s| s.dismiss(id));
            });
        }
    }
}

/// Access the toast handle. Falls back to a detached local store when no
/// provider exists (previews, tests) so callers never need to guard.
pub fn use_toasts() -> Toasts {
    let local = use_signal(ToastStore::default);
    try_use_context::<Toasts>().unwrap_or(Toasts { store: local })
}

/// Provides the toast context and renders the host stack above `children`.
/// Desktop toasts sit at the top inline-start corner; small screens get them
/// bottom-centered via the stylesheet's media query.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let store = use_signal(ToastStore::default);
    let toasts = use_context_provider(|| Toasts { store });

    let snapshot = store();

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }

        {children}

        if !snapshot.is_empty() {
            div { class: "toast-host",
                for toast in snapshot.toasts().iter().cloned() {
                    div {
                        key: "toast-{toast.id}",
                        class: format!("toast {}", toast.kind.css_class()),
                        span { class: "toast__message", "{toast.message}" }
                        button {
                            r#type: "button",
                            class: "toast__dismiss",
                            aria_label: t!("toast-dismiss"),
                            onclick: {
                                let id = toast.id;
                                move |_| toasts.dismiss(id)
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}
