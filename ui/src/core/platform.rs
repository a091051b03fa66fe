//! Platform glue for running fire-and-forget futures from UI code.
//!
//! Completions may outlive the component that queued them; callers send
//! results through channels and ignore delivery failures, so a future
//! finishing after teardown is a no-op.

use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    wasm_bindgen_futures::spawn_local(fut);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) {
    let _ = dioxus::prelude::spawn_forever(fut);
}
