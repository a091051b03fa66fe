//! Media preloading.
//!
//! In the browser this drives real image/video elements and resolves when the
//! asset settles, successfully or not. Outside the browser (server render,
//! native tests) assets settle immediately: readiness of pixels is a client
//! concern and must never block rendering the page shell.

/// Terminal state of one preload. Failures are swallowed by callers; a broken
/// asset renders as an absent element rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaOutcome {
    Loaded,
    Failed,
}

/// Load one asset to a settled state. `video` selects a metadata load on a
/// video element instead of an image load.
pub async fn preload(url: &str, video: bool) -> MediaOutcome {
    if video {
        imp::preload_video(url).await
    } else {
        imp::preload_image(url).await
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures_channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::MediaOutcome;

    type SettleSlot = Rc<RefCell<Option<oneshot::Sender<MediaOutcome>>>>;

    fn settle_callback(slot: &SettleSlot, outcome: MediaOutcome) -> Closure<dyn FnMut()> {
        let slot = slot.clone();
        Closure::<dyn FnMut()>::new(move || {
            // Only the first of onload/onerror wins; the slot is consumed.
            if let Some(sender) = slot.borrow_mut().take() {
                let _ = sender.send(outcome);
            }
        })
    }

    pub async fn preload_image(url: &str) -> MediaOutcome {
        let Ok(image) = web_sys::HtmlImageElement::new() else {
            return MediaOutcome::Failed;
        };

        let (sender, receiver) = oneshot::channel();
        let slot: SettleSlot = Rc::new(RefCell::new(Some(sender)));
        let on_load = settle_callback(&slot, MediaOutcome::Loaded);
        let on_error = settle_callback(&slot, MediaOutcome::Failed);

        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        image.set_src(url);

        receiver.await.unwrap_or(MediaOutcome::Failed)
    }

    pub async fn preload_video(url: &str) -> MediaOutcome {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return MediaOutcome::Failed;
        };
        let Ok(video) = document
            .create_element("video")
            .map(|el| el.unchecked_into::<web_sys::HtmlVideoElement>())
        else {
            return MediaOutcome::Failed;
        };

        let (sender, receiver) = oneshot::channel();
        let slot: SettleSlot = Rc::new(RefCell::new(Some(sender)));
        let on_loaded = settle_callback(&slot, MediaOutcome::Loaded);
        let on_error = settle_callback(&slot, MediaOutcome::Failed);

        video.set_preload("auto");
        video.set_onloadeddata(Some(on_loaded.as_ref().unchecked_ref()));
        video.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        video.set_src(url);
        video.load();

        receiver.await.unwrap_or(MediaOutcome::Failed)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::MediaOutcome;

    pub async fn preload_image(_url: &str) -> MediaOutcome {
        MediaOutcome::Loaded
    }

    pub async fn preload_video(_url: &str) -> MediaOutcome {
        MediaOutcome::Loaded
    }
}
