use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::content::{BackgroundKind, Slide};
use crate::core::{config, media, platform, timing};
use crate::t;

use super::engine::{
    next_index, plan_preloads, PreloadTask, PreloadTracker, SlidePhase, AUTO_ADVANCE_MS,
    TRANSITION_MS,
};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

const SCRIM_GRADIENT: &str =
    "background: linear-gradient(271.47deg, rgba(75, 38, 21, 0.28) 1.2%, rgba(75, 38, 21, 0.68) 86.38%)";

type SenderSlot = Rc<RefCell<Option<UnboundedSender<HeroEvent>>>>;

/// Auto-advancing carousel that reveals nothing until every slide's
/// background asset has settled. Remounted (via `key`) whenever the slide
/// list identity changes, which resets the gate.
#[component]
pub fn HeroSlider(slides: Vec<Slide>, base_url: String) -> Element {
    let tracker = use_signal(|| PreloadTracker::new(slides.len()));
    let current = use_signal(|| 0usize);
    let transitioning = use_signal(|| false);

    let sender_slot: SenderSlot = Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let tracker_ref = tracker.clone();
        let current_ref = current.clone();
        let transitioning_ref = transitioning.clone();
        let slides_for_loop = slides.clone();
        let base_for_loop = base_url.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<HeroEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut tracker_signal = tracker_ref.clone();
            let mut current_signal = current_ref.clone();
            let mut transitioning_signal = transitioning_ref.clone();
            let slides = slides_for_loop.clone();
            let base_url = base_for_loop.clone();

            async move {
                let slide_count = slides.len();

                // Fan out every preload up front; each settles independently
                // and reports back through the event channel.
                for task in plan_preloads(&slides, &base_url) {
                    queue_preload(sender_slot.clone(), task);
                }

                let mut rotating = false;
                while let Some(event) = rx.next().await {
                    match event {
                        HeroEvent::Settled { index } => {
                            let revealed = tracker_signal.with_mut(|t| t.settle(index));
                            if revealed && !rotating && slide_count > 0 {
                                rotating = true;
                                #[cfg(debug_assertions)]
                                println!("[hero] backgrounds settled; starting rotation");
                                queue_rotation(sender_slot.clone());
                            }
                        }
                        HeroEvent::Advance => {
                            current_signal.with_mut(|index| *index = next_index(*index, slide_count));
                        }
                        HeroEvent::Navigate { index } => {
                            transitioning_signal.set(true);
                            current_signal.set(index);
                            queue_transition_clear(sender_slot.clone());
                        }
                        HeroEvent::TransitionOver => {
                            transitioning_signal.set(false);
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let goto = move |index: usize| {
        coroutine.send(HeroEvent::Navigate { index });
    };

    let slide_count = slides.len();
    let gate = tracker();
    let unoptimized = config::serves_unoptimized_media(&base_url);

    if !gate.revealed() {
        let percent = gate.progress_percent();
        return rsx! {
            document::Link { rel: "stylesheet", href: HERO_CSS }
            div { class: "hero hero--loading",
                div { class: "hero__loading",
                    div { class: "hero__loading-title", {t!("hero-loading")} }
                    div { class: "hero__loading-meter",
                        div { class: "hero__loading-track",
                            div {
                                class: "hero__loading-fill",
                                style: "width: {percent}%",
                            }
                        }
                        p { class: "hero__loading-caption",
                            {t!("hero-loading-percent", percent = percent.to_string())}
                        }
                    }
                    div { class: "hero__loading-spinner",
                        div { class: "hero__loading-spinner-ring" }
                        div { class: "hero__loading-spinner-arc" }
                    }
                }
                div { class: "hero__glow",
                    div { class: "hero__glow-blob hero__glow-blob--accent" }
                    div { class: "hero__glow-blob hero__glow-blob--light" }
                }
            }
        };
    }

    let shown = if slide_count == 0 { 0 } else { current() % slide_count };
    let in_transition = transitioning();
    let copy_class = if in_transition {
        "hero__copy hero__copy--transitioning"
    } else {
        "hero__copy"
    };
    let figure_class = if in_transition {
        "hero__figure hero__figure--transitioning"
    } else {
        "hero__figure"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }
        div { class: "hero",
            div { class: "hero__layers",
                for (index, slide) in slides.iter().enumerate() {
                    {render_layer(slide, index, SlidePhase::classify(index, shown, slide_count), &base_url, unoptimized)}
                }
                div { class: "hero__scrim", style: SCRIM_GRADIENT }
            }

            div { class: "hero__dots",
                for index in 0..slide_count {
                    button {
                        key: "dot-{index}",
                        r#type: "button",
                        class: if index == shown { "hero__dot hero__dot--active" } else { "hero__dot" },
                        aria_label: t!("hero-goto-slide", number = (index + 1).to_string()),
                        onclick: move |_| goto(index),
                    }
                }
            }

            if let Some(active) = slides.get(shown) {
                div { class: "hero__content",
                    div { class: copy_class,
                        h1 { class: "hero__title", "{active.title}" }
                        p { class: "hero__description", "{active.description}" }
                        a {
                            class: "hero__cta",
                            href: "{active.button_link}",
                            rel: "noopener noreferrer",
                            target: "_blank",
                            "{active.button_text}"
                        }
                    }
                    if let Some(foreground) = active.foreground_image.as_ref() {
                        div { class: figure_class,
                            img {
                                class: "hero__figure-img",
                                alt: "{foreground.alt_text()}",
                                src: foreground.display_url(&base_url, unoptimized),
                            }
                        }
                    }
                }
            }

            div { class: "hero__bars",
                for index in 0..slide_count {
                    button {
                        key: "bar-{index}",
                        r#type: "button",
                        class: if index == shown { "hero__bar hero__bar--active" } else { "hero__bar" },
                        aria_label: t!("hero-goto-slide", number = (index + 1).to_string()),
                        onclick: move |_| goto(index),
                    }
                }
            }
        }
    }
}

fn render_layer(
    slide: &Slide,
    index: usize,
    phase: SlidePhase,
    base_url: &str,
    unoptimized: bool,
) -> Element {
    let class = format!("hero__layer {}", phase.css_class());

    match slide.background_type {
        BackgroundKind::Image => {
            let Some(image) = slide.background_image.as_ref() else {
                return rsx! {};
            };
            rsx! {
                div { key: "bg-{index}", class: "{class}",
                    img {
                        class: "hero__layer-img",
                        alt: "{image.alt_text()}",
                        src: image.display_url(base_url, unoptimized),
                    }
                }
            }
        }
        BackgroundKind::Video => {
            let Some(video) = slide.background_video.as_ref() else {
                return rsx! {};
            };
            let src = config::media_url(base_url, &video.url);
            rsx! {
                div { key: "bg-{index}", class: "{class}",
                    video {
                        class: "hero__layer-video",
                        autoplay: true,
                        r#loop: true,
                        muted: true,
                        playsinline: true,
                        source { src: "{src}", r#type: "{video.mime}" }
                    }
                }
            }
        }
    }
}

fn queue_preload(sender_slot: SenderSlot, task: PreloadTask) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            // Failures settle too; a broken asset must not hold the gate.
            let _ = media::preload(&task.url, task.kind.is_video()).await;
            if task.kind.gates_reveal() {
                let _ = sender.unbounded_send(HeroEvent::Settled {
                    index: task.slide_index,
                });
            }
        });
    }
}

fn queue_rotation(sender_slot: SenderSlot) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            loop {
                timing::sleep_ms(AUTO_ADVANCE_MS).await;
                if sender.unbounded_send(HeroEvent::Advance).is_err() {
                    // Presenter unmounted; stop the rotation timer.
                    break;
                }
            }
        });
    }
}

fn queue_transition_clear(sender_slot: SenderSlot) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(TRANSITION_MS).await;
            let _ = sender.unbounded_send(HeroEvent::TransitionOver);
        });
    }
}

#[derive(Debug, Clone)]
enum HeroEvent {
    /// One slide's background asset finished loading or failed.
    Settled { index: usize },
    /// Rotation timer tick.
    Advance,
    /// Manual navigation from the dot/bar controls.
    Navigate { index: usize },
    /// The 600ms animation window after a manual change elapsed.
    TransitionOver,
}
