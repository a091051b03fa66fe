use dioxus::prelude::*;

use crate::core::content::HeroDocument;
use crate::core::store::Lang;
use crate::core::{api, config};
use crate::t;

use super::view::HeroSlider;

/// Hero single-type endpoint with every slide relation populated.
const HERO_ENDPOINT: &str = "/herobanner?populate[slides][populate][0]=backgroundImage&populate[slides][populate][1]=backgroundVideo&populate[slides][populate][2]=foregroundImage";

/// Fetches the hero document for the active locale and mounts the slider.
/// A failed fetch or an empty slide list falls back to the static hero so the
/// page never opens on a blank band.
#[component]
pub fn HeroBanner() -> Element {
    let lang_ctx: Option<Signal<Lang>> = try_use_context::<Signal<Lang>>();
    let lang = lang_ctx.as_ref().map(|s| s()).unwrap_or_default();

    // The locale signal is read inside the closure so a switch refetches the
    // localized document.
    let hero = use_resource(move || {
        let lang = lang_ctx.as_ref().map(|s| s()).unwrap_or_default();
        async move {
            api::client()
                .fetch::<HeroDocument>(HERO_ENDPOINT, Some(lang))
                .await
        }
    });

    let rendered = match &*hero.read() {
        Some(Ok(document)) if !document.slides.is_empty() => rsx! {
            HeroSlider {
                key: "{lang}-{document.document_id}",
                slides: document.slides.clone(),
                base_url: config::cms_base_url(),
            }
        },
        Some(_) => fallback_hero(),
        None => rsx! {
            div { class: "hero hero--pending" }
        },
    };
    rendered
}

/// Static hero shown when the CMS is unreachable or has no published slides.
fn fallback_hero() -> Element {
    rsx! {
        div { class: "hero hero--fallback",
            div { class: "hero__scrim" }
            div { class: "hero__content hero__content--centered",
                h1 { class: "hero__title", {t!("hero-fallback-title")} }
                p { class: "hero__kicker", {t!("hero-fallback-kicker")} }
                p { class: "hero__description", {t!("hero-fallback-body")} }
                button { r#type: "button", class: "hero__cta", {t!("hero-fallback-cta")} }
            }
        }
    }
}
