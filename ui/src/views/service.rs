use dioxus::prelude::*;

use crate::components::services::service_label;
use crate::t;

use super::NotFound;

/// Practice-area page behind the header dropdown. Editorial content for
/// these pages is still being produced; known slugs render a localized
/// shell, unknown slugs get the not-found treatment.
#[component]
pub fn ServicePage(slug: String) -> Element {
    let Some(label) = service_label(&slug) else {
        return rsx! { NotFound {} };
    };

    rsx! {
        section { class: "page page-service",
            h2 { "{label}" }
            p { class: "page-service__pending", {t!("service-page-pending")} }
        }
    }
}
