use dioxus::prelude::*;

use crate::core::store;

#[component]
pub fn Home() -> Element {
    // Subscribe to the locale signal so copy refreshes on switch.
    let lang = store::use_lang();

    rsx! {
        section { class: "page page-home",
            div { style: "display:none", "{lang}" }
            h2 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__points",
                li { {crate::t!("home-point-advisory")} }
                li { {crate::t!("home-point-regions")} }
                li { {crate::t!("home-point-sectors")} }
            }
            p { class: "page-home__cta", {crate::t!("home-cta")} }
        }
    }
}
