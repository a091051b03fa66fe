use dioxus::prelude::*;

use crate::core::store;
use crate::t;

#[component]
pub fn NotFound() -> Element {
    let lang = store::use_lang();

    rsx! {
        section { class: "page page-not-found",
            h2 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            a { class: "page-not-found__home", href: "/{lang}", {t!("not-found-home")} }
        }
    }
}
