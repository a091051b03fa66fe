use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::services::{service_label, SERVICES};
use crate::components::switchers::{LanguageSwitcher, ThemeSwitcher};
use crate::core::store::Lang;
use crate::t;

// Header stylesheet (shared with the mobile menu)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know the platform's `Route` enum.
///
/// Each closure receives the localized label (and the active locale) and
/// returns a link that already contains that label as its child. If no
/// builder is registered the header falls back to plain anchors over the
/// canonical URL scheme, which keeps previews working.
pub struct NavBuilder {
    pub brand: fn(lang: Lang) -> Element,
    pub home: fn(lang: Lang, label: &str) -> Element,
    pub team_services: fn(lang: Lang, label: &str) -> Element,
    pub service: fn(lang: Lang, slug: &'static str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

fn brand_link(lang: Lang) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.brand)(lang),
        None => rsx! {
            a { class: "navbar__brand-link", href: "/{lang}", "Maydan" }
        },
    }
}

fn home_link(lang: Lang, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.home)(lang, label),
        None => rsx! {
            a { class: "navbar__link", href: "/{lang}", "{label}" }
        },
    }
}

fn team_services_link(lang: Lang, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.team_services)(lang, label),
        None => rsx! {
            a { class: "navbar__link", href: "/{lang}/team-services", "{label}" }
        },
    }
}

fn service_link(lang: Lang, slug: &'static str, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.service)(lang, slug, label),
        None => rsx! {
            a { class: "navbar__menu-link", href: "/{lang}/services/{slug}", "{label}" }
        },
    }
}

/// Transparent site header that gains a solid background while hovered or
/// while any menu is open. Carries the services mega-dropdown, search,
/// locale/theme switchers, and the mobile hamburger menu.
#[component]
pub fn SiteHeader(on_lang_switch: EventHandler<Lang>) -> Element {
    let lang_ctx: Option<Signal<Lang>> = try_use_context::<Signal<Lang>>();
    let lang = lang_ctx.as_ref().map(|s| (*s)()).unwrap_or_default();

    let mut hovered = use_signal(|| false);
    let mut services_open = use_signal(|| false);
    let mut mobile_open = use_signal(|| false);

    let show_bg = hovered() || services_open() || mobile_open();
    let header_class = if show_bg {
        "navbar navbar--solid"
    } else {
        "navbar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            class: header_class,
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {brand_link(lang)}
                    span { class: "navbar__brand-subtitle", {t!("brand-tagline")} }
                }

                nav { class: "navbar__links",
                    {home_link(lang, &t!("nav-home"))}

                    div {
                        class: "navbar__menu",
                        onmouseenter: move |_| services_open.set(true),
                        onmouseleave: move |_| services_open.set(false),

                        span { class: "navbar__menu-label",
                            {t!("nav-services")}
                            ChevronDownIcon {}
                        }

                        if services_open() {
                            div { class: "navbar__menu-panel",
                                for service in SERVICES {
                                    if let Some(label) = service_label(service.slug) {
                                        {service_link(lang, service.slug, &label)}
                                    }
                                }
                            }
                        }
                    }

                    {team_services_link(lang, &t!("nav-team-services"))}
                    a { class: "navbar__link", href: "/{lang}/about", {t!("nav-about")} }
                    a { class: "navbar__link", href: "/{lang}/contact", {t!("nav-contact")} }
                }

                div { class: "navbar__actions",
                    ThemeSwitcher {}
                    SearchBar {}
                    LanguageSwitcher { on_switch: on_lang_switch }
                    button { r#type: "button", class: "navbar__book", {t!("nav-book")} }
                }

                div { class: "navbar__mobile-actions",
                    SearchBar {}
                    button {
                        r#type: "button",
                        class: "navbar__burger",
                        aria_label: t!("nav-menu-toggle"),
                        onclick: move |_| {
                            let open = mobile_open();
                            mobile_open.set(!open);
                        },
                        if mobile_open() { CloseIcon {} } else { MenuIcon {} }
                    }
                }
            }

            if mobile_open() {
                div { class: "navbar__sheet",
                    nav { class: "navbar__sheet-nav",
                        div { class: "navbar__sheet-item", onclick: move |_| mobile_open.set(false),
                            {home_link(lang, &t!("nav-home"))}
                        }

                        div { class: "navbar__sheet-group",
                            button {
                                r#type: "button",
                                class: "navbar__sheet-toggle",
                                onclick: move |_| {
                                    let open = services_open();
                                    services_open.set(!open);
                                },
                                span { {t!("nav-services")} }
                                ChevronDownIcon {}
                            }
                            if services_open() {
                                div { class: "navbar__sheet-sub",
                                    for service in SERVICES {
                                        if let Some(label) = service_label(service.slug) {
                                            div { class: "navbar__sheet-item", onclick: move |_| mobile_open.set(false),
                                                {service_link(lang, service.slug, &label)}
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "navbar__sheet-item", onclick: move |_| mobile_open.set(false),
                            {team_services_link(lang, &t!("nav-team-services"))}
                        }
                        a { class: "navbar__sheet-item", href: "/{lang}/about", {t!("nav-about")} }
                        a { class: "navbar__sheet-item", href: "/{lang}/contact", {t!("nav-contact")} }

                        div { class: "navbar__sheet-settings",
                            div { class: "navbar__sheet-row",
                                span { {t!("nav-theme-label")} }
                                ThemeSwitcher {}
                            }
                            div { class: "navbar__sheet-row",
                                span { {t!("nav-language-label")} }
                                LanguageSwitcher { on_switch: on_lang_switch }
                            }
                            button {
                                r#type: "button",
                                class: "navbar__book navbar__book--wide",
                                onclick: move |_| mobile_open.set(false),
                                {t!("nav-book")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Collapsible search input. The original ships the field without a submit
/// target; it filters nothing yet and exists for parity with the design.
#[component]
fn SearchBar() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "navbar__search",
            button {
                r#type: "button",
                class: "navbar__search-toggle",
                aria_label: t!("search-label"),
                onclick: move |_| {
                    let visible = open();
                    open.set(!visible);
                },
                SearchIcon {}
            }
            if open() {
                input {
                    class: "navbar__search-input",
                    r#type: "text",
                    placeholder: t!("search-placeholder"),
                }
            }
        }
    }
}

#[component]
fn SearchIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
fn ChevronDownIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon--small",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

#[component]
fn MenuIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M4 6h16" }
            path { d: "M4 12h16" }
            path { d: "M4 18h16" }
        }
    }
}

#[component]
fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}
