use dioxus::prelude::*;

use crate::core::store::{Lang, Theme};
use crate::t;

/// Locale picker. The actual route swap is the platform's job (it owns the
/// router), so the chosen locale is only forwarded through `on_switch`.
#[component]
pub fn LanguageSwitcher(on_switch: EventHandler<Lang>) -> Element {
    let lang_ctx: Option<Signal<Lang>> = try_use_context::<Signal<Lang>>();
    let current = lang_ctx.as_ref().map(|s| (*s)()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let value = evt.value();
        if let Ok(next) = value.parse::<Lang>() {
            if next != current {
                on_switch.call(next);
            }
        }
    };

    rsx! {
        label { class: "locale-switcher",
            span { class: "visually-hidden", {t!("nav-language-label")} }
            select {
                class: "locale-switcher__select",
                value: "{current}",
                oninput: on_change,
                for lang in Lang::ALL {
                    option { key: "{lang}", value: "{lang}", "{lang.label()}" }
                }
            }
        }
    }
}

/// Three-state theme toggle cycling brown -> white -> dark. The theme lives
/// in a context signal provided by the shell; without a provider the button
/// still renders but cycles a local signal only.
#[component]
pub fn ThemeSwitcher() -> Element {
    let local = use_signal(Theme::default);
    let mut theme = try_use_context::<Signal<Theme>>().unwrap_or(local);
    let active = theme();

    rsx! {
        button {
            r#type: "button",
            class: "theme-switcher",
            aria_label: t!("nav-theme-label"),
            onclick: move |_| {
                let next = theme().next();
                theme.set(next);
            },
            span { class: if active == Theme::White { "theme-switcher__icon theme-switcher__icon--on" } else { "theme-switcher__icon" },
                SunIcon {}
            }
            span { class: if active == Theme::Dark { "theme-switcher__icon theme-switcher__icon--on" } else { "theme-switcher__icon" },
                MoonIcon {}
            }
            span { class: if active == Theme::Brown { "theme-switcher__icon theme-switcher__icon--on" } else { "theme-switcher__icon" },
                DotIcon {}
            }
        }
    }
}

#[component]
fn SunIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
fn MoonIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
fn DotIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            circle { cx: "12", cy: "12", r: "10" }
        }
    }
}
