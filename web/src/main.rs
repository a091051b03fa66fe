use dioxus::prelude::*;

use ui::components::{
    register_nav, HeroBanner, NavBuilder, SiteFooter, SiteHeader, ToastProvider,
};
use ui::core::store::{Lang, Theme};
use ui::views::{
    Home as HomeView, NotFound as NotFoundView, ServicePage, TeamServices as TeamServicesView,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[redirect("/", || Route::Home { lang: Lang::En })]
    #[route("/:lang")]
    Home { lang: Lang },
    #[route("/:lang/team-services")]
    TeamServices { lang: Lang },
    #[route("/:lang/services/:slug")]
    Service { lang: Lang, slug: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_brand(lang: Lang) -> Element {
    rsx!(Link {
        class: "navbar__brand-link",
        to: Route::Home { lang },
        span { class: "navbar__brand-mark", "Maydan" }
    })
}
fn nav_home(lang: Lang, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home { lang },
        "{label}"
    })
}
fn nav_team_services(lang: Lang, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::TeamServices { lang },
        "{label}"
    })
}
fn nav_service(lang: Lang, slug: &'static str, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__menu-link",
        to: Route::Service { lang, slug: slug.to_owned() },
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builders so the shared header can
        // construct typed links without knowing this crate's Route enum.
        register_nav(NavBuilder {
            brand: nav_brand,
            home: nav_home,
            team_services: nav_team_services,
            service: nav_service,
        });
    }

    // Global reactive locale + theme, consumed by the shared components.
    let lang_code = use_signal(Lang::default);
    use_context_provider(|| lang_code);
    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Site shell around every routed page: header, hero band, footer, toasts.
/// Owns the locale/URL handshake — the path segment is authoritative and the
/// shared `Signal<Lang>` plus the fluent loader follow it.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let mut lang_signal = use_context::<Signal<Lang>>();
    let theme_signal = use_context::<Signal<Theme>>();

    let lang = active_lang(&route);
    if *lang_signal.peek() != lang {
        let _ = ui::i18n::set_language(lang.locale_tag());
        lang_signal.set(lang);
        #[cfg(debug_assertions)]
        println!("[i18n] locale -> {lang}");
    }

    let nav = use_navigator();
    let route_for_switch = route.clone();
    let on_lang_switch = move |next: Lang| {
        let _ = ui::i18n::set_language(next.locale_tag());
        nav.replace(with_lang(&route_for_switch, next));
    };

    let theme = theme_signal();

    rsx! {
        div {
            class: format!("site {}", theme.css_class()),
            dir: lang.dir(),
            lang: lang.as_str(),

            ToastProvider {
                SiteHeader { on_lang_switch: on_lang_switch }
                HeroBanner {}
                main { class: "site__main",
                    Outlet::<Route> {}
                }
                SiteFooter {}
            }
        }
    }
}

/// Locale carried by the current route. The catch-all keeps whatever locale
/// its first segment names so a mistyped `/ar/...` URL stays Arabic.
fn active_lang(route: &Route) -> Lang {
    match route {
        Route::Home { lang } | Route::TeamServices { lang } | Route::Service { lang, .. } => *lang,
        Route::NotFound { segments } => segments
            .first()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or_default(),
    }
}

/// The same page in another locale.
fn with_lang(route: &Route, lang: Lang) -> Route {
    match route {
        Route::Home { .. } => Route::Home { lang },
        Route::TeamServices { .. } => Route::TeamServices { lang },
        Route::Service { slug, .. } => Route::Service {
            lang,
            slug: slug.clone(),
        },
        Route::NotFound { segments } => Route::NotFound {
            segments: segments.clone(),
        },
    }
}

#[component]
fn Home(lang: Lang) -> Element {
    rsx! { HomeView {} }
}

#[component]
fn TeamServices(lang: Lang) -> Element {
    rsx! { TeamServicesView {} }
}

#[component]
fn Service(lang: Lang, slug: String) -> Element {
    rsx! { ServicePage { slug } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    rsx! { NotFoundView {} }
}
