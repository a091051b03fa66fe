use dioxus::prelude::*;

use crate::components::toast_host::use_toasts;
use crate::core::api;
use crate::core::store::Lang;
use crate::t;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

/// Footer nav links. The target pages are editorial and ship separately;
/// unknown paths fall through to the localized not-found view.
const FOOTER_LINKS: &[(&str, &str)] = &[
    ("/about", "footer-about"),
    ("/our-strategy", "footer-strategy"),
    ("/our-advantages", "footer-advantages"),
    ("/social-responsibility", "footer-social"),
    ("/our-services", "footer-services"),
];

#[derive(serde::Serialize)]
struct SubscriptionPayload<'a> {
    data: SubscriptionData<'a>,
}

#[derive(serde::Serialize)]
struct SubscriptionData<'a> {
    email: &'a str,
}

/// Structural email check mirroring the subscription form's validation:
/// exactly one `@`, a non-empty local part, and a dotted domain.
pub fn validate_email(raw: &str) -> bool {
    let candidate = raw.trim();
    if candidate.is_empty() || candidate.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = candidate.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|label| !label.is_empty())
}

#[component]
pub fn SiteFooter() -> Element {
    let lang_ctx: Option<Signal<Lang>> = try_use_context::<Signal<Lang>>();
    let lang = lang_ctx.as_ref().map(|s| (*s)()).unwrap_or_default();
    let toasts = use_toasts();

    let mut email = use_signal(String::new);

    let subscribe = move |_| {
        let address = email();
        if !validate_email(&address) {
            toasts.show_error(t!("footer-newsletter-invalid"));
            return;
        }

        let loading = toasts.show_loading(t!("footer-newsletter-loading"));
        let mut email = email;
        spawn(async move {
            let payload = SubscriptionPayload {
                data: SubscriptionData {
                    email: address.trim(),
                },
            };
            let result = api::client()
                .post::<serde_json::Value, _>("/newsletter-subscriptions", &payload, Some(lang))
                .await;

            toasts.dismiss(loading);
            match result {
                Ok(_) => {
                    email.set(String::new());
                    toasts.show_success(t!("footer-newsletter-success"));
                }
                Err(err) => {
                    eprintln!("[footer] newsletter subscription failed: {err}");
                    toasts.show_error(t!("footer-newsletter-error"));
                }
            }
        });
    };

    let year = time::OffsetDateTime::now_utc().year();

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", "Maydan" }
                    span { class: "footer__brand-subtitle", {t!("brand-tagline")} }
                }

                nav { class: "footer__links",
                    for (path, key) in FOOTER_LINKS {
                        a {
                            key: "{path}",
                            class: "footer__link",
                            href: "/{lang}{path}",
                            {footer_link_label(key)}
                        }
                    }
                }

                div { class: "footer__newsletter",
                    input {
                        class: "footer__newsletter-input",
                        r#type: "email",
                        placeholder: t!("footer-newsletter-placeholder"),
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "footer__newsletter-button",
                        onclick: subscribe,
                        {t!("footer-subscribe")}
                    }
                }
            }

            div { class: "footer__meta",
                span { {t!("footer-rights", year = year.to_string())} }
            }
        }
    }
}

fn footer_link_label(key: &str) -> String {
    match key {
        "footer-about" => t!("footer-about"),
        "footer-strategy" => t!("footer-strategy"),
        "footer-advantages" => t!("footer-advantages"),
        "footer-social" => t!("footer-social"),
        "footer-services" => t!("footer-services"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(validate_email("reader@maydan.example"));
        assert!(validate_email("  first.last@mail.example.org "));
    }

    #[test]
    fn rejects_structurally_broken_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign.example"));
        assert!(!validate_email("@maydan.example"));
        assert!(!validate_email("reader@"));
        assert!(!validate_email("reader@nodots"));
        assert!(!validate_email("reader@dot."));
        assert!(!validate_email("reader@.example"));
        assert!(!validate_email("two@@maydan.example"));
        assert!(!validate_email("spaced reader@maydan.example"));
    }
}
