use dioxus::prelude::*;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::components::PaginationControls;
use crate::core::api;
use crate::core::content::TeamService;
use crate::core::store::Lang;
use crate::t;

/// Entries per page, as published.
const PAGE_SIZE: usize = 2;

#[component]
pub fn TeamServices() -> Element {
    let lang_ctx: Option<Signal<Lang>> = try_use_context::<Signal<Lang>>();
    let mut page = use_signal(|| 1usize);

    let services = use_resource(move || {
        let lang = lang_ctx.as_ref().map(|s| (*s)()).unwrap_or_default();
        let current = page();
        async move {
            let endpoint = format!(
                "/team-services?pagination[page]={current}&pagination[pageSize]={PAGE_SIZE}"
            );
            api::client()
                .fetch_list::<TeamService>(&endpoint, Some(lang))
                .await
        }
    });

    let body = match &*services.read() {
        None => rsx! {
            div { class: "page-team__card page-team__card--placeholder",
                p { {t!("team-loading")} }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "page-team__card page-team__card--error",
                p { {t!("team-error")} }
                p { class: "page-team__error-detail", "{err}" }
            }
        },
        Some(Ok(listing)) => {
            let entries = listing
                .items
                .iter()
                .map(|service| ListEntry {
                    document_id: service.document_id.clone(),
                    title: service.title.clone(),
                    published: format_published(&service.published_at),
                })
                .collect::<Vec<_>>();
            let pagination = listing.pagination.clone();

            rsx! {
                if entries.is_empty() {
                    div { class: "page-team__card page-team__card--placeholder",
                        p { {t!("team-empty")} }
                    }
                } else {
                    ul { class: "page-team__items",
                        {entries.into_iter().map(render_list_entry)}
                    }
                }

                if pagination.page_count > 1 {
                    PaginationControls {
                        current_page: pagination.page,
                        total_pages: pagination.page_count,
                        on_page_change: move |next| page.set(next),
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page page-team",
            h2 { {t!("team-title")} }
            {body}
        }
    }
}

#[derive(Clone)]
struct ListEntry {
    document_id: String,
    title: String,
    published: Option<String>,
}

fn render_list_entry(entry: ListEntry) -> Element {
    let ListEntry {
        document_id,
        title,
        published,
    } = entry;

    rsx! {
        li { key: "{document_id}", class: "page-team__item",
            span { class: "page-team__item-title", "{title}" }
            if let Some(published) = published.as_ref() {
                span { class: "page-team__item-date", "{published}" }
            }
        }
    }
}

/// Compact date badge like `May 1`. Unparseable timestamps are not shown.
fn format_published(raw: &str) -> Option<String> {
    let parsed = OffsetDateTime::parse(raw, &Rfc3339).ok()?;
    parsed
        .format(&format_description!(
            "[month repr:short] [day padding:none]"
        ))
        .ok()
}
