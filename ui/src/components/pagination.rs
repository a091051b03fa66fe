//! Pagination controls for CMS-backed collections.

use dioxus::prelude::*;

use crate::t;

const PAGINATION_CSS: Asset = asset!("/assets/styling/pagination.css");

/// Most page numbers shown before collapsing to ellipses.
const MAX_VISIBLE_PAGES: usize = 5;

/// One rendered slot in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Windowed page numbers with ellipses, anchored to the first and last page.
/// Small collections list every page; larger ones collapse around the
/// current position.
pub fn page_numbers(current: usize, total: usize) -> Vec<PageItem> {
    let mut items = Vec::new();

    if total <= MAX_VISIBLE_PAGES {
        for page in 1..=total {
            items.push(PageItem::Page(page));
        }
        return items;
    }

    if current <= 3 {
        for page in 1..=4 {
            items.push(PageItem::Page(page));
        }
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        for page in (total - 3)..=total {
            items.push(PageItem::Page(page));
        }
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        for page in (current - 1)..=(current + 1) {
            items.push(PageItem::Page(page));
        }
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }

    items
}

fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

#[component]
pub fn PaginationControls(
    current_page: usize,
    total_pages: usize,
    on_page_change: EventHandler<usize>,
) -> Element {
    let change = move |page: usize| {
        on_page_change.call(clamp_page(page, total_pages));
    };

    let at_first = current_page == 1;
    let at_last = current_page == total_pages;

    rsx! {
        document::Link { rel: "stylesheet", href: PAGINATION_CSS }
        div { class: "pager",
            div { class: "pager__info",
                {t!("pager-info", page = current_page.to_string(), total = total_pages.to_string())}
            }

            div { class: "pager__controls",
                button {
                    r#type: "button",
                    class: "pager__button",
                    disabled: at_first,
                    aria_label: t!("pager-first"),
                    onclick: move |_| change(1),
                    "«"
                }
                button {
                    r#type: "button",
                    class: "pager__button",
                    disabled: at_first,
                    aria_label: t!("pager-previous"),
                    onclick: move |_| change(current_page.saturating_sub(1)),
                    "‹"
                }

                {page_numbers(current_page, total_pages).into_iter().enumerate().map(|(slot, item)| {
                    match item {
                        PageItem::Page(page) => rsx! {
                            button {
                                key: "page-{slot}",
                                r#type: "button",
                                class: if page == current_page { "pager__button pager__button--current" } else { "pager__button" },
                                disabled: page == current_page,
                                onclick: move |_| change(page),
                                "{page}"
                            }
                        },
                        PageItem::Ellipsis => rsx! {
                            span { key: "gap-{slot}", class: "pager__gap", "…" }
                        },
                    }
                })}

                button {
                    r#type: "button",
                    class: "pager__button",
                    disabled: at_last,
                    aria_label: t!("pager-next"),
                    onclick: move |_| change(current_page + 1),
                    "›"
                }
                button {
                    r#type: "button",
                    class: "pager__button",
                    disabled: at_last,
                    aria_label: t!("pager-last"),
                    onclick: move |_| change(total_pages),
                    "»"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn small_collections_list_every_page() {
        assert_eq!(
            page_numbers(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_numbers(1, 1), vec![Page(1)]);
    }

    #[test]
    fn empty_collections_render_no_pages() {
        assert!(page_numbers(1, 0).is_empty());
    }

    #[test]
    fn near_the_start_collapses_the_tail() {
        assert_eq!(
            page_numbers(2, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn near_the_end_collapses_the_head() {
        assert_eq!(
            page_numbers(8, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn the_middle_collapses_both_sides() {
        assert_eq!(
            page_numbers(5, 9),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn clamp_keeps_pages_in_range() {
        assert_eq!(clamp_page(0, 7), 1);
        assert_eq!(clamp_page(9, 7), 7);
        assert_eq!(clamp_page(3, 7), 3);
        // Degenerate empty collection still yields page 1.
        assert_eq!(clamp_page(5, 0), 1);
    }
}
