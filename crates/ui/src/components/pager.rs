//! List footers: numbered pages and the reveal-all control

use champa_catalog::PageInfo;
use champa_catalog::engine::page_window;
use dioxus::prelude::*;

/// Page buttons around the current page
const WINDOW: usize = 5;

/// "Showing a-b of n" plus previous/next and numbered buttons
#[component]
pub fn Pager(info: PageInfo, on_page: EventHandler<usize>) -> Element {
    let PageInfo::Numbered {
        page,
        total_pages,
        showing_from,
        showing_to,
        showing_total,
        has_prev,
        has_next,
    } = info
    else {
        return rsx! {};
    };

    let pages = page_window(page, total_pages, WINDOW);

    rsx! {
        div {
            class: "pager",

            span {
                class: "pager-summary",
                "ສະແດງ {showing_from}-{showing_to} ຈາກ {showing_total}"
            }

            div {
                class: "pager-buttons",

                button {
                    class: "btn btn-ghost",
                    disabled: !has_prev,
                    onclick: move |_| on_page.call(page.saturating_sub(1)),
                    "‹"
                }

                for n in pages {
                    button {
                        key: "{n}",
                        class: if n == page { "btn btn-page active" } else { "btn btn-page" },
                        onclick: move |_| on_page.call(n),
                        "{n}"
                    }
                }

                button {
                    class: "btn btn-ghost",
                    disabled: !has_next,
                    onclick: move |_| on_page.call(page + 1),
                    "›"
                }
            }
        }
    }
}

/// "Show all" button; renders nothing once every record is visible
#[component]
pub fn RevealMore(hidden: usize, on_reveal: EventHandler<()>) -> Element {
    if hidden == 0 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "reveal-more",
            button {
                class: "btn btn-outline",
                onclick: move |_| on_reveal.call(()),
                "ເບິ່ງທັງໝົດ (+{hidden})"
            }
        }
    }
}
