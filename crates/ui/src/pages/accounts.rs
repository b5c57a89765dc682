//! Accounts Page Component
//!
//! One page body for both the admin list and the customer list. Search,
//! status and page size only change the view of the cached records.

use dioxus::prelude::*;

use crate::components::{Pager, Select, SelectOption};
use crate::hooks::use_admin_page;
use crate::state::{APP_STATE, DeleteTarget, Dialog, Page};
use champa_api::{LoadState, StatusFilter};
use champa_core::{Account, AccountKind, account_status, avatar_color, permissions, role_label};

/// Page sizes offered above admin lists
pub const PAGE_SIZES: &[usize] = &[10, 25, 50];

pub fn page_size_options() -> Vec<SelectOption> {
    PAGE_SIZES
        .iter()
        .map(|n| SelectOption::new(n.to_string(), format!("{n} / page")))
        .collect()
}

fn status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "All"),
        SelectOption::new("active", "Active"),
        SelectOption::new("inactive", "Inactive"),
    ]
}

#[component]
pub fn AccountsPage(kind: AccountKind) -> Element {
    let page = match kind {
        AccountKind::Admin => Page::Admins,
        AccountKind::Customer => Page::Customers,
    };
    use_admin_page(page);

    let state = APP_STATE.read();
    let controller = state.accounts(kind);
    let load = controller.list.state().clone();
    let filter = controller.list.filter().clone();
    let status = controller.status;
    let stats = controller.stats();
    let view = controller.view();
    let info = view.info;
    let rows = view.cloned_items();
    drop(state);

    let page_size = match filter.paging {
        champa_catalog::Paging::Numbered { size, .. } => size,
        champa_catalog::Paging::RevealAll { initial, .. } => initial,
    };

    rsx! {
        div {
            class: "page admin-page accounts-page",

            div {
                class: "page-head",
                h1 { class: "page-title", "{page.display_name()}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::AccountForm(kind)),
                    "+ Add"
                }
            }

            div {
                class: "stat-grid",
                div { class: "card stat-card", span { class: "stat-label", "Total" } span { class: "stat-value", "{stats.total}" } }
                div { class: "card stat-card", span { class: "stat-label", "Active" } span { class: "stat-value", "{stats.active}" } }
                div { class: "card stat-card", span { class: "stat-label", "Inactive" } span { class: "stat-value", "{stats.inactive}" } }
            }

            div {
                class: "toolbar-row",
                input {
                    class: "input search-input",
                    r#type: "search",
                    placeholder: "Search username or phone",
                    value: "{filter.search}",
                    oninput: move |e| APP_STATE.write().accounts_mut(kind).list.filter_mut().set_search(e.value()),
                }
                Select {
                    value: status.as_str().to_string(),
                    options: status_options(),
                    on_change: move |v: String| APP_STATE.write().accounts_mut(kind).set_status(StatusFilter::parse(&v)),
                }
                Select {
                    value: page_size.to_string(),
                    options: page_size_options(),
                    on_change: move |v: String| {
                        if let Ok(size) = v.parse::<usize>() {
                            APP_STATE.write().accounts_mut(kind).list.filter_mut().set_page_size(size);
                        }
                    },
                }
            }

            match load {
                LoadState::Loading if rows.is_empty() => rsx! { div { class: "loading-row", "Loading..." } },
                LoadState::Error(message) => rsx! { div { class: "error-row", "{message}" } },
                _ if rows.is_empty() => rsx! { div { class: "empty-state", "No accounts found" } },
                _ => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Account" }
                                th { "Phone" }
                                th { "Role" }
                                if kind == AccountKind::Admin {
                                    th { "Permissions" }
                                }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for account in rows {
                                AccountRow { key: "{account.id}", account, kind }
                            }
                        }
                    }
                },
            }

            Pager {
                info,
                on_page: move |n| APP_STATE.write().accounts_mut(kind).list.filter_mut().go_to_page(n),
            }
        }
    }
}

#[component]
fn AccountRow(account: Account, kind: AccountKind) -> Element {
    let status = account_status(&account.role, kind);
    let status_class = if status == "Active" { "pill pill-ok" } else { "pill pill-off" };
    let color = avatar_color(account.id, kind);
    let target = DeleteTarget::Account {
        kind,
        id: account.id,
        name: account.username.clone(),
    };

    rsx! {
        tr {
            td {
                div {
                    class: "account-cell",
                    span { class: "avatar", style: "background-color: {color};", "{account.initial()}" }
                    div {
                        div { class: "account-name", "{account.username}" }
                        div { class: "muted", "{account.email()}" }
                    }
                }
            }
            td { "{account.phone.clone().unwrap_or_default()}" }
            td { "{role_label(&account.role)}" }
            if kind == AccountKind::Admin {
                td {
                    for permission in permissions(&account.role).iter() {
                        span { key: "{permission}", class: "chip", "{permission}" }
                    }
                }
            }
            td { span { class: "{status_class}", "{status}" } }
            td {
                button {
                    class: "btn btn-danger btn-small",
                    onclick: move |_| APP_STATE.write().ui.show_dialog(Dialog::ConfirmDelete(target.clone())),
                    "Delete"
                }
            }
        }
    }
}
