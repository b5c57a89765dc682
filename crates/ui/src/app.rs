//! Main Application Component for the Champa app
//!
//! Storefront pages get the site header and footer; admin pages get the
//! console sidebar. Dialogs and toasts float above both.

use dioxus::prelude::*;

use crate::actions;
use crate::components::dialogs::{
    AccountFormDialog, AddProductDialog, ConfirmDeleteDialog, ProductDetailDialog,
    ProductFormDialog,
};
use crate::components::{Header, ToastStack};
use crate::pages::{
    AccountsPage, AdminProductsPage, CatalogPage, ContactPage, DashboardPage, HomePage, LoginPage,
    ReviewsPage,
};
use crate::state::{APP_STATE, Dialog, Page, use_current_page};
use champa_core::AccountKind;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Champa UI initialized");
        spawn(actions::load_storefront());
    });

    let page = use_current_page();

    rsx! {
        div {
            class: "app-container",

            if page.is_admin() {
                div {
                    class: "admin-layout",
                    Sidebar {}
                    div {
                        class: "admin-main",
                        AdminTopBar {}
                        MainContent {}
                    }
                }
            } else {
                div {
                    class: "site-layout",
                    Header {}
                    MainContent {}
                    Footer {}
                }
            }

            DialogOverlay {}
            ToastStack {}
        }
    }
}

// ============================================================================
// Admin Chrome
// ============================================================================

/// Left navigation of the admin console
#[component]
fn Sidebar() -> Element {
    let current = use_current_page();

    rsx! {
        aside {
            class: "sidebar",
            div {
                class: "sidebar-brand",
                span { class: "brand-mark", "C" }
                span { class: "brand-name", "Champa Admin" }
            }
            nav {
                class: "sidebar-nav",
                for page in Page::ADMIN.iter().copied() {
                    SidebarItem { key: "{page.path()}", page, current }
                }
            }
            div {
                class: "sidebar-footer",
                SidebarItem { page: Page::Home, current }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(page: Page, current: Page) -> Element {
    let class = if page == current {
        "sidebar-item active"
    } else {
        "sidebar-item"
    };

    rsx! {
        button {
            class: "{class}",
            title: "{page.display_name()}",
            onclick: move |_| APP_STATE.write().navigate(page),
            span { class: "sidebar-icon", "{page.icon()}" }
            span { class: "sidebar-label", "{page.display_name()}" }
        }
    }
}

/// Signed-in admin and the logout button
#[component]
fn AdminTopBar() -> Element {
    let identity = APP_STATE.read().identity.clone();

    rsx! {
        header {
            class: "admin-topbar",
            div { class: "flex-1" }
            if let Some(me) = identity {
                div {
                    class: "admin-identity",
                    span { class: "avatar", "{me.username.chars().next().unwrap_or('?')}" }
                    div {
                        div { class: "account-name", "{me.username}" }
                        div { class: "muted", "{me.role}" }
                    }
                }
            }
            button {
                class: "btn btn-outline",
                onclick: move |_| {
                    spawn(actions::logout());
                },
                "Logout"
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active page
#[component]
fn MainContent() -> Element {
    let current_page = use_current_page();

    rsx! {
        main {
            class: "main-content",

            match current_page {
                Page::Home => rsx! { HomePage {} },
                Page::Products => rsx! { CatalogPage {} },
                Page::Reviews => rsx! { ReviewsPage {} },
                Page::Contact => rsx! { ContactPage {} },
                Page::Login => rsx! { LoginPage {} },
                Page::Dashboard => rsx! { DashboardPage {} },
                Page::Admins => rsx! { AccountsPage { key: "admins", kind: AccountKind::Admin } },
                Page::Customers => rsx! { AccountsPage { key: "customers", kind: AccountKind::Customer } },
                Page::AdminProducts => rsx! { AdminProductsPage {} },
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            span { "© Champa" }
            span { class: "muted", "v{crate::VERSION}" }
        }
    }
}

// ============================================================================
// Dialog Overlay Component
// ============================================================================

/// Modal dialog overlay
#[component]
fn DialogOverlay() -> Element {
    let dialog = APP_STATE.read().ui.active_dialog.clone();

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    let width = match &dialog {
        Dialog::ProductForm(_) | Dialog::ProductDetail(_) => "dialog dialog-wide",
        _ => "dialog",
    };

    rsx! {
        div {
            class: "dialog-overlay",

            div {
                class: "dialog-backdrop",
                onclick: move |_| APP_STATE.write().ui.close_dialog(),
            }

            div {
                class: "{width}",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::AddLocalProduct => rsx! { AddProductDialog {} },
                    Dialog::ProductDetail(id) => rsx! { ProductDetailDialog { id } },
                    Dialog::ProductForm(existing) => rsx! { ProductFormDialog { existing } },
                    Dialog::AccountForm(kind) => rsx! { AccountFormDialog { kind } },
                    Dialog::ConfirmDelete(target) => rsx! { ConfirmDeleteDialog { target } },
                    Dialog::Error(message) => rsx! { ErrorDialog { message } },
                }
            }
        }
    }
}

/// Error dialog
#[component]
fn ErrorDialog(message: String) -> Element {
    rsx! {
        div {
            class: "dialog-body",
            h2 { class: "dialog-title error-title", "Error" }
            p { class: "dialog-message", "{message}" }
            div {
                class: "dialog-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| APP_STATE.write().ui.close_dialog(),
                    "OK"
                }
            }
        }
    }
}
