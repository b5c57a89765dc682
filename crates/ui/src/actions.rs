//! Async flows between the gateway and the global state
//!
//! Each flow clones what it needs out of [`APP_STATE`], awaits the network
//! without holding a borrow, then writes the result back. When two flows
//! race, the last one to resolve wins.

use crate::state::{APP_STATE, DeleteTarget, Dialog, Page, StatusLevel, notify};
use champa_api::needs_login;
use champa_catalog::{reviews::assemble, trust_reviews};
use champa_core::{
    AccountKind, Credentials, NewAccount, ProductDraft, ProductId, ProductRecord, ShopError,
    ShopResult,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

// ============================================================================
// Storefront
// ============================================================================

/// Fetch remote products and reviews; failures keep the built-in catalog
pub async fn load_storefront() {
    let gateway = APP_STATE.peek().gateway();
    let gateway = match gateway {
        Ok(gateway) => gateway,
        Err(e) => {
            warn!("Storefront stays offline: {e}");
            report(e).await;
            return;
        }
    };

    let records: Vec<ProductRecord> = match gateway.public_products().await {
        Ok(records) => {
            info!("Fetched {} remote products", records.len());
            APP_STATE.write().set_remote_products(&records);
            records
        }
        Err(e) => {
            warn!("Remote products unavailable, showing the built-in catalog: {e}");
            Vec::new()
        }
    };

    match gateway.public_reviews().await {
        Ok(reviews) => {
            let mut state = APP_STATE.write();
            state.trust_reviews = trust_reviews(&reviews, &records);
            state.all_reviews = reviews.iter().map(|r| assemble(r, &records)).collect();
        }
        Err(e) => warn!("Reviews unavailable: {e}"),
    }
}

// ============================================================================
// Session
// ============================================================================

/// Log in, then go wherever the login page was asked to return to
pub async fn login(credentials: Credentials) -> ShopResult<()> {
    let gateway = APP_STATE.peek().gateway()?;
    let response = gateway.login(&credentials).await?;
    let mut state = APP_STATE.write();
    let page = state.after_login(&response.user);
    state
        .ui
        .toast(format!("Welcome, {}", response.user.username), StatusLevel::Success);
    info!("Login finished on {:?}", page);
    Ok(())
}

/// Log out remotely (best effort) and forget the session
pub async fn logout() {
    let gateway = APP_STATE.peek().gateway();
    if let Ok(gateway) = gateway {
        if let Err(e) = gateway.logout().await {
            warn!("Logout request failed: {e}");
        }
    }
    let mut state = APP_STATE.write();
    state.forget_session();
    state.navigate(Page::Home);
    state.ui.toast("Logged out", StatusLevel::Info);
}

/// Tell the user, wait, then open the login page for the current page
pub async fn redirect_to_login(message: String) {
    let (delay, next) = {
        let state = APP_STATE.peek();
        (
            state.config.auth_redirect_delay_ms,
            format!("/{}", state.ui.active_page.path()),
        )
    };
    notify(message, StatusLevel::Error);
    tokio::time::sleep(Duration::from_millis(delay)).await;
    APP_STATE.write().require_login(&next);
}

/// Report a failed admin call; auth failures lead back to login
///
/// Server answers become a toast. Anything local (storage, client setup)
/// opens the error dialog.
pub async fn report(error: ShopError) {
    if needs_login(&error) {
        redirect_to_login(error.user_message()).await;
    } else if error.is_remote() || error.is_validation() {
        notify(error.user_message(), StatusLevel::Error);
    } else {
        APP_STATE
            .write()
            .ui
            .show_dialog(Dialog::Error(error.user_message()));
    }
}

// ============================================================================
// Admin pages
// ============================================================================

/// Probe `/api/admin/me`, then load what `page` shows
pub async fn open_admin_page(page: Page) {
    let gateway = APP_STATE.peek().gateway();
    let probe = match gateway {
        Ok(gateway) => gateway.admin_me().await,
        Err(e) => Err(e),
    };
    match probe {
        Ok(me) => APP_STATE.write().identity = Some(me),
        Err(e) => {
            warn!("Admin probe failed: {e}");
            redirect_to_login(e.user_message()).await;
            return;
        }
    }

    match page {
        Page::Dashboard => load_dashboard().await,
        Page::AdminProducts => reload_products().await,
        other => {
            if let Some(kind) = other.account_kind() {
                reload_accounts(kind).await;
            }
        }
    }
}

pub async fn load_dashboard() {
    let gateway = APP_STATE.peek().gateway();
    let result = match gateway {
        Ok(gateway) => gateway.dashboard().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(stats) => {
            let mut state = APP_STATE.write();
            state.dashboard = Some(stats);
            state.dashboard_error = None;
        }
        Err(e) => {
            APP_STATE.write().dashboard_error = Some(e.user_message());
            if needs_login(&e) {
                redirect_to_login(e.user_message()).await;
            }
        }
    }
}

/// Full reload of an account list
pub async fn reload_accounts(kind: AccountKind) {
    let gateway = {
        let mut state = APP_STATE.write();
        state.accounts_mut(kind).list.begin_load();
        state.gateway()
    };
    let result = match gateway {
        Ok(gateway) => gateway.list_accounts(kind).await,
        Err(e) => Err(e),
    };
    let outcome = APP_STATE.write().accounts_mut(kind).list.finish_load(result);
    if let Err(e) = outcome {
        if needs_login(&e) {
            redirect_to_login(e.user_message()).await;
        }
    }
}

/// Full reload of the admin product list
pub async fn reload_products() {
    let gateway = {
        let mut state = APP_STATE.write();
        state.products.begin_load();
        state.gateway()
    };
    let result = match gateway {
        Ok(gateway) => gateway.list_products().await,
        Err(e) => Err(e),
    };
    let outcome = APP_STATE.write().products.finish_load(result);
    if let Err(e) = outcome {
        if needs_login(&e) {
            redirect_to_login(e.user_message()).await;
        }
    }
}

// ============================================================================
// Mutations (each followed by a full reload)
// ============================================================================

pub async fn create_account(kind: AccountKind, account: NewAccount) -> ShopResult<()> {
    let gateway = APP_STATE.peek().gateway()?;
    let created = gateway.create_account(kind, &account).await?;
    notify(format!("Created {}", created.username), StatusLevel::Success);
    reload_accounts(kind).await;
    Ok(())
}

/// Create or update a product, then upload its image if one was picked
///
/// Once the record is saved the list is reloaded even if the image upload
/// fails; that failure is reported as a toast.
pub async fn save_product(
    existing: Option<ProductId>,
    draft: ProductDraft,
    image: Option<PathBuf>,
) -> ShopResult<()> {
    let gateway = APP_STATE.peek().gateway()?;
    let saved = gateway
        .save_product(existing, &draft, image.as_deref())
        .await?;
    reload_products().await;

    match saved.upload_error {
        None => notify(format!("Saved {}", saved.record.name), StatusLevel::Success),
        Some(e) => notify(
            format!(
                "Saved {} but the image was not uploaded: {}",
                saved.record.name,
                e.user_message()
            ),
            StatusLevel::Error,
        ),
    }
    Ok(())
}

pub async fn delete_target(target: DeleteTarget) -> ShopResult<()> {
    let gateway = APP_STATE.peek().gateway()?;
    match &target {
        DeleteTarget::Account { kind, id, .. } => {
            gateway.delete_account(*kind, *id).await?;
            reload_accounts(*kind).await;
        }
        DeleteTarget::Product { id, .. } => {
            gateway.delete_product(*id).await?;
            reload_products().await;
        }
    }
    notify(format!("Deleted {}", target.name()), StatusLevel::Success);
    Ok(())
}
