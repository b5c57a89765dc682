//! Admin list controllers
//!
//! One state machine shared by the admin, customer and product pages:
//!
//! ```text
//! Idle -> Loading -> Loaded -> (filter/search/page change) -> Loaded
//!            ^          |
//!            +----------+  reload after a mutation
//! Loading -> Error(message)
//! ```
//!
//! Filtering and paging work on the cached records and never fetch.
//! Mutations go to the server, then the whole list is fetched again.

use champa_catalog::{FilterState, Listable, View, derive_view, derive_view_where};
use champa_core::{Account, AccountKind, ProductRecord, ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, error, info};

/// Lifecycle of a remote list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The message shown in place of the list
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Cached remote records plus the page's view state
#[derive(Debug, Clone)]
pub struct ListController<R> {
    records: Vec<R>,
    filter: FilterState,
    state: LoadState,
}

impl<R: Listable + Clone> ListController<R> {
    /// New controller with numbered pages of `page_size`
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filter: FilterState::paged(page_size),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Every cached record, unfiltered
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Change the view state; the cached records are reused as-is
    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    /// Current page of the cached records
    pub fn view(&self) -> View<'_, R> {
        derive_view(&self.records, &self.filter)
    }

    /// Current page with an extra predicate
    pub fn view_where(&self, extra: impl Fn(&R) -> bool) -> View<'_, R> {
        derive_view_where(&self.records, &self.filter, extra)
    }

    /// Enter `Loading`; cached records stay until the answer arrives
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
    }

    /// Apply a fetch result
    ///
    /// A failure keeps the error for display and is handed back so the
    /// caller can react to auth errors.
    pub fn finish_load(&mut self, result: ShopResult<Vec<R>>) -> ShopResult<()> {
        match result {
            Ok(records) => {
                info!("Loaded {} records", records.len());
                self.records = records;
                self.state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                error!("Load failed: {e}");
                self.records.clear();
                self.state = LoadState::Error(e.user_message());
                Err(e)
            }
        }
    }

    /// Fetch and cache the list
    pub async fn load<Fut>(&mut self, fetch: Fut) -> ShopResult<()>
    where
        Fut: Future<Output = ShopResult<Vec<R>>>,
    {
        self.begin_load();
        let result = fetch.await;
        self.finish_load(result)
    }

    /// Run a mutation, then reload the whole list
    ///
    /// A failed mutation leaves the list and state untouched.
    pub async fn mutate_then_reload<T, M, F, Fut>(&mut self, mutation: M, fetch: F) -> ShopResult<T>
    where
        M: Future<Output = ShopResult<T>>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ShopResult<Vec<R>>>,
    {
        let outcome = mutation.await?;
        debug!("Mutation succeeded, reloading");
        self.load(fetch()).await?;
        Ok(outcome)
    }
}

// ============================================================================
// Account pages
// ============================================================================

/// Status selector on the admin and customer pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    /// Parse a selector value; unknown values mean `All`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Inactive => "inactive",
        }
    }

    /// An account is active on a page when its role matches the page's kind
    pub fn accepts(&self, account: &Account, kind: AccountKind) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => account.has_role(kind),
            StatusFilter::Inactive => !account.has_role(kind),
        }
    }
}

/// Counts shown above an account list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccountStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Counts shown above the product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductStats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Controller for the admin or customer page
#[derive(Debug, Clone)]
pub struct AccountListController {
    pub kind: AccountKind,
    pub status: StatusFilter,
    pub list: ListController<Account>,
}

impl AccountListController {
    pub fn new(kind: AccountKind, page_size: usize) -> Self {
        Self {
            kind,
            status: StatusFilter::All,
            list: ListController::new(page_size),
        }
    }

    /// Change the status selector and go back to page 1
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.list.filter_mut().go_to_page(1);
    }

    pub fn view(&self) -> View<'_, Account> {
        let (kind, status) = (self.kind, self.status);
        self.list.view_where(move |account| status.accepts(account, kind))
    }

    pub fn stats(&self) -> AccountStats {
        let total = self.list.records().len();
        let active = self
            .list
            .records()
            .iter()
            .filter(|a| a.has_role(self.kind))
            .count();
        AccountStats {
            total,
            active,
            inactive: total - active,
        }
    }
}

/// Stock counts over a product list
pub fn product_stats(records: &[ProductRecord]) -> ProductStats {
    let in_stock = records
        .iter()
        .filter(|p| p.stock.unwrap_or(0) > 0)
        .count();
    ProductStats {
        total: records.len(),
        in_stock,
        out_of_stock: records.len() - in_stock,
    }
}

/// Whether a failed probe or load should send the user to the login page
pub fn needs_login(error: &ShopError) -> bool {
    error.is_auth()
}

// ============================================================================
// Tests
// ============================================================================
