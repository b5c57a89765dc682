//! Application State Management for the Champa desktop app
//!
//! One global signal holds the session, the product catalog, the view state
//! of every listing and the admin list controllers. Pages read it, event
//! handlers write it, and async tasks write their results back when they
//! resolve.

use champa_api::{AccountListController, ApiGateway, DeepLink, ListController, Session};
use champa_catalog::{AddProductForm, Catalog, FilterState, HeroCarousel, SampleCarousel, SitePage, TrustReview};
use champa_core::{
    AccountKind, AdminIdentity, DashboardStats, FileStorage, LoggedInUser, Product, ProductId,
    ProductRecord, SharedStorage, ShopConfig, ShopError, ShopResult,
};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Products,
    Reviews,
    Contact,
    Login,
    Dashboard,
    Admins,
    Customers,
    AdminProducts,
}

impl Page {
    /// Storefront pages, in header order
    pub const STOREFRONT: &'static [Page] = &[Page::Home, Page::Products, Page::Reviews, Page::Contact];

    /// Admin pages, in sidebar order
    pub const ADMIN: &'static [Page] = &[
        Page::Dashboard,
        Page::Admins,
        Page::Customers,
        Page::AdminProducts,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "ໜ້າຫຼັກ",
            Page::Products => "ສິນຄ້າ",
            Page::Reviews => "ລີວິວ",
            Page::Contact => "ຕິດຕໍ່",
            Page::Login => "ເຂົ້າສູ່ລະບົບ",
            Page::Dashboard => "Dashboard",
            Page::Admins => "Admins",
            Page::Customers => "Customers",
            Page::AdminProducts => "Products",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::Products => "👕",
            Page::Reviews => "⭐",
            Page::Contact => "✉️",
            Page::Login => "🔑",
            Page::Dashboard => "📊",
            Page::Admins => "🛡️",
            Page::Customers => "👥",
            Page::AdminProducts => "📦",
        }
    }

    /// Link path without leading slash
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Products => "products",
            Page::Reviews => "reviews",
            Page::Contact => "contact",
            Page::Login => "login",
            Page::Dashboard => "admin/dashboard",
            Page::Admins => "admin/admins",
            Page::Customers => "admin/customers",
            Page::AdminProducts => "admin/products",
        }
    }

    /// Resolve a link path
    pub fn from_path(path: &str) -> Option<Page> {
        let path = path.trim_matches('/');
        let page = match path {
            "" | "home" | "index" => Page::Home,
            "products" | "product" => Page::Products,
            "reviews" => Page::Reviews,
            "contact" => Page::Contact,
            "login" => Page::Login,
            "admin" | "dashboard" | "admin/dashboard" => Page::Dashboard,
            "admin/admins" => Page::Admins,
            "admin/customers" => Page::Customers,
            "admin/products" => Page::AdminProducts,
            _ => return None,
        };
        Some(page)
    }

    pub fn from_site(page: SitePage) -> Page {
        match page {
            SitePage::Home => Page::Home,
            SitePage::Products => Page::Products,
            SitePage::Reviews => Page::Reviews,
            SitePage::Contact => Page::Contact,
        }
    }

    pub fn is_admin(&self) -> bool {
        Page::ADMIN.contains(self)
    }

    /// Pages that send a visitor without a token to the login page
    pub fn requires_login(&self) -> bool {
        matches!(self, Page::Products) || self.is_admin()
    }

    /// Account kind listed on this page
    pub fn account_kind(&self) -> Option<AccountKind> {
        match self {
            Page::Admins => Some(AccountKind::Admin),
            Page::Customers => Some(AccountKind::Customer),
            _ => None,
        }
    }
}

// ============================================================================
// Dialogs and Toasts
// ============================================================================

/// Modal dialogs
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Storefront "add product" form (local cache)
    AddLocalProduct,
    /// Product details from the merged catalog
    ProductDetail(ProductId),
    /// Admin product form; `None` creates a new product
    ProductForm(Option<ProductRecord>),
    /// New admin or customer
    AccountForm(AccountKind),
    ConfirmDelete(DeleteTarget),
    Error(String),
}

/// Record a delete confirmation is about
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Account {
        kind: AccountKind,
        id: i64,
        name: String,
    },
    Product {
        id: ProductId,
        name: String,
    },
}

impl DeleteTarget {
    pub fn name(&self) -> &str {
        match self {
            DeleteTarget::Account { name, .. } | DeleteTarget::Product { name, .. } => name,
        }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub text: String,
    pub level: StatusLevel,
}

/// How long a toast stays up
pub const TOAST_MILLIS: u64 = 3000;

// ============================================================================
// UI State
// ============================================================================

/// Navigation, dialogs and notifications
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub active_page: Page,
    pub active_dialog: Option<Dialog>,
    pub toasts: Vec<Toast>,
    /// Where to go after a successful login
    pub next: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
        self.active_dialog = None;
    }

    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Show a toast; returns its id for later dismissal
    pub fn toast(&mut self, message: impl Into<String>, level: StatusLevel) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            text: message.into(),
            level,
        });
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug)]
pub struct AppState {
    pub config: ShopConfig,
    pub session: Arc<Session>,
    gateway: Option<ApiGateway>,
    /// Seed, remote and locally added products
    pub catalog: Catalog,
    /// View state of the storefront catalog (reveal-all)
    pub catalog_filter: FilterState,
    pub hero: HeroCarousel,
    pub samples: SampleCarousel,
    /// Best-effort review strip on the home page
    pub trust_reviews: Vec<TrustReview>,
    /// Every review, for the reviews page
    pub all_reviews: Vec<TrustReview>,
    pub admins: AccountListController,
    pub customers: AccountListController,
    pub products: ListController<ProductRecord>,
    pub dashboard: Option<DashboardStats>,
    pub dashboard_error: Option<String>,
    /// Admin shown in the sidebar after a successful probe
    pub identity: Option<AdminIdentity>,
    pub ui: UiState,
}

impl AppState {
    /// State backed by the configured data directory
    pub fn new() -> Self {
        let config = ShopConfig::load().unwrap_or_else(|e| {
            warn!("Falling back to default configuration: {e}");
            ShopConfig::default()
        });
        let storage = FileStorage::shared(config.storage_path());
        Self::with_storage(config, storage)
    }

    /// State over an explicit storage backend
    pub fn with_storage(config: ShopConfig, storage: SharedStorage) -> Self {
        let session = Session::shared(storage.clone());
        let gateway = match ApiGateway::new(&config, session.clone()) {
            Ok(gateway) => Some(gateway),
            Err(e) => {
                error!("HTTP client unavailable: {e}");
                None
            }
        };
        let catalog = Catalog::load(storage);
        let product_count = catalog.all_products().len();

        Self {
            catalog_filter: FilterState::reveal_all(config.catalog_initial_count),
            hero: HeroCarousel::new(crate::pages::home::HERO_SLIDES.len()),
            samples: SampleCarousel::new(product_count, 3),
            trust_reviews: Vec::new(),
            all_reviews: Vec::new(),
            admins: AccountListController::new(AccountKind::Admin, config.admin_page_size),
            customers: AccountListController::new(AccountKind::Customer, config.admin_page_size),
            products: ListController::new(config.admin_page_size),
            dashboard: None,
            dashboard_error: None,
            identity: None,
            ui: UiState::new(),
            session,
            gateway,
            catalog,
            config,
        }
    }

    /// A gateway handle to move into an async task
    pub fn gateway(&self) -> ShopResult<ApiGateway> {
        self.gateway
            .clone()
            .ok_or_else(|| ShopError::internal("HTTP client unavailable"))
    }

    pub fn accounts(&self, kind: AccountKind) -> &AccountListController {
        match kind {
            AccountKind::Admin => &self.admins,
            AccountKind::Customer => &self.customers,
        }
    }

    pub fn accounts_mut(&mut self, kind: AccountKind) -> &mut AccountListController {
        match kind {
            AccountKind::Admin => &mut self.admins,
            AccountKind::Customer => &mut self.customers,
        }
    }

    /// Go to `page`, or to the login page when it needs a token we lack
    pub fn navigate(&mut self, page: Page) {
        if page.requires_login() && !self.session.is_logged_in() {
            self.require_login(&format!("/{}", page.path()));
        } else {
            self.ui.navigate(page);
        }
    }

    /// Send the visitor to the login page, coming back to `next` afterwards
    pub fn require_login(&mut self, next: &str) {
        info!("Login required for {next}");
        self.ui.next = Some(next.to_string());
        self.ui.navigate(Page::Login);
    }

    /// Follow an app link, honouring `?token=`, `?filter=`, `?search=`
    pub fn open_link(&mut self, link: &str) -> Page {
        let parsed = DeepLink::parse(link);
        if let Some(token) = parsed.token.as_deref() {
            if let Err(e) = self.session.set_token(token) {
                warn!("Could not store token from link: {e}");
            }
        }

        let page = Page::from_path(&parsed.path).unwrap_or_default();
        if page == Page::Products {
            self.catalog_filter
                .apply_link(parsed.filter.as_deref(), parsed.search.as_deref());
        }
        if page == Page::Login {
            self.ui.next = parsed.next.clone();
        }

        self.navigate(page);
        if self.ui.active_page == Page::Login && page != Page::Login {
            self.ui.next = Some(parsed.stripped);
        }
        self.ui.active_page
    }

    /// Open the product modal; visitors without a token log in first
    pub fn open_product(&mut self, id: ProductId) {
        if self.session.is_logged_in() {
            self.ui.show_dialog(Dialog::ProductDetail(id));
        } else {
            self.require_login(&format!("/{}", Page::Products.path()));
        }
    }

    /// Where a fresh login lands
    pub fn after_login(&mut self, user: &LoggedInUser) -> Page {
        match self.ui.next.take() {
            Some(next) => self.open_link(&next),
            None if user.role == AccountKind::Admin.role() => {
                self.navigate(Page::Dashboard);
                Page::Dashboard
            }
            None => {
                self.navigate(Page::Home);
                Page::Home
            }
        }
    }

    /// Drop every trace of the session held in memory
    pub fn forget_session(&mut self) {
        self.session.clear();
        self.identity = None;
        self.dashboard = None;
        for kind in [AccountKind::Admin, AccountKind::Customer] {
            let page_size = self.config.admin_page_size;
            *self.accounts_mut(kind) = AccountListController::new(kind, page_size);
        }
        self.products = ListController::new(self.config.admin_page_size);
    }

    /// Replace the remote product list and resize the sample carousel
    pub fn set_remote_products(&mut self, records: &[ProductRecord]) {
        self.catalog.set_remote(records);
        self.samples = SampleCarousel::new(self.catalog.all_products().len(), 3);
    }

    /// Save a product to the local cache and show it in the catalog
    pub fn add_local_product(&mut self, form: AddProductForm) -> ShopResult<Product> {
        let product = self.catalog.add_local(form)?;
        self.samples = SampleCarousel::new(self.catalog.all_products().len(), 3);
        Ok(product)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Capture a `?token=` handed over on the command line
pub fn init_app_state(link: Option<&str>) {
    if let Some(link) = link {
        let page = APP_STATE.write().open_link(link);
        info!("Opened {link} on {:?}", page);
    }
}

/// Show a toast from anywhere
pub fn notify(message: impl Into<String>, level: StatusLevel) {
    APP_STATE.write().ui.toast(message, level);
}

/// Current page
pub fn use_current_page() -> Page {
    APP_STATE.read().ui.active_page
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use champa_catalog::{ALL, Paging};
    use champa_core::{MemoryStorage, TOKEN_KEY};
    use pretty_assertions::assert_eq;

    fn state() -> (AppState, SharedStorage) {
        let storage = MemoryStorage::shared();
        (AppState::with_storage(ShopConfig::default(), storage.clone()), storage)
    }

    #[test]
    fn test_page_paths_round_trip() {
        for page in Page::STOREFRONT.iter().chain(Page::ADMIN).chain([&Page::Login]) {
            assert_eq!(Page::from_path(page.path()), Some(*page));
        }
        assert_eq!(Page::from_path("/nowhere"), None);
    }

    #[test]
    fn test_catalog_requires_login() {
        let (mut state, _) = state();
        state.navigate(Page::Products);
        assert_eq!(state.ui.active_page, Page::Login);
        assert_eq!(state.ui.next.as_deref(), Some("/products"));

        state.navigate(Page::Contact);
        assert_eq!(state.ui.active_page, Page::Contact);
    }

    #[test]
    fn test_link_with_token_and_filter() {
        let (mut state, storage) = state();
        let page = state.open_link("/products?filter=jersey&token=abc");
        assert_eq!(page, Page::Products);
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(state.catalog_filter.category, "jersey");
    }

    #[test]
    fn test_search_link_reveals_everything() {
        let (mut state, _) = state();
        state.session.set_token("t").unwrap();
        state.open_link("/products?search=Storm");
        assert_eq!(state.catalog_filter.search, "Storm");
        assert_eq!(state.catalog_filter.category, ALL);
        assert!(matches!(
            state.catalog_filter.paging,
            Paging::RevealAll { revealed: true, .. }
        ));
    }

    #[test]
    fn test_login_returns_to_next() {
        let (mut state, _) = state();
        state.open_link("/admin/customers");
        assert_eq!(state.ui.active_page, Page::Login);

        state.session.set_token("fresh").unwrap();
        let user = LoggedInUser {
            id: 1,
            username: "noy".into(),
            role: "admin".into(),
        };
        assert_eq!(state.after_login(&user), Page::Customers);
        assert_eq!(state.ui.next, None);

        // No pending target: admins land on the dashboard
        assert_eq!(state.after_login(&user), Page::Dashboard);
        let customer = LoggedInUser {
            role: "customer".into(),
            ..user
        };
        assert_eq!(state.after_login(&customer), Page::Home);
    }

    #[test]
    fn test_forget_session() {
        let (mut state, storage) = state();
        state.session.set_token("t").unwrap();
        state.identity = Some(AdminIdentity {
            id: 1,
            username: "noy".into(),
            role: "admin".into(),
            phone: None,
            profile_image: None,
        });
        state.forget_session();
        assert!(state.identity.is_none());
        assert_eq!(storage.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_toasts() {
        let mut ui = UiState::new();
        let first = ui.toast("saved", StatusLevel::Success);
        ui.toast("oops", StatusLevel::Error);
        assert_eq!(ui.toasts.len(), 2);
        ui.dismiss(first);
        assert_eq!(ui.toasts[0].text, "oops");
    }

    #[test]
    fn test_add_local_product_grows_catalog() {
        let (mut state, _) = state();
        let before = state.catalog.all_products().len();
        let product = state
            .add_local_product(AddProductForm::new("Team Kit", "120,000"))
            .unwrap();
        assert_eq!(state.catalog.all_products().len(), before + 1);
        assert_eq!(state.catalog.find(product.id).map(|p| p.title), Some("Team Kit".into()));
        assert!(state.add_local_product(AddProductForm::new("", "")).is_err());
    }

    #[test]
    fn test_product_modal_needs_login() {
        let (mut state, _) = state();
        state.open_product(2);
        assert_eq!(state.ui.active_page, Page::Login);
        assert!(state.ui.active_dialog.is_none());

        state.session.set_token("t").unwrap();
        state.open_product(2);
        assert_eq!(state.ui.active_dialog, Some(Dialog::ProductDetail(2)));
    }

    #[test]
    fn test_dialogs_close_on_navigation() {
        let mut ui = UiState::new();
        ui.show_dialog(Dialog::AddLocalProduct);
        ui.navigate(Page::Contact);
        assert!(ui.active_dialog.is_none());
    }
}
