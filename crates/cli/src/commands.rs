//! Command execution
//!
//! Each command builds what it needs from a [`Context`] and returns the text
//! to print. Remote listings reuse the same controllers as the desktop app.

use crate::args::{AccountArgs, AddArgs, AdminProductArgs, CatalogArgs, Cli, Command, TargetArg};
use crate::output;
use anyhow::{Context as _, Result, bail};
use champa_api::{AccountListController, ApiGateway, ListController, Session, StatusFilter};
use champa_catalog::{
    ALL, AddProductForm, Catalog, DashboardView, FilterState, derive_view, search_index,
    site_search,
};
use champa_core::{
    Account, AccountKind, Category, Credentials, FileStorage, NewAccount, ProductRecord, SharedStorage,
    ShopConfig, ShopError,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Configuration, storage and session shared by every command
pub struct Context {
    pub config: ShopConfig,
    pub storage: SharedStorage,
    pub session: Arc<Session>,
}

impl Context {
    /// Load the configuration and apply command-line overrides
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = ShopConfig::load().context("Failed to load configuration")?;
        if let Some(dir) = &cli.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(url) = &cli.base_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        Ok(Self::new(config))
    }

    pub fn new(config: ShopConfig) -> Self {
        let storage = FileStorage::shared(config.storage_path());
        let session = Session::shared(storage.clone());
        debug!("Using storage at {}", config.storage_path().display());
        Self {
            config,
            storage,
            session,
        }
    }

    pub fn gateway(&self) -> Result<ApiGateway> {
        Ok(ApiGateway::new(&self.config, self.session.clone())?)
    }

    fn page_size(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.config.admin_page_size)
    }
}

/// Run the parsed command
pub async fn run(cli: &Cli) -> Result<String> {
    let ctx = Context::from_cli(cli)?;
    execute(&ctx, &cli.command).await
}

pub async fn execute(ctx: &Context, command: &Command) -> Result<String> {
    match command {
        Command::Products(args) => products(ctx, args).await,
        Command::Add(args) => add(ctx, args),
        Command::Search { query } => search(ctx, query),
        Command::Login { username, password } => login(ctx, username, password).await,
        Command::Logout => logout(ctx).await,
        Command::Whoami => {
            let me = ctx.gateway()?.admin_me().await.map_err(explain)?;
            Ok(format!("{} ({}), id {}", me.username, me.role, me.id))
        }
        Command::Dashboard => {
            let stats = ctx.gateway()?.dashboard().await.map_err(explain)?;
            Ok(output::dashboard(&DashboardView::from_stats(&stats, chrono::Utc::now())))
        }
        Command::Admins(args) => accounts(ctx, AccountKind::Admin, args).await,
        Command::Customers(args) => accounts(ctx, AccountKind::Customer, args).await,
        Command::AdminProducts(args) => admin_products(ctx, args).await,
        Command::CreateAccount {
            kind,
            username,
            password,
            phone,
        } => {
            let kind = AccountKind::from(*kind);
            let account = NewAccount {
                username: username.trim().to_string(),
                password: password.clone(),
                phone: phone.clone().filter(|p| !p.trim().is_empty()),
            };
            let created = ctx
                .gateway()?
                .create_account(kind, &account)
                .await
                .map_err(explain)?;
            Ok(format!("Created {} {} (id {})", kind.role(), created.username, created.id))
        }
        Command::Delete { target, id } => delete(ctx, *target, *id).await,
        Command::Upload { id, path } => {
            let image = ctx
                .gateway()?
                .upload_product_image(*id, path)
                .await
                .map_err(explain)?;
            Ok(format!("Uploaded {image}"))
        }
    }
}

/// Add a hint to errors that need a login
fn explain(error: ShopError) -> anyhow::Error {
    if error.is_auth() {
        anyhow::anyhow!("{} (run `champa login` first)", error.user_message())
    } else {
        anyhow::Error::new(error)
    }
}

// ============================================================================
// Storefront
// ============================================================================

async fn products(ctx: &Context, args: &CatalogArgs) -> Result<String> {
    let mut catalog = Catalog::load(ctx.storage.clone());
    if args.remote {
        match ctx.gateway()?.public_products().await {
            Ok(records) => catalog.set_remote(&records),
            Err(e) => warn!("Remote products unavailable: {e}"),
        }
    }

    if args.category != ALL && Category::parse(&args.category).is_none() {
        bail!("Unknown category '{}'", args.category);
    }

    let mut filter = FilterState::reveal_all(ctx.config.catalog_initial_count);
    if let Some(collar) = &args.collar {
        filter.set_attribute(collar.trim());
    }
    filter.apply_link(Some(&args.category), args.search.as_deref());
    if args.all {
        filter.reveal();
    }

    let products = catalog.all_products();
    Ok(output::catalog(&derive_view(&products, &filter)))
}

fn add(ctx: &Context, args: &AddArgs) -> Result<String> {
    let mut catalog = Catalog::load(ctx.storage.clone());
    let form = AddProductForm {
        title: args.title.clone(),
        price: args.price.clone(),
        kind: args.kind.clone(),
        badge: args.badge.clone(),
        desc: args.desc.clone(),
        image: args.image.clone(),
    };
    let product = catalog.add_local(form)?;
    Ok(format!("Added product {}: {}", product.id, product.title))
}

fn search(ctx: &Context, query: &str) -> Result<String> {
    let catalog = Catalog::load(ctx.storage.clone());
    let index = search_index(&catalog.all_products());
    Ok(output::search_results(&site_search(&index, query)))
}

async fn login(ctx: &Context, username: &str, password: &str) -> Result<String> {
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    let response = ctx.gateway()?.login(&credentials).await?;
    Ok(format!(
        "Logged in as {} ({})",
        response.user.username, response.user.role
    ))
}

async fn logout(ctx: &Context) -> Result<String> {
    if !ctx.session.is_logged_in() {
        return Ok("Not logged in".to_string());
    }
    let outcome = ctx.gateway()?.logout().await;
    if let Err(e) = outcome {
        warn!("Logout request failed, token removed anyway: {e}");
    }
    Ok("Logged out".to_string())
}

// ============================================================================
// Admin
// ============================================================================

async fn accounts(ctx: &Context, kind: AccountKind, args: &AccountArgs) -> Result<String> {
    let gateway = ctx.gateway()?;
    let mut controller = AccountListController::new(kind, ctx.page_size(args.page_size));
    controller
        .list
        .load(gateway.list_accounts(kind))
        .await
        .map_err(explain)?;

    if let Some(search) = &args.search {
        controller.list.filter_mut().set_search(search.trim());
    }
    controller.set_status(StatusFilter::parse(&args.status));
    controller.list.filter_mut().go_to_page(args.page);

    let stats = controller.stats();
    Ok(format!(
        "{} total, {} active, {} inactive\n{}",
        stats.total,
        stats.active,
        stats.inactive,
        output::accounts(&controller.view(), kind)
    ))
}

async fn admin_products(ctx: &Context, args: &AdminProductArgs) -> Result<String> {
    let gateway = ctx.gateway()?;
    let mut list = ListController::<ProductRecord>::new(ctx.page_size(args.page_size));
    list.load(gateway.list_products()).await.map_err(explain)?;

    let filter = list.filter_mut();
    filter.set_category(args.category.trim());
    if let Some(search) = &args.search {
        filter.set_search(search.trim());
    }
    if let Some(collar) = &args.collar {
        filter.set_attribute(collar.trim());
    }
    filter.go_to_page(args.page);

    let stats = champa_api::product_stats(list.records());
    Ok(format!(
        "{} total, {} in stock, {} out of stock\n{}",
        stats.total,
        stats.in_stock,
        stats.out_of_stock,
        output::admin_products(&list.view())
    ))
}

async fn delete(ctx: &Context, target: TargetArg, id: i64) -> Result<String> {
    let gateway = ctx.gateway()?;
    let page_size = ctx.config.admin_page_size;

    let remaining = match target {
        TargetArg::Product => {
            let mut list = ListController::<ProductRecord>::new(page_size);
            list.mutate_then_reload(gateway.delete_product(id), || gateway.list_products())
                .await
                .map_err(explain)?;
            list.records().len()
        }
        TargetArg::Admin | TargetArg::Customer => {
            let kind = if target == TargetArg::Admin {
                AccountKind::Admin
            } else {
                AccountKind::Customer
            };
            let mut list = ListController::<Account>::new(page_size);
            list.mutate_then_reload(gateway.delete_account(kind, id), || {
                gateway.list_accounts(kind)
            })
            .await
            .map_err(explain)?;
            list.records().len()
        }
    };

    Ok(format!("Deleted {id}; {remaining} remaining"))
}
