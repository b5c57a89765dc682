//! Command-line arguments

use champa_core::{AccountKind, ProductId};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "champa",
    version,
    about = "Champa catalog and admin console from the terminal",
    long_about = "Browse the Champa catalog, keep local demo products and manage the shop through its REST backend.\n\nExamples:\n  champa products --category jersey\n  champa add --title \"Team Kit\" --price 120,000\n  champa login -u admin\n  champa customers --status active --page 2"
)]
pub struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        long = "data-dir",
        value_name = "DIR",
        global = true,
        help = "Directory holding storage.json (overrides CHAMPA_DATA_DIR)."
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(
        long = "base-url",
        value_name = "URL",
        global = true,
        help = "Backend origin (overrides CHAMPA_BASE_URL)."
    )]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the storefront catalog (built-in, local and optionally remote products)
    Products(CatalogArgs),

    /// Add a product to the local catalog
    Add(AddArgs),

    /// Search pages and products the way the header search does
    Search { query: String },

    /// Log in and keep the token
    Login {
        #[arg(short, long, help = "Username or phone number")]
        username: String,
        #[arg(short, long, env = "CHAMPA_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out and forget the token
    Logout,

    /// Show the admin behind the stored token
    Whoami,

    /// Dashboard counters, charts and recent activity
    Dashboard,

    /// List admin accounts
    Admins(AccountArgs),

    /// List customer accounts
    Customers(AccountArgs),

    /// List remote products
    AdminProducts(AdminProductArgs),

    /// Create an admin or a customer
    CreateAccount {
        #[arg(value_enum)]
        kind: KindArg,
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "CHAMPA_NEW_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete an account or a remote product, then reload its list
    Delete {
        #[arg(value_enum)]
        target: TargetArg,
        id: i64,
    },

    /// Upload an image for a remote product
    Upload { id: ProductId, path: PathBuf },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    #[arg(short, long, default_value = "all", help = "all, company, agency, event, sport or jersey")]
    pub category: String,

    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, help = "Exact collar type")]
    pub collar: Option<String>,

    #[arg(long, help = "Show every match instead of the first few")]
    pub all: bool,

    #[arg(long, help = "Merge in products from /api/products")]
    pub remote: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(short, long)]
    pub title: String,
    #[arg(short, long)]
    pub price: String,
    #[arg(long = "type", default_value = "football")]
    pub kind: String,
    #[arg(long, default_value = "")]
    pub badge: String,
    #[arg(long, default_value = "")]
    pub desc: String,
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AccountArgs {
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(long, default_value = "all", help = "all, active or inactive")]
    pub status: String,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AdminProductArgs {
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(short, long, default_value = "all")]
    pub category: String,
    #[arg(long)]
    pub collar: Option<String>,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Admin,
    Customer,
}

impl From<KindArg> for AccountKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Admin => AccountKind::Admin,
            KindArg::Customer => AccountKind::Customer,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    Admin,
    Customer,
    Product,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products_filters() {
        let cli = Cli::try_parse_from([
            "champa", "products", "--category", "jersey", "--search", "blue", "--all",
        ])
        .unwrap();
        let Command::Products(args) = cli.command else {
            panic!("expected products");
        };
        assert_eq!(args.category, "jersey");
        assert_eq!(args.search.as_deref(), Some("blue"));
        assert!(args.all);
        assert!(!args.remote);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["champa", "admins", "-vv", "--data-dir", "/tmp/x"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn test_delete_requires_known_target() {
        assert!(Cli::try_parse_from(["champa", "delete", "order", "3"]).is_err());
        let cli = Cli::try_parse_from(["champa", "delete", "customer", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Delete { target: TargetArg::Customer, id: 3 }
        ));
    }
}
