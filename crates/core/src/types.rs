//! Core types used throughout the storefront
//!
//! Storefront products, the server-side records the admin console manages,
//! reviews, dashboard aggregates and the request payloads sent to the backend.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of a product (seed, remote or locally added)
pub type ProductId = i64;

/// Identifier of an admin or customer account
pub type AccountId = i64;

// ============================================================================
// Categories
// ============================================================================

/// The fixed set of storefront categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Company,
    Agency,
    Event,
    Sport,
    Jersey,
}

impl Category {
    /// All categories in tab order
    pub fn all() -> &'static [Category] {
        &[
            Category::Company,
            Category::Agency,
            Category::Event,
            Category::Sport,
            Category::Jersey,
        ]
    }

    /// Wire/selector value
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Company => "company",
            Category::Agency => "agency",
            Category::Event => "event",
            Category::Sport => "sport",
            Category::Jersey => "jersey",
        }
    }

    /// Parse a selector value
    pub fn parse(value: &str) -> Option<Self> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == value)
    }

    /// Category derived from a sport type for products that carry none
    pub fn from_sport_type(kind: Option<&str>) -> Self {
        match kind {
            Some("football") => Category::Jersey,
            Some("running") => Category::Event,
            Some("basketball") => Category::Agency,
            Some("esport") => Category::Sport,
            _ => Category::Sport,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Storefront Product
// ============================================================================

/// A product as displayed by the storefront
///
/// The price is a display string; no arithmetic is ever done on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub price: String,
    /// Sport type (`football`, `running`, ...) used to derive a category
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Collar / price type, a secondary filter axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_type: Option<String>,
}

impl Product {
    /// Create a bare product with a title
    pub fn new(id: ProductId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price: String::new(),
            kind: None,
            category: None,
            badge: None,
            desc: String::new(),
            image: None,
            price_type: None,
        }
    }

    /// Category used for filtering: the explicit one, or one derived from the type
    pub fn effective_category(&self) -> Cow<'_, str> {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => Cow::Borrowed(category),
            _ => Cow::Borrowed(Category::from_sport_type(self.kind.as_deref()).as_str()),
        }
    }

    /// Whether the badge marks the product as free
    pub fn is_free(&self) -> bool {
        matches!(self.badge.as_deref(), Some("FREE") | Some("ຟຣີ"))
    }

    /// Collar type with surrounding whitespace removed
    pub fn collar(&self) -> &str {
        self.price_type.as_deref().map(str::trim).unwrap_or("")
    }
}

// ============================================================================
// Server Records
// ============================================================================

/// A product row as the backend returns it (`/api/products`, `/api/admin/products`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price_type: Option<String>,
}

/// Role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Admin,
    Customer,
}

impl AccountKind {
    /// Role string the backend uses for this kind
    pub fn role(&self) -> &'static str {
        match self {
            AccountKind::Admin => "admin",
            AccountKind::Customer => "customer",
        }
    }

    /// Plural used in admin routes
    pub fn plural(&self) -> &'static str {
        match self {
            AccountKind::Admin => "admins",
            AccountKind::Customer => "customers",
        }
    }
}

/// An admin or customer account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl Account {
    /// Whether the account currently holds the role of the given kind
    pub fn has_role(&self, kind: AccountKind) -> bool {
        self.role == kind.role()
    }

    /// Contact address shown under the name
    pub fn email(&self) -> String {
        format!("{}@champa.com", self.username)
    }

    /// Upper-cased first letter for the avatar bubble
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// The admin behind the current token (`/api/admin/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: AccountId,
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// A customer review (`/api/reviews`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One line of the dashboard's recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    #[serde(default)]
    pub action: String,
    /// Timestamp as the backend formats it (RFC 3339 or `YYYY-MM-DD HH:MM:SS`)
    #[serde(default)]
    pub created_at: String,
}

/// Aggregates behind the admin dashboard (`/api/admin/dashboard`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_admin: u64,
    #[serde(default)]
    pub total_customer: u64,
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub revenue_by_month: Vec<f64>,
    #[serde(default)]
    pub revenue_month_labels: Vec<String>,
    #[serde(default)]
    pub orders_by_week: Vec<f64>,
    #[serde(default)]
    pub orders_day_labels: Vec<String>,
    #[serde(default)]
    pub recent_activities: Vec<Activity>,
}

// ============================================================================
// Request Payloads
// ============================================================================

/// Credentials for `/api/login`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username or phone number
    pub username: String,
    pub password: String,
}

/// Answer of `/api/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoggedInUser,
}

/// User part of a login answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedInUser {
    pub id: AccountId,
    pub username: String,
    pub role: String,
}

/// New admin or customer account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Create/update body for `/api/admin/products`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price_type: Option<String>,
}

impl From<&ProductRecord> for ProductDraft {
    fn from(record: &ProductRecord) -> Self {
        Self {
            name: record.name.clone(),
            price: record.price,
            stock: record.stock,
            description: record.description.clone(),
            category: record.category.clone(),
            price_type: record.price_type.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
