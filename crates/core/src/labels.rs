//! Display labels and colour mappings
//!
//! Pure lookups shared by every page: sport types, categories, roles,
//! avatar colours, image paths and text truncation.

use crate::types::{AccountId, AccountKind, Category};

/// Collar types offered by the catalog and product forms
pub const COLLAR_TYPES: &[&str] = &["ຄໍມົນ", "ຄໍວີ-ວີໄຂວ", "ຄໍ5ລ່ຽນ", "ຄໍໂປໂລ"];

/// Sport types offered by the local add-product form
pub const SPORT_TYPES: &[&str] = &["football", "running", "basketball", "esport"];

/// Badge for a remote product with stock
pub const BADGE_IN_STOCK: &str = "ມີສິນຄ້າ";

/// Badge for a remote product without stock
pub const BADGE_OUT_OF_STOCK: &str = "ໝົດ";

/// Ellipsis appended by [`truncate_chars`]
pub const ELLIPSIS: char = '…';

// ============================================================================
// Products
// ============================================================================

/// Label for a sport type
pub fn sport_type_label(kind: Option<&str>) -> &'static str {
    match kind {
        Some("football") => "ເສື້ອບານເຕະ",
        Some("running") => "ເສື້ອວິ່ງ",
        Some("basketball") => "ເສື້ອບາສ",
        Some("esport") => "ເສື້ອ eSport",
        _ => "ເສື້ອກິລາ",
    }
}

/// Label for a category value; unknown values are shown as-is
pub fn category_label(category: &str) -> String {
    match Category::parse(category) {
        Some(Category::Company) => "ເສື້ອບານເຕະ".to_string(),
        Some(Category::Agency) => "ເສື້ອຕີບານ".to_string(),
        Some(Category::Event) => "ເສື້ອແລ່ນ".to_string(),
        Some(Category::Sport) => "ເສື້ອ E-Sport".to_string(),
        Some(Category::Jersey) => "ເສື້ອ ທີມງານ".to_string(),
        None => category.to_string(),
    }
}

/// Label for a category in the admin product table (`-` when empty)
pub fn package_type_label(category: &str) -> String {
    match category {
        "" => "-".to_string(),
        "football" => "ເສື້ອບານເຕະ".to_string(),
        other => category_label(other),
    }
}

/// Category text on the home showcase cards
pub fn showcase_category(category: &str) -> String {
    if category.eq_ignore_ascii_case("jersey") {
        "JERSEY".to_string()
    } else {
        category.to_string()
    }
}

/// Badge for a remote product given its stock
pub fn stock_badge(stock: Option<i64>) -> &'static str {
    match stock {
        Some(n) if n > 0 => BADGE_IN_STOCK,
        _ => BADGE_OUT_OF_STOCK,
    }
}

/// Resolve a stored image path to a servable one
///
/// Backslashes become forward slashes; relative paths get a `/static/` prefix.
pub fn normalize_image_path(path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    let path = path.replace('\\', "/");
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        Some(path)
    } else {
        Some(format!("/static/{path}"))
    }
}

/// Shorten text to `max` characters, appending an ellipsis when cut
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push(ELLIPSIS);
    out
}

// ============================================================================
// Accounts
// ============================================================================

/// Label for an account role
pub fn role_label(role: &str) -> String {
    match role {
        "admin" => "Super Admin".to_string(),
        other => other.to_string(),
    }
}

/// Permission chips shown for an admin row
pub fn permissions(role: &str) -> &'static [&'static str] {
    if role == "admin" {
        &["Full Access"]
    } else {
        &["User Management", "Product Management"]
    }
}

/// Status text of an account on a page listing `kind`
pub fn account_status(role: &str, kind: AccountKind) -> &'static str {
    if role == kind.role() { "Active" } else { "Inactive" }
}

const ADMIN_AVATARS: &[&str] = &["#3b82f6", "#22c55e", "#a855f7", "#ec4899"];
const CUSTOMER_AVATARS: &[&str] = &[
    "#3b82f6", "#22c55e", "#a855f7", "#ec4899", "#eab308", "#ef4444",
];
const ACTIVITY_AVATARS: &[&str] = &["#3b82f6", "#22c55e", "#a855f7", "#ec4899", "#eab308"];

/// Avatar colour for an account, stable per id
pub fn avatar_color(id: AccountId, kind: AccountKind) -> &'static str {
    let palette = match kind {
        AccountKind::Admin => ADMIN_AVATARS,
        AccountKind::Customer => CUSTOMER_AVATARS,
    };
    palette[id.rem_euclid(palette.len() as i64) as usize]
}

/// Avatar colour for the nth entry of the activity feed
pub fn activity_color(index: usize) -> &'static str {
    ACTIVITY_AVATARS[index % ACTIVITY_AVATARS.len()]
}

// ============================================================================
// Time
// ============================================================================

/// Parse a backend timestamp (RFC 3339, or naive `YYYY-MM-DD HH:MM:SS` taken as UTC)
pub fn parse_timestamp(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    use chrono::{DateTime, NaiveDateTime, Utc};

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Relative time ("Just now", "5 minutes ago", ...) between `then` and `now`
pub fn time_ago(then: chrono::DateTime<chrono::Utc>, now: chrono::DateTime<chrono::Utc>) -> String {
    let minutes = (now - then).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    let plural = |n: i64, unit: &str| {
        if n > 1 {
            format!("{n} {unit}s ago")
        } else {
            format!("{n} {unit} ago")
        }
    };

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

// ============================================================================
// Tests
// ============================================================================
