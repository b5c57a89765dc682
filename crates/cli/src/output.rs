//! Plain-text rendering of listings
//!
//! Every function returns a `String`; `main` decides where it goes.

use champa_catalog::{ADMIN_DESC_LIMIT, CARD_DESC_LIMIT, DashboardView, PageInfo, SearchEntry, View};
use champa_core::{
    Account, AccountKind, Product, ProductRecord, account_status, category_label, role_label,
    stock_badge, truncate_chars,
};
use colored::Colorize;
use std::fmt::Write;

/// Footer line under a listing
pub fn footer<T>(view: &View<'_, T>) -> String {
    match view.info {
        PageInfo::Numbered {
            page,
            total_pages,
            showing_from,
            showing_to,
            showing_total,
            ..
        } => format!(
            "Showing {showing_from}-{showing_to} of {showing_total} (page {page}/{})",
            total_pages.max(1)
        ),
        PageInfo::RevealAll { hidden: 0 } => format!("{} products", view.matched),
        PageInfo::RevealAll { hidden } => {
            format!("{} products, {hidden} more hidden (use --all)", view.matched)
        }
    }
}

pub fn catalog(view: &View<'_, Product>) -> String {
    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "No products found");
    }
    for product in &view.items {
        let _ = writeln!(
            out,
            "{:>4}  {}  [{}]  {}",
            product.id,
            product.title.bold(),
            category_label(&product.effective_category()),
            product.price
        );
        if !product.desc.is_empty() {
            let _ = writeln!(out, "      {}", truncate_chars(&product.desc, CARD_DESC_LIMIT).dimmed());
        }
    }
    out.push_str(&footer(view));
    out
}

pub fn search_results(results: &[SearchEntry]) -> String {
    if results.is_empty() {
        return "No results".to_string();
    }
    results
        .iter()
        .map(|entry| format!("{}  ({})", entry.title, entry.label))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn accounts(view: &View<'_, Account>, kind: AccountKind) -> String {
    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "No accounts found");
    }
    for account in &view.items {
        let status = account_status(&account.role, kind);
        let status = if status == "Active" {
            status.green()
        } else {
            status.red()
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<20}  {:<14}  {:<12}  {}",
            account.id,
            account.username,
            account.phone.as_deref().unwrap_or("-"),
            role_label(&account.role),
            status
        );
    }
    out.push_str(&footer(view));
    out
}

pub fn admin_products(view: &View<'_, ProductRecord>) -> String {
    let mut out = String::new();
    if view.is_empty() {
        let _ = writeln!(out, "No products found");
    }
    for record in &view.items {
        let _ = writeln!(
            out,
            "{:>4}  {}  {:>10}  stock {} ({})  {}",
            record.id,
            record.name.bold(),
            champa_catalog::dashboard::group_thousands(record.price.round() as i64),
            record.stock.unwrap_or(0),
            stock_badge(record.stock),
            truncate_chars(record.description.as_deref().unwrap_or(""), ADMIN_DESC_LIMIT)
        );
    }
    out.push_str(&footer(view));
    out
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Users     {}", view.total_users);
    let _ = writeln!(out, "Products  {}", view.total_products);
    let _ = writeln!(out, "Orders    {}", view.total_orders);
    let _ = writeln!(out, "Revenue   {}", view.revenue);

    for (title, series) in [
        ("Revenue by month", &view.revenue_series),
        ("Orders by day", &view.orders_series),
    ] {
        let _ = writeln!(out, "\n{} (axis {})", title.bold(), series.axis_max);
        for (label, value) in series.labels.iter().zip(&series.values) {
            let width = (series.fraction(*value) * 30.0).round() as usize;
            let _ = writeln!(out, "  {:<6} {:<30} {}", label, "#".repeat(width), value);
        }
    }

    let _ = writeln!(out, "\n{}", "Recent activity".bold());
    if view.activities.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for line in &view.activities {
        let _ = writeln!(out, "  {}  ({})", line.text, line.when);
    }
    out.trim_end().to_string()
}
