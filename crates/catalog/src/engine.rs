//! Filter, search and paginate engine
//!
//! Derives the exact ordered sub-list to render from a full record list and
//! a [`FilterState`]. Filters combine with logical AND and never reorder;
//! deriving twice from the same inputs yields the same output.

use champa_core::{Account, Category, Product, ProductRecord};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// Category selector that matches every record
pub const ALL: &str = "all";

// ============================================================================
// Listable Trait
// ============================================================================

/// A record the engine can filter
pub trait Listable {
    /// Primary display text (title or name)
    fn title(&self) -> &str;

    /// Texts searched by the free-text term; the title by default
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title()]
    }

    /// Category compared against the category selector
    fn category(&self) -> Option<Cow<'_, str>>;

    /// Whether the record passes a non-`all` category selector
    fn category_matches(&self, selector: &str) -> bool {
        self.category().as_deref() == Some(selector)
    }

    /// Secondary attribute (collar type), already trimmed
    fn attribute(&self) -> &str {
        ""
    }
}

impl Listable for Product {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(self.effective_category())
    }

    fn attribute(&self) -> &str {
        self.collar()
    }
}

impl Listable for ProductRecord {
    fn title(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.description.as_deref());
        fields
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        self.category.as_deref().map(Cow::Borrowed)
    }

    fn category_matches(&self, selector: &str) -> bool {
        self.category
            .as_deref()
            .unwrap_or("")
            .eq_ignore_ascii_case(selector)
    }

    fn attribute(&self) -> &str {
        self.price_type.as_deref().map(str::trim).unwrap_or("")
    }
}

impl Listable for Account {
    fn title(&self) -> &str {
        &self.username
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.username.as_str()];
        fields.extend(self.phone.as_deref());
        fields
    }

    fn category(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&self.role))
    }
}

// ============================================================================
// Filter State
// ============================================================================

/// How the filtered list is cut for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paging {
    /// Fixed-size numbered pages, 1-based
    Numbered { page: usize, size: usize },
    /// First `initial` records, then everything once revealed
    RevealAll { initial: usize, revealed: bool },
}

impl Default for Paging {
    fn default() -> Self {
        Paging::Numbered { page: 1, size: 10 }
    }
}

/// Typed view state of one listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Category selector; [`ALL`] disables the filter
    pub category: String,
    /// Free-text term, case-insensitive substring
    pub search: String,
    /// Exact secondary attribute; empty disables the filter
    pub attribute: String,
    pub paging: Paging,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            search: String::new(),
            attribute: String::new(),
            paging: Paging::default(),
        }
    }
}

impl FilterState {
    /// Numbered pages of `size` records
    pub fn paged(size: usize) -> Self {
        Self {
            paging: Paging::Numbered { page: 1, size },
            ..Self::default()
        }
    }

    /// Reveal-all listing showing `initial` records first
    pub fn reveal_all(initial: usize) -> Self {
        Self {
            paging: Paging::RevealAll {
                initial,
                revealed: false,
            },
            ..Self::default()
        }
    }

    /// Change the category and go back to the first page
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        self.category = if category.is_empty() {
            ALL.to_string()
        } else {
            category
        };
        self.restart();
    }

    /// Change the search term and go back to the first page
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.restart();
    }

    /// Change the secondary attribute and go back to the first page
    pub fn set_attribute(&mut self, attribute: impl Into<String>) {
        let attribute = attribute.into();
        self.attribute = if attribute == ALL {
            String::new()
        } else {
            attribute
        };
        self.restart();
    }

    /// Change the page size (numbered mode) and go back to the first page
    pub fn set_page_size(&mut self, size: usize) {
        if let Paging::Numbered { size: current, .. } = &mut self.paging {
            *current = size.max(1);
        }
        self.restart();
    }

    /// Jump to a page (numbered mode); clamped when the view is derived
    pub fn go_to_page(&mut self, page: usize) {
        if let Paging::Numbered { page: current, .. } = &mut self.paging {
            *current = page.max(1);
        }
    }

    /// Expand a reveal-all listing
    pub fn reveal(&mut self) {
        if let Paging::RevealAll { revealed, .. } = &mut self.paging {
            *revealed = true;
        }
    }

    /// Apply `?filter=` / `?search=` link parameters
    ///
    /// Unknown filters are ignored. A search term pre-filters the listing
    /// and shows every match at once.
    pub fn apply_link(&mut self, filter: Option<&str>, search: Option<&str>) {
        if let Some(filter) = filter.filter(|f| *f == ALL || Category::parse(f).is_some()) {
            self.set_category(filter);
        }
        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            self.set_search(term);
            self.reveal();
        }
    }

    /// Back to page 1 / collapsed
    fn restart(&mut self) {
        match &mut self.paging {
            Paging::Numbered { page, .. } => *page = 1,
            Paging::RevealAll { revealed, .. } => *revealed = false,
        }
    }

    /// Whether a record passes every active filter
    pub fn matches<T: Listable + ?Sized>(&self, record: &T) -> bool {
        let category_ok = self.category == ALL || record.category_matches(&self.category);
        if !category_ok {
            return false;
        }

        let term = self.search.trim().to_lowercase();
        let search_ok = term.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term));
        if !search_ok {
            return false;
        }

        let attribute = self.attribute.trim();
        attribute.is_empty() || record.attribute() == attribute
    }
}

// ============================================================================
// Derived View
// ============================================================================

/// Position of the derived page within the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageInfo {
    Numbered {
        /// Current page after clamping
        page: usize,
        total_pages: usize,
        /// 1-based index of the first shown record, 0 when empty
        showing_from: usize,
        showing_to: usize,
        showing_total: usize,
        has_prev: bool,
        has_next: bool,
    },
    RevealAll {
        /// Records held back behind the reveal control
        hidden: usize,
    },
}

/// The records to render plus paging information
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a, T> {
    pub items: Vec<&'a T>,
    /// Number of records that passed the filters
    pub matched: usize,
    pub info: PageInfo,
}

impl<'a, T: Clone> View<'a, T> {
    /// Owned copies of the visible records
    pub fn cloned_items(&self) -> Vec<T> {
        self.items.iter().map(|item| (*item).clone()).collect()
    }
}

impl<T> View<'_, T> {
    /// Records hidden behind a reveal-all control
    pub fn hidden(&self) -> usize {
        match self.info {
            PageInfo::RevealAll { hidden } => hidden,
            PageInfo::Numbered { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Derive the view of `records` under `state`
pub fn derive_view<'a, T: Listable>(records: &'a [T], state: &FilterState) -> View<'a, T> {
    derive_view_where(records, state, |_| true)
}

/// Derive the view with an extra predicate ANDed onto the filters
pub fn derive_view_where<'a, T: Listable>(
    records: &'a [T],
    state: &FilterState,
    extra: impl Fn(&T) -> bool,
) -> View<'a, T> {
    let filtered: Vec<&T> = records
        .iter()
        .filter(|record| state.matches(*record) && extra(*record))
        .collect();
    let matched = filtered.len();

    let (items, info) = match state.paging {
        Paging::Numbered { page, size } => paginate(filtered, page, size),
        Paging::RevealAll { initial, revealed } => {
            if revealed || matched <= initial {
                (filtered, PageInfo::RevealAll { hidden: 0 })
            } else {
                let mut shown = filtered;
                shown.truncate(initial);
                (
                    shown,
                    PageInfo::RevealAll {
                        hidden: matched - initial,
                    },
                )
            }
        }
    };

    debug!(
        "Derived view: {} of {} records matched, {} shown",
        matched,
        records.len(),
        items.len()
    );

    View {
        items,
        matched,
        info,
    }
}

fn paginate<T>(filtered: Vec<&T>, page: usize, size: usize) -> (Vec<&T>, PageInfo) {
    let size = size.max(1);
    let total = filtered.len();
    let total_pages = total.div_ceil(size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * size;
    let end = (start + size).min(total);
    let items: Vec<&T> = filtered.into_iter().skip(start).take(end - start).collect();

    let info = PageInfo::Numbered {
        page,
        total_pages,
        showing_from: if total > 0 { start + 1 } else { 0 },
        showing_to: end,
        showing_total: total,
        has_prev: page > 1,
        has_next: page < total_pages,
    };
    (items, info)
}

/// Page numbers to offer in a pager, at most `window` around `current`
pub fn page_window(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 || window == 0 {
        return Vec::new();
    }
    let window = window.min(total_pages);
    let half = window / 2;
    let start = current
        .saturating_sub(half)
        .clamp(1, total_pages - window + 1);
    (start..start + window).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_products;
    use pretty_assertions::assert_eq;

    fn ids<T: champa_core::Identifiable>(view: &View<'_, T>) -> Vec<i64> {
        view.items.iter().map(|item| item.id()).collect()
    }

    fn many(n: i64) -> Vec<Product> {
        (1..=n)
            .map(|id| {
                let mut product = Product::new(id, format!("Shirt {id}"));
                product.kind = Some("football".to_string());
                product
            })
            .collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let seed = seed_products();
        let state = FilterState::reveal_all(10);
        let view = derive_view(&seed, &state);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(view.hidden(), 0);
    }

    #[test]
    fn test_category_uses_derived_category() {
        let seed = seed_products();
        let mut state = FilterState::reveal_all(10);
        state.set_category("jersey");
        assert_eq!(ids(&derive_view(&seed, &state)), vec![1, 5]);

        state.set_category("event");
        assert_eq!(ids(&derive_view(&seed, &state)), vec![2, 6]);

        state.set_category("company");
        assert!(derive_view(&seed, &state).is_empty());
    }

    #[test]
    fn test_explicit_category_wins() {
        let mut product = Product::new(1, "Polo");
        product.kind = Some("football".to_string());
        product.category = Some("company".to_string());
        let list = vec![product];

        let mut state = FilterState::reveal_all(10);
        state.set_category("company");
        assert_eq!(derive_view(&list, &state).matched, 1);
        state.set_category("jersey");
        assert_eq!(derive_view(&list, &state).matched, 0);
    }

    #[test]
    fn test_search_is_case_insensitive_and_empty_is_noop() {
        let seed = seed_products();
        let mut state = FilterState::reveal_all(10);

        state.set_search("");
        assert_eq!(derive_view(&seed, &state).matched, 6);

        state.set_search("  RUNNER ");
        assert_eq!(ids(&derive_view(&seed, &state)), vec![2, 6]);

        state.set_search("zzz");
        let view = derive_view(&seed, &state);
        assert!(view.is_empty());
        assert_eq!(view.matched, 0);
    }

    #[test]
    fn test_attribute_is_exact_after_trim() {
        let mut a = Product::new(1, "A");
        a.price_type = Some(" ຄໍມົນ ".to_string());
        let mut b = Product::new(2, "B");
        b.price_type = Some("ຄໍວີ-ວີໄຂວ".to_string());
        let c = Product::new(3, "C");
        let list = vec![a, b, c];

        let mut state = FilterState::reveal_all(10);
        state.set_attribute("ຄໍມົນ");
        assert_eq!(ids(&derive_view(&list, &state)), vec![1]);

        state.set_attribute(ALL);
        assert_eq!(derive_view(&list, &state).matched, 3);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let seed = seed_products();
        let mut state = FilterState::reveal_all(10);
        state.set_category("event");
        state.set_search("blue");
        assert_eq!(ids(&derive_view(&seed, &state)), vec![6]);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let list = many(23);
        let mut state = FilterState::paged(5);
        state.set_search("1");
        state.go_to_page(2);
        let first = derive_view(&list, &state);
        let second = derive_view(&list, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_numbered_paging_bounds() {
        let list = many(23);
        let mut state = FilterState::paged(10);

        let view = derive_view(&list, &state);
        assert_eq!(
            view.info,
            PageInfo::Numbered {
                page: 1,
                total_pages: 3,
                showing_from: 1,
                showing_to: 10,
                showing_total: 23,
                has_prev: false,
                has_next: true,
            }
        );

        state.go_to_page(3);
        let view = derive_view(&list, &state);
        assert_eq!(ids(&view), vec![21, 22, 23]);
        assert!(matches!(
            view.info,
            PageInfo::Numbered { showing_from: 21, showing_to: 23, has_next: false, has_prev: true, .. }
        ));

        // Beyond the last page clamps to it
        state.go_to_page(99);
        let view = derive_view(&list, &state);
        assert!(matches!(view.info, PageInfo::Numbered { page: 3, .. }));
    }

    #[test]
    fn test_numbered_paging_empty() {
        let list: Vec<Product> = Vec::new();
        let view = derive_view(&list, &FilterState::paged(10));
        assert_eq!(
            view.info,
            PageInfo::Numbered {
                page: 1,
                total_pages: 1,
                showing_from: 0,
                showing_to: 0,
                showing_total: 0,
                has_prev: false,
                has_next: false,
            }
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = FilterState::paged(10);
        state.go_to_page(3);
        state.set_search("Shirt");
        assert_eq!(state.paging, Paging::Numbered { page: 1, size: 10 });
    }

    #[test]
    fn test_reveal_all_mode() {
        let list = many(14);
        let mut state = FilterState::reveal_all(10);

        let view = derive_view(&list, &state);
        assert_eq!(view.items.len(), 10);
        assert_eq!(view.hidden(), 4);

        state.reveal();
        let view = derive_view(&list, &state);
        assert_eq!(view.items.len(), 14);
        assert_eq!(view.hidden(), 0);

        // Changing the category collapses the listing again
        state.set_category(ALL);
        assert_eq!(derive_view(&list, &state).hidden(), 4);
    }

    #[test]
    fn test_record_search_covers_description_and_category_case() {
        let record = ProductRecord {
            id: 1,
            name: "Polo".to_string(),
            price: 10.0,
            stock: None,
            image: None,
            description: Some("Breathable mesh".to_string()),
            category: Some("Jersey".to_string()),
            price_type: Some("ຄໍໂປໂລ ".to_string()),
        };
        let list = vec![record];
        let mut state = FilterState::paged(10);
        state.set_search("MESH");
        state.set_category("jersey");
        state.set_attribute("ຄໍໂປໂລ");
        assert_eq!(derive_view(&list, &state).matched, 1);
    }

    #[test]
    fn test_extra_predicate() {
        let accounts = vec![
            Account { id: 1, username: "noy".into(), phone: Some("02055512345".into()), role: "customer".into() },
            Account { id: 2, username: "keo".into(), phone: None, role: "admin".into() },
        ];
        let mut state = FilterState::paged(10);
        state.set_search("555");
        assert_eq!(ids(&derive_view(&accounts, &state)), vec![1]);

        state.set_search("");
        let view = derive_view_where(&accounts, &state, |a| a.role != "customer");
        assert_eq!(ids(&view), vec![2]);
    }

    #[test]
    fn test_apply_link() {
        let seed = seed_products();
        let mut state = FilterState::reveal_all(2);
        state.apply_link(Some("jersey"), None);
        assert_eq!(ids(&derive_view(&seed, &state)), vec![1, 5]);

        state.apply_link(Some("nonsense"), None);
        assert_eq!(state.category, "jersey");

        let mut state = FilterState::reveal_all(1);
        state.apply_link(None, Some(" blue "));
        let view = derive_view(&seed, &state);
        assert_eq!(ids(&view), vec![1, 4, 6]);
        assert_eq!(view.hidden(), 0);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert!(page_window(1, 0, 5).is_empty());
    }
}
