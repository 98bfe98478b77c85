//! Pure derivation pipeline: raw collection + control state -> rendered rows.
//!
//! Every stage recomputes from its input. Nothing here caches or patches a
//! previously derived collection, so a change to any control value always
//! flows from the authoritative raw collection.

use shared::domain::{Product, SortDirection};

/// The three independent control values driving derivation. Owned by the
/// presenter and mutated only through the control handlers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub selected_category: String,
    pub sort_direction: SortDirection,
}

impl FilterState {
    /// Return every control to its default in one step. Applying this twice
    /// yields the same state as applying it once.
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.selected_category.clear();
        self.sort_direction = SortDirection::None;
    }
}

/// Case-insensitive substring match on title. An empty term matches every
/// record. Output preserves the input's relative order.
pub fn filter_by_title(products: &[Product], search_term: &str) -> Vec<Product> {
    if search_term.is_empty() {
        return products.to_vec();
    }
    let needle = search_term.to_lowercase();
    products
        .iter()
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Exact category match (case-sensitive, not substring). An empty selection
/// passes the input through unchanged; an unrecognized one yields an empty
/// result rather than an error.
pub fn filter_by_category(products: &[Product], selected_category: &str) -> Vec<Product> {
    if selected_category.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| product.category == selected_category)
        .cloned()
        .collect()
}

/// Stable price sort. `SortDirection::None` leaves the sequence exactly as
/// received instead of sorting with a constant comparator.
pub fn sort_by_price(mut products: Vec<Product>, direction: SortDirection) -> Vec<Product> {
    match direction {
        SortDirection::None => {}
        SortDirection::Ascending => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortDirection::Descending => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
    products
}

/// Full pipeline: title filter, then category filter over its output, then
/// the price sort. Search and category combine conjunctively; neither
/// constraint is dropped while both are active.
pub fn derive_rows(raw: &[Product], filter: &FilterState) -> Vec<Product> {
    let by_title = filter_by_title(raw, &filter.search_term);
    let by_category = filter_by_category(&by_title, &filter.selected_category);
    sort_by_price(by_category, filter.sort_direction)
}

/// Categories present in the raw collection, first-seen order. The source's
/// category set is open, so selector options come from the data rather than
/// a hard-coded list.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for product in products {
        if !categories.iter().any(|known| known == &product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
