use super::*;
use shared::domain::ProductId;

fn product(id: i64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId(id),
        title: title.to_string(),
        price,
        category: category.to_string(),
        image: format!("https://img.example/{id}.png"),
    }
}

fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Slim Fit Shirt", 20.0, "men's clothing"),
        product(2, "Gold Necklace", 50.0, "jewelery"),
        product(3, "Silver Ring", 10.0, "jewelery"),
        product(4, "USB-C Hub", 35.5, "electronics"),
        product(5, "Rain Jacket", 20.0, "women's clothing"),
    ]
}

fn ids(products: &[Product]) -> Vec<i64> {
    products.iter().map(|product| product.id.0).collect()
}

fn is_order_preserving_subsequence(needle: &[Product], haystack: &[Product]) -> bool {
    let mut candidates = haystack.iter();
    needle
        .iter()
        .all(|record| candidates.any(|candidate| candidate == record))
}

#[test]
fn empty_search_term_matches_everything() {
    let raw = sample_catalog();
    assert_eq!(filter_by_title(&raw, ""), raw);
}

#[test]
fn title_filter_is_case_insensitive_substring() {
    let raw = sample_catalog();
    assert_eq!(ids(&filter_by_title(&raw, "SHIRT")), vec![1]);
    assert_eq!(ids(&filter_by_title(&raw, "nec")), vec![2]);
    assert_eq!(ids(&filter_by_title(&raw, "usb-c")), vec![4]);
}

#[test]
fn title_filter_output_is_an_order_preserving_subsequence() {
    let raw = sample_catalog();
    for term in ["", "i", "e", "ring", "zzz-no-match", "S"] {
        let hits = filter_by_title(&raw, term);
        assert!(
            is_order_preserving_subsequence(&hits, &raw),
            "term {term:?} broke relative order"
        );
    }
}

#[test]
fn category_filter_is_exact_and_case_sensitive() {
    let raw = sample_catalog();
    let hits = filter_by_category(&raw, "electronics");
    assert!(hits.iter().all(|product| product.category == "electronics"));
    assert_eq!(ids(&hits), vec![4]);

    assert!(filter_by_category(&raw, "Electronics").is_empty());
    // A substring of a real category is not a match either.
    assert!(filter_by_category(&raw, "clothing").is_empty());
}

#[test]
fn empty_category_selection_passes_input_through() {
    let raw = sample_catalog();
    assert_eq!(filter_by_category(&raw, "").len(), raw.len());
}

#[test]
fn unknown_category_yields_empty_rows_without_error() {
    let raw = sample_catalog();
    assert!(filter_by_category(&raw, "furniture").is_empty());
}

#[test]
fn ascending_sort_never_decreases_price_between_adjacent_rows() {
    let rows = sort_by_price(sample_catalog(), SortDirection::Ascending);
    for pair in rows.windows(2) {
        assert!(pair[0].price <= pair[1].price);
    }
}

#[test]
fn descending_sort_never_increases_price_between_adjacent_rows() {
    let rows = sort_by_price(sample_catalog(), SortDirection::Descending);
    for pair in rows.windows(2) {
        assert!(pair[0].price >= pair[1].price);
    }
}

#[test]
fn none_sort_is_a_strict_no_op() {
    // Records 1 and 5 share a price, so a constant-comparator "sort" could
    // still look order-preserving; require exact input order instead.
    let raw = sample_catalog();
    assert_eq!(sort_by_price(raw.clone(), SortDirection::None), raw);
}

#[test]
fn price_ties_keep_input_order_under_ascending_sort() {
    let rows = sort_by_price(sample_catalog(), SortDirection::Ascending);
    let shirt = rows.iter().position(|p| p.id.0 == 1).expect("shirt row");
    let jacket = rows.iter().position(|p| p.id.0 == 5).expect("jacket row");
    assert!(shirt < jacket);
}

#[test]
fn search_and_category_combine_conjunctively() {
    let raw = vec![
        product(1, "Shirt", 20.0, "men's clothing"),
        product(2, "Necklace", 50.0, "jewelery"),
        product(3, "Ring", 10.0, "jewelery"),
    ];

    let filter = FilterState {
        search_term: String::new(),
        selected_category: "jewelery".to_string(),
        sort_direction: SortDirection::Ascending,
    };
    assert_eq!(ids(&derive_rows(&raw, &filter)), vec![3, 2]);

    // Both constraints active at once: neither may be dropped.
    let filter = FilterState {
        search_term: "ring".to_string(),
        selected_category: "jewelery".to_string(),
        sort_direction: SortDirection::None,
    };
    assert_eq!(ids(&derive_rows(&raw, &filter)), vec![3]);
}

#[test]
fn no_match_search_derives_empty_rows() {
    let raw = sample_catalog();
    let filter = FilterState {
        search_term: "zzz-no-match".to_string(),
        ..FilterState::default()
    };
    assert!(derive_rows(&raw, &filter).is_empty());
}

#[test]
fn reset_is_idempotent_and_restores_raw_order() {
    let raw = sample_catalog();
    let mut filter = FilterState {
        search_term: "ring".to_string(),
        selected_category: "jewelery".to_string(),
        sort_direction: SortDirection::Descending,
    };

    filter.reset();
    let after_first_reset = filter.clone();
    filter.reset();
    assert_eq!(filter, after_first_reset);
    assert_eq!(filter, FilterState::default());
    assert_eq!(derive_rows(&raw, &filter), raw);
}

#[test]
fn reapplying_the_same_control_value_is_idempotent() {
    let raw = sample_catalog();
    let mut filter = FilterState::default();
    filter.search_term = "shirt".to_string();
    let first = derive_rows(&raw, &filter);
    filter.search_term = "shirt".to_string();
    assert_eq!(derive_rows(&raw, &filter), first);
}

#[test]
fn distinct_categories_keeps_first_seen_order() {
    let raw = sample_catalog();
    assert_eq!(
        distinct_categories(&raw),
        vec![
            "men's clothing",
            "jewelery",
            "electronics",
            "women's clothing"
        ]
    );
    assert!(distinct_categories(&[]).is_empty());
}
