//! Catalog filter engine.
//!
//! Category and search predicates are independent pure filters combined with
//! AND, so the order they run in never changes the result. Relative product
//! order is always preserved.

use storefront_models::{Category, Product};

/// Normalized (trimmed, lower-cased) search text. Empty means "no restriction".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize raw input from the search box.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Whether the term imposes no restriction.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the visible subset of `all`.
///
/// An empty `selected` slice or an empty `term` disables that predicate.
#[must_use]
pub fn filter_products<'a>(
    all: &'a [Product],
    selected: &[Category],
    term: &SearchTerm,
) -> Vec<&'a Product> {
    all.iter()
        .filter(|product| matches_category(product, selected))
        .filter(|product| matches_term(product, term))
        .collect()
}

fn matches_category(product: &Product, selected: &[Category]) -> bool {
    selected.is_empty() || selected.contains(&product.category)
}

fn matches_term(product: &Product, term: &SearchTerm) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.as_str();
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Cotton Shirt", "men's clothing").with_description("Slim fit"),
            Product::new(2, "USB Drive", "electronics").with_description("Fits in a SHIRT pocket"),
            Product::new(3, "Gold Ring", "jewelery").with_description("Polished"),
            Product::new(4, "Monitor", "electronics").with_description("27 inch IPS"),
            Product::new(5, "Rain Jacket", "women's clothing")
                .with_description("Shirt-weight shell"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|product| product.id.0).collect()
    }

    #[test]
    fn no_restrictions_returns_catalog_unchanged() {
        let all = catalog();
        let visible = filter_products(&all, &[], &SearchTerm::default());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_filter_keeps_members_in_order() {
        let all = catalog();
        let selected = [Category::from("jewelery"), Category::from("electronics")];
        let visible = filter_products(&all, &selected, &SearchTerm::default());
        assert_eq!(ids(&visible), vec![2, 3, 4]);
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let all = catalog();
        let visible = filter_products(&all, &[], &SearchTerm::new("  ShIrT "));
        assert_eq!(ids(&visible), vec![1, 2, 5]);
    }

    #[test]
    fn combined_filters_equal_the_intersection() {
        let all = catalog();
        let selected = [Category::from("electronics")];
        let term = SearchTerm::new("shirt");
        let combined = ids(&filter_products(&all, &selected, &term));
        let by_category = ids(&filter_products(&all, &selected, &SearchTerm::default()));
        let by_term = ids(&filter_products(&all, &[], &term));
        let intersection: Vec<u64> = by_category
            .into_iter()
            .filter(|id| by_term.contains(id))
            .collect();
        assert_eq!(combined, intersection);
        assert_eq!(combined, vec![2]);
    }

    #[test]
    fn empty_catalog_and_empty_result_are_valid() {
        assert!(filter_products(&[], &[], &SearchTerm::new("x")).is_empty());
        let all = catalog();
        assert!(filter_products(&all, &[], &SearchTerm::new("nothing matches")).is_empty());
    }

    #[test]
    fn search_term_normalizes_whitespace_and_case() {
        assert_eq!(SearchTerm::new("  MiXed  ").as_str(), "mixed");
        assert!(SearchTerm::new("   ").is_empty());
    }
}
