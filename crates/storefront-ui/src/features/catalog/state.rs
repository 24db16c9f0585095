//! Catalog session state and pure reducers.
//!
//! # Design
//! - One explicit state object owns the view, catalog, and filters; views
//!   read it through selectors and never cache derived values.
//! - Catalog loads are tagged with a generation. Only the newest issued load
//!   may write results, so a late response cannot overwrite fresher state.
//! - A failed or empty load leaves the catalog empty, which is what makes the
//!   next entry into the shop fetch again.

use storefront_models::{Category, Product, ProductId};
use tracing::{debug, info, warn};

use crate::core::filter::{SearchTerm, filter_products};
use crate::features::catalog::source::CatalogLoad;

/// Message shown in place of the grid when products fail to load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Top-level view currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    /// Marketing landing page.
    #[default]
    Landing,
    /// Product grid with filters.
    Shop,
}

/// Progress of the catalog load for this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load with the given generation is in flight.
    Loading {
        /// Generation of the in-flight load.
        generation: u64,
    },
    /// Products are available (possibly zero of them).
    Ready,
    /// The product request failed; holds the user-facing message.
    Failed(String),
}

/// Permission to apply the results of one catalog load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    /// Generation this ticket was issued for.
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// Mutable catalog session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShopState {
    /// Active view.
    pub view: ViewState,
    /// Full catalog from the last successful load.
    pub products: Vec<Product>,
    /// Category labels from the last load.
    pub categories: Vec<Category>,
    /// Selected category filters in insertion order.
    pub selected: Vec<Category>,
    /// Normalized search term.
    pub search: SearchTerm,
    /// Catalog load progress.
    pub status: LoadStatus,
    /// Generation of the most recently issued load.
    pub generation: u64,
}

/// Switch the active view. Returns a ticket when the caller must start a load.
///
/// Entering the shop with an empty catalog issues a load unless one is already
/// in flight. Every other transition only changes visibility.
pub fn navigate(state: &mut ShopState, target: ViewState) -> Option<LoadTicket> {
    if state.view != target {
        debug!(from = ?state.view, to = ?target, "view change");
    }
    state.view = target;
    let needs_load = target == ViewState::Shop
        && state.products.is_empty()
        && !matches!(state.status, LoadStatus::Loading { .. });
    needs_load.then(|| begin_load(state))
}

/// Mark a new load as in flight and return its ticket.
pub fn begin_load(state: &mut ShopState) -> LoadTicket {
    state.generation += 1;
    let generation = state.generation;
    state.status = LoadStatus::Loading { generation };
    info!(generation, "catalog load started");
    LoadTicket { generation }
}

/// Apply a finished load. Returns `false` when the ticket is stale.
pub fn apply_catalog_load(state: &mut ShopState, ticket: LoadTicket, load: CatalogLoad) -> bool {
    if ticket.generation != state.generation {
        debug!(
            stale = ticket.generation,
            current = state.generation,
            "discarding stale catalog load"
        );
        return false;
    }
    state.categories = load.categories;
    match load.products {
        Ok(products) => {
            state.products = products;
            state.status = LoadStatus::Ready;
        }
        Err(err) => {
            warn!(error = %err, generation = ticket.generation, "catalog unavailable");
            state.products.clear();
            state.status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
        }
    }
    true
}

/// Fail a load that was issued but could not be started. The catalog stays
/// empty, so the next entry into the shop retries. Returns `false` when the
/// ticket is stale.
pub fn abort_load(state: &mut ShopState, ticket: LoadTicket, reason: &str) -> bool {
    if ticket.generation != state.generation {
        return false;
    }
    warn!(generation = ticket.generation, reason, "load aborted");
    state.status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
    true
}

/// Add `category` to the filter set if absent, remove it if present.
/// Returns the new membership.
pub fn toggle_category(state: &mut ShopState, category: &Category) -> bool {
    if let Some(index) = state.selected.iter().position(|item| item == category) {
        state.selected.remove(index);
        false
    } else {
        state.selected.push(category.clone());
        true
    }
}

/// Replace the search term with normalized `raw` input.
pub fn set_search(state: &mut ShopState, raw: &str) {
    state.search = SearchTerm::new(raw);
}

/// Whether `category` is an active filter.
#[must_use]
pub fn is_selected(state: &ShopState, category: &Category) -> bool {
    state.selected.contains(category)
}

/// Products passing the current category and search filters.
#[must_use]
pub fn visible_products(state: &ShopState) -> Vec<&Product> {
    filter_products(&state.products, &state.selected, &state.search)
}

/// Look up a product in the loaded catalog.
#[must_use]
pub fn find_product(state: &ShopState, id: ProductId) -> Option<&Product> {
    state.products.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::source::load_catalog;
    use crate::features::catalog::testing::{ScriptedSource, status_error};

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Silk Shirt", "women's clothing"),
            Product::new(2, "SSD", "electronics").with_description("Ships in a shirt-box"),
            Product::new(3, "Laptop", "electronics"),
        ]
    }

    fn ready_state() -> ShopState {
        let mut state = ShopState::default();
        let ticket = navigate(&mut state, ViewState::Shop).expect("first entry loads");
        let load = CatalogLoad {
            products: Ok(products()),
            categories: vec![Category::from("electronics")],
        };
        assert!(apply_catalog_load(&mut state, ticket, load));
        state
    }

    #[test]
    fn starts_on_landing_without_loading() {
        let mut state = ShopState::default();
        assert_eq!(state.view, ViewState::Landing);
        assert!(navigate(&mut state, ViewState::Landing).is_none());
        assert_eq!(state.status, LoadStatus::Idle);
    }

    #[test]
    fn loaded_catalog_is_not_refetched() {
        let mut state = ready_state();
        assert!(navigate(&mut state, ViewState::Landing).is_none());
        assert!(navigate(&mut state, ViewState::Shop).is_none());
        assert!(navigate(&mut state, ViewState::Shop).is_none());
        assert_eq!(state.products.len(), 3);
    }

    #[test]
    fn in_flight_load_is_not_restarted() {
        let mut state = ShopState::default();
        let ticket = navigate(&mut state, ViewState::Shop).expect("load issued");
        navigate(&mut state, ViewState::Landing);
        assert!(navigate(&mut state, ViewState::Shop).is_none());
        assert_eq!(
            state.status,
            LoadStatus::Loading {
                generation: ticket.generation(),
            }
        );
    }

    #[tokio::test]
    async fn first_entry_shows_full_unfiltered_catalog() {
        let mut state = ShopState::default();
        let ticket = navigate(&mut state, ViewState::Shop).expect("load issued");
        let source = ScriptedSource::ok(products(), &["electronics", "women's clothing"]);
        let load = load_catalog(&source).await;
        assert!(apply_catalog_load(&mut state, ticket, load));
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.categories.len(), 2);
        assert_eq!(visible_products(&state).len(), 3);
    }

    #[tokio::test]
    async fn failed_load_shows_error_and_retries_on_reentry() {
        let mut state = ShopState::default();
        let ticket = navigate(&mut state, ViewState::Shop).expect("load issued");
        let source = ScriptedSource {
            products: Err(status_error(502)),
            categories: Ok(vec![Category::from("jewelery")]),
        };
        let load = load_catalog(&source).await;
        assert!(apply_catalog_load(&mut state, ticket, load));
        let failed = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
        assert_eq!(state.status, failed);
        assert_eq!(state.categories, vec![Category::from("jewelery")]);

        navigate(&mut state, ViewState::Landing);
        let retry = navigate(&mut state, ViewState::Shop).expect("retry issued");
        assert!(retry.generation() > ticket.generation());
    }

    #[test]
    fn aborted_load_shows_error_and_retries_on_reentry() {
        let mut state = ShopState::default();
        let ticket = navigate(&mut state, ViewState::Shop).expect("load issued");
        assert!(abort_load(&mut state, ticket, "no catalog client"));
        let failed = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
        assert_eq!(state.status, failed);

        navigate(&mut state, ViewState::Landing);
        let retry = navigate(&mut state, ViewState::Shop).expect("retry issued");
        assert!(retry.generation() > ticket.generation());
    }

    #[test]
    fn stale_abort_leaves_newer_load_running() {
        let mut state = ShopState::default();
        let old = begin_load(&mut state);
        let fresh = begin_load(&mut state);
        assert!(!abort_load(&mut state, old, "superseded"));
        assert_eq!(
            state.status,
            LoadStatus::Loading {
                generation: fresh.generation(),
            }
        );
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut state = ShopState::default();
        let old = begin_load(&mut state);
        let fresh = begin_load(&mut state);
        let fresh_load = CatalogLoad {
            products: Ok(products()),
            categories: Vec::new(),
        };
        assert!(apply_catalog_load(&mut state, fresh, fresh_load));
        let stale_load = CatalogLoad {
            products: Err(status_error(500)),
            categories: Vec::new(),
        };
        assert!(!apply_catalog_load(&mut state, old, stale_load));
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.products.len(), 3);
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut state = ready_state();
        let electronics = Category::from("electronics");
        let jewelery = Category::from("jewelery");
        assert!(toggle_category(&mut state, &electronics));
        assert!(toggle_category(&mut state, &jewelery));
        assert_eq!(state.selected, vec![electronics.clone(), jewelery.clone()]);
        assert!(!toggle_category(&mut state, &electronics));
        assert_eq!(state.selected, vec![jewelery]);
        assert!(!is_selected(&state, &electronics));
    }

    #[test]
    fn category_then_search_intersects() {
        let mut state = ready_state();
        toggle_category(&mut state, &Category::from("electronics"));
        set_search(&mut state, "shirt");
        let ids: Vec<u64> = visible_products(&state).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn find_product_looks_up_by_id() {
        let state = ready_state();
        let title = find_product(&state, ProductId(3)).map(|p| p.title.as_str());
        assert_eq!(title, Some("Laptop"));
        assert!(find_product(&state, ProductId(99)).is_none());
    }
}
