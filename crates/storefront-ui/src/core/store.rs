//! App-wide yewdux store.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Cross-slice reducers (cart, wishlist) live here; slice-local ones live
//!   with their feature.

use storefront_models::ProductId;
use tracing::info;
use yewdux::store::Store;

use crate::core::wishlist::{KeyValueStore, Wishlist};
use crate::features::catalog::state::ShopState;
use crate::features::modal::state::{ModalState, close_modal};
use crate::models::ToastQueue;

/// Message shown after an add-to-cart.
pub const ADDED_TO_CART_MESSAGE: &str = "✅ Product added to cart!";

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Catalog session state.
    pub shop: ShopState,
    /// Persisted wishlist.
    pub wishlist: Wishlist,
    /// Detail modal.
    pub modal: ModalState,
    /// Visible notifications.
    pub toasts: ToastQueue,
}

/// Record an add-to-cart for `id` and raise the confirmation toast.
///
/// Cart contents are not tracked; this is a notification only.
pub fn add_to_cart(store: &mut AppStore, id: ProductId) -> u64 {
    info!(product_id = %id, "added to cart");
    store.toasts.push(ADDED_TO_CART_MESSAGE)
}

/// Add the product currently shown in the modal, then close the modal.
/// Returns the product added, or `None` when the modal was closed.
pub fn add_from_modal(store: &mut AppStore) -> Option<ProductId> {
    let id = store.modal.bound_product()?;
    add_to_cart(store, id);
    close_modal(&mut store.modal);
    Some(id)
}

/// Flip wishlist membership for `id`, persisting through `storage`.
pub fn toggle_wishlist(
    store: &mut AppStore,
    id: ProductId,
    storage: &mut impl KeyValueStore,
) -> bool {
    store.wishlist.toggle(id, storage)
}
