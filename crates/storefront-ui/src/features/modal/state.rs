//! Detail modal state.
//!
//! # Design
//! - The modal remembers only which product it shows; the detail content and
//!   the add-to-cart target are derived from that id on every render, so a
//!   previously opened product can never be acted on.
//! - Opening locks page scroll and every close path releases it.

use storefront_models::ProductId;
use tracing::debug;

use crate::core::render::{ProductDetail, build_detail};
use crate::features::catalog::state::{ShopState, find_product};

/// Open/closed state of the detail modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    product: Option<ProductId>,
    scroll_locked: bool,
}

impl ModalState {
    /// Whether the modal is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.product.is_some()
    }

    /// Whether page scroll should currently be locked.
    #[must_use]
    pub const fn scroll_locked(self) -> bool {
        self.scroll_locked
    }

    /// Product the modal's add-to-cart control acts on.
    #[must_use]
    pub const fn bound_product(self) -> Option<ProductId> {
        self.product
    }
}

/// Open the modal for `id`. Unknown products leave it untouched.
pub fn open_modal(modal: &mut ModalState, shop: &ShopState, id: ProductId) -> bool {
    if find_product(shop, id).is_none() {
        debug!(product_id = %id, "ignoring detail request for unknown product");
        return false;
    }
    modal.product = Some(id);
    modal.scroll_locked = true;
    true
}

/// Close the modal and release the scroll lock. Returns whether it was open.
pub const fn close_modal(modal: &mut ModalState) -> bool {
    let was_open = modal.product.take().is_some();
    modal.scroll_locked = false;
    was_open
}

/// Detail content for the product currently shown.
#[must_use]
pub fn modal_detail(modal: ModalState, shop: &ShopState) -> Option<ProductDetail> {
    modal
        .product
        .and_then(|id| find_product(shop, id))
        .map(build_detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_models::Product;

    fn shop() -> ShopState {
        ShopState {
            products: vec![
                Product::new(1, "Alpha", "electronics").with_price(10.0),
                Product::new(2, "", "jewelery").with_price(5.5),
            ],
            ..ShopState::default()
        }
    }

    #[test]
    fn open_binds_product_and_locks_scroll() {
        let shop = shop();
        let mut modal = ModalState::default();
        assert!(open_modal(&mut modal, &shop, ProductId(2)));
        assert!(modal.is_open());
        assert!(modal.scroll_locked());
        assert_eq!(modal.bound_product(), Some(ProductId(2)));

        let detail = modal_detail(modal, &shop).expect("detail");
        assert_eq!(detail.title, "Product");
        assert_eq!(detail.category, "JEWELERY");
        assert_eq!(detail.price, "$5.50");
    }

    #[test]
    fn unknown_product_is_ignored() {
        let mut modal = ModalState::default();
        assert!(!open_modal(&mut modal, &shop(), ProductId(42)));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn close_releases_lock_and_is_idempotent() {
        let shop = shop();
        let mut modal = ModalState::default();
        open_modal(&mut modal, &shop, ProductId(1));
        assert!(close_modal(&mut modal));
        assert!(!modal.scroll_locked());
        assert!(modal_detail(modal, &shop).is_none());
        assert!(!close_modal(&mut modal));
    }

    #[test]
    fn reopening_rebinds_to_latest_product() {
        let shop = shop();
        let mut modal = ModalState::default();
        open_modal(&mut modal, &shop, ProductId(1));
        close_modal(&mut modal);
        open_modal(&mut modal, &shop, ProductId(2));
        assert_eq!(modal.bound_product(), Some(ProductId(2)));
    }
}
