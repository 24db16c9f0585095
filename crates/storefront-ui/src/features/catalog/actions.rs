//! Catalog feature actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use storefront_models::{Category, ProductId};

use crate::features::catalog::state::ViewState;

/// Navigation controls that switch the top-level view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    /// "Home" link in the header.
    Home,
    /// Store logo.
    Logo,
    /// "Shop" link in the header.
    Shop,
    /// "Shop now" call-to-action on the landing page.
    ShopNow,
}

impl NavIntent {
    /// View the intent navigates to.
    #[must_use]
    pub const fn target(self) -> ViewState {
        match self {
            Self::Home | Self::Logo => ViewState::Landing,
            Self::Shop | Self::ShopNow => ViewState::Shop,
        }
    }

    /// Whether the viewport should also scroll back to the top.
    #[must_use]
    pub const fn scrolls_to_top(self) -> bool {
        matches!(self, Self::ShopNow)
    }
}

/// Interactions raised from the shop grid and filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShopAction {
    /// Toggle a category filter tag.
    ToggleCategory(Category),
    /// Flip wishlist membership for a product.
    ToggleWishlist(ProductId),
    /// Quick add-to-cart from a card.
    AddToCart(ProductId),
    /// Open the detail modal for a product.
    OpenDetail(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_map_to_views() {
        assert_eq!(NavIntent::Home.target(), ViewState::Landing);
        assert_eq!(NavIntent::Logo.target(), ViewState::Landing);
        assert_eq!(NavIntent::Shop.target(), ViewState::Shop);
        assert_eq!(NavIntent::ShopNow.target(), ViewState::Shop);
    }

    #[test]
    fn only_shop_now_scrolls() {
        assert!(NavIntent::ShopNow.scrolls_to_top());
        assert!(!NavIntent::Shop.scrolls_to_top());
        assert!(!NavIntent::Home.scrolls_to_top());
    }
}
