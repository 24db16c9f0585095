//! View models for the shop surface and the renderer seam.
//!
//! # Design
//! - [`build_shop_view`] turns session state plus the wishlist into a plain
//!   [`ShopView`]; it is stateless given its inputs.
//! - Wishlist flags are derived here on every render, never cached on cards.
//! - [`CatalogRenderer`] is the capability the shop paints through: the
//!   browser renders Yew `Html`, [`TextRenderer`] renders plain text.

use std::fmt::Write;

use storefront_models::{Category, Product, ProductId};

use crate::core::config::StorefrontConfig;
use crate::core::logic::{StarRating, category_label, format_price, truncate};
use crate::core::wishlist::Wishlist;
use crate::features::catalog::state::{LoadStatus, ShopState, is_selected, visible_products};

/// Title shown on cards for products without one.
pub const UNTITLED: &str = "Untitled";
/// Title shown in the modal for products without one.
pub const MODAL_FALLBACK_TITLE: &str = "Product";

/// Card truncation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderLimits {
    /// Maximum title characters.
    pub title: usize,
    /// Maximum description characters.
    pub description: usize,
}

impl From<&StorefrontConfig> for RenderLimits {
    fn from(config: &StorefrontConfig) -> Self {
        Self {
            title: config.title_limit,
            description: config.description_limit,
        }
    }
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self::from(&StorefrontConfig::default())
    }
}

/// One product card in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    /// Product the card's actions target.
    pub id: ProductId,
    /// Image URI.
    pub image: String,
    /// Image alt text (full title).
    pub alt: String,
    /// Truncated title.
    pub title: String,
    /// Truncated description.
    pub description: String,
    /// Star split for the rating row.
    pub stars: StarRating,
    /// Number of ratings.
    pub rating_count: u64,
    /// Formatted price.
    pub price: String,
    /// Wishlist membership at render time.
    pub wishlisted: bool,
}

/// Content of the detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDetail {
    /// Product the modal's add-to-cart targets.
    pub id: ProductId,
    /// Image URI.
    pub image: String,
    /// Title, or [`MODAL_FALLBACK_TITLE`].
    pub title: String,
    /// Upper-cased category label.
    pub category: String,
    /// Full description.
    pub description: String,
    /// Formatted price.
    pub price: String,
}

/// One category filter tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTag {
    /// Raw category the tag toggles.
    pub category: Category,
    /// Capitalized display label.
    pub label: String,
    /// Whether the category is currently selected.
    pub active: bool,
}

/// What the product grid region shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShopView {
    /// Catalog is loading.
    Loading,
    /// Product load failed; fatal message in place of the grid.
    Failed(String),
    /// Nothing matches (or the catalog is empty).
    Empty,
    /// Cards to paint, in catalog order.
    Grid(Vec<ProductCard>),
}

/// Capability for painting a [`ShopView`].
pub trait CatalogRenderer {
    /// Rendered representation.
    type Output;

    /// Paint the grid region.
    fn render(&self, view: &ShopView) -> Self::Output;
}

/// Build a card for `product`.
#[must_use]
pub fn build_card(product: &Product, wishlist: &Wishlist, limits: RenderLimits) -> ProductCard {
    let title = if product.title.is_empty() {
        UNTITLED
    } else {
        product.title.as_str()
    };
    ProductCard {
        id: product.id,
        image: product.image.clone(),
        alt: product.title.clone(),
        title: truncate(title, limits.title),
        description: truncate(&product.description, limits.description),
        stars: StarRating::from_rate(product.rating.rate),
        rating_count: product.rating.count,
        price: format_price(product.price),
        wishlisted: wishlist.has(product.id),
    }
}

/// Build modal content for `product`.
#[must_use]
pub fn build_detail(product: &Product) -> ProductDetail {
    let title = if product.title.is_empty() {
        MODAL_FALLBACK_TITLE.to_string()
    } else {
        product.title.clone()
    };
    ProductDetail {
        id: product.id,
        image: product.image.clone(),
        title,
        category: product.category.as_str().to_uppercase(),
        description: product.description.clone(),
        price: format_price(product.price),
    }
}

/// Build the grid view for the current session state.
#[must_use]
pub fn build_shop_view(state: &ShopState, wishlist: &Wishlist, limits: RenderLimits) -> ShopView {
    match &state.status {
        LoadStatus::Loading { .. } => ShopView::Loading,
        LoadStatus::Failed(message) => ShopView::Failed(message.clone()),
        LoadStatus::Idle | LoadStatus::Ready => {
            let cards: Vec<ProductCard> = visible_products(state)
                .into_iter()
                .map(|product| build_card(product, wishlist, limits))
                .collect();
            if cards.is_empty() {
                ShopView::Empty
            } else {
                ShopView::Grid(cards)
            }
        }
    }
}

/// Build the filter tags, in the order the API listed categories.
#[must_use]
pub fn build_category_tags(state: &ShopState) -> Vec<CategoryTag> {
    state
        .categories
        .iter()
        .map(|category| CategoryTag {
            category: category.clone(),
            label: category_label(category.as_str()),
            active: is_selected(state, category),
        })
        .collect()
}

/// Plain-text renderer used for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer;

impl CatalogRenderer for TextRenderer {
    type Output = String;

    fn render(&self, view: &ShopView) -> String {
        match view {
            ShopView::Loading => "[loading]".to_string(),
            ShopView::Failed(message) => format!("[error] {message}"),
            ShopView::Empty => "[no results]".to_string(),
            ShopView::Grid(cards) => {
                let mut out = String::new();
                for card in cards {
                    let heart = if card.wishlisted { "♥" } else { "♡" };
                    let stars = "★".repeat(usize::from(card.stars.filled()))
                        + &"☆".repeat(usize::from(card.stars.empty()));
                    let _ = writeln!(
                        out,
                        "#{} {heart} {} {stars} ({}) {}",
                        card.id, card.title, card.rating_count, card.price
                    );
                }
                out
            }
        }
    }
}
