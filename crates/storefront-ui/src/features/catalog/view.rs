//! Shop page: filter bar plus the product grid.

use crate::app::api::ApiCtx;
use crate::app::preferences::BrowserStorage;
use crate::components::atoms::empty_state::EmptyState;
use crate::components::atoms::search_input::SearchInput;
use crate::core::config::StorefrontConfig;
use crate::core::render::{
    CatalogRenderer, CategoryTag, ProductCard, RenderLimits, ShopView, build_category_tags,
    build_shop_view,
};
use crate::core::store::{AppStore, add_to_cart, toggle_wishlist};
use crate::features::catalog::actions::ShopAction;
use crate::features::catalog::source::load_catalog;
use crate::features::catalog::state::{
    ViewState, abort_load, apply_catalog_load, navigate, set_search, toggle_category,
};
use crate::features::modal::state::open_modal;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ShopPage)]
pub(crate) fn shop_page() -> Html {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let limits = RenderLimits::from(&config);
    let view = use_selector(move |store: &AppStore| {
        let wishlist = &store.wishlist;
        build_shop_view(&store.shop, wishlist, limits)
    });
    let tags = use_selector(|store: &AppStore| build_category_tags(&store.shop));
    let search = use_selector(|store: &AppStore| store.shop.search.as_str().to_string());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let mut ticket = None;
                dispatch.reduce_mut(|store| {
                    ticket = navigate(&mut store.shop, ViewState::Shop);
                });
                match (ticket, api_ctx) {
                    (Some(ticket), Some(ctx)) => spawn_local(async move {
                        let load = load_catalog(ctx.client.as_ref()).await;
                        dispatch.reduce_mut(|store| {
                            apply_catalog_load(&mut store.shop, ticket, load);
                        });
                    }),
                    (Some(ticket), None) => dispatch.reduce_mut(|store| {
                        abort_load(&mut store.shop, ticket, "no catalog client");
                    }),
                    (None, _) => {}
                }
                || ()
            },
            (),
        );
    }

    let on_action = {
        let dispatch = dispatch.clone();
        Callback::from(move |action: ShopAction| match action {
            ShopAction::ToggleCategory(category) => dispatch.reduce_mut(|store| {
                toggle_category(&mut store.shop, &category);
            }),
            ShopAction::ToggleWishlist(id) => dispatch.reduce_mut(|store| {
                toggle_wishlist(store, id, &mut BrowserStorage);
            }),
            ShopAction::AddToCart(id) => dispatch.reduce_mut(|store| {
                add_to_cart(store, id);
            }),
            ShopAction::OpenDetail(id) => dispatch.reduce_mut(|store| {
                open_modal(&mut store.modal, &store.shop, id);
            }),
        })
    };

    let on_search = Callback::from(move |raw: String| {
        dispatch.reduce_mut(|store| set_search(&mut store.shop, &raw));
    });

    let renderer = HtmlRenderer {
        on_action: on_action.clone(),
    };

    html! {
        <section class="shop-view">
            <div class="shop-toolbar">
                <SearchInput
                    initial={AttrValue::from((*search).clone())}
                    placeholder="Search products..."
                    aria_label="Search products"
                    debounce_ms={config.search_debounce_ms}
                    on_search={on_search}
                />
                <div class="category-tags">
                    {for tags.iter().map(|tag| render_tag(tag, &on_action))}
                </div>
            </div>
            {renderer.render(&view)}
        </section>
    }
}

fn render_tag(tag: &CategoryTag, on_action: &Callback<ShopAction>) -> Html {
    let onclick = {
        let category = tag.category.clone();
        on_action.reform(move |_: MouseEvent| ShopAction::ToggleCategory(category.clone()))
    };
    html! {
        <button
            class={classes!("category-tag", tag.active.then_some("active"))}
            data-category={tag.category.as_str().to_string()}
            aria-pressed={tag.active.to_string()}
            {onclick}>
            {tag.label.clone()}
        </button>
    }
}

/// Paints a [`ShopView`] as Yew markup, routing card clicks to `on_action`.
struct HtmlRenderer {
    on_action: Callback<ShopAction>,
}

impl CatalogRenderer for HtmlRenderer {
    type Output = Html;

    fn render(&self, view: &ShopView) -> Html {
        match view {
            ShopView::Loading => html! {
                <div class="loading-indicator" role="status" aria-live="polite">
                    <span class="loading loading-spinner"></span>
                    <span>{"Loading products..."}</span>
                </div>
            },
            ShopView::Failed(message) => html! {
                <div class="products-grid">
                    <div class="load-error">
                        <p>{message.clone()}</p>
                    </div>
                </div>
            },
            ShopView::Empty => html! {
                <EmptyState
                    title="No products found"
                    description="Try a different search or clear the category filters."
                    class={classes!("no-results")}
                />
            },
            ShopView::Grid(cards) => html! {
                <div class="products-grid">
                    {for cards.iter().map(|card| self.card(card))}
                </div>
            },
        }
    }
}

impl HtmlRenderer {
    fn card(&self, card: &ProductCard) -> Html {
        let id = card.id;
        let on_wishlist = self.on_action.reform(move |event: MouseEvent| {
            event.stop_propagation();
            ShopAction::ToggleWishlist(id)
        });
        let on_add = self.on_action.reform(move |event: MouseEvent| {
            event.stop_propagation();
            ShopAction::AddToCart(id)
        });
        let on_open = self
            .on_action
            .reform(move |_: MouseEvent| ShopAction::OpenDetail(id));
        let (heart, heart_alt) = if card.wishlisted {
            ("heart-solid", "Wishlisted")
        } else {
            ("heart-outline", "Not wishlisted")
        };

        html! {
            <div class="product-card" key={id.0} data-product-id={id.to_string()}>
                <button
                    class={classes!("wishlist-toggle", heart)}
                    aria-label="toggle-wishlist"
                    aria-pressed={card.wishlisted.to_string()}
                    onclick={on_wishlist}>
                    <span class="sr-only">{heart_alt}</span>
                </button>
                <div class="product-image" onclick={on_open}>
                    <img src={card.image.clone()} alt={card.alt.clone()} />
                </div>
                <div class="product-info">
                    <h3 class="product-title">{card.title.clone()}</h3>
                    <p class="product-description">{card.description.clone()}</p>
                    <div class="product-rating">
                        {for (0..card.stars.filled()).map(|_| html! { <span class="star filled">{"★"}</span> })}
                        {for (0..card.stars.empty()).map(|_| html! { <span class="star">{"☆"}</span> })}
                        <span class="rating-count">{format!("({})", card.rating_count)}</span>
                    </div>
                    <p class="product-price">{card.price.clone()}</p>
                </div>
                <button class="add-to-cart" onclick={on_add}>{"Add to Cart"}</button>
            </div>
        }
    }
}
