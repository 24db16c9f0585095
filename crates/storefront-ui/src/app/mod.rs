//! App shell: context providers, router, header, modal, and toasts.

use crate::components::toast::ToastHost;
use crate::core::config::StorefrontConfig;
use crate::core::store::AppStore;
use crate::core::wishlist::Wishlist;
use crate::features::catalog::actions::NavIntent;
use crate::features::catalog::view::ShopPage;
use crate::features::landing::view::LandingPage;
use crate::features::modal::view::ProductModal;
use crate::services::api::ApiClient;
use api::ApiCtx;
use preferences::{BrowserStorage, load_config};
use routes::{Route, use_nav_intent};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;
pub(crate) mod routes;
mod telemetry;

#[function_component(StorefrontApp)]
pub(crate) fn storefront_app() -> Html {
    let config = use_memo(|_| load_config(), ());
    let api_ctx = {
        let config = config.clone();
        use_memo(move |_| ApiCtx::new(ApiClient::new(&config)), ())
    };
    let dispatch = Dispatch::<AppStore>::new();
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());

    {
        let dispatch = dispatch.clone();
        let key = config.wishlist_key.clone();
        use_effect_with_deps(
            move |_| {
                let wishlist = Wishlist::load(&BrowserStorage, &key);
                dispatch.reduce_mut(|store| store.wishlist = wishlist);
                || ()
            },
            (),
        );
    }

    let on_dismiss = Callback::from(move |id: u64| {
        dispatch.reduce_mut(|store| {
            store.toasts.dismiss(id);
        });
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<StorefrontConfig> context={(*config).clone()}>
                <BrowserRouter>
                    <Header />
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <ProductModal />
                    <ToastHost
                        toasts={(*toasts).clone()}
                        on_dismiss={on_dismiss}
                        timeout_ms={config.toast_timeout_ms}
                    />
                </BrowserRouter>
            </ContextProvider<StorefrontConfig>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing | Route::NotFound => html! { <LandingPage /> },
        Route::Shop => html! { <ShopPage /> },
    }
}

#[function_component(Header)]
fn header() -> Html {
    let on_nav = use_nav_intent();
    let link = |intent: NavIntent| {
        on_nav.reform(move |event: MouseEvent| {
            event.prevent_default();
            intent
        })
    };

    html! {
        <header class="navbar">
            <a href="/" class="logo" id="logo-link" onclick={link(NavIntent::Logo)}>{"Storefront"}</a>
            <nav class="nav-links">
                <a href="/" id="nav-home" onclick={link(NavIntent::Home)}>{"Home"}</a>
                <a href="/shop" id="nav-shop" onclick={link(NavIntent::Shop)}>{"Shop"}</a>
            </nav>
        </header>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    telemetry::init_logging();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StorefrontApp>::with_root(root).render();
    } else {
        yew::Renderer::<StorefrontApp>::new().render();
    }
}
