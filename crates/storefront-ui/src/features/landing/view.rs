//! Landing page hero with "shop now" calls-to-action.

use crate::app::routes::use_nav_intent;
use crate::core::store::AppStore;
use crate::features::catalog::actions::NavIntent;
use crate::features::catalog::state::{ViewState, navigate};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(LandingPage)]
pub(crate) fn landing_page() -> Html {
    let on_nav = use_nav_intent();
    use_effect_with_deps(
        |_| {
            Dispatch::<AppStore>::new().reduce_mut(|store| {
                navigate(&mut store.shop, ViewState::Landing);
            });
            || ()
        },
        (),
    );
    let shop_now = on_nav.reform(|event: MouseEvent| {
        event.prevent_default();
        NavIntent::ShopNow
    });

    html! {
        <section class="landing-view">
            <div class="hero">
                <h1>{"Find everything you love, in one place"}</h1>
                <p class="muted">{"Clothing, jewelery, and electronics picked from our catalog."}</p>
                <button class="btn btn-primary" id="shop-now-btn" onclick={shop_now.clone()}>
                    {"Shop Now"}
                </button>
            </div>
            <div class="promo">
                <h2>{"New arrivals every week"}</h2>
                <button class="btn" id="shop-now-btn-2" onclick={shop_now}>{"Shop Now"}</button>
            </div>
        </section>
    }
}
