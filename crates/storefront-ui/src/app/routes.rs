//! Routing definitions for the storefront UI.
use crate::features::catalog::actions::NavIntent;
use crate::features::catalog::state::ViewState;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Landing,
    #[at("/shop")]
    Shop,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub(crate) const fn route_for(view: ViewState) -> Route {
    match view {
        ViewState::Landing => Route::Landing,
        ViewState::Shop => Route::Shop,
    }
}

/// Callback that performs a navigation intent (route push plus optional scroll).
#[hook]
pub(crate) fn use_nav_intent() -> Callback<NavIntent> {
    let navigator = use_navigator();
    Callback::from(move |intent: NavIntent| {
        if let Some(navigator) = &navigator {
            navigator.push(&route_for(intent.target()));
        }
        if intent.scrolls_to_top() {
            gloo::utils::window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    })
}
