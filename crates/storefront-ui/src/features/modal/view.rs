//! Product detail modal view.
//!
//! Close button, outside click, and Escape all dispatch the same close reducer,
//! which also releases the page scroll lock.

use crate::core::logic::{ModalKey, Rect, interpret_modal_key, is_outside_rect};
use crate::core::store::{AppStore, add_from_modal};
use crate::features::modal::state::{close_modal, modal_detail};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ProductModal)]
pub(crate) fn product_modal() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let detail = use_selector(|store: &AppStore| modal_detail(store.modal, &store.shop));
    let open = use_selector(|store: &AppStore| store.modal.is_open());
    let scroll_locked = use_selector(|store: &AppStore| store.modal.scroll_locked());
    let box_ref = use_node_ref();

    let close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                close_modal(&mut store.modal);
            });
        })
    };

    use_effect_with_deps(
        |locked: &bool| {
            set_scroll_lock(*locked);
            || ()
        },
        *scroll_locked,
    );

    {
        let close = close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                let listener =
                    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                        let key = event
                            .dyn_ref::<KeyboardEvent>()
                            .map(KeyboardEvent::key)
                            .unwrap_or_default();
                        if interpret_modal_key(&key, open) == Some(ModalKey::Close) {
                            close.emit(());
                        }
                    });
                move || drop(listener)
            },
            *open,
        );
    }

    let on_backdrop = {
        let close = close.clone();
        let box_ref = box_ref.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(element) = box_ref.cast::<web_sys::Element>() else {
                return;
            };
            let bounds = element.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                right: bounds.right(),
                bottom: bounds.bottom(),
            };
            let x = f64::from(event.client_x());
            let y = f64::from(event.client_y());
            if is_outside_rect(rect, x, y) {
                close.emit(());
            }
        })
    };

    let on_add = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|store| {
            add_from_modal(store);
        });
    });

    let Some(detail) = (*detail).clone() else {
        return html! {};
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true" onclick={on_backdrop}>
            <div class="modal-box" ref={box_ref}>
                <button
                    class="modal-close"
                    aria-label="Close"
                    onclick={close.reform(|_: MouseEvent| ())}>
                    {"✕"}
                </button>
                <img class="modal-image" src={detail.image.clone()} alt={detail.title.clone()} />
                <h2 class="modal-title">{detail.title.clone()}</h2>
                <p class="modal-category">{detail.category.clone()}</p>
                <p class="modal-description">{detail.description.clone()}</p>
                <p class="modal-price">{detail.price.clone()}</p>
                <button class="add-to-cart" onclick={on_add}>{"Add to Cart"}</button>
            </div>
        </div>
    }
}

fn set_scroll_lock(locked: bool) {
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = gloo::utils::body().style().set_property("overflow", value) {
        console::error!("scroll lock update failed", format!("{err:?}"));
    }
}
