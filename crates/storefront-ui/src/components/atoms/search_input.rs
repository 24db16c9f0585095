//! Debounced search input with an explicit search button.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Emit debounced values to the caller for shared state updates.
//! - The button emits immediately and cancels any pending debounce, so the
//!   stale timer cannot re-apply an older value afterwards.

use crate::core::debounce::Debouncer;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub initial: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or(200)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let value_state = {
        let initial = props.initial.to_string();
        use_state(move || initial)
    };
    let debounce = props.debounce_ms;
    let debouncer = use_mut_ref(Debouncer::<Timeout>::new);

    let oninput = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |next: String| {
            value_state.set(next.clone());
            if debounce == 0 {
                on_search.emit(next);
                return;
            }
            let on_search = on_search.clone();
            let slot = Rc::downgrade(&debouncer);
            debouncer.borrow_mut().schedule(move |ticket| {
                Timeout::new(debounce, move || {
                    let fire = slot
                        .upgrade()
                        .is_some_and(|slot| slot.borrow_mut().fire(ticket));
                    if fire {
                        on_search.emit(next);
                    }
                })
            });
        })
    };

    let onsubmit = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            debouncer.borrow_mut().cancel();
            on_search.emit((*value_state).clone());
        })
    };

    html! {
        <form class={classes!("search-input", props.class.clone())} role="search" onsubmit={onsubmit}>
            <input
                type="search"
                placeholder={props.placeholder.clone()}
                value={AttrValue::from((*value_state).clone())}
                aria-label={props.aria_label.clone()}
                oninput={Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                        oninput.emit(input.value());
                    }
                })}
            />
            <button type="submit" class="search-button">{"Search"}</button>
        </form>
    }
}
