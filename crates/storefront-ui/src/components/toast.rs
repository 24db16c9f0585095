//! Toast host with per-toast auto-dismiss timers.

use crate::models::Toast;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    pub timeout_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class={classes!("toast-host", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    timeout_ms={props.timeout_ms}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    timeout_ms: u32,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;
    {
        let on_dismiss = props.on_dismiss.clone();
        let timeout_ms = props.timeout_ms;
        use_effect_with_deps(
            move |id: &u64| {
                let id = *id;
                let handle = Timeout::new(timeout_ms, move || on_dismiss.emit(id));
                move || drop(handle)
            },
            id,
        );
    }
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast success" role="status">
            <span>{props.toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
