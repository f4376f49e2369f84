//! Toast host.
//!
//! # Design
//! - The host keeps one timer per toast id; a toast that stays queued keeps
//!   its running timer when other toasts arrive or leave.
//! - Each toast carries its own auto-dismiss delay.

use crate::core::session::{Toast, ToastKind, plan_toast_timers};
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let on_dismiss = props.on_dismiss.clone();
        let timers = timers.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                let scheduled: Vec<u64> = timers.keys().copied().collect();
                let plan = plan_toast_timers(&scheduled, list);
                // Dropping a `Timeout` cancels it.
                for id in plan.cancel {
                    timers.remove(&id);
                }
                for (id, delay) in plan.start {
                    let on_dismiss = on_dismiss.clone();
                    timers.insert(id, Timeout::new(delay, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.toasts.clone(),
        );
    }

    html! {
        <div class={classes!("toast", "toast-end", "z-50", props.class.clone())} aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>) -> Html {
    let class = match toast.kind {
        ToastKind::Info => "alert-info",
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-error",
    };
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        let id = toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", class, "shadow-lg")} role="status">
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
