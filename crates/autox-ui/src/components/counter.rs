//! Minus / input / plus control for quantities and durations.

use crate::core::quote::MAX_COUNT;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CounterProps {
    pub value: u32,
    pub label: AttrValue,
    pub on_decrement: Callback<()>,
    pub on_increment: Callback<()>,
    /// Raw text from the number input.
    pub on_input: Callback<String>,
}

#[function_component(Counter)]
pub(crate) fn counter(props: &CounterProps) -> Html {
    let on_minus = props.on_decrement.reform(|_: MouseEvent| ());
    let on_plus = props.on_increment.reform(|_: MouseEvent| ());
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };

    html! {
        <label class="form-control w-full">
            <span class="label-text font-semibold mb-2">{props.label.clone()}</span>
            <div class="join w-full">
                <button type="button" class="btn join-item" aria-label="Decrease" onclick={on_minus}
                    disabled={props.value <= 1}>{"-"}</button>
                <input
                    type="number"
                    min="1"
                    max={MAX_COUNT.to_string()}
                    class="input input-bordered join-item w-full text-center font-semibold"
                    value={props.value.to_string()}
                    oninput={on_input}
                />
                <button type="button" class="btn join-item" aria-label="Increase" onclick={on_plus}
                    disabled={props.value >= MAX_COUNT}>{"+"}</button>
            </div>
        </label>
    }
}
