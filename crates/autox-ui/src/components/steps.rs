use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StepsProps {
    #[prop_or_default]
    pub steps: Vec<AttrValue>,
    /// One-based index of the current step.
    #[prop_or(1usize)]
    pub current: usize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Steps)]
pub(crate) fn steps(props: &StepsProps) -> Html {
    html! {
        <ul class={classes!("steps", "w-full", props.class.clone())}>
            {for props.steps.iter().enumerate().map(|(idx, label)| {
                let number = idx + 1;
                let active = number <= props.current;
                let done = number < props.current;
                let item_class = classes!("step", active.then_some("step-warning"));
                html! {
                    <li class={item_class} data-content={if done { "✓".to_string() } else { number.to_string() }}>
                        {label.clone()}
                    </li>
                }
            })}
        </ul>
    }
}
