//! Empty state panel for filtered grids and placeholder tabs.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class={classes!("card", "bg-base-100", "shadow", "p-10", "text-center", props.class.clone())}>
            <h4 class="text-xl font-bold">{props.title.clone()}</h4>
            {props.description.clone().map(|text| html! {
                <p class="text-base-content/70 mt-2">{text}</p>
            }).unwrap_or_default()}
            {if has_actions {
                html! { <div class="mt-6 flex justify-center gap-3">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
