use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    pub on_close: Callback<()>,
}

/// Always-open daisy modal; the parent decides whether to mount it.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class={classes!("modal-box", props.class.clone())}>
                <div class="flex items-start justify-between gap-4 mb-4">
                    <div>
                        <h3 class="text-2xl font-bold">{props.title.clone()}</h3>
                        {props.subtitle.clone().map(|text| html! {
                            <p class="text-base-content/70 mt-1">{text}</p>
                        }).unwrap_or_default()}
                    </div>
                    <button class="btn btn-sm btn-circle btn-ghost" aria-label="Close" onclick={on_close.clone()}>{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
            <button class="modal-backdrop" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
