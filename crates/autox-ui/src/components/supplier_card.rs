//! Supplier contact block with call and WhatsApp actions.

use crate::core::contact::{inquiry_message, open_dialer, open_whatsapp, report_failure};
use autox_models::Supplier;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SupplierCardProps {
    pub supplier: Supplier,
    /// Listing the visitor is looking at; used for the WhatsApp preset.
    pub item_name: AttrValue,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(SupplierCard)]
pub(crate) fn supplier_card(props: &SupplierCardProps) -> Html {
    let supplier = &props.supplier;
    let on_call = {
        let phone = supplier.phone.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_dialer(&phone) {
                report_failure(&phone, &err);
            }
        })
    };
    let on_message = {
        let phone = supplier.phone.clone();
        let message = inquiry_message(&props.item_name, &supplier.name);
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_whatsapp(&phone, &message) {
                report_failure(&phone, &err);
            }
        })
    };

    html! {
        <div class={classes!("rounded-xl", "bg-base-200", "p-4", "space-y-2", props.compact.then_some("text-sm"))}>
            <div class="flex items-center justify-between">
                <span class="font-semibold">{supplier.name.clone()}</span>
                <span class="badge badge-ghost">{format!("★ {:.1}", supplier.rating)}</span>
            </div>
            <div class="text-base-content/70">
                {format!("{}, {}", supplier.location, supplier.district.label())}
            </div>
            {if props.compact {
                html! {}
            } else {
                html! {
                    <div class="text-base-content/60 text-xs">
                        {format!("{} jobs completed", supplier.completed_jobs)}
                    </div>
                }
            }}
            <div class="flex gap-2 pt-1">
                <button type="button" class="btn btn-sm btn-outline flex-1" onclick={on_call}>{"Call"}</button>
                <button type="button" class="btn btn-sm btn-success flex-1" onclick={on_message}>{"Message"}</button>
            </div>
        </div>
    }
}
