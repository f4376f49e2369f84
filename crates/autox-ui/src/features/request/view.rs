use crate::components::modal::Modal;
use crate::components::supplier_card::SupplierCard;
use crate::core::quote::format_rupees;
use crate::core::session::PendingRequest;
use crate::features::request::state::{RequestForm, amount_summary, build_request};
use gloo::console::{error, log};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ServiceRequestModalProps {
    pub pending: PendingRequest,
    pub on_close: Callback<()>,
    /// Fired after the request has been logged.
    pub on_sent: Callback<()>,
}

/// Confirmation step before a quote or booking is sent.
#[function_component(ServiceRequestModal)]
pub(crate) fn service_request_modal(props: &ServiceRequestModalProps) -> Html {
    let form = use_state(RequestForm::default);

    let on_note = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                form.set(RequestForm { note: area.value() });
            }
        })
    };
    let on_send = {
        let form = form.clone();
        let pending = props.pending.clone();
        let on_sent = props.on_sent.clone();
        Callback::from(move |_: MouseEvent| {
            let request = build_request(&pending, &form.note);
            match serde_json::to_string(&request) {
                Ok(payload) => log!(format!("service request: {payload}")),
                Err(err) => error!(format!("failed to encode service request: {err}")),
            }
            on_sent.emit(());
        })
    };

    let pending = &props.pending;
    let supplier = match pending {
        PendingRequest::Material { item, .. } => item.supplier.clone(),
        PendingRequest::Vehicle { vehicle, .. } => vehicle.owner.clone(),
    };

    html! {
        <Modal
            title="Request Service"
            subtitle={Some(AttrValue::from(pending.title().to_string()))}
            class="max-w-lg"
            on_close={props.on_close.clone()}
        >
            <div class="space-y-4">
                <div class="rounded-xl bg-base-200 p-4 space-y-1 text-sm">
                    <div class="flex justify-between"><span>{"Amount"}</span><span>{amount_summary(pending)}</span></div>
                    <div class="flex justify-between font-bold text-base pt-2 border-t border-base-300">
                        <span>{"Total Estimated Cost"}</span>
                        <span class="text-warning">{format_rupees(pending.estimated_total())}</span>
                    </div>
                </div>
                <SupplierCard supplier={supplier} item_name={pending.title().to_string()} />
                <label class="form-control w-full">
                    <span class="label-text font-semibold mb-1">{"Note for the supplier (optional)"}</span>
                    <textarea
                        class="textarea textarea-bordered w-full"
                        rows="3"
                        placeholder="Delivery address, preferred dates..."
                        value={form.note.clone()}
                        oninput={on_note}
                    />
                </label>
                <div class="modal-action">
                    <button class="btn" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                    <button class="btn btn-warning" onclick={on_send}>{"Send Request"}</button>
                </div>
            </div>
        </Modal>
    }
}
