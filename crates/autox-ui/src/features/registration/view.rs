//! Five-step partner registration modal.

use crate::components::modal::Modal;
use crate::components::steps::Steps;
use crate::features::registration::state::{
    CERTIFICATIONS, Document, Field, RegistrationStep, Wizard, services_for,
};
use autox_models::{PartnerKind, PartnerRegistration};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

fn modify(wizard: &UseStateHandle<Wizard>, apply: impl FnOnce(&mut Wizard)) {
    let mut next = (**wizard).clone();
    apply(&mut next);
    wizard.set(next);
}

fn text_input(
    wizard: &UseStateHandle<Wizard>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> Html {
    let oninput = {
        let wizard = wizard.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                modify(&wizard, |w| w.form.set_field(field, input.value()));
            }
        })
    };
    html! {
        <label class="form-control w-full">
            <span class="label-text font-semibold mb-1">{label}</span>
            <input
                type={input_type}
                class="input input-bordered w-full"
                placeholder={placeholder}
                value={wizard.form.field(field).to_string()}
                {oninput}
            />
        </label>
    }
}

fn check_list(
    options: &'static [&'static str],
    is_checked: impl Fn(&str) -> bool,
    on_toggle: &Callback<&'static str>,
) -> Html {
    html! {
        <div class="grid gap-2 md:grid-cols-2">
            {for options.iter().map(|option| {
                let on_toggle = on_toggle.clone();
                let option = *option;
                html! {
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox checkbox-warning checkbox-sm"
                            checked={is_checked(option)}
                            onchange={Callback::from(move |_: Event| on_toggle.emit(option))}
                        />
                        <span class="label-text">{option}</span>
                    </label>
                }
            })}
        </div>
    }
}

fn kind_card(wizard: &UseStateHandle<Wizard>, kind: PartnerKind, bullets: [&'static str; 3]) -> Html {
    let selected = wizard.form.partner_kind == Some(kind);
    let onclick = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| modify(&wizard, |w| w.form.set_partner_kind(kind)))
    };
    html! {
        <button
            type="button"
            class={classes!("card", "border-2", "text-left", "p-6", "transition",
                if selected { "border-warning bg-warning/10" } else { "border-base-300" })}
            {onclick}
        >
            <h4 class="text-xl font-bold mb-2">{kind.label()}</h4>
            <ul class="text-sm text-base-content/70 space-y-1">
                {for bullets.into_iter().map(|bullet| html! { <li>{format!("• {bullet}")}</li> })}
            </ul>
        </button>
    }
}

fn document_slot(wizard: &UseStateHandle<Wizard>, document: Document) -> Html {
    let onchange = {
        let wizard = wizard.clone();
        Callback::from(move |e: Event| {
            let file_name = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            modify(&wizard, |w| w.form.set_document(document, file_name));
        })
    };
    html! {
        <div class="rounded-xl border-2 border-dashed border-base-300 p-6 text-center space-y-2">
            <h4 class="font-semibold">{document.label()}</h4>
            <p class="text-sm text-base-content/60">{document.hint()}</p>
            <input
                type="file"
                accept=".pdf,.jpg,.jpeg,.png"
                class="file-input file-input-bordered file-input-sm w-full"
                {onchange}
            />
            {wizard.form.document(document).map(|name| html! {
                <p class="text-sm text-success">{format!("✓ {name}")}</p>
            }).unwrap_or_default()}
        </div>
    }
}

fn step_panel(wizard: &UseStateHandle<Wizard>) -> Html {
    match wizard.step {
        RegistrationStep::PartnerType => html! {
            <div class="grid gap-4 md:grid-cols-2">
                {kind_card(wizard, PartnerKind::VehicleOwner,
                    ["Excavators, JCBs, Cranes", "Trucks, Lorries, Trailers", "Specialized Equipment"])}
                {kind_card(wizard, PartnerKind::MaterialSupplier,
                    ["Sand, Gravel, Soil", "Steel, Concrete, Bricks", "Specialized Materials"])}
            </div>
        },
        RegistrationStep::BusinessInfo => {
            let on_description = {
                let wizard = wizard.clone();
                Callback::from(move |e: InputEvent| {
                    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                        modify(&wizard, |w| w.form.set_field(Field::Description, area.value()));
                    }
                })
            };
            html! {
                <div class="space-y-4">
                    <div class="grid gap-4 md:grid-cols-2">
                        {text_input(wizard, Field::BusinessName, "Business Name *", "Your business name", "text")}
                        {text_input(wizard, Field::OwnerName, "Owner Name *", "Business owner name", "text")}
                        {text_input(wizard, Field::Email, "Email *", "business@example.com", "email")}
                        {text_input(wizard, Field::Phone, "Phone *", "+94 77 123 4567", "tel")}
                        {text_input(wizard, Field::BusinessLicense, "Business License", "License number", "text")}
                        {text_input(wizard, Field::TaxId, "Tax ID", "Tax identification number", "text")}
                        {text_input(wizard, Field::YearsInBusiness, "Years in Business", "0", "number")}
                    </div>
                    <label class="form-control w-full">
                        <span class="label-text font-semibold mb-1">{"Business Description"}</span>
                        <textarea
                            class="textarea textarea-bordered w-full"
                            rows="4"
                            placeholder="Describe your business, experience, and what makes you unique..."
                            value={wizard.form.description.clone()}
                            oninput={on_description}
                        />
                    </label>
                </div>
            }
        }
        RegistrationStep::AddressServices => {
            let on_service = {
                let wizard = wizard.clone();
                Callback::from(move |service: &'static str| modify(&wizard, |w| w.form.toggle_service(service)))
            };
            let on_certification = {
                let wizard = wizard.clone();
                Callback::from(move |cert: &'static str| modify(&wizard, |w| w.form.toggle_certification(cert)))
            };
            let services = wizard
                .form
                .partner_kind
                .map(services_for)
                .unwrap_or_default();
            html! {
                <div class="space-y-6">
                    {text_input(wizard, Field::Address, "Street Address *", "45 Galle Road", "text")}
                    <div class="grid gap-4 md:grid-cols-3">
                        {text_input(wizard, Field::City, "City *", "City", "text")}
                        {text_input(wizard, Field::Province, "Province *", "Province", "text")}
                        {text_input(wizard, Field::PostalCode, "Postal Code", "00300", "text")}
                    </div>
                    <div>
                        <h4 class="font-semibold mb-2">{"Services Offered *"}</h4>
                        {check_list(services, |s| wizard.form.has_service(s), &on_service)}
                    </div>
                    <div>
                        <h4 class="font-semibold mb-2">{"Certifications (Optional)"}</h4>
                        {check_list(&CERTIFICATIONS, |c| wizard.form.has_certification(c), &on_certification)}
                    </div>
                </div>
            }
        }
        RegistrationStep::InsuranceBanking => html! {
            <div class="space-y-6">
                <div>
                    <h4 class="font-semibold mb-2">{"Insurance"}</h4>
                    <div class="grid gap-4 md:grid-cols-3">
                        {text_input(wizard, Field::InsuranceProvider, "Provider", "Insurance company name", "text")}
                        {text_input(wizard, Field::PolicyNumber, "Policy Number", "Policy number", "text")}
                        {text_input(wizard, Field::ExpiryDate, "Expiry Date", "", "date")}
                    </div>
                </div>
                <div>
                    <h4 class="font-semibold mb-2">{"Bank Account"}</h4>
                    <div class="grid gap-4 md:grid-cols-2">
                        {text_input(wizard, Field::AccountHolder, "Account Holder", "Account holder name", "text")}
                        {text_input(wizard, Field::BankName, "Bank Name", "Bank name", "text")}
                        {text_input(wizard, Field::AccountNumber, "Account Number", "Account number", "text")}
                        {text_input(wizard, Field::BranchCode, "Branch Code", "Branch code", "text")}
                    </div>
                </div>
            </div>
        },
        RegistrationStep::Documents => html! {
            <div class="space-y-4">
                <div class="grid gap-4 md:grid-cols-2">
                    {for Document::ALL.into_iter().map(|document| document_slot(wizard, document))}
                </div>
                <div class="alert alert-info text-sm">
                    <ul class="space-y-1">
                        <li>{"All documents must be clear and legible"}</li>
                        <li>{"Accepted formats: PDF, JPG, JPEG, PNG"}</li>
                        <li>{"Documents will be verified within 2-3 business days"}</li>
                    </ul>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RegistrationModalProps {
    pub on_close: Callback<()>,
    pub on_submit: Callback<PartnerRegistration>,
}

#[function_component(RegistrationModal)]
pub(crate) fn registration_modal(props: &RegistrationModalProps) -> Html {
    let wizard = use_state(Wizard::default);
    let error = use_state(|| None::<String>);

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| modify(&wizard, Wizard::back))
    };
    let on_next = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| modify(&wizard, Wizard::advance))
    };
    let on_submit = {
        let wizard = wizard.clone();
        let error = error.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*wizard).clone();
            match next.submit() {
                Ok(registration) => {
                    wizard.set(next);
                    error.set(None);
                    on_submit.emit(registration);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        })
    };

    let step = wizard.step;
    let labels = RegistrationStep::ALL
        .into_iter()
        .map(|s| AttrValue::from(s.short_label()))
        .collect::<Vec<_>>();

    html! {
        <Modal
            title="Partner Registration"
            subtitle={Some(AttrValue::from("Join Auto X as a service partner"))}
            class="max-w-4xl"
            on_close={props.on_close.clone()}
        >
            <div class="space-y-6">
                <Steps steps={labels} current={usize::from(step.number())} />
                <progress class="progress progress-warning w-full"
                    value={wizard.progress_percent().to_string()} max="100"></progress>
                <h3 class="text-xl font-bold">{step.title()}</h3>
                {step_panel(&wizard)}
                {(*error).clone().map(|message| html! {
                    <div class="alert alert-error text-sm" role="alert">{message}</div>
                }).unwrap_or_default()}
                <div class="flex justify-between">
                    <button type="button" class="btn" disabled={step == RegistrationStep::PartnerType} onclick={on_back}>
                        {"Previous"}
                    </button>
                    {if step.is_last() {
                        html! { <button type="button" class="btn btn-success" onclick={on_submit}>{"Submit Application"}</button> }
                    } else {
                        html! {
                            <button type="button" class="btn btn-warning" disabled={!wizard.can_advance()} onclick={on_next}>
                                {"Next"}
                            </button>
                        }
                    }}
                </div>
            </div>
        </Modal>
    }
}
