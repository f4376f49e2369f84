use crate::catalog;
use crate::components::counter::Counter;
use crate::components::empty_state::EmptyState;
use crate::components::modal::Modal;
use crate::components::supplier_card::SupplierCard;
use crate::core::quote::{MaterialQuote, format_rupees};
use crate::features::materials::state::{MaterialFilters, districts_in, filter_materials};
use autox_models::{MaterialCategory, MaterialItem};
use yew::prelude::*;

fn select_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|select| select.value())
}

#[derive(Properties, PartialEq)]
pub(crate) struct MaterialsPageProps {
    /// Emitted with the listing and quantity when the visitor asks for service.
    pub on_request: Callback<(MaterialItem, u32)>,
}

#[function_component(MaterialsPage)]
pub(crate) fn materials_page(props: &MaterialsPageProps) -> Html {
    let filters = use_state(MaterialFilters::default);
    let quote = use_state(|| None::<(MaterialItem, MaterialQuote)>);

    let items = catalog::materials();
    let districts = use_memo(|_| districts_in(catalog::materials()), ());
    let visible = filter_materials(items, &filters);

    let on_category = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                let mut next = *filters;
                next.set_category_value(&value);
                filters.set(next);
            }
        })
    };
    let on_district = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                let mut next = *filters;
                next.set_district_value(&value);
                filters.set(next);
            }
        })
    };
    let on_clear = {
        let filters = filters.clone();
        Callback::from(move |_: MouseEvent| filters.set(MaterialFilters::default()))
    };

    let update_quote = |apply: fn(&mut MaterialQuote)| {
        let quote = quote.clone();
        Callback::from(move |()| {
            if let Some((item, current)) = (*quote).clone() {
                let mut next = current;
                apply(&mut next);
                quote.set(Some((item, next)));
            }
        })
    };
    let on_quote_input = {
        let quote = quote.clone();
        Callback::from(move |raw: String| {
            if let Some((item, mut current)) = (*quote).clone() {
                current.set_input(&raw);
                quote.set(Some((item, current)));
            }
        })
    };
    let on_quote_close = {
        let quote = quote.clone();
        Callback::from(move |()| quote.set(None))
    };
    let on_quote_submit = {
        let quote = quote.clone();
        let on_request = props.on_request.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some((item, current)) = (*quote).clone() {
                quote.set(None);
                on_request.emit((item, current.quantity));
            }
        })
    };

    let card = |item: &MaterialItem| {
        let pricing = MaterialQuote::for_item(item);
        let on_open = {
            let quote = quote.clone();
            let item = item.clone();
            Callback::from(move |_: MouseEvent| {
                quote.set(Some((item.clone(), MaterialQuote::for_item(&item))));
            })
        };
        html! {
            <div class="card bg-base-100 shadow-lg overflow-hidden">
                <figure class="relative h-48">
                    <img src={item.image.clone()} alt={item.name.clone()} class="w-full h-full object-cover" />
                    <span class={classes!("badge", "absolute", "top-3", "right-3",
                        if item.available { "badge-success" } else { "badge-error" })}>
                        {if item.available { "In Stock" } else { "Out of Stock" }}
                    </span>
                </figure>
                <div class="card-body gap-3">
                    <span class="badge badge-outline">{item.category.label()}</span>
                    <h3 class="card-title">{item.name.clone()}</h3>
                    <p class="text-base-content/70 text-sm">{item.description.clone()}</p>
                    <div class="flex items-baseline justify-between">
                        <span class="text-xl font-bold text-warning">{format_rupees(item.price_per_unit)}</span>
                        <span class="text-sm text-base-content/60">{format!("per {}", item.unit)}</span>
                    </div>
                    <div class="text-xs text-base-content/60">
                        {format!("Starting from {}", format_rupees(pricing.starting_from()))}
                    </div>
                    <SupplierCard supplier={item.supplier.clone()} item_name={item.name.clone()} compact=true />
                    <button class="btn btn-warning" disabled={!item.available} onclick={on_open}>
                        {if item.available { "Request Quote" } else { "Out of Stock" }}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <section class="py-16 bg-base-200 min-h-screen">
            <div class="max-w-7xl mx-auto px-4 space-y-8">
                <div class="text-center space-y-2">
                    <h2 class="text-4xl font-bold">{"Premium Construction Materials"}</h2>
                    <p class="text-base-content/70">{"Certified materials from trusted suppliers across Sri Lanka"}</p>
                </div>
                <div class="flex flex-wrap gap-3 items-center">
                    <select class="select select-bordered" onchange={on_category}>
                        <option value="" selected={filters.category.is_none()}>{"All categories"}</option>
                        {for MaterialCategory::ALL.into_iter().map(|category| html! {
                            <option value={category.as_value()} selected={filters.category == Some(category)}>
                                {category.label()}
                            </option>
                        })}
                    </select>
                    <select class="select select-bordered" onchange={on_district}>
                        <option value="" selected={filters.district.is_none()}>{"All districts"}</option>
                        {for districts.iter().map(|district| html! {
                            <option value={district.label()} selected={filters.district == Some(*district)}>
                                {district.label()}
                            </option>
                        })}
                    </select>
                    {if filters.is_active() {
                        html! { <button class="btn btn-ghost btn-sm" onclick={on_clear.clone()}>{"Clear filters"}</button> }
                    } else {
                        html! {}
                    }}
                    <span class="ml-auto text-sm text-base-content/60">{format!("{} results", visible.len())}</span>
                </div>
                {if visible.is_empty() {
                    html! {
                        <EmptyState
                            title="No materials match these filters"
                            description={Some(AttrValue::from("Try another category or district."))}
                        >
                            <button class="btn btn-sm" onclick={on_clear}>{"Clear filters"}</button>
                        </EmptyState>
                    }
                } else {
                    html! {
                        <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                            {for visible.into_iter().map(card)}
                        </div>
                    }
                }}
            </div>
            {(*quote).clone().map(|(item, current)| html! {
                <Modal title={item.name.clone()} subtitle={Some(AttrValue::from(item.supplier.name.clone()))}
                    on_close={on_quote_close.clone()}>
                    <div class="space-y-4">
                        <Counter
                            value={current.quantity}
                            label={format!("Quantity ({})", item.unit)}
                            on_decrement={update_quote(MaterialQuote::decrement)}
                            on_increment={update_quote(MaterialQuote::increment)}
                            on_input={on_quote_input.clone()}
                        />
                        <div class="rounded-xl bg-base-200 p-4 space-y-1 text-sm">
                            <div class="flex justify-between"><span>{"Unit Price"}</span><span>{format_rupees(current.unit_price)}</span></div>
                            <div class="flex justify-between"><span>{"Quantity"}</span><span>{current.quantity.to_string()}</span></div>
                            <div class="flex justify-between font-bold text-base pt-2 border-t border-base-300">
                                <span>{"Total Estimated Cost"}</span>
                                <span class="text-warning">{format_rupees(current.total())}</span>
                            </div>
                        </div>
                        <div class="modal-action">
                            <button class="btn" onclick={on_quote_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                            <button class="btn btn-warning" onclick={on_quote_submit.clone()}>{"Request Service"}</button>
                        </div>
                    </div>
                </Modal>
            }).unwrap_or_default()}
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GuestPageProps {
    pub on_sign_up: Callback<()>,
}

const GUEST_HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "🏖️ Premium Sand",
        "High-quality river sand, sea sand, and construction sand from verified suppliers.",
        "Rs. 6,500 per cubic meter",
    ),
    (
        "🌱 Quality Soil",
        "Garden soil, topsoil, and fill dirt for all your landscaping needs.",
        "Rs. 7,500 per cubic meter",
    ),
    (
        "🧱 Durable Bricks",
        "Clay bricks, concrete blocks, and pavers for strong construction.",
        "Rs. 32,000 per 1000 pieces",
    ),
];

const GUEST_STEPS: [(&str, &str); 3] = [
    ("Sign Up", "Sign up for free and verify your account to access our supplier network."),
    ("Browse & Contact", "Browse materials by category and contact suppliers directly for quotes."),
    ("Get Delivered", "Negotiate directly with suppliers and get materials delivered to your site."),
];

/// Materials teaser shown before sign-in.
#[function_component(MaterialsGuestPage)]
pub(crate) fn materials_guest_page(props: &GuestPageProps) -> Html {
    let on_sign_up = props.on_sign_up.reform(|_: MouseEvent| ());
    html! {
        <section class="py-16 bg-base-200 min-h-screen">
            <div class="max-w-6xl mx-auto px-4 space-y-12">
                <div class="text-center space-y-4">
                    <h2 class="text-4xl font-bold">{"Quality Construction Materials"}</h2>
                    <p class="text-base-content/70">{"Certified materials from trusted suppliers. Delivery to all 25 districts in Sri Lanka."}</p>
                    <button class="btn btn-warning btn-lg" onclick={on_sign_up.clone()}>{"Create Account"}</button>
                </div>
                <div class="grid gap-6 md:grid-cols-3">
                    {for GUEST_HIGHLIGHTS.into_iter().map(|(title, body, price)| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{title}</h3>
                                <p class="text-sm text-base-content/70">{body}</p>
                                <p class="text-sm">{"Starting from "}<span class="font-bold text-warning">{price}</span></p>
                            </div>
                        </div>
                    })}
                </div>
                <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                    <div class="stat"><div class="stat-value">{"500+"}</div><div class="stat-desc">{"Verified Suppliers"}</div></div>
                    <div class="stat"><div class="stat-value">{"25"}</div><div class="stat-desc">{"Districts Covered"}</div></div>
                    <div class="stat"><div class="stat-value">{"1000+"}</div><div class="stat-desc">{"Successful Projects"}</div></div>
                </div>
                <ol class="grid gap-6 md:grid-cols-3">
                    {for GUEST_STEPS.into_iter().enumerate().map(|(index, (title, body))| html! {
                        <li class="card bg-base-100 shadow">
                            <div class="card-body">
                                <span class="badge badge-warning">{(index + 1).to_string()}</span>
                                <h4 class="font-semibold">{title}</h4>
                                <p class="text-sm text-base-content/70">{body}</p>
                            </div>
                        </li>
                    })}
                </ol>
                <div class="text-center">
                    <button class="btn btn-warning" onclick={on_sign_up}>{"Create Account"}</button>
                </div>
            </div>
        </section>
    }
}
