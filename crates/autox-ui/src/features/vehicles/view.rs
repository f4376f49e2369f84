use crate::catalog;
use crate::components::counter::Counter;
use crate::components::empty_state::EmptyState;
use crate::components::modal::Modal;
use crate::components::supplier_card::SupplierCard;
use crate::core::quote::{VehicleBooking, format_rupees};
use crate::features::vehicles::state::{VehicleFilters, districts_in, filter_vehicles};
use autox_models::{DurationUnit, Vehicle, VehicleKind};
use yew::prelude::*;

/// Listing, duration and unit picked in the booking modal.
pub(crate) type VehicleSelection = (Vehicle, u32, DurationUnit);

fn select_value(e: &Event) -> Option<String> {
    e.target_dyn_into::<web_sys::HtmlSelectElement>()
        .map(|select| select.value())
}

#[derive(Properties, PartialEq)]
pub(crate) struct VehiclesPageProps {
    pub on_request: Callback<VehicleSelection>,
}

#[function_component(VehiclesPage)]
pub(crate) fn vehicles_page(props: &VehiclesPageProps) -> Html {
    let filters = use_state(VehicleFilters::default);
    let booking = use_state(|| None::<(Vehicle, VehicleBooking)>);

    let districts = use_memo(|_| districts_in(catalog::vehicles()), ());
    let visible = filter_vehicles(catalog::vehicles(), &filters);

    let on_kind = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            if let Some(value) = select_value(&e) {
                let mut next = *filters;
                next.set_kind_value(&value);
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
        Callback::from(move |_: MouseEvent| filters.set(VehicleFilters::default()))
    };

    let edit = |apply: fn(&mut VehicleBooking)| {
        let booking = booking.clone();
        Callback::from(move |()| {
            if let Some((vehicle, mut current)) = (*booking).clone() {
                apply(&mut current);
                booking.set(Some((vehicle, current)));
            }
        })
    };
    let set_unit = |unit: DurationUnit| {
        let booking = booking.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some((vehicle, mut current)) = (*booking).clone() {
                current.set_unit(unit);
                booking.set(Some((vehicle, current)));
            }
        })
    };
    let on_duration_input = {
        let booking = booking.clone();
        Callback::from(move |raw: String| {
            if let Some((vehicle, mut current)) = (*booking).clone() {
                current.set_input(&raw);
                booking.set(Some((vehicle, current)));
            }
        })
    };
    let on_booking_close = {
        let booking = booking.clone();
        Callback::from(move |()| booking.set(None))
    };
    let on_booking_submit = {
        let booking = booking.clone();
        let on_request = props.on_request.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some((vehicle, current)) = (*booking).clone() {
                booking.set(None);
                on_request.emit((vehicle, current.duration, current.unit));
            }
        })
    };

    let card = |vehicle: &Vehicle| {
        let on_open = {
            let booking = booking.clone();
            let vehicle = vehicle.clone();
            Callback::from(move |_: MouseEvent| {
                booking.set(Some((vehicle.clone(), VehicleBooking::for_vehicle(&vehicle))));
            })
        };
        html! {
            <div class="card bg-base-100 shadow-lg overflow-hidden">
                <figure class="relative h-48">
                    <img src={vehicle.image.clone()} alt={vehicle.name.clone()} class="w-full h-full object-cover" />
                    <span class={classes!("badge", "absolute", "top-3", "right-3",
                        if vehicle.available { "badge-success" } else { "badge-error" })}>
                        {if vehicle.available { "Available" } else { "Booked" }}
                    </span>
                </figure>
                <div class="card-body gap-3">
                    <span class="badge badge-outline">{vehicle.kind.label()}</span>
                    <h3 class="card-title">{vehicle.name.clone()}</h3>
                    <p class="text-base-content/70 text-sm">{vehicle.description.clone()}</p>
                    <ul class="text-xs text-base-content/60 list-disc list-inside">
                        {for vehicle.specifications.iter().map(|spec| html! { <li>{spec.clone()}</li> })}
                    </ul>
                    <div class="grid grid-cols-2 gap-2 text-center">
                        <div class="rounded-lg bg-base-200 p-2">
                            <div class="font-bold text-warning">{format_rupees(vehicle.price_per_hour)}</div>
                            <div class="text-xs text-base-content/60">{"per hour"}</div>
                        </div>
                        <div class="rounded-lg bg-base-200 p-2">
                            <div class="font-bold text-warning">{format_rupees(vehicle.price_per_day)}</div>
                            <div class="text-xs text-base-content/60">{"per day"}</div>
                        </div>
                    </div>
                    <SupplierCard supplier={vehicle.owner.clone()} item_name={vehicle.name.clone()} compact=true />
                    <button class="btn btn-warning" disabled={!vehicle.available} onclick={on_open}>
                        {if vehicle.available { "Book Now" } else { "Unavailable" }}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <section class="py-16 bg-base-200 min-h-screen">
            <div class="max-w-7xl mx-auto px-4 space-y-8">
                <div class="text-center space-y-2">
                    <h2 class="text-4xl font-bold">{"Choose Your Vehicle"}</h2>
                    <p class="text-base-content/70">{"Professional construction vehicles for every project need"}</p>
                </div>
                <div class="flex flex-wrap gap-3 items-center">
                    <select class="select select-bordered" onchange={on_kind}>
                        <option value="" selected={filters.kind.is_none()}>{"All vehicles"}</option>
                        {for VehicleKind::ALL.into_iter().map(|kind| html! {
                            <option value={kind.as_value()} selected={filters.kind == Some(kind)}>{kind.label()}</option>
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
                            title="No vehicles match these filters"
                            description={Some(AttrValue::from("Try another vehicle type or district."))}
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
                <div class="grid gap-4 md:grid-cols-3">
                    <div class="card bg-base-100 shadow"><div class="card-body">
                        <h4 class="font-semibold">{"Expert Operators"}</h4>
                        <p class="text-sm text-base-content/70">{"Skilled professionals"}</p>
                    </div></div>
                    <div class="card bg-base-100 shadow"><div class="card-body">
                        <h4 class="font-semibold">{"Fully Insured"}</h4>
                        <p class="text-sm text-base-content/70">{"Comprehensive coverage"}</p>
                    </div></div>
                    <div class="card bg-base-100 shadow"><div class="card-body">
                        <h4 class="font-semibold">{"Flexible Terms"}</h4>
                        <p class="text-sm text-base-content/70">{"Hourly or daily rates"}</p>
                    </div></div>
                </div>
            </div>
            {(*booking).clone().map(|(vehicle, current)| html! {
                <Modal title={vehicle.name.clone()} subtitle={Some(AttrValue::from(vehicle.owner.name.clone()))}
                    on_close={on_booking_close.clone()}>
                    <div class="space-y-4">
                        <div class="join w-full">
                            {for [DurationUnit::Hours, DurationUnit::Days].into_iter().map(|unit| html! {
                                <button type="button"
                                    class={classes!("btn", "join-item", "flex-1", (current.unit == unit).then_some("btn-warning"))}
                                    onclick={set_unit(unit)}>
                                    {format!("Per {}", unit.singular())}
                                </button>
                            })}
                        </div>
                        <Counter
                            value={current.duration}
                            label={format!("Duration ({})", current.unit.plural())}
                            on_decrement={edit(VehicleBooking::decrement)}
                            on_increment={edit(VehicleBooking::increment)}
                            on_input={on_duration_input.clone()}
                        />
                        <div class="rounded-xl bg-base-200 p-4 space-y-1 text-sm">
                            <div class="flex justify-between">
                                <span>{format!("Rate per {}", current.unit.singular())}</span>
                                <span>{format_rupees(current.rate())}</span>
                            </div>
                            <div class="flex justify-between font-bold text-base pt-2 border-t border-base-300">
                                <span>{"Total Estimated Cost:"}</span>
                                <span class="text-warning">{format_rupees(current.total())}</span>
                            </div>
                        </div>
                        <div class="modal-action">
                            <button class="btn" onclick={on_booking_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
                            <button class="btn btn-warning" onclick={on_booking_submit.clone()}>{"Request Service"}</button>
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

const GUEST_FLEET: [(&str, &str, &str); 4] = [
    ("🚜 JCB Excavators", "Heavy-duty excavation and loading equipment", "Rs. 32,000/hour"),
    ("🚚 Transport Lorries", "Large capacity material transportation", "Rs. 21,000/hour"),
    ("🚰 Water Bowsers", "Site water supply and dust control", "Rs. 16,000/hour"),
    ("🏗️ Boom Lifts", "Aerial work platforms for high access", "Rs. 40,000/hour"),
];

const GUEST_PERKS: [(&str, &str); 4] = [
    ("Expert Operators", "Certified operators with years of experience in construction projects."),
    ("Fully Insured", "Comprehensive insurance coverage for peace of mind during operations."),
    ("Well Maintained", "Regular maintenance and safety checks ensure optimal performance."),
    ("Flexible Rental", "Hourly, daily, or long-term rental options to suit your project needs."),
];

/// Vehicle teaser shown before sign-in.
#[function_component(VehiclesGuestPage)]
pub(crate) fn vehicles_guest_page(props: &GuestPageProps) -> Html {
    let on_sign_up = props.on_sign_up.reform(|_: MouseEvent| ());
    html! {
        <section class="py-16 bg-base-200 min-h-screen">
            <div class="max-w-6xl mx-auto px-4 space-y-12">
                <div class="text-center space-y-4">
                    <h2 class="text-4xl font-bold">{"Construction Vehicle Rentals"}</h2>
                    <p class="text-base-content/70">{"Register and verify your account to access our vehicle owner network."}</p>
                    <button class="btn btn-warning btn-lg" onclick={on_sign_up.clone()}>{"Create Account"}</button>
                </div>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                    {for GUEST_FLEET.into_iter().map(|(title, body, price)| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title text-lg">{title}</h3>
                                <p class="text-sm text-base-content/70">{body}</p>
                                <p class="text-sm">{"From "}<span class="font-bold text-warning">{price}</span></p>
                            </div>
                        </div>
                    })}
                </div>
                <div class="grid gap-6 md:grid-cols-2">
                    {for GUEST_PERKS.into_iter().map(|(title, body)| html! {
                        <div class="flex gap-4">
                            <span class="badge badge-warning badge-lg">{"✓"}</span>
                            <div>
                                <h4 class="font-semibold">{title}</h4>
                                <p class="text-sm text-base-content/70">{body}</p>
                            </div>
                        </div>
                    })}
                </div>
                <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                    <div class="stat"><div class="stat-value">{"200+"}</div><div class="stat-desc">{"Vehicle Owners"}</div></div>
                    <div class="stat"><div class="stat-value">{"24/7"}</div><div class="stat-desc">{"Support Available"}</div></div>
                    <div class="stat"><div class="stat-value">{"98%"}</div><div class="stat-desc">{"Uptime Guarantee"}</div></div>
                </div>
                <div class="text-center">
                    <button class="btn btn-warning" onclick={on_sign_up}>{"Create Account"}</button>
                </div>
            </div>
        </section>
    }
}
