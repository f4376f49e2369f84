use crate::components::empty_state::EmptyState;
use crate::core::quote::format_rupees;
use crate::features::partner::state::{
    DashboardStats, DashboardTab, rating_label, status_class, status_label,
};
use autox_models::Partner;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PartnerDashboardProps {
    pub partner: Partner,
}

fn stat_card(title: &'static str, value: String) -> Html {
    html! {
        <div class="stat bg-base-100 rounded-xl shadow">
            <div class="stat-title">{title}</div>
            <div class="stat-value text-2xl">{value}</div>
        </div>
    }
}

fn overview(partner: &Partner, stats: DashboardStats) -> Html {
    html! {
        <div class="space-y-6">
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                {stat_card("Total Listings", stats.total_listings.to_string())}
                {stat_card("Active Listings", stats.active_listings.to_string())}
                {stat_card("Monthly Bookings", stats.monthly_bookings.to_string())}
                {stat_card("Total Earnings", format_rupees(stats.total_earnings))}
            </div>
            <div class="grid gap-6 lg:grid-cols-2">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Recent Bookings"}</h3>
                        <p class="text-base-content/60 text-sm">{"No bookings yet. New requests will appear here."}</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body space-y-3">
                        <h3 class="card-title">{"Performance Metrics"}</h3>
                        <div class="flex justify-between"><span>{"Response Rate"}</span><span class="font-semibold">{"98%"}</span></div>
                        <progress class="progress progress-success" value="98" max="100"></progress>
                        <div class="flex justify-between"><span>{"Completion Rate"}</span><span class="font-semibold">{"96%"}</span></div>
                        <progress class="progress progress-info" value="96" max="100"></progress>
                        <div class="flex justify-between"><span>{"Customer Rating"}</span><span class="font-semibold">{rating_label(partner.rating)}</span></div>
                        <div class="flex justify-between"><span>{"Total Jobs"}</span><span class="font-semibold">{partner.total_jobs.to_string()}</span></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn profile(partner: &Partner) -> Html {
    let details = &partner.details;
    let rows = [
        ("Business", details.business_name.clone()),
        ("Owner", details.owner_name.clone()),
        ("Email", details.email.clone()),
        ("Phone", details.phone.clone()),
        ("Address", format!("{}, {}, {}", details.address, details.city, details.province)),
        ("Services", details.services.join(", ")),
        ("Registered", partner.registered_at.format("%Y-%m-%d").to_string()),
    ];
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Profile Settings"}</h3>
                <p class="text-sm text-base-content/60">{"Manage your business profile and account settings"}</p>
                <dl class="grid gap-2 md:grid-cols-2 mt-4">
                    {for rows.into_iter().map(|(label, value)| html! {
                        <div>
                            <dt class="text-xs uppercase text-base-content/50">{label}</dt>
                            <dd class="font-medium">{value}</dd>
                        </div>
                    })}
                </dl>
            </div>
        </div>
    }
}

#[function_component(PartnerDashboardPage)]
pub(crate) fn partner_dashboard_page(props: &PartnerDashboardProps) -> Html {
    let tab = use_state(DashboardTab::default);
    let partner = &props.partner;
    let kind = partner.kind();
    let stats = DashboardStats::for_partner(partner);

    let panel = match *tab {
        DashboardTab::Overview => overview(partner, stats),
        DashboardTab::Listings => html! {
            <EmptyState
                title={format!("No {} listed yet", kind.listings_label().to_lowercase())}
                description={Some(AttrValue::from(format!("Add your first {} once your account is approved.", kind.listing_label())))}
            />
        },
        DashboardTab::Bookings => html! {
            <EmptyState title="Bookings Management"
                description={Some(AttrValue::from("View and manage your bookings and reservations"))} />
        },
        DashboardTab::Earnings => html! {
            <EmptyState title="Earnings Analytics"
                description={Some(AttrValue::from("Track your earnings and financial performance"))} />
        },
        DashboardTab::Profile => profile(partner),
    };

    html! {
        <section class="py-12 bg-base-200 min-h-screen">
            <div class="max-w-7xl mx-auto px-4 space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <h2 class="text-3xl font-bold">{"Partner Dashboard"}</h2>
                        <p class="text-base-content/70">{format!("Welcome back, {}", partner.details.business_name)}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class={classes!("badge", "badge-lg", status_class(partner.status))}>{status_label(partner.status)}</span>
                        <span class="badge badge-ghost badge-lg">{format!("★ {}", rating_label(partner.rating))}</span>
                    </div>
                </div>
                <div role="tablist" class="tabs tabs-boxed">
                    {for DashboardTab::ALL.into_iter().map(|entry| {
                        let tab = tab.clone();
                        let active = *tab == entry;
                        html! {
                            <button role="tab" class={classes!("tab", active.then_some("tab-active"))}
                                onclick={Callback::from(move |_: MouseEvent| tab.set(entry))}>
                                {entry.label(kind)}
                            </button>
                        }
                    })}
                </div>
                {panel}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PartnerGuestProps {
    pub on_register: Callback<()>,
}

/// Pitch shown on the partner view before registration.
#[function_component(PartnerGuestPage)]
pub(crate) fn partner_guest_page(props: &PartnerGuestProps) -> Html {
    html! {
        <section class="py-24 bg-base-200 min-h-screen">
            <div class="max-w-3xl mx-auto px-4">
                <EmptyState
                    title="Become an Auto X Partner"
                    description={Some(AttrValue::from("Register your vehicles or materials business to start receiving requests from builders across Sri Lanka."))}
                >
                    <button class="btn btn-warning" onclick={props.on_register.reform(|_: MouseEvent| ())}>
                        {"Register as Partner"}
                    </button>
                </EmptyState>
            </div>
        </section>
    }
}
