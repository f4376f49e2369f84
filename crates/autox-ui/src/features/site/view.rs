//! Landing, services, about and contact pages.
//!
//! # Design
//! - Copy is static; the only inputs are navigation callbacks and the site config.
//! - The partner band renders under the hero only for signed-in visitors.

use crate::core::config::SiteConfig;
use crate::core::contact::{open_dialer, open_whatsapp, report_failure, support_message};
use crate::core::session::ServiceKind;
use yew::prelude::*;

struct Highlight {
    title: &'static str,
    caption: &'static str,
}

const MATERIAL_HIGHLIGHTS: [Highlight; 4] = [
    Highlight { title: "River Sand", caption: "Premium quality" },
    Highlight { title: "Garden Soil", caption: "Fertile & rich" },
    Highlight { title: "Clay Bricks", caption: "Durable build" },
    Highlight { title: "Steel Rods", caption: "Heavy duty" },
];

const VEHICLE_HIGHLIGHTS: [Highlight; 4] = [
    Highlight { title: "JCB Excavator", caption: "Heavy duty" },
    Highlight { title: "Transport Lorry", caption: "Large capacity" },
    Highlight { title: "Water Bowser", caption: "Site supply" },
    Highlight { title: "Boom Lift", caption: "High access" },
];

const STANDARDS: [Highlight; 4] = [
    Highlight { title: "Quality Guaranteed", caption: "Certified materials and inspected vehicles" },
    Highlight { title: "Fast Delivery", caption: "Same day service in Colombo" },
    Highlight { title: "Expert Support", caption: "24/7 Availability" },
    Highlight { title: "Competitive", caption: "Pricing Guaranteed" },
];

fn highlight_grid(items: &[Highlight]) -> Html {
    html! {
        <ul class="grid grid-cols-2 gap-3">
            {for items.iter().map(|item| html! {
                <li class="rounded-lg bg-base-200 p-3">
                    <p class="font-semibold">{item.title}</p>
                    <p class="text-xs text-base-content/60">{item.caption}</p>
                </li>
            })}
        </ul>
    }
}

fn service_cards(on_select: &Callback<ServiceKind>) -> Html {
    let pick = |kind: ServiceKind| on_select.reform(move |_: MouseEvent| kind);
    html! {
        <div class="grid gap-8 md:grid-cols-2">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title text-2xl">{"Premium Materials"}</h3>
                    <p class="text-base-content/70">{"Sand, soil, bricks, metal and aggregate from verified suppliers."}</p>
                    {highlight_grid(&MATERIAL_HIGHLIGHTS)}
                    <button class="btn btn-warning mt-4" onclick={pick(ServiceKind::Materials)}>{"Get Materials"}</button>
                </div>
            </div>
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title text-2xl">{"Professional Vehicles"}</h3>
                    <p class="text-base-content/70">{"Excavators, lorries, bowsers and lifts with experienced operators."}</p>
                    {highlight_grid(&VEHICLE_HIGHLIGHTS)}
                    <button class="btn btn-neutral mt-4" onclick={pick(ServiceKind::Vehicles)}>{"Rent Vehicles"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct HomePageProps {
    pub show_partner_cta: bool,
    pub on_select_service: Callback<ServiceKind>,
    pub on_register_partner: Callback<()>,
    pub on_partner_login: Callback<()>,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomePageProps) -> Html {
    let pick = |kind: ServiceKind| props.on_select_service.reform(move |_: MouseEvent| kind);
    html! {
        <>
            <section class="hero min-h-[70vh] bg-gradient-to-br from-neutral to-base-300">
                <div class="hero-content text-center">
                    <div class="max-w-3xl space-y-6">
                        <span class="badge badge-warning badge-lg">{"Trusted by 500+ Construction Companies"}</span>
                        <h1 class="text-5xl font-black">{"Build Your Dreams with Premium Materials"}</h1>
                        <p class="text-lg text-base-content/70">
                            {"Quality construction materials and professional vehicles, delivered to your site."}
                        </p>
                        <div class="flex flex-wrap justify-center gap-4">
                            <button class="btn btn-warning btn-lg" onclick={pick(ServiceKind::Materials)}>{"Get Materials"}</button>
                            <button class="btn btn-outline btn-lg" onclick={pick(ServiceKind::Vehicles)}>{"Rent Vehicles"}</button>
                        </div>
                        <div class="stats shadow">
                            <div class="stat"><div class="stat-value">{"24/7"}</div><div class="stat-desc">{"Support"}</div></div>
                            <div class="stat"><div class="stat-value">{"500+"}</div><div class="stat-desc">{"Projects"}</div></div>
                            <div class="stat"><div class="stat-value">{"99%"}</div><div class="stat-desc">{"Satisfaction"}</div></div>
                        </div>
                    </div>
                </div>
            </section>
            <section class="py-16">
                <div class="max-w-7xl mx-auto px-4">{service_cards(&props.on_select_service)}</div>
            </section>
            {if props.show_partner_cta {
                html! {
                    <PartnerCta
                        on_register={props.on_register_partner.clone()}
                        on_partner_login={props.on_partner_login.clone()}
                    />
                }
            } else {
                html! {}
            }}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PartnerCtaProps {
    pub on_register: Callback<()>,
    pub on_partner_login: Callback<()>,
}

#[function_component(PartnerCta)]
pub(crate) fn partner_cta(props: &PartnerCtaProps) -> Html {
    html! {
        <section class="py-20 bg-primary text-primary-content">
            <div class="max-w-7xl mx-auto px-4 text-center space-y-10">
                <div class="space-y-4">
                    <h2 class="text-4xl font-bold">{"Become an Auto X Partner"}</h2>
                    <p class="text-lg max-w-3xl mx-auto opacity-80">
                        {"Join our network of trusted vehicle owners and material suppliers. Grow your business and reach more customers through our platform."}
                    </p>
                </div>
                <div class="grid gap-8 md:grid-cols-2 text-left">
                    <div class="rounded-2xl bg-white/10 p-8 space-y-2">
                        <h3 class="text-2xl font-bold">{"Vehicle Owners"}</h3>
                        <ul class="space-y-1 opacity-90">
                            <li>{"• List excavators, lorries and lifts"}</li>
                            <li>{"• Set your own hourly and daily rates"}</li>
                            <li>{"• Get bookings from verified builders"}</li>
                        </ul>
                    </div>
                    <div class="rounded-2xl bg-white/10 p-8 space-y-2">
                        <h3 class="text-2xl font-bold">{"Material Suppliers"}</h3>
                        <ul class="space-y-1 opacity-90">
                            <li>{"• Reach buyers across all 25 districts"}</li>
                            <li>{"• Receive quote requests directly"}</li>
                            <li>{"• Build your rating with every delivery"}</li>
                        </ul>
                    </div>
                </div>
                <div class="flex flex-wrap justify-center gap-4">
                    <button class="btn btn-warning btn-lg" onclick={props.on_register.reform(|_: MouseEvent| ())}>
                        {"Register as Partner"}
                    </button>
                    <button class="btn btn-outline btn-lg" onclick={props.on_partner_login.reform(|_: MouseEvent| ())}>
                        {"Partner Login"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ServicesPageProps {
    pub on_select_service: Callback<ServiceKind>,
}

#[function_component(ServicesPage)]
pub(crate) fn services_page(props: &ServicesPageProps) -> Html {
    html! {
        <section class="py-16 bg-base-200 min-h-screen">
            <div class="max-w-7xl mx-auto px-4 space-y-12">
                <div class="text-center space-y-2">
                    <h2 class="text-4xl font-bold">{"Our Services"}</h2>
                    <p class="text-base-content/70">{"Everything your site needs, from foundations to finishing."}</p>
                </div>
                {service_cards(&props.on_select_service)}
                <div>
                    <h3 class="text-2xl font-bold text-center mb-6">{"Service Standards"}</h3>
                    <div class="grid gap-4 md:grid-cols-4">
                        {for STANDARDS.iter().map(|item| html! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h4 class="font-semibold">{item.title}</h4>
                                    <p class="text-sm text-base-content/60">{item.caption}</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SitePageProps {
    pub config: SiteConfig,
}

#[function_component(AboutPage)]
pub(crate) fn about_page(props: &SitePageProps) -> Html {
    html! {
        <section class="py-16 min-h-screen">
            <div class="max-w-4xl mx-auto px-4 space-y-6">
                <h2 class="text-4xl font-bold">{format!("About {}", props.config.brand)}</h2>
                <p class="text-lg text-base-content/70">{props.config.tagline.clone()}</p>
                <p>
                    {"We connect builders with verified material suppliers and vehicle owners across every district of Sri Lanka. \
                      Listings carry transparent pricing and suppliers are reachable directly by phone or WhatsApp."}
                </p>
                <div class="stats stats-vertical md:stats-horizontal shadow w-full">
                    <div class="stat"><div class="stat-value">{"500+"}</div><div class="stat-desc">{"Projects"}</div></div>
                    <div class="stat"><div class="stat-value">{"25"}</div><div class="stat-desc">{"Districts"}</div></div>
                    <div class="stat"><div class="stat-value">{"99%"}</div><div class="stat-desc">{"Satisfaction"}</div></div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ContactPage)]
pub(crate) fn contact_page(props: &SitePageProps) -> Html {
    let config = &props.config;
    let on_call = {
        let phone = config.support_phone.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_dialer(&phone) {
                report_failure(&phone, &err);
            }
        })
    };
    let on_whatsapp = {
        let phone = config.support_whatsapp.clone();
        let message = support_message(&config.brand);
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = open_whatsapp(&phone, &message) {
                report_failure(&phone, &err);
            }
        })
    };
    html! {
        <section class="py-16 bg-base-200 min-h-screen">
            <div class="max-w-3xl mx-auto px-4">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-4">
                        <h2 class="card-title text-3xl">{"Contact Us"}</h2>
                        <p class="text-base-content/70">{"Our support team is available around the clock."}</p>
                        <dl class="space-y-2">
                            <div><dt class="text-xs uppercase text-base-content/50">{"Phone"}</dt><dd>{config.support_phone.clone()}</dd></div>
                            <div><dt class="text-xs uppercase text-base-content/50">{"Email"}</dt><dd>{config.support_email.clone()}</dd></div>
                            <div><dt class="text-xs uppercase text-base-content/50">{"Office"}</dt><dd>{config.office_address.clone()}</dd></div>
                        </dl>
                        <div class="card-actions">
                            <button class="btn btn-warning" onclick={on_call}>{"Call Support"}</button>
                            <button class="btn btn-success" onclick={on_whatsapp}>{"WhatsApp"}</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
