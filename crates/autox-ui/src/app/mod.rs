//! Application shell: store wiring, page selection and overlays.
//!
//! # Design
//! - Every transition goes through `core::session::reduce`; this module only
//!   translates component callbacks into actions.
//! - Site configuration is read once at mount; a bad embedded config falls
//!   back to defaults and is logged.

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::toast::ToastHost;
use crate::core::config::SiteConfig;
use crate::core::session::{AppAction, AppState, Overlay, Page, reduce, resolve_page};
use crate::features::auth::view::AuthModal;
use crate::features::materials::view::{MaterialsGuestPage, MaterialsPage};
use crate::features::partner::view::{PartnerDashboardPage, PartnerGuestPage};
use crate::features::registration::view::RegistrationModal;
use crate::features::request::view::ServiceRequestModal;
use crate::features::site::view::{AboutPage, ContactPage, HomePage, ServicesPage};
use crate::features::vehicles::view::{VehicleSelection, VehiclesGuestPage, VehiclesPage};
use autox_models::{MaterialItem, PartnerRegistration, User, UserUpdate};
use gloo::console::{error, log};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

fn apply(dispatch: &Dispatch<AppState>, action: AppAction) {
    dispatch.reduce_mut(|state| *state = reduce(state, action));
}

/// Callback that maps its input into an action.
fn action<T: 'static>(
    dispatch: &Dispatch<AppState>,
    map: impl Fn(T) -> AppAction + 'static,
) -> Callback<T> {
    let dispatch = dispatch.clone();
    Callback::from(move |input: T| apply(&dispatch, map(input)))
}

#[function_component(AutoXApp)]
pub(crate) fn autox_app() -> Html {
    let dispatch = Dispatch::<AppState>::new();
    let config = use_memo(
        |_| {
            let (config, problem) = SiteConfig::load();
            if let Some(err) = problem {
                error!("site config rejected, using defaults", err.to_string(), err.detail());
            }
            config
        },
        (),
    );
    {
        let dispatch = dispatch.clone();
        let timing = config.toasts;
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|state| state.toast_timing = timing);
                log!("auto x ui started");
                || ()
            },
            (),
        );
    }

    let page = use_selector(resolve_page);
    let view = use_selector(|state: &AppState| state.view);
    let user = use_selector(|state: &AppState| state.user.clone());
    let overlay = use_selector(|state: &AppState| state.overlay.clone());
    let menu_open = use_selector(|state: &AppState| state.menu_open);
    let toasts = use_selector(|state: &AppState| state.toasts.clone());

    let on_navigate = action(&dispatch, AppAction::Navigate);
    let on_select_service = action(&dispatch, AppAction::SelectService);
    let on_auth = action(&dispatch, |()| AppAction::OpenAuth);
    let on_close_auth = action(&dispatch, |()| AppAction::CloseAuth);
    let on_login = action(&dispatch, |user: User| AppAction::Login(user));
    let on_logout = action(&dispatch, |()| AppAction::Logout);
    let on_update_profile = action(&dispatch, |update: UserUpdate| AppAction::UpdateProfile(update));
    let on_toggle_menu = action(&dispatch, |()| AppAction::ToggleMenu);
    let on_open_registration = action(&dispatch, |()| AppAction::OpenPartnerRegistration);
    let on_close_registration = action(&dispatch, |()| AppAction::ClosePartnerRegistration);
    let on_register = action(&dispatch, |registration: PartnerRegistration| {
        AppAction::RegisterPartner {
            registration,
            registered_at: chrono::Utc::now(),
        }
    });
    let on_partner_login = action(&dispatch, |()| AppAction::PartnerLogin);
    let on_request_material = action(&dispatch, |(item, quantity): (MaterialItem, u32)| {
        AppAction::RequestMaterial { item, quantity }
    });
    let on_request_vehicle = action(&dispatch, |(vehicle, duration, unit): VehicleSelection| {
        AppAction::RequestVehicle {
            vehicle,
            duration,
            unit,
        }
    });
    let on_close_request = action(&dispatch, |()| AppAction::CloseServiceRequest);
    let on_request_sent = action(&dispatch, |()| AppAction::ServiceRequestSent);
    let on_dismiss_toast = action(&dispatch, AppAction::DismissToast);

    let body = match (*page).clone() {
        Page::Home { show_partner_cta } => html! {
            <HomePage
                {show_partner_cta}
                on_select_service={on_select_service.clone()}
                on_register_partner={on_open_registration.clone()}
                on_partner_login={on_partner_login}
            />
        },
        Page::Services => html! { <ServicesPage on_select_service={on_select_service} /> },
        Page::MaterialsCatalog => html! { <MaterialsPage on_request={on_request_material} /> },
        Page::MaterialsGuest => html! { <MaterialsGuestPage on_sign_up={on_auth.clone()} /> },
        Page::VehiclesCatalog => html! { <VehiclesPage on_request={on_request_vehicle} /> },
        Page::VehiclesGuest => html! { <VehiclesGuestPage on_sign_up={on_auth.clone()} /> },
        Page::About => html! { <AboutPage config={(*config).clone()} /> },
        Page::Contact => html! { <ContactPage config={(*config).clone()} /> },
        Page::PartnerDashboard(partner) => html! { <PartnerDashboardPage {partner} /> },
        Page::PartnerGuest => html! { <PartnerGuestPage on_register={on_open_registration.clone()} /> },
    };

    let modal = match (*overlay).clone() {
        Overlay::None => html! {},
        Overlay::Auth => html! { <AuthModal on_close={on_close_auth} {on_login} /> },
        Overlay::PartnerRegistration => html! {
            <RegistrationModal on_close={on_close_registration} on_submit={on_register} />
        },
        Overlay::ServiceRequest(pending) => html! {
            <ServiceRequestModal {pending} on_close={on_close_request} on_sent={on_request_sent} />
        },
    };

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header
                config={(*config).clone()}
                user={(*user).clone()}
                current={*view}
                menu_open={*menu_open}
                on_navigate={on_navigate.clone()}
                {on_auth}
                {on_logout}
                {on_update_profile}
                {on_toggle_menu}
            />
            <main class="flex-1">{body}</main>
            <Footer config={(*config).clone()} {on_navigate} />
            {modal}
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss_toast} />
        </div>
    }
}

/// Mount the app on `#root`, or on `<body>` when the page has no root element.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AutoXApp>::with_root(root).render();
    } else {
        yew::Renderer::<AutoXApp>::new().render();
    }
}
