use anyhow::{Context, bail};
use autox_models::{DurationUnit, MaterialCategory, PartnerKind, PartnerStatus, RequestAmount};
use autox_ui::catalog;
use autox_ui::core::quote::{MaterialQuote, VehicleBooking, format_rupees};
use autox_ui::core::session::{
    AppAction, AppState, Overlay, Page, REGISTRATION_SUBMITTED, REQUEST_SUBMITTED, ServiceKind,
    View, reduce, resolve_page,
};
use autox_ui::features::auth::state::AuthForm;
use autox_ui::features::materials::state::{MaterialFilters, filter_materials};
use autox_ui::features::partner::state::DashboardStats;
use autox_ui::features::registration::state::{Field, RegistrationStep, Wizard};
use autox_ui::features::request::state::build_request;
use chrono::{TimeZone, Utc};

fn run(state: AppState, actions: impl IntoIterator<Item = AppAction>) -> AppState {
    actions
        .into_iter()
        .fold(state, |current, action| reduce(&current, action))
}

#[test]
fn guest_signs_in_and_requests_material_quote() -> anyhow::Result<()> {
    let state = run(
        AppState::default(),
        [AppAction::SelectService(ServiceKind::Materials)],
    );
    assert_eq!(resolve_page(&state), Page::MaterialsGuest);

    let form = AuthForm {
        email: "nimal@example.lk".to_string(),
        password: "secret".to_string(),
        ..AuthForm::default()
    };
    let user = form.to_user()?;
    let state = run(state, [AppAction::OpenAuth, AppAction::Login(user)]);
    assert_eq!(state.overlay, Overlay::None);
    assert_eq!(resolve_page(&state), Page::MaterialsCatalog);

    let filters = MaterialFilters {
        category: Some(MaterialCategory::Sand),
        district: None,
    };
    let sand = filter_materials(catalog::materials(), &filters);
    let river_sand = sand
        .first()
        .copied()
        .context("expected at least one sand listing")?;
    assert_eq!(river_sand.id, "sand-1");

    let mut quote = MaterialQuote::for_item(river_sand);
    quote.increment();
    quote.increment();
    assert_eq!(format_rupees(quote.total()), "Rs. 19,500");

    let state = run(
        state,
        [AppAction::RequestMaterial {
            item: river_sand.clone(),
            quantity: quote.quantity,
        }],
    );
    let Overlay::ServiceRequest(pending) = &state.overlay else {
        bail!("request overlay should be open");
    };
    let request = build_request(pending, "  deliver to Panadura  ");
    assert_eq!(request.estimated_total, 19_500);
    assert_eq!(request.note.as_deref(), Some("deliver to Panadura"));
    assert_eq!(
        request.amount,
        RequestAmount::Quantity {
            quantity: 3,
            unit: "cubic meter".to_string()
        }
    );

    let state = run(state, [AppAction::ServiceRequestSent]);
    assert_eq!(state.overlay, Overlay::None);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, REQUEST_SUBMITTED);
    Ok(())
}

#[test]
fn vehicle_booking_by_day_reaches_request_overlay() -> anyhow::Result<()> {
    let jcb = catalog::vehicle("jcb-1").context("jcb-1 missing from catalog")?;
    let mut booking = VehicleBooking::for_vehicle(jcb);
    booking.set_unit(DurationUnit::Days);
    booking.set_input("2");
    assert_eq!(booking.total(), 420_000);

    let state = run(
        AppState::default(),
        [AppAction::RequestVehicle {
            vehicle: jcb.clone(),
            duration: booking.duration,
            unit: booking.unit,
        }],
    );
    let Overlay::ServiceRequest(pending) = &state.overlay else {
        bail!("request overlay should be open");
    };
    assert_eq!(pending.estimated_total(), 420_000);
    assert_eq!(pending.title(), "JCB Excavator");
    Ok(())
}

#[test]
fn partner_registration_lands_on_pending_dashboard() -> anyhow::Result<()> {
    let mut wizard = Wizard::default();
    wizard.advance();
    assert_eq!(wizard.step, RegistrationStep::PartnerType);

    wizard.form.set_partner_kind(PartnerKind::VehicleOwner);
    wizard
        .form
        .set_field(Field::BusinessName, "Ruwan Plant Hire".to_string());
    wizard.form.set_field(Field::YearsInBusiness, "7".to_string());
    wizard.form.toggle_service("Excavation Services");
    while !wizard.step.is_last() {
        wizard.advance();
    }
    assert_eq!(wizard.progress_percent(), 100);
    let registration = wizard.submit()?;
    assert_eq!(wizard, Wizard::default());

    let registered_at = Utc
        .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
        .single()
        .context("ambiguous timestamp")?;
    let state = run(
        AppState::default(),
        [
            AppAction::OpenPartnerRegistration,
            AppAction::RegisterPartner {
                registration,
                registered_at,
            },
        ],
    );
    assert_eq!(state.view, View::PartnerDashboard);
    assert_eq!(state.overlay, Overlay::None);
    assert_eq!(state.toasts[0].message, REGISTRATION_SUBMITTED);

    let Page::PartnerDashboard(partner) = resolve_page(&state) else {
        bail!("dashboard should render for a registered partner");
    };
    assert_eq!(partner.status, PartnerStatus::Pending);
    assert_eq!(partner.id, registered_at.timestamp_millis().to_string());
    assert_eq!(partner.details.years_in_business, 7);

    let stats = DashboardStats::for_partner(&partner);
    assert_eq!(stats.total_listings, 1);
    assert_eq!(stats.active_listings, 1);

    let state = run(state, [AppAction::Logout]);
    assert_eq!(resolve_page(&state), Page::Home { show_partner_cta: false });
    Ok(())
}
