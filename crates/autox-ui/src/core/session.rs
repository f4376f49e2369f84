//! App-wide session store and reducer.
//!
//! # Design
//! - One explicit snapshot holds navigation, session records, the open overlay and toasts.
//! - [`reduce`] is pure: views dispatch an [`AppAction`] and the store swaps in the result.
//! - Page gating lives in [`resolve_page`] so views never branch on sign-in state themselves.
//! - At most one overlay is open; opening another replaces it.

use autox_models::{
    DurationUnit, MaterialItem, Partner, PartnerRegistration, User, UserUpdate, Vehicle,
};
use chrono::{DateTime, Utc};
use yewdux::store::Store;

use crate::core::config::ToastTiming;
use crate::core::quote::{MAX_COUNT, MaterialQuote, VehicleBooking};

/// Upper bound on queued toasts; the oldest is dropped first.
pub const MAX_TOASTS: usize = 4;

/// Confirmation shown after the partner wizard is submitted.
pub const REGISTRATION_SUBMITTED: &str = "Partner registration submitted successfully! We'll review your application within 2-3 business days.";

/// Confirmation shown after a service request is sent.
pub const REQUEST_SUBMITTED: &str =
    "Service request submitted successfully! We'll contact you soon.";

/// Notice shown after the profile menu saves.
pub const PROFILE_UPDATED: &str = "Profile updated.";

/// Navigation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Landing page.
    #[default]
    Home,
    /// Service overview.
    Services,
    /// Materials catalog.
    Materials,
    /// Vehicle rental catalog.
    Vehicles,
    /// Company background.
    About,
    /// Support contact details.
    Contact,
    /// Partner area.
    PartnerDashboard,
}

impl View {
    /// Entries shown in the header and footer navigation, in order.
    pub const NAV: [Self; 6] = [
        Self::Home,
        Self::Services,
        Self::Materials,
        Self::Vehicles,
        Self::About,
        Self::Contact,
    ];

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Materials => "Materials",
            Self::Vehicles => "Vehicles",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::PartnerDashboard => "Partner Dashboard",
        }
    }
}

/// Service lines a visitor can jump into from the landing and services pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceKind {
    /// Construction materials.
    Materials,
    /// Vehicle and machinery rental.
    Vehicles,
}

impl ServiceKind {
    /// View that serves this line.
    #[must_use]
    pub const fn view(self) -> View {
        match self {
            Self::Materials => View::Materials,
            Self::Vehicles => View::Vehicles,
        }
    }
}

/// The page actually rendered for the current view and session.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    /// Landing page; the partner call-to-action only shows to signed-in visitors.
    Home {
        /// Whether to render the partner call-to-action band.
        show_partner_cta: bool,
    },
    /// Service overview.
    Services,
    /// Materials catalog for signed-in visitors.
    MaterialsCatalog,
    /// Materials teaser for guests.
    MaterialsGuest,
    /// Vehicle catalog for signed-in visitors.
    VehiclesCatalog,
    /// Vehicle teaser for guests.
    VehiclesGuest,
    /// Company background.
    About,
    /// Support contact details.
    Contact,
    /// Dashboard of the registered partner.
    PartnerDashboard(Partner),
    /// Partner pitch for visitors who have not registered.
    PartnerGuest,
}

/// A listing the visitor asked about, awaiting confirmation.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingRequest {
    /// Material quote.
    Material {
        /// Listing.
        item: MaterialItem,
        /// Requested quantity, at least one.
        quantity: u32,
    },
    /// Vehicle booking.
    Vehicle {
        /// Listing.
        vehicle: Vehicle,
        /// Requested duration, at least one.
        duration: u32,
        /// Billing unit.
        unit: DurationUnit,
    },
}

impl PendingRequest {
    /// Estimated cost in rupees at list price.
    #[must_use]
    pub fn estimated_total(&self) -> u64 {
        match self {
            Self::Material { item, quantity } => {
                MaterialQuote::with_quantity(item.price_per_unit, *quantity).total()
            }
            Self::Vehicle {
                vehicle,
                duration,
                unit,
            } => VehicleBooking::with_duration(vehicle, *duration, *unit).total(),
        }
    }

    /// Listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Material { item, .. } => &item.name,
            Self::Vehicle { vehicle, .. } => &vehicle.name,
        }
    }
}

/// The single modal currently shown, if any.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Overlay {
    /// Nothing open.
    #[default]
    None,
    /// Sign in / sign up.
    Auth,
    /// Partner registration wizard.
    PartnerRegistration,
    /// Service request confirmation.
    ServiceRequest(PendingRequest),
}

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral notice.
    Info,
    /// Confirmation.
    Success,
    /// Failure notice.
    Error,
}

/// A transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
    /// Auto-dismiss delay.
    pub timeout_ms: u32,
}

/// Global application store.
#[derive(Clone, Debug, PartialEq, Default, Store)]
pub struct AppState {
    /// Requested navigation target.
    pub view: View,
    /// Signed-in visitor.
    pub user: Option<User>,
    /// Partner registered during this session.
    pub partner: Option<Partner>,
    /// Open modal.
    pub overlay: Overlay,
    /// Mobile navigation drawer state.
    pub menu_open: bool,
    /// Queued notifications, oldest first.
    pub toasts: Vec<Toast>,
    /// Identifier for the next toast.
    pub next_toast_id: u64,
    /// Toast timings from the site configuration.
    pub toast_timing: ToastTiming,
}

/// Every state transition the UI can request.
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    /// Go to a view and close the mobile menu.
    Navigate(View),
    /// Jump into a service line.
    SelectService(ServiceKind),
    /// Flip the mobile menu.
    ToggleMenu,
    /// Show the auth modal.
    OpenAuth,
    /// Hide the auth modal.
    CloseAuth,
    /// Mock sign-in or sign-up completed.
    Login(User),
    /// Sign out.
    Logout,
    /// Merge profile edits into the current user.
    UpdateProfile(UserUpdate),
    /// Show the partner wizard.
    OpenPartnerRegistration,
    /// Hide the partner wizard.
    ClosePartnerRegistration,
    /// Wizard submitted.
    RegisterPartner {
        /// Packaged wizard data.
        registration: PartnerRegistration,
        /// Submission time.
        registered_at: DateTime<Utc>,
    },
    /// Open the dashboard for an existing partner.
    PartnerLogin,
    /// Ask for a material quote.
    RequestMaterial {
        /// Listing.
        item: MaterialItem,
        /// Requested quantity.
        quantity: u32,
    },
    /// Ask for a vehicle booking.
    RequestVehicle {
        /// Listing.
        vehicle: Vehicle,
        /// Requested duration.
        duration: u32,
        /// Billing unit.
        unit: DurationUnit,
    },
    /// Dismiss the request modal without sending.
    CloseServiceRequest,
    /// Request confirmed and logged.
    ServiceRequestSent,
    /// Remove a toast.
    DismissToast(u64),
    /// Queue an arbitrary toast.
    Notify {
        /// Message text.
        message: String,
        /// Severity.
        kind: ToastKind,
    },
}

/// Apply `action` to `state`, returning the next snapshot.
#[must_use]
pub fn reduce(state: &AppState, action: AppAction) -> AppState {
    let mut next = state.clone();
    match action {
        AppAction::Navigate(view) => {
            next.view = view;
            next.menu_open = false;
        }
        AppAction::SelectService(kind) => {
            next.view = kind.view();
            next.menu_open = false;
        }
        AppAction::ToggleMenu => next.menu_open = !next.menu_open,
        AppAction::OpenAuth => next.overlay = Overlay::Auth,
        AppAction::CloseAuth => close_if(&mut next, |overlay| matches!(overlay, Overlay::Auth)),
        AppAction::Login(user) => {
            next.user = Some(user);
            close_if(&mut next, |overlay| matches!(overlay, Overlay::Auth));
        }
        AppAction::Logout => {
            next.user = None;
            next.partner = None;
            next.view = View::Home;
        }
        AppAction::UpdateProfile(update) => {
            if let Some(user) = &state.user {
                next.user = Some(user.merged(&update));
                let timeout = next.toast_timing.default_ms;
                push_toast(&mut next, PROFILE_UPDATED, ToastKind::Info, timeout);
            }
        }
        AppAction::OpenPartnerRegistration => next.overlay = Overlay::PartnerRegistration,
        AppAction::ClosePartnerRegistration => close_if(&mut next, |overlay| {
            matches!(overlay, Overlay::PartnerRegistration)
        }),
        AppAction::RegisterPartner {
            registration,
            registered_at,
        } => {
            next.partner = Some(Partner::from_registration(registration, registered_at));
            close_if(&mut next, |overlay| {
                matches!(overlay, Overlay::PartnerRegistration)
            });
            next.view = View::PartnerDashboard;
            let timeout = next.toast_timing.registration_ms;
            push_toast(&mut next, REGISTRATION_SUBMITTED, ToastKind::Success, timeout);
        }
        AppAction::PartnerLogin => {
            if next.partner.is_some() {
                next.view = View::PartnerDashboard;
            }
        }
        AppAction::RequestMaterial { item, quantity } => {
            next.overlay = Overlay::ServiceRequest(PendingRequest::Material {
                item,
                quantity: quantity.clamp(1, MAX_COUNT),
            });
        }
        AppAction::RequestVehicle {
            vehicle,
            duration,
            unit,
        } => {
            next.overlay = Overlay::ServiceRequest(PendingRequest::Vehicle {
                vehicle,
                duration: duration.clamp(1, MAX_COUNT),
                unit,
            });
        }
        AppAction::CloseServiceRequest => close_if(&mut next, |overlay| {
            matches!(overlay, Overlay::ServiceRequest(_))
        }),
        AppAction::ServiceRequestSent => {
            close_if(&mut next, |overlay| {
                matches!(overlay, Overlay::ServiceRequest(_))
            });
            let timeout = next.toast_timing.request_ms;
            push_toast(&mut next, REQUEST_SUBMITTED, ToastKind::Success, timeout);
        }
        AppAction::DismissToast(id) => next.toasts.retain(|toast| toast.id != id),
        AppAction::Notify { message, kind } => {
            let timeout = next.toast_timing.default_ms;
            push_toast(&mut next, &message, kind, timeout);
        }
    }
    next
}

fn close_if(state: &mut AppState, predicate: impl Fn(&Overlay) -> bool) {
    if predicate(&state.overlay) {
        state.overlay = Overlay::None;
    }
}

fn push_toast(state: &mut AppState, message: &str, kind: ToastKind, timeout_ms: u32) {
    let id = state.next_toast_id;
    state.next_toast_id = state.next_toast_id.wrapping_add(1);
    state.toasts.push(Toast {
        id,
        message: message.to_string(),
        kind,
        timeout_ms,
    });
    if state.toasts.len() > MAX_TOASTS {
        let overflow = state.toasts.len() - MAX_TOASTS;
        state.toasts.drain(..overflow);
    }
}

/// Timer changes the toast host applies after the queue changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerPlan {
    /// Newly queued toasts and their delays.
    pub start: Vec<(u64, u32)>,
    /// Scheduled toasts that have left the queue.
    pub cancel: Vec<u64>,
}

/// Diff the ids that already have a timer against the current queue.
///
/// Toasts that keep their place in the queue are absent from both lists, so
/// their running timers are left alone and still fire after their own delay.
#[must_use]
pub fn plan_toast_timers(scheduled: &[u64], toasts: &[Toast]) -> TimerPlan {
    let start = toasts
        .iter()
        .filter(|toast| !scheduled.contains(&toast.id))
        .map(|toast| (toast.id, toast.timeout_ms))
        .collect();
    let cancel = scheduled
        .iter()
        .copied()
        .filter(|id| toasts.iter().all(|toast| toast.id != *id))
        .collect();
    TimerPlan { start, cancel }
}

/// Apply `action` to the global store from outside the app shell.
#[cfg(target_arch = "wasm32")]
pub fn dispatch(action: AppAction) {
    yewdux::prelude::Dispatch::<AppState>::new().reduce_mut(|state| *state = reduce(state, action));
}

/// Resolve which page to render for the current snapshot.
#[must_use]
pub fn resolve_page(state: &AppState) -> Page {
    let signed_in = state.user.is_some();
    match state.view {
        View::Home => Page::Home {
            show_partner_cta: signed_in,
        },
        View::Services => Page::Services,
        View::Materials if signed_in => Page::MaterialsCatalog,
        View::Materials => Page::MaterialsGuest,
        View::Vehicles if signed_in => Page::VehiclesCatalog,
        View::Vehicles => Page::VehiclesGuest,
        View::About => Page::About,
        View::Contact => Page::Contact,
        View::PartnerDashboard => state
            .partner
            .clone()
            .map_or(Page::PartnerGuest, Page::PartnerDashboard),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use autox_models::{
        BankDetails, InsuranceDetails, PartnerDocuments, PartnerKind, PartnerStatus,
    };
    use chrono::TimeZone;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::nil(),
            name: "Nimal".to_string(),
            email: "nimal@example.lk".to_string(),
            phone: None,
        }
    }

    fn registration() -> PartnerRegistration {
        PartnerRegistration {
            kind: PartnerKind::MaterialSupplier,
            business_name: "Kandy Sand Depot".to_string(),
            owner_name: "Sunil".to_string(),
            email: "depot@example.lk".to_string(),
            phone: "+94 81 222 3344".to_string(),
            address: "4 Peradeniya Road".to_string(),
            city: "Kandy".to_string(),
            province: "Central".to_string(),
            postal_code: "20000".to_string(),
            business_license: "BL-1".to_string(),
            tax_id: "TIN-1".to_string(),
            years_in_business: 3,
            description: String::new(),
            services: vec!["Sand Supply".to_string()],
            certifications: vec!["ISO 9001".to_string()],
            insurance: InsuranceDetails::default(),
            bank: BankDetails::default(),
            documents: PartnerDocuments::default(),
        }
    }

    fn signed_in() -> AppState {
        reduce(&AppState::default(), AppAction::Login(user()))
    }

    #[test]
    fn navigate_closes_menu() {
        let open = reduce(&AppState::default(), AppAction::ToggleMenu);
        assert!(open.menu_open);
        let next = reduce(&open, AppAction::Navigate(View::About));
        assert_eq!(next.view, View::About);
        assert!(!next.menu_open);
    }

    #[test]
    fn select_service_routes_to_catalog() {
        let next = reduce(
            &AppState::default(),
            AppAction::SelectService(ServiceKind::Vehicles),
        );
        assert_eq!(next.view, View::Vehicles);
    }

    #[test]
    fn login_closes_auth_overlay() {
        let open = reduce(&AppState::default(), AppAction::OpenAuth);
        assert_eq!(open.overlay, Overlay::Auth);
        let next = reduce(&open, AppAction::Login(user()));
        assert_eq!(next.overlay, Overlay::None);
        assert_eq!(next.user, Some(user()));
    }

    #[test]
    fn close_auth_leaves_other_overlays() {
        let wizard = reduce(&AppState::default(), AppAction::OpenPartnerRegistration);
        let next = reduce(&wizard, AppAction::CloseAuth);
        assert_eq!(next.overlay, Overlay::PartnerRegistration);
    }

    #[test]
    fn logout_clears_session_from_every_view() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).single().expect("valid time");
        for view in View::NAV.into_iter().chain([View::PartnerDashboard]) {
            let mut state = reduce(
                &signed_in(),
                AppAction::RegisterPartner {
                    registration: registration(),
                    registered_at: at,
                },
            );
            state = reduce(&state, AppAction::Navigate(view));
            let next = reduce(&state, AppAction::Logout);
            assert_eq!(next.user, None);
            assert_eq!(next.partner, None);
            assert_eq!(next.view, View::Home);
        }
    }

    #[test]
    fn update_profile_merges_into_current_user() {
        let next = reduce(
            &signed_in(),
            AppAction::UpdateProfile(UserUpdate {
                name: Some("Nimal Silva".to_string()),
                phone: None,
            }),
        );
        assert_eq!(next.user.map(|user| user.name), Some("Nimal Silva".to_string()));
        assert_eq!(next.toasts.len(), 1);
        assert_eq!(next.toasts[0].message, PROFILE_UPDATED);
        assert_eq!(next.toasts[0].kind, ToastKind::Info);
        assert_eq!(next.toasts[0].timeout_ms, ToastTiming::default().default_ms);
    }

    #[test]
    fn update_profile_without_user_is_ignored() {
        let next = reduce(
            &AppState::default(),
            AppAction::UpdateProfile(UserUpdate::default()),
        );
        assert_eq!(next, AppState::default());
    }

    #[test]
    fn register_partner_opens_dashboard_with_toast() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).single().expect("valid time");
        let wizard = reduce(&signed_in(), AppAction::OpenPartnerRegistration);
        let next = reduce(
            &wizard,
            AppAction::RegisterPartner {
                registration: registration(),
                registered_at: at,
            },
        );
        assert_eq!(next.overlay, Overlay::None);
        assert_eq!(next.view, View::PartnerDashboard);
        let partner = next.partner.clone().expect("partner registered");
        assert_eq!(partner.status, PartnerStatus::Pending);
        assert_eq!(partner.id, at.timestamp_millis().to_string());
        assert_eq!(next.toasts.len(), 1);
        assert_eq!(next.toasts[0].message, REGISTRATION_SUBMITTED);
        assert_eq!(next.toasts[0].timeout_ms, 5_000);
        assert_eq!(resolve_page(&next), Page::PartnerDashboard(partner));
    }

    #[test]
    fn partner_login_requires_partner() {
        let next = reduce(&signed_in(), AppAction::PartnerLogin);
        assert_eq!(next.view, View::Home);
    }

    #[test]
    fn service_request_flow() {
        let item = catalog::material("sand-1").expect("seeded").clone();
        let open = reduce(
            &signed_in(),
            AppAction::RequestMaterial {
                item: item.clone(),
                quantity: 0,
            },
        );
        let Overlay::ServiceRequest(pending) = &open.overlay else {
            panic!("request overlay expected");
        };
        assert_eq!(pending, &PendingRequest::Material { item, quantity: 1 });
        assert_eq!(pending.estimated_total(), 6_500);

        let sent = reduce(&open, AppAction::ServiceRequestSent);
        assert_eq!(sent.overlay, Overlay::None);
        assert_eq!(sent.toasts.last().map(|toast| toast.message.as_str()), Some(REQUEST_SUBMITTED));
        assert_eq!(sent.toasts.last().map(|toast| toast.timeout_ms), Some(3_000));
    }

    #[test]
    fn oversized_request_quantity_is_capped() {
        let item = catalog::material("sand-1").expect("seeded").clone();
        let open = reduce(
            &signed_in(),
            AppAction::RequestMaterial {
                item: item.clone(),
                quantity: u32::MAX,
            },
        );
        let Overlay::ServiceRequest(pending) = &open.overlay else {
            panic!("request overlay expected");
        };
        assert_eq!(pending.estimated_total(), item.price_per_unit * u64::from(MAX_COUNT));
    }

    #[test]
    fn vehicle_request_total_uses_unit_rate() {
        let vehicle = catalog::vehicle("jcb-1").expect("seeded").clone();
        let pending = PendingRequest::Vehicle {
            vehicle: vehicle.clone(),
            duration: 2,
            unit: DurationUnit::Days,
        };
        assert_eq!(pending.estimated_total(), vehicle.price_per_day * 2);
        assert_eq!(pending.title(), "JCB Excavator");
    }

    #[test]
    fn toast_queue_is_bounded_and_dismissable() {
        let mut state = AppState::default();
        for idx in 0..6 {
            state = reduce(
                &state,
                AppAction::Notify {
                    message: format!("n{idx}"),
                    kind: ToastKind::Info,
                },
            );
        }
        assert_eq!(state.toasts.len(), MAX_TOASTS);
        assert_eq!(state.toasts[0].message, "n2");
        assert_eq!(state.next_toast_id, 6);
        let next = reduce(&state, AppAction::DismissToast(3));
        assert_eq!(next.toasts.len(), MAX_TOASTS - 1);
        assert!(next.toasts.iter().all(|toast| toast.id != 3));
    }

    #[test]
    fn queued_toast_keeps_its_running_timer() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).single().expect("valid time");
        let registered = reduce(
            &AppState::default(),
            AppAction::RegisterPartner {
                registration: registration(),
                registered_at: at,
            },
        );
        let first = plan_toast_timers(&[], &registered.toasts);
        assert_eq!(first.start, vec![(0, 5_000)]);
        assert!(first.cancel.is_empty());

        // A second toast arrives while the registration timer is still running.
        let sent = reduce(&registered, AppAction::ServiceRequestSent);
        let second = plan_toast_timers(&[0], &sent.toasts);
        assert_eq!(second.start, vec![(1, 3_000)]);
        assert!(second.cancel.is_empty());

        let dismissed = reduce(&sent, AppAction::DismissToast(0));
        let third = plan_toast_timers(&[0, 1], &dismissed.toasts);
        assert!(third.start.is_empty());
        assert_eq!(third.cancel, vec![0]);
    }

    #[test]
    fn evicted_toast_timer_is_cancelled() {
        let mut state = AppState::default();
        for idx in 0..MAX_TOASTS {
            state = reduce(
                &state,
                AppAction::Notify {
                    message: format!("n{idx}"),
                    kind: ToastKind::Error,
                },
            );
        }
        let scheduled: Vec<u64> = state.toasts.iter().map(|toast| toast.id).collect();
        let overflowed = reduce(
            &state,
            AppAction::Notify {
                message: "late".to_string(),
                kind: ToastKind::Error,
            },
        );
        let plan = plan_toast_timers(&scheduled, &overflowed.toasts);
        assert_eq!(plan.cancel, vec![0]);
        assert_eq!(plan.start, vec![(4, ToastTiming::default().default_ms)]);
    }

    #[test]
    fn guests_see_guest_pages() {
        let guest = AppState::default();
        let cases = [
            (View::Home, Page::Home { show_partner_cta: false }),
            (View::Materials, Page::MaterialsGuest),
            (View::Vehicles, Page::VehiclesGuest),
            (View::PartnerDashboard, Page::PartnerGuest),
            (View::Services, Page::Services),
        ];
        for (view, page) in cases {
            let state = reduce(&guest, AppAction::Navigate(view));
            assert_eq!(resolve_page(&state), page);
        }
    }

    #[test]
    fn signed_in_users_see_catalogs_and_cta() {
        let state = signed_in();
        assert_eq!(resolve_page(&state), Page::Home { show_partner_cta: true });
        let materials = reduce(&state, AppAction::Navigate(View::Materials));
        assert_eq!(resolve_page(&materials), Page::MaterialsCatalog);
        let vehicles = reduce(&state, AppAction::Navigate(View::Vehicles));
        assert_eq!(resolve_page(&vehicles), Page::VehiclesCatalog);
        let dashboard = reduce(&state, AppAction::Navigate(View::PartnerDashboard));
        assert_eq!(resolve_page(&dashboard), Page::PartnerGuest);
    }
}
