//! Service request confirmation state.

use autox_models::{RequestAmount, RequestedItem, ServiceRequest};

use crate::core::session::PendingRequest;

/// Raw inputs of the request modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestForm {
    /// Optional note for the supplier.
    pub note: String,
}

/// Package a pending request for logging; a blank note becomes `None`.
#[must_use]
pub fn build_request(pending: &PendingRequest, note: &str) -> ServiceRequest {
    let note = note.trim();
    let note = (!note.is_empty()).then(|| note.to_string());
    let estimated_total = pending.estimated_total();
    match pending {
        PendingRequest::Material { item, quantity } => ServiceRequest {
            item: RequestedItem::Material {
                id: item.id.clone(),
                name: item.name.clone(),
                supplier: item.supplier.name.clone(),
            },
            amount: RequestAmount::Quantity {
                quantity: *quantity,
                unit: item.unit.clone(),
            },
            estimated_total,
            note,
        },
        PendingRequest::Vehicle {
            vehicle,
            duration,
            unit,
        } => ServiceRequest {
            item: RequestedItem::Vehicle {
                id: vehicle.id.clone(),
                name: vehicle.name.clone(),
                owner: vehicle.owner.name.clone(),
            },
            amount: RequestAmount::Rental {
                duration: *duration,
                unit: *unit,
            },
            estimated_total,
            note,
        },
    }
}

/// Human summary of the requested amount, e.g. `3 cubic meter` or `2 days`.
#[must_use]
pub fn amount_summary(pending: &PendingRequest) -> String {
    match pending {
        PendingRequest::Material { item, quantity } => format!("{quantity} {}", item.unit),
        PendingRequest::Vehicle { duration, unit, .. } => {
            let label = if *duration == 1 {
                unit.singular()
            } else {
                unit.plural()
            };
            format!("{duration} {label}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{amount_summary, build_request};
    use crate::catalog;
    use crate::core::session::PendingRequest;
    use autox_models::{DurationUnit, RequestAmount, RequestedItem};

    #[test]
    fn material_request_carries_quantity_and_total() {
        let item = catalog::material("bricks-1").expect("seeded").clone();
        let pending = PendingRequest::Material { item, quantity: 3 };
        let request = build_request(&pending, "  Deliver before noon ");
        assert_eq!(
            request.item,
            RequestedItem::Material {
                id: "bricks-1".to_string(),
                name: "Red Clay Bricks".to_string(),
                supplier: "Wayamba Brick Works".to_string(),
            }
        );
        assert_eq!(
            request.amount,
            RequestAmount::Quantity {
                quantity: 3,
                unit: "per 100 pieces".to_string()
            }
        );
        assert_eq!(request.estimated_total, 9_600);
        assert_eq!(request.note.as_deref(), Some("Deliver before noon"));
    }

    #[test]
    fn blank_note_is_dropped() {
        let vehicle = catalog::vehicle("bowser-1").expect("seeded").clone();
        let pending = PendingRequest::Vehicle {
            vehicle,
            duration: 2,
            unit: DurationUnit::Days,
        };
        let request = build_request(&pending, "   ");
        assert_eq!(request.note, None);
        assert_eq!(request.estimated_total, 210_000);
    }

    #[test]
    fn amount_summary_pluralises() {
        let vehicle = catalog::vehicle("boom-1").expect("seeded").clone();
        let one = PendingRequest::Vehicle {
            vehicle: vehicle.clone(),
            duration: 1,
            unit: DurationUnit::Hours,
        };
        assert_eq!(amount_summary(&one), "1 hour");
        let many = PendingRequest::Vehicle {
            vehicle,
            duration: 4,
            unit: DurationUnit::Days,
        };
        assert_eq!(amount_summary(&many), "4 days");
    }
}
