//! Vehicle catalog filter state.

use autox_models::{District, Vehicle, VehicleKind};

/// Active filters on the vehicle grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VehicleFilters {
    /// Restrict to one vehicle type.
    pub kind: Option<VehicleKind>,
    /// Restrict to owners in one district.
    pub district: Option<District>,
}

impl VehicleFilters {
    /// Whether any dimension is restricted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.kind.is_some() || self.district.is_some()
    }

    /// Whether `vehicle` passes every active dimension.
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.kind.is_none_or(|kind| vehicle.kind == kind)
            && self
                .district
                .is_none_or(|district| vehicle.owner.district == district)
    }

    /// Update the kind from a select value; the empty value clears it.
    pub fn set_kind_value(&mut self, value: &str) {
        self.kind = VehicleKind::from_value(value);
    }

    /// Update the district from a select value; the empty value clears it.
    pub fn set_district_value(&mut self, value: &str) {
        self.district = District::from_label(value);
    }
}

/// Vehicles passing `filters`, in catalog order.
#[must_use]
pub fn filter_vehicles<'a>(vehicles: &'a [Vehicle], filters: &VehicleFilters) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| filters.matches(vehicle))
        .collect()
}

/// Districts with at least one owner, in [`District::ALL`] order.
#[must_use]
pub fn districts_in(vehicles: &[Vehicle]) -> Vec<District> {
    District::ALL
        .into_iter()
        .filter(|district| {
            vehicles
                .iter()
                .any(|vehicle| vehicle.owner.district == *district)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{VehicleFilters, districts_in, filter_vehicles};
    use crate::catalog;
    use autox_models::{District, VehicleKind};

    #[test]
    fn kind_and_district_combine() {
        let filters = VehicleFilters {
            kind: Some(VehicleKind::Excavator),
            district: Some(District::Colombo),
        };
        let ids: Vec<_> = filter_vehicles(catalog::vehicles(), &filters)
            .iter()
            .map(|vehicle| vehicle.id.as_str())
            .collect();
        assert_eq!(ids, ["jcb-1"]);
    }

    #[test]
    fn kind_only_keeps_catalog_order() {
        let mut filters = VehicleFilters::default();
        filters.set_kind_value("lorry");
        let ids: Vec<_> = filter_vehicles(catalog::vehicles(), &filters)
            .iter()
            .map(|vehicle| vehicle.id.as_str())
            .collect();
        assert_eq!(ids, ["lorry-1", "lorry-2"]);
        filters.set_kind_value("");
        assert!(!filters.is_active());
    }

    #[test]
    fn district_select_uses_labels() {
        let mut filters = VehicleFilters::default();
        filters.set_district_value("Galle");
        assert_eq!(filters.district, Some(District::Galle));
        let filtered = filter_vehicles(catalog::vehicles(), &filters);
        assert!(filtered.iter().all(|vehicle| vehicle.owner.district == District::Galle));
    }

    #[test]
    fn district_options_cover_owners() {
        let districts = districts_in(catalog::vehicles());
        for vehicle in catalog::vehicles() {
            assert!(districts.contains(&vehicle.owner.district));
        }
    }
}
