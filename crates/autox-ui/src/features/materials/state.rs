//! Materials catalog filter state.
//!
//! # Design
//! - Filters are plain optional dimensions; `None` means "all".
//! - Filtering returns a borrowed subset in catalog order (no sorting, no paging).

use autox_models::{District, MaterialCategory, MaterialItem};

/// Active filters on the materials grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialFilters {
    /// Restrict to one category.
    pub category: Option<MaterialCategory>,
    /// Restrict to suppliers in one district.
    pub district: Option<District>,
}

impl MaterialFilters {
    /// Whether any dimension is restricted.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.category.is_some() || self.district.is_some()
    }

    /// Whether `item` passes every active dimension.
    #[must_use]
    pub fn matches(&self, item: &MaterialItem) -> bool {
        self.category.is_none_or(|category| item.category == category)
            && self
                .district
                .is_none_or(|district| item.supplier.district == district)
    }

    /// Update the category from a select value; the empty value clears it.
    pub fn set_category_value(&mut self, value: &str) {
        self.category = MaterialCategory::from_value(value);
    }

    /// Update the district from a select value; the empty value clears it.
    pub fn set_district_value(&mut self, value: &str) {
        self.district = District::from_label(value);
    }
}

/// Items passing `filters`, in catalog order.
#[must_use]
pub fn filter_materials<'a>(
    items: &'a [MaterialItem],
    filters: &MaterialFilters,
) -> Vec<&'a MaterialItem> {
    items.iter().filter(|item| filters.matches(item)).collect()
}

/// Districts with at least one supplier, in [`District::ALL`] order.
#[must_use]
pub fn districts_in(items: &[MaterialItem]) -> Vec<District> {
    District::ALL
        .into_iter()
        .filter(|district| items.iter().any(|item| item.supplier.district == *district))
        .collect()
}
