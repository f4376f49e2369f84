//! Catalog records: materials, vehicles and the supplier contact card embedded in each.

use serde::{Deserialize, Serialize};

/// Administrative districts of Sri Lanka, used to locate suppliers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum District {
    /// Colombo (Western).
    Colombo,
    /// Gampaha (Western).
    Gampaha,
    /// Kalutara (Western).
    Kalutara,
    /// Kandy (Central).
    Kandy,
    /// Matale (Central).
    Matale,
    /// Nuwara Eliya (Central).
    NuwaraEliya,
    /// Galle (Southern).
    Galle,
    /// Matara (Southern).
    Matara,
    /// Hambantota (Southern).
    Hambantota,
    /// Jaffna (Northern).
    Jaffna,
    /// Kilinochchi (Northern).
    Kilinochchi,
    /// Mannar (Northern).
    Mannar,
    /// Vavuniya (Northern).
    Vavuniya,
    /// Mullaitivu (Northern).
    Mullaitivu,
    /// Batticaloa (Eastern).
    Batticaloa,
    /// Ampara (Eastern).
    Ampara,
    /// Trincomalee (Eastern).
    Trincomalee,
    /// Kurunegala (North Western).
    Kurunegala,
    /// Puttalam (North Western).
    Puttalam,
    /// Anuradhapura (North Central).
    Anuradhapura,
    /// Polonnaruwa (North Central).
    Polonnaruwa,
    /// Badulla (Uva).
    Badulla,
    /// Monaragala (Uva).
    Monaragala,
    /// Ratnapura (Sabaragamuwa).
    Ratnapura,
    /// Kegalle (Sabaragamuwa).
    Kegalle,
}

impl District {
    /// Every district in display order.
    pub const ALL: [Self; 25] = [
        Self::Colombo,
        Self::Gampaha,
        Self::Kalutara,
        Self::Kandy,
        Self::Matale,
        Self::NuwaraEliya,
        Self::Galle,
        Self::Matara,
        Self::Hambantota,
        Self::Jaffna,
        Self::Kilinochchi,
        Self::Mannar,
        Self::Vavuniya,
        Self::Mullaitivu,
        Self::Batticaloa,
        Self::Ampara,
        Self::Trincomalee,
        Self::Kurunegala,
        Self::Puttalam,
        Self::Anuradhapura,
        Self::Polonnaruwa,
        Self::Badulla,
        Self::Monaragala,
        Self::Ratnapura,
        Self::Kegalle,
    ];

    /// Human-readable district name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Colombo => "Colombo",
            Self::Gampaha => "Gampaha",
            Self::Kalutara => "Kalutara",
            Self::Kandy => "Kandy",
            Self::Matale => "Matale",
            Self::NuwaraEliya => "Nuwara Eliya",
            Self::Galle => "Galle",
            Self::Matara => "Matara",
            Self::Hambantota => "Hambantota",
            Self::Jaffna => "Jaffna",
            Self::Kilinochchi => "Kilinochchi",
            Self::Mannar => "Mannar",
            Self::Vavuniya => "Vavuniya",
            Self::Mullaitivu => "Mullaitivu",
            Self::Batticaloa => "Batticaloa",
            Self::Ampara => "Ampara",
            Self::Trincomalee => "Trincomalee",
            Self::Kurunegala => "Kurunegala",
            Self::Puttalam => "Puttalam",
            Self::Anuradhapura => "Anuradhapura",
            Self::Polonnaruwa => "Polonnaruwa",
            Self::Badulla => "Badulla",
            Self::Monaragala => "Monaragala",
            Self::Ratnapura => "Ratnapura",
            Self::Kegalle => "Kegalle",
        }
    }

    /// Look a district up by its display name, ignoring case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim();
        Self::ALL
            .into_iter()
            .find(|district| district.label().eq_ignore_ascii_case(needle))
    }
}

/// Contact and reputation card for whoever fulfils a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Supplier {
    /// Trading name shown on the listing.
    pub name: String,
    /// Town or area within the district.
    pub location: String,
    /// District the supplier operates from.
    pub district: District,
    /// Phone number as published by the supplier (free-form).
    pub phone: String,
    /// Average rating out of five.
    pub rating: f32,
    /// Orders or rental jobs completed through the platform.
    pub completed_jobs: u32,
}

/// Material groupings offered in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    /// River, sea and construction sand.
    Sand,
    /// Garden soil, topsoil and fill.
    Soil,
    /// Clay bricks, blocks and pavers.
    Bricks,
    /// Reinforcement steel and other metal.
    Metal,
    /// Crushed stone and aggregate.
    Gravel,
}

impl MaterialCategory {
    /// All categories in filter order.
    pub const ALL: [Self; 5] = [
        Self::Sand,
        Self::Soil,
        Self::Bricks,
        Self::Metal,
        Self::Gravel,
    ];

    /// Human-readable category name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sand => "Sand",
            Self::Soil => "Soil",
            Self::Bricks => "Bricks",
            Self::Metal => "Metal",
            Self::Gravel => "Gravel",
        }
    }

    /// Stable machine value used by select controls.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Sand => "sand",
            Self::Soil => "soil",
            Self::Bricks => "bricks",
            Self::Metal => "metal",
            Self::Gravel => "gravel",
        }
    }

    /// Parse a select control value; unknown values map to `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_value() == value)
    }
}

/// A construction material listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialItem {
    /// Stable catalog identifier.
    pub id: String,
    /// Listing title.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Category used for filtering.
    pub category: MaterialCategory,
    /// Price in rupees per `unit`.
    pub price_per_unit: u64,
    /// Unit of sale (e.g. "cubic meter").
    pub unit: String,
    /// Hosted image URL.
    pub image: String,
    /// Whether the listing can currently be requested.
    pub available: bool,
    /// Supplier fulfilling the listing.
    pub supplier: Supplier,
}

/// Vehicle and heavy machinery types for rent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// Backhoe loaders and excavators.
    Excavator,
    /// Tipper and flatbed lorries.
    Lorry,
    /// Water tankers.
    WaterBowser,
    /// Aerial work platforms.
    BoomLift,
}

impl VehicleKind {
    /// All kinds in filter order.
    pub const ALL: [Self; 4] = [
        Self::Excavator,
        Self::Lorry,
        Self::WaterBowser,
        Self::BoomLift,
    ];

    /// Human-readable kind name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excavator => "Excavators",
            Self::Lorry => "Lorries",
            Self::WaterBowser => "Water bowsers",
            Self::BoomLift => "Boom lifts",
        }
    }

    /// Stable machine value used by select controls.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Excavator => "excavator",
            Self::Lorry => "lorry",
            Self::WaterBowser => "water_bowser",
            Self::BoomLift => "boom_lift",
        }
    }

    /// Parse a select control value; unknown values map to `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_value() == value)
    }
}

/// A rentable vehicle listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    /// Stable catalog identifier.
    pub id: String,
    /// Listing title.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Vehicle type used for filtering.
    pub kind: VehicleKind,
    /// Hourly rate in rupees.
    pub price_per_hour: u64,
    /// Daily rate in rupees.
    pub price_per_day: u64,
    /// Hosted image URL.
    pub image: String,
    /// Whether the vehicle can currently be booked.
    pub available: bool,
    /// Spec sheet bullet points.
    pub specifications: Vec<String>,
    /// Owner renting the vehicle out.
    pub owner: Supplier,
}

#[cfg(test)]
mod tests {
    use super::{District, MaterialCategory, VehicleKind};

    #[test]
    fn district_table_covers_every_district_once() {
        let mut seen = District::ALL.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 25);
    }

    #[test]
    fn district_lookup_ignores_case_and_padding() {
        assert_eq!(
            District::from_label(" nuwara eliya "),
            Some(District::NuwaraEliya)
        );
        assert_eq!(District::from_label("Atlantis"), None);
    }

    #[test]
    fn select_values_round_trip() {
        for category in MaterialCategory::ALL {
            assert_eq!(MaterialCategory::from_value(category.as_value()), Some(category));
        }
        for kind in VehicleKind::ALL {
            assert_eq!(VehicleKind::from_value(kind.as_value()), Some(kind));
        }
        assert_eq!(MaterialCategory::from_value(""), None);
        assert_eq!(VehicleKind::from_value("tractor"), None);
    }
}
