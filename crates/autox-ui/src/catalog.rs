//! Hard-coded marketplace catalog.
//!
//! Listings are built once on first access and shared for the lifetime of the page.

use std::sync::LazyLock;

use autox_models::{District, MaterialCategory, MaterialItem, Supplier, Vehicle, VehicleKind};

const IMG_SUFFIX: &str = "?auto=compress&cs=tinysrgb&w=800";

static MATERIALS: LazyLock<Vec<MaterialItem>> = LazyLock::new(build_materials);
static VEHICLES: LazyLock<Vec<Vehicle>> = LazyLock::new(build_vehicles);

/// Every material listing in display order.
#[must_use]
pub fn materials() -> &'static [MaterialItem] {
    &MATERIALS
}

/// Every vehicle listing in display order.
#[must_use]
pub fn vehicles() -> &'static [Vehicle] {
    &VEHICLES
}

/// Look up a material listing by id.
#[must_use]
pub fn material(id: &str) -> Option<&'static MaterialItem> {
    materials().iter().find(|item| item.id == id)
}

/// Look up a vehicle listing by id.
#[must_use]
pub fn vehicle(id: &str) -> Option<&'static Vehicle> {
    vehicles().iter().find(|vehicle| vehicle.id == id)
}

fn pexels(photo: &str) -> String {
    format!("https://images.pexels.com/photos/{photo}.jpeg{IMG_SUFFIX}")
}

fn supplier(
    name: &str,
    location: &str,
    district: District,
    phone: &str,
    rating: f32,
    completed_jobs: u32,
) -> Supplier {
    Supplier {
        name: name.to_string(),
        location: location.to_string(),
        district,
        phone: phone.to_string(),
        rating,
        completed_jobs,
    }
}

struct MaterialSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: MaterialCategory,
    price_per_unit: u64,
    unit: &'static str,
    photo: &'static str,
    available: bool,
}

impl MaterialSeed {
    fn with_supplier(self, supplier: Supplier) -> MaterialItem {
        MaterialItem {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            category: self.category,
            price_per_unit: self.price_per_unit,
            unit: self.unit.to_string(),
            image: pexels(self.photo),
            available: self.available,
            supplier,
        }
    }
}

fn build_materials() -> Vec<MaterialItem> {
    vec![
        MaterialSeed {
            id: "sand-1",
            name: "River Sand",
            description: "High-quality river sand perfect for construction work",
            category: MaterialCategory::Sand,
            price_per_unit: 6_500,
            unit: "cubic meter",
            photo: "1029604/pexels-photo-1029604",
            available: true,
        }
        .with_supplier(supplier(
            "Kalu Ganga Sand Traders",
            "Horana",
            District::Kalutara,
            "+94 77 234 5678",
            4.8,
            312,
        )),
        MaterialSeed {
            id: "metal-1",
            name: "Steel Rods",
            description: "Premium steel reinforcement bars for construction",
            category: MaterialCategory::Metal,
            price_per_unit: 285_000,
            unit: "ton",
            photo: "459728/pexels-photo-459728",
            available: true,
        }
        .with_supplier(supplier(
            "Colombo Steel Centre",
            "Peliyagoda",
            District::Colombo,
            "+94 11 291 4400",
            4.6,
            198,
        )),
        MaterialSeed {
            id: "soil-1",
            name: "Garden Soil",
            description: "Rich, fertile soil ideal for landscaping and gardening",
            category: MaterialCategory::Soil,
            price_per_unit: 7_500,
            unit: "cubic meter",
            photo: "416978/pexels-photo-416978",
            available: true,
        }
        .with_supplier(supplier(
            "Green Earth Suppliers",
            "Kadawatha",
            District::Gampaha,
            "+94 71 845 2210",
            4.7,
            143,
        )),
        MaterialSeed {
            id: "bricks-1",
            name: "Red Clay Bricks",
            description: "Durable clay bricks for construction and masonry work",
            category: MaterialCategory::Bricks,
            price_per_unit: 3_200,
            unit: "per 100 pieces",
            photo: "1004584/pexels-photo-1004584",
            available: true,
        }
        .with_supplier(supplier(
            "Wayamba Brick Works",
            "Kuliyapitiya",
            District::Kurunegala,
            "+94 76 552 9031",
            4.5,
            276,
        )),
        MaterialSeed {
            id: "gravel-1",
            name: "Crushed Aggregate",
            description: "Three-quarter inch machine-crushed metal for concrete and road base",
            category: MaterialCategory::Gravel,
            price_per_unit: 9_800,
            unit: "cubic meter",
            photo: "1216589/pexels-photo-1216589",
            available: true,
        }
        .with_supplier(supplier(
            "Hill Country Quarries",
            "Gampola",
            District::Kandy,
            "+94 81 235 7712",
            4.4,
            164,
        )),
        MaterialSeed {
            id: "sand-2",
            name: "Offshore Sand",
            description: "Washed offshore sand, salt-free and graded for plastering",
            category: MaterialCategory::Sand,
            price_per_unit: 5_200,
            unit: "cubic meter",
            photo: "1029604/pexels-photo-1029604",
            available: true,
        }
        .with_supplier(supplier(
            "Negombo Coastal Sands",
            "Negombo",
            District::Gampaha,
            "+94 31 222 6154",
            4.3,
            88,
        )),
        MaterialSeed {
            id: "bricks-2",
            name: "Cement Blocks",
            description: "Six inch hollow cement blocks for load-bearing walls",
            category: MaterialCategory::Bricks,
            price_per_unit: 8_500,
            unit: "per 100 pieces",
            photo: "1004584/pexels-photo-1004584",
            available: false,
        }
        .with_supplier(supplier(
            "Southern Block Yard",
            "Ambalangoda",
            District::Galle,
            "+94 91 225 8890",
            4.1,
            57,
        )),
    ]
}

struct VehicleSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    kind: VehicleKind,
    price_per_hour: u64,
    price_per_day: u64,
    photo: &'static str,
    available: bool,
    specifications: [&'static str; 3],
}

impl VehicleSeed {
    fn with_owner(self, owner: Supplier) -> Vehicle {
        Vehicle {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            kind: self.kind,
            price_per_hour: self.price_per_hour,
            price_per_day: self.price_per_day,
            image: pexels(self.photo),
            available: self.available,
            specifications: self.specifications.iter().map(ToString::to_string).collect(),
            owner,
        }
    }
}

fn build_vehicles() -> Vec<Vehicle> {
    vec![
        VehicleSeed {
            id: "jcb-1",
            name: "JCB Excavator",
            description: "Heavy-duty excavator for digging and construction work",
            kind: VehicleKind::Excavator,
            price_per_hour: 32_000,
            price_per_day: 210_000,
            photo: "1216589/pexels-photo-1216589",
            available: true,
            specifications: [
                "Operating Weight: 8.5 tons",
                "Max Digging Depth: 5.2m",
                "Bucket Capacity: 0.28m³",
            ],
        }
        .with_owner(supplier(
            "Ruwan Plant Hire",
            "Kottawa",
            District::Colombo,
            "+94 77 410 3321",
            4.9,
            421,
        )),
        VehicleSeed {
            id: "lorry-1",
            name: "Transport Lorry",
            description: "Large capacity truck for material transportation",
            kind: VehicleKind::Lorry,
            price_per_hour: 21_000,
            price_per_day: 140_000,
            photo: "906494/pexels-photo-906494",
            available: true,
            specifications: ["Payload: 10 tons", "Bed Length: 6.2m", "Width: 2.4m"],
        }
        .with_owner(supplier(
            "Wayamba Transport Services",
            "Kurunegala Town",
            District::Kurunegala,
            "+94 37 222 4567",
            4.6,
            254,
        )),
        VehicleSeed {
            id: "bowser-1",
            name: "Water Bowser",
            description: "Water tanker for construction site water supply",
            kind: VehicleKind::WaterBowser,
            price_per_hour: 16_000,
            price_per_day: 105_000,
            photo: "1402787/pexels-photo-1402787",
            available: true,
            specifications: ["Capacity: 5000L", "Pump Pressure: 4 bar", "Hose Length: 50m"],
        }
        .with_owner(supplier(
            "Aqua Site Supplies",
            "Ja-Ela",
            District::Gampaha,
            "+94 71 663 0982",
            4.5,
            139,
        )),
        VehicleSeed {
            id: "boom-1",
            name: "Boom Lift",
            description: "Aerial work platform for high-access construction work",
            kind: VehicleKind::BoomLift,
            price_per_hour: 40_000,
            price_per_day: 260_000,
            photo: "1112048/pexels-photo-1112048",
            available: true,
            specifications: [
                "Max Height: 15m",
                "Platform Capacity: 230kg",
                "Outreach: 7.6m",
            ],
        }
        .with_owner(supplier(
            "SkyReach Access Lanka",
            "Rajagiriya",
            District::Colombo,
            "+94 11 288 7150",
            4.7,
            96,
        )),
        VehicleSeed {
            id: "jcb-2",
            name: "Mini Excavator",
            description: "Compact tracked excavator for tight urban and garden sites",
            kind: VehicleKind::Excavator,
            price_per_hour: 18_500,
            price_per_day: 120_000,
            photo: "1216589/pexels-photo-1216589",
            available: false,
            specifications: [
                "Operating Weight: 2.7 tons",
                "Max Digging Depth: 2.8m",
                "Track Width: 1.5m",
            ],
        }
        .with_owner(supplier(
            "Galle Fort Machinery",
            "Karapitiya",
            District::Galle,
            "+94 91 223 4410",
            4.2,
            61,
        )),
        VehicleSeed {
            id: "lorry-2",
            name: "Tipper Truck",
            description: "Six-wheel tipper for earth, sand and aggregate haulage",
            kind: VehicleKind::Lorry,
            price_per_hour: 19_000,
            price_per_day: 125_000,
            photo: "906494/pexels-photo-906494",
            available: true,
            specifications: ["Payload: 8 tons", "Tipping Angle: 50°", "Body Volume: 6m³"],
        }
        .with_owner(supplier(
            "Kandy Hill Haulage",
            "Peradeniya",
            District::Kandy,
            "+94 81 238 9902",
            4.4,
            187,
        )),
    ]
}
