//! Quote and booking arithmetic for the catalog modals.
//!
//! # Design
//! - Counts stay within `1..=MAX_COUNT`; every mutation clamps instead of failing.
//! - Totals are exact integer rupees.
//! - Raw input parsing is lenient: a leading integer is honoured, anything else resets to one.

use autox_models::{DurationUnit, MaterialItem, Vehicle};

/// Largest quantity or duration a visitor can request.
pub const MAX_COUNT: u32 = 10_000;

/// Multiplier for the "starting from" teaser on material cards.
pub const STARTING_FROM_UNITS: u64 = 5;

/// Parse a free-form count the way a number input is read.
///
/// Leading whitespace and an optional sign are skipped, then the leading run
/// of digits is used. Results below one, or no digits at all, yield `1`;
/// anything above [`MAX_COUNT`] yields [`MAX_COUNT`].
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if negative || digits.is_empty() {
        return 1;
    }
    // Digit runs too long for u32 are over the cap anyway.
    digits.parse::<u32>().map_or(MAX_COUNT, clamp_count)
}

fn clamp_count(value: u32) -> u32 {
    value.clamp(1, MAX_COUNT)
}

/// Quantity picker state for a material quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialQuote {
    /// Price per unit in rupees.
    pub unit_price: u64,
    /// Requested quantity, never zero.
    pub quantity: u32,
}

impl MaterialQuote {
    /// Fresh quote for one unit of the listing.
    #[must_use]
    pub const fn for_item(item: &MaterialItem) -> Self {
        Self {
            unit_price: item.price_per_unit,
            quantity: 1,
        }
    }

    /// Quote with an explicit quantity (clamped to `1..=MAX_COUNT`).
    #[must_use]
    pub fn with_quantity(unit_price: u64, quantity: u32) -> Self {
        Self {
            unit_price,
            quantity: clamp_count(quantity),
        }
    }

    /// Add one unit, stopping at [`MAX_COUNT`].
    pub fn increment(&mut self) {
        self.quantity = clamp_count(self.quantity.saturating_add(1));
    }

    /// Remove one unit, stopping at one.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Replace the quantity from raw input text.
    pub fn set_input(&mut self, raw: &str) {
        self.quantity = parse_count(raw);
    }

    /// Estimated total in rupees.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }

    /// Card teaser price.
    #[must_use]
    pub const fn starting_from(&self) -> u64 {
        self.unit_price.saturating_mul(STARTING_FROM_UNITS)
    }
}

/// Duration picker state for a vehicle booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VehicleBooking {
    /// Hourly rate in rupees.
    pub price_per_hour: u64,
    /// Daily rate in rupees.
    pub price_per_day: u64,
    /// Requested duration, never zero.
    pub duration: u32,
    /// Billing unit for the duration.
    pub unit: DurationUnit,
}

impl VehicleBooking {
    /// Fresh one-hour booking for the vehicle.
    #[must_use]
    pub const fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            price_per_hour: vehicle.price_per_hour,
            price_per_day: vehicle.price_per_day,
            duration: 1,
            unit: DurationUnit::Hours,
        }
    }

    /// Booking with explicit duration and unit (duration clamped to `1..=MAX_COUNT`).
    #[must_use]
    pub fn with_duration(vehicle: &Vehicle, duration: u32, unit: DurationUnit) -> Self {
        Self {
            duration: clamp_count(duration),
            unit,
            ..Self::for_vehicle(vehicle)
        }
    }

    /// Rate for the selected unit.
    #[must_use]
    pub const fn rate(&self) -> u64 {
        match self.unit {
            DurationUnit::Hours => self.price_per_hour,
            DurationUnit::Days => self.price_per_day,
        }
    }

    /// Estimated total in rupees.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rate().saturating_mul(u64::from(self.duration))
    }

    /// Switch billing unit, keeping the entered duration.
    pub const fn set_unit(&mut self, unit: DurationUnit) {
        self.unit = unit;
    }

    /// Add one unit of time, stopping at [`MAX_COUNT`].
    pub fn increment(&mut self) {
        self.duration = clamp_count(self.duration.saturating_add(1));
    }

    /// Remove one unit of time, stopping at one.
    pub fn decrement(&mut self) {
        self.duration = self.duration.saturating_sub(1).max(1);
    }

    /// Replace the duration from raw input text.
    pub fn set_input(&mut self, raw: &str) {
        self.duration = parse_count(raw);
    }
}

/// Format rupees with thousands grouping: `Rs. 12,500`.
#[must_use]
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("Rs. {grouped}")
}

#[cfg(test)]
mod tests {
    use super::{MAX_COUNT, MaterialQuote, VehicleBooking, format_rupees, parse_count};
    use crate::catalog;
    use autox_models::DurationUnit;

    #[test]
    fn parse_count_reads_leading_integer() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("  7 tons"), 7);
        assert_eq!(parse_count("+3"), 3);
        assert_eq!(parse_count("4.9"), 4);
    }

    #[test]
    fn parse_count_falls_back_to_one() {
        assert_eq!(parse_count(""), 1);
        assert_eq!(parse_count("abc"), 1);
        assert_eq!(parse_count("0"), 1);
        assert_eq!(parse_count("-5"), 1);
        assert_eq!(parse_count("e10"), 1);
    }

    #[test]
    fn huge_counts_cap_and_total_follows_the_shown_quantity() {
        assert_eq!(parse_count("10001"), MAX_COUNT);
        assert_eq!(parse_count("99999999999999"), MAX_COUNT);
        assert_eq!(parse_count("10000"), 10_000);

        let mut quote = MaterialQuote::with_quantity(6_500, 1);
        quote.set_input("99999999999999");
        assert_eq!(quote.quantity, MAX_COUNT);
        assert_eq!(quote.total(), 6_500 * u64::from(MAX_COUNT));
        quote.increment();
        assert_eq!(quote.quantity, MAX_COUNT);

        let jcb = catalog::vehicle("jcb-1").expect("seeded");
        let mut booking = VehicleBooking::with_duration(jcb, u32::MAX, DurationUnit::Days);
        assert_eq!(booking.duration, MAX_COUNT);
        booking.increment();
        assert_eq!(booking.total(), jcb.price_per_day * u64::from(MAX_COUNT));
    }

    #[test]
    fn quote_total_scales_with_quantity() {
        for quantity in 1..=50 {
            let quote = MaterialQuote::with_quantity(6_500, quantity);
            assert_eq!(quote.total(), 6_500 * u64::from(quantity));
        }
    }

    #[test]
    fn quote_decrement_clamps_at_one() {
        let mut quote = MaterialQuote::with_quantity(100, 2);
        quote.decrement();
        quote.decrement();
        quote.decrement();
        assert_eq!(quote.quantity, 1);
        quote.increment();
        assert_eq!(quote.quantity, 2);
        quote.set_input("garbage");
        assert_eq!(quote.quantity, 1);
    }

    #[test]
    fn quote_for_item_starts_at_one_with_teaser() {
        let item = catalog::material("sand-1").expect("seeded material");
        let quote = MaterialQuote::for_item(item);
        assert_eq!(quote.quantity, 1);
        assert_eq!(quote.starting_from(), item.price_per_unit * 5);
        assert_eq!(MaterialQuote::with_quantity(10, 0).quantity, 1);
    }

    #[test]
    fn booking_rate_follows_unit() {
        let vehicle = catalog::vehicle("jcb-1").expect("seeded vehicle");
        let mut booking = VehicleBooking::for_vehicle(vehicle);
        assert_eq!(booking.rate(), vehicle.price_per_hour);
        booking.set_input("3");
        assert_eq!(booking.total(), vehicle.price_per_hour * 3);
        booking.set_unit(DurationUnit::Days);
        assert_eq!(booking.duration, 3);
        assert_eq!(booking.rate(), vehicle.price_per_day);
        assert_eq!(booking.total(), vehicle.price_per_day * 3);
    }

    #[test]
    fn booking_decrement_clamps_at_one() {
        let vehicle = catalog::vehicle("lorry-1").expect("seeded vehicle");
        let mut booking = VehicleBooking::with_duration(vehicle, 0, DurationUnit::Days);
        assert_eq!(booking.duration, 1);
        booking.decrement();
        assert_eq!(booking.duration, 1);
        booking.increment();
        assert_eq!(booking.duration, 2);
    }

    #[test]
    fn rupees_are_grouped_by_thousands() {
        assert_eq!(format_rupees(0), "Rs. 0");
        assert_eq!(format_rupees(950), "Rs. 950");
        assert_eq!(format_rupees(6_500), "Rs. 6,500");
        assert_eq!(format_rupees(15_420), "Rs. 15,420");
        assert_eq!(format_rupees(1_234_567), "Rs. 1,234,567");
    }
}
