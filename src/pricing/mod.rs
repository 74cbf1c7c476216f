//! Quote pricing.
//!
//! A quote is a fixed linear formula over weight and distance, scaled by the
//! service tier. Unrecognized tiers are priced as standard rather than
//! rejected; a quoting tool should quote something rather than refuse.

const BASE_PRICE: f64 = 100.0;
const WEIGHT_RATE_PER_KG: f64 = 20.0;
const DISTANCE_RATE_PER_KM: f64 = 2.0;

fn tier_multiplier(service_tier: &str) -> f64 {
    match service_tier {
        "standard" => 1.0,
        "express" => 1.5,
        "international" => 2.5,
        _ => 1.0,
    }
}

/// Price for a shipment in currency units, rounded to 2 decimal places.
pub fn quote_price(weight_kg: f64, distance_km: f64, service_tier: &str) -> f64 {
    let amount = (BASE_PRICE + weight_kg * WEIGHT_RATE_PER_KG + distance_km * DISTANCE_RATE_PER_KM)
        * tier_multiplier(service_tier);

    round2(amount)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{quote_price, round2};

    #[test]
    fn standard_tier_matches_the_formula() {
        let price = quote_price(1.0, 50.0, "standard");
        assert_eq!(price, 100.0 + 1.0 * 20.0 + 50.0 * 2.0);
    }

    #[test]
    fn express_tier_applies_multiplier() {
        let distance = 840.0;
        let expected = round2((100.0 + 2.5 * 20.0 + distance * 2.0) * 1.5);
        assert_eq!(quote_price(2.5, distance, "express"), expected);
    }

    #[test]
    fn international_is_two_and_a_half_times_standard() {
        let standard = quote_price(3.0, 200.0, "standard");
        let international = quote_price(3.0, 200.0, "international");
        assert_eq!(international, round2(standard * 2.5));
    }

    #[test]
    fn unknown_tier_prices_as_standard() {
        assert_eq!(
            quote_price(2.0, 120.0, "overnight"),
            quote_price(2.0, 120.0, "standard")
        );
    }

    #[test]
    fn price_is_monotonic_in_weight() {
        let mut last = 0.0;
        for weight in [0.5, 1.0, 2.0, 5.0, 10.0] {
            let price = quote_price(weight, 300.0, "express");
            assert!(price >= last);
            last = price;
        }
    }

    #[test]
    fn price_is_monotonic_in_distance() {
        let mut last = 0.0;
        for distance in [50.0, 100.0, 500.0, 1500.0] {
            let price = quote_price(1.5, distance, "international");
            assert!(price >= last);
            last = price;
        }
    }

    #[test]
    fn result_has_at_most_two_decimals() {
        let price = quote_price(1.234, 333.333, "express");
        assert_eq!(price, round2(price));
    }
}
