//! City-pair distance estimation.
//!
//! Distances come from a fixed coordinate table and the haversine formula.
//! Unknown city names fall back to default coordinates (distinct for origin
//! and destination, so two unknown cities still produce a nonzero distance)
//! and every estimate is floored at a minimum local-delivery distance.

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Minimum billable distance for local deliveries.
const MIN_DISTANCE_KM: f64 = 50.0;

const DEFAULT_ORIGIN: (f64, f64) = (20.0, 77.0);
const DEFAULT_DESTINATION: (f64, f64) = (21.0, 78.0);

const CITY_COORDINATES: &[(&str, (f64, f64))] = &[
    ("mumbai", (19.0760, 72.8777)),
    ("delhi", (28.7041, 77.1025)),
    ("bangalore", (12.9716, 77.5946)),
    ("chennai", (13.0827, 80.2707)),
    ("kolkata", (22.5726, 88.3639)),
    ("hyderabad", (17.3850, 78.4867)),
    ("pune", (18.5204, 73.8567)),
    ("ahmedabad", (23.0225, 72.5714)),
];

fn lookup(city: &str, fallback: (f64, f64)) -> (f64, f64) {
    let key = city.trim().to_lowercase();
    CITY_COORDINATES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, coords)| *coords)
        .unwrap_or(fallback)
}

/// Estimated travel distance between two named cities in kilometers.
/// Always finite and at least [`MIN_DISTANCE_KM`]; never fails.
pub fn estimate_distance_km(origin_city: &str, destination_city: &str) -> f64 {
    let origin = lookup(origin_city, DEFAULT_ORIGIN);
    let destination = lookup(destination_city, DEFAULT_DESTINATION);

    haversine_km(origin, destination).max(MIN_DISTANCE_KM)
}

pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let lat1 = a.0.to_radians();
    let lat2 = b.0.to_radians();
    let delta_lat = (b.0 - a.0).to_radians();
    let delta_lng = (b.1 - a.1).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    let haversine = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let central_angle = 2.0 * haversine.sqrt().asin();

    EARTH_RADIUS_KM * central_angle
}
