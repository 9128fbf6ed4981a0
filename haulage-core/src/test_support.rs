//! Trip fixtures shared by unit, behaviour and property tests.
//!
//! Synthetic trips run along the equator, where great-circle distance is
//! linear in longitude, so leg lengths can be chosen in miles.

use crate::{TripInput, Waypoint, geodesy::EARTH_RADIUS_MILES};

/// Longitude reached after travelling `miles` east along the equator from
/// the prime meridian.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "arc length to degrees")]
pub fn equator_longitude(miles: f64) -> f64 {
    (miles / EARTH_RADIUS_MILES).to_degrees()
}

/// Trip along the equator with the given leg lengths in miles.
///
/// The current position sits on the prime meridian, the pickup
/// `approach_miles` to the east and the dropoff a further `haul_miles` east.
///
/// # Examples
/// ```
/// use haulage_core::{geodesy, test_support::equator_trip};
///
/// let trip = equator_trip(100.0, 250.0, 0.0);
/// let miles = geodesy::distance(trip.pickup.coord(), trip.dropoff.coord());
/// assert!((miles - 250.0).abs() < 1e-6);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "leg lengths accumulate")]
pub fn equator_trip(approach_miles: f64, haul_miles: f64, current_cycle_hours: f64) -> TripInput {
    TripInput::new(
        Waypoint::new("Origin Yard", 0.0, 0.0),
        Waypoint::new(
            "Pickup Dock",
            0.0,
            equator_longitude(approach_miles),
        ),
        Waypoint::new(
            "Dropoff Dock",
            0.0,
            equator_longitude(approach_miles + haul_miles),
        ),
        current_cycle_hours,
    )
}

/// Trip whose three waypoints coincide.
#[must_use]
pub fn coincident_trip() -> TripInput {
    let here = Waypoint::new("Memphis, TN", 35.1495, -90.0490);
    TripInput::new(here.clone(), here.clone(), here, 0.0)
}

/// Short regional run from New York via Philadelphia to Washington.
#[must_use]
pub fn east_coast_trip() -> TripInput {
    TripInput::new(
        Waypoint::new("New York, NY", 40.7128, -74.0060),
        Waypoint::new("Philadelphia, PA", 39.9526, -75.1652),
        Waypoint::new("Washington, DC", 38.9072, -77.0369),
        0.0,
    )
    .with_driver_name("John Doe")
    .with_home_terminal("Newark, NJ")
}

/// Cross-country haul from Chicago via Dallas to Los Angeles.
#[must_use]
pub fn cross_country_trip() -> TripInput {
    TripInput::new(
        Waypoint::new("Chicago, IL", 41.8781, -87.6298),
        Waypoint::new("Dallas, TX", 32.7767, -96.7970),
        Waypoint::new("Los Angeles, CA", 34.0522, -118.2437),
        4.0,
    )
    .with_driver_name("Jane Roe")
}
