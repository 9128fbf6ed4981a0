//! Great-circle geometry on a spherical Earth.
//!
//! Coordinates follow the `geo` convention used across the crate: `x` is
//! longitude and `y` is latitude, both in decimal degrees. Distances are
//! statute miles.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use haulage_core::geodesy;
//!
//! let origin = Coord { x: 0.0, y: 0.0 };
//! let east = Coord { x: 90.0, y: 0.0 };
//! let midpoint = geodesy::interpolate(origin, east, 0.5);
//! assert!((midpoint.x - 45.0).abs() < 1e-9);
//! assert!(geodesy::distance(origin, east) > 6_000.0);
//! ```

#![expect(
    clippy::float_arithmetic,
    reason = "spherical trigonometry is floating-point throughout"
)]

use std::f64::consts::PI;

use geo::Coord;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3_958.8;

/// Angular separation in radians between two coordinates.
///
/// Uses the haversine form, which stays well conditioned for short arcs. The
/// result lies in `0.0..=PI`.
#[must_use]
pub fn central_angle(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let haversine = (delta_lat / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push the haversine a hair outside [0, 1].
    let bounded = haversine.clamp(0.0, 1.0);
    2.0 * bounded.sqrt().atan2((1.0 - bounded).sqrt())
}

/// Great-circle distance in miles between two coordinates.
///
/// The result is symmetric, zero for identical points and never exceeds half
/// the Earth's circumference.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use haulage_core::geodesy::distance;
///
/// let chicago = Coord { x: -87.6298, y: 41.8781 };
/// let dallas = Coord { x: -96.7970, y: 32.7767 };
/// let miles = distance(chicago, dallas);
/// assert!((miles - 804.66).abs() < 0.01);
/// assert_eq!(distance(chicago, chicago), 0.0);
/// ```
#[must_use]
pub fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    EARTH_RADIUS_MILES * central_angle(from, to)
}

/// Point reached after covering `ratio` of the great-circle arc from
/// `from` to `to`.
///
/// `ratio` is clamped into `0.0..=1.0`; `0.0` yields `from` and `1.0`
/// yields `to`. Coincident endpoints return `from` without evaluating the
/// slerp weights, whose denominator vanishes there. Antipodal endpoints have
/// no unique arc, so the nearer endpoint is returned instead.
#[must_use]
pub fn interpolate(from: Coord<f64>, to: Coord<f64>, ratio: f64) -> Coord<f64> {
    let fraction = ratio.clamp(0.0, 1.0);
    let theta = central_angle(from, to);
    let sin_theta = theta.sin();

    if sin_theta.abs() <= f64::EPSILON {
        if theta < PI / 2.0 || fraction < 0.5 {
            return from;
        }
        return to;
    }

    let weight_from = ((1.0 - fraction) * theta).sin() / sin_theta;
    let weight_to = (fraction * theta).sin() / sin_theta;

    let (lat_from, lon_from) = (from.y.to_radians(), from.x.to_radians());
    let (lat_to, lon_to) = (to.y.to_radians(), to.x.to_radians());

    let x = weight_from * lat_from.cos() * lon_from.cos() + weight_to * lat_to.cos() * lon_to.cos();
    let y = weight_from * lat_from.cos() * lon_from.sin() + weight_to * lat_to.cos() * lon_to.sin();
    let z = weight_from * lat_from.sin() + weight_to * lat_to.sin();

    Coord {
        x: y.atan2(x).to_degrees(),
        y: z.atan2(x.hypot(y)).to_degrees(),
    }
}
