//! Stops placed along a planned route and the route that collects them.

use std::fmt;

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why the truck halts at a stop.
///
/// # Examples
/// ```
/// use haulage_core::StopType;
///
/// assert_eq!(StopType::Rest.as_str(), "rest");
/// assert_eq!(StopType::Fuel.to_string(), "fuel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum StopType {
    /// Load collection at the pickup location.
    Pickup,
    /// Load delivery at the dropoff location.
    Dropoff,
    /// Refuelling.
    Fuel,
    /// Mandatory rest break.
    Rest,
}

impl StopType {
    /// Return the stop type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Dropoff => "dropoff",
            Self::Fuel => "fuel",
            Self::Rest => "rest",
        }
    }

    /// Label used on log sheets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Dropoff => "Dropoff",
            Self::Fuel => "Fuel Stop",
            Self::Rest => "Rest Break",
        }
    }
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One halt on the route, in travel order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stop {
    /// Why the truck halts here.
    pub stop_type: StopType,
    /// Label of the location; trip labels for pickup and dropoff.
    pub location_name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Position in the route, starting at 1.
    pub order: u32,
    /// Time spent at the stop.
    pub duration_hours: f64,
    /// Miles driven since the previous stop (or since the trip start).
    pub distance_from_previous: f64,
    /// Hours from trip start until arrival here.
    pub cumulative_hours: f64,
}

impl Stop {
    /// Position as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Hours from trip start until the truck leaves this stop.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "arrival plus dwell time")]
    pub fn departure_hours(&self) -> f64 {
        self.cumulative_hours + self.duration_hours
    }
}

/// Ordered stops for a trip with its aggregate distance and time.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteResult {
    /// Stops in travel order; the last one is always the dropoff.
    pub stops: Vec<Stop>,
    /// Great-circle miles from current position via pickup to dropoff.
    pub total_distance: f64,
    /// Hours from trip start until the dropoff is complete.
    pub total_trip_time: f64,
}

impl RouteResult {
    /// Number of stops of the given type.
    ///
    /// # Examples
    /// ```
    /// use haulage_core::{RouteResult, StopType};
    ///
    /// assert_eq!(RouteResult::default().count(StopType::Fuel), 0);
    /// ```
    #[must_use]
    pub fn count(&self, stop_type: StopType) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.stop_type == stop_type)
            .count()
    }

    /// Miles driven summed over every stop.
    #[must_use]
    pub fn driven_miles(&self) -> f64 {
        self.stops.iter().map(|stop| stop.distance_from_previous).sum()
    }
}
