//! Trip requests: the three waypoints and the driver's duty state.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named location on the trip.
///
/// # Examples
/// ```
/// use haulage_core::Waypoint;
///
/// let depot = Waypoint::new("Chicago, IL", 41.8781, -87.6298);
/// assert_eq!(depot.coord().y, 41.8781);
/// assert_eq!(depot.coord().x, -87.6298);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// Human-readable label, e.g. a city and state.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Waypoint {
    /// Construct a waypoint from a label and a latitude/longitude pair.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Position as a `geo` coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// Everything the planner needs to know about one trip.
///
/// # Examples
/// ```
/// use haulage_core::{TripInput, Waypoint};
///
/// let trip = TripInput::new(
///     Waypoint::new("New York, NY", 40.7128, -74.0060),
///     Waypoint::new("Philadelphia, PA", 39.9526, -75.1652),
///     Waypoint::new("Washington, DC", 38.9072, -77.0369),
///     10.5,
/// )
/// .with_driver_name("John Doe");
///
/// assert!(trip.validate().is_ok());
/// assert_eq!(trip.driver_name.as_deref(), Some("John Doe"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TripInput {
    /// Where the truck is now.
    pub current: Waypoint,
    /// Where the load is collected.
    pub pickup: Waypoint,
    /// Where the load is delivered.
    pub dropoff: Waypoint,
    /// Hours already used in the driver's current duty cycle.
    pub current_cycle_hours: f64,
    /// Driver shown on the daily log sheets.
    #[cfg_attr(feature = "serde", serde(default))]
    pub driver_name: Option<String>,
    /// Terminal the driver reports to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub home_terminal: Option<String>,
}

/// Which of the three trip waypoints a validation error refers to.
pub type WaypointRole = &'static str;

/// Errors returned by [`TripInput::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripInputError {
    /// Latitude was not finite or fell outside `-90.0..=90.0`.
    #[error("{role} latitude must be between -90 and 90 degrees (got {value})")]
    InvalidLatitude {
        /// Waypoint carrying the bad value.
        role: WaypointRole,
        /// Value that failed validation.
        value: f64,
    },
    /// Longitude was not finite or fell outside `-180.0..=180.0`.
    #[error("{role} longitude must be between -180 and 180 degrees (got {value})")]
    InvalidLongitude {
        /// Waypoint carrying the bad value.
        role: WaypointRole,
        /// Value that failed validation.
        value: f64,
    },
    /// The waypoint label was empty or whitespace.
    #[error("{role} location name must not be blank")]
    BlankName {
        /// Waypoint carrying the blank label.
        role: WaypointRole,
    },
    /// Cycle hours were negative or not finite.
    #[error("current cycle hours must be a non-negative, finite number (got {value})")]
    InvalidCycleHours {
        /// Value that failed validation.
        value: f64,
    },
}

impl TripInput {
    /// Construct a trip without driver details.
    #[must_use]
    pub const fn new(
        current: Waypoint,
        pickup: Waypoint,
        dropoff: Waypoint,
        current_cycle_hours: f64,
    ) -> Self {
        Self {
            current,
            pickup,
            dropoff,
            current_cycle_hours,
            driver_name: None,
            home_terminal: None,
        }
    }

    /// Set the driver name while returning `self` for chaining.
    #[must_use]
    pub fn with_driver_name(mut self, driver_name: impl Into<String>) -> Self {
        self.driver_name = Some(driver_name.into());
        self
    }

    /// Set the home terminal while returning `self` for chaining.
    #[must_use]
    pub fn with_home_terminal(mut self, home_terminal: impl Into<String>) -> Self {
        self.home_terminal = Some(home_terminal.into());
        self
    }

    /// Reject requests the planner cannot simulate meaningfully.
    ///
    /// The planner itself assumes validated input; callers accepting
    /// untrusted payloads should run this first.
    ///
    /// # Errors
    /// Returns the first [`TripInputError`] found, checking the current,
    /// pickup and dropoff waypoints in that order and the cycle hours last.
    pub fn validate(&self) -> Result<(), TripInputError> {
        validate_waypoint("current", &self.current)?;
        validate_waypoint("pickup", &self.pickup)?;
        validate_waypoint("dropoff", &self.dropoff)?;
        if !self.current_cycle_hours.is_finite() || self.current_cycle_hours < 0.0 {
            return Err(TripInputError::InvalidCycleHours {
                value: self.current_cycle_hours,
            });
        }
        Ok(())
    }
}

fn validate_waypoint(role: WaypointRole, waypoint: &Waypoint) -> Result<(), TripInputError> {
    if waypoint.name.trim().is_empty() {
        return Err(TripInputError::BlankName { role });
    }
    if !(-90.0..=90.0).contains(&waypoint.latitude) {
        return Err(TripInputError::InvalidLatitude {
            role,
            value: waypoint.latitude,
        });
    }
    if !(-180.0..=180.0).contains(&waypoint.longitude) {
        return Err(TripInputError::InvalidLongitude {
            role,
            value: waypoint.longitude,
        });
    }
    Ok(())
}
