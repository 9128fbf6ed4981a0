//! Hours-of-service policy shared by the route planner and the logbook.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Driving and dwell limits applied while planning a trip.
///
/// Every trip is simulated at one constant speed; there is no road network,
/// so distance and drive time convert through
/// [`average_speed_mph`](Self::average_speed_mph) alone.
///
/// # Examples
/// ```
/// use haulage_core::HosRules;
///
/// let rules = HosRules::default().with_average_speed(55.0);
/// assert!(rules.validate().is_ok());
/// assert_eq!(rules.max_driving_hours, 11.0);
/// assert_eq!(rules.drive_hours(110.0), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HosRules {
    /// Constant road speed used for every drive segment.
    pub average_speed_mph: f64,
    /// Driving window after which a rest break is mandatory.
    pub max_driving_hours: f64,
    /// Length of a mandatory rest break.
    pub rest_duration_hours: f64,
    /// Miles between fuel stops.
    pub fuel_interval_miles: f64,
    /// Time spent at each fuel stop.
    pub fuel_stop_hours: f64,
    /// Time spent loading at the pickup.
    pub pickup_hours: f64,
    /// Time spent unloading at the dropoff.
    pub dropoff_hours: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            average_speed_mph: 48.0,
            max_driving_hours: 11.0,
            rest_duration_hours: 10.0,
            fuel_interval_miles: 1_000.0,
            fuel_stop_hours: 1.0,
            pickup_hours: 1.0,
            dropoff_hours: 1.0,
        }
    }
}

/// Errors returned by [`HosRules::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HosRulesError {
    /// A rate or threshold was zero, negative or not finite.
    #[error("{field} must be a positive, finite number (got {value})")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f64,
    },
    /// A dwell time was negative or not finite.
    #[error("{field} must be a non-negative, finite number (got {value})")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f64,
    },
}

impl HosRules {
    /// Return a copy with a different average speed.
    #[must_use]
    pub const fn with_average_speed(mut self, average_speed_mph: f64) -> Self {
        self.average_speed_mph = average_speed_mph;
        self
    }

    /// Check that the rules describe a simulation that terminates.
    ///
    /// Speed, driving window and fuel interval must be positive; dwell times
    /// may be zero but not negative.
    ///
    /// # Errors
    /// Returns the first [`HosRulesError`] encountered, in field order.
    pub fn validate(&self) -> Result<(), HosRulesError> {
        require_positive("average_speed_mph", self.average_speed_mph)?;
        require_positive("max_driving_hours", self.max_driving_hours)?;
        require_non_negative("rest_duration_hours", self.rest_duration_hours)?;
        require_positive("fuel_interval_miles", self.fuel_interval_miles)?;
        require_non_negative("fuel_stop_hours", self.fuel_stop_hours)?;
        require_non_negative("pickup_hours", self.pickup_hours)?;
        require_non_negative("dropoff_hours", self.dropoff_hours)?;
        Ok(())
    }

    /// Hours needed to drive `miles` at the average speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "distance and time convert through a floating-point speed"
    )]
    pub fn drive_hours(&self, miles: f64) -> f64 {
        miles / self.average_speed_mph
    }

    /// Miles covered after driving for `hours` at the average speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "distance and time convert through a floating-point speed"
    )]
    pub fn drive_miles(&self, hours: f64) -> f64 {
        hours * self.average_speed_mph
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), HosRulesError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HosRulesError::NonPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), HosRulesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HosRulesError::Negative { field, value })
    }
}
