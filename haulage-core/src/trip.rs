//! Trip planning facade combining the stop generator and the logbook.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    DailyLog, HosRules, HosRulesError, LogStart, RouteResult, StopType, TripInput, logbook,
    planner,
};

/// Headline figures for a planned trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TripSummary {
    /// Great-circle miles from current position via pickup to dropoff.
    pub total_distance: f64,
    /// Hours spent behind the wheel.
    pub estimated_drive_time: f64,
    /// Hours from departure until the dropoff is complete.
    pub total_trip_time: f64,
    /// Number of fuel stops on the route.
    pub fuel_stops_needed: usize,
    /// Number of rest breaks on the route.
    pub rest_breaks_needed: usize,
}

impl TripSummary {
    /// Summarise `route` under `rules`.
    #[must_use]
    pub fn new(route: &RouteResult, rules: &HosRules) -> Self {
        Self {
            total_distance: route.total_distance,
            estimated_drive_time: rules.drive_hours(route.total_distance),
            total_trip_time: route.total_trip_time,
            fuel_stops_needed: route.count(StopType::Fuel),
            rest_breaks_needed: route.count(StopType::Rest),
        }
    }
}

/// Everything produced for one trip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TripPlan {
    /// Headline figures.
    pub summary: TripSummary,
    /// Ordered stops with distance and time annotations.
    pub route: RouteResult,
    /// One log sheet per calendar date touched by the trip.
    pub daily_logs: Vec<DailyLog>,
}

/// Plans trips under one validated set of [`HosRules`].
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use haulage_core::{HosRules, LogStart, StopType, TripInput, TripPlanner, Waypoint};
///
/// let planner = TripPlanner::new(HosRules::default()).unwrap();
/// let trip = TripInput::new(
///     Waypoint::new("Chicago, IL", 41.8781, -87.6298),
///     Waypoint::new("Dallas, TX", 32.7767, -96.7970),
///     Waypoint::new("Los Angeles, CA", 34.0522, -118.2437),
///     0.0,
/// );
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let plan = planner.plan(&trip, LogStart::at_default_time(date));
/// assert_eq!(plan.route.stops.last().map(|s| s.stop_type), Some(StopType::Dropoff));
/// assert!(plan.summary.rest_breaks_needed > 0);
/// assert_eq!(plan.daily_logs.first().map(|log| log.date), Some(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TripPlanner {
    rules: HosRules,
}

impl TripPlanner {
    /// Construct a planner after checking `rules`.
    ///
    /// # Errors
    /// Returns [`HosRulesError`] when the rules would not let the simulation
    /// make progress.
    pub fn new(rules: HosRules) -> Result<Self, HosRulesError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Rules applied by this planner.
    #[must_use]
    pub const fn rules(&self) -> &HosRules {
        &self.rules
    }

    /// Place pickup, dropoff, rest and fuel stops along the trip.
    #[must_use]
    pub fn route(&self, input: &TripInput) -> RouteResult {
        planner::plan_route(input, &self.rules)
    }

    /// Cut a planned route into daily log sheets starting at `start`.
    #[must_use]
    pub fn daily_logs(
        &self,
        input: &TripInput,
        route: &RouteResult,
        start: LogStart,
    ) -> Vec<DailyLog> {
        logbook::partition(input, route, &self.rules, start)
    }

    /// Route the trip, build its log sheets and summarise both.
    #[must_use]
    pub fn plan(&self, input: &TripInput, start: LogStart) -> TripPlan {
        let route = self.route(input);
        let daily_logs = self.daily_logs(input, &route, start);
        TripPlan {
            summary: TripSummary::new(&route, &self.rules),
            route,
            daily_logs,
        }
    }
}

/// Plan `input` under `rules` in one call.
///
/// # Errors
/// Returns [`HosRulesError`] when `rules` fail validation.
pub fn plan_trip(
    input: &TripInput,
    rules: HosRules,
    start: LogStart,
) -> Result<TripPlan, HosRulesError> {
    Ok(TripPlanner::new(rules)?.plan(input, start))
}
