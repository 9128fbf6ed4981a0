//! Forward simulation that places rest and fuel stops along a trip.
//!
//! The trip is driven as two legs, current position to pickup and pickup to
//! dropoff, through one leg-walking routine. At every decision point the
//! driving window is checked before fuel: a rest break is inserted wherever
//! the next stretch would run past
//! [`max_driving_hours`](crate::HosRules::max_driving_hours), otherwise a fuel
//! stop is inserted if the next fuel point falls inside the leg.

use geo::Coord;

use crate::{HosRules, RouteResult, Stop, StopType, TripInput, geodesy};

/// Label given to inserted rest breaks.
pub const REST_STOP_NAME: &str = "Rest Stop";
/// Label given to inserted fuel stops.
pub const FUEL_STOP_NAME: &str = "Fuel Stop";

/// Slack for threshold comparisons, in miles or hours.
const TOLERANCE: f64 = 1e-9;

/// Plan every stop for `input` under `rules`.
///
/// `rules` must have passed [`HosRules::validate`]; the loop only advances
/// when speed, driving window and fuel interval are positive.
pub(crate) fn plan_route(input: &TripInput, rules: &HosRules) -> RouteResult {
    let current = input.current.coord();
    let pickup = input.pickup.coord();
    let dropoff = input.dropoff.coord();

    let approach = Leg {
        from: current,
        to: pickup,
        distance: geodesy::distance(current, pickup),
        terminal: StopType::Pickup,
        terminal_name: &input.pickup.name,
        terminal_hours: rules.pickup_hours,
    };
    let haul = Leg {
        from: pickup,
        to: dropoff,
        distance: geodesy::distance(pickup, dropoff),
        terminal: StopType::Dropoff,
        terminal_name: &input.dropoff.name,
        terminal_hours: rules.dropoff_hours,
    };

    let mut state = RouteState::new(rules, input.current_cycle_hours);
    state.walk(&approach);
    state.walk(&haul);
    let route = state.finish(total_distance(&approach, &haul));

    log::info!(
        "planned {:.1} mi trip: {} stops, {} rest, {} fuel, {:.2} h total",
        route.total_distance,
        route.stops.len(),
        route.count(StopType::Rest),
        route.count(StopType::Fuel),
        route.total_trip_time,
    );
    route
}

#[expect(clippy::float_arithmetic, reason = "leg distances are summed")]
fn total_distance(approach: &Leg<'_>, haul: &Leg<'_>) -> f64 {
    approach.distance + haul.distance
}

/// One great-circle leg ending at a pickup or dropoff.
struct Leg<'a> {
    from: Coord<f64>,
    to: Coord<f64>,
    distance: f64,
    terminal: StopType,
    terminal_name: &'a str,
    terminal_hours: f64,
}

/// Duty and distance counters carried across both legs.
struct RouteState<'r> {
    rules: &'r HosRules,
    stops: Vec<Stop>,
    next_order: u32,
    cumulative_hours: f64,
    cumulative_distance: f64,
    hours_since_rest: f64,
    miles_since_fuel: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "the simulation accumulates floating-point hours and miles"
)]
impl<'r> RouteState<'r> {
    fn new(rules: &'r HosRules, current_cycle_hours: f64) -> Self {
        Self {
            rules,
            stops: Vec::new(),
            next_order: 1,
            cumulative_hours: 0.0,
            cumulative_distance: 0.0,
            // Cycle hours reduce modulo the driving window: a driver who has
            // used exactly one full window starts freshly rested.
            hours_since_rest: current_cycle_hours % rules.max_driving_hours,
            miles_since_fuel: 0.0,
        }
    }

    fn walk(&mut self, leg: &Leg<'_>) {
        let mut covered = 0.0_f64;
        loop {
            let remaining = leg.distance - covered;
            if remaining <= TOLERANCE {
                break;
            }
            let to_fuel = self.rules.fuel_interval_miles - self.miles_since_fuel;
            let fuel_due = to_fuel < remaining - TOLERANCE;
            let next_event = if fuel_due { to_fuel } else { remaining };

            if self.hours_since_rest + self.rules.drive_hours(next_event)
                > self.rules.max_driving_hours + TOLERANCE
            {
                let window_left = (self.rules.max_driving_hours - self.hours_since_rest).max(0.0);
                let driven = self.rules.drive_miles(window_left);
                covered += driven;
                self.rest_break(leg, covered, driven);
            } else if fuel_due {
                covered += to_fuel;
                self.refuel(leg, covered, to_fuel);
            } else {
                break;
            }
        }

        let remaining = (leg.distance - covered).max(0.0);
        self.drive(remaining);
        self.push_stop(
            leg.terminal,
            leg.terminal_name.to_owned(),
            leg.to,
            remaining,
            leg.terminal_hours,
        );
        self.hours_since_rest += leg.terminal_hours;
    }

    /// Drive `driven` miles to a rest break sitting `covered` miles into `leg`.
    fn rest_break(&mut self, leg: &Leg<'_>, covered: f64, driven: f64) {
        let position = geodesy::interpolate(leg.from, leg.to, covered / leg.distance);
        self.drive(driven);
        let hours = self.rules.rest_duration_hours;
        self.push_stop(StopType::Rest, REST_STOP_NAME.to_owned(), position, driven, hours);
        self.hours_since_rest = 0.0;
    }

    /// Drive `driven` miles to a fuel stop sitting `covered` miles into `leg`.
    fn refuel(&mut self, leg: &Leg<'_>, covered: f64, driven: f64) {
        let position = geodesy::interpolate(leg.from, leg.to, covered / leg.distance);
        self.drive(driven);
        let hours = self.rules.fuel_stop_hours;
        self.push_stop(StopType::Fuel, FUEL_STOP_NAME.to_owned(), position, driven, hours);
        // Fuel dwell is on-duty time and counts against the driving window.
        self.hours_since_rest += hours;
        self.miles_since_fuel = 0.0;
    }

    fn drive(&mut self, miles: f64) {
        let hours = self.rules.drive_hours(miles);
        self.cumulative_hours += hours;
        self.cumulative_distance += miles;
        self.hours_since_rest += hours;
        self.miles_since_fuel += miles;
        // A leg that ends exactly on the fuel interval starts the next
        // interval afresh, matching `cumulative_distance % interval`.
        if self.miles_since_fuel >= self.rules.fuel_interval_miles - TOLERANCE {
            self.miles_since_fuel = (self.miles_since_fuel - self.rules.fuel_interval_miles).max(0.0);
        }
    }

    fn push_stop(
        &mut self,
        stop_type: StopType,
        location_name: String,
        position: Coord<f64>,
        distance_from_previous: f64,
        duration_hours: f64,
    ) {
        log::debug!(
            "stop #{} {stop_type} at ({:.4}, {:.4}) after {distance_from_previous:.1} mi, \
             arriving at {:.2} h",
            self.next_order,
            position.y,
            position.x,
            self.cumulative_hours,
        );
        self.stops.push(Stop {
            stop_type,
            location_name,
            latitude: position.y,
            longitude: position.x,
            order: self.next_order,
            duration_hours,
            distance_from_previous,
            cumulative_hours: self.cumulative_hours,
        });
        self.next_order += 1;
        self.cumulative_hours += duration_hours;
    }

    fn finish(self, total_distance: f64) -> RouteResult {
        debug_assert!(
            (self.cumulative_distance - total_distance).abs() <= 1e-6 * total_distance.max(1.0),
            "driven {} mi but the legs total {total_distance} mi",
            self.cumulative_distance,
        );
        RouteResult {
            stops: self.stops,
            total_distance,
            total_trip_time: self.cumulative_hours,
        }
    }
}
