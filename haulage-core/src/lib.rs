//! Core planning engine for hours-of-service compliant truck trips.
//!
//! A trip runs from the truck's current position to a pickup and on to a
//! dropoff. [`TripPlanner::route`] walks both great-circle legs and inserts
//! rest breaks and fuel stops wherever [`HosRules`] demand them, and
//! [`TripPlanner::daily_logs`] replays the resulting stops against the wall
//! clock to produce one [`DailyLog`] per calendar date.
//!
//! Everything here is a pure function of its inputs; nothing is persisted
//! and no I/O is performed.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use haulage_core::{LogStart, TripInput, TripPlanner, Waypoint};
//!
//! let trip = TripInput::new(
//!     Waypoint::new("New York, NY", 40.7128, -74.0060),
//!     Waypoint::new("Philadelphia, PA", 39.9526, -75.1652),
//!     Waypoint::new("Washington, DC", 38.9072, -77.0369),
//!     0.0,
//! );
//! let start = LogStart::at_default_time(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
//!
//! let plan = TripPlanner::default().plan(&trip, start);
//! assert_eq!(plan.route.stops.len(), 2);
//! assert_eq!(plan.daily_logs.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geodesy;
mod input;
mod logbook;
mod planner;
mod rules;
mod stop;
pub mod test_support;
mod trip;

pub use input::{TripInput, TripInputError, Waypoint, WaypointRole};
pub use logbook::{DailyLog, DutyStatus, LogEntry, LogStart, default_start_time};
pub use planner::{FUEL_STOP_NAME, REST_STOP_NAME};
pub use rules::{HosRules, HosRulesError};
pub use stop::{RouteResult, Stop, StopType};
pub use trip::{TripPlan, TripPlanner, TripSummary, plan_trip};
