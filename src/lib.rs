//! Facade crate for the Haulage trip planner.
//!
//! This crate re-exports the core planning types so applications can depend
//! on a single crate.

#![forbid(unsafe_code)]

pub use haulage_core::{
    DailyLog, DutyStatus, HosRules, HosRulesError, LogEntry, LogStart, RouteResult, Stop,
    StopType, TripInput, TripInputError, TripPlan, TripPlanner, TripSummary, Waypoint, geodesy,
    plan_trip,
};
