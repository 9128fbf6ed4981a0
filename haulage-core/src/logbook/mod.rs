//! Daily log sheets built from a planned route.
//!
//! The route is replayed as alternating drive and dwell intervals starting
//! at a wall-clock [`LogStart`]. Intervals that cross midnight are cut so
//! that every [`LogEntry`] belongs to exactly one calendar date.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{HosRules, RouteResult, StopType, TripInput};

const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Intervals shorter than this many hours are not logged.
const TOLERANCE: f64 = 1e-9;

/// Duty status recorded on a log sheet.
///
/// # Examples
/// ```
/// use haulage_core::{DutyStatus, StopType};
///
/// assert_eq!(DutyStatus::from(StopType::Rest), DutyStatus::Sleeper);
/// assert_eq!(DutyStatus::from(StopType::Fuel).as_str(), "on_duty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DutyStatus {
    /// Off duty.
    OffDuty,
    /// In the sleeper berth.
    Sleeper,
    /// Driving.
    Driving,
    /// On duty, not driving.
    OnDuty,
}

impl DutyStatus {
    /// Return the status as a `snake_case` `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OffDuty => "off_duty",
            Self::Sleeper => "sleeper",
            Self::Driving => "driving",
            Self::OnDuty => "on_duty",
        }
    }
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StopType> for DutyStatus {
    fn from(stop_type: StopType) -> Self {
        match stop_type {
            StopType::Rest => Self::Sleeper,
            StopType::Pickup | StopType::Dropoff | StopType::Fuel => Self::OnDuty,
        }
    }
}

/// Wall-clock moment at which the trip begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStart {
    /// Calendar date of departure.
    pub date: NaiveDate,
    /// Time of day of departure.
    pub time: NaiveTime,
}

impl LogStart {
    /// Start at an explicit date and time.
    #[must_use]
    pub const fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Start at 08:00 on `date`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use haulage_core::LogStart;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    /// let start = LogStart::at_default_time(date);
    /// assert_eq!(start.time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    /// ```
    #[must_use]
    pub fn at_default_time(date: NaiveDate) -> Self {
        Self::new(date, default_start_time())
    }

    /// Departure as a single timestamp.
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Time of day at which trips start unless told otherwise.
#[must_use]
pub fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// One contiguous interval under a single duty status within one date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogEntry {
    /// Duty status for the interval.
    pub status: DutyStatus,
    /// Time of day the interval starts.
    pub start_time: NaiveTime,
    /// Time of day the interval ends; `23:59` when cut at midnight.
    pub end_time: NaiveTime,
    /// Exact length of the interval in hours.
    pub duration_hours: f64,
    /// Stop the interval leads to or is spent at.
    pub location: String,
    /// Free-text note, e.g. `"Driving to Fuel Stop"`.
    pub remarks: String,
}

/// Every entry for one calendar date with its duty totals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DailyLog {
    /// Calendar date covered by the sheet.
    pub date: NaiveDate,
    /// Driver named on the sheet; empty when the trip has none.
    pub driver_name: String,
    /// Terminal the driver reports to.
    pub home_terminal: String,
    /// Miles driven on this date at the planned average speed.
    pub total_miles_today: f64,
    /// Hours spent driving on this date.
    pub total_hours_driving: f64,
    /// Hours spent driving or on duty on this date.
    pub total_hours_on_duty: f64,
    /// Entries in chronological order.
    pub entries: Vec<LogEntry>,
}

impl DailyLog {
    /// Sum of every entry's duration.
    #[must_use]
    pub fn logged_hours(&self) -> f64 {
        self.entries.iter().map(|entry| entry.duration_hours).sum()
    }

    /// Sum of entry durations under `status`.
    #[must_use]
    pub fn hours_in(&self, status: DutyStatus) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.status == status)
            .map(|entry| entry.duration_hours)
            .sum()
    }
}

/// Replay `route` from `start` and cut it into one [`DailyLog`] per date.
pub(crate) fn partition(
    input: &TripInput,
    route: &RouteResult,
    rules: &HosRules,
    start: LogStart,
) -> Vec<DailyLog> {
    let mut timeline = Timeline::new(start.starts_at());
    for stop in &route.stops {
        let remarks = format!("Driving to {}", stop.location_name);
        timeline.emit(
            DutyStatus::Driving,
            rules.drive_hours(stop.distance_from_previous),
            &stop.location_name,
            &remarks,
        );
        timeline.emit(
            DutyStatus::from(stop.stop_type),
            stop.duration_hours,
            &stop.location_name,
            stop.stop_type.label(),
        );
    }

    let driver_name = input.driver_name.clone().unwrap_or_default();
    let home_terminal = input
        .home_terminal
        .clone()
        .unwrap_or_else(|| input.current.name.clone());

    timeline
        .days
        .into_iter()
        .map(|(date, entries)| {
            let mut sheet = DailyLog {
                date,
                driver_name: driver_name.clone(),
                home_terminal: home_terminal.clone(),
                total_miles_today: 0.0,
                total_hours_driving: 0.0,
                total_hours_on_duty: 0.0,
                entries,
            };
            sheet.total_hours_driving = sheet.hours_in(DutyStatus::Driving);
            sheet.total_hours_on_duty = on_duty_hours(&sheet);
            sheet.total_miles_today = rules.drive_miles(sheet.total_hours_driving);
            log::debug!(
                "{date}: {} entries, {:.2} h driving, {:.2} h on duty",
                sheet.entries.len(),
                sheet.total_hours_driving,
                sheet.total_hours_on_duty,
            );
            sheet
        })
        .collect()
}

#[expect(clippy::float_arithmetic, reason = "driving counts as on-duty time")]
fn on_duty_hours(sheet: &DailyLog) -> f64 {
    sheet.total_hours_driving + sheet.hours_in(DutyStatus::OnDuty)
}

/// Wall-clock cursor and the entries emitted so far, keyed by date.
struct Timeline {
    cursor: NaiveDateTime,
    days: BTreeMap<NaiveDate, Vec<LogEntry>>,
}

#[expect(
    clippy::float_arithmetic,
    reason = "interval lengths are floating-point hours"
)]
impl Timeline {
    const fn new(cursor: NaiveDateTime) -> Self {
        Self {
            cursor,
            days: BTreeMap::new(),
        }
    }

    /// Log `hours` under `status` from the cursor, cutting at each midnight.
    fn emit(&mut self, status: DutyStatus, hours: f64, location: &str, remarks: &str) {
        if hours <= TOLERANCE {
            return;
        }
        let mut remaining = hours;
        loop {
            let date = self.cursor.date();
            let midnight = date
                .succ_opt()
                .map(|next| next.and_time(NaiveTime::MIN));
            let until_midnight =
                midnight.map_or(f64::INFINITY, |at| hours_between(self.cursor, at));

            if remaining < until_midnight - TOLERANCE {
                let end = advance(self.cursor, remaining);
                self.push(date, status, end.time(), remaining, location, remarks);
                self.cursor = end;
                break;
            }

            self.push(date, status, end_of_day(), until_midnight, location, remarks);
            remaining -= until_midnight;
            if let Some(at) = midnight {
                self.cursor = at;
            }
            if remaining <= TOLERANCE {
                break;
            }
        }
    }

    fn push(
        &mut self,
        date: NaiveDate,
        status: DutyStatus,
        end_time: NaiveTime,
        duration_hours: f64,
        location: &str,
        remarks: &str,
    ) {
        self.days.entry(date).or_default().push(LogEntry {
            status,
            start_time: self.cursor.time(),
            end_time,
            duration_hours,
            location: location.to_owned(),
            remarks: remarks.to_owned(),
        });
    }
}

/// Time of day shown as the end of a segment cut at midnight.
fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN)
}

#[expect(clippy::float_arithmetic, reason = "seconds to hours")]
fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    to.signed_duration_since(from)
        .to_std()
        .map_or(0.0, |gap| gap.as_secs_f64() / SECONDS_PER_HOUR)
}

/// Move `at` forward by `hours`, saturating at the last representable moment.
#[expect(clippy::float_arithmetic, reason = "hours to seconds")]
fn advance(at: NaiveDateTime, hours: f64) -> NaiveDateTime {
    Duration::try_from_secs_f64(hours * SECONDS_PER_HOUR)
        .ok()
        .and_then(|span| TimeDelta::from_std(span).ok())
        .and_then(|delta| at.checked_add_signed(delta))
        .unwrap_or(NaiveDateTime::MAX)
}
