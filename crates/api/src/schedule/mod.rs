//! Schedule aggregation domain: turns the flat slot collection into the
//! per-location, per-day view the portal pages render. The grouping and
//! view-building functions are pure; all fetching (and failure degradation)
//! lives in [`service`].

pub mod aggregate;
pub mod daytime;
pub mod grouping;
pub mod service;

pub use aggregate::{build_location_schedule, BranchSchedule, LocationSchedule, NO_MANAGER_FALLBACK};
pub use daytime::{canonical_day_label, format_time_range, normalize_time, WEEKDAY_ORDER};
pub use grouping::{group_slots, DayGroup, ScheduleScope};
