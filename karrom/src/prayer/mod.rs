//! Prayer-time schedules
//!
//! A [`PrayerSchedule`] holds the seven labelled times reported by the
//! timings provider for one day and location. [`next_prayer`] picks the
//! upcoming slot for a given time of day.
//!
//! # Example
//!
//! ```ignore
//! use karrom::prayer::{next_prayer, minutes_since_midnight, PrayerSchedule};
//!
//! let schedule = PrayerSchedule::from_timings(&timings);
//! let now = minutes_since_midnight(chrono::Local::now().time());
//! println!("next: {}", next_prayer(&schedule, now));
//! ```

mod names;
mod next;
mod schedule;
mod time;

pub use names::PrayerName;
pub use next::{minutes_until, next_entry, next_prayer};
pub use schedule::{PrayerEntry, PrayerSchedule, ScheduleError};
pub use time::{format_minutes, minutes_of_day, minutes_since_midnight, MINUTES_PER_DAY};
