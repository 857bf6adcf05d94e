//! Trackpoint and schedule generators.
//!
//! - [`TrackGenerator`]: render a loop, repeat it, time it and measure it
//! - [`LapRepeater`]: lap repetition with altitude variation and jitter
//! - [`DayScheduler`]: randomized per-day activity plans
//! - [`haversine_distance`]: great-circle distance used for every trackpoint

pub mod distance;
pub mod laps;
pub mod schedule;
pub mod track;

pub use distance::{EARTH_RADIUS_M, accumulate_distance, haversine_distance};
pub use laps::{LapRepeater, sample_count};
pub use schedule::{DayPlan, DayScheduler};
pub use track::{TrackGenerator, generate_samples};
