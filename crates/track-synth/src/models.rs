//! Core data types: loop anchors, generated samples and activity metadata.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A geodetic anchor point of a loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Altitude in meters.
    pub altitude: f64,
}

impl Waypoint {
    pub const fn new(lat: f64, lon: f64, altitude: f64) -> Self {
        Self { lat, lon, altitude }
    }
}

/// One generated trackpoint.
///
/// `elapsed_seconds` is strictly increasing and `distance_meters` is
/// non-decreasing along a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub lat: f64,
    pub lon: f64,
    pub altitude: f64,
    /// Seconds since the activity start.
    pub elapsed_seconds: f64,
    /// Cumulative great-circle distance from the first sample.
    pub distance_meters: f64,
}

/// Sport attribute of a TCX activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sport {
    #[default]
    Running,
    Biking,
    Other,
}

impl Sport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Running => "Running",
            Sport::Biking => "Biking",
            Sport::Other => "Other",
        }
    }
}

/// How the lap was ended on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerMethod {
    #[default]
    Manual,
    Distance,
    Location,
    Time,
    HeartRate,
}

impl TriggerMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerMethod::Manual => "Manual",
            TriggerMethod::Distance => "Distance",
            TriggerMethod::Location => "Location",
            TriggerMethod::Time => "Time",
            TriggerMethod::HeartRate => "HeartRate",
        }
    }
}

/// Aggregate values written on the activity and its single lap.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityMetadata {
    pub sport: Sport,
    /// Activity id and lap start time.
    pub start: OffsetDateTime,
    pub total_time_seconds: f64,
    /// Declared lap distance; not recomputed from the samples.
    pub distance_meters: f64,
    pub calories: u32,
    pub trigger_method: TriggerMethod,
}

impl ActivityMetadata {
    /// Creates running metadata with a manual lap trigger.
    pub fn running(
        start: OffsetDateTime,
        total_time_seconds: f64,
        distance_meters: f64,
        calories: u32,
    ) -> Self {
        Self {
            sport: Sport::Running,
            start,
            total_time_seconds,
            distance_meters,
            calories,
            trigger_method: TriggerMethod::Manual,
        }
    }

    /// Average speed in meters per second.
    pub fn average_speed(&self) -> f64 {
        self.distance_meters / self.total_time_seconds
    }
}
