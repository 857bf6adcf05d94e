//! Fluent builder for one generated activity.

use std::path::Path;

use rand::Rng;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::config::{CalorieModel, GenerationConfig};
use crate::error::SynthError;
use crate::generators::schedule::DayPlan;
use crate::generators::track::TrackGenerator;
use crate::models::{ActivityMetadata, Sample, Sport, TriggerMethod};
use crate::tcx;

/// A finished activity: lap totals plus its trackpoints.
#[derive(Debug, Clone)]
pub struct GeneratedSession {
    pub metadata: ActivityMetadata,
    pub samples: Vec<Sample>,
}

impl GeneratedSession {
    /// Renders the session as a TCX document.
    pub fn to_tcx(&self) -> Result<String, SynthError> {
        tcx::emit_tcx(&self.metadata, &self.samples)
    }

    /// Renders and writes the session to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), SynthError> {
        tcx::write_file(path, &self.to_tcx()?)
    }

    /// Great-circle distance covered by the samples, in meters.
    pub fn track_distance(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.distance_meters)
    }
}

/// Builder for a single activity.
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionBuilder::new()
///     .with_start(datetime!(2024-05-01 10:03:32 UTC))
///     .with_duration(1579.0)
///     .with_distance(3020.0)
///     .with_calories(CalorieModel::Fixed(288))
///     .build(&mut rng)?;
/// session.write_to("output/5_1.tcx")?;
/// ```
pub struct SessionBuilder {
    config: GenerationConfig,
    sport: Sport,
    trigger_method: TriggerMethod,
    start: OffsetDateTime,
    duration_seconds: f64,
    distance_meters: f64,
    calories: CalorieModel,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Starts from the reference run: 2024-05-01 10:03:32 UTC, 1579 s, 3020 m, 288 kcal.
    pub fn new() -> Self {
        Self {
            config: GenerationConfig::default(),
            sport: Sport::Running,
            trigger_method: TriggerMethod::Manual,
            start: datetime!(2024-05-01 10:03:32 UTC),
            duration_seconds: 1579.0,
            distance_meters: 3020.0,
            calories: CalorieModel::Fixed(288),
        }
    }

    /// Starts from a scheduled day.
    pub fn from_plan(plan: &DayPlan) -> Self {
        Self {
            start: plan.start,
            duration_seconds: plan.duration_seconds,
            distance_meters: plan.distance_meters,
            calories: CalorieModel::Fixed(plan.calories),
            ..Self::new()
        }
    }

    /// Sets the track generation parameters.
    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the activity sport.
    pub fn with_sport(mut self, sport: Sport) -> Self {
        self.sport = sport;
        self
    }

    /// Sets how the lap was ended.
    pub fn with_trigger_method(mut self, trigger_method: TriggerMethod) -> Self {
        self.trigger_method = trigger_method;
        self
    }

    /// Sets the activity start time.
    pub fn with_start(mut self, start: OffsetDateTime) -> Self {
        self.start = start;
        self
    }

    /// Sets the declared duration, which also fixes the sample count.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Sets the declared lap distance.
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance_meters = meters;
        self
    }

    /// Sets how lap calories are derived.
    pub fn with_calories(mut self, calories: CalorieModel) -> Self {
        self.calories = calories;
        self
    }

    /// Generates the samples and assembles the session.
    pub fn build(self, rng: &mut impl Rng) -> Result<GeneratedSession, SynthError> {
        let samples =
            TrackGenerator::new(self.config).generate(self.duration_seconds, rng)?;

        let metadata = ActivityMetadata {
            sport: self.sport,
            trigger_method: self.trigger_method,
            ..ActivityMetadata::running(
                self.start,
                self.duration_seconds,
                self.distance_meters,
                self.calories.calories(self.distance_meters),
            )
        };

        Ok(GeneratedSession { metadata, samples })
    }
}
