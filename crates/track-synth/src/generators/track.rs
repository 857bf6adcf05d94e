//! Trackpoint generation: loop rendering, lap repetition, timing and distance.

use rand::Rng;
use tracing::info;

use super::distance::accumulate_distance;
use super::laps::{LapRepeater, sample_count};
use crate::config::{AltitudeMode, GenerationConfig, JitterConfig};
use crate::error::SynthError;
use crate::geometry::LoopGeometry;
use crate::models::{Sample, Waypoint};

/// Generates timestamped samples around a closed loop.
pub struct TrackGenerator {
    config: GenerationConfig,
}

impl TrackGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Sets the loop shape.
    pub fn with_geometry(mut self, geometry: LoopGeometry) -> Self {
        self.config.geometry = geometry;
        self
    }

    /// Sets the minimum number of laps.
    pub fn with_laps(mut self, laps: usize) -> Self {
        self.config.laps = laps;
        self
    }

    /// Sets how many points one lap is interpolated into.
    pub fn with_points_per_loop(mut self, points: usize) -> Self {
        self.config.points_per_loop = points;
        self
    }

    /// Sets the seconds between consecutive samples.
    pub fn with_sample_interval(mut self, seconds: f64) -> Self {
        self.config.sample_interval_seconds = seconds;
        self
    }

    /// Sets how altitude is assigned per lap.
    pub fn with_altitude(mut self, altitude: AltitudeMode) -> Self {
        self.config.altitude = altitude;
        self
    }

    /// Sets positional noise; `None` disables it.
    pub fn with_jitter(mut self, jitter: Option<JitterConfig>) -> Self {
        self.config.jitter = jitter;
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generates `floor(duration / interval)` samples.
    ///
    /// Sample `i` is `i * interval` seconds into the activity and carries the
    /// haversine distance accumulated from sample 0.
    pub fn generate(
        &self,
        total_duration_seconds: f64,
        rng: &mut impl Rng,
    ) -> Result<Vec<Sample>, SynthError> {
        let interval = self.config.sample_interval_seconds;
        let target = sample_count(total_duration_seconds, interval)?;

        let lap = self.config.geometry.render(self.config.points_per_loop)?;
        let points = LapRepeater::new(self.config.laps)
            .with_altitude(self.config.altitude)
            .with_jitter(self.config.jitter)
            .repeat(&lap, target, rng)?;

        let mut samples: Vec<Sample> = points
            .into_iter()
            .enumerate()
            .map(|(i, p)| Sample {
                lat: p.lat,
                lon: p.lon,
                altitude: p.altitude,
                elapsed_seconds: i as f64 * interval,
                distance_meters: 0.0,
            })
            .collect();

        let total = accumulate_distance(&mut samples);
        info!(
            "Generated {} samples over {}s ({:.1} m along the track)",
            samples.len(),
            total_duration_seconds,
            total
        );

        Ok(samples)
    }
}

/// Generates samples around a polyline loop through `waypoints`.
pub fn generate_samples(
    waypoints: &[Waypoint],
    config: &GenerationConfig,
    total_duration_seconds: f64,
    rng: &mut impl Rng,
) -> Result<Vec<Sample>, SynthError> {
    TrackGenerator::new(config.clone())
        .with_geometry(LoopGeometry::Polyline(waypoints.to_vec()))
        .generate(total_duration_seconds, rng)
}
