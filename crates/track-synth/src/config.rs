//! Configuration types and default constants for activity generation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

use crate::error::SynthError;
use crate::geometry::LoopGeometry;
use crate::models::Waypoint;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "TRACK_SYNTH_CONFIG";
/// Environment variable naming the output directory.
pub const OUTPUT_DIR_ENV: &str = "TRACK_SYNTH_OUTPUT_DIR";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Seconds between consecutive trackpoints.
pub const DEFAULT_SAMPLE_INTERVAL: f64 = 2.056;
pub const DEFAULT_LAPS: usize = 8;
pub const DEFAULT_POINTS_PER_LOOP: usize = 100;
pub const DEFAULT_ALTITUDE_BASE: f64 = 96.0;

// Extreme vertices of the default running track.
pub const TRACK_BOTTOM: Waypoint = Waypoint::new(39.084861, 121.808194, 98.0);
pub const TRACK_LEFT: Waypoint = Waypoint::new(39.085528, 121.807667, 96.0);
pub const TRACK_TOP: Waypoint = Waypoint::new(39.086250, 121.808194, 99.0);
pub const TRACK_RIGHT: Waypoint = Waypoint::new(39.085556, 121.808667, 97.0);

/// The default track as a closed polygon (first vertex repeated at the end).
pub fn default_loop() -> Vec<Waypoint> {
    vec![TRACK_BOTTOM, TRACK_LEFT, TRACK_TOP, TRACK_RIGHT, TRACK_BOTTOM]
}

/// How trackpoint altitude is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AltitudeMode {
    /// Keep the altitude produced by the loop geometry.
    Interpolated,
    /// Replace altitude with `base + (lap_index % 4)`.
    PerLap { base: f64 },
}

impl Default for AltitudeMode {
    fn default() -> Self {
        Self::PerLap {
            base: DEFAULT_ALTITUDE_BASE,
        }
    }
}

/// Uniform positional noise added to every repeated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    /// Max latitude/longitude offset in degrees (either direction).
    pub max_offset_deg: f64,
    /// Max altitude offset in meters (either direction).
    pub altitude_m: f64,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            max_offset_deg: 0.00001,
            altitude_m: 0.5,
        }
    }
}

/// Parameters of the trackpoint generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub geometry: LoopGeometry,
    /// Points rendered for one lap.
    pub points_per_loop: usize,
    /// Minimum number of lap repetitions before truncation.
    pub laps: usize,
    pub sample_interval_seconds: f64,
    pub altitude: AltitudeMode,
    /// No jitter when `None`.
    pub jitter: Option<JitterConfig>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            geometry: LoopGeometry::Polyline(default_loop()),
            points_per_loop: DEFAULT_POINTS_PER_LOOP,
            laps: DEFAULT_LAPS,
            sample_interval_seconds: DEFAULT_SAMPLE_INTERVAL,
            altitude: AltitudeMode::default(),
            jitter: None,
        }
    }
}

/// How calories are derived for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalorieModel {
    Fixed(u32),
    /// Calories per meter of distance.
    PerMeter(f64),
}

impl Default for CalorieModel {
    fn default() -> Self {
        Self::PerMeter(0.1)
    }
}

impl CalorieModel {
    pub fn calories(&self, distance_meters: f64) -> u32 {
        match self {
            CalorieModel::Fixed(kcal) => *kcal,
            CalorieModel::PerMeter(per_m) => (per_m * distance_meters).round().max(0.0) as u32,
        }
    }
}

/// Parameters of the multi-day generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// First day, `YYYY-MM-DD`.
    pub from: String,
    /// Last day (inclusive), `YYYY-MM-DD`.
    pub to: String,
    /// Inclusive range of start hours (UTC).
    pub start_hours: (u8, u8),
    pub distance_range_m: (f64, f64),
    pub duration_range_s: (f64, f64),
    pub calories: CalorieModel,
    /// File name with `{month}` and `{day}` placeholders.
    pub file_template: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            from: "2024-05-01".to_string(),
            to: "2024-05-31".to_string(),
            start_hours: (6, 9),
            distance_range_m: (2800.0, 3300.0),
            duration_range_s: (1450.0, 1700.0),
            calories: CalorieModel::default(),
            file_template: "{month}_{day}.tcx".to_string(),
        }
    }
}

impl ScheduleConfig {
    /// Parses the configured date range.
    pub fn date_range(&self) -> Result<(Date, Date), SynthError> {
        let format = format_description!("[year]-[month]-[day]");
        let from = Date::parse(&self.from, format)?;
        let to = Date::parse(&self.to, format)?;
        Ok((from, to))
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub generation: GenerationConfig,
    pub schedule: ScheduleConfig,
}

impl SynthConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SynthError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SynthError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by `TRACK_SYNTH_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, SynthError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                tracing::info!("Loading config from {}", path);
                Self::from_json_file(path)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Output directory from `TRACK_SYNTH_OUTPUT_DIR`, or `./output`.
pub fn output_dir() -> String {
    std::env::var(OUTPUT_DIR_ENV).unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = SynthConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SynthConfig::default());
        assert_eq!(config.generation.laps, 8);
        assert_eq!(config.generation.sample_interval_seconds, 2.056);
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{
            "generation": { "laps": 10, "jitter": {} },
            "schedule": { "from": "2024-06-01", "to": "2024-06-03", "calories": { "Fixed": 288 } }
        }"#;
        let config = SynthConfig::from_json_str(json).unwrap();

        assert_eq!(config.generation.laps, 10);
        assert_eq!(config.generation.points_per_loop, DEFAULT_POINTS_PER_LOOP);
        assert_eq!(config.generation.jitter, Some(JitterConfig::default()));
        assert_eq!(config.schedule.calories, CalorieModel::Fixed(288));
        assert_eq!(
            config.schedule.date_range().unwrap(),
            (date!(2024 - 06 - 01), date!(2024 - 06 - 03))
        );
    }

    #[test]
    fn test_bad_date_is_error() {
        let schedule = ScheduleConfig {
            from: "May 1st".to_string(),
            ..Default::default()
        };
        assert!(matches!(schedule.date_range(), Err(SynthError::TimeParse(_))));
    }

    #[test]
    fn test_calorie_models() {
        assert_eq!(CalorieModel::Fixed(288).calories(3020.0), 288);
        assert_eq!(CalorieModel::PerMeter(0.1).calories(3020.0), 302);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(
            SynthConfig::from_json_str("{ not json"),
            Err(SynthError::Config(_))
        ));
    }
}
