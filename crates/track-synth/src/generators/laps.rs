//! Lap repetition and time-budget truncation.

use rand::Rng;
use rand_distr::{Distribution, Uniform};
use tracing::{debug, warn};

use crate::config::{AltitudeMode, JitterConfig};
use crate::error::SynthError;
use crate::models::Waypoint;

/// Upper bound on samples in one activity.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Number of samples that fit in `duration_seconds` at `interval_seconds`.
///
/// Both values must be finite and positive, and the budget may not exceed
/// [`MAX_SAMPLES`].
pub fn sample_count(duration_seconds: f64, interval_seconds: f64) -> Result<usize, SynthError> {
    if !(duration_seconds.is_finite() && duration_seconds > 0.0) {
        return Err(SynthError::InvalidDuration(duration_seconds));
    }
    if !(interval_seconds.is_finite() && interval_seconds > 0.0) {
        return Err(SynthError::InvalidInterval(interval_seconds));
    }

    let count = (duration_seconds / interval_seconds).floor();
    if count > MAX_SAMPLES as f64 {
        return Err(SynthError::InvalidInput(format!(
            "{duration_seconds}s at {interval_seconds}s intervals exceeds {MAX_SAMPLES} samples"
        )));
    }
    Ok(count as usize)
}

/// Repeats one lap of points and cuts the result to a sample budget.
#[derive(Debug, Clone)]
pub struct LapRepeater {
    laps: usize,
    altitude: AltitudeMode,
    jitter: Option<JitterConfig>,
}

impl LapRepeater {
    /// Creates a repeater for at least `laps` laps, keeping loop altitude.
    pub fn new(laps: usize) -> Self {
        Self {
            laps,
            altitude: AltitudeMode::Interpolated,
            jitter: None,
        }
    }

    /// Sets how altitude is assigned per lap.
    pub fn with_altitude(mut self, altitude: AltitudeMode) -> Self {
        self.altitude = altitude;
        self
    }

    /// Sets positional noise; `None` disables it.
    pub fn with_jitter(mut self, jitter: Option<JitterConfig>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Repeats `lap` and keeps the first `target` points.
    ///
    /// The cut may land mid-lap. If the configured laps hold fewer than
    /// `target` points, extra laps are appended until the budget is filled.
    /// Laps past the cut are not generated.
    pub fn repeat(
        &self,
        lap: &[Waypoint],
        target: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Waypoint>, SynthError> {
        if lap.is_empty() {
            return Err(SynthError::InvalidInput("cannot repeat an empty lap".into()));
        }

        // Laps past `needed` would be cut entirely, so they are never built
        let needed = target.div_ceil(lap.len());
        if needed > self.laps {
            warn!(
                "{} laps of {} points cannot fill {} samples, generating {} laps",
                self.laps,
                lap.len(),
                target,
                needed
            );
        }

        let noise = match self.jitter {
            Some(j) if !(valid_bound(j.max_offset_deg) && valid_bound(j.altitude_m)) => {
                return Err(SynthError::InvalidInput(format!(
                    "jitter bounds must be finite and non-negative, got {j:?}"
                )));
            }
            Some(j) => Some((
                Uniform::new_inclusive(-j.max_offset_deg, j.max_offset_deg),
                Uniform::new_inclusive(-j.altitude_m, j.altitude_m),
            )),
            None => None,
        };

        let capacity = needed.checked_mul(lap.len()).ok_or_else(|| {
            SynthError::InvalidInput(format!("{needed} laps of {} points overflow", lap.len()))
        })?;
        let mut points = Vec::with_capacity(capacity);
        for lap_index in 0..needed {
            for point in lap {
                let mut p = *point;
                if let AltitudeMode::PerLap { base } = self.altitude {
                    p.altitude = base + (lap_index % 4) as f64;
                }
                if let Some((position, altitude)) = &noise {
                    p.lat += position.sample(rng);
                    p.lon += position.sample(rng);
                    p.altitude += altitude.sample(rng);
                }
                points.push(p);
            }
        }

        debug!("Repeated {} laps into {} points, keeping {}", needed, points.len(), target);
        points.truncate(target);

        Ok(points)
    }
}

/// A jitter bound `b` is usable when the span `[-b, b]` is itself finite.
fn valid_bound(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && (2.0 * value).is_finite()
}
