//! Circular arc sampling in planar degree space.

use serde::{Deserialize, Serialize};

use super::interpolate::linspace;
use crate::models::Waypoint;

/// Altitude profile along an arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ArcAltitude {
    /// Same altitude for every point.
    Constant(f64),
    /// Linearly spaced from the first to the second value.
    Ramp(f64, f64),
}

/// A circular arc around `(center_lat, center_lon)`.
///
/// The radius is in degrees and the arc is evaluated on the flat
/// lat/lon plane. That is only acceptable for small loops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center_lat: f64,
    pub center_lon: f64,
    /// Radius in degrees.
    pub radius: f64,
    /// Start angle in degrees.
    pub start_deg: f64,
    /// End angle in degrees.
    pub end_deg: f64,
    pub altitude: ArcAltitude,
}

impl Arc {
    /// Samples `num_points` points with angles evenly spaced from start to end.
    ///
    /// `lat = center_lat + radius * sin(angle)` and
    /// `lon = center_lon + radius * cos(angle)`.
    pub fn sample(&self, num_points: usize) -> Vec<Waypoint> {
        let angles = linspace(self.start_deg, self.end_deg, num_points);
        let alts = match self.altitude {
            ArcAltitude::Constant(alt) => vec![alt; num_points],
            ArcAltitude::Ramp(from, to) => linspace(from, to, num_points),
        };

        angles
            .into_iter()
            .zip(alts)
            .map(|(deg, altitude)| {
                let rad = deg.to_radians();
                Waypoint::new(
                    self.center_lat + self.radius * rad.sin(),
                    self.center_lon + self.radius * rad.cos(),
                    altitude,
                )
            })
            .collect()
    }
}
