//! Loop descriptions and their rendering into one lap of points.

use serde::{Deserialize, Serialize};

use super::arc::{Arc, ArcAltitude};
use super::interpolate::{interpolate_line, interpolate_polyline};
use super::spline::closed_catmull_rom;
use crate::error::SynthError;
use crate::models::Waypoint;

/// One piece of a segmented course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CourseSegment {
    Line { from: Waypoint, to: Waypoint },
    Arc(Arc),
}

impl CourseSegment {
    fn sample(&self, num_points: usize) -> Vec<Waypoint> {
        match self {
            CourseSegment::Line { from, to } => interpolate_line(from, to, num_points),
            CourseSegment::Arc(arc) => arc.sample(num_points),
        }
    }
}

/// A loop built from alternating straights and turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub segments: Vec<CourseSegment>,
}

impl Course {
    /// Builds a rounded-rectangle track from its four extreme vertices.
    ///
    /// Eight segments alternate straight and quarter turn, starting with the
    /// straight from `left` to `bottom`. Turn centers sit on the bottom and top
    /// latitudes at the midpoint of the left and right longitudes. Radii are
    /// planar distances in degrees between neighbouring vertices.
    pub fn rounded_rectangle(
        bottom: Waypoint,
        left: Waypoint,
        top: Waypoint,
        right: Waypoint,
    ) -> Self {
        let mid_lon = (left.lon + right.lon) / 2.0;
        let turn = |center_lat: f64, radius: f64, start_deg: f64, end_deg: f64, altitude: f64| {
            CourseSegment::Arc(Arc {
                center_lat,
                center_lon: mid_lon,
                radius,
                start_deg,
                end_deg,
                altitude: ArcAltitude::Constant(altitude),
            })
        };

        let segments = vec![
            CourseSegment::Line { from: left, to: bottom },
            turn(bottom.lat, planar_distance(&bottom, &left), 270.0, 360.0, bottom.altitude),
            CourseSegment::Line { from: bottom, to: right },
            turn(top.lat, planar_distance(&top, &right), 0.0, 90.0, right.altitude),
            CourseSegment::Line { from: right, to: top },
            turn(top.lat, planar_distance(&top, &left), 180.0, 270.0, top.altitude),
            CourseSegment::Line { from: top, to: left },
            turn(bottom.lat, planar_distance(&bottom, &right), 90.0, 180.0, left.altitude),
        ];

        Self { segments }
    }

    /// Renders the course, giving each segment `points_per_loop / segments` points.
    ///
    /// `points_per_loop` is the size of the whole lap, shared across all
    /// segments, and the remainder of the division is dropped. This differs
    /// from giving every segment a quarter of `points_per_loop`, which would
    /// make an eight-segment lap twice as long as requested.
    pub fn render(&self, points_per_loop: usize) -> Vec<Waypoint> {
        if self.segments.is_empty() {
            return Vec::new();
        }

        let per_segment = points_per_loop / self.segments.len();
        self.segments
            .iter()
            .flat_map(|segment| segment.sample(per_segment))
            .collect()
    }
}

/// Distance between two points treating degrees as flat coordinates.
fn planar_distance(a: &Waypoint, b: &Waypoint) -> f64 {
    ((a.lat - b.lat).powi(2) + (a.lon - b.lon).powi(2)).sqrt()
}

/// How one lap of the loop is shaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoopGeometry {
    /// Straight lines between anchors, resampled by anchor index.
    Polyline(Vec<Waypoint>),
    /// Smooth closed spline through the anchors.
    Spline(Vec<Waypoint>),
    /// Explicit straights and turns.
    Segmented(Course),
}

impl LoopGeometry {
    /// Produces one lap of `points_per_loop` points (segmented courses may
    /// return fewer, see [`Course::render`]).
    pub fn render(&self, points_per_loop: usize) -> Result<Vec<Waypoint>, SynthError> {
        if points_per_loop == 0 {
            return Err(SynthError::InvalidInput(
                "points per loop must be at least 1".into(),
            ));
        }

        let points = match self {
            LoopGeometry::Polyline(waypoints) => interpolate_polyline(waypoints, points_per_loop)?,
            LoopGeometry::Spline(waypoints) => closed_catmull_rom(waypoints, points_per_loop)?,
            LoopGeometry::Segmented(course) => course.render(points_per_loop),
        };

        if points.is_empty() {
            return Err(SynthError::InvalidInput(format!(
                "loop rendered no points for {points_per_loop} points per loop"
            )));
        }

        Ok(points)
    }
}
