//! Loop geometry.
//!
//! This module turns a handful of anchor points into one dense lap:
//! - [`interpolate_polyline`]: resample straight segments by anchor index
//! - [`Arc`]: planar circular turns
//! - [`closed_catmull_rom`]: smooth closed spline through the anchors
//! - [`Course`]: straights and turns combined, e.g. a rounded-rectangle track

mod arc;
mod course;
mod interpolate;
mod spline;

pub use arc::{Arc, ArcAltitude};
pub use course::{Course, CourseSegment, LoopGeometry};
pub use interpolate::{interpolate_line, interpolate_polyline, linspace};
pub use spline::closed_catmull_rom;
