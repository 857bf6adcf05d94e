//! Synthetic TCX activity generation.
//!
//! This crate fabricates running sessions around a small closed loop: it
//! interpolates the loop into dense trackpoints, repeats it lap after lap,
//! cuts the result to a time budget, accumulates haversine distance and
//! writes the activity as Training Center XML.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use track_synth::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let session = SessionBuilder::new()
//!     .with_duration(1579.0)
//!     .with_distance(3020.0)
//!     .build(&mut rng)?;
//! session.write_to("output/5_1.tcx")?;
//! ```

pub mod builders;
pub mod config;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod models;
pub mod tcx;

pub use error::SynthError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{GeneratedSession, SessionBuilder};
    pub use crate::config::{
        AltitudeMode, CalorieModel, GenerationConfig, JitterConfig, ScheduleConfig, SynthConfig,
    };
    pub use crate::error::SynthError;
    pub use crate::generators::{
        DayPlan, DayScheduler, LapRepeater, TrackGenerator, generate_samples, haversine_distance,
    };
    pub use crate::geometry::{Arc, ArcAltitude, Course, CourseSegment, LoopGeometry};
    pub use crate::models::{ActivityMetadata, Sample, Sport, TriggerMethod, Waypoint};
    pub use crate::tcx::{emit_tcx, write_file};
}
