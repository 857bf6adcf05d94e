//! Generates the reference run as a single TCX file.
//!
//! Run with:
//! ```
//! cargo run -p track-synth --bin generate
//! ```

use std::path::Path;

use track_synth::builders::SessionBuilder;
use track_synth::config::{SynthConfig, output_dir};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SynthConfig::from_env()?;
    let path = Path::new(&output_dir()).join("5_1.tcx");

    let mut rng = rand::thread_rng();
    let session = SessionBuilder::new()
        .with_config(config.generation)
        .build(&mut rng)?;

    session.write_to(&path)?;

    tracing::info!("Activity written!");
    tracing::info!("  Trackpoints: {}", session.samples.len());
    tracing::info!("  Track distance: {:.1} m", session.track_distance());
    tracing::info!("  Declared distance: {} m", session.metadata.distance_meters);

    Ok(())
}
