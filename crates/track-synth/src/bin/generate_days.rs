//! Generates one TCX file per day over the configured date range.
//!
//! Run with:
//! ```
//! cargo run -p track-synth --bin generate-days
//! ```

use std::path::Path;

use track_synth::builders::SessionBuilder;
use track_synth::config::{SynthConfig, output_dir};
use track_synth::generators::DayScheduler;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SynthConfig::from_env()?;
    let out_dir = output_dir();

    let mut rng = rand::thread_rng();
    let plans = DayScheduler::new(config.schedule).plans(&mut rng)?;
    tracing::info!("Generating {} activities into {}", plans.len(), out_dir);

    for plan in &plans {
        let session = SessionBuilder::from_plan(plan)
            .with_config(config.generation.clone())
            .build(&mut rng)?;

        session.write_to(Path::new(&out_dir).join(&plan.file_name))?;
        tracing::info!(
            "  {}: start {}, {} s, {} m, {} kcal, {} trackpoints",
            plan.date,
            plan.start.time(),
            plan.duration_seconds,
            plan.distance_meters,
            plan.calories,
            session.samples.len()
        );
    }

    tracing::info!("Done!");
    Ok(())
}
