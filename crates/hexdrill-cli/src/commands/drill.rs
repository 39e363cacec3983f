//! The drill itself: open the log, seed the generator, and run until EOF.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hexdrill_core::session::{open_log, DrillConfig, DrillSession};
use hexdrill_core::transcript::Transcript;

pub fn execute(config: DrillConfig) -> Result<()> {
    let log = config.log_path.as_deref().map(open_log).transpose()?;

    let mut session = DrillSession::new(&config, StdRng::seed_from_u64(time_seed()))?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut transcript = Transcript::new(std::io::stdout().lock(), log);
    tracing::debug!(mode = %config.mode, logging = transcript.is_logging(), "session opened");

    let stats = session.run(&mut input, &mut transcript)?;
    tracing::debug!(asked = stats.asked, right = stats.right, "session closed");

    Ok(())
}

/// Seed from the wall clock; runs are not meant to be reproducible.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
