//! Jittered, state-scaled pacing delays.
//!
//! The sleep here is the sole suspension point in the system: an adaptive
//! backoff that lengthens with the pacing scale (driven by consequence and
//! failures) and with entropy.

use std::time::Duration;

use tokio::time::sleep;

use crate::config::HarnessConfig;
use crate::rng::RandomSource;
use crate::state::SessionState;

/// Compute the next pacing delay in milliseconds.
///
/// `(base + jitter) * scale * (1 + entropy)`, rounded.
pub fn next_delay_ms(
    cfg: &HarnessConfig,
    state: &SessionState,
    rng: &mut dyn RandomSource,
) -> u64 {
    let jitter = rng.unit() * cfg.jitter_ms as f64;
    let scaled = (cfg.base_delay_ms as f64 + jitter) * cfg.scale * (1.0 + state.entropy);
    scaled.round() as u64
}

/// Suspend for the computed delay and return it for logging.
pub async fn pace(cfg: &HarnessConfig, state: &SessionState, rng: &mut dyn RandomSource) -> u64 {
    let ms = next_delay_ms(cfg, state, rng);
    sleep(Duration::from_millis(ms)).await;
    ms
}
