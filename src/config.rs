//! Simulation constants and the per-session pacing context.
//!
//! The source design kept the pacing scale as process-wide mutable state;
//! here the whole configuration is an explicit struct owned by the session
//! and passed by reference, so concurrent sessions cannot interfere.

/// Initial port rotation order.
pub const DEFAULT_PORTS: [u16; 5] = [31337, 8080, 2222, 443, 5000];

/// Hard iteration ceiling for successful cycles.
pub const MAX_DEPTH: u32 = 64;

/// Unheard fraction at or above which the session goes silent.
pub const SILENCE_THRESHOLD: f64 = 0.88;

/// Pacing base delay (milliseconds).
pub const BASE_DELAY_MS: u64 = 100;

/// Pacing jitter range (milliseconds).
pub const JITTER_MS: u64 = 300;

/// Ceiling for the pacing scale factor.
pub const MAX_SCALE: f64 = 2.0;

/// Total recovered failures after which the run terminates.
pub const MAX_FAILURES: u64 = 256;

/// Entropy penalty applied per recovered failure.
pub const FAILURE_ENTROPY_PENALTY: f64 = 0.07;

/// Scale penalty applied per recovered failure.
pub const FAILURE_SCALE_PENALTY: f64 = 0.1;

/// Per-session configuration.
///
/// Everything except `scale` is fixed for the lifetime of a run. `scale`
/// is recomputed from session state on every update and bumped further on
/// failure, capped at [`MAX_SCALE`].
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Port set in its initial rotation order.
    pub ports: [u16; 5],
    /// Iteration ceiling.
    pub max_depth: u32,
    /// Silence predicate threshold.
    pub silence_threshold: f64,
    /// Base pacing delay (ms).
    pub base_delay_ms: u64,
    /// Uniform pacing jitter range (ms).
    pub jitter_ms: u64,
    /// Failure ceiling; keeps a persistently failing run bounded.
    pub max_failures: u64,
    /// Pacing multiplier, >= 1.0.
    pub scale: f64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            ports: DEFAULT_PORTS,
            max_depth: MAX_DEPTH,
            silence_threshold: SILENCE_THRESHOLD,
            base_delay_ms: BASE_DELAY_MS,
            jitter_ms: JITTER_MS,
            max_failures: MAX_FAILURES,
            scale: 1.0,
        }
    }
}
