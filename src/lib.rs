//! # Decoy Harness
//!
//! Self-driving decoy probe simulator. One session runs a bounded loop:
//! rotate a port, synthesize a randomized probe, fold its deltas into the
//! session state, sleep an adaptively scaled interval, repeat. The run ends
//! at a depth ceiling, when the silence predicate fires, or when the failure
//! ceiling is reached.
//!
//! ## Behavior
//!
//! - **No network I/O**: probes are synthetic records, ports are labels.
//! - **Adaptive pacing**: delay grows with consequence (via the scale
//!   factor) and entropy, and failures inflate both.
//! - **Event stream**: every step emits one self-contained JSON line.
//! - **Total recovery**: a fault inside a cycle is penalized and retried,
//!   never propagated.

/// Fixed constants and the per-session pacing context
pub mod config;
/// Structured JSON-lines event stream
pub mod events;
/// Jittered, state-scaled pacing delays
pub mod pacing;
/// Synthetic probe records and their state deltas
pub mod probe;
/// Randomness seam for probe synthesis and pacing jitter
pub mod rng;
/// Cyclic rotation over the fixed port set
pub mod rotation;
/// Session loop driver and failure recovery
pub mod session;
/// Bounded mutable session state
pub mod state;
