//! Synthetic probe records and their state deltas.
//!
//! A probe never touches the network; it is a randomized record plus two
//! deltas the session folds into its state. An "ego" draw pushes
//! consequence up and archive_ratio down proportionally to amplitude, a
//! "memory" draw does the opposite, and the remaining vectors are inert.

use anyhow::Result;
use serde::Serialize;
use tracing::trace;

use crate::rng::RandomSource;

/// Banner attached to every synthesized probe.
pub const DECOY_BANNER: &str = "decoy-harness/0.1";

/// Probe vector categories, drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeVector {
    Ego,
    Memory,
    Static,
    Mirror,
    Chaos,
}

/// All vectors, in draw order.
pub const VECTORS: [ProbeVector; 5] = [
    ProbeVector::Ego,
    ProbeVector::Memory,
    ProbeVector::Static,
    ProbeVector::Mirror,
    ProbeVector::Chaos,
];

/// Probe cadence, drawn uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Blink,
    Pause,
    Flicker,
}

/// All cadences, in draw order.
pub const CADENCES: [Cadence; 3] = [Cadence::Blink, Cadence::Pause, Cadence::Flicker];

/// One synthesized probe and the deltas it applies.
#[derive(Debug, Clone)]
pub struct ProbeRecord {
    pub banner: &'static str,
    pub port: u16,
    pub depth: u32,
    pub vector: ProbeVector,
    pub amplitude: f64,
    pub cadence: Cadence,
    pub delta: f64,
    pub heard_delta: f64,
}

/// Probe synthesis seam.
///
/// The real generator never fails; the `Result` is the fault contract the
/// session driver recovers from, and tests inject failures through it.
pub trait ProbeSource: Send {
    fn generate(
        &mut self,
        port: u16,
        depth: u32,
        consequence: f64,
        rng: &mut dyn RandomSource,
    ) -> Result<ProbeRecord>;
}

/// Default probe generator.
#[derive(Debug, Default)]
pub struct ProbeGenerator;

impl ProbeSource for ProbeGenerator {
    fn generate(
        &mut self,
        port: u16,
        depth: u32,
        consequence: f64,
        rng: &mut dyn RandomSource,
    ) -> Result<ProbeRecord> {
        let vector = VECTORS[rng.pick(VECTORS.len())];
        let amplitude = (rng.unit() * 1000.0).round() / 1000.0;
        let cadence = CADENCES[rng.pick(CADENCES.len())];

        let direction = match vector {
            ProbeVector::Ego => 1.0,
            ProbeVector::Memory => -1.0,
            _ => 0.0,
        };
        let delta = direction * (0.04 + amplitude * 0.1);
        let heard_delta = -delta * 0.5;

        trace!(port, depth, consequence, vector = ?vector, amplitude, "drew decoy probe");

        Ok(ProbeRecord {
            banner: DECOY_BANNER,
            port,
            depth,
            vector,
            amplitude,
            cadence,
            delta,
            heard_delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        units: Vec<f64>,
        picks: Vec<usize>,
        u: usize,
        p: usize,
    }

    impl Scripted {
        fn new(units: Vec<f64>, picks: Vec<usize>) -> Self {
            Self {
                units,
                picks,
                u: 0,
                p: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn unit(&mut self) -> f64 {
            let v = self.units[self.u % self.units.len()];
            self.u += 1;
            v
        }

        fn pick(&mut self, _n: usize) -> usize {
            let v = self.picks[self.p % self.picks.len()];
            self.p += 1;
            v
        }
    }

    #[test]
    fn ego_pushes_consequence_up() {
        let mut rng = Scripted::new(vec![0.5], vec![0, 0]);
        let probe = ProbeGenerator
            .generate(8080, 3, 0.2, &mut rng)
            .expect("generator is infallible");

        assert_eq!(probe.vector, ProbeVector::Ego);
        assert_eq!(probe.cadence, Cadence::Blink);
        assert!((probe.delta - 0.09).abs() < 1e-12);
        assert!((probe.heard_delta + 0.045).abs() < 1e-12);
    }

    #[test]
    fn memory_pushes_consequence_down() {
        let mut rng = Scripted::new(vec![0.5], vec![1, 2]);
        let probe = ProbeGenerator
            .generate(443, 0, 0.0, &mut rng)
            .expect("generator is infallible");

        assert_eq!(probe.vector, ProbeVector::Memory);
        assert!((probe.delta + 0.09).abs() < 1e-12);
        assert!((probe.heard_delta - 0.045).abs() < 1e-12);
    }

    #[test]
    fn neutral_vectors_are_inert() {
        for idx in 2..5 {
            let mut rng = Scripted::new(vec![0.9], vec![idx, 0]);
            let probe = ProbeGenerator
                .generate(2222, 7, 0.5, &mut rng)
                .expect("generator is infallible");
            assert_eq!(probe.delta, 0.0);
            assert_eq!(probe.heard_delta, 0.0);
        }
    }

    #[test]
    fn amplitude_rounds_to_three_decimals() {
        let mut rng = Scripted::new(vec![0.123456], vec![4, 1]);
        let probe = ProbeGenerator
            .generate(5000, 1, 0.3, &mut rng)
            .expect("generator is infallible");
        assert_eq!(probe.amplitude, 0.123);
    }

    #[test]
    fn record_carries_call_context() {
        let mut rng = Scripted::new(vec![0.4], vec![2, 1]);
        let probe = ProbeGenerator
            .generate(31337, 12, 0.8, &mut rng)
            .expect("generator is infallible");
        assert_eq!(probe.banner, DECOY_BANNER);
        assert_eq!(probe.port, 31337);
        assert_eq!(probe.depth, 12);
    }
}
