//! Session loop driver.
//!
//! Runs the bounded probe cycle until a stopping condition fires:
//! depth ceiling, silence, or the failure ceiling. A fault raised inside a
//! cycle is recovered locally (failure counter, entropy and scale
//! penalties, one extra pacing round) and never propagates out of the
//! driver.

use anyhow::{Error, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{HarnessConfig, FAILURE_ENTROPY_PENALTY, FAILURE_SCALE_PENALTY, MAX_SCALE};
use crate::events::{Event, EventLog};
use crate::pacing;
use crate::probe::{ProbeGenerator, ProbeSource};
use crate::rng::{RandomSource, StdRandom};
use crate::rotation::PortRotator;
use crate::state::SessionState;

/// Boot banner for the event stream.
const BOOT_MESSAGE: &str = "decoy harness online";

/// Terminal summary of one run.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub sessions: u64,
    pub failures: u64,
    pub final_binary: String,
}

/// One self-driving decoy session.
pub struct ProbeSession {
    cfg: HarnessConfig,
    state: SessionState,
    rotator: PortRotator,
    rng: Box<dyn RandomSource>,
    probes: Box<dyn ProbeSource>,
    log: EventLog,
}

impl ProbeSession {
    /// Live session: OS-seeded randomness, events on stdout.
    pub fn new(cfg: HarnessConfig) -> Self {
        Self::from_parts(
            cfg,
            SessionState::new(),
            Box::new(StdRandom::new()),
            Box::new(ProbeGenerator),
            EventLog::stdout(),
        )
    }

    /// Reproducible session: pinned seed, events on stdout.
    pub fn with_seed(cfg: HarnessConfig, seed: u64) -> Self {
        Self::from_parts(
            cfg,
            SessionState::new(),
            Box::new(StdRandom::with_seed(seed)),
            Box::new(ProbeGenerator),
            EventLog::stdout(),
        )
    }

    /// Assemble a session from explicit parts.
    pub fn from_parts(
        cfg: HarnessConfig,
        state: SessionState,
        rng: Box<dyn RandomSource>,
        probes: Box<dyn ProbeSource>,
        log: EventLog,
    ) -> Self {
        let rotator = PortRotator::new(cfg.ports);
        Self {
            cfg,
            state,
            rotator,
            rng,
            probes,
            log,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drive the loop to termination and return the terminal summary.
    pub async fn run(&mut self) -> SessionReport {
        self.log.emit(&Event::Boot {
            message: BOOT_MESSAGE.to_string(),
            max_depth: self.cfg.max_depth,
            ports: self.rotator.snapshot(),
        });

        while !self.should_stop() {
            match self.cycle().await {
                Ok(()) => {}
                Err(err) => self.recover(err).await,
            }
        }

        let binary = self.state.seal_binary();
        self.log.emit(&Event::FinalBinary {
            binary: binary.clone(),
        });
        info!(binary = %binary, depth = self.state.depth, "session terminated");

        self.log.emit(&Event::Shutdown {
            sessions: self.state.sessions,
            failures: self.state.failures,
            final_binary: binary.clone(),
        });

        SessionReport {
            sessions: self.state.sessions,
            failures: self.state.failures,
            final_binary: binary,
        }
    }

    fn should_stop(&self) -> bool {
        self.state.depth >= self.cfg.max_depth
            || self.state.is_silent(self.cfg.silence_threshold)
            || self.state.failures >= self.cfg.max_failures
    }

    /// One RUNNING cycle: rotate, probe, update, pace, advance.
    async fn cycle(&mut self) -> Result<()> {
        let port = self.rotator.rotate();
        self.state.port_epoch += 1;

        let probe = self.probes.generate(
            port,
            self.state.depth,
            self.state.consequence,
            self.rng.as_mut(),
        )?;
        debug!(banner = probe.banner, port = probe.port, "probing decoy port");

        self.log.emit(&Event::Probe {
            port: probe.port,
            vector: probe.vector,
            amplitude: probe.amplitude,
            cadence: probe.cadence,
            depth: probe.depth,
        });

        self.state.update(&mut self.cfg, probe.delta, probe.heard_delta);

        let ms = pacing::pace(&self.cfg, &self.state, self.rng.as_mut()).await;
        self.log.emit(&Event::Sleep {
            ms,
            depth: self.state.depth,
            scale: self.cfg.scale,
        });

        self.state.depth += 1;
        self.state.sessions += 1;
        Ok(())
    }

    /// Recover a failed cycle: penalize, log, pace once more. Depth and
    /// sessions stay untouched.
    async fn recover(&mut self, err: Error) {
        self.state.failures += 1;
        self.state.entropy = (self.state.entropy + FAILURE_ENTROPY_PENALTY).min(1.0);
        self.cfg.scale = (self.cfg.scale + FAILURE_SCALE_PENALTY).min(MAX_SCALE);

        warn!(error = %err, failures = self.state.failures, "probe cycle failed, backing off");
        self.log.emit(&Event::Failure {
            error: err.to_string(),
            failures: self.state.failures,
            entropy: self.state.entropy,
            scale: self.cfg.scale,
        });

        let ms = pacing::pace(&self.cfg, &self.state, self.rng.as_mut()).await;
        self.log.emit(&Event::Retry {
            ms,
            depth: self.state.depth,
        });
    }
}
