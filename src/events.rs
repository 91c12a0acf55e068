//! Structured JSON-lines event stream.
//!
//! Each event is one self-contained JSON object per line: a UTC timestamp,
//! a fresh correlation id, the event tag, and the event's payload fields.
//! Consumers must treat lines independently; ordering reflects emission
//! order and carries no other contract.

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::probe::{Cadence, ProbeVector};
use crate::rng::event_token;

/// Everything the harness ever reports.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Boot {
        message: String,
        max_depth: u32,
        ports: Vec<u16>,
    },
    Probe {
        port: u16,
        vector: ProbeVector,
        amplitude: f64,
        cadence: Cadence,
        depth: u32,
    },
    Sleep {
        ms: u64,
        depth: u32,
        scale: f64,
    },
    Failure {
        error: String,
        failures: u64,
        entropy: f64,
        scale: f64,
    },
    Retry {
        ms: u64,
        depth: u32,
    },
    FinalBinary {
        binary: String,
    },
    Shutdown {
        sessions: u64,
        failures: u64,
        final_binary: String,
    },
}

#[derive(Serialize)]
struct Envelope<'a> {
    ts: String,
    id: String,
    #[serde(flatten)]
    body: &'a Event,
}

/// JSON-lines event sink.
///
/// Write failures are reported on the diagnostic channel and never
/// interrupt the session loop.
pub struct EventLog {
    out: Box<dyn Write + Send>,
}

impl EventLog {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out }
    }

    /// Sink for the shipped binary: one event per stdout line.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn emit(&mut self, event: &Event) {
        if let Err(err) = self.write_line(event) {
            warn!(error = %err, "event sink write failed");
        }
    }

    fn write_line(&mut self, event: &Event) -> anyhow::Result<()> {
        let envelope = Envelope {
            ts: Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            id: event_token(),
            body: event,
        };
        let mut line = serde_json::to_vec(&envelope)?;
        line.push(b'\n');
        self.out.write_all(&line)?;
        self.out.flush()?;
        Ok(())
    }
}
