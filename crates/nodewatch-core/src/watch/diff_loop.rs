use crate::errors::Result;
use crate::fingerprint::fingerprint;
use crate::ledger::ChangeLedger;
use crate::log_op_end;
use crate::model::NodeId;
use crate::watch::emitter::LineSink;
use crate::watch::source::{ObservedState, SnapshotSource};
use std::convert::Infallible;
use std::time::{Duration, Instant};

/// Line that frames cycle boundaries in the output stream
pub const SEPARATOR: &str = "---";

/// Pause between the end of one cycle's output and the next fetch
pub const DEFAULT_CYCLE_PERIOD: Duration = Duration::from_millis(250);

/// Outcome of one completed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based cycle number
    pub cycle: u64,
    /// Node states in this cycle's snapshot
    pub fetched: usize,
    /// Detail lines written (separator excluded)
    pub emitted: usize,
    /// Whether a separator opened this cycle's output
    pub separator: bool,
}

/// The polling controller
///
/// Owns the ledger; nothing else reads or writes it.
pub struct DiffLoop<S, E> {
    source: S,
    sink: E,
    ledger: ChangeLedger,
    period: Duration,
    cycles: u64,
    separator_due: bool,
}

impl<S: SnapshotSource, E: LineSink> DiffLoop<S, E> {
    pub fn new(source: S, sink: E) -> Self {
        Self {
            source,
            sink,
            ledger: ChangeLedger::new(),
            period: DEFAULT_CYCLE_PERIOD,
            cycles: 0,
            // the first cycle is always framed
            separator_due: true,
        }
    }

    /// Override the pause between cycles
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn ledger(&self) -> &ChangeLedger {
        &self.ledger
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }

    /// Number of cycles that ran to completion
    pub fn cycles_completed(&self) -> u64 {
        self.cycles
    }

    /// Run one fetch–diff–emit pass without sleeping
    ///
    /// # Errors
    ///
    /// Propagates the source's fetch error or a fingerprint `Serialization`
    /// error. In both cases nothing has been written to the sink and the
    /// ledger is untouched.
    pub async fn run_cycle(&mut self) -> Result<CycleReport> {
        let started = Instant::now();
        let cycle = self.cycles + 1;

        let states = self.source.fetch().await?;

        // Fingerprint everything before touching the ledger.
        let mut observed: Vec<(NodeId, String)> = Vec::with_capacity(states.len());
        for state in &states {
            let id = state.node_id();
            let detail = fingerprint(state).map_err(|e| e.with_node_id(id.as_str()))?;
            observed.push((id.clone(), detail));
        }

        for (id, detail) in observed {
            self.ledger.observe(id, detail);
        }

        let separator = self.separator_due;
        if separator {
            self.sink.write_line(SEPARATOR);
        }

        let mut emitted = 0;
        for (_, record) in self.ledger.changed() {
            self.sink.write_line(record.detail());
            emitted += 1;
        }

        self.separator_due = emitted > 0;
        self.cycles = cycle;

        let duration_ms = started.elapsed().as_millis() as u64;
        if emitted > 0 {
            log_op_end!(
                "cycle",
                duration_ms = duration_ms,
                cycle = cycle,
                fetched = states.len(),
                emitted = emitted,
                ledger_len = self.ledger.len(),
            );
        } else {
            tracing::debug!(
                component = module_path!(),
                op = "cycle",
                event = crate::schema::EVENT_END,
                duration_ms = duration_ms,
                cycle = cycle,
                fetched = states.len(),
                emitted = 0u64,
                ledger_len = self.ledger.len(),
            );
        }

        Ok(CycleReport {
            cycle,
            fetched: states.len(),
            emitted,
            separator,
        })
    }

    /// Run cycles forever, sleeping for the cycle period between them
    ///
    /// Only returns on a fatal error; normal termination is process exit by
    /// the cancellation listener.
    ///
    /// # Errors
    ///
    /// The first error from [`run_cycle`](Self::run_cycle).
    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            self.run_cycle().await?;
            tokio::time::sleep(self.period).await;
        }
    }
}
