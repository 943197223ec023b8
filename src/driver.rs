//! Driver runs the poll cycle: fetch, build, send, report

use std::convert::Infallible;
use std::io::Write;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info, trace};

use crate::adapters::DocumentAdapter;
use crate::config::BridgeConfig;
use crate::datagram::Datagram;
use crate::provider::Provider;
use crate::sink::DatagramSink;
use crate::status::{StatusLine, render_debug_dump, render_status};
use crate::types::TelemetrySnapshot;

/// Step of the poll cycle the driver is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    Fetching,
    Building,
    Sending,
    Reporting,
    /// A fetch or send failed; the waiting status is shown.
    Waiting,
}

/// What one cycle did.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A snapshot was built, sent and reported.
    Sent { snapshot: TelemetrySnapshot, bytes: usize },
    /// Fetch or send failed; the waiting status was shown.
    Waiting,
}

/// Sequential poll loop over one provider and one sink.
///
/// Every step is awaited in order, nothing is spawned, and one cycle never
/// overlaps the next. Failures never leave the cycle: they turn into the
/// waiting status and the next cycle starts after the usual pause.
pub struct Driver<P, S, W: Write> {
    provider: P,
    sink: S,
    status: StatusLine<W>,
    destination: SocketAddr,
    poll_interval: Duration,
    /// Cleared after the first successful fetch.
    dump_pending: bool,
    state: CycleState,
}

impl<P, S, W> Driver<P, S, W>
where
    P: Provider,
    S: DatagramSink,
    W: Write,
{
    pub fn new(provider: P, sink: S, out: W, config: &BridgeConfig) -> Self {
        Self {
            provider,
            sink,
            status: StatusLine::new(out),
            destination: config.destination,
            poll_interval: config.poll_interval,
            dump_pending: config.debug_dump,
            state: CycleState::Fetching,
        }
    }

    /// Run cycles until the process is killed.
    pub async fn run(mut self) -> Infallible {
        info!(
            destination = %self.destination,
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Poll loop started"
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Run exactly one cycle, without the trailing pause.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.enter(CycleState::Fetching);
        let document = match self.provider.fetch().await {
            Ok(document) => document,
            Err(e) => {
                debug!(retryable = e.is_retryable(), "Fetch failed: {}", e);
                return self.wait();
            }
        };

        if self.dump_pending {
            self.dump_pending = false;
            self.status.block(&render_debug_dump(&document));
        }

        self.enter(CycleState::Building);
        let snapshot = TelemetrySnapshot::adapt(&document);

        self.enter(CycleState::Sending);
        let datagram = Datagram::new(&snapshot, self.destination);
        if let Err(e) = self.sink.send(&datagram).await {
            debug!(retryable = e.is_retryable(), "Send failed: {}", e);
            return self.wait();
        }

        self.enter(CycleState::Reporting);
        self.status.show(&render_status(&snapshot));

        CycleOutcome::Sent { snapshot, bytes: datagram.len() }
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Whether the one-time raw document dump is still armed.
    pub fn dump_pending(&self) -> bool {
        self.dump_pending
    }

    /// Terminal output written so far.
    pub fn output(&self) -> &W {
        self.status.get_ref()
    }

    fn wait(&mut self) -> CycleOutcome {
        self.enter(CycleState::Waiting);
        self.status.waiting();
        CycleOutcome::Waiting
    }

    fn enter(&mut self, state: CycleState) {
        trace!(from = ?self.state, to = ?state, "Cycle state");
        self.state = state;
    }
}
