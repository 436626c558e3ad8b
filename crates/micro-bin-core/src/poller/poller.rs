//! Background recycle bin poller.
//!
//! Probes the bin once per tick and notifies a [`StateListener`] only when the
//! observed state differs from the previous tick. The stop flag is checked at
//! the top of each iteration, so an exit request can wait out one full sleep.

use crate::{BinProbe, BinState, PollerPhase, PollerRuntime};

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

/// Receives bin state transitions from the poller.
pub trait StateListener: Send {
    /// Called once per observed transition.
    fn state_changed(&mut self, state: BinState);
}

impl<F> StateListener for F
where
    F: FnMut(BinState) + Send,
{
    fn state_changed(&mut self, state: BinState) {
        self(state)
    }
}

/// Re-probes the recycle bin at the runtime's interval.
pub struct Poller<P, L> {
    probe: Arc<P>,
    runtime: Arc<PollerRuntime>,
    listener: L,
}

impl<P, L> Poller<P, L>
where
    P: BinProbe,
    L: StateListener,
{
    /// Create a poller. Call [`PollerRuntime::start`] before [`Poller::run`].
    pub fn new(probe: Arc<P>, runtime: Arc<PollerRuntime>, listener: L) -> Self {
        Self {
            probe,
            runtime,
            listener,
        }
    }

    /// Shared runtime fields.
    pub fn runtime(&self) -> &Arc<PollerRuntime> {
        &self.runtime
    }

    /// Probe once and notify the listener if the state changed.
    ///
    /// Returns the new state on a transition, `None` otherwise. A failed
    /// probe counts as [`BinState::Empty`].
    pub fn tick(&mut self) -> Option<BinState> {
        let reading = self.probe.read();
        let current = reading.state();
        let previous = self.runtime.last_observed();

        if current == previous {
            return None;
        }

        debug!(
            ?previous,
            ?current,
            fallback = reading.is_fallback(),
            "Recycle bin state changed"
        );
        self.listener.state_changed(current);
        self.runtime.observe(current);

        Some(current)
    }

    /// Run the polling loop until [`PollerRuntime::request_stop`] is seen.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        if self.runtime.phase() != PollerPhase::Running {
            warn!(phase = ?self.runtime.phase(), "Poller not started, not running loop");
            return;
        }

        info!(
            interval_secs = self.runtime.interval().as_secs(),
            "Poller started"
        );

        while self.runtime.is_running() {
            self.tick();
            tokio::time::sleep(self.runtime.interval().as_duration()).await;
        }

        self.runtime.finish();
        info!("Poller stopped");
    }
}
