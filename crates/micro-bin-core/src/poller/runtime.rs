use crate::{BinState, PollInterval};

use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};

/// Lifecycle of the background poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerPhase {
    /// Created, loop not started.
    Idle,
    /// Loop active.
    Running,
    /// Loop exited. Terminal.
    Stopped,
}

impl PollerPhase {
    fn to_bits(self) -> u8 {
        match self {
            PollerPhase::Idle => 0,
            PollerPhase::Running => 1,
            PollerPhase::Stopped => 2,
        }
    }

    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => PollerPhase::Idle,
            1 => PollerPhase::Running,
            _ => PollerPhase::Stopped,
        }
    }
}

/// Mutable state shared between the tray controller and the poller thread.
///
/// The controller writes the interval and the stop flag from the UI thread;
/// the poller writes the phase from its own thread. The last observed state
/// is written by poller ticks and by controller refreshes, last writer wins.
/// Every field is a single atomic word, so no lock is taken.
#[derive(Debug)]
pub struct PollerRuntime {
    interval_bits: AtomicU64,
    running: AtomicBool,
    phase: AtomicU8,
    last_observed: AtomicU8,
}

impl PollerRuntime {
    /// Idle runtime sleeping `interval` between checks.
    pub fn new(interval: PollInterval) -> Self {
        Self {
            interval_bits: AtomicU64::new(interval.as_secs().to_bits()),
            running: AtomicBool::new(false),
            phase: AtomicU8::new(PollerPhase::Idle.to_bits()),
            last_observed: AtomicU8::new(BinState::Empty.to_bits()),
        }
    }

    /// Interval the next sleep will use.
    pub fn interval(&self) -> PollInterval {
        PollInterval::from_secs(f64::from_bits(self.interval_bits.load(Ordering::Relaxed)))
    }

    /// Change the interval. Takes effect on the next sleep.
    pub fn set_interval(&self, interval: PollInterval) {
        self.interval_bits
            .store(interval.as_secs().to_bits(), Ordering::Relaxed);
    }

    /// Seed the last observed state and move from Idle to Running.
    ///
    /// Returns `false` when the poller was already started or stopped.
    pub fn start(&self, initial: BinState) -> bool {
        let started = self
            .phase
            .compare_exchange(
                PollerPhase::Idle.to_bits(),
                PollerPhase::Running.to_bits(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok();

        if started {
            self.last_observed
                .store(initial.to_bits(), Ordering::Relaxed);
            self.running.store(true, Ordering::Release);
        }

        started
    }

    /// Ask the loop to exit. Seen at the top of the next iteration.
    pub fn request_stop(&self) {
        self.running.store(false, Ordering::Release);
        let _ = self.phase.compare_exchange(
            PollerPhase::Idle.to_bits(),
            PollerPhase::Stopped.to_bits(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Whether the loop should keep going.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PollerPhase {
        PollerPhase::from_bits(self.phase.load(Ordering::Acquire))
    }

    /// State seen by the latest tick (or the startup seed).
    pub fn last_observed(&self) -> BinState {
        BinState::from_bits(self.last_observed.load(Ordering::Relaxed))
    }

    pub(crate) fn observe(&self, state: BinState) {
        self.last_observed.store(state.to_bits(), Ordering::Relaxed);
    }

    pub(crate) fn finish(&self) {
        self.running.store(false, Ordering::Release);
        self.phase
            .store(PollerPhase::Stopped.to_bits(), Ordering::Release);
    }
}
