#[allow(clippy::module_inception)]
mod poller;
mod runtime;

pub use {
    poller::{Poller, StateListener},
    runtime::{PollerPhase, PollerRuntime},
};
