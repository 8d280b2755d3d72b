//! Observer trait for progress reporting and data collection.

use lift_core::{LiftError, Tick};
use lift_script::Event;

use crate::{FleetStatus, TickReport};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: wait-time tally
///
/// ```rust,ignore
/// struct WaitTally { total: u64, served: u64 }
///
/// impl SimObserver for WaitTally {
///     fn on_tick_end(&mut self, report: &TickReport) {
///         for r in &report.resolved {
///             self.total += r.waited();
///             self.served += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before events are applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a scripted event is rejected (bad floor or car id).
    /// Rejection is not fatal; the run continues.
    fn on_rejected(&mut self, _tick: Tick, _event: &Event, _error: &LiftError) {}

    /// Called after the dispatcher has stepped.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called every `snapshot_interval` ticks with the fleet status.
    fn on_snapshot(&mut self, _status: &FleetStatus) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
