//! The `Sim` driver: feeds scripted events to a dispatcher and ticks it.

use lift_core::{LiftResult, Tick};
use lift_policy::DispatchPolicy;
use lift_script::{Event, EventQueue};
use tracing::info;

use crate::{Dispatcher, SimObserver, Submission};

/// Clock-and-event-source driver around a [`Dispatcher`].
///
/// Each step:
///
/// 1. `on_tick_start(now)`.
/// 2. Apply every scripted event due at or before `now`, in script order.
///    Rejected events go to `on_rejected`; the run continues.
/// 3. `Dispatcher::tick()` → `on_tick_end(&report)`.
/// 4. Every `snapshot_interval` ticks, `on_snapshot(&status)`.
pub struct Sim<P: DispatchPolicy> {
    pub dispatcher: Dispatcher<P>,

    /// Events not yet applied, keyed by tick.
    pub script: EventQueue,

    /// Emit a status snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval: u64,
}

impl<P: DispatchPolicy> Sim<P> {
    pub fn new(dispatcher: Dispatcher<P>, script: EventQueue) -> Self {
        Self { dispatcher, script, snapshot_interval: 0 }
    }

    pub fn with_snapshot_interval(mut self, every: u64) -> Self {
        self.snapshot_interval = every;
        self
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        info!(ticks = n, policy = self.dispatcher.policy().name(), "simulation started");
        for _ in 0..n {
            self.step(observer);
        }
        let end = self.dispatcher.now();
        observer.on_sim_end(end);
        info!(final_tick = %end, "simulation finished");
    }

    /// Run until the script is exhausted and the fleet is quiescent, or
    /// until `max_ticks` have elapsed.  Returns the number of ticks run.
    pub fn run_until_idle<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> u64 {
        info!(max_ticks, policy = self.dispatcher.policy().name(), "simulation started");
        let mut ran = 0;
        while ran < max_ticks && !(self.script.is_empty() && self.dispatcher.is_quiescent()) {
            self.step(observer);
            ran += 1;
        }
        let end = self.dispatcher.now();
        observer.on_sim_end(end);
        info!(ticks = ran, final_tick = %end, "simulation finished");
        ran
    }

    /// One driver step.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.dispatcher.now();
        observer.on_tick_start(now);

        for event in self.script.drain_due(now) {
            if let Err(e) = self.apply(&event) {
                observer.on_rejected(now, &event, &e);
            }
        }

        let report = self.dispatcher.tick();
        observer.on_tick_end(&report);

        if self.snapshot_interval > 0 && report.tick.0 % self.snapshot_interval == 0 {
            observer.on_snapshot(&self.dispatcher.status());
        }
    }

    /// Apply one external event to the dispatcher.
    pub fn apply(&mut self, event: &Event) -> LiftResult<Option<Submission>> {
        let d = &mut self.dispatcher;
        match *event {
            Event::HallCall { floor, direction }   => d.submit_hall_call(floor, direction).map(Some),
            Event::CarCall { car, floor }          => d.submit_car_call(car, floor).map(Some),
            Event::CancelHall { floor, direction } => d.cancel_hall_call(floor, direction).map(|_| None),
            Event::OutOfService(car)               => d.set_out_of_service(car).map(|_| None),
            Event::Restore(car)                    => d.restore(car).map(|_| None),
        }
    }

    /// The current tick.
    pub fn now(&self) -> Tick {
        self.dispatcher.now()
    }
}
