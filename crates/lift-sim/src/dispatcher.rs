//! The `Dispatcher`: fleet owner, call router, and tick engine.

use lift_car::{Arrival, Car};
use lift_core::{
    BuildingConfig, Call, CarId, Direction, Floor, HallDirection, LiftError, LiftResult,
    OutOfServiceMode, SimClock, Tick,
};
use lift_policy::{DispatchPolicy, FleetSnapshot};
use tracing::{debug, trace, warn};

use crate::{CallLedger, FleetStatus, Submission, TickReport};

/// Owns the fleet and every piece of shared bookkeeping.
///
/// Only the dispatcher mutates cars.  Policies see a [`FleetSnapshot`] and
/// status consumers get an owned [`FleetStatus`].  There is no global
/// instance: each simulation owns its own `Dispatcher`, so several can run
/// side by side in one process.
///
/// Create with [`Dispatcher::new`] or [`DispatcherBuilder`][crate::DispatcherBuilder].
pub struct Dispatcher<P: DispatchPolicy> {
    pub(crate) config: BuildingConfig,
    pub(crate) clock:  SimClock,
    pub(crate) cars:   Vec<Car>,
    pub(crate) ledger: CallLedger,
    pub(crate) policy: P,
}

impl<P: DispatchPolicy> Dispatcher<P> {
    /// A fleet of `config.num_cars` idle cars on the ground floor.
    pub fn new(config: BuildingConfig, policy: P) -> crate::SimResult<Self> {
        crate::DispatcherBuilder::new(config, policy).build()
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The current tick.
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&Car> {
        self.cars.get(id.index())
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn ledger(&self) -> &CallLedger {
        &self.ledger
    }

    /// Read-only fleet view as handed to the policy.
    pub fn snapshot(&self) -> FleetSnapshot<'_> {
        FleetSnapshot::new(self.clock.current_tick, self.config.num_floors, &self.cars)
    }

    /// Hall calls not yet committed to any car.
    pub fn unassigned_hall_calls(&self) -> Vec<Call> {
        self.ledger.unassigned().map(|(call, _)| call).collect()
    }

    /// Owned snapshot of every car plus the unassigned calls.
    pub fn status(&self) -> FleetStatus {
        FleetStatus {
            tick:       self.clock.current_tick,
            cars:       self.cars.iter().map(Into::into).collect(),
            unassigned: self.unassigned_hall_calls(),
        }
    }

    /// `true` when every car is idle or parked out of service and no call is
    /// outstanding.
    pub fn is_quiescent(&self) -> bool {
        self.ledger.is_empty() && self.cars.iter().all(|c| c.stops().is_empty())
    }

    // ── Submissions ───────────────────────────────────────────────────────

    /// A landing button was pressed.
    ///
    /// Identical outstanding calls are merged.  Otherwise the policy picks a
    /// car and the floor is committed to it; if no car is in service the
    /// call is queued and retried every tick.
    pub fn submit_hall_call(&mut self, floor: Floor, direction: HallDirection) -> LiftResult<Submission> {
        self.config.check_floor(floor)?;
        let call = Call::hall(floor, direction);

        if self.ledger.is_outstanding(&call) {
            trace!(%call, "duplicate hall call merged");
            return Ok(Submission::Merged);
        }

        let now = self.clock.current_tick;
        match self.try_assign(call, now) {
            Some(car) => {
                debug!(%call, %car, policy = self.policy.name(), "hall call assigned");
                Ok(Submission::Assigned(car))
            }
            None => {
                self.ledger.queue(call, now);
                debug!(%call, "no eligible car; hall call queued");
                Ok(Submission::Queued)
            }
        }
    }

    /// A floor button was pressed inside `car`.  Bypasses the policy.
    ///
    /// A car that is out of service silently ignores the request.
    pub fn submit_car_call(&mut self, car: CarId, floor: Floor) -> LiftResult<Submission> {
        self.check_car(car)?;
        self.config.check_floor(floor)?;
        let call = Call::car(floor);

        if !self.cars[car.index()].in_service() {
            debug!(%car, floor, "car call to out-of-service car ignored");
            return Ok(Submission::Ignored);
        }
        if self.ledger.owns(car, &call) {
            return Ok(Submission::Merged);
        }

        self.cars[car.index()].commit(floor);
        self.ledger.record(car, call, self.clock.current_tick);
        trace!(%car, floor, "car call committed");
        Ok(Submission::Assigned(car))
    }

    /// Withdraw a hall call.  Returns `false` if no such call was outstanding.
    ///
    /// The owning car drops the stop only if none of its other calls needs
    /// that floor.
    pub fn cancel_hall_call(&mut self, floor: Floor, direction: HallDirection) -> LiftResult<bool> {
        self.config.check_floor(floor)?;
        let call = Call::hall(floor, direction);

        if self.ledger.take_unassigned(&call).is_some() {
            debug!(%call, "unassigned hall call cancelled");
            return Ok(true);
        }
        let Some(owner) = self.ledger.release(&call) else {
            return Ok(false);
        };
        if !self.ledger.covers(owner, floor) {
            self.cars[owner.index()].withdraw(floor);
        }
        debug!(%call, car = %owner, "hall call cancelled");
        Ok(true)
    }

    /// Withdraw `car` from dispatch.
    ///
    /// With [`OutOfServiceMode::Clear`] its stops are dropped, its hall calls
    /// return to the unassigned set, and its car calls are discarded.  With
    /// [`OutOfServiceMode::Honor`] it finishes the stops it already has.
    pub fn set_out_of_service(&mut self, car: CarId) -> LiftResult<()> {
        self.check_car(car)?;
        if !self.cars[car.index()].in_service() {
            return Ok(());
        }

        let clear = self.config.out_of_service == OutOfServiceMode::Clear;
        self.cars[car.index()].take_out_of_service(clear);
        if clear {
            for (call, submitted) in self.ledger.release_car(car) {
                if call.is_hall() {
                    self.ledger.queue(call, submitted);
                } else {
                    debug!(%car, %call, "car call dropped with out-of-service car");
                }
            }
        }
        debug!(%car, mode = ?self.config.out_of_service, "car out of service");
        Ok(())
    }

    /// Return `car` to service.  Queued hall calls are retried on the next tick.
    pub fn restore(&mut self, car: CarId) -> LiftResult<()> {
        self.check_car(car)?;
        self.cars[car.index()].restore();
        debug!(%car, "car restored to service");
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the simulation by one step.
    ///
    /// Runs in time proportional to fleet size plus outstanding calls.  On a
    /// fully idle fleet with nothing queued it changes nothing but the clock.
    pub fn tick(&mut self) -> TickReport {
        // ── Phase 1: retry unassigned hall calls ──────────────────────────
        //
        // Done before cars move so a call placed on a car parked at its floor
        // is served in this tick's advance.
        let assigned = self.retry_unassigned();

        // ── Phase 2: advance every car ────────────────────────────────────
        self.clock.advance();
        let now = self.clock.current_tick;
        let arrivals = self.advance_cars();

        // ── Phase 3: reconcile arrivals (sequential, ascending CarId) ─────
        let mut resolved = Vec::new();
        for arrival in &arrivals {
            trace!(car = %arrival.car, floor = arrival.floor, %now, "arrival");
            resolved.extend(self.ledger.resolve(arrival.car, arrival.floor, now));
        }

        self.debug_check_invariants();
        TickReport { tick: now, arrivals, resolved, assigned }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_car(&self, car: CarId) -> LiftResult<()> {
        if car.index() < self.cars.len() {
            Ok(())
        } else {
            Err(LiftError::UnknownCar(car))
        }
    }

    /// Ask the policy for a car and commit `call` to it.
    fn try_assign(&mut self, call: Call, submitted: Tick) -> Option<CarId> {
        let chosen = {
            let snapshot = self.snapshot();
            self.policy.select(&snapshot, &call)?
        };
        let Some(car) = self.cars.get_mut(chosen.index()) else {
            warn!(%call, car = %chosen, "policy chose a car outside the fleet");
            return None;
        };
        if !car.commit(call.floor) {
            warn!(%call, car = %chosen, "policy chose an out-of-service car");
            return None;
        }
        self.ledger.record(chosen, call, submitted);
        Some(chosen)
    }

    fn retry_unassigned(&mut self) -> Vec<(Call, CarId)> {
        if self.ledger.unassigned_len() == 0 {
            return vec![];
        }
        let waiting: Vec<(Call, Tick)> = self.ledger.unassigned().collect();
        let mut assigned = Vec::new();
        for (call, submitted) in waiting {
            self.ledger.take_unassigned(&call);
            match self.try_assign(call, submitted) {
                Some(car) => {
                    debug!(%call, %car, "queued hall call assigned");
                    assigned.push((call, car));
                }
                None => self.ledger.queue(call, submitted),
            }
        }
        assigned
    }

    /// Advance every car once.  Arrivals come back in ascending `CarId`
    /// order regardless of feature flags.
    fn advance_cars(&mut self) -> Vec<Arrival> {
        #[cfg(not(feature = "parallel"))]
        {
            self.cars.iter_mut().filter_map(Car::advance).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let stepped: Vec<Option<Arrival>> = self.cars.par_iter_mut().map(Car::advance).collect();
            stepped.into_iter().flatten().collect()
        }
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for car in &self.cars {
            for floor in car.stops().iter() {
                debug_assert!(
                    self.ledger.covers(car.id(), floor),
                    "{} holds stop {floor} with no outstanding call",
                    car.id(),
                );
            }
            for call in self.ledger.pending(car.id()) {
                debug_assert!(
                    car.stops().contains(call.floor),
                    "{} owns {call} but has no stop there",
                    car.id(),
                );
            }
            debug_assert!(
                car.direction() != Direction::Idle || car.stops().is_empty(),
                "{} is idle with committed stops",
                car.id(),
            );
        }
    }
}
