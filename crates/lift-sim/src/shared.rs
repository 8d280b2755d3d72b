//! A dispatcher shared between event-source threads and the tick driver.

use std::sync::{Arc, Mutex, MutexGuard};

use lift_core::{CarId, Floor, HallDirection, LiftResult};
use lift_policy::DispatchPolicy;

use crate::{Dispatcher, FleetStatus, Submission, TickReport};

/// Cloneable handle serialising every operation through one mutex.
///
/// Button presses may arrive from any thread; each submission, cancellation,
/// and tick takes the same lock, so they never interleave.  No operation
/// holds the lock for longer than one tick's work.
pub struct SharedDispatcher<P: DispatchPolicy> {
    inner: Arc<Mutex<Dispatcher<P>>>,
}

impl<P: DispatchPolicy> Clone for SharedDispatcher<P> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<P: DispatchPolicy> SharedDispatcher<P> {
    pub fn new(dispatcher: Dispatcher<P>) -> Self {
        Self { inner: Arc::new(Mutex::new(dispatcher)) }
    }

    // A poisoned lock means an operation panicked part-way (a failed invariant
    // or a panicking policy) and the fleet may be inconsistent.  Every handle
    // fails rather than dispatch from that state.
    fn lock(&self) -> MutexGuard<'_, Dispatcher<P>> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("dispatcher lock poisoned by a panic in another handle"),
        }
    }

    pub fn submit_hall_call(&self, floor: Floor, direction: HallDirection) -> LiftResult<Submission> {
        self.lock().submit_hall_call(floor, direction)
    }

    pub fn submit_car_call(&self, car: CarId, floor: Floor) -> LiftResult<Submission> {
        self.lock().submit_car_call(car, floor)
    }

    pub fn cancel_hall_call(&self, floor: Floor, direction: HallDirection) -> LiftResult<bool> {
        self.lock().cancel_hall_call(floor, direction)
    }

    pub fn set_out_of_service(&self, car: CarId) -> LiftResult<()> {
        self.lock().set_out_of_service(car)
    }

    pub fn restore(&self, car: CarId) -> LiftResult<()> {
        self.lock().restore(car)
    }

    pub fn tick(&self) -> TickReport {
        self.lock().tick()
    }

    pub fn status(&self) -> FleetStatus {
        self.lock().status()
    }

    /// Run `f` with exclusive access to the dispatcher.
    pub fn with<R>(&self, f: impl FnOnce(&mut Dispatcher<P>) -> R) -> R {
        f(&mut self.lock())
    }
}
