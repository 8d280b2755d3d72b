//! Values returned by dispatcher operations.

use lift_car::Arrival;
use lift_core::{Call, CarId, Tick};

/// What happened to a submitted call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Committed to this car.
    Assigned(CarId),
    /// Identical call already outstanding; absorbed.
    Merged,
    /// No eligible car (whole fleet out of service); retried every tick.
    Queued,
    /// Car call to an out-of-service car; dropped without effect.
    Ignored,
}

/// An outstanding call that was served.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub call:      Call,
    pub car:       CarId,
    pub submitted: Tick,
    pub resolved:  Tick,
}

impl Resolution {
    /// Ticks between submission and service.
    #[inline]
    pub fn waited(&self) -> u64 {
        self.resolved.since(self.submitted)
    }
}

/// Everything one `Dispatcher::tick` did, in car-id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick reached at the end of this step.
    pub tick:     Tick,
    pub arrivals: Vec<Arrival>,
    pub resolved: Vec<Resolution>,
    /// Previously unassigned hall calls placed on a car this tick.
    pub assigned: Vec<(Call, CarId)>,
}

impl TickReport {
    /// `true` if nothing arrived, resolved, or was assigned.
    pub fn is_quiet(&self) -> bool {
        self.arrivals.is_empty() && self.resolved.is_empty() && self.assigned.is_empty()
    }
}
