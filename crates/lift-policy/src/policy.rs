//! The `DispatchPolicy` trait, the extension point for car selection.

use lift_core::{Call, CarId};

use crate::FleetSnapshot;

/// Pluggable hall-call assignment.
///
/// `select` must be deterministic: the same snapshot and call always yield
/// the same car.  Returning `None` means no car can take the call right now;
/// the dispatcher queues it and retries every tick.
///
/// Implementations must be `Send + Sync` so a dispatcher can be shared
/// behind a lock across event-source threads.
pub trait DispatchPolicy: Send + Sync + 'static {
    /// Choose the car that should serve `call`.
    fn select(&self, fleet: &FleetSnapshot<'_>, call: &Call) -> Option<CarId>;

    /// Short label for logs and reports.
    fn name(&self) -> &str {
        "custom"
    }
}

/// Adapter that turns a closure into a [`DispatchPolicy`].
pub struct FnPolicy<F> {
    f: F,
}

/// Wrap a plain function or closure as a policy.
///
/// ```rust,ignore
/// let always_first = policy_fn(|_fleet: &FleetSnapshot<'_>, _call: &Call| Some(CarId(0)));
/// ```
pub fn policy_fn<F>(f: F) -> FnPolicy<F>
where
    F: Fn(&FleetSnapshot<'_>, &Call) -> Option<CarId> + Send + Sync + 'static,
{
    FnPolicy { f }
}

impl<F> DispatchPolicy for FnPolicy<F>
where
    F: Fn(&FleetSnapshot<'_>, &Call) -> Option<CarId> + Send + Sync + 'static,
{
    fn select(&self, fleet: &FleetSnapshot<'_>, call: &Call) -> Option<CarId> {
        (self.f)(fleet, call)
    }
}
