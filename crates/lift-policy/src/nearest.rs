//! Nearest in-service car, ignoring direction.

use lift_core::{Call, CarId};

use crate::snapshot::closest;
use crate::{DispatchPolicy, FleetSnapshot};

/// Pick the in-service car with the smallest floor distance to the call.
///
/// Direction is ignored: a car sweeping away from the caller still wins if
/// it is closest, and serves the call after finishing its sweep.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestCar;

impl DispatchPolicy for NearestCar {
    fn select(&self, fleet: &FleetSnapshot<'_>, call: &Call) -> Option<CarId> {
        closest(fleet.in_service(), call.floor)
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
