//! Load-balancing selection.

use lift_core::{Call, CarId};

use crate::{DispatchPolicy, FleetSnapshot};

/// Pick the in-service car with the fewest committed stops, breaking ties
/// by distance and then by lowest `CarId`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastLoaded;

impl DispatchPolicy for LeastLoaded {
    fn select(&self, fleet: &FleetSnapshot<'_>, call: &Call) -> Option<CarId> {
        fleet
            .in_service()
            .min_by_key(|c| (c.stops().len(), c.distance_to(call.floor), c.id()))
            .map(|c| c.id())
    }

    fn name(&self) -> &str {
        "least-loaded"
    }
}
