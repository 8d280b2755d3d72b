//! Direction-preferring selection: nearest eligible car, then nearest overall.

use lift_car::Car;
use lift_core::{Call, CarId, Direction, Floor};

use crate::snapshot::closest;
use crate::{DispatchPolicy, FleetSnapshot};

/// `true` if `car` can pick up `call` without breaking its current sweep.
///
/// A car is eligible when it is in service and either
/// - has no direction (idle), or
/// - is heading the way the caller wants to go and has not yet passed the
///   floor, i.e. the floor lies between the car and the end of its sweep.
///
/// Car calls carry no direction, so only idle cars are eligible for them.
pub fn is_eligible(car: &Car, call: &Call) -> bool {
    if !car.in_service() {
        return false;
    }
    match car.direction() {
        Direction::Idle => true,
        heading => match call.requested_direction() {
            Some(wanted) if wanted.as_direction() == heading => {
                not_passed(car, heading, call.floor)
            }
            _ => false,
        },
    }
}

fn not_passed(car: &Car, heading: Direction, floor: Floor) -> bool {
    let here = car.current_floor();
    let Some(end) = car.stops().farthest_ahead(here, heading) else {
        return false;
    };
    match heading {
        Direction::Up   => here <= floor && floor <= end,
        Direction::Down => end <= floor && floor <= here,
        Direction::Idle => true,
    }
}

/// Nearest eligible car (see [`is_eligible`]); if none, the nearest
/// in-service car regardless of direction.  Ties go to the lowest `CarId`.
///
/// Returns `None` only when the whole fleet is out of service.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestEligible;

impl DispatchPolicy for NearestEligible {
    fn select(&self, fleet: &FleetSnapshot<'_>, call: &Call) -> Option<CarId> {
        closest(fleet.cars.iter().filter(|c| is_eligible(c, call)), call.floor)
            .or_else(|| closest(fleet.in_service(), call.floor))
    }

    fn name(&self) -> &str {
        "nearest-eligible"
    }
}
