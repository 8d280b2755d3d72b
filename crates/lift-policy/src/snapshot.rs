//! Read-only fleet state passed to every dispatch policy.

use lift_car::Car;
use lift_core::{CarId, Floor, Tick};

/// A read-only view of the fleet at the moment a hall call is dispatched.
///
/// Built by the dispatcher for each selection and dropped before any car is
/// mutated.  The dispatcher never hands out `&mut Car` while a snapshot is
/// live.
#[derive(Clone, Copy)]
pub struct FleetSnapshot<'a> {
    /// Tick at which the selection happens.
    pub tick: Tick,

    /// Number of floors in the building.
    pub num_floors: u32,

    /// Every car, indexed by `CarId`.
    pub cars: &'a [Car],
}

impl<'a> FleetSnapshot<'a> {
    #[inline]
    pub fn new(tick: Tick, num_floors: u32, cars: &'a [Car]) -> Self {
        Self { tick, num_floors, cars }
    }

    #[inline]
    pub fn car(&self, id: CarId) -> Option<&'a Car> {
        self.cars.get(id.index())
    }

    /// Cars that may take new commits.
    pub fn in_service(self) -> impl Iterator<Item = &'a Car> {
        self.cars.iter().filter(|c| c.in_service())
    }

    /// `true` if no car can take new commits.
    pub fn all_out_of_service(&self) -> bool {
        self.in_service().next().is_none()
    }
}

/// The candidate closest to `floor`; ties go to the lowest `CarId`.
pub fn closest<'a, I>(candidates: I, floor: Floor) -> Option<CarId>
where
    I: IntoIterator<Item = &'a Car>,
{
    candidates
        .into_iter()
        .min_by_key(|c| (c.distance_to(floor), c.id()))
        .map(Car::id)
}
