//! The `Car` state machine.

use lift_core::{CarId, Direction, Floor, OperationalState};

use crate::StopSet;

/// A car reached one of its committed stops.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrival {
    pub car:   CarId,
    pub floor: Floor,
}

/// One car: position, travel direction, operating state, and committed stops.
///
/// All mutators take `&mut self`; dispatch policies only ever see `&Car`
/// through a fleet snapshot and therefore cannot change car state.
///
/// Invariants, checked with `debug_assert!` after every mutation:
/// - `0 <= current_floor < num_floors`
/// - every committed stop is a valid floor
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    id:            CarId,
    num_floors:    u32,
    current_floor: Floor,
    direction:     Direction,
    state:         OperationalState,
    stops:         StopSet,
}

impl Car {
    /// A new idle car on the ground floor.
    pub fn new(id: CarId, num_floors: u32) -> Self {
        Self::at_floor(id, num_floors, 0)
    }

    /// A new idle car parked at `floor`.
    pub fn at_floor(id: CarId, num_floors: u32, floor: Floor) -> Self {
        let car = Self {
            id,
            num_floors,
            current_floor: floor,
            direction:     Direction::Idle,
            state:         OperationalState::Idle,
            stops:         StopSet::new(),
        };
        car.debug_check();
        car
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn state(&self) -> OperationalState {
        self.state
    }

    #[inline]
    pub fn stops(&self) -> &StopSet {
        &self.stops
    }

    /// `true` if the car can take new commits.
    #[inline]
    pub fn in_service(&self) -> bool {
        self.state.in_service()
    }

    /// `true` if the car is in service with nothing to do.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.state == OperationalState::Idle
    }

    /// Absolute floor distance from this car to `floor`.
    #[inline]
    pub fn distance_to(&self, floor: Floor) -> u32 {
        self.current_floor.abs_diff(floor)
    }

    /// Committed stops in the order this car will visit them.
    pub fn service_order(&self) -> Vec<Floor> {
        self.stops.service_order(self.current_floor, self.direction)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add `floor` to the committed stops.
    ///
    /// An idle car takes its direction from the new stop (`Idle` if the stop
    /// is its own floor, served in place on the next tick) and starts
    /// `Moving`.  Returns `false` and changes nothing when the car is out of
    /// service.
    pub fn commit(&mut self, floor: Floor) -> bool {
        if !self.in_service() {
            return false;
        }
        self.stops.insert(floor);
        if self.direction == Direction::Idle {
            self.direction = Direction::between(self.current_floor, floor);
        }
        self.state = OperationalState::Moving;
        self.debug_check();
        true
    }

    /// Drop a committed stop (e.g. its call was cancelled).  A car left with
    /// no stops settles immediately.
    pub fn withdraw(&mut self, floor: Floor) -> bool {
        let removed = self.stops.remove(floor);
        if removed && self.stops.is_empty() {
            self.settle();
        }
        removed
    }

    /// Advance one tick: move at most one floor toward the next stop.
    ///
    /// Returns the arrival if the car reached a committed stop this tick.
    pub fn advance(&mut self) -> Option<Arrival> {
        let Some((target, heading)) = self.stops.next_target(self.current_floor, self.direction)
        else {
            self.settle();
            return None;
        };

        self.direction = heading;
        if self.in_service() {
            self.state = OperationalState::Moving;
        }
        self.current_floor += Direction::between(self.current_floor, target).step();
        self.debug_check();

        if self.current_floor != target {
            return None;
        }

        self.stops.remove(target);
        if self.stops.is_empty() {
            self.settle();
        }
        Some(Arrival { car: self.id, floor: target })
    }

    /// Withdraw the car from dispatch.
    ///
    /// With `clear`, all committed stops are dropped and returned; otherwise
    /// the car keeps serving them but accepts no new commits.
    pub fn take_out_of_service(&mut self, clear: bool) -> Vec<Floor> {
        self.state = OperationalState::OutOfService;
        let cleared = if clear { self.stops.drain() } else { vec![] };
        if self.stops.is_empty() {
            self.direction = Direction::Idle;
        }
        cleared
    }

    /// Return the car to service: `Moving` if it still has stops, `Idle`
    /// otherwise.  No-op for a car already in service.
    pub fn restore(&mut self) {
        if self.in_service() {
            return;
        }
        self.state = if self.stops.is_empty() {
            OperationalState::Idle
        } else {
            OperationalState::Moving
        };
    }

    fn settle(&mut self) {
        self.direction = Direction::Idle;
        if self.in_service() {
            self.state = OperationalState::Idle;
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(
            self.current_floor >= 0 && (self.current_floor as i64) < self.num_floors as i64,
            "{} left the shaft at floor {}",
            self.id,
            self.current_floor,
        );
        debug_assert!(
            self.stops.iter().all(|f| f >= 0 && (f as i64) < self.num_floors as i64),
            "{} holds an out-of-range stop",
            self.id,
        );
    }
}
