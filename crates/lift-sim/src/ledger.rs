//! Call ownership bookkeeping.
//!
//! Every committed stop on every car is backed by at least one outstanding
//! call recorded here, and every recorded call is backed by a stop.  A hall
//! call is owned by at most one car; the same floor may still be owned twice
//! when the two calls ask for opposite directions.

use std::collections::BTreeMap;

use lift_core::{Call, CarId, Floor, HallDirection, Tick};

use crate::Resolution;

#[cfg(feature = "fx-hash")]
type OwnerMap = rustc_hash::FxHashMap<Call, CarId>;
#[cfg(not(feature = "fx-hash"))]
type OwnerMap = std::collections::HashMap<Call, CarId>;

/// Per-car pending calls, the hall-call owner index, and the unassigned set.
///
/// Each entry remembers the tick it was submitted so resolutions can report
/// waiting time.
#[derive(Debug, Default, Clone)]
pub struct CallLedger {
    /// Pending calls per car, indexed by `CarId`.  Ordered by floor so all
    /// calls at one floor are a contiguous range.
    per_car:    Vec<BTreeMap<Call, Tick>>,
    hall_owner: OwnerMap,
    unassigned: BTreeMap<Call, Tick>,
}

impl CallLedger {
    pub fn new(num_cars: usize) -> Self {
        Self {
            per_car:    vec![BTreeMap::new(); num_cars],
            hall_owner: OwnerMap::default(),
            unassigned: BTreeMap::new(),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The car currently owning a hall call.
    pub fn owner(&self, call: &Call) -> Option<CarId> {
        self.hall_owner.get(call).copied()
    }

    /// `true` if `car` already holds `call`.
    pub fn owns(&self, car: CarId, call: &Call) -> bool {
        self.per_car
            .get(car.index())
            .is_some_and(|calls| calls.contains_key(call))
    }

    /// `true` if an identical hall call is owned or waiting for a car.
    pub fn is_outstanding(&self, call: &Call) -> bool {
        self.hall_owner.contains_key(call) || self.unassigned.contains_key(call)
    }

    /// `true` if `car` has any pending call at `floor`.
    pub fn covers(&self, car: CarId, floor: Floor) -> bool {
        self.per_car
            .get(car.index())
            .is_some_and(|calls| calls.range(floor_range(floor)).next().is_some())
    }

    /// Pending calls of `car`, ordered by floor.
    pub fn pending(&self, car: CarId) -> impl Iterator<Item = &Call> + '_ {
        self.per_car.get(car.index()).into_iter().flat_map(|calls| calls.keys())
    }

    /// Hall calls waiting for a car, ordered by floor then direction.
    pub fn unassigned(&self) -> impl Iterator<Item = (Call, Tick)> + '_ {
        self.unassigned.iter().map(|(c, t)| (*c, *t))
    }

    pub fn unassigned_len(&self) -> usize {
        self.unassigned.len()
    }

    /// Total outstanding calls, owned and unassigned.
    pub fn len(&self) -> usize {
        self.per_car.iter().map(BTreeMap::len).sum::<usize>() + self.unassigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Record `call` as owned by `car`.  Returns `false` if `car` already
    /// held it (the original submission tick is kept).
    pub fn record(&mut self, car: CarId, call: Call, submitted: Tick) -> bool {
        let Some(calls) = self.per_car.get_mut(car.index()) else {
            return false;
        };
        if calls.contains_key(&call) {
            return false;
        }
        calls.insert(call, submitted);
        if call.is_hall() {
            self.hall_owner.insert(call, car);
        }
        true
    }

    /// Park a hall call until some car can take it.
    pub fn queue(&mut self, call: Call, submitted: Tick) {
        self.unassigned.entry(call).or_insert(submitted);
    }

    /// Remove a call from the unassigned set, returning its submission tick.
    pub fn take_unassigned(&mut self, call: &Call) -> Option<Tick> {
        self.unassigned.remove(call)
    }

    /// Remove an owned hall call, returning the car that held it.
    pub fn release(&mut self, call: &Call) -> Option<CarId> {
        let car = self.hall_owner.remove(call)?;
        if let Some(calls) = self.per_car.get_mut(car.index()) {
            calls.remove(call);
        }
        Some(car)
    }

    /// Remove every call held by `car`, in floor order.
    pub fn release_car(&mut self, car: CarId) -> Vec<(Call, Tick)> {
        let Some(calls) = self.per_car.get_mut(car.index()) else {
            return vec![];
        };
        let released: Vec<(Call, Tick)> = std::mem::take(calls).into_iter().collect();
        for (call, _) in &released {
            if call.is_hall() {
                self.hall_owner.remove(call);
            }
        }
        released
    }

    /// `car` arrived at `floor` at tick `now`: resolve and remove every call
    /// it held there.
    pub fn resolve(&mut self, car: CarId, floor: Floor, now: Tick) -> Vec<Resolution> {
        let Some(calls) = self.per_car.get_mut(car.index()) else {
            return vec![];
        };
        let served: Vec<(Call, Tick)> = calls
            .range(floor_range(floor))
            .map(|(c, t)| (*c, *t))
            .collect();

        served
            .into_iter()
            .map(|(call, submitted)| {
                calls.remove(&call);
                if call.is_hall() {
                    self.hall_owner.remove(&call);
                }
                Resolution { call, car, submitted, resolved: now }
            })
            .collect()
    }
}

/// All calls at one floor: `Call` orders by floor, then hall-up, hall-down,
/// car.
fn floor_range(floor: Floor) -> std::ops::RangeInclusive<Call> {
    Call::hall(floor, HallDirection::Up)..=Call::car(floor)
}
