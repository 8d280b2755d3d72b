//! Unit tests for lift-policy.

use lift_car::Car;
use lift_core::{Call, CarId, Floor, HallDirection, Tick};

use crate::{
    DispatchPolicy, FleetSnapshot, LeastLoaded, NearestCar, NearestEligible, PolicyKind,
    is_eligible, policy_fn,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLOORS: u32 = 10;

/// Idle cars parked at the given floors, ids in order.
fn fleet_at(floors: &[Floor]) -> Vec<Car> {
    floors
        .iter()
        .enumerate()
        .map(|(i, &f)| Car::at_floor(CarId(i as u32), FLOORS, f))
        .collect()
}

fn snapshot(cars: &[Car]) -> FleetSnapshot<'_> {
    FleetSnapshot::new(Tick(0), FLOORS, cars)
}

fn up(floor: Floor) -> Call {
    Call::hall(floor, HallDirection::Up)
}

fn down(floor: Floor) -> Call {
    Call::hall(floor, HallDirection::Down)
}

// ── Eligibility ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod eligibility {
    use super::*;

    #[test]
    fn idle_car_is_eligible_for_anything() {
        let cars = fleet_at(&[4]);
        assert!(is_eligible(&cars[0], &up(9)));
        assert!(is_eligible(&cars[0], &down(0)));
        assert!(is_eligible(&cars[0], &Call::car(2)));
    }

    #[test]
    fn same_direction_not_yet_passed_is_eligible() {
        let mut cars = fleet_at(&[2]);
        cars[0].commit(8);
        assert!(is_eligible(&cars[0], &up(5)));
        assert!(is_eligible(&cars[0], &up(8)));
        assert!(!is_eligible(&cars[0], &up(1)), "already passed");
        assert!(!is_eligible(&cars[0], &up(9)), "beyond the end of the sweep");
        assert!(!is_eligible(&cars[0], &down(5)), "wrong direction");
    }

    #[test]
    fn downward_sweep() {
        let mut cars = fleet_at(&[8]);
        cars[0].commit(1);
        assert!(is_eligible(&cars[0], &down(4)));
        assert!(!is_eligible(&cars[0], &down(9)));
        assert!(!is_eligible(&cars[0], &up(4)));
    }

    #[test]
    fn out_of_service_never_eligible() {
        let mut cars = fleet_at(&[4]);
        cars[0].take_out_of_service(true);
        assert!(!is_eligible(&cars[0], &up(4)));
    }

    #[test]
    fn moving_car_never_eligible_for_car_calls() {
        let mut cars = fleet_at(&[0]);
        cars[0].commit(5);
        assert!(!is_eligible(&cars[0], &Call::car(3)));
    }
}

// ── NearestEligible ───────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest_eligible {
    use super::*;

    #[test]
    fn single_car_always_chosen() {
        let cars = fleet_at(&[0]);
        assert_eq!(NearestEligible.select(&snapshot(&cars), &up(5)), Some(CarId(0)));
    }

    #[test]
    fn closer_idle_car_wins() {
        let cars = fleet_at(&[0, 9]);
        assert_eq!(NearestEligible.select(&snapshot(&cars), &down(5)), Some(CarId(1)));
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        let cars = fleet_at(&[3, 7]);
        assert_eq!(NearestEligible.select(&snapshot(&cars), &up(5)), Some(CarId(0)));
    }

    #[test]
    fn prefers_eligible_over_closer_ineligible() {
        let mut cars = fleet_at(&[6, 0]);
        cars[0].commit(9); // car 0 at 6 heading up, has passed floor 5
        let choice = NearestEligible.select(&snapshot(&cars), &up(5));
        assert_eq!(choice, Some(CarId(1)));
    }

    #[test]
    fn falls_back_to_nearest_in_service() {
        let mut cars = fleet_at(&[6, 0]);
        cars[0].commit(9);
        cars[1].commit(2);
        // Neither car is eligible for a down call at 5; car 0 is closest.
        assert_eq!(NearestEligible.select(&snapshot(&cars), &down(5)), Some(CarId(0)));
    }

    #[test]
    fn whole_fleet_out_of_service_yields_none() {
        let mut cars = fleet_at(&[0, 5]);
        for c in &mut cars {
            c.take_out_of_service(true);
        }
        let snap = snapshot(&cars);
        assert!(snap.all_out_of_service());
        assert_eq!(NearestEligible.select(&snap, &up(3)), None);
    }

    #[test]
    fn deterministic_for_same_snapshot() {
        let mut cars = fleet_at(&[1, 4, 8]);
        cars[1].commit(0);
        let snap = snapshot(&cars);
        let first = NearestEligible.select(&snap, &up(6));
        for _ in 0..10 {
            assert_eq!(NearestEligible.select(&snap, &up(6)), first);
        }
    }
}

// ── Other strategies ──────────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use super::*;

    #[test]
    fn nearest_car_ignores_direction() {
        let mut cars = fleet_at(&[6, 0]);
        cars[0].commit(9);
        assert_eq!(NearestCar.select(&snapshot(&cars), &up(5)), Some(CarId(0)));
    }

    #[test]
    fn nearest_car_skips_out_of_service() {
        let mut cars = fleet_at(&[5, 0]);
        cars[0].take_out_of_service(true);
        assert_eq!(NearestCar.select(&snapshot(&cars), &up(5)), Some(CarId(1)));
    }

    #[test]
    fn least_loaded_prefers_empty_car() {
        let mut cars = fleet_at(&[5, 0]);
        cars[0].commit(8);
        assert_eq!(LeastLoaded.select(&snapshot(&cars), &up(5)), Some(CarId(1)));
    }

    #[test]
    fn policy_kind_delegates() {
        let cars = fleet_at(&[0, 9]);
        let snap = snapshot(&cars);
        for kind in PolicyKind::ALL {
            assert_eq!(kind.select(&snap, &down(8)), Some(CarId(1)), "{kind}");
        }
    }

    #[test]
    fn policy_kind_parses() {
        assert_eq!("nearest".parse::<PolicyKind>().unwrap(), PolicyKind::NearestCar);
        assert_eq!("Eligible".parse::<PolicyKind>().unwrap(), PolicyKind::NearestEligible);
        assert_eq!("least-loaded".parse::<PolicyKind>().unwrap(), PolicyKind::LeastLoaded);
        assert!("random".parse::<PolicyKind>().is_err());
        for kind in PolicyKind::ALL {
            assert_eq!(kind.as_str().parse::<PolicyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn closures_are_policies() {
        let highest = policy_fn(|fleet: &FleetSnapshot<'_>, _call: &Call| {
            fleet.in_service().map(|c| c.id()).max()
        });
        let cars = fleet_at(&[0, 1, 2]);
        assert_eq!(highest.select(&snapshot(&cars), &up(0)), Some(CarId(2)));
        assert_eq!(highest.name(), "custom");
    }
}
