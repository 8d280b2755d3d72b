//! Unit tests for lift-car.

use lift_core::{CarId, Direction, Floor, OperationalState};

use crate::{Arrival, Car, StopSet};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLOORS: u32 = 10;

fn car_at(floor: Floor) -> Car {
    Car::at_floor(CarId(0), FLOORS, floor)
}

/// Advance until the car settles, collecting the floors it arrives at.
fn run_to_idle(car: &mut Car, max_ticks: usize) -> Vec<Floor> {
    let mut visited = vec![];
    for _ in 0..max_ticks {
        if let Some(a) = car.advance() {
            visited.push(a.floor);
        }
        assert!(car.current_floor() >= 0 && car.current_floor() < FLOORS as Floor);
        if car.is_idle() {
            break;
        }
    }
    visited
}

// ── StopSet ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_set {
    use super::*;

    fn stops(fs: &[Floor]) -> StopSet {
        fs.iter().copied().collect()
    }

    #[test]
    fn nearest_ahead_is_strict() {
        let s = stops(&[2, 5, 8]);
        assert_eq!(s.nearest_ahead(5, Direction::Up), Some(8));
        assert_eq!(s.nearest_ahead(5, Direction::Down), Some(2));
        assert_eq!(s.nearest_ahead(8, Direction::Up), None);
        assert_eq!(s.nearest_ahead(5, Direction::Idle), None);
    }

    #[test]
    fn farthest_ahead_marks_end_of_sweep() {
        let s = stops(&[2, 5, 8]);
        assert_eq!(s.farthest_ahead(3, Direction::Up), Some(8));
        assert_eq!(s.farthest_ahead(6, Direction::Down), Some(2));
        assert_eq!(s.farthest_ahead(9, Direction::Up), None);
    }

    #[test]
    fn continues_before_reversing() {
        let s = stops(&[3, 7]);
        assert_eq!(s.next_target(5, Direction::Up), Some((7, Direction::Up)));
        assert_eq!(s.next_target(5, Direction::Down), Some((3, Direction::Down)));
    }

    #[test]
    fn reverses_when_nothing_ahead() {
        let s = stops(&[1]);
        assert_eq!(s.next_target(5, Direction::Up), Some((1, Direction::Down)));
    }

    #[test]
    fn stop_at_current_floor_served_in_place() {
        let s = stops(&[4, 9]);
        assert_eq!(s.next_target(4, Direction::Up), Some((4, Direction::Up)));
        assert_eq!(s.next_target(4, Direction::Idle), Some((4, Direction::Idle)));
    }

    #[test]
    fn idle_tie_prefers_up() {
        let s = stops(&[3, 7]);
        assert_eq!(s.next_target(5, Direction::Idle), Some((7, Direction::Up)));
        let s = stops(&[4, 7]);
        assert_eq!(s.next_target(5, Direction::Idle), Some((4, Direction::Down)));
    }

    #[test]
    fn service_order_follows_sweep() {
        let s = stops(&[1, 3, 7, 9]);
        assert_eq!(s.service_order(5, Direction::Up), vec![7, 9, 3, 1]);
        assert_eq!(s.service_order(5, Direction::Down), vec![3, 1, 7, 9]);
        assert!(StopSet::new().service_order(5, Direction::Up).is_empty());
    }

    #[test]
    fn drain_empties_the_set() {
        let mut s = stops(&[6, 2]);
        assert_eq!(s.drain(), vec![2, 6]);
        assert!(s.is_empty());
    }
}

// ── Car ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod car {
    use super::*;

    #[test]
    fn new_car_is_idle_on_ground_floor() {
        let car = Car::new(CarId(2), FLOORS);
        assert_eq!(car.id(), CarId(2));
        assert_eq!(car.current_floor(), 0);
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(car.state(), OperationalState::Idle);
        assert!(car.stops().is_empty());
    }

    #[test]
    fn commit_sets_direction_and_moving() {
        let mut car = car_at(4);
        assert!(car.commit(8));
        assert_eq!(car.direction(), Direction::Up);
        assert_eq!(car.state(), OperationalState::Moving);

        let mut car = car_at(4);
        assert!(car.commit(1));
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn commit_at_own_floor_arrives_next_tick_without_moving() {
        let mut car = car_at(3);
        assert!(car.commit(3));
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(car.advance(), Some(Arrival { car: CarId(0), floor: 3 }));
        assert_eq!(car.current_floor(), 3);
        assert!(car.is_idle());
    }

    #[test]
    fn advance_moves_one_floor_per_tick() {
        let mut car = car_at(0);
        car.commit(5);
        for expected in 1..5 {
            assert_eq!(car.advance(), None);
            assert_eq!(car.current_floor(), expected);
        }
        assert_eq!(car.advance(), Some(Arrival { car: CarId(0), floor: 5 }));
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(car.state(), OperationalState::Idle);
    }

    #[test]
    fn advance_on_idle_car_changes_nothing() {
        let mut car = car_at(6);
        let before = car.clone();
        assert_eq!(car.advance(), None);
        assert_eq!(car, before);
    }

    #[test]
    fn direction_stickiness_visits_seven_before_three() {
        let mut car = car_at(4);
        car.commit(7);
        car.advance(); // now at 5 heading up
        assert_eq!(car.current_floor(), 5);
        car.commit(3);
        assert_eq!(car.service_order(), vec![7, 3]);
        assert_eq!(run_to_idle(&mut car, 20), vec![7, 3]);
    }

    #[test]
    fn passes_intermediate_stops_in_order() {
        let mut car = car_at(0);
        car.commit(8);
        car.commit(2);
        car.commit(5);
        assert_eq!(run_to_idle(&mut car, 20), vec![2, 5, 8]);
    }

    #[test]
    fn idle_direction_implies_no_stops() {
        let mut car = car_at(2);
        car.commit(6);
        car.commit(0);
        for _ in 0..30 {
            car.advance();
            if car.direction() == Direction::Idle {
                assert!(car.stops().is_empty());
            }
        }
        assert!(car.is_idle());
    }

    #[test]
    fn withdraw_last_stop_settles() {
        let mut car = car_at(2);
        car.commit(6);
        assert!(car.withdraw(6));
        assert!(!car.withdraw(6));
        assert!(car.is_idle());
        assert_eq!(car.direction(), Direction::Idle);
    }

    #[test]
    fn out_of_service_rejects_commits() {
        let mut car = car_at(2);
        car.take_out_of_service(false);
        assert!(!car.commit(5));
        assert!(car.stops().is_empty());
        assert_eq!(car.state(), OperationalState::OutOfService);
    }

    #[test]
    fn out_of_service_honoring_stops_still_serves_them() {
        let mut car = car_at(0);
        car.commit(2);
        assert!(car.take_out_of_service(false).is_empty());
        assert_eq!(run_to_idle_or_stopped(&mut car), vec![2]);
        assert_eq!(car.state(), OperationalState::OutOfService);
        assert_eq!(car.direction(), Direction::Idle);
    }

    fn run_to_idle_or_stopped(car: &mut Car) -> Vec<Floor> {
        (0..10).filter_map(|_| car.advance()).map(|a| a.floor).collect()
    }

    #[test]
    fn out_of_service_clearing_drops_stops() {
        let mut car = car_at(0);
        car.commit(4);
        car.commit(2);
        assert_eq!(car.take_out_of_service(true), vec![2, 4]);
        assert_eq!(car.direction(), Direction::Idle);
        assert_eq!(car.advance(), None);
        assert_eq!(car.current_floor(), 0);
    }

    #[test]
    fn restore_returns_to_idle_or_moving() {
        let mut car = car_at(0);
        car.take_out_of_service(true);
        car.restore();
        assert_eq!(car.state(), OperationalState::Idle);

        let mut car = car_at(0);
        car.commit(3);
        car.take_out_of_service(false);
        car.restore();
        assert_eq!(car.state(), OperationalState::Moving);
    }
}
