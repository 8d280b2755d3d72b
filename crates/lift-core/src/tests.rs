//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::CarId;

    #[test]
    fn index_roundtrip() {
        let id = CarId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CarId::from_index(3), Some(id));
    }

    #[test]
    fn ordering_and_display() {
        assert!(CarId(0) < CarId(1));
        assert_eq!(CarId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod motion {
    use crate::{Direction, HallDirection, OperationalState};

    #[test]
    fn direction_between_floors() {
        assert_eq!(Direction::between(2, 5), Direction::Up);
        assert_eq!(Direction::between(5, 2), Direction::Down);
        assert_eq!(Direction::between(4, 4), Direction::Idle);
    }

    #[test]
    fn reversal_and_step() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Idle.reversed(), Direction::Idle);
        assert_eq!(Direction::Down.step(), -1);
        assert_eq!(Direction::Idle.step(), 0);
    }

    #[test]
    fn hall_direction_parses() {
        assert_eq!("up".parse::<HallDirection>().unwrap(), HallDirection::Up);
        assert_eq!(" Down ".parse::<HallDirection>().unwrap(), HallDirection::Down);
        assert!("sideways".parse::<HallDirection>().is_err());
        assert_eq!(Direction::from(HallDirection::Down), Direction::Down);
    }

    #[test]
    fn out_of_service_is_not_in_service() {
        assert!(OperationalState::Idle.in_service());
        assert!(OperationalState::Moving.in_service());
        assert!(!OperationalState::OutOfService.in_service());
    }
}

#[cfg(test)]
mod call {
    use std::collections::BTreeSet;

    use crate::{Call, CallKind, HallDirection};

    #[test]
    fn identical_hall_calls_are_equal() {
        assert_eq!(Call::hall(5, HallDirection::Up), Call::hall(5, HallDirection::Up));
        assert_ne!(Call::hall(5, HallDirection::Up), Call::hall(5, HallDirection::Down));
        assert_ne!(Call::hall(5, HallDirection::Up), Call::car(5));
    }

    #[test]
    fn requested_direction_only_for_hall_calls() {
        assert_eq!(Call::hall(1, HallDirection::Down).requested_direction(), Some(HallDirection::Down));
        assert_eq!(Call::car(1).requested_direction(), None);
        assert_eq!(Call::car(1).kind, CallKind::Car);
    }

    #[test]
    fn ordered_by_floor_first() {
        let set: BTreeSet<Call> = [
            Call::hall(7, HallDirection::Down),
            Call::hall(2, HallDirection::Up),
            Call::hall(7, HallDirection::Up),
        ]
        .into_iter()
        .collect();
        let floors: Vec<i32> = set.iter().map(|c| c.floor).collect();
        assert_eq!(floors, vec![2, 7, 7]);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10).offset(3), Tick(13));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(2);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs(), 4);
        assert_eq!(clock.to_string(), "T2 (00:04)");
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, LiftError};

    #[test]
    fn default_is_valid() {
        assert!(BuildingConfig::default().validate().is_ok());
    }

    #[test]
    fn too_few_floors_or_cars_rejected() {
        assert!(matches!(BuildingConfig::new(1, 2).validate(), Err(LiftError::Config(_))));
        assert!(matches!(BuildingConfig::new(10, 0).validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn floor_bounds() {
        let cfg = BuildingConfig::new(10, 1);
        assert_eq!(cfg.top_floor(), 9);
        assert!(cfg.contains_floor(0));
        assert!(cfg.contains_floor(9));
        assert!(!cfg.contains_floor(10));
        assert!(!cfg.contains_floor(-1));
        assert_eq!(
            cfg.check_floor(10),
            Err(LiftError::InvalidFloor { floor: 10, num_floors: 10 })
        );
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..100)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(1);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.5));
        assert!(!rng.gen_bool(-2.0));
        assert!(!rng.gen_bool(f64::NAN));
    }
}
