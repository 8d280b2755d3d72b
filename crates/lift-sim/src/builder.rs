//! Fluent builder for constructing a [`Dispatcher`].

use lift_car::Car;
use lift_core::{BuildingConfig, CarId, Floor, SimClock};
use lift_policy::DispatchPolicy;

use crate::{CallLedger, Dispatcher, SimError, SimResult};

/// Fluent builder for [`Dispatcher<P>`].
///
/// # Required inputs
///
/// - [`BuildingConfig`]: floors, cars, out-of-service handling
/// - `P: DispatchPolicy`: the hall-call assignment strategy
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                  |
/// |------------------------|--------------------------|
/// | `.initial_floors(v)`   | Every car on floor 0     |
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = DispatcherBuilder::new(BuildingConfig::new(10, 2), NearestEligible)
///     .initial_floors(vec![0, 9])
///     .build()?;
/// ```
pub struct DispatcherBuilder<P: DispatchPolicy> {
    config:    BuildingConfig,
    policy:    P,
    positions: Option<Vec<Floor>>,
}

impl<P: DispatchPolicy> DispatcherBuilder<P> {
    pub fn new(config: BuildingConfig, policy: P) -> Self {
        Self { config, policy, positions: None }
    }

    /// Park each car at a starting floor (must be length `num_cars`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.positions = Some(floors);
        self
    }

    /// Validate inputs and return an idle fleet ready to dispatch.
    pub fn build(self) -> SimResult<Dispatcher<P>> {
        self.config.validate()?;
        let car_count = self.config.num_cars as usize;

        let positions = match self.positions {
            Some(p) => {
                if p.len() != car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: car_count,
                        got:      p.len(),
                        what:     "initial floors",
                    });
                }
                for &floor in &p {
                    self.config.check_floor(floor)?;
                }
                p
            }
            None => vec![0; car_count],
        };

        let cars = positions
            .into_iter()
            .enumerate()
            .map(|(i, floor)| Car::at_floor(CarId(i as u32), self.config.num_floors, floor))
            .collect();

        Ok(Dispatcher {
            clock:  SimClock::new(self.config.tick_duration_secs),
            ledger: CallLedger::new(car_count),
            config: self.config,
            cars,
            policy: self.policy,
        })
    }
}
