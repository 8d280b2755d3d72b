//! Building configuration supplied at construction and immutable for the run.

use crate::{Floor, LiftError, LiftResult};

/// What happens to a car's committed stops when it is taken out of service.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OutOfServiceMode {
    /// The car finishes the stops it already committed to.
    #[default]
    Honor,
    /// The car's stops are dropped; its hall calls are re-dispatched.
    Clear,
}

/// Static description of the building and fleet.
///
/// Typically loaded from a JSON file by the application crate (with the
/// `serde` feature) and handed to the dispatcher builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildingConfig {
    /// Number of floors, numbered `0..num_floors`.  Must be at least 2.
    pub num_floors: u32,

    /// Number of cars in the fleet.  Must be at least 1.
    pub num_cars: u32,

    /// Handling of committed stops when a car goes out of service.
    pub out_of_service: OutOfServiceMode,

    /// Nominal seconds per tick, used only for reporting.  Default: 2.
    pub tick_duration_secs: u32,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            num_floors:         10,
            num_cars:           3,
            out_of_service:     OutOfServiceMode::Honor,
            tick_duration_secs: 2,
        }
    }
}

impl BuildingConfig {
    pub fn new(num_floors: u32, num_cars: u32) -> Self {
        Self { num_floors, num_cars, ..Self::default() }
    }

    pub fn with_out_of_service(mut self, mode: OutOfServiceMode) -> Self {
        self.out_of_service = mode;
        self
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::Config(format!(
                "num_floors must be at least 2, got {}",
                self.num_floors
            )));
        }
        if self.num_floors > Floor::MAX as u32 {
            return Err(LiftError::Config(format!(
                "num_floors {} exceeds the supported maximum {}",
                self.num_floors,
                Floor::MAX
            )));
        }
        if self.num_cars < 1 {
            return Err(LiftError::Config("num_cars must be at least 1".into()));
        }
        Ok(())
    }

    /// The highest valid floor number.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        self.num_floors as Floor - 1
    }

    /// `true` if `floor` lies in `[0, num_floors)`.
    #[inline]
    pub fn contains_floor(&self, floor: Floor) -> bool {
        floor >= 0 && (floor as i64) < self.num_floors as i64
    }

    /// `Ok(())` if `floor` is in range, `InvalidFloor` otherwise.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<()> {
        if self.contains_floor(floor) {
            Ok(())
        } else {
            Err(LiftError::InvalidFloor { floor, num_floors: self.num_floors })
        }
    }
}
