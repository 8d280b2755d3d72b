//! Owned status snapshot for display and monitoring collaborators.

use std::fmt;

use lift_car::Car;
use lift_core::{Call, CarId, Direction, Floor, OperationalState, Tick};

/// One car as seen by a status consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarStatus {
    pub id:              CarId,
    pub current_floor:   Floor,
    pub direction:       Direction,
    pub state:           OperationalState,
    /// Committed stops in the order the car will visit them.
    pub committed_stops: Vec<Floor>,
}

impl From<&Car> for CarStatus {
    fn from(car: &Car) -> Self {
        Self {
            id:              car.id(),
            current_floor:   car.current_floor(),
            direction:       car.direction(),
            state:           car.state(),
            committed_stops: car.service_order(),
        }
    }
}

/// The whole fleet plus the hall calls still waiting for a car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FleetStatus {
    pub tick:       Tick,
    pub cars:       Vec<CarStatus>,
    pub unassigned: Vec<Call>,
}

impl fmt::Display for FleetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "── {} ──", self.tick)?;
        for car in &self.cars {
            writeln!(
                f,
                "  {:<9} floor {:>3}  {:<5} {:<14} stops {:?}",
                car.id.to_string(),
                car.current_floor,
                car.direction.as_str(),
                car.state.as_str(),
                car.committed_stops,
            )?;
        }
        if !self.unassigned.is_empty() {
            let waiting: Vec<String> = self.unassigned.iter().map(ToString::to_string).collect();
            writeln!(f, "  unassigned: {}", waiting.join(", "))?;
        }
        Ok(())
    }
}
