//! External events fed to the dispatcher between ticks.

use std::fmt;

use lift_core::{CarId, Floor, HallDirection};

/// One button press or maintenance action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Landing button pressed.
    HallCall { floor: Floor, direction: HallDirection },
    /// Floor button pressed inside `car`.
    CarCall { car: CarId, floor: Floor },
    /// A waiting passenger gave up.
    CancelHall { floor: Floor, direction: HallDirection },
    /// Car withdrawn for maintenance.
    OutOfService(CarId),
    /// Car returned to service.
    Restore(CarId),
}

impl Event {
    pub fn action(&self) -> &'static str {
        match self {
            Event::HallCall { .. }   => "hall",
            Event::CarCall { .. }    => "car",
            Event::CancelHall { .. } => "cancel",
            Event::OutOfService(_)   => "out_of_service",
            Event::Restore(_)        => "restore",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::HallCall { floor, direction }   => write!(f, "hall {direction} @{floor}"),
            Event::CarCall { car, floor }          => write!(f, "{car} -> {floor}"),
            Event::CancelHall { floor, direction } => write!(f, "cancel {direction} @{floor}"),
            Event::OutOfService(car)               => write!(f, "{car} out of service"),
            Event::Restore(car)                    => write!(f, "{car} restored"),
        }
    }
}
