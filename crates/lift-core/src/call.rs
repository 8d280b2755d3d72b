//! Hall and car calls.

use std::fmt;

use crate::{Floor, HallDirection};

/// What kind of button produced a call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallKind {
    /// External button on a landing, tagged with the direction the passenger
    /// wants to travel.
    Hall(HallDirection),
    /// Button inside a car.  The owning car is tracked by the dispatcher.
    Car,
}

/// An immutable request to visit a floor.
///
/// Identity is `(floor, kind)`; two identical hall calls are the same call
/// and are merged by the dispatcher rather than queued twice.  Ordering is by
/// floor first, which keeps retry order deterministic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub floor: Floor,
    pub kind:  CallKind,
}

impl Call {
    #[inline]
    pub fn hall(floor: Floor, direction: HallDirection) -> Self {
        Self { floor, kind: CallKind::Hall(direction) }
    }

    #[inline]
    pub fn car(floor: Floor) -> Self {
        Self { floor, kind: CallKind::Car }
    }

    #[inline]
    pub fn is_hall(&self) -> bool {
        matches!(self.kind, CallKind::Hall(_))
    }

    /// The direction requested at the landing; `None` for car calls.
    #[inline]
    pub fn requested_direction(&self) -> Option<HallDirection> {
        match self.kind {
            CallKind::Hall(d) => Some(d),
            CallKind::Car     => None,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CallKind::Hall(d) => write!(f, "hall {}@{}", d, self.floor),
            CallKind::Car     => write!(f, "car @{}", self.floor),
        }
    }
}
