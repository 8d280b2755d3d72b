//! Floors, travel directions, and car operating states.

use std::fmt;

/// A floor number.  Signed so that out-of-range requests such as `-1` can be
/// represented and rejected instead of wrapping.
pub type Floor = i32;

/// The direction a car is travelling, or `Idle` when it has nothing to do.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    /// `Idle` when the two floors are equal.
    #[inline]
    pub fn between(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// The opposite travel direction.  `Idle` stays `Idle`.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// Floor delta for one step in this direction.
    #[inline]
    pub fn step(self) -> Floor {
        match self {
            Direction::Up   => 1,
            Direction::Down => -1,
            Direction::Idle => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The direction a passenger asks for when pressing a hall button.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HallDirection {
    Up,
    Down,
}

impl HallDirection {
    #[inline]
    pub fn as_direction(self) -> Direction {
        match self {
            HallDirection::Up   => Direction::Up,
            HallDirection::Down => Direction::Down,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HallDirection::Up   => "up",
            HallDirection::Down => "down",
        }
    }
}

impl From<HallDirection> for Direction {
    fn from(d: HallDirection) -> Direction {
        d.as_direction()
    }
}

impl fmt::Display for HallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HallDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u"   => Ok(HallDirection::Up),
            "down" | "d" => Ok(HallDirection::Down),
            other => Err(format!("invalid hall direction {other:?}: expected \"up\" or \"down\"")),
        }
    }
}

/// Whether a car is available, busy, or withdrawn from dispatch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperationalState {
    #[default]
    Idle,
    Moving,
    /// Excluded from dispatch; accepts no new commits.
    OutOfService,
}

impl OperationalState {
    #[inline]
    pub fn in_service(self) -> bool {
        !matches!(self, OperationalState::OutOfService)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationalState::Idle         => "idle",
            OperationalState::Moving       => "moving",
            OperationalState::OutOfService => "out-of-service",
        }
    }
}

impl fmt::Display for OperationalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
