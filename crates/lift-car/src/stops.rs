//! Committed stop floors and LOOK target selection.

use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use lift_core::{Direction, Floor};

/// The set of floors a car has committed to visit.
///
/// Backed by a `BTreeSet` so both scan orders (ascending for an up sweep,
/// descending for a down sweep) are a range walk away.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSet {
    floors: BTreeSet<Floor>,
}

impl StopSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `floor`.  Returns `false` if it was already committed.
    pub fn insert(&mut self, floor: Floor) -> bool {
        self.floors.insert(floor)
    }

    pub fn remove(&mut self, floor: Floor) -> bool {
        self.floors.remove(&floor)
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Remove every stop, returning them in ascending order.
    pub fn drain(&mut self) -> Vec<Floor> {
        std::mem::take(&mut self.floors).into_iter().collect()
    }

    /// All stops in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }

    /// Nearest stop strictly beyond `from` in `direction`.
    pub fn nearest_ahead(&self, from: Floor, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up   => self.floors.range((Excluded(from), Unbounded)).next().copied(),
            Direction::Down => self.floors.range(..from).next_back().copied(),
            Direction::Idle => None,
        }
    }

    /// Farthest stop at or beyond `from` in `direction`: the end of the
    /// current sweep.
    pub fn farthest_ahead(&self, from: Floor, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up   => self.floors.range(from..).next_back().copied(),
            Direction::Down => self.floors.range(..=from).next().copied(),
            Direction::Idle => None,
        }
    }

    /// The stop a car at `from` heading `direction` should serve next, and
    /// the direction it travels to get there.
    ///
    /// - A stop at `from` itself is served in place (direction unchanged).
    /// - A moving car continues to the nearest stop ahead and reverses only
    ///   when none is left in its current direction.
    /// - An idle car takes the nearest stop; ties go up.
    pub fn next_target(&self, from: Floor, direction: Direction) -> Option<(Floor, Direction)> {
        if self.contains(from) {
            return Some((from, direction));
        }
        match direction {
            Direction::Up | Direction::Down => self
                .nearest_ahead(from, direction)
                .map(|f| (f, direction))
                .or_else(|| {
                    let back = direction.reversed();
                    self.nearest_ahead(from, back).map(|f| (f, back))
                }),
            Direction::Idle => {
                let up   = self.nearest_ahead(from, Direction::Up);
                let down = self.nearest_ahead(from, Direction::Down);
                match (up, down) {
                    (Some(u), Some(d)) if from - d < u - from => Some((d, Direction::Down)),
                    (Some(u), _)                              => Some((u, Direction::Up)),
                    (None, Some(d))                           => Some((d, Direction::Down)),
                    (None, None)                              => None,
                }
            }
        }
    }

    /// Stops in the order a car at `from` heading `direction` will visit them.
    pub fn service_order(&self, from: Floor, direction: Direction) -> Vec<Floor> {
        let heading = match self.next_target(from, direction) {
            None => return vec![],
            Some((_, Direction::Idle)) => Direction::Up,
            Some((_, d)) => d,
        };
        match heading {
            Direction::Down => self
                .floors
                .range(..=from)
                .rev()
                .chain(self.floors.range((Excluded(from), Unbounded)))
                .copied()
                .collect(),
            _ => self
                .floors
                .range(from..)
                .chain(self.floors.range(..from).rev())
                .copied()
                .collect(),
        }
    }
}

impl FromIterator<Floor> for StopSet {
    fn from_iter<I: IntoIterator<Item = Floor>>(iter: I) -> Self {
        Self { floors: iter.into_iter().collect() }
    }
}
