//! `lift-car` — per-car movement state and stop selection.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`stops`]  | `StopSet` — committed stop floors + LOOK target selection      |
//! | [`car`]    | `Car` — position, direction, state; `commit` / `advance`       |
//!
//! # Movement model (one floor per tick)
//!
//! 1. The dispatcher calls [`Car::commit`] to add a stop.  An idle car picks
//!    its direction from the new stop and becomes `Moving`.
//! 2. Each tick the dispatcher calls [`Car::advance`] exactly once.  The car
//!    heads for the nearest stop ahead of it, reversing only when nothing is
//!    left in its current direction (LOOK), and moves one floor.
//! 3. Reaching the target removes it from the stop set and yields an
//!    [`Arrival`] for the dispatcher to reconcile against outstanding calls.
//! 4. A car whose stop set becomes empty settles to `Idle` straight away.

pub mod car;
pub mod stops;

#[cfg(test)]
mod tests;

pub use car::{Arrival, Car};
pub use stops::StopSet;
