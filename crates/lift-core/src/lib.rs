//! `lift-core` — foundational types for the lift dispatch simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`ids`]       | `CarId`                                                   |
//! | [`motion`]    | `Floor`, `Direction`, `HallDirection`, `OperationalState` |
//! | [`call`]      | `Call`, `CallKind`                                        |
//! | [`time`]      | `Tick`, `SimClock`                                        |
//! | [`config`]    | `BuildingConfig`, `OutOfServiceMode`                      |
//! | [`rng`]       | `SimRng` (seeded, deterministic)                          |
//! | [`error`]     | `LiftError`, `LiftResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod call;
pub mod config;
pub mod error;
pub mod ids;
pub mod motion;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::{Call, CallKind};
pub use config::{BuildingConfig, OutOfServiceMode};
pub use error::{LiftError, LiftResult};
pub use ids::CarId;
pub use motion::{Direction, Floor, HallDirection, OperationalState};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
