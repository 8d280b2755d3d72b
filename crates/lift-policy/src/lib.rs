//! `lift-policy` — hall-call dispatch policies.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`snapshot`]      | `FleetSnapshot<'a>` — read-only fleet view for one call     |
//! | [`policy`]        | `DispatchPolicy` trait, `FnPolicy` closure adapter          |
//! | [`nearest`]       | `NearestCar` — closest in-service car                      |
//! | [`eligible`]      | `NearestEligible` — direction-preferring, with fallback     |
//! | [`least_loaded`]  | `LeastLoaded` — fewest committed stops                     |
//! | [`kind`]          | `PolicyKind` — tagged variant selectable from config/CLI    |
//!
//! # Design notes
//!
//! A policy is a pure function of `(snapshot, call)`.  The snapshot only
//! hands out `&Car`, so a policy cannot mutate the fleet; the dispatcher
//! commits the chosen stop afterwards.  Every built-in policy breaks ties by
//! the lowest `CarId`, which makes selection deterministic for a given
//! snapshot.

pub mod eligible;
pub mod kind;
pub mod least_loaded;
pub mod nearest;
pub mod policy;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use eligible::{NearestEligible, is_eligible};
pub use kind::PolicyKind;
pub use least_loaded::LeastLoaded;
pub use nearest::NearestCar;
pub use policy::{DispatchPolicy, FnPolicy, policy_fn};
pub use snapshot::FleetSnapshot;
