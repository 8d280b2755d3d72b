//! Caller-facing error type.
//!
//! Only caller mistakes are errors.  A hall call that finds no eligible car
//! is queued, and a duplicate call is merged; neither surfaces here.  Other
//! `lift-*` crates define their own enums and wrap `LiftError` via `From`.

use thiserror::Error;

use crate::{CarId, Floor};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiftError {
    #[error("floor {floor} is outside the building (0..{num_floors})")]
    InvalidFloor { floor: Floor, num_floors: u32 },

    #[error("car {0} does not exist")]
    UnknownCar(CarId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
