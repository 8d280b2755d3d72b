//! Runtime-selectable policy.

use std::fmt;
use std::str::FromStr;

use lift_core::{Call, CarId};

use crate::{DispatchPolicy, FleetSnapshot, LeastLoaded, NearestCar, NearestEligible};

/// The built-in policies as one tagged variant, so a policy can be chosen
/// from a config file or command line and still be stored by value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PolicyKind {
    NearestCar,
    #[default]
    NearestEligible,
    LeastLoaded,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::NearestCar,
        PolicyKind::NearestEligible,
        PolicyKind::LeastLoaded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::NearestCar      => "nearest",
            PolicyKind::NearestEligible => "nearest-eligible",
            PolicyKind::LeastLoaded     => "least-loaded",
        }
    }
}

impl DispatchPolicy for PolicyKind {
    fn select(&self, fleet: &FleetSnapshot<'_>, call: &Call) -> Option<CarId> {
        match self {
            PolicyKind::NearestCar      => NearestCar.select(fleet, call),
            PolicyKind::NearestEligible => NearestEligible.select(fleet, call),
            PolicyKind::LeastLoaded     => LeastLoaded.select(fleet, call),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" | "nearest-car"                    => Ok(PolicyKind::NearestCar),
            "eligible" | "nearest-eligible" | "direction" => Ok(PolicyKind::NearestEligible),
            "least-loaded" | "load"                      => Ok(PolicyKind::LeastLoaded),
            other => Err(format!(
                "unknown policy {other:?}: expected one of nearest, nearest-eligible, least-loaded"
            )),
        }
    }
}
