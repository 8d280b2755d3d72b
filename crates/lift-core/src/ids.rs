//! Car identifiers.

use std::fmt;

/// Zero-based slot of a car in the fleet.  Stable for the whole run.
///
/// `CarId(i)` always names `cars[i]`, so ids double as `Vec` indices and
/// their ordering is the fleet's tie-break order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CarId(pub u32);

impl CarId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id for fleet slot `i`, or `None` past `u32::MAX`.
    pub fn from_index(i: usize) -> Option<CarId> {
        u32::try_from(i).ok().map(CarId)
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
