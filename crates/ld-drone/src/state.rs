//! Per-leg progress.

use ld_core::{LngLat, LocationId};

/// Where the drone is within the current leg.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegPhase {
    /// A target is set but no step has been taken toward it.
    #[default]
    Planning,
    /// At least one step has been taken and the target is not yet reached.
    Stepping,
    /// The last committed step (or the target assignment itself) landed
    /// within arrival tolerance of the target.
    Arrived,
}

/// End point of the current leg.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegTarget {
    pub location: LocationId,
    pub point:    LngLat,
}
