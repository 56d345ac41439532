//! Run configuration.

use ld_drone::EscapeStrategy;
use ld_world::AStarConfig;

/// Parameters for one delivery run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispatchConfig {
    /// Move budget the drone starts with.  Every step and hover costs one.
    pub initial_moves: u32,
    /// How the step planner turns away from a blocked hop.
    pub escape:        EscapeStrategy,
    /// Limits for the A* leg planner.
    pub astar:         AStarConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            initial_moves: 1500,
            escape:        EscapeStrategy::Alternating,
            astar:         AStarConfig::default(),
        }
    }
}
