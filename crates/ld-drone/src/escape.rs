//! Heading choice for a single step, with local no-fly-zone escape.
//!
//! When the straight hop toward the target is blocked, the planner probes
//! headings rotated by `10°·k` for `k = 1, 2, …, 18` and commits to the
//! first legal one.  This skirts the edge of a zone one step at a time; it
//! is greedy and can circle inside concave traps, which is why whole legs
//! known to be risky go to the A* planner instead.

use tracing::debug;

use ld_core::{HEADING_COUNT, HEADING_RESOLUTION, Heading, LngLat};
use ld_world::WorldMap;

use crate::{DroneError, DroneResult};

/// Largest rotation probed, in multiples of [`HEADING_RESOLUTION`].  At this
/// value both sides reach the reverse heading.
const MAX_TURN: i32 = (HEADING_COUNT / 2) as i32;

/// Rotation direction of an escape turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Increasing heading angle.
    CounterClockwise,
    /// Decreasing heading angle.
    Clockwise,
}

impl Turn {
    #[inline]
    fn sign(self) -> i32 {
        match self {
            Turn::CounterClockwise => 1,
            Turn::Clockwise => -1,
        }
    }

    #[inline]
    fn opposite(self) -> Turn {
        match self {
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Clockwise => Turn::CounterClockwise,
        }
    }
}

/// Order in which the two rotation directions are probed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EscapeStrategy {
    /// For each `k`, try `+10k` then `-10k`.
    #[default]
    Alternating,
    /// Like `Alternating`, but once a turn direction has succeeded it is
    /// tried first for the rest of the leg.  Stops the drone from
    /// oscillating along a zone edge.
    Momentum,
}

/// Picks the heading for each step.
#[derive(Clone, Debug, Default)]
pub struct StepPlanner {
    strategy:  EscapeStrategy,
    last_turn: Option<Turn>,
}

impl StepPlanner {
    pub fn new(strategy: EscapeStrategy) -> Self {
        Self { strategy, last_turn: None }
    }

    pub fn strategy(&self) -> EscapeStrategy {
        self.strategy
    }

    /// The turn direction remembered for this leg, if any.
    pub fn last_turn(&self) -> Option<Turn> {
        self.last_turn
    }

    /// Forget the remembered turn direction.  Called when a leg ends.
    pub fn reset(&mut self) {
        self.last_turn = None;
    }

    /// Legal heading closest to `desired` for a step from `from`.
    ///
    /// Hover is always legal.  Fails with [`DroneError::Boxed`] if no
    /// heading at all is legal.
    pub fn resolve(&mut self, world: &WorldMap, from: LngLat, desired: Heading) -> DroneResult<Heading> {
        if desired.is_hover() || !world.blocked(from, from.next_position(desired)) {
            return Ok(desired);
        }

        let first = match self.strategy {
            EscapeStrategy::Alternating => Turn::CounterClockwise,
            EscapeStrategy::Momentum => self.last_turn.unwrap_or(Turn::CounterClockwise),
        };

        for k in 1..=MAX_TURN {
            for turn in [first, first.opposite()] {
                let candidate = desired.rotated(turn.sign() * k * HEADING_RESOLUTION);
                if !world.blocked(from, from.next_position(candidate)) {
                    debug!(%from, %desired, %candidate, ?turn, "escaping no-fly zone");
                    self.last_turn = Some(turn);
                    return Ok(candidate);
                }
            }
        }
        Err(DroneError::Boxed { at: from })
    }
}
