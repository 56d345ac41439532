//! Point-to-point leg planning.
//!
//! # Pluggability
//!
//! The dispatcher asks a [`LegPlanner`] for a heading sequence whenever the
//! precomputed route for a leg is unreliable.  [`AStarPlanner`] is the
//! default; tests substitute scripted planners.
//!
//! # Search model
//!
//! The plane is discretised by the drone's own action set: from any node the
//! successors are the 36 positions one step away at `0°, 10°, …, 350°`,
//! minus those whose hop is blocked.  `g` counts steps, `h` is the straight
//! distance to the goal, and `f = g · STEP_LENGTH + h` so both terms are in
//! degrees.  Two nodes within `VERY_CLOSE_TOLERANCE` are the same search
//! state; a grid of tolerance-sized cells finds them without hashing floats.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use ld_core::{Heading, LngLat, STEP_LENGTH, VERY_CLOSE_TOLERANCE};

use crate::{WorldError, WorldMap, WorldResult};

// ── LegPlanner trait ──────────────────────────────────────────────────────────

/// Plans a whole leg as a sequence of headings.
///
/// Implementations must be `Send + Sync` so a planner can sit behind a
/// shared dispatcher.
pub trait LegPlanner: Send + Sync {
    /// Headings that take the drone from `from` to within arrival tolerance
    /// of `to`.  Empty if `from` is already there.
    fn plan(&self, world: &WorldMap, from: LngLat, to: LngLat) -> WorldResult<Vec<Heading>>;
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AStarConfig {
    /// Give up with `NoSolution` after this many node expansions.  `None`
    /// searches until the open set is empty.
    pub max_expansions: Option<usize>,
}

/// A* over the 36-heading step lattice.
#[derive(Clone, Debug, Default)]
pub struct AStarPlanner {
    pub config: AStarConfig,
}

impl AStarPlanner {
    pub fn new(config: AStarConfig) -> Self {
        Self { config }
    }
}

impl LegPlanner for AStarPlanner {
    fn plan(&self, world: &WorldMap, from: LngLat, to: LngLat) -> WorldResult<Vec<Heading>> {
        Search::new(world, from, to).run(self.config.max_expansions)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Open,
    Closed,
    /// Superseded by a cheaper node at the same position.  Stays in the
    /// arena because descendants may still point at it.
    Dropped,
}

pub(crate) struct SearchNode {
    pub(crate) pos:     LngLat,
    pub(crate) g:       u32,
    pub(crate) f:       f64,
    pub(crate) heading: Heading,
    pub(crate) parent:  Option<usize>,
    pub(crate) state:   NodeState,
}

#[derive(Copy, Clone, Debug)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Heap entry: lowest `f` first, then oldest node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f:    FloatOrd,
    node: usize,
}

type Cell = (i64, i64);

fn cell_of(p: LngLat) -> Cell {
    (
        (p.lng / VERY_CLOSE_TOLERANCE).floor() as i64,
        (p.lat / VERY_CLOSE_TOLERANCE).floor() as i64,
    )
}

pub(crate) struct Search<'w> {
    world: &'w WorldMap,
    from:  LngLat,
    to:    LngLat,
    nodes: Vec<SearchNode>,
    open:  BinaryHeap<Reverse<OpenEntry>>,
    grid:  FxHashMap<Cell, Vec<usize>>,
}

impl<'w> Search<'w> {
    pub(crate) fn new(world: &'w WorldMap, from: LngLat, to: LngLat) -> Self {
        Self {
            world,
            from,
            to,
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            grid: FxHashMap::default(),
        }
    }

    pub(crate) fn run(mut self, max_expansions: Option<usize>) -> WorldResult<Vec<Heading>> {
        self.push(self.from, 0, Heading::HOVER, None);
        let mut expanded = 0usize;
        let mut replaced = 0usize;

        while let Some(Reverse(entry)) = self.open.pop() {
            let best = entry.node;
            if self.nodes[best].state != NodeState::Open {
                continue;
            }
            let pos = self.nodes[best].pos;
            if pos.close_to(self.to) {
                let headings = self.headings_to(best);
                debug!(expanded, replaced, steps = headings.len(), "A* reached goal");
                return Ok(headings);
            }
            if max_expansions.is_some_and(|max| expanded >= max) {
                break;
            }
            expanded += 1;

            let g = self.nodes[best].g + 1;
            for heading in Heading::compass() {
                let next = pos.next_position(heading);
                if self.world.blocked(pos, next) {
                    continue;
                }
                if let Relax::Replaced { .. } = self.relax(next, g, heading, best) {
                    replaced += 1;
                }
            }
            self.nodes[best].state = NodeState::Closed;
        }

        Err(WorldError::NoSolution { from: self.from, to: self.to, expanded })
    }

    /// Offer `next`, reached from `parent` in `g` steps.
    ///
    /// A position with an open node is left alone.  A closed node there is
    /// replaced only when the new `f` is strictly lower; the old node is
    /// marked `Dropped` but kept so its descendants still resolve.
    pub(crate) fn relax(&mut self, next: LngLat, g: u32, heading: Heading, parent: usize) -> Relax {
        let f = f64::from(g) * STEP_LENGTH + next.distance_to(self.to);
        match self.find_same(next) {
            Same::None => Relax::Added(self.push(next, g, heading, Some(parent))),
            Same::Closed(old) if self.nodes[old].f > f => {
                self.nodes[old].state = NodeState::Dropped;
                self.unlink(old);
                Relax::Replaced { old, new: self.push(next, g, heading, Some(parent)) }
            }
            Same::Open | Same::Closed(_) => Relax::Kept,
        }
    }

    pub(crate) fn push(&mut self, pos: LngLat, g: u32, heading: Heading, parent: Option<usize>) -> usize {
        let f = f64::from(g) * STEP_LENGTH + pos.distance_to(self.to);
        let idx = self.nodes.len();
        self.nodes.push(SearchNode { pos, g, f, heading, parent, state: NodeState::Open });
        self.grid.entry(cell_of(pos)).or_default().push(idx);
        self.open.push(Reverse(OpenEntry { f: FloatOrd(f), node: idx }));
        idx
    }

    #[cfg(test)]
    pub(crate) fn close(&mut self, idx: usize) {
        self.nodes[idx].state = NodeState::Closed;
    }

    #[cfg(test)]
    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    /// Live node within `VERY_CLOSE_TOLERANCE` of `pos`.  An open match wins
    /// over a closed one.
    fn find_same(&self, pos: LngLat) -> Same {
        let (cx, cy) = cell_of(pos);
        let mut closed = None;
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(bucket) = self.grid.get(&(cx + dx, cy + dy)) else { continue };
                for &idx in bucket {
                    let node = &self.nodes[idx];
                    if !node.pos.very_close_to(pos) {
                        continue;
                    }
                    match node.state {
                        NodeState::Open => return Same::Open,
                        NodeState::Closed => {
                            closed.get_or_insert(idx);
                        }
                        NodeState::Dropped => {}
                    }
                }
            }
        }
        closed.map_or(Same::None, Same::Closed)
    }

    fn unlink(&mut self, idx: usize) {
        if let Some(bucket) = self.grid.get_mut(&cell_of(self.nodes[idx].pos)) {
            bucket.retain(|&i| i != idx);
        }
    }

    pub(crate) fn headings_to(&self, goal: usize) -> Vec<Heading> {
        let mut headings = Vec::new();
        let mut cur = goal;
        while let Some(parent) = self.nodes[cur].parent {
            headings.push(self.nodes[cur].heading);
            cur = parent;
        }
        headings.reverse();
        headings
    }
}

enum Same {
    None,
    Open,
    Closed(usize),
}

/// What [`Search::relax`] did with an offered position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Relax {
    Added(usize),
    Replaced { old: usize, new: usize },
    /// A live node already covers the position at no worse cost.
    Kept,
}
