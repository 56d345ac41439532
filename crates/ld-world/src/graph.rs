//! All-pairs move-cost graph over named locations.
//!
//! # Data layout
//!
//! Three flat `n × n` row-major matrices, indexed by `LocationId`:
//!
//! ```text
//! cost[i*n + j]    estimated moves from i to j (after Floyd–Warshall)
//! next[i*n + j]    first hop on the cheapest i → j route
//! flagged[i*n + j] the *direct* segment i–j crosses a no-fly zone or leaves
//!                  the region
//! ```
//!
//! Direct weights are `ceil(distance · distance_margin / STEP_LENGTH)`, then
//! multiplied by `blocked_penalty` when the pair is flagged.  The penalty
//! keeps risky hops usable as a last resort while steering Floyd–Warshall
//! toward detours through clear waypoints.

use ld_core::{LngLat, LocationId, STEP_LENGTH};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Marks an unreachable pair.  Direct weights never reach it in practice.
pub const UNREACHABLE: u32 = u32::MAX;

// ── GraphConfig ───────────────────────────────────────────────────────────────

/// Weighting parameters for the direct edges.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    /// Multiplier over the straight-line step count.  Real flights are
    /// quantised to 10° headings and rarely straight.
    pub distance_margin: f64,
    /// Factor applied to the weight of a flagged direct edge.
    pub blocked_penalty: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { distance_margin: 1.01, blocked_penalty: 2 }
    }
}

impl GraphConfig {
    /// Unpenalised move estimate for a straight flight from `a` to `b`.
    #[inline]
    pub fn estimate(&self, a: LngLat, b: LngLat) -> u32 {
        (a.distance_to(b) * self.distance_margin / STEP_LENGTH).ceil() as u32
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Shortest-route matrices.  Built once by [`RouteGraph::build`].
pub struct RouteGraph {
    n:       usize,
    cost:    Vec<u32>,
    next:    Vec<u32>,
    flagged: Vec<bool>,
}

impl RouteGraph {
    /// Compute direct weights for every pair of `points`, then run
    /// Floyd–Warshall.
    ///
    /// `blocked(a, b)` decides whether the direct segment is flagged.  It is
    /// called once per unordered pair with the lower index first.
    pub fn build<F>(points: &[LngLat], config: &GraphConfig, blocked: F) -> RouteGraph
    where
        F: Fn(LngLat, LngLat) -> bool + Sync,
    {
        let n = points.len();
        let pairs: Vec<(usize, usize)> =
            (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))).collect();

        let weigh = |&(i, j): &(usize, usize)| {
            let (a, b) = (points[i], points[j]);
            let flagged = blocked(a, b);
            let mut w = config.estimate(a, b);
            if flagged {
                w = w.saturating_mul(config.blocked_penalty);
            }
            (w, flagged)
        };

        #[cfg(feature = "parallel")]
        let weights: Vec<(u32, bool)> = pairs.par_iter().map(weigh).collect();
        #[cfg(not(feature = "parallel"))]
        let weights: Vec<(u32, bool)> = pairs.iter().map(weigh).collect();

        let mut graph = RouteGraph {
            n,
            cost:    vec![0; n * n],
            next:    (0..n * n).map(|k| (k % n) as u32).collect(),
            flagged: vec![false; n * n],
        };
        for (&(i, j), &(w, flagged)) in pairs.iter().zip(&weights) {
            graph.cost[i * n + j] = w;
            graph.cost[j * n + i] = w;
            graph.flagged[i * n + j] = flagged;
            graph.flagged[j * n + i] = flagged;
        }
        graph.floyd_warshall();
        graph
    }

    /// Standard triple loop with next-hop bookkeeping.  Strict `>` keeps the
    /// first route found among equal-cost alternatives.
    fn floyd_warshall(&mut self) {
        let n = self.n;
        for k in 0..n {
            for i in 0..n {
                let ik = self.cost[i * n + k];
                if ik == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let through = ik.saturating_add(self.cost[k * n + j]);
                    if self.cost[i * n + j] > through {
                        self.cost[i * n + j] = through;
                        self.next[i * n + j] = self.next[i * n + k];
                    }
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Shortest-route cost in moves.
    #[inline]
    pub fn cost(&self, from: LocationId, to: LocationId) -> u32 {
        self.cost[from.index() * self.n + to.index()]
    }

    /// First hop on the cheapest route from `from` to `to`.
    #[inline]
    pub fn next_hop(&self, from: LocationId, to: LocationId) -> LocationId {
        LocationId(self.next[from.index() * self.n + to.index()])
    }

    /// Whether the direct segment between the two locations was blocked.
    #[inline]
    pub fn is_flagged(&self, a: LocationId, b: LocationId) -> bool {
        self.flagged[a.index() * self.n + b.index()]
    }

    /// Number of flagged unordered pairs.
    pub fn flagged_pairs(&self) -> usize {
        self.flagged.iter().filter(|&&f| f).count() / 2
    }
}
