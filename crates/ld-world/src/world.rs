//! Named locations, no-fly zones, and route queries.

use rustc_hash::FxHashMap;
use tracing::debug;

use ld_core::{LngLat, LocationId, Polygon, Region, ZoneId};

use crate::graph::{GraphConfig, RouteGraph, UNREACHABLE};
use crate::zones::NoFlyZones;
use crate::{WorldError, WorldResult};

/// Name of the home base.  Always registered first.
pub const HOME_NAME: &str = "Appleton Tower";

/// Coordinates of the home base.
pub const HOME_POINT: LngLat = LngLat::new(-3.186_874, 55.944_494);

// ── Route ─────────────────────────────────────────────────────────────────────

/// Result of a route query between two registered locations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    /// Locations to visit in order, excluding the source and ending with the
    /// destination.  Empty when source and destination coincide.
    Waypoints(Vec<LocationId>),
    /// Some hop on the cheapest route is a flagged direct edge.  The caller
    /// has to plan the leg point-to-point instead.
    Unreliable,
}

impl Route {
    pub fn is_reliable(&self) -> bool {
        matches!(self, Route::Waypoints(_))
    }
}

// ── WorldMap ──────────────────────────────────────────────────────────────────

/// Everything the drone knows about the service area.
///
/// Do not construct directly; use [`WorldMapBuilder`].
pub struct WorldMap {
    names:  Vec<String>,
    lookup: FxHashMap<String, LocationId>,
    points: Vec<LngLat>,
    zones:  NoFlyZones,
    region: Region,
    graph:  RouteGraph,
}

impl WorldMap {
    // ── Locations ─────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn home(&self) -> LocationId {
        LocationId::HOME
    }

    pub fn id_of(&self, name: &str) -> WorldResult<LocationId> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownLocation(name.to_owned()))
    }

    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    pub fn point(&self, id: LocationId) -> LngLat {
        self.points[id.index()]
    }

    /// All locations in registration order.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &str, LngLat)> + '_ {
        self.names
            .iter()
            .zip(&self.points)
            .enumerate()
            .map(|(i, (name, &p))| (LocationId(i as u32), name.as_str(), p))
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn zones(&self) -> &NoFlyZones {
        &self.zones
    }

    #[inline]
    pub fn is_confined(&self, p: LngLat) -> bool {
        self.region.contains(p)
    }

    /// `true` if flying straight from `from` to `to` is illegal: either `to`
    /// is outside the region or the segment crosses a no-fly zone.
    #[inline]
    pub fn blocked(&self, from: LngLat, to: LngLat) -> bool {
        !self.region.contains(to) || self.zones.crosses_any(from, to)
    }

    /// The zone responsible for blocking `from → to`, if it is a zone.
    pub fn blocking_zone(&self, from: LngLat, to: LngLat) -> Option<ZoneId> {
        self.zones.crossing(from, to)
    }

    // ── Graph queries ─────────────────────────────────────────────────────

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Shortest-route cost in moves.
    #[inline]
    pub fn cost_between(&self, a: LocationId, b: LocationId) -> u32 {
        self.graph.cost(a, b)
    }

    /// [`cost_between`](Self::cost_between) by name.
    pub fn cost_between_names(&self, a: &str, b: &str) -> WorldResult<u32> {
        Ok(self.cost_between(self.id_of(a)?, self.id_of(b)?))
    }

    /// Walk the next-hop matrix from `from` to `to`.
    ///
    /// Returns [`Route::Unreliable`] as soon as a hop uses a flagged direct
    /// edge, without a partial skeleton.  A walk longer than the number of
    /// locations means the matrices are inconsistent and is reported as
    /// [`WorldError::Unreachable`].
    pub fn route(&self, from: LocationId, to: LocationId) -> WorldResult<Route> {
        if self.graph.cost(from, to) == UNREACHABLE {
            return Err(self.unreachable(from, to));
        }
        let mut waypoints = Vec::new();
        let mut here = from;
        while here != to {
            if waypoints.len() >= self.location_count() {
                return Err(self.unreachable(from, to));
            }
            let hop = self.graph.next_hop(here, to);
            if self.graph.is_flagged(here, hop) {
                return Ok(Route::Unreliable);
            }
            waypoints.push(hop);
            here = hop;
        }
        Ok(Route::Waypoints(waypoints))
    }

    /// [`route`](Self::route) by name.
    pub fn route_by_name(&self, from: &str, to: &str) -> WorldResult<Route> {
        self.route(self.id_of(from)?, self.id_of(to)?)
    }

    fn unreachable(&self, from: LocationId, to: LocationId) -> WorldError {
        WorldError::Unreachable {
            from: self.name(from).to_owned(),
            to:   self.name(to).to_owned(),
        }
    }
}

// ── WorldMapBuilder ───────────────────────────────────────────────────────────

/// Collect locations and no-fly zones, then call [`build`](Self::build).
///
/// The home base is registered on construction, so it is always
/// `LocationId::HOME`.
///
/// # Example
///
/// ```
/// use ld_core::LngLat;
/// use ld_world::{HOME_NAME, WorldMapBuilder};
///
/// let mut b = WorldMapBuilder::new();
/// let shop = b.add_location("Bing Tea", LngLat::new(-3.1854, 55.9447));
/// let world = b.build();
/// assert_eq!(world.name(world.home()), HOME_NAME);
/// assert!(world.cost_between(world.home(), shop) > 0);
/// ```
pub struct WorldMapBuilder {
    names:  Vec<String>,
    lookup: FxHashMap<String, LocationId>,
    points: Vec<LngLat>,
    zones:  Vec<Polygon>,
    region: Region,
    config: GraphConfig,
}

impl WorldMapBuilder {
    /// Start with the default home base and [`Region::CENTRAL_AREA`].
    pub fn new() -> Self {
        Self::with_home(HOME_NAME, HOME_POINT)
    }

    /// Start with a custom home base.
    pub fn with_home(name: &str, point: LngLat) -> Self {
        let mut b = Self {
            names:  Vec::new(),
            lookup: FxHashMap::default(),
            points: Vec::new(),
            zones:  Vec::new(),
            region: Region::CENTRAL_AREA,
            config: GraphConfig::default(),
        };
        b.add_location(name, point);
        b
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn graph_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a named location and return its id.
    ///
    /// A name that is already registered keeps its first coordinate and the
    /// existing id is returned.
    pub fn add_location(&mut self, name: &str, point: LngLat) -> LocationId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.points.push(point);
        self.lookup.insert(name.to_owned(), id);
        id
    }

    pub fn add_no_fly_zone(&mut self, polygon: Polygon) -> ZoneId {
        let id = ZoneId(self.zones.len() as u32);
        self.zones.push(polygon);
        id
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Consume the builder, compute the route graph, and produce a
    /// [`WorldMap`].  O(N³) in the number of locations.
    pub fn build(self) -> WorldMap {
        let zones = NoFlyZones::new(self.zones);
        let region = self.region;
        let graph = RouteGraph::build(&self.points, &self.config, |a, b| {
            !region.contains(b) || zones.crosses_any(a, b)
        });
        debug!(
            locations = self.names.len(),
            zones = zones.len(),
            flagged = graph.flagged_pairs(),
            "route graph built"
        );
        WorldMap {
            names: self.names,
            lookup: self.lookup,
            points: self.points,
            zones,
            region,
            graph,
        }
    }
}

impl Default for WorldMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
