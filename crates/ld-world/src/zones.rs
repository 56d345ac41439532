//! No-fly-zone set with a bounding-box R-tree.
//!
//! The exact crossing test is only run against zones whose bounding box
//! meets the bounding box of the candidate hop.

use rstar::{AABB, Envelope, RTree, RTreeObject, SelectionFunction};

use ld_core::{Bounds, LngLat, Polygon, ZoneId};

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct ZoneEntry {
    envelope: AABB<[f64; 2]>,
    id:       ZoneId,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

fn aabb(bounds: Bounds) -> AABB<[f64; 2]> {
    AABB::from_corners([bounds.min.lng, bounds.min.lat], [bounds.max.lng, bounds.max.lat])
}

/// Selects entries whose envelope intersects a query box.
struct Overlapping(AABB<[f64; 2]>);

impl SelectionFunction<ZoneEntry> for Overlapping {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        self.0.intersects(envelope)
    }

    fn should_unpack_leaf(&self, leaf: &ZoneEntry) -> bool {
        self.0.intersects(&leaf.envelope)
    }
}

// ── NoFlyZones ────────────────────────────────────────────────────────────────

/// Immutable set of forbidden polygons, indexed by [`ZoneId`].
pub struct NoFlyZones {
    polygons: Vec<Polygon>,
    index:    RTree<ZoneEntry>,
}

impl NoFlyZones {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let entries = polygons
            .iter()
            .enumerate()
            .map(|(i, p)| ZoneEntry { envelope: aabb(p.bounds()), id: ZoneId(i as u32) })
            .collect();
        Self { polygons, index: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygon(&self, id: ZoneId) -> &Polygon {
        &self.polygons[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZoneId, &Polygon)> + '_ {
        self.polygons.iter().enumerate().map(|(i, p)| (ZoneId(i as u32), p))
    }

    /// Zones whose bounding box meets the box of segment `a–b`.
    pub fn candidates(&self, a: LngLat, b: LngLat) -> impl Iterator<Item = ZoneId> + '_ {
        self.index
            .locate_with_selection_function(Overlapping(aabb(Bounds::of_segment(a, b))))
            .map(|e| e.id)
    }

    /// First zone whose boundary segment `a–b` crosses, if any.
    pub fn crossing(&self, a: LngLat, b: LngLat) -> Option<ZoneId> {
        self.candidates(a, b).find(|&id| self.polygon(id).crossed_by(a, b))
    }

    #[inline]
    pub fn crosses_any(&self, a: LngLat, b: LngLat) -> bool {
        self.crossing(a, b).is_some()
    }
}
