//! No-fly-zone polygons and the segment-crossing predicate.
//!
//! The crossing test is the classic orientation (counter-clockwise) check.
//! Collinear and touching configurations are not treated specially: a
//! segment that only grazes a vertex may or may not register as crossing.

use crate::{CoreError, CoreResult, LngLat};

// ── Orientation predicate ─────────────────────────────────────────────────────

#[inline]
fn ccw(a: LngLat, b: LngLat, c: LngLat) -> bool {
    (c.lat - a.lat) * (b.lng - a.lng) > (b.lat - a.lat) * (c.lng - a.lng)
}

/// `true` if segment `a–b` properly crosses segment `c–d`.
#[inline]
pub fn segments_intersect(a: LngLat, b: LngLat, c: LngLat, d: LngLat) -> bool {
    ccw(a, c, d) != ccw(b, c, d) && ccw(a, b, c) != ccw(a, b, d)
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box (inclusive).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: LngLat,
    pub max: LngLat,
}

impl Bounds {
    pub fn of_points(points: impl IntoIterator<Item = LngLat>) -> Bounds {
        let mut min = LngLat::new(f64::INFINITY, f64::INFINITY);
        let mut max = LngLat::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.lng = min.lng.min(p.lng);
            min.lat = min.lat.min(p.lat);
            max.lng = max.lng.max(p.lng);
            max.lat = max.lat.max(p.lat);
        }
        Bounds { min, max }
    }

    #[inline]
    pub fn of_segment(a: LngLat, b: LngLat) -> Bounds {
        Bounds {
            min: LngLat::new(a.lng.min(b.lng), a.lat.min(b.lat)),
            max: LngLat::new(a.lng.max(b.lng), a.lat.max(b.lat)),
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.lng <= other.max.lng
            && other.min.lng <= self.max.lng
            && self.min.lat <= other.max.lat
            && other.min.lat <= self.max.lat
    }
}

// ── Polygon ───────────────────────────────────────────────────────────────────

/// A closed ring of vertices.  The closing edge back to the first vertex is
/// implicit; an explicitly repeated first vertex is dropped on construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    ring:   Vec<LngLat>,
    bounds: Bounds,
}

impl Polygon {
    /// Build from a vertex ring.  Fails with fewer than three vertices.
    pub fn new(mut ring: Vec<LngLat>) -> CoreResult<Polygon> {
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(CoreError::Parse(format!(
                "polygon needs at least 3 distinct vertices, got {}",
                ring.len()
            )));
        }
        let bounds = Bounds::of_points(ring.iter().copied());
        Ok(Polygon { ring, bounds })
    }

    pub fn vertices(&self) -> &[LngLat] {
        &self.ring
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Boundary edges, including the wrap-around edge from last to first.
    pub fn edges(&self) -> impl Iterator<Item = (LngLat, LngLat)> + '_ {
        let n = self.ring.len();
        (0..n).map(move |i| (self.ring[i], self.ring[(i + 1) % n]))
    }

    /// `true` if segment `a–b` crosses any boundary edge.
    pub fn crossed_by(&self, a: LngLat, b: LngLat) -> bool {
        if !self.bounds.intersects(&Bounds::of_segment(a, b)) {
            return false;
        }
        self.edges().any(|(c, d)| segments_intersect(a, b, c, d))
    }
}
