//! Confinement rectangle.

use crate::{Bounds, LngLat};

/// Axis-aligned rectangle the drone must stay strictly inside.
///
/// Described by its north-west and south-east corners; the other two corners
/// follow.  Containment is strict, so a point on the boundary is outside.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub north_west: LngLat,
    pub south_east: LngLat,
}

impl Region {
    /// The central campus area, bounded by Forrest Hill (NW), KFC (NE),
    /// Meadows top (SW) and the Buccleuch St bus stop (SE).
    pub const CENTRAL_AREA: Region = Region {
        north_west: LngLat::new(-3.192_473, 55.946_233),
        south_east: LngLat::new(-3.184_319, 55.942_617),
    };

    pub const fn new(north_west: LngLat, south_east: LngLat) -> Self {
        Self { north_west, south_east }
    }

    /// `true` iff `p` lies strictly inside the rectangle.
    #[inline]
    pub fn contains(&self, p: LngLat) -> bool {
        self.north_west.lng < p.lng
            && p.lng < self.south_east.lng
            && self.south_east.lat < p.lat
            && p.lat < self.north_west.lat
    }

    /// Corners in the order NW, NE, SW, SE.
    pub fn corners(&self) -> [LngLat; 4] {
        let (nw, se) = (self.north_west, self.south_east);
        [nw, LngLat::new(se.lng, nw.lat), LngLat::new(nw.lng, se.lat), se]
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::of_points(self.corners())
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::CENTRAL_AREA
    }
}
