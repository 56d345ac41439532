//! Planar coordinate type and movement constants.
//!
//! `LngLat` stores `f64` longitude/latitude.  The service area is a few
//! hundred metres across, so the planner ignores curvature entirely and
//! measures distance in degrees with Pythagoras.

use std::fmt;

use crate::Heading;

/// Distance covered by one physical movement step, in degrees.
///
/// Shared by movement, graph-cost estimation, and the A* `f` score.
pub const STEP_LENGTH: f64 = 0.000_15;

/// Two points closer than this (strictly) count as the same place for the
/// purpose of finishing a leg.
pub const ARRIVAL_TOLERANCE: f64 = 0.000_15;

/// Tolerance used only to merge A* search nodes: five times tighter than
/// [`ARRIVAL_TOLERANCE`].
pub const VERY_CLOSE_TOLERANCE: f64 = ARRIVAL_TOLERANCE / 5.0;

/// A point on the flat service plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    #[inline]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance in degrees.  Symmetric in its arguments.
    #[inline]
    pub fn distance_to(self, other: LngLat) -> f64 {
        let dlng = other.lng - self.lng;
        let dlat = other.lat - self.lat;
        (dlng * dlng + dlat * dlat).sqrt()
    }

    /// `true` if `other` is strictly within [`ARRIVAL_TOLERANCE`].
    #[inline]
    pub fn close_to(self, other: LngLat) -> bool {
        self.distance_to(other) < ARRIVAL_TOLERANCE
    }

    /// `true` if `other` is strictly within [`VERY_CLOSE_TOLERANCE`].
    ///
    /// Approximate equality for search-node deduplication only.  It is not
    /// transitive, so never use it where exact identity matters.
    #[inline]
    pub fn very_close_to(self, other: LngLat) -> bool {
        self.distance_to(other) < VERY_CLOSE_TOLERANCE
    }

    /// Position after one step at `heading`.
    ///
    /// Hovering returns `self` unchanged.
    pub fn next_position(self, heading: Heading) -> LngLat {
        match heading.radians() {
            None => self,
            Some(theta) => LngLat {
                lng: self.lng + STEP_LENGTH * theta.cos(),
                lat: self.lat + STEP_LENGTH * theta.sin(),
            },
        }
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lng, self.lat)
    }
}
