//! Quantised compass heading.
//!
//! The drone can only fly along multiples of 10° measured counter-clockwise
//! from due east (0° = +lng, 90° = +lat).  A separate sentinel value marks a
//! hover step, which consumes a move but leaves the position unchanged.

use std::fmt;

use crate::LngLat;

/// Degrees between adjacent headings.
pub const HEADING_RESOLUTION: i32 = 10;

/// Number of distinct flying headings (`0, 10, …, 350`).
pub const HEADING_COUNT: usize = (360 / HEADING_RESOLUTION) as usize;

const HOVER_DEGREES: i32 = -999;

/// A flying direction in `{0, 10, …, 350}` or [`Heading::HOVER`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading(i32);

impl Heading {
    /// Stationary pseudo-step.  Written to flight logs as `-999`.
    pub const HOVER: Heading = Heading(HOVER_DEGREES);
    pub const EAST: Heading = Heading(0);
    pub const NORTH: Heading = Heading(90);
    pub const WEST: Heading = Heading(180);
    pub const SOUTH: Heading = Heading(270);

    /// Round an arbitrary angle (degrees, any range) to the nearest valid
    /// heading.  Halfway cases round up, so 5° becomes 10° and 355° wraps
    /// to 0°.
    pub fn from_degrees(degrees: f64) -> Heading {
        let step = f64::from(HEADING_RESOLUTION);
        let rounded = ((degrees / step) + 0.5).floor() as i64 * i64::from(HEADING_RESOLUTION);
        Heading(rounded.rem_euclid(360) as i32)
    }

    /// Heading of the straight line from `from` to `to`.
    ///
    /// Coincident points give 0°; callers check arrival before asking.
    pub fn toward(from: LngLat, to: LngLat) -> Heading {
        let theta = (to.lat - from.lat).atan2(to.lng - from.lng).to_degrees();
        Heading::from_degrees(theta)
    }

    /// Parse a raw integer as written in flight logs.  `None` unless the value
    /// is `-999` or a multiple of 10 in `[0, 350]`.
    pub fn from_raw(raw: i32) -> Option<Heading> {
        let ok = raw == HOVER_DEGREES
            || ((0..360).contains(&raw) && raw % HEADING_RESOLUTION == 0);
        ok.then_some(Heading(raw))
    }

    /// Rotate by `delta` degrees (positive = counter-clockwise).  Hover is
    /// left unchanged.
    #[inline]
    pub fn rotated(self, delta: i32) -> Heading {
        if self.is_hover() {
            return self;
        }
        Heading((self.0 + delta).rem_euclid(360))
    }

    #[inline]
    pub fn is_hover(self) -> bool {
        self.0 == HOVER_DEGREES
    }

    /// Raw degree value: `0..=350` or `-999`.
    #[inline]
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Angle in radians, or `None` for hover.
    #[inline]
    pub fn radians(self) -> Option<f64> {
        (!self.is_hover()).then(|| f64::from(self.0).to_radians())
    }

    /// All 36 flying headings in ascending order.
    pub fn compass() -> impl Iterator<Item = Heading> {
        (0..360).step_by(HEADING_RESOLUTION as usize).map(Heading)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hover() {
            f.write_str("hover")
        } else {
            write!(f, "{}°", self.0)
        }
    }
}
