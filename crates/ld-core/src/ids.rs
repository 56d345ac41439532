//! Strongly typed identifier wrappers.
//!
//! IDs index straight into the world's flat arrays (`id.index()`), so they
//! are dense, assigned in insertion order, and never reused.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a named location.  `LocationId(0)` is always the home base.
    pub struct LocationId(u32);
}

typed_id! {
    /// Index of a no-fly zone in load order.
    pub struct ZoneId(u32);
}

impl LocationId {
    /// The home base, registered before any other location.
    pub const HOME: LocationId = LocationId(0);
}
