//! `ld-core` — foundational types for the lunch-drone planner.
//!
//! This crate is a dependency of every other `ld-*` crate.  It has no `ld-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`geo`]       | `LngLat`, step length, arrival tolerances                 |
//! | [`heading`]   | `Heading`, a 10°-quantised compass direction or hover      |
//! | [`region`]    | `Region`, confinement rectangle, `CENTRAL_AREA`          |
//! | [`polygon`]   | `Polygon`, `Bounds`, segment-intersection predicate       |
//! | [`ids`]       | `LocationId`, `ZoneId`                                    |
//! | [`error`]     | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |
//!
//! # Units
//!
//! The plane is treated as locally flat: longitude is the x axis, latitude
//! the y axis, and distances are plain Euclidean distances in degrees.

pub mod error;
pub mod geo;
pub mod heading;
pub mod ids;
pub mod polygon;
pub mod region;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{ARRIVAL_TOLERANCE, LngLat, STEP_LENGTH, VERY_CLOSE_TOLERANCE};
pub use heading::{HEADING_COUNT, HEADING_RESOLUTION, Heading};
pub use ids::{LocationId, ZoneId};
pub use polygon::{Bounds, Polygon, segments_intersect};
pub use region::Region;
