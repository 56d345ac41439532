//! `ld-world` — the drone's knowledge of the world and how to cross it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`world`]   | `WorldMap`, `WorldMapBuilder`, `Route`                     |
//! | [`graph`]   | `RouteGraph` (Floyd–Warshall matrices), `GraphConfig`       |
//! | [`zones`]   | `NoFlyZones` (polygons + R-tree of bounding boxes)          |
//! | [`planner`] | `LegPlanner` trait, `AStarPlanner`, `AStarConfig`           |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                              |
//!
//! # Lifecycle
//!
//! Locations and no-fly zones are registered on a [`WorldMapBuilder`].
//! `build()` computes the pairwise weights and runs Floyd–Warshall, so a
//! [`WorldMap`] can always answer route and cost queries.  Adding a location
//! afterwards means building a new map.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Pairwise edge weights are computed with `rayon`.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and routes.   |

pub mod error;
pub mod graph;
pub mod planner;
pub mod world;
pub mod zones;


pub use error::{WorldError, WorldResult};
pub use graph::{GraphConfig, RouteGraph};
pub use planner::{AStarConfig, AStarPlanner, LegPlanner};
pub use world::{HOME_NAME, HOME_POINT, Route, WorldMap, WorldMapBuilder};
pub use zones::NoFlyZones;
