//! `ld-drone` — the drone, its move budget, and how it takes each step.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                          |
//! |------------|-------------------------------------------------------------------|
//! | [`state`]  | `LegPhase`, `LegTarget`: per-leg progress                        |
//! | [`escape`] | `StepPlanner`, `EscapeStrategy`: heading choice around zones     |
//! | [`record`] | `StepRecord`, `FlightRecorder`: per-step flight log hook         |
//! | [`drone`]  | `Drone`: position, budget, itinerary, path record                |
//! | [`error`]  | `DroneError`, `DroneResult<T>`                                    |
//!
//! # Movement model
//!
//! Every committed step moves exactly `STEP_LENGTH` along a 10°-quantised
//! heading (or hovers in place) and costs exactly one move.  A leg runs
//! **Planning → Stepping → Arrived**:
//!
//! 1. [`Drone::set_target`] picks the leg's end point.  A target already
//!    within arrival tolerance completes the leg with no steps.
//! 2. Each [`Drone::step`] aims straight at the target.  If that hop is
//!    blocked, the [`StepPlanner`] rotates the heading 10° at a time until a
//!    legal hop is found.
//! 3. The leg ends when a step lands within arrival tolerance of the target.
//!
//! Legs whose precomputed route is unreliable are planned whole by a
//! [`LegPlanner`][ld_world::LegPlanner] and replayed with
//! [`Drone::execute_headings`].

pub mod drone;
pub mod error;
pub mod escape;
pub mod record;
pub mod state;


pub use drone::Drone;
pub use error::{DroneError, DroneResult};
pub use escape::{EscapeStrategy, StepPlanner, Turn};
pub use record::{FlightRecorder, NoopRecorder, StepRecord};
pub use state::{LegPhase, LegTarget};
