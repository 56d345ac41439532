//! `ld-dispatch` — order scheduling and the run loop.
//!
//! # Run loop
//!
//! ```text
//! while let Some(order) = queue.pop():         // highest price first
//!   ① Admission: can the drone fly the order and still get home?
//!                  no  → log, skip (not retried)
//!   ② Itinerary: shops (cheapest visiting order), then delivery address
//!   ③ For each keypoint:
//!        fly there (route skeleton, or A* if the route is unreliable)
//!        after the delivery address: emit the completion record
//!        hover once
//! fly home (same route / A* mechanism, order = None)
//! ```
//!
//! `Stuck`, `NoSolution` and unknown-location errors abort the whole run.
//! Rejected orders are a normal outcome, not an error.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Forwards to `ld-world/parallel` for the graph build.   |
//! | `serde`    | Config, summary and record types become serde types.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let world = builder.build();
//! let dispatcher = DispatchBuilder::new(world, config).build()?;
//! let outcome = dispatcher.run(orders.into_iter().collect(), &mut NoopObserver)?;
//! println!("{}", outcome.summary);
//! ```

pub mod admission;
pub mod builder;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod observer;
pub mod summary;

#[cfg(test)]
mod tests;

pub use admission::{Admission, assess_order};
pub use builder::{DispatchBuilder, register_deliveries};
pub use config::DispatchConfig;
pub use dispatcher::{Dispatcher, RunOutcome};
pub use error::{DispatchError, DispatchResult};
pub use observer::{DeliveryRecord, DispatchObserver, NoopObserver};
pub use summary::RunSummary;
