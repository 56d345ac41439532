//! `ld-orders` — the day's delivery orders.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`order`]  | `Order`, immutable order record                          |
//! | [`queue`]  | `OrderQueue`, highest delivery price first               |
//! | [`loader`] | `load_orders_csv`, `load_orders_reader`                   |
//! | [`error`]  | `OrderError`, `OrderResult<T>`                            |
//!
//! Orders name their shops and delivery address by location name.  The
//! caller registers those names (with coordinates) on the world map before
//! dispatching.

pub mod error;
pub mod loader;
pub mod order;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{OrderError, OrderResult};
pub use loader::{load_orders_csv, load_orders_reader};
pub use order::{MAX_SHOPS, Order};
pub use queue::OrderQueue;
