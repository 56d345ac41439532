//! Run observer trait for progress reporting and output collection.

use ld_core::LngLat;
use ld_drone::StepRecord;
use ld_orders::Order;

use crate::{Admission, RunSummary};

/// A completed delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryRecord {
    pub order_no:    String,
    /// Location name of the delivery address.
    pub delivered_to: String,
    pub price_pence: u32,
}

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait DispatchObserver {
    /// Called once before the first order is considered.
    fn on_run_start(&mut self, _orders: usize, _moves: u32) {}

    /// Called for every committed step, hovers included.
    fn on_step(&mut self, _step: &StepRecord) {}

    fn on_order_admitted(&mut self, _order: &Order, _admission: &Admission) {}

    /// The order would leave too few moves to get home.  It is skipped.
    fn on_order_rejected(&mut self, _order: &Order, _admission: &Admission) {}

    /// Called when the drone reaches an order's delivery address.
    fn on_delivery(&mut self, _delivery: &DeliveryRecord) {}

    /// Called once after the drone has flown home.  `path` is every position
    /// the drone occupied, starting at home.
    fn on_run_end(&mut self, _summary: &RunSummary, _path: &[LngLat]) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
