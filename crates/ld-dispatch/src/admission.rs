//! Order admission.
//!
//! An order is admitted iff the drone can fly it from where it is now, hover
//! once at every keypoint, and still get home:
//!
//! ```text
//! one shop S:   c(here,S) + c(S,D) + c(D,home) + 2
//! ```
//!
//! For two shops A and B the visiting order is chosen by comparing
//! `c(here,A) + c(D,B)` against `c(here,B) + c(D,A)`: the shop nearer the
//! start goes first and the one nearer the delivery address goes last.
//! Ties keep the listed order.  The required total is then
//! `c(here,first) + c(D,last) + c(A,B) + c(D,home) + 3`.
//!
//! Costs are the precomputed graph estimates, not the moves the flight will
//! actually take.

use ld_core::LocationId;
use ld_orders::{MAX_SHOPS, Order, OrderError};
use ld_world::WorldMap;

use crate::DispatchResult;

/// Outcome of checking one order against the remaining budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Admission {
    /// Shops in visiting order, then the delivery address.
    pub keypoints: Vec<LocationId>,
    /// Estimated moves to complete the order and return home.
    pub required:  u32,
    /// Moves the drone has left.
    pub available: u32,
}

impl Admission {
    /// Inclusive: a budget exactly equal to the requirement is enough.
    pub fn admitted(&self) -> bool {
        self.required <= self.available
    }
}

/// Work out the itinerary and requirement for `order` from location `here`.
pub fn assess_order(
    world:     &WorldMap,
    here:      LocationId,
    order:     &Order,
    available: u32,
) -> DispatchResult<Admission> {
    let home = world.home();
    let delivery = world.id_of(&order.deliver_to)?;
    let shops = order
        .shops
        .iter()
        .map(|name| world.id_of(name))
        .collect::<Result<Vec<_>, _>>()?;
    let c = |a: LocationId, b: LocationId| world.cost_between(a, b);

    let (keypoints, required) = match shops.as_slice() {
        &[a, b] => {
            let (first, last) = if c(here, a) + c(delivery, b) > c(here, b) + c(delivery, a) {
                (b, a)
            } else {
                (a, b)
            };
            let required = c(here, first) + c(delivery, last) + c(a, b) + c(delivery, home) + 3;
            (vec![first, last, delivery], required)
        }
        &[shop] => {
            let required = c(here, shop) + c(shop, delivery) + c(delivery, home) + 2;
            (vec![shop, delivery], required)
        }
        other => {
            return Err(OrderError::Invalid {
                order_no: order.order_no.clone(),
                reason:   format!("needs 1 to {MAX_SHOPS} shops, got {}", other.len()),
            }
            .into());
        }
    };

    Ok(Admission { keypoints, required, available })
}
