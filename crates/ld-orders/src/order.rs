//! Order record.

use ld_core::LngLat;

use crate::{OrderError, OrderResult};

/// An order may need pickups from at most this many shops.
pub const MAX_SHOPS: usize = 2;

/// One customer order.  Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "derive-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub order_no:       String,
    /// Location name of the delivery address.
    pub deliver_to:     String,
    pub delivery_point: LngLat,
    /// Location names of the shops to pick up from, in listing order.
    pub shops:          Vec<String>,
    pub items:          Vec<String>,
    /// Delivery charge in pence.  Orders are served highest first.
    pub price_pence:    u32,
}

impl Order {
    /// Validate and build an order.  Fails unless there are one or two
    /// distinct shops.
    pub fn new(
        order_no:       impl Into<String>,
        deliver_to:     impl Into<String>,
        delivery_point: LngLat,
        shops:          Vec<String>,
        items:          Vec<String>,
        price_pence:    u32,
    ) -> OrderResult<Order> {
        let order_no = order_no.into();
        let invalid = |reason: String| OrderError::Invalid { order_no: order_no.clone(), reason };

        if shops.is_empty() || shops.len() > MAX_SHOPS {
            return Err(invalid(format!("needs 1 to {MAX_SHOPS} shops, got {}", shops.len())));
        }
        if shops.len() == 2 && shops[0] == shops[1] {
            return Err(invalid(format!("shop {:?} listed twice", shops[0])));
        }
        Ok(Order {
            deliver_to: deliver_to.into(),
            order_no,
            delivery_point,
            shops,
            items,
            price_pence,
        })
    }

    pub fn is_two_shop(&self) -> bool {
        self.shops.len() == 2
    }
}
