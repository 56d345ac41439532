//! Plain data row types written by output backends.

use serde::Serialize;

use ld_dispatch::DeliveryRecord;
use ld_drone::StepRecord;

/// Order number written for steps flown outside any order (the final
/// return home).
pub const NO_ORDER: &str = "NoOrder";

/// One committed step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightPathRow {
    pub order_no: String,
    pub from_lng: f64,
    pub from_lat: f64,
    /// Heading in degrees; `-999` for a hover.
    pub angle:    i32,
    pub to_lng:   f64,
    pub to_lat:   f64,
}

impl From<&StepRecord> for FlightPathRow {
    fn from(step: &StepRecord) -> Self {
        Self {
            order_no: step.order.clone().unwrap_or_else(|| NO_ORDER.to_owned()),
            from_lng: step.from.lng,
            from_lat: step.from.lat,
            angle:    step.heading.degrees(),
            to_lng:   step.to.lng,
            to_lat:   step.to.lat,
        }
    }
}

/// One completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRow {
    pub order_no:      String,
    pub delivered_to:  String,
    pub cost_in_pence: u32,
}

impl From<&DeliveryRecord> for DeliveryRow {
    fn from(d: &DeliveryRecord) -> Self {
        Self {
            order_no:      d.order_no.clone(),
            delivered_to:  d.delivered_to.clone(),
            cost_in_pence: d.price_pence,
        }
    }
}
