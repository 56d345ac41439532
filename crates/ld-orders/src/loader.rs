//! CSV order loader.
//!
//! # CSV format
//!
//! One row per order.  Multi-valued cells are separated by `;`.
//!
//! ```csv
//! order_no,deliver_to,lng,lat,shops,items,price_pence
//! 1ad5f1ff,pest.round.peanut,-3.1862,55.9457,Rudis;Bing Tea,Hummus;Flaming tiger latte,1290
//! 1b2c3d4e,linked.pads.cigar,-3.1869,55.9437,Soderberg Pavilion,Salami and Rocket,650
//! ```
//!
//! `price_pence` is the full delivery charge (items plus the flat fee).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ld_core::LngLat;

use crate::{Order, OrderError, OrderResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderRecord {
    order_no:    String,
    deliver_to:  String,
    lng:         f64,
    lat:         f64,
    shops:       String,
    items:       String,
    price_pence: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load all orders from a CSV file, in file order.
pub fn load_orders_csv(path: &Path) -> OrderResult<Vec<Order>> {
    let file = std::fs::File::open(path)?;
    load_orders_reader(file)
}

/// Like [`load_orders_csv`] but accepts any `Read` source.
pub fn load_orders_reader<R: Read>(reader: R) -> OrderResult<Vec<Order>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<OrderRecord>()
        .map(|row| {
            let r = row.map_err(|e| OrderError::Parse(e.to_string()))?;
            Order::new(
                r.order_no,
                r.deliver_to,
                LngLat::new(r.lng, r.lat),
                split_list(&r.shops),
                split_list(&r.items),
                r.price_pence,
            )
        })
        .collect()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
