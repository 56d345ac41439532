//! Unit tests for ld-orders.

use ld_core::LngLat;

use crate::Order;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn order(no: &str, price: u32) -> Order {
    Order::new(
        no,
        "pest.round.peanut",
        LngLat::new(-3.1862, 55.9457),
        vec!["Rudis".into()],
        vec!["Hummus".into()],
        price,
    )
    .unwrap()
}

// ── Order ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod order {
    use super::*;
    use crate::OrderError;

    #[test]
    fn one_or_two_shops() {
        assert!(!order("a", 100).is_two_shop());
        let two = Order::new("b", "x", LngLat::new(0.0, 0.0), vec!["A".into(), "B".into()], vec![], 1)
            .unwrap();
        assert!(two.is_two_shop());
    }

    #[test]
    fn no_shops_rejected() {
        let err = Order::new("c", "x", LngLat::new(0.0, 0.0), vec![], vec![], 1);
        assert!(matches!(err, Err(OrderError::Invalid { order_no, .. }) if order_no == "c"));
    }

    #[test]
    fn three_shops_rejected() {
        let shops = vec!["A".into(), "B".into(), "C".into()];
        assert!(Order::new("d", "x", LngLat::new(0.0, 0.0), shops, vec![], 1).is_err());
    }

    #[test]
    fn repeated_shop_rejected() {
        let shops = vec!["A".into(), "A".into()];
        assert!(Order::new("e", "x", LngLat::new(0.0, 0.0), shops, vec![], 1).is_err());
    }
}

// ── OrderQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;
    use crate::OrderQueue;

    #[test]
    fn highest_price_first() {
        let mut q: OrderQueue = [order("low", 100), order("high", 900), order("mid", 500)]
            .into_iter()
            .collect();
        assert_eq!(q.len(), 3);
        assert_eq!(q.peek().unwrap().order_no, "high");
        assert_eq!(q.pop().unwrap().order_no, "high");
        assert_eq!(q.pop().unwrap().order_no, "mid");
        assert_eq!(q.pop().unwrap().order_no, "low");
        assert!(q.pop().is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn ties_keep_insertion_order() {
        let q: OrderQueue = [order("first", 500), order("second", 500), order("third", 500)]
            .into_iter()
            .collect();
        let nos: Vec<String> = q.into_iter().map(|o| o.order_no).collect();
        assert_eq!(nos, vec!["first", "second", "third"]);
    }

    #[test]
    fn total_value_sums_prices() {
        let q: OrderQueue = [order("a", 100), order("b", 250)].into_iter().collect();
        assert_eq!(q.total_value(), 350);
        let prices: Vec<u32> = q.iter().map(|o| o.price_pence).collect();
        assert_eq!(prices, vec![250, 100]);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{OrderError, load_orders_reader};

    const HEADER: &str = "order_no,deliver_to,lng,lat,shops,items,price_pence\n";

    #[test]
    fn parses_rows_and_lists() {
        let csv = format!(
            "{HEADER}\
             1ad5f1ff,pest.round.peanut,-3.1862,55.9457,Rudis; Bing Tea,Hummus;Flaming tiger latte,1290\n\
             1b2c3d4e,linked.pads.cigar,-3.1869,55.9437,Soderberg Pavilion,Salami and Rocket,650\n"
        );
        let orders = load_orders_reader(Cursor::new(csv)).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].shops, vec!["Rudis", "Bing Tea"]);
        assert_eq!(orders[0].items, vec!["Hummus", "Flaming tiger latte"]);
        assert_eq!(orders[0].price_pence, 1290);
        assert_eq!(orders[1].shops, vec!["Soderberg Pavilion"]);
        assert!((orders[1].delivery_point.lat - 55.9437).abs() < 1e-12);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = format!("{HEADER}x,y,not-a-number,55.9,Rudis,Hummus,100\n");
        assert!(matches!(load_orders_reader(Cursor::new(csv)), Err(OrderError::Parse(_))));
    }

    #[test]
    fn missing_shops_is_invalid() {
        let csv = format!("{HEADER}x,y,-3.18,55.9,,Hummus,100\n");
        assert!(matches!(load_orders_reader(Cursor::new(csv)), Err(OrderError::Invalid { .. })));
    }

    #[test]
    fn empty_file_has_no_orders() {
        assert!(load_orders_reader(Cursor::new(HEADER)).unwrap().is_empty());
    }
}
