//! Integration tests for ld-dispatch.

use ld_core::{Heading, LngLat, Polygon, STEP_LENGTH};
use ld_drone::StepRecord;
use ld_orders::{Order, OrderQueue};
use ld_world::{HOME_POINT, LegPlanner, WorldError, WorldMap, WorldMapBuilder, WorldResult};

use crate::{
    Admission, DeliveryRecord, DispatchBuilder, DispatchConfig, DispatchObserver, RunSummary,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn at(dlng: f64, dlat: f64) -> LngLat {
    LngLat::new(HOME_POINT.lng + dlng, HOME_POINT.lat + dlat)
}

fn order(no: &str, deliver_to: &str, point: LngLat, shops: &[&str], price: u32) -> Order {
    Order::new(
        no,
        deliver_to,
        point,
        shops.iter().map(|s| s.to_string()).collect(),
        vec!["Sandwich".into()],
        price,
    )
    .unwrap()
}

fn config(moves: u32) -> DispatchConfig {
    DispatchConfig { initial_moves: moves, ..DispatchConfig::default() }
}

/// Home, a kitchen at the same spot, and a doorstep `steps` step lengths
/// due east.
fn east_world_at(steps: f64) -> (WorldMap, Order) {
    let doorstep = at(steps * STEP_LENGTH, 0.0);
    let o = order("e2e", "Doorstep East", doorstep, &["Home Kitchen"], 100);
    let mut b = WorldMapBuilder::new();
    b.add_location("Home Kitchen", HOME_POINT);
    crate::register_deliveries(&mut b, [&o]);
    (b.build(), o)
}

/// The doorstep sits a quarter step past 10 step lengths, so arrival after
/// exactly 10 steps does not hinge on rounding.  See
/// `doorstep_exactly_ten_steps_east` for the boundary case.
fn east_world() -> (WorldMap, Order) {
    east_world_at(10.25)
}

/// Shop B near home, shop A near the delivery address D, all west of home.
fn two_shop_world() -> WorldMap {
    let mut b = WorldMapBuilder::new();
    b.add_location("A", at(-0.0025, 0.0005));
    b.add_location("B", at(-0.0005, 0.0));
    b.add_location("D", at(-0.003, 0.0));
    b.build()
}

/// Home and a target behind a north–south wall.
fn walled_world() -> WorldMap {
    let mut b = WorldMapBuilder::new();
    b.add_location("Home Kitchen", HOME_POINT);
    b.add_location("Behind Wall", at(-0.003, 0.0));
    let (min, max) = (at(-0.0016, -0.0005), at(-0.0014, 0.0005));
    b.add_no_fly_zone(
        Polygon::new(vec![min, LngLat::new(max.lng, min.lat), max, LngLat::new(min.lng, max.lat)])
            .unwrap(),
    );
    b.build()
}

/// Records every callback.
#[derive(Default)]
struct Recorder {
    started:    Option<(usize, u32)>,
    steps:      Vec<StepRecord>,
    admitted:   Vec<String>,
    rejected:   Vec<(String, u32, u32)>,
    deliveries: Vec<DeliveryRecord>,
    ended:      Option<(RunSummary, Vec<LngLat>)>,
}

impl DispatchObserver for Recorder {
    fn on_run_start(&mut self, orders: usize, moves: u32) {
        self.started = Some((orders, moves));
    }
    fn on_step(&mut self, step: &StepRecord) {
        self.steps.push(step.clone());
    }
    fn on_order_admitted(&mut self, order: &Order, _admission: &Admission) {
        self.admitted.push(order.order_no.clone());
    }
    fn on_order_rejected(&mut self, order: &Order, admission: &Admission) {
        self.rejected.push((order.order_no.clone(), admission.required, admission.available));
    }
    fn on_delivery(&mut self, delivery: &DeliveryRecord) {
        self.deliveries.push(delivery.clone());
    }
    fn on_run_end(&mut self, summary: &RunSummary, path: &[LngLat]) {
        self.ended = Some((summary.clone(), path.to_vec()));
    }
}

struct FailingPlanner;

impl LegPlanner for FailingPlanner {
    fn plan(&self, _world: &WorldMap, from: LngLat, to: LngLat) -> WorldResult<Vec<Heading>> {
        Err(WorldError::NoSolution { from, to, expanded: 0 })
    }
}

// ── Admission ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod admission {
    use super::*;
    use crate::{DispatchError, assess_order};

    #[test]
    fn single_shop_requirement() {
        let (world, o) = east_world();
        let a = assess_order(&world, world.home(), &o, 1000).unwrap();
        // 0 (kitchen is home) + 11 + 11 + 2 hovers
        assert_eq!(a.required, 24);
        let kitchen = world.id_of("Home Kitchen").unwrap();
        let doorstep = world.id_of("Doorstep East").unwrap();
        assert_eq!(a.keypoints, vec![kitchen, doorstep]);
    }

    #[test]
    fn exact_budget_is_admitted() {
        let (world, o) = east_world();
        assert!(assess_order(&world, world.home(), &o, 24).unwrap().admitted());
        assert!(!assess_order(&world, world.home(), &o, 23).unwrap().admitted());
    }

    #[test]
    fn two_shops_visit_nearer_shop_first() {
        let world = two_shop_world();
        let id = |n: &str| world.id_of(n).unwrap();
        let o = order("two", "D", world.point(id("D")), &["A", "B"], 500);
        let a = assess_order(&world, world.home(), &o, 1000).unwrap();
        assert_eq!(a.keypoints, vec![id("B"), id("A"), id("D")]);
        // c(home,B)=4 + c(D,A)=5 + c(A,B)=14 + c(D,home)=21 + 3 hovers
        assert_eq!(a.required, 47);
    }

    #[test]
    fn two_shops_keep_listed_order_when_it_is_cheaper() {
        let world = two_shop_world();
        let id = |n: &str| world.id_of(n).unwrap();
        let o = order("two", "D", world.point(id("D")), &["B", "A"], 500);
        let a = assess_order(&world, world.home(), &o, 1000).unwrap();
        assert_eq!(a.keypoints, vec![id("B"), id("A"), id("D")]);
        assert_eq!(a.required, 47);
    }

    #[test]
    fn unknown_shop_is_an_error() {
        let (world, _) = east_world();
        let o = order("x", "Doorstep East", HOME_POINT, &["Nowhere"], 1);
        let err = assess_order(&world, world.home(), &o, 1000);
        assert!(matches!(err, Err(DispatchError::World(WorldError::UnknownLocation(_)))));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::DispatchError;

    #[test]
    fn default_budget_is_1500() {
        let d = DispatchBuilder::new(WorldMapBuilder::new().build(), DispatchConfig::default())
            .build()
            .unwrap();
        assert_eq!(d.config().initial_moves, 1500);
    }

    #[test]
    fn zero_budget_rejected() {
        let result = DispatchBuilder::new(WorldMapBuilder::new().build(), config(0)).build();
        assert!(matches!(result, Err(DispatchError::Config(_))));
    }
}

// ── Whole runs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use super::*;
    use crate::{DispatchError, NoopObserver};
    use ld_drone::{DroneError, EscapeStrategy};

    #[test]
    fn single_order_end_to_end() {
        let (world, o) = east_world();
        let dispatcher = DispatchBuilder::new(world, config(1000)).build().unwrap();
        let mut rec = Recorder::default();

        let outcome = dispatcher.run(OrderQueue::from_iter([o]), &mut rec).unwrap();

        assert_eq!(rec.started, Some((1, 1000)));
        assert_eq!(rec.admitted, vec!["e2e"]);
        assert!(rec.rejected.is_empty());
        assert_eq!(
            rec.deliveries,
            vec![DeliveryRecord {
                order_no:     "e2e".into(),
                delivered_to: "Doorstep East".into(),
                price_pence:  100,
            }]
        );

        let for_order: Vec<&StepRecord> =
            rec.steps.iter().filter(|s| s.order.as_deref() == Some("e2e")).collect();
        let east = for_order.iter().filter(|s| s.heading == Heading::EAST).count();
        let hovers = for_order.iter().filter(|s| s.heading.is_hover()).count();
        assert_eq!(east, 10);
        assert_eq!(hovers, 2);
        assert_eq!(for_order.len(), 12);
        // Kitchen hover first, delivery hover last.
        assert!(for_order[0].heading.is_hover());
        assert!(for_order[11].heading.is_hover());

        let home_leg: Vec<&StepRecord> = rec.steps.iter().filter(|s| s.order.is_none()).collect();
        assert!((9..=10).contains(&home_leg.len()), "return took {}", home_leg.len());
        assert!(home_leg.iter().all(|s| s.heading == Heading::WEST));

        let s = &outcome.summary;
        assert_eq!(s.orders_offered, 1);
        assert_eq!(s.orders_delivered, 1);
        assert_eq!(s.revenue_pence, 100);
        assert_eq!(s.offered_pence, 100);
        assert_eq!(s.moves_used as usize, rec.steps.len());
        assert_eq!(s.moves_left, 1000 - s.moves_used);
        assert!(s.returned_home);
        assert!((s.captured_fraction() - 1.0).abs() < 1e-12);

        assert_eq!(outcome.path.first(), Some(&HOME_POINT));
        assert!(outcome.path.last().unwrap().close_to(HOME_POINT));
        assert_eq!(outcome.path.len(), rec.steps.len() + 1);
        let (ended, path) = rec.ended.unwrap();
        assert_eq!(ended, outcome.summary);
        assert_eq!(path, outcome.path);
    }

    #[test]
    fn doorstep_exactly_ten_steps_east() {
        // Arrival is strict `distance < ARRIVAL_TOLERANCE` and the tolerance
        // equals the step length.  After nine steps the summed float error
        // leaves the doorstep a hair under one step away, so the drone
        // arrives one step early, both out and back.
        let (world, o) = east_world_at(10.0);
        let dispatcher = DispatchBuilder::new(world, config(1000)).build().unwrap();
        let mut rec = Recorder::default();

        let outcome = dispatcher.run(OrderQueue::from_iter([o]), &mut rec).unwrap();

        let for_order: Vec<&StepRecord> =
            rec.steps.iter().filter(|s| s.order.as_deref() == Some("e2e")).collect();
        let east = for_order.iter().filter(|s| s.heading == Heading::EAST).count();
        let hovers = for_order.iter().filter(|s| s.heading.is_hover()).count();
        let home_leg = rec.steps.iter().filter(|s| s.order.is_none()).count();
        assert_eq!(east, 9);
        assert_eq!(hovers, 2);
        assert_eq!(home_leg, 9);
        assert_eq!(rec.deliveries.len(), 1);
        assert_eq!(outcome.summary.moves_used, 20);
        assert!(outcome.summary.returned_home);
    }

    #[test]
    fn exact_budget_run_completes() {
        let (world, o) = east_world();
        let dispatcher = DispatchBuilder::new(world, config(24)).build().unwrap();
        let outcome = dispatcher.run(OrderQueue::from_iter([o]), &mut NoopObserver).unwrap();
        assert_eq!(outcome.summary.orders_delivered, 1);
        assert!(outcome.summary.returned_home);
    }

    #[test]
    fn short_budget_rejects_and_stays_home() {
        let (world, o) = east_world();
        let dispatcher = DispatchBuilder::new(world, config(23)).build().unwrap();
        let mut rec = Recorder::default();
        let outcome = dispatcher.run(OrderQueue::from_iter([o]), &mut rec).unwrap();

        assert_eq!(rec.rejected, vec![("e2e".to_string(), 24, 23)]);
        assert!(rec.deliveries.is_empty());
        assert!(rec.steps.is_empty());
        assert_eq!(outcome.summary.orders_delivered, 0);
        assert_eq!(outcome.summary.offered_pence, 100);
        assert_eq!(outcome.summary.revenue_pence, 0);
        assert_eq!(outcome.summary.moves_used, 0);
        assert_eq!(outcome.summary.captured_fraction(), 0.0);
        assert!(outcome.summary.returned_home);
    }

    #[test]
    fn highest_price_served_first_and_rejections_are_not_retried() {
        let doorstep = at(10.25 * STEP_LENGTH, 0.0);
        let cheap = order("cheap", "Doorstep East", doorstep, &["Home Kitchen"], 100);
        let dear = order("dear", "Doorstep East", doorstep, &["Home Kitchen"], 900);
        let mut b = WorldMapBuilder::new();
        b.add_location("Home Kitchen", HOME_POINT);
        crate::register_deliveries(&mut b, [&cheap, &dear]);

        // The first order costs 24 estimated moves from home.  From the
        // doorstep the second needs 11 + 11 + 11 + 2 = 35, more than is left.
        let dispatcher = DispatchBuilder::new(b.build(), config(40)).build().unwrap();
        let mut rec = Recorder::default();
        let outcome = dispatcher.run(OrderQueue::from_iter([cheap, dear]), &mut rec).unwrap();

        assert_eq!(rec.admitted, vec!["dear"]);
        assert_eq!(rec.rejected.len(), 1);
        assert_eq!(rec.rejected[0].0, "cheap");
        assert_eq!(outcome.summary.orders_offered, 2);
        assert_eq!(outcome.summary.revenue_pence, 900);
        assert_eq!(outcome.summary.offered_pence, 1000);
        assert!((outcome.summary.captured_fraction() - 0.9).abs() < 1e-12);
        assert!(outcome.summary.returned_home);
    }

    #[test]
    fn unreliable_leg_uses_astar() {
        let world = walled_world();
        let target = world.point(world.id_of("Behind Wall").unwrap());
        let o = order("wall", "Behind Wall", target, &["Home Kitchen"], 700);
        let dispatcher = DispatchBuilder::new(world, config(1500)).build().unwrap();
        let mut rec = Recorder::default();

        let outcome = dispatcher.run(OrderQueue::from_iter([o]), &mut rec).unwrap();

        assert_eq!(outcome.summary.orders_delivered, 1);
        assert!(outcome.summary.returned_home);
        for s in rec.steps.iter().filter(|s| !s.heading.is_hover()) {
            assert!(!dispatcher.world().blocked(s.from, s.to), "illegal hop {} -> {}", s.from, s.to);
        }
    }

    #[test]
    fn momentum_strategy_also_delivers() {
        let world = walled_world();
        let target = world.point(world.id_of("Behind Wall").unwrap());
        let o = order("wall", "Behind Wall", target, &["Home Kitchen"], 700);
        let cfg = DispatchConfig { escape: EscapeStrategy::Momentum, ..config(1500) };
        let dispatcher = DispatchBuilder::new(world, cfg).build().unwrap();
        let outcome = dispatcher.run(OrderQueue::from_iter([o]), &mut NoopObserver).unwrap();
        assert_eq!(outcome.summary.orders_delivered, 1);
    }

    #[test]
    fn planner_failure_aborts_the_run() {
        let world = walled_world();
        let target = world.point(world.id_of("Behind Wall").unwrap());
        let o = order("wall", "Behind Wall", target, &["Home Kitchen"], 700);
        let dispatcher = DispatchBuilder::new(world, config(1500))
            .planner(FailingPlanner)
            .build()
            .unwrap();
        let mut rec = Recorder::default();

        let err = dispatcher.run(OrderQueue::from_iter([o]), &mut rec);

        assert!(matches!(
            err,
            Err(DispatchError::Drone(DroneError::World(WorldError::NoSolution { .. })))
        ));
        assert!(rec.deliveries.is_empty());
        assert!(rec.ended.is_none());
    }

    #[test]
    fn no_orders_means_no_moves() {
        let dispatcher =
            DispatchBuilder::new(WorldMapBuilder::new().build(), config(10)).build().unwrap();
        let outcome = dispatcher.run(OrderQueue::new(), &mut NoopObserver).unwrap();
        assert_eq!(outcome.summary, RunSummary {
            moves_left: 10,
            returned_home: true,
            ..RunSummary::default()
        });
        assert_eq!(outcome.path, vec![HOME_POINT]);
    }
}
