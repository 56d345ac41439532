//! The `Dispatcher` and its run loop.

use tracing::{info, warn};

use ld_core::LngLat;
use ld_drone::{Drone, FlightRecorder, StepRecord};
use ld_orders::{Order, OrderQueue};
use ld_world::{LegPlanner, WorldMap};

use crate::{
    Admission, DeliveryRecord, DispatchConfig, DispatchObserver, DispatchResult, RunSummary,
    assess_order,
};

/// What a finished run leaves behind.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub summary: RunSummary,
    /// Every position the drone occupied, starting at home.
    pub path:    Vec<LngLat>,
}

/// Runs one day of deliveries with a single drone.
///
/// Create via [`DispatchBuilder`][crate::DispatchBuilder].
pub struct Dispatcher<P: LegPlanner> {
    pub(crate) world:   WorldMap,
    pub(crate) planner: P,
    pub(crate) config:  DispatchConfig,
}

/// Forwards drone steps to the observer.
struct StepForwarder<'o, O: DispatchObserver>(&'o mut O);

impl<O: DispatchObserver> FlightRecorder for StepForwarder<'_, O> {
    fn record(&mut self, step: &StepRecord) {
        self.0.on_step(step);
    }
}

impl<P: LegPlanner> Dispatcher<P> {
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Serve `orders` greedily, highest price first, then fly home.
    ///
    /// A fresh drone is placed at home with `config.initial_moves`.  The
    /// first fatal error aborts the run; the observer has seen every step
    /// up to that point.
    pub fn run<O: DispatchObserver>(
        &self,
        mut orders: OrderQueue,
        observer:   &mut O,
    ) -> DispatchResult<RunOutcome> {
        let world = &self.world;
        let mut drone = Drone::new(world, self.config.initial_moves, self.config.escape);
        let mut summary = RunSummary { orders_offered: orders.len(), ..RunSummary::default() };

        info!(orders = orders.len(), moves = self.config.initial_moves, "run starting");
        observer.on_run_start(orders.len(), self.config.initial_moves);

        while let Some(order) = orders.pop() {
            summary.offered_pence += u64::from(order.price_pence);

            let admission = assess_order(world, drone.location(), &order, drone.moves_left())?;
            if !admission.admitted() {
                warn!(
                    order = %order.order_no,
                    required = admission.required,
                    available = admission.available,
                    lost_pence = order.price_pence,
                    "not enough moves left, skipping order"
                );
                observer.on_order_rejected(&order, &admission);
                continue;
            }

            info!(
                order = %order.order_no,
                price = order.price_pence,
                required = admission.required,
                available = admission.available,
                "order admitted"
            );
            observer.on_order_admitted(&order, &admission);
            self.deliver(&mut drone, &order, admission, observer)?;

            summary.orders_delivered += 1;
            summary.revenue_pence += u64::from(order.price_pence);
        }

        drone.fly_to(world, &self.planner, world.home(), None, &mut StepForwarder(&mut *observer))?;

        summary.moves_left = drone.moves_left();
        summary.moves_used = self.config.initial_moves - drone.moves_left();
        summary.returned_home = drone.position().close_to(world.point(world.home()));
        info!(%summary, "run finished");

        let path = drone.into_path();
        observer.on_run_end(&summary, &path);
        Ok(RunOutcome { summary, path })
    }

    /// Fly an admitted order's itinerary, hovering once at every keypoint.
    fn deliver<O: DispatchObserver>(
        &self,
        drone:     &mut Drone,
        order:     &Order,
        admission: Admission,
        observer:  &mut O,
    ) -> DispatchResult<()> {
        let world = &self.world;
        let order_no = Some(order.order_no.as_str());
        drone.set_itinerary(admission.keypoints);

        while let Some(keypoint) = drone.next_keypoint() {
            drone.fly_to(world, &self.planner, keypoint, order_no, &mut StepForwarder(&mut *observer))?;
            if drone.remaining_keypoints() == 0 {
                observer.on_delivery(&DeliveryRecord {
                    order_no:     order.order_no.clone(),
                    delivered_to: order.deliver_to.clone(),
                    price_pence:  order.price_pence,
                });
            }
            drone.hover(order_no, &mut StepForwarder(&mut *observer))?;
        }
        Ok(())
    }
}
