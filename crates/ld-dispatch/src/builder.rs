//! Fluent builder for constructing a [`Dispatcher`].

use ld_orders::Order;
use ld_world::{AStarPlanner, LegPlanner, WorldMap, WorldMapBuilder};

use crate::{DispatchConfig, DispatchError, DispatchResult, Dispatcher};

/// Register every order's delivery address on the world builder.
///
/// Shops are not registered here: orders carry only their names, so the
/// caller adds them with coordinates from its shop directory.
pub fn register_deliveries<'a>(
    builder: &mut WorldMapBuilder,
    orders:  impl IntoIterator<Item = &'a Order>,
) {
    for order in orders {
        builder.add_location(&order.deliver_to, order.delivery_point);
    }
}

/// Fluent builder for [`Dispatcher<P>`].
///
/// # Required inputs
///
/// - [`WorldMap`], built with every shop and delivery address registered
/// - [`DispatchConfig`]: move budget, escape strategy, A* limits
///
/// # Optional inputs
///
/// | Method        | Default                                   |
/// |---------------|-------------------------------------------|
/// | `.planner(p)` | `AStarPlanner` built from `config.astar`  |
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = DispatchBuilder::new(world, DispatchConfig::default())
///     .build()?;
/// ```
pub struct DispatchBuilder<P: LegPlanner = AStarPlanner> {
    world:   WorldMap,
    config:  DispatchConfig,
    planner: P,
}

impl DispatchBuilder<AStarPlanner> {
    pub fn new(world: WorldMap, config: DispatchConfig) -> Self {
        let planner = AStarPlanner::new(config.astar);
        Self { world, config, planner }
    }
}

impl<P: LegPlanner> DispatchBuilder<P> {
    /// Replace the leg planner used for unreliable routes.
    pub fn planner<Q: LegPlanner>(self, planner: Q) -> DispatchBuilder<Q> {
        DispatchBuilder { world: self.world, config: self.config, planner }
    }

    /// Validate the configuration and return a ready-to-run dispatcher.
    pub fn build(self) -> DispatchResult<Dispatcher<P>> {
        if self.config.initial_moves == 0 {
            return Err(DispatchError::Config("initial_moves must be positive".into()));
        }
        Ok(Dispatcher { world: self.world, planner: self.planner, config: self.config })
    }
}
