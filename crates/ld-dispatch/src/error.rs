use ld_drone::DroneError;
use ld_orders::OrderError;
use ld_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("drone error: {0}")]
    Drone(#[from] DroneError),

    #[error("order error: {0}")]
    Order(#[from] OrderError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
