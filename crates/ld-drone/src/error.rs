use ld_core::LngLat;
use ld_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DroneError {
    /// The move budget ran out before the leg's target was reached.
    #[error("drone stuck short of {target} with {moves_left} moves left")]
    Stuck { target: LngLat, moves_left: u32 },

    /// All 36 headings from this point are blocked.
    #[error("drone boxed in at {at}: every heading is blocked")]
    Boxed { at: LngLat },

    #[error("no leg target set")]
    NoTarget,

    #[error("leg planning failed: {0}")]
    World(#[from] WorldError),
}

pub type DroneResult<T> = Result<T, DroneError>;
