// Error type shared by the engine, seed loading and configuration

use thiserror::Error;

/// Errors produced while building or driving an assignment engine
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Every courier is at maximum load
    #[error("All delivery persons are at maximum load")]
    NoCapacity,

    #[error("duplicate courier id {0}")]
    DuplicateCourier(String),

    #[error("duplicate order id {0}")]
    DuplicateOrder(String),

    #[error("courier {id} carries {current_load} orders but can only carry {max_load}")]
    OverCapacity {
        id: String,
        current_load: u32,
        max_load: u32,
    },

    #[error("{0} has a non-finite coordinate")]
    NonFiniteLocation(String),

    #[error("order {order} is already assigned to {courier}")]
    AlreadyAssigned { order: String, courier: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
