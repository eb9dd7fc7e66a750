// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::nearest_courier::{AssignmentEngine, EngineSnapshot};
pub use algorithms::{Assignment, OrderAssigner};
pub use config::EngineConfig;
pub use error::DispatchError;
pub use models::{Courier, Location, Order};
