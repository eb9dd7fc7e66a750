// Courier model representing a delivery person with a bounded load

use crate::models::{CourierId, Load, Location};
use serde::{Deserialize, Serialize};

/// Represents a courier that carries orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    /// Unique identifier for the courier
    pub id: CourierId,

    /// Display name
    pub name: String,

    /// Current position of the courier
    pub location: Location,

    /// Number of orders currently carried
    pub current_load: Load,

    /// Capacity, fixed for the courier's lifetime
    pub max_load: Load,
}

impl Courier {
    /// Creates a new courier
    pub fn new<I, S>(id: I, name: S, location: Location, current_load: Load, max_load: Load) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            location,
            current_load,
            max_load,
        }
    }

    /// Checks if the courier can take another order
    pub fn is_available(&self) -> bool {
        self.current_load < self.max_load
    }

    /// Remaining number of orders the courier can take
    pub fn spare_capacity(&self) -> Load {
        self.max_load.saturating_sub(self.current_load)
    }

    /// Fraction of capacity in use, 0.0 for a courier without capacity
    pub fn load_ratio(&self) -> f64 {
        if self.max_load == 0 {
            return 0.0;
        }
        self.current_load as f64 / self.max_load as f64
    }
}
