pub mod nearest_courier;

// Common algorithm traits
use crate::error::DispatchError;
use crate::models::{CourierId, OrderId};
use serde::{Deserialize, Serialize};

/// Outcome of a single successful assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub order_id: OrderId,
    pub courier_id: CourierId,

    /// Distance from the courier to the destination at selection time
    pub distance: f64,
}

/// Trait for engines that hand pending orders to couriers one at a time
pub trait OrderAssigner {
    /// Assign the next pending order.
    /// Returns `Ok(None)` when nothing is pending.
    fn assign_next_order(&mut self) -> Result<Option<Assignment>, DispatchError>;

    /// Whether there is anything left to assign
    fn can_assign(&self) -> bool;

    /// Keep assigning until the queue is empty or couriers run out of capacity
    fn assign_all(&mut self) -> Result<Vec<Assignment>, DispatchError> {
        let mut assignments = Vec::new();
        while let Some(assignment) = self.assign_next_order()? {
            assignments.push(assignment);
        }
        Ok(assignments)
    }
}
