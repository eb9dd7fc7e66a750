// Order model representing a delivery request

use crate::models::{CourierId, Location, OrderId, Priority};
use serde::{Deserialize, Serialize};

/// A delivery request, pending until a courier is assigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,

    /// Where the order has to be delivered
    pub destination: Location,

    /// Higher is more urgent
    pub priority: Priority,

    pub customer: String,

    /// Courier carrying the order, absent while pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<CourierId>,
}

impl Order {
    /// Creates a new pending order
    pub fn new<I, S>(id: I, destination: Location, priority: Priority, customer: S) -> Self
    where
        I: Into<String>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            destination,
            priority,
            customer: customer.into(),
            assigned_to: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new("O1", Location::new(50.0, 60.0), 3, "Alice");
        assert_eq!(order.customer, "Alice");
        assert!(!order.is_assigned());
    }

    #[test]
    fn test_assigned_to_omitted_while_pending() {
        let mut order = Order::new("O2", Location::new(30.0, 40.0), 1, "Bob");
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("assignedTo").is_none());

        order.assigned_to = Some("D1".to_string());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["assignedTo"], "D1");
    }

    #[test]
    fn test_parse_without_assigned_to() {
        let json = r#"{ "id": "O3", "destination": { "x": 70, "y": 80 }, "priority": 2, "customer": "Charlie" }"#;
        let order: Order = serde_json::from_str(json).unwrap();

        assert_eq!(order.destination, Location::new(70.0, 80.0));
        assert_eq!(order.priority, 2);
        assert!(!order.is_assigned());
    }
}
