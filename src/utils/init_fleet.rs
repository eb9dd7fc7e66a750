use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::DispatchError;
use crate::models::{Courier, Location, Order};

/// Couriers and orders an engine starts from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    pub couriers: Vec<Courier>,
    pub orders: Vec<Order>,
}

impl Seed {
    /// The demo fleet: eight couriers and six pending orders
    pub fn demo() -> Self {
        Self {
            couriers: demo_couriers(),
            orders: demo_orders(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DispatchError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Load a seed from a JSON file shaped like `{ "couriers": [...], "orders": [...] }`
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Seed, DispatchError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let seed = Seed::from_json_str(&json)?;
    info!(
        path = %path.display(),
        couriers = seed.couriers.len(),
        orders = seed.orders.len(),
        "loaded seed"
    );
    Ok(seed)
}

pub fn demo_couriers() -> Vec<Courier> {
    vec![
        Courier::new("D1", "John", Location::new(10.0, 20.0), 1, 5),
        Courier::new("D2", "Sarah", Location::new(-10.0, 30.0), 2, 3),
        Courier::new("D3", "Mike", Location::new(5.0, 15.0), 3, 8),
        Courier::new("D4", "Emily", Location::new(-5.0, 25.0), 9, 10),
        Courier::new("D5", "Alex", Location::new(15.0, 35.0), 4, 7),
        Courier::new("D6", "Lisa", Location::new(-15.0, 10.0), 2, 6),
        Courier::new("D7", "Ryan", Location::new(8.0, -5.0), 5, 9),
        Courier::new("D8", "Jessica", Location::new(-20.0, 40.0), 3, 8),
    ]
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        Order::new("O1", Location::new(50.0, 60.0), 3, "Alice"),
        Order::new("O2", Location::new(30.0, 40.0), 1, "Bob"),
        Order::new("O3", Location::new(70.0, 80.0), 2, "Charlie"),
        Order::new("O4", Location::new(20.0, 50.0), 2, "David"),
        Order::new("O5", Location::new(55.0, 45.0), 3, "Eve"),
        Order::new("O6", Location::new(40.0, 30.0), 1, "Frank"),
    ]
}

// Random fleet for benchmarks and stress tests.
// Coordinates fall in [-extent, extent], priorities in 1..=3.
pub fn random_seed<R: Rng>(
    rng: &mut R,
    courier_count: usize,
    order_count: usize,
    extent: f64,
) -> Seed {
    let couriers = (0..courier_count)
        .map(|i| {
            let max_load = rng.gen_range(1..=10);
            let current_load = rng.gen_range(0..=max_load);
            let location = Location::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            );
            Courier::new(
                format!("D{}", i + 1),
                format!("Courier {}", i + 1),
                location,
                current_load,
                max_load,
            )
        })
        .collect();

    let orders = (0..order_count)
        .map(|i| {
            let destination = Location::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            );
            Order::new(
                format!("O{}", i + 1),
                destination,
                rng.gen_range(1..=3),
                format!("Customer {}", i + 1),
            )
        })
        .collect();

    Seed { couriers, orders }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_seed() {
        let seed = Seed::demo();
        assert_eq!(seed.couriers.len(), 8);
        assert_eq!(seed.orders.len(), 6);
        assert!(seed.couriers.iter().all(|c| c.current_load <= c.max_load));
        assert!(seed.orders.iter().all(|o| !o.is_assigned()));
    }

    #[test]
    fn test_seed_from_json_str() {
        let json = r#"{
            "couriers": [
                { "id": "D1", "name": "John", "location": { "x": 10, "y": 20 }, "currentLoad": 1, "maxLoad": 5 }
            ],
            "orders": [
                { "id": "O1", "destination": { "x": 50, "y": 60 }, "priority": 3, "customer": "Alice" }
            ]
        }"#;
        let seed = Seed::from_json_str(json).unwrap();

        assert_eq!(seed.couriers, vec![demo_couriers().remove(0)]);
        assert_eq!(seed.orders, vec![demo_orders().remove(0)]);
    }

    #[test]
    fn test_seed_json_missing_field() {
        let json = r#"{ "couriers": [ { "id": "D1", "name": "John" } ], "orders": [] }"#;
        assert!(matches!(Seed::from_json_str(json), Err(DispatchError::Json(_))));
    }

    #[test]
    fn test_random_seed_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let seed = random_seed(&mut rng, 20, 50, 100.0);

        assert_eq!(seed.couriers.len(), 20);
        assert_eq!(seed.orders.len(), 50);
        for courier in &seed.couriers {
            assert!(courier.current_load <= courier.max_load);
            assert!(courier.location.x.abs() <= 100.0 && courier.location.y.abs() <= 100.0);
        }
        for order in &seed.orders {
            assert!((1..=3).contains(&order.priority));
        }
    }
}
