// Greedy nearest-available-courier assignment

use crate::algorithms::{Assignment, OrderAssigner};
use crate::config::EngineConfig;
use crate::error::DispatchError;
use crate::models::{Courier, Location, Order, Priority};
use crate::utils::init_fleet::Seed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Index of the pending order to serve next: highest priority, earliest on ties
pub fn select_next_order(pending: &[Order]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .fold(None::<(usize, Priority)>, |best, (i, order)| match best {
            Some((_, priority)) if order.priority <= priority => best,
            _ => Some((i, order.priority)),
        })
        .map(|(i, _)| i)
}

/// Index of the available courier closest to `destination`, with its distance.
/// A later courier only replaces the current best when strictly closer, so the
/// first courier wins an exact tie.
pub fn select_nearest_courier(couriers: &[Courier], destination: Location) -> Option<(usize, f64)> {
    couriers
        .iter()
        .enumerate()
        .filter(|(_, courier)| courier.is_available())
        .map(|(i, courier)| (i, courier.location.distance_to(&destination)))
        .fold(None::<(usize, f64)>, |best, (i, distance)| match best {
            Some((_, best_distance)) if distance >= best_distance => best,
            _ => Some((i, distance)),
        })
}

/// Read-only copy of the engine state handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub couriers: Vec<Courier>,
    pub pending: Vec<Order>,
    pub assigned: Vec<Order>,
}

/// Owns the couriers and both order queues.
/// `assign_next_order` is the only operation that mutates them.
#[derive(Debug, Clone)]
pub struct AssignmentEngine {
    couriers: Vec<Courier>,
    pending: Vec<Order>,
    assigned: Vec<Order>,
    config: EngineConfig,
}

impl AssignmentEngine {
    /// Creates an engine after validating the seed data
    pub fn new(
        couriers: Vec<Courier>,
        orders: Vec<Order>,
        config: EngineConfig,
    ) -> Result<Self, DispatchError> {
        let mut courier_ids = HashSet::new();
        for courier in &couriers {
            if !courier_ids.insert(courier.id.as_str()) {
                return Err(DispatchError::DuplicateCourier(courier.id.clone()));
            }
            if courier.current_load > courier.max_load {
                return Err(DispatchError::OverCapacity {
                    id: courier.id.clone(),
                    current_load: courier.current_load,
                    max_load: courier.max_load,
                });
            }
            if !courier.location.is_finite() {
                return Err(DispatchError::NonFiniteLocation(courier.id.clone()));
            }
        }

        let mut order_ids = HashSet::new();
        for order in &orders {
            if !order_ids.insert(order.id.as_str()) {
                return Err(DispatchError::DuplicateOrder(order.id.clone()));
            }
            if let Some(courier) = &order.assigned_to {
                return Err(DispatchError::AlreadyAssigned {
                    order: order.id.clone(),
                    courier: courier.clone(),
                });
            }
            if !order.destination.is_finite() {
                return Err(DispatchError::NonFiniteLocation(order.id.clone()));
            }
        }

        debug!(
            couriers = couriers.len(),
            orders = orders.len(),
            relocate_on_assign = config.relocate_on_assign,
            "assignment engine created"
        );

        Ok(Self {
            couriers,
            pending: orders,
            assigned: Vec::new(),
            config,
        })
    }

    /// Creates an engine from a loaded seed
    pub fn from_seed(seed: Seed, config: EngineConfig) -> Result<Self, DispatchError> {
        Self::new(seed.couriers, seed.orders, config)
    }

    /// Creates an engine holding the built-in demo fleet
    pub fn with_demo_fleet(config: EngineConfig) -> Result<Self, DispatchError> {
        Self::from_seed(Seed::demo(), config)
    }

    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    /// Orders waiting for a courier, in insertion order
    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    /// Orders already handed out, in assignment order
    pub fn assigned(&self) -> &[Order] {
        &self.assigned
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Couriers that can still take an order
    pub fn available_couriers(&self) -> impl Iterator<Item = &Courier> {
        self.couriers.iter().filter(|courier| courier.is_available())
    }

    pub fn courier(&self, id: &str) -> Option<&Courier> {
        self.couriers.iter().find(|courier| courier.id == id)
    }

    /// Looks up an order in either queue
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.pending
            .iter()
            .chain(self.assigned.iter())
            .find(|order| order.id == id)
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            couriers: self.couriers.clone(),
            pending: self.pending.clone(),
            assigned: self.assigned.clone(),
        }
    }
}

impl OrderAssigner for AssignmentEngine {
    fn assign_next_order(&mut self) -> Result<Option<Assignment>, DispatchError> {
        let Some(order_index) = select_next_order(&self.pending) else {
            return Ok(None);
        };
        let destination = self.pending[order_index].destination;

        let Some((courier_index, distance)) = select_nearest_courier(&self.couriers, destination)
        else {
            warn!(
                order = %self.pending[order_index].id,
                "no courier has spare capacity"
            );
            return Err(DispatchError::NoCapacity);
        };

        // Nothing below can fail, so all three collections change together
        let mut order = self.pending.remove(order_index);
        let courier = &mut self.couriers[courier_index];
        courier.current_load += 1;
        if self.config.relocate_on_assign {
            courier.location = destination;
        }
        order.assigned_to = Some(courier.id.clone());

        info!(
            order = %order.id,
            priority = order.priority,
            courier = %courier.id,
            distance,
            load = courier.current_load,
            max_load = courier.max_load,
            "order assigned"
        );

        let assignment = Assignment {
            order_id: order.id.clone(),
            courier_id: courier.id.clone(),
            distance,
        };
        self.assigned.push(order);

        Ok(Some(assignment))
    }

    fn can_assign(&self) -> bool {
        !self.pending.is_empty()
    }
}
