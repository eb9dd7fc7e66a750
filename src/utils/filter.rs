// Text search and status filtering over order collections

use crate::models::Order;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which queue(s) a listing shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Assigned,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "pending" => Ok(FilterMode::Pending),
            "assigned" => Ok(FilterMode::Assigned),
            other => Err(format!("unknown filter mode: {}", other)),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterMode::All => "all",
            FilterMode::Pending => "pending",
            FilterMode::Assigned => "assigned",
        };
        f.write_str(name)
    }
}

/// Checks whether the order id or customer contains `query`, ignoring case
pub fn matches_query(order: &Order, query: &str) -> bool {
    let query = query.to_lowercase();
    order.id.to_lowercase().contains(&query) || order.customer.to_lowercase().contains(&query)
}

/// Orders whose id or customer contains `query`, ignoring case.
/// An empty query keeps every order.
pub fn filter_orders<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    if query.is_empty() {
        return orders.iter().collect();
    }
    orders
        .iter()
        .filter(|order| matches_query(order, query))
        .collect()
}

/// The order listing for a query and mode; `All` lists pending before assigned
pub fn displayed_orders<'a>(
    pending: &'a [Order],
    assigned: &'a [Order],
    query: &str,
    mode: FilterMode,
) -> Vec<&'a Order> {
    match mode {
        FilterMode::Pending => filter_orders(pending, query),
        FilterMode::Assigned => filter_orders(assigned, query),
        FilterMode::All => {
            let mut orders = filter_orders(pending, query);
            orders.extend(filter_orders(assigned, query));
            orders
        }
    }
}
