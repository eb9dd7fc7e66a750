// Models module - exports all model types

mod courier;
mod location;
mod order;

// Re-export model types
pub use self::courier::Courier;
pub use self::location::Location;
pub use self::order::Order;

// Common type aliases for improved code readability
pub type CourierId = String;
pub type OrderId = String;
pub type Load = u32;
pub type Priority = u32;
