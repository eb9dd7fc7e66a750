// Engine configuration

use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for the assignment engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Move a courier to the order's destination once the order is assigned.
    /// Affects every later distance computation for that courier.
    pub relocate_on_assign: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            relocate_on_assign: true,
        }
    }
}

impl EngineConfig {
    /// Config that leaves courier locations untouched on assignment
    pub fn stationary() -> Self {
        Self {
            relocate_on_assign: false,
        }
    }

    /// Parses a config from JSON; missing fields fall back to the defaults
    pub fn from_json_str(json: &str) -> Result<Self, DispatchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DispatchError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
