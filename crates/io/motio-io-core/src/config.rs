//! Sizing configuration for self-allocated streams.

use serde::{Deserialize, Serialize};

/// Largest logical size an in-memory stream may reach. Offsets are kept
/// within `i32` so serialized positions stay portable.
pub const DEFAULT_MAX_SIZE: usize = i32::MAX as usize;

/// Growth limits for [`MemoryStream`](crate::MemoryStream).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Capacity of the first allocation. Later growth doubles from here.
    pub min_capacity: usize,

    /// Hard cap on capacity; writes past it are truncated.
    pub max_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            min_capacity: 256,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl StreamConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
