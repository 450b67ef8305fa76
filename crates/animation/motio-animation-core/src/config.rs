//! Numeric tolerances for the blending jobs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendingConfig {
    /// Squared-norm threshold below which the accumulated rotation is treated
    /// as degenerate and falls back to identity.
    pub degenerate_epsilon: f32,
}

impl Default for BlendingConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: 1e-16,
        }
    }
}

impl BlendingConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
