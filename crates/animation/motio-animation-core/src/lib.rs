//! motio-animation-core: runtime transform blending.
//!
//! [`MotionBlendingJob`] merges weighted motion deltas (translation, rotation,
//! scale) into one normalized [`Transform`]. Jobs borrow their inputs for the
//! duration of a run and keep nothing afterwards.

pub mod config;
pub mod error;
pub mod math;
pub mod motion_blending;
pub mod transform;

pub use config::BlendingConfig;
pub use error::BlendingError;
pub use motion_blending::{MotionBlendingJob, MotionLayer};
pub use transform::Transform;
