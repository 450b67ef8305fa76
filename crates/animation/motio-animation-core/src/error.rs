//! Error types for the blending jobs.

/// Reasons a job refuses to run.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlendingError {
    /// No output transform was provided.
    #[error("blending job has no output transform")]
    MissingOutput,

    /// A layer slot is present but points at no transform.
    #[error("layer {index} has no transform")]
    MissingLayerTransform { index: usize },
}
