use thiserror::Error;

/// Contract violations detected when a scene or population is (re)built.
///
/// Frame updates never fail; everything that can go wrong is caught here,
/// before any element set is replaced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SceneError {
    #[error("{name} must be finite and > 0 (got {value})")]
    NonPositive { name: &'static str, value: f32 },

    #[error("scale range is invalid: min={min} max={max}")]
    ScaleRange { min: f32, max: f32 },

    #[error("palette is empty")]
    EmptyPalette,

    #[error("max_steps must be at least 1")]
    ZeroSteps,

    #[error("element count must be non-negative (got {0})")]
    NegativeCount(i64),

    #[error("the topper is a singleton and cannot form an instance group")]
    TopperGroup,

    #[error("no instance group at index {0}")]
    UnknownGroup(usize),

    #[error("invalid hex color {0:?}")]
    HexColor(String),
}

pub type Result<T> = std::result::Result<T, SceneError>;

/// Fails unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NonPositive { name, value })
    }
}
