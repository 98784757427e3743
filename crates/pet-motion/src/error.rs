use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("friction {0} must be in (0, 1)")]
    Friction(f64),

    #[error("motion configuration error: {0}")]
    Config(String),
}

pub type MotionResult<T> = Result<T, MotionError>;
