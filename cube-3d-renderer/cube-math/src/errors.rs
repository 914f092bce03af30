use thiserror::Error;

#[derive(Debug, Error)]
pub enum MathError {
    #[error("Expected {expected} elements but got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub(crate) type Result<T> = std::result::Result<T, MathError>;
