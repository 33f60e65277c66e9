// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Non-finite coordinate in {context}: {value}")]
    NonFiniteCoordinate { context: String, value: f64 },
}

pub type MathResult<T> = Result<T, MathError>;
