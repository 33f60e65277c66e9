// src/input/error.rs
use crate::math::error::MathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error while reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected end of input while reading {field}")]
    UnexpectedEnd { field: String },

    #[error("Invalid number for {field}: '{token}'")]
    InvalidNumber { field: String, token: String },

    #[error("Invalid segment count: '{token}' (expected a non-negative integer)")]
    InvalidCount { token: String },

    #[error(transparent)]
    Geometry(#[from] MathError),
}

pub type InputResult<T> = Result<T, InputError>;
