//! Blender error types

use thiserror::Error;

use shared::{ActionKind, ValidationError};

/// Failure talking to the optimization service
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Solver unreachable: {message}")]
    Transport { message: String },

    #[error("Solver answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Undecodable solver response: {message}")]
    Decode { message: String },
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum BlenderError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Optimization request failed: {0}")]
    Request(#[from] RequestError),

    #[error("A {action} action is already in flight")]
    ActionInFlight { action: ActionKind },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl BlenderError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }
}

pub type BlenderResult<T> = Result<T, BlenderError>;
