//! Application layer errors

use thiserror::Error;

/// Everything that can go wrong between an inbound message and its reply.
///
/// All variants are recovered at the interpreter boundary and turned into a
/// user-visible reply; none of them is fatal to the process.
#[derive(Error, Debug)]
pub enum InterpreterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Could not resolve a location for sender {0}")]
    LocationUnresolved(String),

    #[error("No restaurant matched '{0}'")]
    RestaurantNotFound(String),

    #[error("Menu source unavailable: {0}")]
    Upstream(String),
}

/// Failures reported by a menu-data collaborator
#[derive(Error, Debug)]
pub enum MenuLookupError {
    #[error("No match for restaurant '{0}'")]
    NotFound(String),

    #[error("Menu source unavailable: {0}")]
    Unavailable(String),
}

/// Failures reported by a messaging-send collaborator
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
