//! Error taxonomy shared by the store, the update strategies, and the
//! request pipeline.

use thiserror::Error;

use crate::model::DeviceId;

/// Result alias used across the crate.
pub type DeviceResult<T> = Result<T, DeviceError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    /// One or more rule violations. Never reaches a handler.
    #[error("validation failed: {}", .0.join(" "))]
    ValidationFailed(Vec<String>),

    /// The referenced id has no record.
    #[error("Device with id {0} doesn't exist.")]
    NotFound(DeviceId),

    /// The store returned an absent or invalid result after a precondition
    /// check passed (a lost race or a store bug).
    #[error("{0}")]
    OperationFailed(String),

    /// Unrecognised enum value, e.g. an update mode name.
    #[error("unsupported value: {0}")]
    Unsupported(String),

    /// A required input was absent or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store's lock was poisoned by a panicking writer.
    #[error("device store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl DeviceError {
    /// Messages suitable for an [`ApiResult`](crate::ApiResult) error list.
    pub fn messages(&self) -> Vec<String> {
        match self {
            DeviceError::ValidationFailed(failures) => failures.clone(),
            other => vec![other.to_string()],
        }
    }
}
