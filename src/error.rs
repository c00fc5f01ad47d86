//! Error types for the engine
//!
//! Every failure carries a classified kind and the source location that raised it.
//! Locations are captured with `#[track_caller]`, so constructing an error inside a
//! helper still points at the line that asked for it.

use std::panic::Location;
use thiserror::Error;

/// Classified failure reasons
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user asked for the current operation to stop
    #[error("operation aborted by user")]
    UserAbort,

    /// A low-level fault with no better classification (I/O and the like)
    #[error("unrecognized fault: {0}")]
    UnrecognizedFault(String),

    /// A service exists in the interface but is not provided by this engine
    #[error("not implemented: {0}")]
    Unimplemented(String),

    /// A caller passed a malformed or out-of-range value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An algorithmic invariant was violated
    #[error("internal error: {0}")]
    Internal(String),

    /// A resource could not be obtained
    #[error("resource acquisition failed: {0}")]
    ResourceAcquisition(String),

    /// An object could not be constructed from its inputs
    #[error("constructor failed: {0}")]
    ConstructorFailed(String),

    /// The operation is not allowed in the current state
    #[error("illegal operation: {0}")]
    IllegalOperation(String),
}

/// An error kind together with where it was raised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (at {location})")]
pub struct EngineError {
    kind: ErrorKind,
    location: &'static Location<'static>,
}

impl EngineError {
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        EngineError {
            kind,
            location: Location::caller(),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    #[track_caller]
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameter(message.into()))
    }

    #[track_caller]
    pub fn illegal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalOperation(message.into()))
    }

    #[track_caller]
    pub fn constructor_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConstructorFailed(message.into()))
    }

    #[track_caller]
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unimplemented(message.into()))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl From<std::io::Error> for EngineError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        EngineError::new(ErrorKind::UnrecognizedFault(err.to_string()))
    }
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
