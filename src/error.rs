use crate::location::LocationId;


/// Reasons a location candidate is rejected before it reaches a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Display label is empty or consists of whitespace only
    #[error("location name is empty")]
    EmptyName,

    /// Root path is empty or consists of whitespace only
    #[error("location path is empty")]
    EmptyPath,
}


/// Enumeration, that describes all errors in the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] ValidationError),

    #[error("location {0} is already registered")]
    DuplicateLocation(LocationId),

    #[error("location {0} is not registered")]
    UnknownLocation(LocationId),

    #[error("location identifier cannot change (expected {expected}, got {actual})")]
    IdentityChanged {
        expected: LocationId,
        actual: LocationId,
    },

    #[error("home directory cannot be determined")]
    NoHomeDirectory,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize: {0}")]
    Serialization(#[from] flexbuffers::SerializationError),

    #[error("failed to deserialize: {0}")]
    Deserialization(#[from] flexbuffers::DeserializationError),
}


/// Crate-specific alias for [`std::result::Result`] instantiated
/// with [`crate::error::Error`].
pub type Result<T> = std::result::Result<T, Error>;
