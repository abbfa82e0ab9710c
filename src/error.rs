use thiserror::Error;

/// Errors returned by fallible map lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested key is not stored in the map.
    #[error("key not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
