use std::fmt::{self, Display};

/// Errors produced by payload constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Neither coordinates nor a location description were supplied.
    MissingLocation,
    /// Coordinates and a location description were both supplied.
    ConflictingLocation,
    /// The location description is empty after trimming.
    EmptyDescription,
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::MissingLocation => {
                write!(f, "alert carries neither coordinates nor a location description")
            }
            PayloadError::ConflictingLocation => {
                write!(f, "alert carries both coordinates and a location description")
            }
            PayloadError::EmptyDescription => {
                write!(f, "location description is empty")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

pub type Result<T> = std::result::Result<T, PayloadError>;
