//! Store error taxonomy.

use std::error::Error;
use std::fmt;

/// A failed collaborator call.
///
/// Nothing here is fatal: callers log the error, keep their optimistic
/// local state, and move on. A later reload may revert the change, which
/// is an accepted limitation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not be reached.
    Unavailable(String),
    /// The backend refused the write.
    Rejected(String),
    /// The referenced row does not exist.
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            Self::Rejected(msg) => write!(f, "store rejected request: {}", msg),
            Self::NotFound(msg) => write!(f, "not found: {}", msg),
        }
    }
}

impl Error for StoreError {}
