//! Editor error taxonomy.
//!
//! Only conditions the caller can act on become errors. Clamped geometry
//! is silent, and local recoverable conditions (empty clipboard on paste,
//! no selection on nudge) are no-ops, not errors.

use model::UnknownKindError;
use std::error::Error;
use std::fmt;
use store::StoreError;

#[derive(Clone, Debug, PartialEq)]
pub enum EditorError {
    /// An operation needed an active screen and none is loaded.
    NoActiveScreen,
    /// Component creation referenced a type not in the catalog.
    UnknownKind(UnknownKindError),
    /// A persistence call the operation depends on failed.
    Store(StoreError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveScreen => write!(f, "no active screen"),
            Self::UnknownKind(err) => write!(f, "{}", err),
            Self::Store(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoActiveScreen => None,
            Self::UnknownKind(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<UnknownKindError> for EditorError {
    fn from(err: UnknownKindError) -> Self {
        Self::UnknownKind(err)
    }
}

impl From<StoreError> for EditorError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
