//! # Persistence collaborators
//!
//! The editor never talks to a backend directly; it goes through the
//! [`ComponentStore`] and [`ImageStore`] traits. Store calls are
//! best-effort: the editor applies mutations optimistically and logs
//! failures without rolling back or retrying.
//!
//! [`MemoryStore`] is a complete in-process implementation used by tests
//! and by hosts that persist some other way.

mod error;
mod memory;
mod patch;
mod traits;
mod upload;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use patch::{ComponentPatch, ScreenPatch};
pub use traits::{ComponentStore, ImageStore};
pub use upload::DataUriUploader;
