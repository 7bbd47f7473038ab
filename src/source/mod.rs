//! Snapshot source abstraction layer
//!
//! Each place a session document can come from (file, HTTP, stdin)
//! implements the Source trait; the loader turns raw text into a Snapshot.

pub(crate) mod file;
pub(crate) mod http;
pub(crate) mod loader;
pub(crate) mod registry;
pub(crate) mod stdin;

use crate::error::LoadError;

/// Snapshot source trait - one best-effort read per render cycle
pub(crate) trait Source {
    /// Human-readable origin, used in messages
    fn display_name(&self) -> String;

    /// Read the raw session document
    fn fetch(&self) -> Result<String, LoadError>;

    /// Build a `SourceUnavailable` error for this source
    fn unavailable(&self, reason: impl ToString) -> LoadError
    where
        Self: Sized,
    {
        LoadError::SourceUnavailable {
            source_name: self.display_name(),
            reason: reason.to_string(),
        }
    }
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn Source>;

pub(crate) use loader::load_snapshot;
pub(crate) use registry::source_from_arg;
