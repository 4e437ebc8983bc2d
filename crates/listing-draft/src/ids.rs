//! Identifiers for draft entities
//!
//! ULIDs keep identity stable across re-indexing: an order bump removed from
//! the middle of the list shifts display positions, never ids.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique file identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(pub Ulid);

impl FileId {
    /// Generate new file ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique order bump identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BumpId(pub Ulid);

impl BumpId {
    /// Generate new order bump ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for BumpId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BumpId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
