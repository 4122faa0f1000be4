//! Builder error types.
//!
//! All errors are raised during builder construction, before any record
//! state is set. A failed construction is unrecoverable for that attempt;
//! the caller supplies a corrected slug and constructs again.

use std::fmt;

use thiserror::Error;

/// The kind of entity a builder declares to the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    ContentType,
    Taxonomy,
}

impl EntityKind {
    /// Maximum slug length (in bytes) the host platform accepts for this kind.
    pub fn max_slug_len(self) -> usize {
        match self {
            EntityKind::ContentType => 20,
            EntityKind::Taxonomy => 32,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::ContentType => write!(f, "content type"),
            EntityKind::Taxonomy => write!(f, "taxonomy"),
        }
    }
}

/// Errors that can occur while validating a builder's slug.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// The slug is reserved by the host platform for its own use.
    #[error("{kind} slug '{slug}' is reserved by the host platform, use another")]
    ReservedIdentifier { kind: EntityKind, slug: String },

    /// The slug exceeds the host platform's length limit for the entity kind.
    #[error("{kind} slug '{slug}' is longer than {max} characters")]
    IdentifierTooLong {
        kind: EntityKind,
        slug: String,
        max: usize,
    },
}
