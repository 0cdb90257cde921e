//! Error types for castnet queries and graph construction.

use thiserror::Error;

/// Errors that can occur while building the cast graph or resolving a query.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
///
/// Note that an unreachable actor pair is *not* an error: the cast graph is
/// typically disconnected, so [`crate::engine::path::BaconResult::Unreachable`]
/// is a legitimate success value distinct from this taxonomy.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
    /// Referential integrity violation at graph-build time (e.g. a movie's
    /// cast references an actor id absent from the entity store), or a
    /// duplicate id in the loaded records. Fatal to that build attempt.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A query referenced an actor or movie id not present in the entity
    /// store. Surfaced immediately; no partial result is returned.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}
