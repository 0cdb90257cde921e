//! # castnet
//!
//! Models the film industry as a bipartite graph of actors and movies and
//! answers three analytical questions over it:
//!
//! - the shortest co-appearance distance ("Bacon number") between two actors,
//!   with a witnessing path of alternating actors and movies;
//! - a global ranking of actors by mean Bacon number across the population;
//! - movie recommendations scored by cast overlap, with optional release-date
//!   and rating filters.
//!
//! The graph is built once per session from read-only entity records and
//! shared across all queries; every query is a fresh synchronous traversal.
//! Data ingestion and presentation live outside this crate and talk to it
//! only through [`EntityStore`] records and the result types re-exported
//! here.
//!
//! ```rust
//! use castnet::{build_network, ActorRecord, MovieRecord, bacon_number};
//!
//! let actors = ["a", "b", "c"]
//!     .map(|id| ActorRecord { id: id.into(), name: id.into() })
//!     .to_vec();
//! let movies = vec![
//!     MovieRecord {
//!         id: "m1".into(), title: "M1".into(), release_year: 1999,
//!         rating: Some(7.2), cast: vec!["a".into(), "b".into()],
//!     },
//!     MovieRecord {
//!         id: "m2".into(), title: "M2".into(), release_year: 2004,
//!         rating: None, cast: vec!["b".into(), "c".into()],
//!     },
//! ];
//!
//! let graph = build_network(actors, movies).unwrap();
//! let result = bacon_number(&graph, "a", "c").unwrap();
//! assert_eq!(result.distance(), Some(2));
//! ```

pub mod engine;

pub use engine::errors::GraphError;
pub use engine::graph::{CastGraph, GraphNode};
pub use engine::path::{bacon_number, bacon_number_filtered, BaconPath, BaconResult};
pub use engine::rank::{
    average_bacon_number, rank_actors, rank_actors_cancellable, RankingEntry,
};
pub use engine::recommend::{
    recommend, score_candidates, top_recommendations, FilterSpec, Recommendation, Reference,
};
pub use engine::store::{Actor, ActorId, ActorRecord, EntityStore, Movie, MovieId, MovieRecord};

use std::sync::Arc;

/// Builds the entity store and cast graph from loader records in one step.
///
/// This is a convenience function combining [`EntityStore::from_records`] and
/// [`CastGraph::build`]; both referential-integrity checks run, so any bad
/// record surfaces here as [`GraphError::InvalidData`].
pub fn build_network(
    actors: Vec<ActorRecord>,
    movies: Vec<MovieRecord>,
) -> Result<CastGraph, GraphError> {
    let store = EntityStore::from_records(actors, movies)?;
    CastGraph::build(Arc::new(store))
}
