//! # Entity Store
//!
//! Canonical [`Actor`] and [`Movie`] rows plus lookup indexes from external
//! string ids to dense internal ids.
//!
//! The store is populated once at load time from already-parsed records and
//! is treated as read-only by everything downstream: the cast graph, the path
//! engine, the ranker, and the recommendation engine all borrow it. Any change
//! to the underlying data means rebuilding the store and graph wholesale.
//!
//! Dense ids ([`ActorId`], [`MovieId`]) are assigned in record order and
//! implement `Ord`, giving every traversal a stable, deterministic iteration
//! order.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::engine::errors::GraphError;

/// A unique identifier for an actor in the entity store.
///
/// Uses u32 internally for efficient storage and indexing; implements
/// Ord/PartialOrd for stable, deterministic iteration.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

/// A unique identifier for a movie in the entity store.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieId(pub u32);

/// Loader input: one actor row with its external id and display name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorRecord {
    /// External unique id (often the actor's name in the source data).
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Loader input: one movie row.
///
/// Release dates are modeled as integer years; the source data carries no
/// finer granularity. A missing rating stays `None` and is excluded whenever
/// a rating filter is applied.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieRecord {
    /// External unique id (often the title in the source data).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Release year.
    pub release_year: i32,
    /// Rating on the source scale (e.g. 0.0..=10.0), absent when unknown.
    pub rating: Option<f64>,
    /// External ids of the cast members. Must resolve against the actor set
    /// when the cast graph is built.
    pub cast: Vec<String>,
}

/// A canonical actor row.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: ActorId,
    pub key: Arc<str>,
    pub name: Arc<str>,
}

/// A canonical movie row. The cast is kept as raw external ids here; the
/// resolved, sorted adjacency lives in [`crate::engine::graph::CastGraph`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    pub id: MovieId,
    pub key: Arc<str>,
    pub title: Arc<str>,
    pub release_year: i32,
    pub rating: Option<f64>,
    pub cast: Vec<Arc<str>>,
}

/// Read-only store of canonical actor and movie rows with O(1) id lookup.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_index: FxHashMap<Arc<str>, ActorId>,
    movie_index: FxHashMap<Arc<str>, MovieId>,
}

impl EntityStore {
    /// Builds a store from loader records, assigning dense ids in record
    /// order.
    ///
    /// Fails with [`GraphError::InvalidData`] on a duplicate actor or movie
    /// id; referential integrity of cast lists is checked later, at graph
    /// build time.
    pub fn from_records(
        actors: Vec<ActorRecord>,
        movies: Vec<MovieRecord>,
    ) -> Result<Self, GraphError> {
        let mut store = EntityStore {
            actors: Vec::with_capacity(actors.len()),
            movies: Vec::with_capacity(movies.len()),
            actor_index: FxHashMap::default(),
            movie_index: FxHashMap::default(),
        };

        for record in actors {
            let id = ActorId(store.actors.len() as u32);
            let key: Arc<str> = Arc::from(record.id.as_str());
            if store.actor_index.insert(key.clone(), id).is_some() {
                return Err(GraphError::InvalidData(format!(
                    "duplicate actor id '{}'",
                    record.id
                )));
            }
            store.actors.push(Actor {
                id,
                key,
                name: Arc::from(record.name.as_str()),
            });
        }

        for record in movies {
            let id = MovieId(store.movies.len() as u32);
            let key: Arc<str> = Arc::from(record.id.as_str());
            if store.movie_index.insert(key.clone(), id).is_some() {
                return Err(GraphError::InvalidData(format!(
                    "duplicate movie id '{}'",
                    record.id
                )));
            }
            store.movies.push(Movie {
                id,
                key,
                title: Arc::from(record.title.as_str()),
                release_year: record.release_year,
                rating: record.rating,
                cast: record.cast.iter().map(|c| Arc::from(c.as_str())).collect(),
            });
        }

        Ok(store)
    }

    /// Looks up an actor row by dense id.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.0 as usize)
    }

    /// Looks up a movie row by dense id.
    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(id.0 as usize)
    }

    /// Resolves an external actor id to its dense id.
    pub fn actor_id(&self, key: &str) -> Option<ActorId> {
        self.actor_index.get(key).copied()
    }

    /// Resolves an external movie id to its dense id.
    pub fn movie_id(&self, key: &str) -> Option<MovieId> {
        self.movie_index.get(key).copied()
    }

    /// Resolves an external actor id, surfacing [`GraphError::UnknownEntity`]
    /// when absent.
    pub fn require_actor(&self, key: &str) -> Result<ActorId, GraphError> {
        self.actor_id(key)
            .ok_or_else(|| GraphError::UnknownEntity(format!("actor '{}'", key)))
    }

    /// Resolves an external movie id, surfacing [`GraphError::UnknownEntity`]
    /// when absent.
    pub fn require_movie(&self, key: &str) -> Result<MovieId, GraphError> {
        self.movie_id(key)
            .ok_or_else(|| GraphError::UnknownEntity(format!("movie '{}'", key)))
    }

    /// Number of actors in the store.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Number of movies in the store.
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// All actor rows in dense-id order.
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// All movie rows in dense-id order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }
}
