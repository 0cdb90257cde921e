//! # Cast Graph
//!
//! Bipartite graph over [`ActorId`] and [`MovieId`] nodes where an edge means
//! "acted in".
//!
//! ## Design
//!
//! Both adjacency views (filmography per actor, cast per movie) are built
//! together in a single pass over the movie rows, so the edge invariant
//! `a ∈ m.cast ⟺ m ∈ a.filmography` holds by construction and is never
//! mutated afterwards. The graph is arena-style: nodes are addressed by dense
//! id, not by mutual back-references, and adjacency lists are stored inline
//! via `SmallVec` and kept sorted ascending so every traversal sees a
//! deterministic neighbor order.
//!
//! Self-loops are unrepresentable: every edge connects an actor to a movie.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::engine::errors::GraphError;
use crate::engine::store::{ActorId, EntityStore, MovieId};

/// Maximum size for inline storage in adjacency SmallVecs.
const INLINE_VEC_SIZE: usize = 8;

type AdjacencyList<T> = SmallVec<[T; INLINE_VEC_SIZE]>;

/// A node in the bipartite cast graph: either an actor or a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphNode {
    Actor(ActorId),
    Movie(MovieId),
}

/// Bipartite adjacency structure derived from an [`EntityStore`].
///
/// Built once per session and shared read-only across all queries; a change
/// to the underlying data forces a full rebuild. Neighbor queries are O(1)
/// amortized slice lookups.
#[derive(Debug, Clone)]
pub struct CastGraph {
    store: Arc<EntityStore>,
    /// Movies per actor, indexed by dense ActorId, sorted ascending.
    filmography: Vec<AdjacencyList<MovieId>>,
    /// Actors per movie, indexed by dense MovieId, sorted ascending.
    cast: Vec<AdjacencyList<ActorId>>,
}

impl CastGraph {
    /// Builds the bipartite graph from the entity store.
    ///
    /// Fails with [`GraphError::InvalidData`] if any movie's cast references
    /// an actor id absent from the store; referential integrity must hold
    /// before any traversal is attempted. Duplicate cast mentions of the same
    /// actor collapse to a single edge.
    pub fn build(store: Arc<EntityStore>) -> Result<Self, GraphError> {
        let mut filmography: Vec<AdjacencyList<MovieId>> =
            vec![AdjacencyList::new(); store.actor_count()];
        let mut cast: Vec<AdjacencyList<ActorId>> =
            vec![AdjacencyList::new(); store.movie_count()];

        for movie in store.movies() {
            for member in &movie.cast {
                let actor_id = store.actor_id(member).ok_or_else(|| {
                    GraphError::InvalidData(format!(
                        "movie '{}' references unknown actor id '{}'",
                        movie.key, member
                    ))
                })?;
                cast[movie.id.0 as usize].push(actor_id);
                filmography[actor_id.0 as usize].push(movie.id);
            }
        }

        // Sorted, deduplicated adjacency gives deterministic BFS order and
        // O(log n) membership tests.
        for list in &mut filmography {
            list.sort_unstable();
            list.dedup();
        }
        for list in &mut cast {
            list.sort_unstable();
            list.dedup();
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            actors = store.actor_count(),
            movies = store.movie_count(),
            "cast graph built"
        );

        Ok(CastGraph {
            store,
            filmography,
            cast,
        })
    }

    /// The entity store this graph was built from.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Movies the given actor appears in, ascending by dense id.
    pub fn movies_of(&self, actor: ActorId) -> &[MovieId] {
        &self.filmography[actor.0 as usize]
    }

    /// Cast of the given movie, ascending by dense id.
    pub fn cast_of(&self, movie: MovieId) -> &[ActorId] {
        &self.cast[movie.0 as usize]
    }

    /// Adjacent nodes of the opposite type, ascending by dense id.
    pub fn neighbors(&self, node: GraphNode) -> Vec<GraphNode> {
        match node {
            GraphNode::Actor(a) => self
                .movies_of(a)
                .iter()
                .map(|&m| GraphNode::Movie(m))
                .collect(),
            GraphNode::Movie(m) => self
                .cast_of(m)
                .iter()
                .map(|&a| GraphNode::Actor(a))
                .collect(),
        }
    }

    /// Whether two actors co-appear in at least one movie.
    pub fn adjacent(&self, a: ActorId, b: ActorId) -> bool {
        if a == b {
            return false;
        }
        !self.common_movies(a, b).is_empty()
    }

    /// Movies shared by two actors' filmographies, ascending by dense id.
    ///
    /// Sorted-merge intersection over the two adjacency lists.
    pub fn common_movies(&self, a: ActorId, b: ActorId) -> Vec<MovieId> {
        let (mut left, mut right) = (
            self.movies_of(a).iter().peekable(),
            self.movies_of(b).iter().peekable(),
        );
        let mut shared = Vec::new();
        while let (Some(&&l), Some(&&r)) = (left.peek(), right.peek()) {
            match l.cmp(&r) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    shared.push(l);
                    left.next();
                    right.next();
                }
            }
        }
        shared
    }

    /// Total node count across both partitions (actors first in slot order).
    pub(crate) fn node_count(&self) -> usize {
        self.filmography.len() + self.cast.len()
    }

    /// Flattens a node into a single dense slot: actors occupy
    /// `0..actor_count`, movies `actor_count..`.
    pub(crate) fn slot(&self, node: GraphNode) -> usize {
        match node {
            GraphNode::Actor(a) => a.0 as usize,
            GraphNode::Movie(m) => self.filmography.len() + m.0 as usize,
        }
    }

    /// Inverse of [`CastGraph::slot`].
    pub(crate) fn node_at(&self, slot: usize) -> GraphNode {
        if slot < self.filmography.len() {
            GraphNode::Actor(ActorId(slot as u32))
        } else {
            GraphNode::Movie(MovieId((slot - self.filmography.len()) as u32))
        }
    }
}
