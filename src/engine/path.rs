//! # Path Engine
//!
//! Shortest actor-to-actor distance (Bacon number) and a witnessing path of
//! alternating actor/movie nodes, via breadth-first search over the bipartite
//! cast graph.
//!
//! BFS explores by increasing depth over unweighted edges, so the first path
//! that reaches the target has minimum movie-hop length. Neighbor lists are
//! sorted ascending by dense id, which fixes the tie-break: among equal-length
//! paths, the one discovered first under ascending-id iteration is returned,
//! making every query reproducible.
//!
//! Each invocation is a fresh O(V+E) traversal; nothing persists between
//! calls.

use std::collections::VecDeque;

use crate::engine::errors::GraphError;
use crate::engine::graph::{CastGraph, GraphNode};
use crate::engine::recommend::FilterSpec;
use crate::engine::store::{ActorId, MovieId};

/// Sentinel for "not yet visited" in the predecessor array.
const UNVISITED: usize = usize::MAX;

/// A shortest witnessing path: an alternating sequence
/// `[Actor, Movie, Actor, ..., Actor]` with no repeated actor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaconPath {
    nodes: Vec<GraphNode>,
}

impl BaconPath {
    /// The alternating node sequence, source first.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Bacon number: number of movie hops, `(len - 1) / 2`.
    pub fn distance(&self) -> usize {
        (self.nodes.len() - 1) / 2
    }
}

/// Outcome of a Bacon-number query.
///
/// `Unreachable` is a legitimate terminal state, not an error: the cast graph
/// is typically disconnected, and callers must be able to tell "no path"
/// apart from "bad input" (which surfaces as [`GraphError`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaconResult {
    Path(BaconPath),
    Unreachable,
}

impl BaconResult {
    /// The path's movie-hop distance, or `None` when unreachable.
    pub fn distance(&self) -> Option<usize> {
        match self {
            BaconResult::Path(p) => Some(p.distance()),
            BaconResult::Unreachable => None,
        }
    }
}

/// Computes the Bacon number between two actors given by external id.
///
/// `source == target` yields a zero-length path holding only that actor.
/// Unknown ids surface [`GraphError::UnknownEntity`].
pub fn bacon_number(
    graph: &CastGraph,
    source: &str,
    target: &str,
) -> Result<BaconResult, GraphError> {
    let src = graph.store().require_actor(source)?;
    let dst = graph.store().require_actor(target)?;
    Ok(shortest_path(graph, src, dst, |_| true))
}

/// Computes the Bacon number between two actors, traversing only movies the
/// given filter accepts.
///
/// The connecting movies of the path are constrained; the actors are not. An
/// over-constrained filter yields [`BaconResult::Unreachable`], never an
/// error.
pub fn bacon_number_filtered(
    graph: &CastGraph,
    source: &str,
    target: &str,
    filters: &FilterSpec,
) -> Result<BaconResult, GraphError> {
    let src = graph.store().require_actor(source)?;
    let dst = graph.store().require_actor(target)?;
    Ok(shortest_path(graph, src, dst, |movie| {
        graph
            .store()
            .movie(movie)
            .is_some_and(|m| filters.accepts(m))
    }))
}

/// BFS with predecessor tracking over the bipartite graph. Movie nodes are
/// enqueued only when `movie_ok` accepts them.
fn shortest_path(
    graph: &CastGraph,
    src: ActorId,
    dst: ActorId,
    movie_ok: impl Fn(MovieId) -> bool,
) -> BaconResult {
    if src == dst {
        return BaconResult::Path(BaconPath {
            nodes: vec![GraphNode::Actor(src)],
        });
    }

    let mut pred = vec![UNVISITED; graph.node_count()];
    let mut queue = VecDeque::new();

    let src_slot = graph.slot(GraphNode::Actor(src));
    let dst_slot = graph.slot(GraphNode::Actor(dst));
    pred[src_slot] = src_slot;
    queue.push_back(src_slot);

    while let Some(slot) = queue.pop_front() {
        for neighbor in graph.neighbors(graph.node_at(slot)) {
            if let GraphNode::Movie(m) = neighbor {
                if !movie_ok(m) {
                    continue;
                }
            }
            let nslot = graph.slot(neighbor);
            if pred[nslot] != UNVISITED {
                continue;
            }
            pred[nslot] = slot;
            if nslot == dst_slot {
                return BaconResult::Path(reconstruct(graph, &pred, src_slot, dst_slot));
            }
            queue.push_back(nslot);
        }
    }

    BaconResult::Unreachable
}

/// Walks the predecessor chain back from the target and reverses it.
fn reconstruct(graph: &CastGraph, pred: &[usize], src_slot: usize, dst_slot: usize) -> BaconPath {
    let mut nodes = Vec::new();
    let mut slot = dst_slot;
    loop {
        nodes.push(graph.node_at(slot));
        if slot == src_slot {
            break;
        }
        slot = pred[slot];
    }
    nodes.reverse();
    BaconPath { nodes }
}
