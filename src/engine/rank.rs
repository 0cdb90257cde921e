//! # Influence Ranker
//!
//! Ranks every actor by their mean Bacon number across the whole population:
//! one single-source BFS per actor (O(V·(V+E)) total) rather than pairwise
//! path queries or a precomputed all-pairs table.
//!
//! "Most influential" means lowest mean distance. The mean is taken over
//! reachable actors only; actors who share a cast with nobody carry no mean
//! at all and are ranked last, never dropped — the output accounts for every
//! actor in the store.
//!
//! With the `parallel` feature, per-actor BFS runs are sharded across rayon
//! workers. Each worker owns its visited set and queue and writes only its
//! own result slot; results are merged and sorted after all workers complete.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::engine::errors::GraphError;
use crate::engine::graph::{CastGraph, GraphNode};
use crate::engine::store::ActorId;

/// Sentinel for "not yet visited" in the distance array.
const UNVISITED: u32 = u32::MAX;

/// One row of the influence ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingEntry {
    pub actor: ActorId,
    /// Arithmetic mean of Bacon numbers to all reachable actors; `None` when
    /// the actor reaches nobody (isolated in the cast graph).
    pub mean_distance: Option<f64>,
    /// Number of other actors reachable from this one.
    pub reachable: usize,
}

/// Computes the full influence ranking, most influential first.
///
/// Order: ascending mean distance; ties broken by higher reachable count,
/// then ascending id. Isolated actors sort last, by id. Output length always
/// equals the number of actors in the store.
pub fn rank_actors(graph: &CastGraph) -> Vec<RankingEntry> {
    // Uncancellable runs always produce a full result.
    let mut entries = collect_entries(graph, None).unwrap_or_default();
    sort_entries(&mut entries);

    #[cfg(feature = "tracing")]
    tracing::debug!(actors = entries.len(), "influence ranking computed");

    entries
}

/// [`rank_actors`] with cooperative cancellation, checked between per-actor
/// BFS runs.
///
/// Returns `None` if `cancel` was raised before completion; partial results
/// are discarded (the ranking is all-or-nothing per run).
pub fn rank_actors_cancellable(graph: &CastGraph, cancel: &AtomicBool) -> Option<Vec<RankingEntry>> {
    let mut entries = collect_entries(graph, Some(cancel))?;
    sort_entries(&mut entries);
    Some(entries)
}

/// Mean Bacon number for a single actor given by external id.
pub fn average_bacon_number(graph: &CastGraph, actor: &str) -> Result<RankingEntry, GraphError> {
    let id = graph.store().require_actor(actor)?;
    Ok(entry_for(graph, id))
}

fn collect_entries(graph: &CastGraph, cancel: Option<&AtomicBool>) -> Option<Vec<RankingEntry>> {
    let cancelled = || cancel.is_some_and(|c| c.load(Ordering::Relaxed));

    #[cfg(feature = "parallel")]
    return (0..graph.store().actor_count())
        .into_par_iter()
        .map(|i| {
            if cancelled() {
                None
            } else {
                Some(entry_for(graph, ActorId(i as u32)))
            }
        })
        .collect::<Option<Vec<_>>>();

    #[cfg(not(feature = "parallel"))]
    {
        let mut entries = Vec::with_capacity(graph.store().actor_count());
        for i in 0..graph.store().actor_count() {
            if cancelled() {
                return None;
            }
            entries.push(entry_for(graph, ActorId(i as u32)));
        }
        Some(entries)
    }
}

/// Single-source BFS over the bipartite graph; actor nodes sit at even
/// depths, so the Bacon number to a reached actor is `depth / 2`.
fn entry_for(graph: &CastGraph, source: ActorId) -> RankingEntry {
    let mut dist = vec![UNVISITED; graph.node_count()];
    let mut queue = VecDeque::new();

    let src_slot = graph.slot(GraphNode::Actor(source));
    dist[src_slot] = 0;
    queue.push_back(src_slot);

    let mut total: u64 = 0;
    let mut reachable: usize = 0;

    while let Some(slot) = queue.pop_front() {
        let depth = dist[slot];
        for neighbor in graph.neighbors(graph.node_at(slot)) {
            let nslot = graph.slot(neighbor);
            if dist[nslot] != UNVISITED {
                continue;
            }
            dist[nslot] = depth + 1;
            if let GraphNode::Actor(_) = neighbor {
                total += u64::from((depth + 1) / 2);
                reachable += 1;
            }
            queue.push_back(nslot);
        }
    }

    RankingEntry {
        actor: source,
        mean_distance: if reachable > 0 {
            Some(total as f64 / reachable as f64)
        } else {
            None
        },
        reachable,
    }
}

fn sort_entries(entries: &mut [RankingEntry]) {
    entries.sort_by(|a, b| match (a.mean_distance, b.mean_distance) {
        (Some(x), Some(y)) => x
            .total_cmp(&y)
            .then_with(|| b.reachable.cmp(&a.reachable))
            .then_with(|| a.actor.cmp(&b.actor)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.actor.cmp(&b.actor),
    });
}
