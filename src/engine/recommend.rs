//! # Recommendation Engine
//!
//! Scores candidate movies by cast overlap with a reference movie or actor,
//! applies date/rating filters, and returns a ranked list.
//!
//! Scoring rule: the intersection score is the raw count of shared cast
//! members. For an actor reference the score of a candidate is the **max**
//! intersection with any movie in the actor's filmography ("closest match"
//! semantics); no normalization by cast size is applied. Zero-intersection
//! candidates and the reference itself are never returned.
//!
//! Filters compose conjunctively with inclusive bounds. A rating filter
//! excludes movies with no rating; an empty date window (min > max) is a
//! valid, vacuous constraint that yields an empty list rather than an error.

use rustc_hash::FxHashMap;

use crate::engine::errors::GraphError;
use crate::engine::graph::CastGraph;
use crate::engine::store::{ActorId, Movie, MovieId};

/// The entity recommendations are computed against, by external id.
///
/// Tagged variant rather than any trait-object dispatch; the engine handles
/// both cases exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    Movie(&'a str),
    Actor(&'a str),
}

/// Date and rating constraints on candidate movies.
///
/// Absent fields impose no constraint. Dates are release years, bounds
/// inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterSpec {
    /// Lower bound on release year.
    pub min_date: Option<i32>,
    /// Upper bound on release year.
    pub max_date: Option<i32>,
    /// Lower bound on rating; movies with no rating are excluded when set.
    pub min_rating: Option<f64>,
}

impl FilterSpec {
    /// Whether the given movie satisfies every configured constraint.
    pub fn accepts(&self, movie: &Movie) -> bool {
        if let Some(min) = self.min_date {
            if movie.release_year < min {
                return false;
            }
        }
        if let Some(max) = self.max_date {
            if movie.release_year > max {
                return false;
            }
        }
        if let Some(min) = self.min_rating {
            match movie.rating {
                Some(r) if r >= min => {}
                _ => return false,
            }
        }
        true
    }
}

/// One scored candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    pub movie: MovieId,
    /// Count of cast members shared with the reference (max over the
    /// filmography for an actor reference).
    pub score: usize,
    /// Whether the candidate satisfies the query's [`FilterSpec`].
    pub passes_filter: bool,
}

/// Scores every positive-intersection candidate for the reference, annotating
/// each with whether it passes the filters, ordered for presentation.
///
/// Order: descending score, then descending rating (unrated last), then
/// descending release year, then ascending id.
pub fn score_candidates(
    graph: &CastGraph,
    reference: Reference<'_>,
    filters: &FilterSpec,
) -> Result<Vec<Recommendation>, GraphError> {
    let scores = match reference {
        Reference::Movie(key) => {
            let movie = graph.store().require_movie(key)?;
            intersection_counts(graph, movie)
        }
        Reference::Actor(key) => {
            let actor = graph.store().require_actor(key)?;
            max_intersection_counts(graph, actor)
        }
    };

    // Carry rating and year alongside each entry so the sort needs no
    // fallible store lookups.
    let mut entries: Vec<(Recommendation, Option<f64>, i32)> = scores
        .into_iter()
        .filter(|&(_, score)| score > 0)
        .filter_map(|(movie, score)| {
            let row = graph.store().movie(movie)?;
            let rec = Recommendation {
                movie,
                score,
                passes_filter: filters.accepts(row),
            };
            Some((rec, row.rating, row.release_year))
        })
        .collect();

    entries.sort_by(|(a, rating_a, year_a), (b, rating_b, year_b)| {
        b.score
            .cmp(&a.score)
            .then_with(|| cmp_rating_desc(*rating_a, *rating_b))
            .then_with(|| year_b.cmp(year_a))
            .then_with(|| a.movie.cmp(&b.movie))
    });

    Ok(entries.into_iter().map(|(rec, _, _)| rec).collect())
}

/// Ranked recommendations for the reference, restricted to candidates that
/// pass the filters.
pub fn recommend(
    graph: &CastGraph,
    reference: Reference<'_>,
    filters: &FilterSpec,
) -> Result<Vec<Recommendation>, GraphError> {
    let mut entries = score_candidates(graph, reference, filters)?;
    entries.retain(|e| e.passes_filter);
    Ok(entries)
}

/// [`recommend`] truncated to at most `limit` entries.
pub fn top_recommendations(
    graph: &CastGraph,
    reference: Reference<'_>,
    filters: &FilterSpec,
    limit: usize,
) -> Result<Vec<Recommendation>, GraphError> {
    let mut entries = recommend(graph, reference, filters)?;
    entries.truncate(limit);
    Ok(entries)
}

/// Shared-cast counts against one movie: for every other movie, the number
/// of `reference` cast members appearing in it. Adjacency lists are deduped,
/// so each shared actor contributes exactly once.
fn intersection_counts(graph: &CastGraph, reference: MovieId) -> FxHashMap<MovieId, usize> {
    let mut counts = FxHashMap::default();
    for &actor in graph.cast_of(reference) {
        for &movie in graph.movies_of(actor) {
            if movie != reference {
                *counts.entry(movie).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Max intersection with any filmography movie, for candidates outside the
/// actor's own filmography.
fn max_intersection_counts(graph: &CastGraph, actor: ActorId) -> FxHashMap<MovieId, usize> {
    let filmography = graph.movies_of(actor);
    let mut best: FxHashMap<MovieId, usize> = FxHashMap::default();
    for &seen in filmography {
        for (movie, count) in intersection_counts(graph, seen) {
            // Filmography lists are sorted; membership is a binary search.
            if filmography.binary_search(&movie).is_ok() {
                continue;
            }
            let entry = best.entry(movie).or_insert(0);
            *entry = (*entry).max(count);
        }
    }
    best
}

/// Descending rating order with unrated movies last.
fn cmp_rating_desc(a: Option<f64>, b: Option<f64>) -> std::cmp::Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}
