//! The analytics engine for the cast graph.
//!
//! This module provides:
//! - **errors**: Error types for build and query failures
//! - **store**: Canonical actor/movie records with dense-id indexes
//! - **graph**: Bipartite cast graph construction and neighbor queries
//! - **path**: Bacon-number BFS with path reconstruction and movie filters
//! - **rank**: Influence ranking by mean Bacon number
//! - **recommend**: Cast-overlap recommendations with filter composition

pub mod errors;
pub mod graph;
pub mod path;
pub mod rank;
pub mod recommend;
pub mod store;
