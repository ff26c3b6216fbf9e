//! # Reel - Embedded Review-Graph Recommendation Engine
//!
//! Reel is an embedded recommendation engine written in Rust. It models rated
//! interactions as a bipartite weighted graph (movies on one side, the users
//! who reviewed them on the other) and ranks entities by neighborhood
//! similarity to a seed, with zero configuration and no external services.
//!
//! ## Quick Start
//!
//! ```rust
//! use reel::{EdgeWeight, SimilarityMetric, WeightedGraph};
//!
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Kind { Movie, User }
//!
//! fn main() -> reel::Result<()> {
//!     let mut graph = WeightedGraph::new();
//!
//!     // Vertices first, then the edges that reference them
//!     graph.add_vertex("Heat", Kind::Movie);
//!     graph.add_vertex("Ronin", Kind::Movie);
//!     graph.add_vertex("alice", Kind::User);
//!     graph.add_vertex("bob", Kind::User);
//!
//!     // Each edge carries a (score, sentiment) weight pair
//!     graph.add_edge(&"Heat", &"alice", EdgeWeight::new(9.0, 0.5))?;
//!     graph.add_edge(&"Heat", &"bob", EdgeWeight::new(7.0, 0.0))?;
//!     graph.add_edge(&"Ronin", &"alice", EdgeWeight::new(8.5, 0.25))?;
//!
//!     // Rank movies by similarity to a seed
//!     let picks = graph.recommend(&"Heat", 10, SimilarityMetric::Unweighted, 0.0)?;
//!     for pick in picks {
//!         println!("{:>8.2}  {}", pick.score, pick.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Bipartite weighted graph**: undirected edges with `(score, sentiment)`
//!   weight pairs, stored symmetrically in an arena with no reference cycles
//! - **Three similarity metrics**: plain Jaccard, rating-restricted Jaccard,
//!   and sentiment-adjusted restricted Jaccard
//! - **Top-k ranking**: deterministic ordering (score descending, candidate
//!   id ascending) truncated to the requested limit
//! - **Sentiment scoring**: lexicon-driven polarity extraction from review
//!   text feeding the advanced weighting system
//! - **CSV ingestion**: one call from a review export to a query-ready graph
//!
//! ## Ingesting Review Data
//!
//! ```rust,no_run
//! use reel::{load_review_graph, recommend_movies, SimilarityMetric};
//!
//! fn main() -> reel::Result<()> {
//!     let graph = load_review_graph("reviews.csv", "lexicon.txt")?;
//!
//!     let picks = recommend_movies(&graph, "Heat", 10, SimilarityMetric::WeightedPlus, 2.0)?;
//!     for pick in picks {
//!         println!("{:>8.2}  {}", pick.score, pick.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Build-Then-Freeze
//!
//! Construction is sequential and finishes before the first query. A built
//! graph is a plain immutable value: share it behind an `Arc` and query from
//! as many readers as you like, no locking involved.

#![warn(missing_docs)]

// ── Core ──────────────────────────────────────────────────────────────────────
// Fundamental types: the weighted graph, similarity metrics, errors.
pub mod error;
pub mod graph;
pub mod similarity;

// ── Ingestion ────────────────────────────────────────────────────────────────
// Adapters feeding the graph: review CSV parsing and sentiment scoring.
pub mod ingest;
pub mod sentiment;

// ── Stable API ───────────────────────────────────────────────────────────────
// These types form the core stable API surface. Breaking changes follow semver.
pub use error::{ErrorCode, ReelError, Result};
pub use graph::{EdgeWeight, Recommendation, WeightedGraph};
pub use ingest::{load_review_graph, load_review_graph_from_reader, recommend_movies, EntityKind, ReviewGraph};
pub use sentiment::SentimentLexicon;
pub use similarity::SimilarityMetric;

/// Prelude module for convenient imports.
///
/// ```rust
/// use reel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ReelError, Result};
    pub use crate::graph::{EdgeWeight, Recommendation, WeightedGraph};
    pub use crate::ingest::{EntityKind, ReviewGraph};
    pub use crate::sentiment::SentimentLexicon;
    pub use crate::similarity::SimilarityMetric;
}
