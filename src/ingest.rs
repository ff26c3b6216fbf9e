//! Review Ingestion
//!
//! Builds a [`WeightedGraph`] from a row-oriented review export plus a
//! sentiment lexicon. This is the thin adapter between on-disk review data
//! and the graph core: it parses rows, derives sentiment, and drives the
//! typed construction API.
//!
//! # Review Format
//!
//! A CSV file with a header row and the columns
//!
//! ```text
//! index, title, reviewer, publisher, review, date, score
//! ```
//!
//! Only `title`, `reviewer`, `review`, and `score` are consumed. Leading and
//! trailing whitespace around fields is trimmed.
//!
//! # Example
//!
//! ```rust,no_run
//! use reel::{load_review_graph, SimilarityMetric};
//!
//! let graph = load_review_graph("reviews.csv", "lexicon.txt")?;
//! let picks = reel::recommend_movies(
//!     &graph,
//!     "Heat",
//!     10,
//!     SimilarityMetric::WeightedPlus,
//!     2.0,
//! )?;
//! for pick in picks {
//!     println!("{:>8.2}  {}", pick.score, pick.id);
//! }
//! # Ok::<(), reel::ReelError>(())
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::error::{ReelError, Result};
use crate::graph::{EdgeWeight, Recommendation, WeightedGraph};
use crate::sentiment::SentimentLexicon;
use crate::similarity::SimilarityMetric;

/// Domain kinds partitioning the review graph.
///
/// Kinds only scope queries (the recommendation pool is all vertices of the
/// seed's kind); they never change edge semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A reviewed title.
    Movie,
    /// A reviewer.
    User,
}

/// The concrete graph type the ingestion layer builds.
pub type ReviewGraph = WeightedGraph<String, EntityKind>;

/// Columns consumed from each review record.
const TITLE: usize = 1;
const REVIEWER: usize = 2;
const REVIEW: usize = 4;
const SCORE: usize = 6;

/// Build a review graph from a CSV export and a sentiment lexicon file.
///
/// Every row idempotently inserts its movie and user vertices, then adds an
/// edge weighted by the rating score and the review text's sentiment.
/// Reviews matching no lexicon keywords get neutral sentiment.
///
/// # Errors
///
/// [`ReelError::Io`] / [`ReelError::Csv`] for unreadable input,
/// [`ReelError::MalformedRecord`] for rows missing columns, and
/// [`ReelError::InvalidScore`] for non-numeric ratings.
#[instrument(skip_all, fields(reviews = %reviews.as_ref().display()))]
pub fn load_review_graph<P, Q>(reviews: P, lexicon: Q) -> Result<ReviewGraph>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let lexicon = SentimentLexicon::from_path(lexicon)?;
    debug!(keywords = lexicon.len(), "Lexicon loaded");

    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(reviews.as_ref())?;
    load_from_csv(reader, &lexicon)
}

/// Build a review graph from an already-open CSV source.
///
/// Same semantics as [`load_review_graph`], for callers that stream rows
/// from something other than a file.
pub fn load_review_graph_from_reader<R: Read>(
    reviews: R,
    lexicon: &SentimentLexicon,
) -> Result<ReviewGraph> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reviews);
    load_from_csv(reader, lexicon)
}

fn load_from_csv<R: Read>(
    mut reader: csv::Reader<R>,
    lexicon: &SentimentLexicon,
) -> Result<ReviewGraph> {
    let mut graph = ReviewGraph::new();
    let mut neutral = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // 1-based data record number, for error messages.
        let number = i + 1;
        if record.len() <= SCORE {
            return Err(ReelError::MalformedRecord {
                record: number,
                message: format!("expected at least {} columns, got {}", SCORE + 1, record.len()),
            });
        }

        let title = record[TITLE].to_string();
        let reviewer = record[REVIEWER].to_string();
        let score: f64 = record[SCORE].parse().map_err(|_| ReelError::InvalidScore {
            record: number,
            value: record[SCORE].to_string(),
        })?;

        let sentiment = match lexicon.score(&record[REVIEW]) {
            Ok(polarity) => polarity,
            Err(ReelError::NoKeywords) => {
                // Data-model neutral: no matched keywords means absent polarity.
                debug!(record = number, title = %title, "Review matched no keywords");
                neutral += 1;
                0.0
            }
            Err(other) => return Err(other),
        };

        graph.add_vertex(title.clone(), EntityKind::Movie);
        graph.add_vertex(reviewer.clone(), EntityKind::User);
        graph
            .add_edge(&title, &reviewer, EdgeWeight::new(score, sentiment))
            .map_err(|err| match err {
                // A row whose title and reviewer collide cannot form an edge.
                ReelError::SelfLoop(_) => ReelError::MalformedRecord {
                    record: number,
                    message: "title and reviewer are the same entity".to_string(),
                },
                other => other,
            })?;
    }

    if neutral > 0 {
        warn!(neutral, "Reviews without lexicon matches defaulted to neutral sentiment");
    }
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Review graph loaded"
    );
    Ok(graph)
}

/// Rank movies similar to the given title.
///
/// Domain wrapper over [`WeightedGraph::recommend`] that additionally
/// requires the seed to be a movie vertex.
///
/// # Errors
///
/// [`ReelError::WrongKind`] if the seed exists but is a user vertex, plus
/// everything `recommend` itself reports.
pub fn recommend_movies(
    graph: &ReviewGraph,
    title: &str,
    limit: usize,
    metric: SimilarityMetric,
    restriction: f64,
) -> Result<Vec<Recommendation<String>>> {
    let seed = title.to_string();
    if let Some(kind) = graph.kind_of(&seed) {
        if kind != EntityKind::Movie {
            return Err(ReelError::WrongKind(format!("{seed:?}")));
        }
    }
    graph.recommend(&seed, limit, metric, restriction)
}
