//! Error Types and Handling
//!
//! Error types for the Reel recommendation engine with structured error
//! codes for programmatic handling and detailed messages for debugging.
//!
//! # Error Categories
//!
//! Errors are organized into categories with numeric codes:
//!
//! | Range | Category | Examples |
//! |-------|----------|----------|
//! | 1xxx | Graph | VertexNotFound, SelfLoop |
//! | 2xxx | Query | InvalidLimit, WrongKind, NoEdges |
//! | 3xxx | Sentiment | NoKeywords, LexiconParse |
//! | 4xxx | Ingest | MalformedRecord, InvalidScore, Csv |
//! | 5xxx | I/O | Read, Write |
//!
//! # Example
//!
//! ```rust
//! use reel::error::{ReelError, Result, ErrorCode};
//!
//! fn example_operation() -> Result<()> {
//!     // Use Result<T> which is an alias for std::result::Result<T, ReelError>
//!     Err(ReelError::VertexNotFound("\"Heat\"".to_string()))
//! }
//!
//! fn handle_error(err: ReelError) {
//!     // Get the error code for programmatic handling
//!     let code = err.error_code();
//!     println!("Error code: {:?} ({})", code, code.code());
//!
//!     match err {
//!         ReelError::VertexNotFound(id) => {
//!             println!("Vertex {} not found", id);
//!         }
//!         ReelError::NoEdges(id) => {
//!             println!("Vertex {} has no incident edges", id);
//!         }
//!         _ => println!("Other error: {}", err),
//!     }
//! }
//! ```
//!
//! # Error Propagation
//!
//! Use the `?` operator to propagate errors:
//!
//! ```rust,ignore
//! use reel::{load_review_graph, Result, SimilarityMetric};
//!
//! fn top_picks(reviews: &str, lexicon: &str, seed: &str) -> Result<Vec<String>> {
//!     let graph = load_review_graph(reviews, lexicon)?;  // Propagates Io, Csv, etc.
//!     let picks = graph.recommend(&seed.to_string(), 10, SimilarityMetric::Unweighted, 0.0)?;
//!     Ok(picks.into_iter().map(|r| r.id).collect())
//! }
//! ```

use thiserror::Error;

/// Error code categories for programmatic error handling.
///
/// Each error code belongs to a category indicated by its numeric range.
/// Use [`ErrorCode::category()`] to get the human-readable category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Referenced vertex does not exist in the graph
    VertexNotFound = 1001,
    /// An edge endpoint referenced the vertex itself
    SelfLoop = 1002,

    /// Recommendation limit is below one
    InvalidLimit = 2001,
    /// Seed vertex is not of the kind the query expects
    WrongKind = 2002,
    /// Similarity restriction is negative
    InvalidRestriction = 2003,
    /// Average-weight query against a vertex with no incident edges
    NoEdges = 2004,

    /// Review text matched no lexicon keywords
    NoKeywords = 3001,
    /// Sentiment lexicon line could not be parsed
    LexiconParse = 3002,

    /// Review record is missing required columns
    MalformedRecord = 4001,
    /// Review record's rating column is not numeric
    InvalidScore = 4002,
    /// Underlying CSV reader failure
    CsvError = 4003,

    /// Failed to read from disk
    IoRead = 5001,
    /// Failed to write to disk
    IoWrite = 5002,
}

impl ErrorCode {
    /// Get the numeric error code
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a brief description of the error category
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::VertexNotFound | ErrorCode::SelfLoop => "Graph",
            ErrorCode::InvalidLimit
            | ErrorCode::WrongKind
            | ErrorCode::InvalidRestriction
            | ErrorCode::NoEdges => "Query",
            ErrorCode::NoKeywords | ErrorCode::LexiconParse => "Sentiment",
            ErrorCode::MalformedRecord | ErrorCode::InvalidScore | ErrorCode::CsvError => "Ingest",
            ErrorCode::IoRead | ErrorCode::IoWrite => "I/O",
        }
    }
}

/// Error types for Reel operations
#[must_use]
#[derive(Error, Debug)]
pub enum ReelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    #[error("Self-loop rejected for vertex {0}")]
    SelfLoop(String),

    #[error("Recommendation limit must be at least 1, got {0}")]
    InvalidLimit(usize),

    #[error("Seed vertex {0} is not of the expected kind")]
    WrongKind(String),

    #[error("Similarity restriction must be non-negative, got {0}")]
    InvalidRestriction(f64),

    #[error("Vertex {0} has no incident edges")]
    NoEdges(String),

    #[error("Review text matched no sentiment keywords")]
    NoKeywords,

    #[error("Lexicon parse error at line {line}: {message}")]
    LexiconParse { line: usize, message: String },

    #[error("Malformed review record {record}: {message}")]
    MalformedRecord { record: usize, message: String },

    #[error("Review record {record} has non-numeric rating '{value}'")]
    InvalidScore { record: usize, value: String },
}

impl ReelError {
    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ReelError::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    ErrorCode::IoRead
                }
                _ => ErrorCode::IoWrite,
            },
            ReelError::Csv(_) => ErrorCode::CsvError,
            ReelError::VertexNotFound(_) => ErrorCode::VertexNotFound,
            ReelError::SelfLoop(_) => ErrorCode::SelfLoop,
            ReelError::InvalidLimit(_) => ErrorCode::InvalidLimit,
            ReelError::WrongKind(_) => ErrorCode::WrongKind,
            ReelError::InvalidRestriction(_) => ErrorCode::InvalidRestriction,
            ReelError::NoEdges(_) => ErrorCode::NoEdges,
            ReelError::NoKeywords => ErrorCode::NoKeywords,
            ReelError::LexiconParse { .. } => ErrorCode::LexiconParse,
            ReelError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            ReelError::InvalidScore { .. } => ErrorCode::InvalidScore,
        }
    }

    /// Returns a concise, actionable help string for the most common errors.
    ///
    /// Designed for display in embedding applications. Returns the single
    /// most useful suggestion for fixing the error.
    pub fn help(&self) -> String {
        match self {
            ReelError::VertexNotFound(id) => format!(
                "Vertex {} does not exist. Vertices must be added with add_vertex() \
                 before any edge or query references them. Check the id spelling \
                 (ids are case-sensitive).",
                id
            ),
            ReelError::SelfLoop(id) => format!(
                "An edge must connect two distinct vertices, but both endpoints \
                 were {}. Review graphs connect a movie to a user, never an \
                 entity to itself.",
                id
            ),
            ReelError::InvalidLimit(limit) => format!(
                "recommend() was asked for {} results. Pass a limit of at least 1; \
                 the result is truncated to the candidate pool size automatically.",
                limit
            ),
            ReelError::WrongKind(id) => format!(
                "Seed vertex {} exists but has the wrong kind for this query. \
                 Movie recommendations must be seeded with a movie vertex.",
                id
            ),
            ReelError::InvalidRestriction(value) => format!(
                "The similarity restriction was {}. Use 0.0 for exact weight \
                 agreement or a positive threshold to tolerate rating differences.",
                value
            ),
            ReelError::NoEdges(id) => format!(
                "Vertex {} is isolated, so its average edge weight is undefined. \
                 Check neighbors_of() before asking for average_weight().",
                id
            ),
            ReelError::NoKeywords => String::from(
                "The review text matched no lexicon keywords, so no sentiment \
                 polarity can be derived. Treat the review as neutral or extend \
                 the lexicon.",
            ),
            ReelError::LexiconParse { line, .. } => format!(
                "Lexicon line {} is malformed. Each data line must be \
                 positive<TAB>negative<TAB>word; lines starting with '#' are \
                 comments.",
                line
            ),
            _ => self.to_string(),
        }
    }
}

/// Result type alias for Reel operations
pub type Result<T> = std::result::Result<T, ReelError>;
