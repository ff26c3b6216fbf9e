//! Weighted Review Graph
//!
//! The core bipartite graph connecting rated entities (movies and the users
//! who reviewed them), plus the similarity scoring and top-k ranking queries
//! that drive recommendations.
//!
//! # Features
//!
//! - **Arena storage**: all vertices live in one flat vector; neighbor
//!   references are arena indices, so the undirected edge model needs no
//!   reference cycles or interior mutability.
//! - **Generic identity**: any `Eq + Hash + Ord + Clone` id type works as
//!   the public vertex handle, and any `Eq + Copy` tag works as the kind.
//! - **Edge weight pairs**: every edge carries a `(score, sentiment)` pair;
//!   the sentiment-adjusted weight is derived on demand, never stored.
//! - **Similarity ranking**: three neighborhood-overlap metrics and a
//!   `recommend` query producing a ranked, truncated candidate list.
//!
//! # Build-then-freeze
//!
//! Construction is sequential: add every vertex, then the edges that
//! reference them. Once built the graph is queried read-only; no delete or
//! in-place weight mutation is exposed, so a finished graph can be shared
//! freely between readers.
//!
//! # Example
//!
//! ```
//! use reel::{EdgeWeight, SimilarityMetric, WeightedGraph};
//!
//! #[derive(Clone, Copy, PartialEq, Eq)]
//! enum Kind { Movie, User }
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_vertex("Heat", Kind::Movie);
//! graph.add_vertex("Ronin", Kind::Movie);
//! graph.add_vertex("alice", Kind::User);
//! graph.add_edge(&"Heat", &"alice", EdgeWeight::new(9.0, 0.5))?;
//! graph.add_edge(&"Ronin", &"alice", EdgeWeight::new(8.5, 0.0))?;
//!
//! let picks = graph.recommend(&"Heat", 5, SimilarityMetric::Unweighted, 0.0)?;
//! assert_eq!(picks[0].id, "Ronin");
//! # Ok::<(), reel::ReelError>(())
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ReelError, Result};
use crate::similarity::{jaccard_index, within_restriction, SimilarityMetric};

/// The `(score, sentiment)` pair attached to an undirected edge.
///
/// `score` is the raw rating magnitude as supplied by the caller; the core
/// enforces no range. `sentiment` is a signed polarity scalar, conventionally
/// in `[-1, 1]`, where 0 means neutral or absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeight {
    /// Raw rating magnitude.
    pub score: f64,
    /// Text-derived polarity in `[-1, 1]`; 0 is neutral.
    pub sentiment: f64,
}

impl EdgeWeight {
    /// Create a weight pair from a rating score and a sentiment polarity.
    pub fn new(score: f64, sentiment: f64) -> Self {
        Self { score, sentiment }
    }

    /// Create a weight pair with neutral sentiment.
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            sentiment: 0.0,
        }
    }

    /// The sentiment-adjusted weight, `round(score + score * sentiment, 1)`.
    ///
    /// Recomputed on every call; the derived value is never stored.
    pub fn advanced(&self) -> f64 {
        let raw = self.score + self.score * self.sentiment;
        (raw * 10.0).round() / 10.0
    }
}

/// One ranked entry produced by [`WeightedGraph::recommend`].
///
/// `score` is the similarity scaled by 1000 and rounded to 2 decimals, a
/// display-scale convention preserved from the presentation format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation<V> {
    /// Scaled similarity score.
    pub score: f64,
    /// The recommended candidate.
    pub id: V,
    /// The seed the candidate was compared against.
    pub seed: V,
}

/// A vertex in the arena: its public id, its kind tag, and its incident
/// edges keyed by neighbor arena index.
#[derive(Debug, Clone)]
struct Vertex<V, K> {
    id: V,
    kind: K,
    neighbors: HashMap<usize, EdgeWeight>,
}

impl<V, K> Vertex<V, K> {
    fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// A bipartite weighted graph of rated interactions.
///
/// Vertices are owned by one arena vector and addressed externally by id,
/// internally by arena index. Both directions of an edge store the identical
/// weight pair, so adjacency and weights are symmetric by construction.
///
/// See the [module docs](self) for the construction discipline and a usage
/// example.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, K> {
    vertices: Vec<Vertex<V, K>>,
    index: HashMap<V, usize>,
}

impl<V, K> Default for WeightedGraph<V, K> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V, K> WeightedGraph<V, K>
where
    V: Eq + Hash + Ord + Clone + fmt::Debug,
    K: Eq + Copy,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Whether the graph contains a vertex with the given id.
    pub fn contains(&self, id: &V) -> bool {
        self.index.contains_key(id)
    }

    /// The kind tag of the given vertex, or `None` if it is absent.
    pub fn kind_of(&self, id: &V) -> Option<K> {
        self.index.get(id).map(|&i| self.vertices[i].kind)
    }

    /// Add a vertex with the given id and kind and no incident edges.
    ///
    /// Inserting an id that already exists is a silent no-op, not an error:
    /// ingestion sees the same entity on many rows and re-adds it freely.
    /// The first insertion wins, including its kind tag.
    pub fn add_vertex(&mut self, id: V, kind: K) {
        if self.index.contains_key(&id) {
            return;
        }
        let slot = self.vertices.len();
        self.vertices.push(Vertex {
            id: id.clone(),
            kind,
            neighbors: HashMap::new(),
        });
        self.index.insert(id, slot);
    }

    /// Add an undirected edge between two existing vertices.
    ///
    /// The weight pair is stored on both directions together; re-adding an
    /// edge for the same pair overwrites both directions (last write wins).
    ///
    /// # Errors
    ///
    /// [`ReelError::SelfLoop`] if both endpoints are the same id, and
    /// [`ReelError::VertexNotFound`] if either endpoint has not been added.
    /// An edge never implicitly inserts its endpoints.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: EdgeWeight) -> Result<()> {
        if a == b {
            return Err(ReelError::SelfLoop(format!("{a:?}")));
        }
        let ia = self.lookup(a)?;
        let ib = self.lookup(b)?;

        self.vertices[ia].neighbors.insert(ib, weight);
        self.vertices[ib].neighbors.insert(ia, weight);
        Ok(())
    }

    /// Whether the two ids are adjacent.
    ///
    /// Total: returns `false` when either id is absent rather than erroring,
    /// so adjacency can be probed without checking membership first.
    pub fn adjacent(&self, a: &V, b: &V) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.vertices[ia].neighbors.contains_key(&ib),
            _ => false,
        }
    }

    /// The set of neighbor ids of the given vertex.
    ///
    /// # Errors
    ///
    /// [`ReelError::VertexNotFound`] if the id is absent.
    pub fn neighbors_of(&self, id: &V) -> Result<HashSet<V>> {
        let i = self.lookup(id)?;
        Ok(self.vertices[i]
            .neighbors
            .keys()
            .map(|&n| self.vertices[n].id.clone())
            .collect())
    }

    /// All vertex ids, or only those of the given kind when a filter is
    /// supplied.
    pub fn all_vertices(&self, kind: Option<K>) -> HashSet<V> {
        self.vertices
            .iter()
            .filter(|v| kind.map_or(true, |k| v.kind == k))
            .map(|v| v.id.clone())
            .collect()
    }

    /// The raw rating score of the edge between two ids.
    ///
    /// Returns 0 when the ids are not adjacent (including when either is
    /// absent): no edge is a valid zero-weight state, not an error.
    pub fn weight_of(&self, a: &V, b: &V) -> f64 {
        self.edge_weight(a, b).map_or(0.0, |w| w.score)
    }

    /// The sentiment-adjusted weight of the edge between two ids.
    ///
    /// Returns 0 when the ids are not adjacent, like [`weight_of`].
    ///
    /// [`weight_of`]: WeightedGraph::weight_of
    pub fn advanced_weight_of(&self, a: &V, b: &V) -> f64 {
        self.edge_weight(a, b).map_or(0.0, |w| w.advanced())
    }

    /// The mean raw rating score across all edges incident to the vertex.
    ///
    /// # Errors
    ///
    /// [`ReelError::VertexNotFound`] if the id is absent, and
    /// [`ReelError::NoEdges`] if the vertex is isolated: an average over
    /// zero edges is undefined, and surfacing it beats a NaN.
    pub fn average_weight(&self, id: &V) -> Result<f64> {
        let i = self.lookup(id)?;
        let vertex = &self.vertices[i];
        if vertex.degree() == 0 {
            return Err(ReelError::NoEdges(format!("{id:?}")));
        }
        let total: f64 = vertex.neighbors.values().map(|w| w.score).sum();
        Ok(total / vertex.degree() as f64)
    }

    /// The similarity score between two vertices under the chosen metric.
    ///
    /// Returns a value in `[0, 1]`; 0 if either vertex has no incident
    /// edges. The restriction threshold only applies to the weighted
    /// metrics, but a negative restriction is rejected regardless.
    ///
    /// # Errors
    ///
    /// [`ReelError::VertexNotFound`] if either id is absent, and
    /// [`ReelError::InvalidRestriction`] if the restriction is negative.
    pub fn similarity(
        &self,
        a: &V,
        b: &V,
        metric: SimilarityMetric,
        restriction: f64,
    ) -> Result<f64> {
        if restriction < 0.0 {
            return Err(ReelError::InvalidRestriction(restriction));
        }
        let ia = self.lookup(a)?;
        let ib = self.lookup(b)?;
        Ok(self.similarity_between(ia, ib, metric, restriction))
    }

    /// Rank same-kind candidates by similarity to the seed vertex.
    ///
    /// The candidate pool is every vertex of the seed's kind except the seed
    /// itself. Each candidate's similarity is scaled by 1000 and rounded to
    /// 2 decimals; candidates with zero similarity are dropped. Results are
    /// ordered by score descending, then candidate id ascending, and
    /// truncated to `limit` entries.
    ///
    /// # Errors
    ///
    /// [`ReelError::InvalidLimit`] if `limit < 1`,
    /// [`ReelError::InvalidRestriction`] if the restriction is negative, and
    /// [`ReelError::VertexNotFound`] if the seed is absent.
    pub fn recommend(
        &self,
        seed: &V,
        limit: usize,
        metric: SimilarityMetric,
        restriction: f64,
    ) -> Result<Vec<Recommendation<V>>> {
        if limit < 1 {
            return Err(ReelError::InvalidLimit(limit));
        }
        if restriction < 0.0 {
            return Err(ReelError::InvalidRestriction(restriction));
        }
        let seed_slot = self.lookup(seed)?;
        let seed_kind = self.vertices[seed_slot].kind;

        let mut ratings: Vec<Recommendation<V>> = Vec::new();
        for (slot, candidate) in self.vertices.iter().enumerate() {
            if slot == seed_slot || candidate.kind != seed_kind {
                continue;
            }
            let score = self.similarity_between(seed_slot, slot, metric, restriction);
            if score > 0.0 {
                ratings.push(Recommendation {
                    score: (score * 1000.0 * 100.0).round() / 100.0,
                    id: candidate.id.clone(),
                    seed: seed.clone(),
                });
            }
        }

        ratings.sort_by(|x, y| {
            OrderedFloat(y.score)
                .cmp(&OrderedFloat(x.score))
                .then_with(|| x.id.cmp(&y.id))
        });
        ratings.truncate(limit);
        Ok(ratings)
    }

    fn lookup(&self, id: &V) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ReelError::VertexNotFound(format!("{id:?}")))
    }

    fn edge_weight(&self, a: &V, b: &V) -> Option<EdgeWeight> {
        let ia = self.index.get(a)?;
        let ib = self.index.get(b)?;
        self.vertices[*ia].neighbors.get(ib).copied()
    }

    /// Metric dispatch over validated arena slots.
    ///
    /// One pass over the smaller neighborhood counts the intersection and
    /// the restriction-matched subset together; the union size follows by
    /// inclusion-exclusion. The restriction never shrinks the union.
    fn similarity_between(
        &self,
        ia: usize,
        ib: usize,
        metric: SimilarityMetric,
        restriction: f64,
    ) -> f64 {
        let (va, vb) = (&self.vertices[ia], &self.vertices[ib]);
        if va.degree() == 0 || vb.degree() == 0 {
            return 0.0;
        }
        let (small, large) = if va.degree() <= vb.degree() {
            (va, vb)
        } else {
            (vb, va)
        };

        let mut common = 0usize;
        let mut matched = 0usize;
        for (slot, w_small) in &small.neighbors {
            let Some(w_large) = large.neighbors.get(slot) else {
                continue;
            };
            common += 1;
            let agrees = match metric {
                SimilarityMetric::Unweighted => true,
                SimilarityMetric::Weighted => {
                    within_restriction(w_small.score, w_large.score, restriction)
                }
                SimilarityMetric::WeightedPlus => {
                    within_restriction(w_small.advanced(), w_large.advanced(), restriction)
                }
            };
            if agrees {
                matched += 1;
            }
        }

        let union = va.degree() + vb.degree() - common;
        jaccard_index(matched, union)
    }
}
