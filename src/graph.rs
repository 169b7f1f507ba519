//! Undirected weighted graph with a fixed vertex count.
//!
//! Edges live in two places: a per-vertex adjacency list for neighbor
//! enumeration and a dense weight matrix for O(1) lookups. Both are kept in
//! agreement by `add_edge`, including on repeated inserts of the same pair.

use crate::config::DuplicateEdgePolicy;
use crate::error::{GraphError, Result};
use serde::Serialize;

/// Edge weight. Unsigned, so negative weights cannot reach the algorithms.
pub type Weight = u32;

/// Largest vertex count a graph accepts. The matrix holds `n * n` cells, so
/// this bounds it at 16M cells.
pub const MAX_VERTICES: usize = 1 << 12;

/// One adjacency entry: the far endpoint and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: Weight,
}

/// Undirected weighted graph over vertices `0..len()`.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: Vec<Vec<Neighbor>>,
    /// Row-major `n * n` cells; `None` means no edge.
    matrix: Vec<Option<Weight>>,
    edge_count: usize,
    policy: DuplicateEdgePolicy,
}

impl WeightedGraph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_policy(vertex_count, DuplicateEdgePolicy::default())
    }

    /// Create a graph with an explicit duplicate edge policy.
    ///
    /// # Panics
    /// If `vertex_count` exceeds [`MAX_VERTICES`]. Use
    /// [`WeightedGraph::try_with_policy`] for untrusted counts.
    pub fn with_policy(vertex_count: usize, policy: DuplicateEdgePolicy) -> Self {
        assert!(
            vertex_count <= MAX_VERTICES,
            "vertex count {vertex_count} exceeds {MAX_VERTICES}"
        );
        Self::allocate(vertex_count, vertex_count * vertex_count, policy)
    }

    /// Like [`WeightedGraph::with_policy`], but rejects oversized counts
    /// with `InvalidVertexCount` instead of allocating.
    pub fn try_with_policy(vertex_count: usize, policy: DuplicateEdgePolicy) -> Result<Self> {
        let cells = vertex_count
            .checked_mul(vertex_count)
            .filter(|_| vertex_count <= MAX_VERTICES)
            .ok_or(GraphError::InvalidVertexCount {
                count: i64::try_from(vertex_count).unwrap_or(i64::MAX),
                max: MAX_VERTICES,
            })?;
        Ok(Self::allocate(vertex_count, cells, policy))
    }

    fn allocate(vertex_count: usize, cells: usize, policy: DuplicateEdgePolicy) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            matrix: vec![None; cells],
            edge_count: 0,
            policy,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// True for a graph with no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of distinct undirected edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.len()
    }

    /// Insert an undirected edge `u - v` with weight `w`.
    ///
    /// A new pair is prepended to both endpoints' neighbor sequences. An
    /// existing pair is handled according to the graph's
    /// [`DuplicateEdgePolicy`].
    pub fn add_edge(&mut self, u: usize, v: usize, w: Weight) -> Result<()> {
        for endpoint in [u, v] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::VertexOutOfRange {
                    vertex: endpoint as i64,
                    vertex_count: self.len(),
                });
            }
        }

        if self.has_edge(u, v) {
            return match self.policy {
                DuplicateEdgePolicy::Reject => Err(GraphError::DuplicateEdge { u, v }),
                DuplicateEdgePolicy::Replace => {
                    self.replace_weight(u, v, w);
                    Ok(())
                }
            };
        }

        self.adjacency[u].push(Neighbor { vertex: v, weight: w });
        self.adjacency[v].push(Neighbor { vertex: u, weight: w });
        self.set_cell(u, v, Some(w));
        self.edge_count += 1;
        Ok(())
    }

    fn replace_weight(&mut self, u: usize, v: usize, w: Weight) {
        for (from, to) in [(u, v), (v, u)] {
            for entry in self.adjacency[from].iter_mut().filter(|n| n.vertex == to) {
                entry.weight = w;
            }
        }
        self.set_cell(u, v, Some(w));
    }

    fn set_cell(&mut self, u: usize, v: usize, w: Option<Weight>) {
        let n = self.len();
        self.matrix[u * n + v] = w;
        self.matrix[v * n + u] = w;
    }

    /// Weight of edge `u - v`, or `None` if absent or out of range.
    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) {
            return None;
        }
        self.matrix[u * self.len() + v]
    }

    /// Whether `u` and `v` are joined by an edge of any weight, zero included.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }

    /// Number of adjacency entries of `v` (a self-loop contributes two).
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }

    /// Neighbors of `u`, most recently added first.
    ///
    /// The iterator is `Clone`, so a walk can be restarted from any point.
    /// An out-of-range `u` yields nothing.
    pub fn neighbors(&self, u: usize) -> Neighbors<'_> {
        let list = self.adjacency.get(u).map_or(&[][..], Vec::as_slice);
        Neighbors {
            inner: list.iter().rev(),
        }
    }

    /// Every undirected edge once, as `(u, v, w)` with `u <= v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        let n = self.len();
        (0..n).flat_map(move |u| {
            (u..n).filter_map(move |v| self.matrix[u * n + v].map(|w| (u, v, w)))
        })
    }
}

/// Iterator over a vertex's adjacency entries, newest first.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: std::iter::Rev<std::slice::Iter<'a, Neighbor>>,
}

impl Iterator for Neighbors<'_> {
    type Item = Neighbor;

    fn next(&mut self) -> Option<Neighbor> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
