//! Prim's minimum spanning tree.
//!
//! Grows a tree from the start vertex using the lazy heap: every improved
//! connecting edge is pushed as a new entry, and entries for vertices already
//! in the tree are discarded when popped. Only the start vertex's component
//! is spanned.

use crate::graph::{Weight, WeightedGraph};
use crate::heap::PriorityQueue;
use serde::Serialize;
use tracing::debug;

/// Spanning tree of the component containing `root`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub root: usize,
    /// Tree parent of each vertex; `None` for the root and unreached vertices.
    pub parent: Vec<Option<usize>>,
    /// Weight of the edge joining each vertex to its parent (`Some(0)` for
    /// the root, `None` when unreached).
    pub key: Vec<Option<Weight>>,
}

impl SpanningTree {
    /// Tree edges as `(vertex, parent, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.parent
            .iter()
            .zip(&self.key)
            .enumerate()
            .filter_map(|(v, (parent, key))| Some((v, (*parent)?, (*key)?)))
    }

    /// Sum of the tree edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges().map(|(_, _, w)| u64::from(w)).sum()
    }

    /// Number of vertices spanned, root included.
    pub fn size(&self) -> usize {
        self.key.iter().filter(|k| k.is_some()).count()
    }
}

/// Minimum spanning tree of `start`'s component.
/// An invalid `start` yields a tree with every vertex unreached.
pub fn prim(graph: &WeightedGraph, start: usize) -> SpanningTree {
    let n = graph.len();
    let mut tree = SpanningTree {
        root: start,
        parent: vec![None; n],
        key: vec![None; n],
    };
    if start >= n {
        return tree;
    }

    let mut settled = vec![false; n];
    let mut heap = PriorityQueue::with_capacity(n);
    let mut pushes = 1usize;
    let mut stale = 0usize;

    tree.key[start] = Some(0);
    heap.insert(start, 0);

    while let Some(entry) = heap.extract_min() {
        let u = entry.vertex;
        if settled[u] {
            stale += 1;
            continue;
        }
        settled[u] = true;

        for neighbor in graph.neighbors(u) {
            let (v, w) = (neighbor.vertex, neighbor.weight);
            if !settled[v] && tree.key[v].map_or(true, |k| w < k) {
                tree.key[v] = Some(w);
                tree.parent[v] = Some(u);
                heap.insert(v, w);
                pushes += 1;
            }
        }
    }

    debug!(start, spanned = tree.size(), pushes, stale, "prim");
    tree
}
