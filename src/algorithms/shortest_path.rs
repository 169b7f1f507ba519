//! Dijkstra's single-source shortest paths.
//!
//! The heap holds `(vertex, distance)` entries. An entry whose distance is
//! larger than the vertex's current best is stale and skipped, so no visited
//! set is needed. Weights are unsigned, which is all the algorithm requires.

use crate::graph::WeightedGraph;
use crate::heap::PriorityQueue;
use serde::Serialize;
use tracing::debug;

/// Path length. Wide enough that summing `u32` weights cannot overflow.
pub type Distance = u64;

/// Distances from `source`, with the predecessor that produced each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: usize,
    /// `None` means unreachable.
    pub dist: Vec<Option<Distance>>,
    /// Previous vertex on a shortest path; `None` for the source and
    /// unreachable vertices.
    pub predecessor: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Shortest distance to `v`, `None` if unreachable or not a vertex.
    pub fn distance(&self, v: usize) -> Option<Distance> {
        self.dist.get(v).copied().flatten()
    }

    /// Whether some path leads from the source to `v`.
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices on a shortest path from the source to `target`, both ends
    /// included. `None` if `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Shortest distances from `start` to every vertex.
/// An invalid `start` yields all vertices unreachable.
pub fn dijkstra(graph: &WeightedGraph, start: usize) -> ShortestPaths {
    let n = graph.len();
    let mut paths = ShortestPaths {
        source: start,
        dist: vec![None; n],
        predecessor: vec![None; n],
    };
    if start >= n {
        return paths;
    }

    let mut heap = PriorityQueue::with_capacity(n);
    let mut pushes = 1usize;
    let mut stale = 0usize;

    paths.dist[start] = Some(0);
    heap.insert(start, 0);

    while let Some(entry) = heap.extract_min() {
        let (u, d) = (entry.vertex, entry.key);
        if paths.dist[u].is_some_and(|best| d > best) {
            stale += 1;
            continue;
        }

        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            let candidate = d + Distance::from(neighbor.weight);
            if paths.dist[v].map_or(true, |best| candidate < best) {
                paths.dist[v] = Some(candidate);
                paths.predecessor[v] = Some(u);
                heap.insert(v, candidate);
                pushes += 1;
            }
        }
    }

    debug!(
        start,
        reached = paths.dist.iter().filter(|d| d.is_some()).count(),
        pushes,
        stale,
        "dijkstra"
    );
    paths
}
