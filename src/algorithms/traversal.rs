//! Breadth-first and depth-first traversal.
//!
//! Both walk neighbors in the graph's newest-first order, so the visit order
//! is fully determined by the edge insertion history. Vertices outside the
//! start vertex's component are never visited.

use crate::containers::{Queue, Stack};
use crate::graph::WeightedGraph;
use serde::Serialize;
use tracing::debug;

/// BFS visit order together with the search tree it induces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BfsTree {
    /// Visited vertices in dequeue order, start first.
    pub order: Vec<usize>,
    /// Vertex that discovered each vertex; `None` for the start and for
    /// unreached vertices.
    pub parent: Vec<Option<usize>>,
    /// Edge count from the start; `None` for unreached vertices.
    pub depth: Vec<Option<usize>>,
}

impl BfsTree {
    fn unreached(n: usize) -> Self {
        Self {
            order: Vec::new(),
            parent: vec![None; n],
            depth: vec![None; n],
        }
    }

    /// Whether the search reached `v`.
    pub fn is_reached(&self, v: usize) -> bool {
        self.depth.get(v).is_some_and(Option::is_some)
    }
}

/// Breadth-first visit order from `start`.
/// Returns an empty order if `start` is not a vertex.
pub fn bfs(graph: &WeightedGraph, start: usize) -> Vec<usize> {
    bfs_tree(graph, start).order
}

/// Breadth-first search recording parent and depth of every reached vertex.
///
/// A vertex is marked visited when it is enqueued, so it is enqueued at most
/// once and its depth is final at that point.
pub fn bfs_tree(graph: &WeightedGraph, start: usize) -> BfsTree {
    let n = graph.len();
    if start >= n {
        return BfsTree::unreached(n);
    }

    let mut tree = BfsTree::unreached(n);
    let mut visited = vec![false; n];
    let mut queue = Queue::with_capacity(n);

    visited[start] = true;
    tree.depth[start] = Some(0);
    queue.enqueue(start);

    while let Some(u) = queue.dequeue() {
        tree.order.push(u);
        let next_depth = tree.depth[u].map(|d| d + 1);
        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            if !visited[v] {
                visited[v] = true;
                tree.parent[v] = Some(u);
                tree.depth[v] = next_depth;
                queue.enqueue(v);
            }
        }
    }

    debug!(start, visited = tree.order.len(), "bfs");
    tree
}

/// Depth-first visit order from `start` using an explicit stack.
///
/// A vertex may sit on the stack several times, once per edge seen before it
/// was visited. It is recorded and expanded only on its first pop; later pops
/// are discarded. Returns an empty order if `start` is not a vertex.
pub fn dfs(graph: &WeightedGraph, start: usize) -> Vec<usize> {
    let n = graph.len();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut stack = Stack::with_capacity(n);
    let mut order = Vec::new();
    let mut discarded = 0usize;

    stack.push(start);

    while let Some(u) = stack.pop() {
        if visited[u] {
            discarded += 1;
            continue;
        }
        visited[u] = true;
        order.push(u);

        for neighbor in graph.neighbors(u) {
            if !visited[neighbor.vertex] {
                stack.push(neighbor.vertex);
            }
        }
    }

    debug!(start, visited = order.len(), discarded, "dfs");
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> WeightedGraph {
        let mut g = WeightedGraph::new(n);
        for &(u, v) in edges {
            g.add_edge(u, v, 1).unwrap();
        }
        g
    }

    #[test]
    fn test_single_vertex() {
        let g = WeightedGraph::new(1);
        assert_eq!(bfs(&g, 0), vec![0]);
        assert_eq!(dfs(&g, 0), vec![0]);
    }

    #[test]
    fn test_invalid_start() {
        let g = graph(2, &[(0, 1)]);
        assert!(bfs(&g, 9).is_empty());
        assert!(dfs(&g, 9).is_empty());
        assert!(bfs_tree(&g, 9).parent.iter().all(Option::is_none));
    }

    #[test]
    fn test_bfs_chain() {
        // 0 - 1 - 2 - 3
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(bfs(&g, 0), vec![0, 1, 2, 3]);
        assert_eq!(bfs(&g, 2), vec![2, 3, 1, 0]);
    }

    #[test]
    fn test_bfs_newest_neighbor_first() {
        //   0
        //  /|\
        // 1 2 3   (edges added 1, 2, 3)
        let g = graph(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(bfs(&g, 0), vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_bfs_tree_depths() {
        //     0
        //    / \
        //   1   2
        //    \ /
        //     3 - 4
        let g = graph(5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        let tree = bfs_tree(&g, 0);

        assert_eq!(tree.depth, vec![Some(0), Some(1), Some(1), Some(2), Some(3)]);
        assert_eq!(tree.parent[0], None);
        assert_eq!(tree.parent[4], Some(3));
        // 2 is dequeued before 1, so it discovers 3
        assert_eq!(tree.parent[3], Some(2));
        assert!(tree.is_reached(4));
    }

    #[test]
    fn test_dfs_goes_deep() {
        //   0
        //  / \
        // 1   2
        // |
        // 3
        let g = graph(4, &[(0, 2), (0, 1), (1, 3)]);
        // 0's neighbors are pushed newest first (1, then 2), so 2 pops first
        assert_eq!(dfs(&g, 0), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_dfs_discards_duplicates() {
        // Triangle: 2 gets pushed from both 0 and 1.
        let g = graph(3, &[(0, 1), (0, 2), (1, 2)]);
        let order = dfs(&g, 0);
        assert_eq!(order.len(), 3);
        assert_eq!(order[0], 0);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_disconnected_component_untouched() {
        // 0 - 1    2 - 3
        let g = graph(4, &[(0, 1), (2, 3)]);
        assert_eq!(bfs(&g, 0), vec![0, 1]);
        assert_eq!(dfs(&g, 3), vec![3, 2]);

        let tree = bfs_tree(&g, 0);
        assert!(!tree.is_reached(2));
        assert_eq!(tree.depth[3], None);
    }

    #[test]
    fn test_cycle_terminates() {
        // 0 - 1 - 2 - 0
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(bfs(&g, 1).len(), 3);
        assert_eq!(dfs(&g, 1).len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let g = graph(6, &[(0, 4), (4, 5), (0, 1), (1, 2), (2, 5), (3, 1)]);
        assert_eq!(bfs(&g, 0), bfs(&g, 0));
        assert_eq!(dfs(&g, 0), dfs(&g, 0));
    }
}
