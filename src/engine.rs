//! Engine handle: owns the current graph and validates raw caller input.
//!
//! Callers (the JS boundary, tests, native hosts) speak in `i32` indices and
//! weights. Everything is checked here before it reaches the graph or the
//! algorithms, which assume valid vertices.

use crate::algorithms::{self, BfsTree, ShortestPaths, SpanningTree};
use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Neighbor, Weight, WeightedGraph, MAX_VERTICES};
use tracing::{debug, warn};

/// Parent value for the root and for unreached vertices in a parent buffer.
pub const NO_PARENT: i32 = -1;

/// Distance value for unreachable vertices in a distance buffer.
pub const INFINITY: i32 = i32::MAX;

/// Holds at most one graph at a time; `create_graph` replaces it.
#[derive(Debug, Clone, Default)]
pub struct GraphEngine {
    config: EngineConfig,
    graph: Option<WeightedGraph>,
}

impl GraphEngine {
    /// Engine with the default config and no graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with `config` and no graph. A `max_vertices` above
    /// [`MAX_VERTICES`] is still capped there by `create_graph`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            graph: None,
        }
    }

    /// Settings applied to every graph this engine creates.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The current graph.
    pub fn graph(&self) -> Result<&WeightedGraph> {
        self.graph.as_ref().ok_or(GraphError::NotInitialized)
    }

    /// Vertex count of the current graph, if any.
    pub fn vertex_count(&self) -> Option<usize> {
        self.graph.as_ref().map(WeightedGraph::len)
    }

    /// Largest count `create_graph` accepts.
    pub fn max_vertices(&self) -> usize {
        self.config.max_vertices.min(MAX_VERTICES)
    }

    /// Replace the current graph with `vertex_count` isolated vertices.
    /// On error the current graph is kept.
    pub fn create_graph(&mut self, vertex_count: i32) -> Result<()> {
        let max = self.max_vertices();
        let count = usize::try_from(vertex_count)
            .ok()
            .filter(|&c| c <= max)
            .ok_or(GraphError::InvalidVertexCount {
                count: i64::from(vertex_count),
                max,
            })?;
        let graph = WeightedGraph::try_with_policy(count, self.config.duplicate_edges)?;

        if let Some(old) = &self.graph {
            debug!(old_vertices = old.len(), "replacing graph");
        }
        self.graph = Some(graph);
        debug!(vertices = count, policy = ?self.config.duplicate_edges, "create_graph");
        Ok(())
    }

    /// Insert an undirected edge. On error the graph is unchanged.
    pub fn add_edge(&mut self, u: i32, v: i32, weight: i32) -> Result<()> {
        let result = self.try_add_edge(u, v, weight);
        if let Err(err) = &result {
            warn!(u, v, weight, error = %err, "add_edge rejected");
        }
        result
    }

    fn try_add_edge(&mut self, u: i32, v: i32, weight: i32) -> Result<()> {
        let w = Weight::try_from(weight).map_err(|_| GraphError::NegativeWeight {
            weight: i64::from(weight),
        })?;
        let u = self.vertex(u)?;
        let v = self.vertex(v)?;
        let graph = self.graph.as_mut().ok_or(GraphError::NotInitialized)?;
        graph.add_edge(u, v, w)
    }

    /// Check a raw vertex index against the current graph.
    pub fn vertex(&self, raw: i32) -> Result<usize> {
        let graph = self.graph()?;
        usize::try_from(raw)
            .ok()
            .filter(|&v| graph.contains_vertex(v))
            .ok_or(GraphError::VertexOutOfRange {
                vertex: i64::from(raw),
                vertex_count: graph.len(),
            })
    }

    /// Breadth-first visit order from a validated start.
    pub fn run_bfs(&self, start: i32) -> Result<Vec<usize>> {
        let start = self.vertex(start)?;
        Ok(algorithms::bfs(self.graph()?, start))
    }

    /// Depth-first visit order from a validated start.
    pub fn run_dfs(&self, start: i32) -> Result<Vec<usize>> {
        let start = self.vertex(start)?;
        Ok(algorithms::dfs(self.graph()?, start))
    }

    /// Minimum spanning tree of the start vertex's component.
    pub fn run_prim(&self, start: i32) -> Result<SpanningTree> {
        let start = self.vertex(start)?;
        Ok(algorithms::prim(self.graph()?, start))
    }

    /// Shortest distances and predecessors from a validated start.
    pub fn run_dijkstra(&self, start: i32) -> Result<ShortestPaths> {
        let start = self.vertex(start)?;
        Ok(algorithms::dijkstra(self.graph()?, start))
    }

    /// BFS order with the parent and depth of every reached vertex.
    pub fn run_bfs_tree(&self, start: i32) -> Result<BfsTree> {
        let start = self.vertex(start)?;
        Ok(algorithms::bfs_tree(self.graph()?, start))
    }

    /// Adjacency entries of `u`, newest first.
    pub fn neighbors(&self, u: i32) -> Result<Vec<Neighbor>> {
        let u = self.vertex(u)?;
        Ok(self.graph()?.neighbors(u).collect())
    }

    /// BFS visit order. Only visited vertices are listed.
    pub fn bfs_buffer(&self, start: i32) -> Result<Vec<i32>> {
        Ok(to_index_buffer(self.run_bfs(start)?))
    }

    /// DFS visit order. Only visited vertices are listed.
    pub fn dfs_buffer(&self, start: i32) -> Result<Vec<i32>> {
        Ok(to_index_buffer(self.run_dfs(start)?))
    }

    /// One parent per vertex, [`NO_PARENT`] for the root and unreached
    /// vertices.
    pub fn prim_buffer(&self, start: i32) -> Result<Vec<i32>> {
        let tree = self.run_prim(start)?;
        Ok(tree
            .parent
            .iter()
            .map(|p| p.map_or(NO_PARENT, index_to_i32))
            .collect())
    }

    /// One distance per vertex, [`INFINITY`] for unreachable vertices.
    ///
    /// Fails if a reachable distance is `INFINITY` or larger, since it could
    /// not be told apart from the sentinel.
    pub fn dijkstra_buffer(&self, start: i32) -> Result<Vec<i32>> {
        let paths = self.run_dijkstra(start)?;
        paths
            .dist
            .iter()
            .enumerate()
            .map(|(vertex, dist)| match *dist {
                None => Ok(INFINITY),
                Some(distance) => i32::try_from(distance)
                    .ok()
                    .filter(|&d| d != INFINITY)
                    .ok_or(GraphError::DistanceOverflow { vertex, distance }),
            })
            .collect()
    }
}

// Vertex counts come in as i32, so every index fits.
fn index_to_i32(v: usize) -> i32 {
    v as i32
}

fn to_index_buffer(order: Vec<usize>) -> Vec<i32> {
    order.into_iter().map(index_to_i32).collect()
}
