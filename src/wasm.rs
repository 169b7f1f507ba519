//! JavaScript bindings.
//!
//! `GraphHandle` wraps a [`GraphEngine`] so each page or worker owns its own
//! graph instead of sharing a global one. Results come back as `Int32Array`s
//! using the sentinels documented on the engine; the structured results
//! (BFS tree, spanning tree, shortest paths, neighbor lists) come back as
//! plain JS objects.

use crate::config::EngineConfig;
use crate::engine::GraphEngine;
use crate::error::GraphError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

#[wasm_bindgen]
pub struct GraphHandle {
    engine: GraphEngine,
}

impl Default for GraphHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GraphHandle {
    /// Handle with the default config and no graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> GraphHandle {
        GraphHandle {
            engine: GraphEngine::new(),
        }
    }

    /// Build a handle from a plain JS config object, e.g.
    /// `{ max_vertices: 256, duplicate_edges: "reject" }`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<GraphHandle, JsError> {
        let config: EngineConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(GraphHandle {
            engine: GraphEngine::with_config(config),
        })
    }

    /// The active config as a JS object.
    #[wasm_bindgen(js_name = config)]
    pub fn config(&self) -> Result<JsValue, JsError> {
        to_js(self.engine.config())
    }

    /// Replace the current graph with `vertices` isolated vertices.
    #[wasm_bindgen(js_name = createGraph)]
    pub fn create_graph(&mut self, vertices: i32) -> Result<(), JsError> {
        Ok(self.engine.create_graph(vertices)?)
    }

    /// Returns false (and leaves the graph unchanged) if the edge was
    /// rejected.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, u: i32, v: i32, weight: i32) -> bool {
        self.engine.add_edge(u, v, weight).is_ok()
    }

    /// Vertex count, or `undefined` before `createGraph`.
    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> Option<u32> {
        self.engine.vertex_count().map(|n| n as u32)
    }

    /// `[{ vertex, weight }, ...]` for `u`, newest edge first.
    #[wasm_bindgen(js_name = neighbors)]
    pub fn neighbors(&self, u: i32) -> Result<JsValue, JsError> {
        to_js(&self.engine.neighbors(u)?)
    }

    /// BFS visit order from `start`.
    #[wasm_bindgen(js_name = runBFS)]
    pub fn run_bfs(&self, start: i32) -> Result<Vec<i32>, JsError> {
        Ok(self.engine.bfs_buffer(start)?)
    }

    /// DFS visit order from `start`.
    #[wasm_bindgen(js_name = runDFS)]
    pub fn run_dfs(&self, start: i32) -> Result<Vec<i32>, JsError> {
        Ok(self.engine.dfs_buffer(start)?)
    }

    /// MST parent per vertex, `-1` for the root and unreached vertices.
    #[wasm_bindgen(js_name = runPrims)]
    pub fn run_prims(&self, start: i32) -> Result<Vec<i32>, JsError> {
        Ok(self.engine.prim_buffer(start)?)
    }

    /// Distance per vertex, `2147483647` for unreachable vertices.
    #[wasm_bindgen(js_name = runDijkstra)]
    pub fn run_dijkstra(&self, start: i32) -> Result<Vec<i32>, JsError> {
        Ok(self.engine.dijkstra_buffer(start)?)
    }

    /// `{ order, parent, depth }` of a BFS from `start`; unreached entries
    /// are `undefined`.
    #[wasm_bindgen(js_name = bfsTree)]
    pub fn bfs_tree(&self, start: i32) -> Result<JsValue, JsError> {
        to_js(&self.engine.run_bfs_tree(start)?)
    }

    /// `{ root, parent, key }` of the minimum spanning tree from `start`.
    #[wasm_bindgen(js_name = spanningTree)]
    pub fn spanning_tree(&self, start: i32) -> Result<JsValue, JsError> {
        to_js(&self.engine.run_prim(start)?)
    }

    /// `{ source, dist, predecessor }` from `start`; unreachable entries are
    /// `undefined`.
    #[wasm_bindgen(js_name = shortestPaths)]
    pub fn shortest_paths(&self, start: i32) -> Result<JsValue, JsError> {
        to_js(&self.engine.run_dijkstra(start)?)
    }

    /// Shortest path from `start` to `target` as vertex indices; empty if
    /// `target` is unreachable.
    #[wasm_bindgen(js_name = shortestPath)]
    pub fn shortest_path(&self, start: i32, target: i32) -> Result<Vec<i32>, JsError> {
        let target = self.engine.vertex(target)?;
        let paths = self.engine.run_dijkstra(start)?;
        Ok(paths
            .path_to(target)
            .unwrap_or_default()
            .into_iter()
            .map(|v| v as i32)
            .collect())
    }
}
