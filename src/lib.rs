//! Weighted undirected graph algorithms for browser-side visualizers.
//!
//! The core is plain Rust: build a [`WeightedGraph`], then run BFS, DFS,
//! Prim or Dijkstra from a start vertex. [`GraphEngine`] validates raw
//! caller input, and the WASM bindings expose it to JavaScript.

use wasm_bindgen::prelude::*;

mod algorithms;
mod config;
mod containers;
mod engine;
mod error;
mod graph;
mod heap;
mod wasm;

pub use algorithms::{
    bfs, bfs_tree, dfs, dijkstra, prim, BfsTree, Distance, ShortestPaths, SpanningTree,
};
pub use config::{DuplicateEdgePolicy, EngineConfig, DEFAULT_MAX_VERTICES};
pub use containers::{Queue, Stack};
pub use engine::{GraphEngine, INFINITY, NO_PARENT};
pub use error::{GraphError, Result};
pub use graph::{Neighbor, Neighbors, Weight, WeightedGraph, MAX_VERTICES};
pub use heap::{HeapEntry, PriorityQueue};
pub use wasm::GraphHandle;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
