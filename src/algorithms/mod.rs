//! Graph algorithm implementations.
//!
//! Each algorithm allocates its own working state (visited flags, frontier,
//! heap) per call and leaves the graph untouched.

pub mod mst;
pub mod shortest_path;
pub mod traversal;

pub use mst::{prim, SpanningTree};
pub use shortest_path::{dijkstra, Distance, ShortestPaths};
pub use traversal::{bfs, bfs_tree, dfs, BfsTree};
