#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use std::collections::BTreeSet;
use wgraph_wasm::{bfs, bfs_tree, dfs, dijkstra, prim, PriorityQueue, Weight, WeightedGraph};

#[derive(Debug, Clone)]
enum HeapOp {
    Insert(usize, u32),
    ExtractMin,
}

fn arb_graph() -> impl Strategy<Value = (WeightedGraph, usize)> {
    (1usize..10).prop_flat_map(|n| {
        (
            proptest::collection::vec((0..n, 0..n, 0u32..20), 0..30),
            0..n,
        )
            .prop_map(move |(edges, start)| {
                let mut g = WeightedGraph::new(n);
                for (u, v, w) in edges {
                    g.add_edge(u, v, w).unwrap();
                }
                (g, start)
            })
    })
}

fn bellman_ford(graph: &WeightedGraph, start: usize) -> Vec<Option<u64>> {
    let mut dist = vec![None; graph.len()];
    dist[start] = Some(0);
    for _ in 0..graph.len() {
        for (u, v, w) in graph.edges() {
            for (a, b) in [(u, v), (v, u)] {
                if let Some(da) = dist[a] {
                    let candidate = da + u64::from(w);
                    if dist[b].map_or(true, |db| candidate < db) {
                        dist[b] = Some(candidate);
                    }
                }
            }
        }
    }
    dist
}

fn kruskal_weight(graph: &WeightedGraph, component: &BTreeSet<usize>) -> u64 {
    fn find(parent: &mut [usize], x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        parent[x] = root;
        root
    }

    let mut edges: Vec<(Weight, usize, usize)> = graph
        .edges()
        .filter(|(u, _, _)| component.contains(u))
        .map(|(u, v, w)| (w, u, v))
        .collect();
    edges.sort_unstable();

    let mut parent: Vec<usize> = (0..graph.len()).collect();
    let mut total = 0u64;
    for (w, u, v) in edges {
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        if ru != rv {
            parent[ru] = rv;
            total += u64::from(w);
        }
    }
    total
}

proptest! {
    #[test]
    fn test_bfs_visits_each_reachable_vertex_once((graph, start) in arb_graph()) {
        let order = bfs(&graph, start);
        let unique: BTreeSet<usize> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        prop_assert_eq!(order[0], start);

        let dfs_set: BTreeSet<usize> = dfs(&graph, start).into_iter().collect();
        prop_assert_eq!(unique, dfs_set);
    }

    #[test]
    fn test_bfs_parent_one_level_up((graph, start) in arb_graph()) {
        let tree = bfs_tree(&graph, start);
        prop_assert_eq!(tree.depth[start], Some(0));
        for &v in &tree.order {
            if let Some(p) = tree.parent[v] {
                prop_assert_eq!(tree.depth[v], tree.depth[p].map(|d| d + 1));
            }
        }
        for (u, v, _) in graph.edges() {
            if let (Some(du), Some(dv)) = (tree.depth[u], tree.depth[v]) {
                prop_assert!(du.abs_diff(dv) <= 1);
            }
        }
    }

    #[test]
    fn test_dijkstra_matches_bellman_ford((graph, start) in arb_graph()) {
        let paths = dijkstra(&graph, start);
        prop_assert_eq!(paths.distance(start), Some(0));
        prop_assert_eq!(&paths.dist, &bellman_ford(&graph, start));

        for (u, v, w) in graph.edges() {
            if let (Some(du), Some(dv)) = (paths.dist[u], paths.dist[v]) {
                prop_assert!(dv <= du + u64::from(w));
                prop_assert!(du <= dv + u64::from(w));
            }
        }
        for v in 0..graph.len() {
            if let Some(path) = paths.path_to(v) {
                let length: u64 = path
                    .windows(2)
                    .map(|pair| u64::from(graph.weight(pair[0], pair[1]).unwrap()))
                    .sum();
                prop_assert_eq!(Some(length), paths.dist[v]);
            }
        }
    }

    #[test]
    fn test_prim_is_minimum_spanning_tree((graph, start) in arb_graph()) {
        let tree = prim(&graph, start);
        let component: BTreeSet<usize> = bfs(&graph, start).into_iter().collect();

        prop_assert_eq!(tree.size(), component.len());
        prop_assert_eq!(tree.edges().count() + 1, component.len());
        for (v, p, w) in tree.edges() {
            prop_assert!(component.contains(&v));
            prop_assert_eq!(graph.weight(v, p), Some(w));
        }
        prop_assert_eq!(tree.total_weight(), kruskal_weight(&graph, &component));
    }

    #[test]
    fn test_algorithms_idempotent((graph, start) in arb_graph()) {
        prop_assert_eq!(dijkstra(&graph, start), dijkstra(&graph, start));
        prop_assert_eq!(prim(&graph, start), prim(&graph, start));
    }

    #[test]
    fn test_heap_yields_non_decreasing_keys(ops in proptest::collection::vec(
        prop_oneof![
            (0usize..16, any::<u32>()).prop_map(|(v, k)| HeapOp::Insert(v, k)),
            Just(HeapOp::ExtractMin),
        ],
        0..100
    )) {
        let mut pq = PriorityQueue::new();
        let mut model: Vec<u32> = Vec::new();

        for op in ops {
            match op {
                HeapOp::Insert(v, k) => {
                    pq.insert(v, k);
                    model.push(k);
                }
                HeapOp::ExtractMin => {
                    model.sort_unstable_by(|a, b| b.cmp(a));
                    prop_assert_eq!(pq.extract_min().map(|e| e.key), model.pop());
                }
            }
            prop_assert_eq!(pq.len(), model.len());
        }

        let mut last = None;
        while let Some(entry) = pq.extract_min() {
            prop_assert!(last.map_or(true, |l| l <= entry.key));
            last = Some(entry.key);
        }
        prop_assert!(pq.is_empty());
    }
}
