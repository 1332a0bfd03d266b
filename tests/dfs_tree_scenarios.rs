use std::collections::BTreeMap;

use dfs_tree::{build_dfs_tree, AdjacencyGraph, DfsTree, DfsTreeBuilder, TreeError};

fn map(entries: &[(usize, &[usize])]) -> BTreeMap<usize, Vec<usize>> {
    entries.iter().map(|&(k, v)| (k, v.to_vec())).collect()
}

#[test]
fn cyclic_graph_becomes_a_path() {
    let graph = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];
    let tree = build_dfs_tree(&graph).unwrap();
    assert_eq!(tree.as_map(), &map(&[(0, &[1]), (1, &[2]), (2, &[3])]));
}

#[test]
fn linear_graph_is_its_own_tree() {
    let graph = vec![vec![1], vec![0, 2], vec![1, 3], vec![2]];
    let tree = build_dfs_tree(&graph).unwrap();
    assert_eq!(tree.as_map(), &map(&[(0, &[1]), (1, &[2]), (2, &[3])]));
}

#[test]
fn single_isolated_vertex_has_no_edges() {
    let graph: Vec<Vec<usize>> = vec![vec![]];
    let tree = build_dfs_tree(&graph).unwrap();
    assert!(tree.as_map().is_empty());
    assert!(tree.is_trivial());
    assert_eq!(tree.vertices(), vec![0]);
}

#[test]
fn binary_tree_shape_is_preserved() {
    let graph = vec![
        vec![1, 2],    // 0
        vec![0, 3, 4], // 1
        vec![0, 5, 6], // 2
        vec![1],       // 3
        vec![1],       // 4
        vec![2],       // 5
        vec![2],       // 6
    ];
    let tree = build_dfs_tree(&graph).unwrap();
    assert_eq!(tree.children(0), &[1, 2]);
    assert_eq!(tree.children(1), &[3, 4]);
    assert_eq!(tree.children(2), &[5, 6]);
    for leaf in 3..=6 {
        assert!(!tree.as_map().contains_key(&leaf), "leaf {leaf} is a key");
        assert!(tree.contains(leaf));
    }
}

#[test]
fn children_are_sorted_regardless_of_discovery_order() {
    // Star around 0, neighbors listed in descending order.
    let graph = vec![vec![3, 2, 1], vec![0], vec![0], vec![0]];
    let graph_model = AdjacencyGraph::from_adjacency(&graph).unwrap();
    assert_eq!(graph_model.preorder(0).unwrap(), vec![0, 3, 2, 1]);

    let tree = build_dfs_tree(&graph).unwrap();
    assert_eq!(tree.children(0), &[1, 2, 3]);
}

#[test]
fn unreachable_vertices_never_appear() {
    // 0-1 connected; 2-3 a separate component.
    let graph = vec![vec![1], vec![0], vec![3], vec![2]];
    let tree = build_dfs_tree(&graph).unwrap();
    assert_eq!(tree.as_map(), &map(&[(0, &[1])]));
    assert!(!tree.contains(2));
    assert!(!tree.contains(3));
    assert_eq!(tree.depth(3), None);
}

#[test]
fn empty_graph_is_rejected() {
    let graph: Vec<Vec<usize>> = Vec::new();
    assert_eq!(build_dfs_tree(&graph), Err(TreeError::EmptyGraph));
}

#[test]
fn out_of_range_neighbor_is_rejected() {
    let graph = vec![vec![5]];
    assert_eq!(
        build_dfs_tree(&graph),
        Err(TreeError::VertexOutOfRange {
            vertex: 0,
            neighbor: 5,
            vertex_count: 1
        })
    );
}

#[test]
fn out_of_range_neighbor_on_unreachable_row_is_rejected() {
    // Vertex 1 is never visited from 0, but its row is still checked.
    let graph = vec![vec![], vec![9]];
    assert_eq!(
        build_dfs_tree(&graph),
        Err(TreeError::VertexOutOfRange {
            vertex: 1,
            neighbor: 9,
            vertex_count: 2
        })
    );
}

#[test]
fn builds_are_deterministic() {
    let graph = vec![vec![2, 1], vec![0, 2], vec![1, 0, 3], vec![2]];
    let first = build_dfs_tree(&graph).unwrap();
    let second = build_dfs_tree(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn input_is_not_mutated() {
    let graph = vec![vec![2, 1], vec![0], vec![0]];
    let before = graph.clone();
    let _ = build_dfs_tree(&graph).unwrap();
    assert_eq!(graph, before);
}

#[test]
fn builder_and_graph_entry_points_agree() {
    let graph = vec![vec![1, 2], vec![0, 3, 4], vec![0, 5, 6], vec![1], vec![1], vec![2], vec![2]];
    let model = AdjacencyGraph::from_adjacency(&graph).unwrap();

    let from_fn = build_dfs_tree(&graph).unwrap();
    let from_builder = DfsTreeBuilder::new().build(&graph).unwrap();
    let from_model = model.dfs_tree(0).unwrap();
    assert_eq!(from_fn, from_builder);
    assert_eq!(from_fn, from_model);
}

#[test]
fn tree_survives_json_round_trip() {
    let graph = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];
    let tree = build_dfs_tree(&graph).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: DfsTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert!(back.validate().is_ok());
}

#[test]
fn signed_json_graph_is_validated() {
    let rows: Vec<Vec<i64>> = serde_json::from_str("[[1],[0,-1]]").unwrap();
    assert_eq!(
        AdjacencyGraph::from_signed(&rows),
        Err(TreeError::NegativeVertex {
            vertex: 1,
            neighbor: -1
        })
    );

    let rows: Vec<Vec<i64>> = serde_json::from_str("[[1],[0,2],[1]]").unwrap();
    let graph = AdjacencyGraph::from_signed(&rows).unwrap();
    assert_eq!(graph.dfs_tree(0).unwrap().to_string(), "0 -> [1]\n1 -> [2]\n");
}
