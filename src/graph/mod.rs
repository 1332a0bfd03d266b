//! Graph layouts and depth-first traversals built on ghost-token branding.
//!
//! - `basic`: the validated adjacency-list graph and branded vertex ids
//! - `dfs`: the explicit-stack walk, its visitor hooks and the spanning tree

pub mod basic;
pub mod dfs;
pub(crate) mod access;

pub use basic::{AdjacencyGraph, BrandedGraph, BrandedVertex};
pub use dfs::{
    build_dfs_tree, build_dfs_tree_from, depth_first, BuildOptions, DfsEvent, DfsTree,
    DfsTreeBuilder, DfsVisitor, DfsWalk,
};
