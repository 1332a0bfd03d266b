//! # `dfs_tree` - Depth-First Spanning Trees
//!
//! Builds the depth-first spanning tree of an undirected graph given as an
//! adjacency list, rooted at vertex 0 by default. The result maps every vertex
//! that has tree children to its ascending list of children.
//!
//! ## Safety Guarantees
//!
//! - **Validate once**: adjacency lists are checked against the vertex count
//!   when an [`AdjacencyGraph`] is built. Empty graphs and out-of-range ids are
//!   rejected with a [`TreeError`] before any traversal starts.
//! - **Branded vertices**: traversals run inside a [`GhostToken`] scope. Vertex
//!   ids are carried as [`BrandedVertex<'brand>`] values that cannot be mixed
//!   between graphs, so in-range indexing is a type-level fact.
//! - **Bounded stack use**: the walk keeps an explicit stack of
//!   `(vertex, cursor)` frames; deep graphs cannot overflow the call stack.
//!
//! ## Architecture
//!
//! 1. **Graph** ([`AdjacencyGraph`], [`BrandedGraph`]): validated adjacency
//!    lists and their branded view.
//! 2. **Walk** ([`DfsWalk`], [`DfsVisitor`], [`depth_first`]): an iterator of
//!    [`DfsEvent`]s plus visitor hooks for discover / tree-edge / finish.
//! 3. **Tree** ([`DfsTree`], [`DfsTreeBuilder`]): the spanning tree and its
//!    configurable builder.
//!
//! With the `parallel` feature, [`batch`] builds trees for many independent
//! graphs on a rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use dfs_tree::build_dfs_tree;
//!
//! // A 4-cycle with a chord: every vertex hangs off a single path.
//! let graph = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];
//! let tree = build_dfs_tree(&graph).unwrap();
//!
//! assert_eq!(tree.to_string(), "0 -> [1]\n1 -> [2]\n2 -> [3]\n");
//! assert_eq!(tree.parent(3), Some(2));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[cfg(feature = "parallel")]
pub mod batch;
pub mod error;
pub mod graph;
pub mod token;

pub use error::{TreeError, TreeResult};
pub use graph::{
    build_dfs_tree, build_dfs_tree_from, depth_first, AdjacencyGraph, BrandedGraph,
    BrandedVertex, BuildOptions, DfsEvent, DfsTree, DfsTreeBuilder, DfsVisitor, DfsWalk,
};
pub use token::GhostToken;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Tokens and brands are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);
    assert!(mem::size_of::<token::InvariantLifetime<'static>>() == 0);

    // A branded vertex is exactly a `usize` at runtime.
    assert!(mem::size_of::<BrandedVertex<'static>>() == mem::size_of::<usize>());
    assert!(mem::align_of::<BrandedVertex<'static>>() == mem::align_of::<usize>());
};
