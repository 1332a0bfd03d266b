//! Spanning-tree construction.
//!
//! [`build_dfs_tree`] is the one-call entry point. [`DfsTreeBuilder`] carries
//! [`BuildOptions`] for callers that need a different root or want one-way
//! edges rejected.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::tree::DfsTree;
use super::{depth_first, DfsVisitor};
use crate::error::{TreeError, TreeResult};
use crate::graph::basic::{AdjacencyGraph, BrandedVertex};

/// Builds the depth-first spanning tree of `graph` rooted at vertex 0.
///
/// # Example
///
/// ```rust
/// use dfs_tree::build_dfs_tree;
///
/// let graph = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];
/// let tree = build_dfs_tree(&graph).unwrap();
/// assert_eq!(tree.children(0), &[1]);
/// assert_eq!(tree.children(1), &[2]);
/// assert_eq!(tree.children(2), &[3]);
/// ```
///
/// # Errors
/// [`TreeError::EmptyGraph`] for a graph with no vertices and
/// [`TreeError::VertexOutOfRange`] for a neighbor id `>= graph.len()`.
pub fn build_dfs_tree<R: AsRef<[usize]>>(graph: &[R]) -> TreeResult<DfsTree> {
    DfsTreeBuilder::new().build(graph)
}

/// Builds the depth-first spanning tree of `graph` rooted at `root`.
///
/// # Errors
/// As [`build_dfs_tree`], plus [`TreeError::RootOutOfRange`].
pub fn build_dfs_tree_from<R: AsRef<[usize]>>(graph: &[R], root: usize) -> TreeResult<DfsTree> {
    DfsTreeBuilder::new().root(root).build(graph)
}

/// Tree construction settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Vertex the walk starts from.
    pub root: usize,
    /// Reject graphs where some edge `u -> v` has no `v -> u`.
    pub require_symmetric: bool,
}

/// Configurable spanning-tree builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfsTreeBuilder {
    options: BuildOptions,
}

impl DfsTreeBuilder {
    /// Creates a builder with default options (root 0, no symmetry check).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from explicit options.
    pub fn with_options(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Sets the start vertex.
    #[must_use]
    pub fn root(mut self, root: usize) -> Self {
        self.options.root = root;
        self
    }

    /// Enables or disables the symmetry check.
    #[must_use]
    pub fn require_symmetric(mut self, require: bool) -> Self {
        self.options.require_symmetric = require;
        self
    }

    /// Returns the active options.
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Validates `graph` and builds its spanning tree.
    ///
    /// # Errors
    /// Any [`TreeError`] raised by validation; no tree is produced on error.
    pub fn build<R: AsRef<[usize]>>(&self, graph: &[R]) -> TreeResult<DfsTree> {
        let graph = AdjacencyGraph::from_adjacency(graph)?;
        self.build_graph(&graph)
    }

    /// Builds the spanning tree of an already validated graph.
    ///
    /// # Errors
    /// [`TreeError::RootOutOfRange`] or, with `require_symmetric`,
    /// [`TreeError::AsymmetricEdge`].
    pub fn build_graph(&self, graph: &AdjacencyGraph) -> TreeResult<DfsTree> {
        let BuildOptions {
            root,
            require_symmetric,
        } = self.options;

        if require_symmetric {
            if let Some((from, to)) = graph.first_asymmetric_edge() {
                return Err(TreeError::AsymmetricEdge { from, to });
            }
        }

        let tree = graph.with_brand(|g| {
            let start = g.checked_root(root)?;
            let mut collector = TreeCollector::default();
            let spanned = depth_first(g, start, &mut collector);
            debug!(
                root,
                vertices = g.vertex_count(),
                spanned,
                "built depth-first spanning tree"
            );
            Ok::<_, TreeError>(collector.into_tree(root))
        })?;

        debug_assert!(tree.validate().is_ok(), "builder produced a malformed tree");
        Ok(tree)
    }
}

/// Visitor that records each tree edge under its parent.
#[derive(Default)]
struct TreeCollector {
    children: BTreeMap<usize, Vec<usize>>,
}

impl<'brand> DfsVisitor<'brand> for TreeCollector {
    fn tree_edge(&mut self, parent: BrandedVertex<'brand>, child: BrandedVertex<'brand>) {
        trace!(parent = parent.index(), child = child.index(), "tree edge");
        self.children
            .entry(parent.index())
            .or_default()
            .push(child.index());
    }
}

impl TreeCollector {
    fn into_tree(self, root: usize) -> DfsTree {
        DfsTree::normalized(root, self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_root_at_zero() {
        let options = BuildOptions::default();
        assert_eq!(options.root, 0);
        assert!(!options.require_symmetric);
        assert_eq!(DfsTreeBuilder::new().options(), options);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: BuildOptions = serde_json::from_str(r#"{"root": 2}"#).unwrap();
        assert_eq!(
            options,
            BuildOptions {
                root: 2,
                require_symmetric: false
            }
        );
        let builder = DfsTreeBuilder::with_options(options).require_symmetric(true);
        assert!(builder.options().require_symmetric);
        assert_eq!(builder.options().root, 2);
    }

    #[test]
    fn root_out_of_range_is_rejected() {
        let err = build_dfs_tree_from(&[vec![1], vec![0]], 2).unwrap_err();
        assert_eq!(
            err,
            TreeError::RootOutOfRange {
                root: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn symmetry_check_is_opt_in() {
        let one_way = [vec![1], vec![]];
        let tree = build_dfs_tree(&one_way).unwrap();
        assert_eq!(tree.children(0), &[1]);

        let err = DfsTreeBuilder::new()
            .require_symmetric(true)
            .build(&one_way)
            .unwrap_err();
        assert_eq!(err, TreeError::AsymmetricEdge { from: 0, to: 1 });
    }

    #[test]
    fn explicit_root_spans_its_component() {
        // 0-1 and 2-3-4 are separate components.
        let graph = [vec![1], vec![0], vec![3], vec![2, 4], vec![3]];
        let tree = build_dfs_tree_from(&graph, 3).unwrap();
        assert_eq!(tree.root(), 3);
        assert_eq!(tree.children(3), &[2, 4]);
        assert_eq!(tree.vertices(), vec![2, 3, 4]);
        assert!(!tree.contains(0));
    }
}
