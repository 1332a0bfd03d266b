//! Depth-first traversal over branded graphs.
//!
//! The walk is driven by an explicit stack of `(vertex, cursor)` frames rather
//! than recursion, so traversal depth is bounded by heap memory instead of the
//! call stack. Event order is identical to the recursive formulation:
//!
//! ```text
//! Discover(root)
//!   TreeEdge(root, a)  Discover(a)  ...  Finish(a)
//!   TreeEdge(root, b)  Discover(b)  ...  Finish(b)
//! Finish(root)
//! ```
//!
//! Neighbors are examined in adjacency order; a neighbor that is already
//! visited produces no event.

pub mod builder;
pub mod tree;


pub use builder::{build_dfs_tree, build_dfs_tree_from, BuildOptions, DfsTreeBuilder};
pub use tree::DfsTree;

use crate::graph::access::visited::VisitedSet;
use crate::graph::basic::{BrandedGraph, BrandedVertex};

/// A single step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent<'brand> {
    /// A vertex was reached for the first time.
    Discover(BrandedVertex<'brand>),
    /// `child` was discovered from `parent`; this edge belongs to the tree.
    TreeEdge {
        /// Vertex whose adjacency list led to `child`.
        parent: BrandedVertex<'brand>,
        /// Newly discovered vertex.
        child: BrandedVertex<'brand>,
    },
    /// Every neighbor of the vertex has been examined.
    Finish(BrandedVertex<'brand>),
}

/// Callbacks for [`depth_first`].
///
/// All hooks default to doing nothing. `tree_edge(u, v)` is reported before
/// `discover(v)`.
pub trait DfsVisitor<'brand> {
    /// Called when `vertex` is first reached.
    fn discover(&mut self, _vertex: BrandedVertex<'brand>) {}

    /// Called for every edge that becomes part of the spanning tree.
    fn tree_edge(&mut self, _parent: BrandedVertex<'brand>, _child: BrandedVertex<'brand>) {}

    /// Called once all neighbors of `vertex` have been examined.
    fn finish(&mut self, _vertex: BrandedVertex<'brand>) {}
}

/// Walks `graph` depth-first from `root`, reporting every event to `visitor`.
///
/// Returns the number of vertices discovered (the size of `root`'s component).
pub fn depth_first<'brand, V>(
    graph: BrandedGraph<'brand, '_>,
    root: BrandedVertex<'brand>,
    visitor: &mut V,
) -> usize
where
    V: DfsVisitor<'brand> + ?Sized,
{
    let mut walk = DfsWalk::new(graph, root);
    for event in walk.by_ref() {
        match event {
            DfsEvent::Discover(v) => visitor.discover(v),
            DfsEvent::TreeEdge { parent, child } => visitor.tree_edge(parent, child),
            DfsEvent::Finish(v) => visitor.finish(v),
        }
    }
    walk.discovered()
}

#[derive(Clone, Copy)]
struct Frame<'brand> {
    vertex: BrandedVertex<'brand>,
    cursor: usize,
}

/// Iterator over the [`DfsEvent`]s of a walk from a single root.
pub struct DfsWalk<'brand, 'g> {
    graph: BrandedGraph<'brand, 'g>,
    visited: VisitedSet<'brand>,
    stack: Vec<Frame<'brand>>,
    pending: Option<DfsEvent<'brand>>,
}

impl<'brand, 'g> DfsWalk<'brand, 'g> {
    /// Starts a walk at `root`, which is marked visited immediately.
    pub fn new(graph: BrandedGraph<'brand, 'g>, root: BrandedVertex<'brand>) -> Self {
        let mut visited = graph.visited_set();
        debug_assert_eq!(visited.len(), graph.vertex_count());
        visited.try_visit(root);
        Self {
            graph,
            visited,
            stack: vec![Frame {
                vertex: root,
                cursor: 0,
            }],
            pending: Some(DfsEvent::Discover(root)),
        }
    }

    /// Number of vertices discovered so far.
    pub fn discovered(&self) -> usize {
        self.visited.visited_count()
    }

    /// Whether `vertex` has been discovered so far.
    pub fn is_discovered(&self, vertex: BrandedVertex<'brand>) -> bool {
        self.visited.is_visited(vertex)
    }

    /// Current depth of the walk (number of open frames).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Restricts the walk to its tree edges, in discovery order.
    pub fn tree_edges(self) -> TreeEdges<'brand, 'g> {
        TreeEdges { walk: self }
    }

    /// Restricts the walk to discovered vertices, in preorder.
    pub fn preorder(self) -> Preorder<'brand, 'g> {
        Preorder { walk: self }
    }
}

impl<'brand> Iterator for DfsWalk<'brand, '_> {
    type Item = DfsEvent<'brand>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        let top = self.stack.last_mut()?;
        let parent = top.vertex;
        let neighbors = self.graph.neighbor_ids(parent);
        let mut discovered = None;
        while let Some(&next) = neighbors.get(top.cursor) {
            top.cursor += 1;
            let child = self.graph.trusted_neighbor(next);
            if self.visited.try_visit(child) {
                discovered = Some(child);
                break;
            }
        }

        match discovered {
            Some(child) => {
                self.stack.push(Frame {
                    vertex: child,
                    cursor: 0,
                });
                self.pending = Some(DfsEvent::Discover(child));
                Some(DfsEvent::TreeEdge { parent, child })
            }
            None => {
                self.stack.pop();
                Some(DfsEvent::Finish(parent))
            }
        }
    }
}

/// Tree edges `(parent, child)` of a [`DfsWalk`].
pub struct TreeEdges<'brand, 'g> {
    walk: DfsWalk<'brand, 'g>,
}

impl<'brand> Iterator for TreeEdges<'brand, '_> {
    type Item = (BrandedVertex<'brand>, BrandedVertex<'brand>);

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.find_map(|event| match event {
            DfsEvent::TreeEdge { parent, child } => Some((parent, child)),
            _ => None,
        })
    }
}

/// Discovered vertices of a [`DfsWalk`], in preorder.
pub struct Preorder<'brand, 'g> {
    walk: DfsWalk<'brand, 'g>,
}

impl<'brand> Iterator for Preorder<'brand, '_> {
    type Item = BrandedVertex<'brand>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.find_map(|event| match event {
            DfsEvent::Discover(v) => Some(v),
            _ => None,
        })
    }
}
