//! A validated adjacency-list graph.
//!
//! Construction checks every neighbor id against the vertex count once, up
//! front. After that, traversals run inside a ghost-token scope
//! ([`AdjacencyGraph::with_brand`]) where vertex ids are carried as
//! [`BrandedVertex`] values and never need re-validation.
//!
//! Adjacency lists are kept exactly as given: neighbor order is preserved
//! (it decides which edges a depth-first walk discovers first) and duplicate
//! entries are allowed.

use num_traits::PrimInt;

use super::vertex::BrandedVertex;
use crate::error::{TreeError, TreeResult};
use crate::graph::access::visited::VisitedSet;
use crate::graph::dfs::{DfsTree, DfsTreeBuilder, DfsWalk};
use crate::token::{GhostToken, InvariantLifetime};

/// An adjacency-list graph whose neighbor ids are all known to be in range.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Copies and validates every entry |
/// | `from_lists` | \(O(n + m)\) | Validates in place, no copy |
/// | `neighbors` | \(O(1)\) | Borrowed slice |
/// | `first_asymmetric_edge` | \(O(\sum_u \deg(u)^2)\) | Linear scan per reverse lookup |
/// | `dfs_tree` | \(O(n + m)\) | Explicit-stack walk |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Creates a graph by copying borrowed adjacency lists.
    ///
    /// # Errors
    /// [`TreeError::EmptyGraph`] if there are no rows,
    /// [`TreeError::VertexOutOfRange`] if any neighbor id is `>= rows.len()`.
    pub fn from_adjacency<R: AsRef<[usize]>>(rows: &[R]) -> TreeResult<Self> {
        Self::from_lists(rows.iter().map(|r| r.as_ref().to_vec()).collect())
    }

    /// Creates a graph taking ownership of the adjacency lists.
    ///
    /// # Errors
    /// Same as [`AdjacencyGraph::from_adjacency`].
    pub fn from_lists(adjacency: Vec<Vec<usize>>) -> TreeResult<Self> {
        let vertex_count = adjacency.len();
        if vertex_count == 0 {
            return Err(TreeError::EmptyGraph);
        }
        for (vertex, nbrs) in adjacency.iter().enumerate() {
            if let Some(&neighbor) = nbrs.iter().find(|&&v| v >= vertex_count) {
                return Err(TreeError::VertexOutOfRange {
                    vertex,
                    neighbor,
                    vertex_count,
                });
            }
        }
        Ok(Self { adjacency })
    }

    /// Creates a graph from signed (or otherwise non-`usize`) integer ids.
    ///
    /// This is the entry point for ids parsed from untyped sources such as JSON.
    /// Only primitive integers are accepted; fractional ids do not compile:
    ///
    /// ```compile_fail
    /// use dfs_tree::AdjacencyGraph;
    ///
    /// let _ = AdjacencyGraph::from_signed(&[vec![1.9f64], vec![0.0]]);
    /// ```
    ///
    /// # Errors
    /// [`TreeError::NegativeVertex`] for a negative id, otherwise the same as
    /// [`AdjacencyGraph::from_adjacency`]. Ids too large for `usize` are
    /// reported as out of range with `neighbor == usize::MAX`.
    pub fn from_signed<T, R>(rows: &[R]) -> TreeResult<Self>
    where
        T: PrimInt,
        R: AsRef<[T]>,
    {
        let mut adjacency = Vec::with_capacity(rows.len());
        for (vertex, row) in rows.iter().enumerate() {
            let mut nbrs = Vec::with_capacity(row.as_ref().len());
            for &raw in row.as_ref() {
                if raw < T::zero() {
                    return Err(TreeError::NegativeVertex {
                        vertex,
                        neighbor: raw.to_i64().unwrap_or(i64::MIN),
                    });
                }
                let neighbor = raw.to_usize().unwrap_or(usize::MAX);
                nbrs.push(neighbor);
            }
            adjacency.push(nbrs);
        }
        Self::from_lists(adjacency)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of adjacency entries.
    ///
    /// An undirected edge listed from both endpoints counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the neighbors of a vertex in adjacency order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of bounds");
        &self.adjacency[vertex]
    }

    /// Returns the adjacency lists.
    pub fn as_lists(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Returns the first edge `u -> v` (in adjacency order) with no `v -> u`.
    pub fn first_asymmetric_edge(&self) -> Option<(usize, usize)> {
        self.adjacency.iter().enumerate().find_map(|(u, nbrs)| {
            nbrs.iter()
                .find(|&&v| !self.adjacency[v].contains(&u))
                .map(|&v| (u, v))
        })
    }

    /// Checks whether every edge is listed from both endpoints.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetric_edge().is_none()
    }

    /// Runs `f` with a branded view of this graph.
    ///
    /// Each call mints a fresh brand, so vertices and visited sets from one
    /// call cannot be mixed with another's.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfs_tree::AdjacencyGraph;
    ///
    /// let graph = AdjacencyGraph::from_adjacency(&[vec![1], vec![0]]).unwrap();
    /// let degree = graph.with_brand(|g| {
    ///     let root = g.vertex(0).unwrap();
    ///     g.neighbors(root).count()
    /// });
    /// assert_eq!(degree, 1);
    /// ```
    pub fn with_brand<'g, F, R>(&'g self, f: F) -> R
    where
        F: for<'brand> FnOnce(BrandedGraph<'brand, 'g>) -> R,
    {
        GhostToken::new(|token| f(BrandedGraph::new(self, token)))
    }

    /// Builds the depth-first spanning tree rooted at `root`.
    ///
    /// # Errors
    /// [`TreeError::RootOutOfRange`] if `root >= vertex_count()`.
    pub fn dfs_tree(&self, root: usize) -> TreeResult<DfsTree> {
        DfsTreeBuilder::new().root(root).build_graph(self)
    }

    /// Returns the tree edges `(parent, child)` in discovery order.
    ///
    /// # Errors
    /// [`TreeError::RootOutOfRange`] if `root >= vertex_count()`.
    pub fn tree_edges(&self, root: usize) -> TreeResult<Vec<(usize, usize)>> {
        self.with_brand(|g| {
            let root = g.checked_root(root)?;
            Ok(g.walk(root)
                .tree_edges()
                .map(|(u, v)| (u.index(), v.index()))
                .collect())
        })
    }

    /// Returns the vertices reachable from `root` in depth-first discovery order.
    ///
    /// # Errors
    /// [`TreeError::RootOutOfRange`] if `root >= vertex_count()`.
    pub fn preorder(&self, root: usize) -> TreeResult<Vec<usize>> {
        self.with_brand(|g| {
            let root = g.checked_root(root)?;
            Ok(g.walk(root).preorder().map(BrandedVertex::index).collect())
        })
    }
}

impl TryFrom<Vec<Vec<usize>>> for AdjacencyGraph {
    type Error = TreeError;

    fn try_from(adjacency: Vec<Vec<usize>>) -> TreeResult<Self> {
        Self::from_lists(adjacency)
    }
}

/// A borrowed view of an [`AdjacencyGraph`] stamped with a unique brand.
///
/// Obtained from [`AdjacencyGraph::with_brand`]. Vertices handed out by this
/// view are [`BrandedVertex<'brand>`] values and are valid indices by
/// construction.
#[derive(Clone, Copy)]
pub struct BrandedGraph<'brand, 'g> {
    graph: &'g AdjacencyGraph,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand, 'g> BrandedGraph<'brand, 'g> {
    fn new(graph: &'g AdjacencyGraph, token: GhostToken<'brand>) -> Self {
        Self {
            graph,
            _brand: token.into_brand(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Brands `index` if it names a vertex of this graph.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<BrandedVertex<'brand>> {
        (index < self.vertex_count()).then(|| BrandedVertex::trusted(index))
    }

    /// Iterates over all vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = BrandedVertex<'brand>> {
        (0..self.vertex_count()).map(BrandedVertex::trusted)
    }

    /// Iterates over the neighbors of `vertex` in adjacency order.
    pub fn neighbors(
        &self,
        vertex: BrandedVertex<'brand>,
    ) -> impl Iterator<Item = BrandedVertex<'brand>> + 'g {
        self.neighbor_ids(vertex)
            .iter()
            .map(|&v| BrandedVertex::trusted(v))
    }

    /// Starts a depth-first walk from `root`.
    pub fn walk(self, root: BrandedVertex<'brand>) -> DfsWalk<'brand, 'g> {
        DfsWalk::new(self, root)
    }

    /// Raw neighbor ids; every entry is `< vertex_count` since construction.
    #[inline(always)]
    pub(crate) fn neighbor_ids(&self, vertex: BrandedVertex<'brand>) -> &'g [usize] {
        &self.graph.adjacency[vertex.index()]
    }

    /// Brands a neighbor id read from this graph's adjacency lists.
    #[inline(always)]
    pub(crate) fn trusted_neighbor(&self, index: usize) -> BrandedVertex<'brand> {
        debug_assert!(index < self.vertex_count(), "unvalidated neighbor {index}");
        BrandedVertex::trusted(index)
    }

    pub(crate) fn checked_root(&self, root: usize) -> TreeResult<BrandedVertex<'brand>> {
        self.vertex(root).ok_or_else(|| TreeError::RootOutOfRange {
            root,
            vertex_count: self.vertex_count(),
        })
    }

    pub(crate) fn visited_set(&self) -> VisitedSet<'brand> {
        VisitedSet::new(self.vertex_count())
    }
}
