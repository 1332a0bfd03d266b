//! The spanning tree produced by a depth-first walk.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

/// A rooted spanning tree stored as a vertex → children mapping.
///
/// Only vertices with at least one child are keys, and every children list is
/// sorted ascending. Vertices outside the root's component never appear.
///
/// Serializes as `{"root": 0, "children": {"0": [1], "1": [2]}}`.
/// Deserialization is strict: input that breaks any invariant listed on
/// [`DfsTree::validate`] is rejected rather than repaired.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDfsTree")]
pub struct DfsTree {
    root: usize,
    children: BTreeMap<usize, Vec<usize>>,
}

/// Wire shape of [`DfsTree`] before the invariants are checked.
#[derive(Deserialize)]
struct RawDfsTree {
    root: usize,
    children: BTreeMap<usize, Vec<usize>>,
}

impl TryFrom<RawDfsTree> for DfsTree {
    type Error = TreeError;

    fn try_from(raw: RawDfsTree) -> TreeResult<Self> {
        let tree = Self {
            root: raw.root,
            children: raw.children,
        };
        tree.validate()?;
        Ok(tree)
    }
}

impl DfsTree {
    /// Creates a tree from a raw mapping, normalizing and then validating it.
    ///
    /// Children lists are sorted and keys with no children are dropped.
    ///
    /// # Errors
    /// [`TreeError::MalformedTree`] if the normalized mapping is not a tree
    /// rooted at `root` (a vertex with two parents, the root as a child, or
    /// an entry unreachable from the root).
    pub fn from_map(root: usize, children: BTreeMap<usize, Vec<usize>>) -> TreeResult<Self> {
        let tree = Self::normalized(root, children);
        tree.validate()?;
        Ok(tree)
    }

    /// Sorts children and drops empty keys without checking the rest.
    pub(crate) fn normalized(root: usize, mut children: BTreeMap<usize, Vec<usize>>) -> Self {
        children.retain(|_, kids| !kids.is_empty());
        for kids in children.values_mut() {
            kids.sort_unstable();
        }
        Self { root, children }
    }

    /// The vertex the walk started from.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Children of `vertex`, ascending; empty for leaves and absent vertices.
    pub fn children(&self, vertex: usize) -> &[usize] {
        self.children.get(&vertex).map_or(&[][..], Vec::as_slice)
    }

    /// Parent of `vertex`, or `None` for the root and vertices not in the tree.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.children
            .iter()
            .find(|(_, kids)| kids.contains(&vertex))
            .map(|(&p, _)| p)
    }

    /// Whether `vertex` is spanned by this tree.
    pub fn contains(&self, vertex: usize) -> bool {
        vertex == self.root || self.parent(vertex).is_some()
    }

    /// Every spanned vertex, ascending.
    pub fn vertices(&self) -> Vec<usize> {
        let mut all: Vec<usize> = std::iter::once(self.root)
            .chain(self.children.values().flatten().copied())
            .collect();
        all.sort_unstable();
        all
    }

    /// Number of spanned vertices (root included).
    pub fn vertex_count(&self) -> usize {
        self.edge_count() + 1
    }

    /// Number of tree edges.
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    /// Whether the tree is just the root (no edges).
    pub fn is_trivial(&self) -> bool {
        self.children.is_empty()
    }

    /// Distance from the root to `vertex`, or `None` if it is not spanned.
    pub fn depth(&self, vertex: usize) -> Option<usize> {
        let parents = self.parent_map();
        let mut depth = 0;
        let mut current = vertex;
        while current != self.root {
            current = *parents.get(&current)?;
            depth += 1;
            if depth > parents.len() {
                return None;
            }
        }
        Some(depth)
    }

    /// Iterates over `(parent, children)` pairs in ascending parent order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.children.iter().map(|(&p, kids)| (p, kids.as_slice()))
    }

    /// Borrows the underlying mapping.
    pub fn as_map(&self) -> &BTreeMap<usize, Vec<usize>> {
        &self.children
    }

    /// Consumes the tree, returning the underlying mapping.
    pub fn into_map(self) -> BTreeMap<usize, Vec<usize>> {
        self.children
    }

    /// Checks the spanning-tree invariants.
    ///
    /// 1. Every children list is strictly ascending (sorted, no duplicates).
    /// 2. No key has an empty children list.
    /// 3. The root is never a child.
    /// 4. Every vertex has at most one parent.
    /// 5. Every key and child is reachable from the root (so no detached cycles).
    ///
    /// # Errors
    /// [`TreeError::MalformedTree`] naming the first violated invariant.
    pub fn validate(&self) -> TreeResult<()> {
        let mut parent_of = BTreeMap::new();
        for (&p, kids) in &self.children {
            if kids.is_empty() {
                return malformed(format!("vertex {p} is a key with no children"));
            }
            if kids.windows(2).any(|w| w[0] >= w[1]) {
                return malformed(format!("children of {p} are not strictly ascending"));
            }
            for &c in kids {
                if c == self.root {
                    return malformed(format!("root {c} listed as a child of {p}"));
                }
                if let Some(prev) = parent_of.insert(c, p) {
                    return malformed(format!("vertex {c} has two parents: {prev} and {p}"));
                }
            }
        }

        let mut reached = BTreeSet::from([self.root]);
        let mut queue = VecDeque::from([self.root]);
        while let Some(u) = queue.pop_front() {
            for &c in self.children(u) {
                if reached.insert(c) {
                    queue.push_back(c);
                }
            }
        }
        let spanned = parent_of.len() + 1;
        if reached.len() != spanned {
            return malformed(format!(
                "{} of {spanned} vertices are unreachable from root {}",
                spanned - reached.len(),
                self.root
            ));
        }
        Ok(())
    }

    fn parent_map(&self) -> BTreeMap<usize, usize> {
        self.children
            .iter()
            .flat_map(|(&p, kids)| kids.iter().map(move |&c| (c, p)))
            .collect()
    }
}

fn malformed(reason: String) -> TreeResult<()> {
    Err(TreeError::MalformedTree(reason))
}

impl fmt::Display for DfsTree {
    /// One `parent -> [children]` line per key, ascending.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, kids) in self.iter() {
            writeln!(f, "{p} -> {kids:?}")?;
        }
        Ok(())
    }
}

impl From<DfsTree> for BTreeMap<usize, Vec<usize>> {
    fn from(tree: DfsTree) -> Self {
        tree.into_map()
    }
}

impl<'a> IntoIterator for &'a DfsTree {
    type Item = (&'a usize, &'a Vec<usize>);
    type IntoIter = std::collections::btree_map::Iter<'a, usize, Vec<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
