//! Branded vertex identifiers.

use core::fmt;

use crate::token::InvariantLifetime;

/// A vertex id that is known to be valid for the graph carrying `'brand`.
///
/// Values are only minted by [`BrandedGraph`](super::BrandedGraph), which
/// has already checked every adjacency entry against the vertex count. Holding
/// a `BrandedVertex<'brand>` is therefore proof that `index() < vertex_count`
/// for that one graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BrandedVertex<'brand> {
    index: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> BrandedVertex<'brand> {
    /// Wraps an index already validated against the branded graph.
    #[inline(always)]
    pub(crate) const fn trusted(index: usize) -> Self {
        Self {
            index,
            _brand: InvariantLifetime::new(),
        }
    }

    /// Returns the raw vertex id.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for BrandedVertex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

impl From<BrandedVertex<'_>> for usize {
    fn from(v: BrandedVertex<'_>) -> Self {
        v.index
    }
}
