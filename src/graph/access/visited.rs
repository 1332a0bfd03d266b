//! Branded visited set for graph traversals.
//!
//! A dense, word-packed bitset keyed by [`BrandedVertex`]. It is sized from
//! the branded graph that created it, so every vertex of that brand has a bit.

use crate::graph::basic::BrandedVertex;
use crate::token::InvariantLifetime;

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for one traversal.
pub(crate) struct VisitedSet<'brand> {
    words: Vec<u64>,
    len: usize,
    visited: usize,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> VisitedSet<'brand> {
    /// Creates an empty set covering vertices `0..len`.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
            visited: 0,
            _brand: InvariantLifetime::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of vertices marked so far.
    #[inline(always)]
    pub(crate) fn visited_count(&self) -> usize {
        self.visited
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: BrandedVertex<'brand>) -> bool {
        let (word, mask) = Self::locate(vertex);
        let slot = &mut self.words[word];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.visited += 1;
        true
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, vertex: BrandedVertex<'brand>) -> bool {
        let (word, mask) = Self::locate(vertex);
        self.words[word] & mask != 0
    }

    #[inline(always)]
    fn locate(vertex: BrandedVertex<'brand>) -> (usize, u64) {
        let i = vertex.index();
        (i / WORD_BITS, 1u64 << (i % WORD_BITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GhostToken;

    #[test]
    fn try_visit_marks_once() {
        GhostToken::new(|_token| {
            let mut set = VisitedSet::new(130);
            let v = BrandedVertex::trusted(129);
            assert_eq!(set.len(), 130);
            assert!(!set.is_visited(v));
            assert!(set.try_visit(v));
            assert!(!set.try_visit(v));
            assert!(set.is_visited(v));
            assert_eq!(set.visited_count(), 1);
        });
    }

    #[test]
    fn word_boundaries_are_independent() {
        let mut set = VisitedSet::new(128);
        assert!(set.try_visit(BrandedVertex::trusted(63)));
        assert!(!set.is_visited(BrandedVertex::trusted(64)));
        assert!(set.try_visit(BrandedVertex::trusted(64)));
        assert_eq!(set.visited_count(), 2);
    }
}
