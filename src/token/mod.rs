//! GhostToken - the branding scope for validated graphs
//!
//! A `GhostToken<'brand>` is a zero-sized value whose only job is to carry a
//! fresh, invariant `'brand` lifetime. Every call to [`GhostToken::new`] mints
//! a brand that cannot be unified with any other brand, so values stamped with
//! it (vertex ids, visited sets) cannot leak into a different graph's scope.
//!
//! ## Core invariant (uniqueness)
//!
//! The brand is introduced by a rank-2 closure (`for<'new_brand> FnOnce`), so
//! no two `new` calls ever observe the same `'brand`. `GhostToken` is
//! intentionally **not** `Copy`/`Clone`; consuming it is how a structure claims
//! the brand for itself.

use core::marker::PhantomData;

/// A marker type that is invariant in its lifetime parameter `'id`.
///
/// Invariance keeps the compiler from shrinking two distinct brands down to a
/// common lifetime, which would let a vertex from one graph index another.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantLifetime<'id>(PhantomData<fn(&'id ()) -> &'id ()>);

impl<'id> InvariantLifetime<'id> {
    /// Creates a new invariant lifetime marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// A zero-sized token that owns a unique brand.
///
/// # Example
///
/// ```rust
/// use dfs_tree::GhostToken;
///
/// let answer = GhostToken::new(|token| {
///     assert!(token.is_valid());
///     42
/// });
/// assert_eq!(answer, 42);
/// ```
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// The closure is generic over the brand, so the token (and anything
    /// branded with it) cannot escape the call.
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }

    /// Returns whether the token represents a valid branding scope.
    ///
    /// This is always true for valid tokens, but allows for const evaluation.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        true
    }

    /// Consumes the token, handing its brand to the structure that now owns it.
    #[inline(always)]
    pub(crate) const fn into_brand(self) -> InvariantLifetime<'brand> {
        self.0
    }
}
