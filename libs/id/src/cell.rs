//! Process-wide policy storage for an identifier type.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::PaddingPolicy;

/// Holds the current [`PaddingPolicy`] of one identifier type.
///
/// Uses ArcSwap for lock-free policy updates. Readers get a consistent
/// snapshot, so a normalization running concurrently with a setter sees
/// either the old or the new policy, never a mix of both.
#[derive(Debug)]
pub struct PolicyCell {
    inner: ArcSwap<PaddingPolicy>,
}

impl PolicyCell {
    /// Creates a cell holding `policy`.
    ///
    /// For `static` items, wrap the cell in a `LazyLock`.
    pub fn new(policy: PaddingPolicy) -> Self {
        Self {
            inner: ArcSwap::from_pointee(policy),
        }
    }

    /// Returns a snapshot of the current policy.
    pub fn get(&self) -> PaddingPolicy {
        **self.inner.load()
    }

    /// Installs `policy` and returns the one it replaced.
    pub fn replace(&self, policy: PaddingPolicy) -> PaddingPolicy {
        *self.inner.swap(Arc::new(policy))
    }

    /// Applies `f` to the current policy and swaps the result in, returning
    /// `(old, new)`.
    ///
    /// `f` may run more than once when another writer races this one.
    pub fn update<F>(&self, mut f: F) -> (PaddingPolicy, PaddingPolicy)
    where
        F: FnMut(&mut PaddingPolicy),
    {
        let mut new = None;
        let old = self.inner.rcu(|current| {
            let mut policy = **current;
            f(&mut policy);
            new = Some(policy);
            policy
        });
        (*old, new.unwrap_or(*old))
    }
}

impl Default for PolicyCell {
    fn default() -> Self {
        Self::new(PaddingPolicy::DEFAULT)
    }
}
