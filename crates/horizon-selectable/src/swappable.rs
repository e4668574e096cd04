//! Runtime-swappable selectability.
//!
//! Most hosts inject their mapping once, at construction; use
//! [`SelectabilityPolicy`](crate::SelectabilityPolicy) for that.
//! `SwappableSelectability` exists for the rare host that genuinely rebinds
//! the mapping while a view is live, such as flipping the same list between
//! a browse mode and a restore mode. In practice callers tend to install a
//! mapping once and never touch it again; reach for this type only when
//! late rebinding is a real requirement.

use std::sync::Arc;

use parking_lot::RwLock;

use super::policy::SelectabilityFn;
use super::selectability::Selectability;
use super::traits::ItemSelectability;

/// A selectability capability whose mapping can be replaced at runtime.
///
/// The current mapping lives in an explicit lock-guarded cell, so replacing
/// it from one thread while another queries is well-defined: each query
/// sees either the old mapping or the new one, never a torn state.
///
/// Replacing the mapping changes the behavior of all subsequent
/// [`selectability`](ItemSelectability::selectability) calls. There is no
/// history and no rollback. Views holding cached verdicts are responsible
/// for re-querying after a swap.
///
/// # Example
///
/// ```
/// use horizon_selectable::{ItemSelectability, Selectability, SwappableSelectability};
///
/// let capability = SwappableSelectability::permissive();
/// assert_eq!(capability.selectability(&"item"), Selectability::Selectable);
///
/// capability.replace(|_: &&str| Selectability::Hidden);
/// assert_eq!(capability.selectability(&"item"), Selectability::Hidden);
/// ```
pub struct SwappableSelectability<T> {
    mapping: RwLock<SelectabilityFn<T>>,
}

impl<T> SwappableSelectability<T> {
    /// Creates a swappable capability with an initial mapping.
    pub fn new<F>(mapping: F) -> Self
    where
        F: Fn(&T) -> Selectability + Send + Sync + 'static,
    {
        Self {
            mapping: RwLock::new(Arc::new(mapping)),
        }
    }

    /// Creates a swappable capability with the permissive mapping.
    pub fn permissive() -> Self {
        Self::new(|_| Selectability::Selectable)
    }

    /// Replaces the mapping for all subsequent queries.
    ///
    /// The previous mapping is dropped once in-flight queries finish
    /// with it.
    pub fn replace<F>(&self, mapping: F)
    where
        F: Fn(&T) -> Selectability + Send + Sync + 'static,
    {
        *self.mapping.write() = Arc::new(mapping);
        tracing::debug!(
            target: "horizon_selectable::swappable",
            "selectability mapping replaced"
        );
    }

    /// Returns the current mapping.
    ///
    /// Evaluate a whole render pass against the returned handle when the
    /// pass must not observe a mid-pass swap.
    pub fn snapshot(&self) -> SelectabilityFn<T> {
        self.mapping.read().clone()
    }
}

impl<T> Default for SwappableSelectability<T> {
    fn default() -> Self {
        Self::permissive()
    }
}

impl<T> ItemSelectability<T> for SwappableSelectability<T> {
    fn selectability(&self, item: &T) -> Selectability {
        let mapping = self.mapping.read();
        mapping(item)
    }
}
