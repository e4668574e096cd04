//! Core capability traits for per-item selectability.
//!
//! The capabilities are deliberately independent: a host may need only the
//! selectability verdict, only the rationale lookup, or both. Types that
//! provide both automatically gain [`SelectionQuery`], whose combined query
//! keeps the verdict and its explanation consistent.

use super::selectability::Selectability;

/// Maps an item to its [`Selectability`].
///
/// The one required concept: given read access to an item, decide how it
/// should present in the selection UI. The operation is total: there is no
/// error path, and implementations that cannot reach a better answer fall
/// back to the permissive default.
///
/// The default method body returns [`Selectability::Selectable`] for every
/// item, so an empty `impl` block yields the permissive capability.
///
/// # Example
///
/// ```
/// use horizon_selectable::{ItemSelectability, Selectability};
///
/// struct Document {
///     archived: bool,
/// }
///
/// struct ArchivePolicy;
///
/// impl ItemSelectability<Document> for ArchivePolicy {
///     fn selectability(&self, item: &Document) -> Selectability {
///         if item.archived {
///             Selectability::Hidden
///         } else {
///             Selectability::Selectable
///         }
///     }
/// }
/// ```
pub trait ItemSelectability<T>: Send + Sync {
    /// Returns how `item` should present in the selection UI.
    fn selectability(&self, _item: &T) -> Selectability {
        Selectability::Selectable
    }
}

/// Looks up a human-readable explanation for an item's selectability.
///
/// Hosts typically surface the text as a tooltip next to a disabled
/// control. `selectability` is the verdict the caller has already computed
/// for the item; implementations may use it to phrase the explanation.
///
/// The default method body returns `None`, so hosts that require the
/// capability but have nothing to explain can use an empty `impl` (or
/// [`NoRationale`]) instead of null-checking an absent one.
pub trait SelectionRationale<T>: Send + Sync {
    /// Returns display text explaining the verdict for `item`, or `None`
    /// when no explanation is warranted.
    fn rationale(&self, _item: &T, _selectability: Selectability) -> Option<String> {
        None
    }
}

/// A selectability verdict paired with its optional explanation.
///
/// Produced by [`SelectionQuery::selection_state`], which evaluates both
/// in one call so the pair cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// How the item should present.
    pub selectability: Selectability,
    /// Display text explaining the verdict, when one is warranted.
    pub rationale: Option<String>,
}

/// Combined query over both capabilities.
///
/// Blanket-implemented for every type that provides [`ItemSelectability`]
/// and [`SelectionRationale`]. Prefer
/// [`selection_state`](SelectionQuery::selection_state) over two separate
/// calls when the host needs the verdict and the explanation to agree;
/// querying them separately can race against external state changes
/// between the calls.
pub trait SelectionQuery<T>: ItemSelectability<T> + SelectionRationale<T> {
    /// Evaluates selectability once and resolves the rationale against
    /// that same verdict.
    fn selection_state(&self, item: &T) -> SelectionState {
        let selectability = self.selectability(item);
        SelectionState {
            selectability,
            rationale: self.rationale(item, selectability),
        }
    }
}

impl<T, S> SelectionQuery<T> for S where S: ItemSelectability<T> + SelectionRationale<T> {}

/// The permissive default capability: every item is selectable, nothing
/// warrants an explanation.
///
/// Stateless and zero-sized; use the unit value directly rather than
/// allocating one per use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysSelectable;

impl<T> ItemSelectability<T> for AlwaysSelectable {}

impl<T> SelectionRationale<T> for AlwaysSelectable {}

/// The no-op rationale lookup: never returns an explanation.
///
/// Stateless and zero-sized, for hosts that take the rationale capability
/// separately from the selectability one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoRationale;

impl<T> SelectionRationale<T> for NoRationale {}

static_assertions::assert_impl_all!(AlwaysSelectable: Send, Sync, Copy);
static_assertions::assert_impl_all!(NoRationale: Send, Sync, Copy);
