//! Selectability contracts for item views.
//!
//! This crate defines the capability a list or grid view queries, per item,
//! to decide whether that item should present as selectable, disabled, or
//! hidden from selection, and optionally why. It owns no items, renders
//! nothing, and dispatches no events: the host view supplies the items and
//! consumes the verdicts.
//!
//! # Core Types
//!
//! - [`Selectability`]: the tri-state verdict (`Selectable`, `Disabled`,
//!   `Hidden`)
//! - [`ItemSelectability`]: maps an item to its verdict; permissive by
//!   default
//! - [`SelectionRationale`]: looks up a human-readable explanation for a
//!   verdict; silent by default
//! - [`SelectionQuery`]: combined query returning verdict and explanation
//!   as one consistent [`SelectionState`]
//! - [`SelectabilityPolicy`]: closure-backed implementation, injected at
//!   construction
//! - [`SwappableSelectability`]: lock-guarded variant whose mapping can be
//!   replaced while a view is live
//!
//! # Example
//!
//! ```
//! use horizon_selectable::{Selectability, SelectabilityPolicy, SelectionQuery};
//!
//! struct Track {
//!     title: String,
//!     drm_locked: bool,
//! }
//!
//! let policy = SelectabilityPolicy::new(|track: &Track| {
//!     if track.drm_locked {
//!         Selectability::Disabled
//!     } else {
//!         Selectability::Selectable
//!     }
//! })
//! .with_rationale(|track, verdict| {
//!     verdict
//!         .is_disabled()
//!         .then(|| format!("'{}' is copy-protected", track.title))
//! });
//!
//! let track = Track { title: "Intro".into(), drm_locked: true };
//!
//! // One call, one consistent answer for the view to render from.
//! let state = policy.selection_state(&track);
//! assert!(state.selectability.shows_control());
//! assert!(!state.selectability.is_interactive());
//! assert_eq!(state.rationale.as_deref(), Some("'Intro' is copy-protected"));
//! ```
//!
//! # Choosing a variant
//!
//! Implement [`ItemSelectability`] (and [`SelectionRationale`] if you have
//! explanations) directly on your own policy type, or inject closures via
//! [`SelectabilityPolicy`]. Both fix the mapping at construction, which is
//! what nearly every host wants. [`SwappableSelectability`] supports
//! rebinding the mapping on a live view; its docs spell out when that is
//! actually worth the mutability.
//!
//! The capabilities are independent traits, so a host can demand a verdict
//! source alone or verdict plus rationale, and combine independent sources
//! with [`Selectability::restrict`].

mod policy;
mod selectability;
mod swappable;
mod traits;

pub use policy::{RationaleFn, SelectabilityFn, SelectabilityPolicy};
pub use selectability::{ParseSelectabilityError, Selectability};
pub use swappable::SwappableSelectability;
pub use traits::{
    AlwaysSelectable, ItemSelectability, NoRationale, SelectionQuery, SelectionRationale,
    SelectionState,
};
