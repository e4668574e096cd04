//! Closure-backed selectability policies.
//!
//! `SelectabilityPolicy<T>` is the construction-time-injection variant:
//! the mapping is supplied once, when the policy is built, and never
//! changes afterwards. This is the variant most hosts want; see
//! [`SwappableSelectability`](crate::SwappableSelectability) for the rare
//! case where the mapping must be rebound while a view is live.

use std::sync::Arc;

use super::selectability::Selectability;
use super::traits::{ItemSelectability, SelectionRationale};

/// Type alias for a selectability mapping function.
pub type SelectabilityFn<T> = Arc<dyn Fn(&T) -> Selectability + Send + Sync>;

/// Type alias for a rationale lookup function.
pub type RationaleFn<T> = Arc<dyn Fn(&T, Selectability) -> Option<String> + Send + Sync>;

/// An immutable, closure-backed implementation of both selectability
/// capabilities.
///
/// # Example
///
/// ```
/// use horizon_selectable::{ItemSelectability, Selectability, SelectabilityPolicy};
///
/// struct Branch {
///     name: String,
///     is_head: bool,
/// }
///
/// let policy = SelectabilityPolicy::new(|branch: &Branch| {
///     if branch.is_head {
///         Selectability::Disabled
///     } else {
///         Selectability::Selectable
///     }
/// })
/// .with_rationale(|branch, verdict| {
///     verdict
///         .is_disabled()
///         .then(|| format!("'{}' is checked out", branch.name))
/// });
///
/// let head = Branch { name: "main".into(), is_head: true };
/// assert_eq!(policy.selectability(&head), Selectability::Disabled);
/// ```
pub struct SelectabilityPolicy<T> {
    selectability: Option<SelectabilityFn<T>>,
    rationale: Option<RationaleFn<T>>,
}

impl<T> SelectabilityPolicy<T> {
    /// Creates the permissive policy: every item selectable, no rationale.
    pub fn permissive() -> Self {
        Self {
            selectability: None,
            rationale: None,
        }
    }

    /// Creates a policy from a selectability mapping.
    pub fn new<F>(selectability: F) -> Self
    where
        F: Fn(&T) -> Selectability + Send + Sync + 'static,
    {
        Self {
            selectability: Some(Arc::new(selectability)),
            rationale: None,
        }
    }

    /// Adds a rationale lookup to this policy.
    ///
    /// The lookup receives the verdict the caller computed for the item,
    /// so the explanation can be phrased against it.
    pub fn with_rationale<F>(mut self, rationale: F) -> Self
    where
        F: Fn(&T, Selectability) -> Option<String> + Send + Sync + 'static,
    {
        self.rationale = Some(Arc::new(rationale));
        self
    }
}

impl<T> Default for SelectabilityPolicy<T> {
    fn default() -> Self {
        Self::permissive()
    }
}

impl<T> Clone for SelectabilityPolicy<T> {
    fn clone(&self) -> Self {
        Self {
            selectability: self.selectability.clone(),
            rationale: self.rationale.clone(),
        }
    }
}

impl<T> ItemSelectability<T> for SelectabilityPolicy<T> {
    fn selectability(&self, item: &T) -> Selectability {
        match &self.selectability {
            Some(mapping) => mapping(item),
            None => Selectability::Selectable,
        }
    }
}

impl<T> SelectionRationale<T> for SelectabilityPolicy<T> {
    fn rationale(&self, item: &T, selectability: Selectability) -> Option<String> {
        self.rationale
            .as_ref()
            .and_then(|lookup| lookup(item, selectability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SelectionQuery;

    struct Device {
        name: &'static str,
        online: bool,
    }

    fn device_policy() -> SelectabilityPolicy<Device> {
        SelectabilityPolicy::new(|device: &Device| {
            if device.online {
                Selectability::Selectable
            } else {
                Selectability::Disabled
            }
        })
        .with_rationale(|device, verdict| {
            verdict
                .is_disabled()
                .then(|| format!("{} is offline", device.name))
        })
    }

    #[test]
    fn test_permissive_policy() {
        let policy = SelectabilityPolicy::permissive();
        let offline = Device {
            name: "printer",
            online: false,
        };

        assert_eq!(policy.selectability(&offline), Selectability::Selectable);
        assert_eq!(policy.rationale(&offline, Selectability::Disabled), None);
    }

    #[test]
    fn test_default_is_permissive() {
        let policy = SelectabilityPolicy::<Device>::default();
        let offline = Device {
            name: "printer",
            online: false,
        };
        assert_eq!(policy.selectability(&offline), Selectability::Selectable);
    }

    #[test]
    fn test_injected_mapping() {
        let policy = device_policy();

        let online = Device {
            name: "scanner",
            online: true,
        };
        let offline = Device {
            name: "printer",
            online: false,
        };

        assert_eq!(policy.selectability(&online), Selectability::Selectable);
        assert_eq!(policy.selectability(&offline), Selectability::Disabled);
    }

    #[test]
    fn test_rationale_lookup() {
        let policy = device_policy();
        let offline = Device {
            name: "printer",
            online: false,
        };

        let state = policy.selection_state(&offline);
        assert_eq!(state.selectability, Selectability::Disabled);
        assert_eq!(state.rationale.as_deref(), Some("printer is offline"));
    }

    #[test]
    fn test_clone_shares_the_mapping() {
        let policy = device_policy();
        let copy = policy.clone();
        let offline = Device {
            name: "printer",
            online: false,
        };

        assert_eq!(
            policy.selectability(&offline),
            copy.selectability(&offline)
        );
    }
}
