//! The tri-state selectability value.
//!
//! [`Selectability`] is what every capability in this crate ultimately
//! produces: per item, should the host view render an enabled selection
//! control, a visibly disabled one, or no control at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How an item should present in a view's selection UI.
///
/// Views are expected to query this value before rendering a selection
/// control (checkbox, radio mark, row highlight) for an item and apply:
///
/// - [`Selectable`](Selectability::Selectable): render an enabled control
/// - [`Disabled`](Selectability::Disabled): render the control, but
///   non-interactive; surface an explanation via
///   [`SelectionRationale`](crate::SelectionRationale) if one is available
/// - [`Hidden`](Selectability::Hidden): render no control at all; whether
///   the item still counts toward selection totals is the view's own policy
///
/// The default is [`Selectable`](Selectability::Selectable), so a capability
/// that has no opinion about an item stays permissive.
///
/// # Example
///
/// ```
/// use horizon_selectable::Selectability;
///
/// let verdict = Selectability::Disabled;
/// assert!(verdict.shows_control());
/// assert!(!verdict.is_interactive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selectability {
    /// The item can be selected.
    #[default]
    Selectable,
    /// The item is visible but cannot currently be selected.
    Disabled,
    /// The item takes no part in selection.
    Hidden,
}

impl Selectability {
    /// All three values, each exactly once.
    pub const ALL: [Selectability; 3] = [
        Selectability::Selectable,
        Selectability::Disabled,
        Selectability::Hidden,
    ];

    /// Returns `true` if the item can be selected.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Selectability::Selectable)
    }

    /// Returns `true` if the item is visible but not selectable.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Selectability::Disabled)
    }

    /// Returns `true` if the item takes no part in selection.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Selectability::Hidden)
    }

    /// Returns `true` if a selection control should be rendered at all.
    ///
    /// `Selectable` and `Disabled` items both show a control; `Hidden`
    /// items show none.
    pub fn shows_control(&self) -> bool {
        !matches!(self, Selectability::Hidden)
    }

    /// Returns `true` if the rendered control accepts input.
    ///
    /// Only `Selectable` items are interactive.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Selectability::Selectable)
    }

    /// Combines two verdicts, keeping the more restrictive one.
    ///
    /// `Hidden` beats `Disabled`, which beats `Selectable`. Use this to
    /// fold the verdicts of independent capability sources into one.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_selectable::Selectability;
    ///
    /// let folded = Selectability::Selectable
    ///     .restrict(Selectability::Disabled)
    ///     .restrict(Selectability::Selectable);
    /// assert_eq!(folded, Selectability::Disabled);
    /// ```
    pub fn restrict(self, other: Selectability) -> Selectability {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    /// Restrictiveness order used by `restrict`.
    fn rank(self) -> u8 {
        match self {
            Selectability::Selectable => 0,
            Selectability::Disabled => 1,
            Selectability::Hidden => 2,
        }
    }
}

impl fmt::Display for Selectability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Selectability::Selectable => "selectable",
            Selectability::Disabled => "disabled",
            Selectability::Hidden => "hidden",
        })
    }
}

/// Error returned when parsing a [`Selectability`] token fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown selectability '{token}', expected one of: selectable, disabled, hidden")]
pub struct ParseSelectabilityError {
    /// The rejected input.
    pub token: String,
}

impl FromStr for Selectability {
    type Err = ParseSelectabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selectable" => Ok(Selectability::Selectable),
            "disabled" => Ok(Selectability::Disabled),
            "hidden" => Ok(Selectability::Hidden),
            _ => Err(ParseSelectabilityError {
                token: s.to_string(),
            }),
        }
    }
}

static_assertions::assert_impl_all!(Selectability: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_selectable() {
        assert_eq!(Selectability::default(), Selectability::Selectable);
    }

    #[test]
    fn test_exactly_three_distinct_values() {
        assert_eq!(Selectability::ALL.len(), 3);
        for (i, a) in Selectability::ALL.iter().enumerate() {
            for b in &Selectability::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_presentation_helpers() {
        assert!(Selectability::Selectable.shows_control());
        assert!(Selectability::Selectable.is_interactive());

        assert!(Selectability::Disabled.shows_control());
        assert!(!Selectability::Disabled.is_interactive());

        assert!(!Selectability::Hidden.shows_control());
        assert!(!Selectability::Hidden.is_interactive());
    }

    #[test]
    fn test_display_round_trip() {
        for value in Selectability::ALL {
            let parsed: Selectability = value.to_string().parse().unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn test_display_values_are_distinct() {
        let tokens: Vec<String> = Selectability::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(tokens, vec!["selectable", "disabled", "hidden"]);
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = "greyed-out".parse::<Selectability>().unwrap_err();
        assert_eq!(err.token, "greyed-out");
    }

    #[test]
    fn test_serde_round_trip() {
        for value in Selectability::ALL {
            let json = serde_json::to_string(&value).unwrap();
            let back: Selectability = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }

        // The wire tokens must stay distinct as well.
        assert_eq!(
            serde_json::to_string(&Selectability::Hidden).unwrap(),
            "\"hidden\""
        );
    }

    #[test]
    fn test_restrict_keeps_most_restrictive() {
        use Selectability::*;

        assert_eq!(Selectable.restrict(Disabled), Disabled);
        assert_eq!(Disabled.restrict(Selectable), Disabled);
        assert_eq!(Disabled.restrict(Hidden), Hidden);
        assert_eq!(Hidden.restrict(Selectable), Hidden);
    }

    #[test]
    fn test_restrict_is_idempotent() {
        for value in Selectability::ALL {
            assert_eq!(value.restrict(value), value);
        }
    }

    #[test]
    fn test_restrict_is_commutative() {
        for a in Selectability::ALL {
            for b in Selectability::ALL {
                assert_eq!(a.restrict(b), b.restrict(a));
            }
        }
    }
}
