//! What the sheet lets the user do right now
//!
//! Invalid actions are never errors; their affordance is hidden or made
//! non-interactive, with a hint explaining what is missing.

use crate::config::SheetConfig;
use crate::state::SheetState;
use listing_validation::{join_labels, missing_main_fields, MainField};
use serde::Serialize;

/// Inline guidance shown next to a disabled affordance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "hint", rename_all = "snake_case")]
pub enum Hint {
    /// The main product must be complete before order bumps can be enabled
    FillMainFields {
        /// Missing fields in form order
        missing: Vec<MainField>,
    },
    /// The last order bump must be complete before another is added
    CompleteCurrentBump,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FillMainFields { missing } => write!(
                f,
                "Please fill all main product fields first (missing: {})",
                join_labels(missing)
            ),
            Self::CompleteCurrentBump => f.write_str(
                "Please complete all fields in the current Order Bump before adding a new one",
            ),
        }
    }
}

/// The on/off switch shown while no order bump exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleAffordance {
    /// Shown only while the feature is disabled
    pub visible: bool,
    /// Clickable only when the main product is complete
    pub interactive: bool,
    /// Why the switch is inert
    pub hint: Option<Hint>,
}

/// The "Add Order Bump" button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AddAffordance {
    /// Feature disabled, or the limit is reached
    Hidden,
    /// Clickable
    Enabled,
    /// Shown but inert
    Disabled {
        /// Why
        hint: Hint,
    },
}

impl AddAffordance {
    /// Whether the button is on screen
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// All gated affordances for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affordances {
    /// Feature switch
    pub toggle: ToggleAffordance,
    /// Add button
    pub add: AddAffordance,
}

impl Affordances {
    /// Derive affordances from a state snapshot
    #[must_use]
    pub fn of(state: &SheetState, config: &SheetConfig) -> Self {
        let bumps = state.order_bumps();

        let toggle = if bumps.is_empty() {
            let missing = missing_main_fields(state.draft());
            if missing.is_empty() {
                ToggleAffordance {
                    visible: true,
                    interactive: true,
                    hint: None,
                }
            } else {
                ToggleAffordance {
                    visible: true,
                    interactive: false,
                    hint: Some(Hint::FillMainFields { missing }),
                }
            }
        } else {
            ToggleAffordance {
                visible: false,
                interactive: false,
                hint: None,
            }
        };

        let add = match bumps.last() {
            None => AddAffordance::Hidden,
            Some(_) if bumps.len() >= config.order_bump_limit() => AddAffordance::Hidden,
            Some(last) if config.evaluator().is_order_bump_complete(last) => AddAffordance::Enabled,
            Some(_) => AddAffordance::Disabled {
                hint: Hint::CompleteCurrentBump,
            },
        };

        Self { toggle, add }
    }
}
