//! The sheet reducer
//!
//! `reduce` takes the current state by value and returns the next one along
//! with the outcome. Rejected commands return the state unchanged apart from
//! the notice.
//!
//! # Order bump transitions
//!
//! | From        | Command              | Guard                         | To            |
//! |-------------|----------------------|-------------------------------|---------------|
//! | `Disabled`  | `ToggleOrderBumps`   | main complete                 | `Active(1)`   |
//! | `Active(n)` | `ToggleOrderBumps`   | none                          | `Disabled`    |
//! | `Active(n)` | `AddOrderBump`       | `n < limit`, last complete    | `Active(n+1)` |
//! | `Active(n)` | `RemoveOrderBump`    | id present                    | `Active(n-1)` or `Disabled` |

use crate::affordance::Hint;
use crate::command::{FieldLimits, SheetCommand};
use crate::config::SheetConfig;
use crate::state::SheetState;
use listing_draft::{BumpId, DiscountType, FileId, OrderBump, RichText};
use listing_validation::{join_labels, missing_main_fields, BumpField, MainField};

/// Result of one reducer step
#[derive(Debug, Clone, PartialEq)]
pub struct Reduced {
    /// Next state
    pub state: SheetState,
    /// Whether the command took effect
    pub outcome: Outcome,
}

/// Whether a command took effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State updated
    Applied,
    /// Precondition not met; nothing changed
    Rejected(Rejection),
}

impl Outcome {
    /// Check if the command took effect
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
        }
    }
}

/// Why a command was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// Order bumps cannot be enabled until the main product is complete
    #[error("main product incomplete (missing: {})", join_labels(.missing))]
    MainIncomplete {
        /// Missing fields
        missing: Vec<MainField>,
    },

    /// The last order bump must be complete before another is added
    #[error("order bump {id} incomplete (missing: {})", join_labels(.missing))]
    LastBumpIncomplete {
        /// The incomplete entry
        id: BumpId,
        /// Missing fields
        missing: Vec<BumpField>,
    },

    /// Entries are only appended while the feature is on
    #[error("order bumps are disabled")]
    FeatureDisabled,

    /// The list is full
    #[error("order bump limit of {limit} reached")]
    LimitReached {
        /// Configured limit
        limit: usize,
    },

    /// No entry with that id
    #[error("order bump not found: {0}")]
    UnknownBump(BumpId),

    /// No attached file with that id
    #[error("product file not found: {0}")]
    UnknownFile(FileId),
}

impl Rejection {
    /// Hint to surface for this rejection, if any
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        match self {
            Self::MainIncomplete { missing } => Some(Hint::FillMainFields {
                missing: missing.clone(),
            }),
            Self::LastBumpIncomplete { .. } => Some(Hint::CompleteCurrentBump),
            _ => None,
        }
    }
}

/// Apply one command
#[must_use]
pub fn reduce(mut state: SheetState, command: SheetCommand, config: &SheetConfig) -> Reduced {
    let result = step(&mut state, command, config);

    let outcome = match result {
        Ok(()) => {
            state.set_notice(None);
            Outcome::Applied
        }
        Err(rejection) => {
            state.set_notice(rejection.hint());
            Outcome::Rejected(rejection)
        }
    };

    Reduced { state, outcome }
}

fn step(state: &mut SheetState, command: SheetCommand, config: &SheetConfig) -> Result<(), Rejection> {
    match command {
        SheetCommand::SetTitle(title) => state.draft_mut().title = title,
        SheetCommand::SetSubtitle(subtitle) => state.draft_mut().subtitle = subtitle,
        SheetCommand::SetDescription(markup) => state.draft_mut().description = RichText(markup),
        SheetCommand::SetPrice(price) => state.draft_mut().price = price,
        SheetCommand::SetPaid(paid) => state.draft_mut().is_paid = paid,
        SheetCommand::SetCurrency(currency) => {
            state.draft_mut().currency = currency;
            // Percentage discounts do not survive a currency change
            for bump in state.order_bumps_mut() {
                bump.discount_type = DiscountType::Fixed;
            }
        }
        SheetCommand::SetCoverImage(image) => state.draft_mut().cover_image = image,
        SheetCommand::AddProductFile(file) => state.draft_mut().attach_file(file),
        SheetCommand::RemoveProductFile(id) => {
            state
                .draft_mut()
                .remove_file(id)
                .ok_or(Rejection::UnknownFile(id))?;
        }
        SheetCommand::ToggleOrderBumps => toggle_order_bumps(state)?,
        SheetCommand::AddOrderBump => add_order_bump(state, config)?,
        SheetCommand::RemoveOrderBump(id) => {
            let bumps = state.order_bumps_mut();
            let pos = bumps
                .iter()
                .position(|b| b.id == id)
                .ok_or(Rejection::UnknownBump(id))?;
            bumps.remove(pos);
        }
        SheetCommand::UpdateOrderBump { id, update } => {
            let limits = FieldLimits {
                product_name: config.product_name_max_len,
                product_description: config.product_description_max_len,
            };
            let bump = state
                .order_bumps_mut()
                .iter_mut()
                .find(|b| b.id == id)
                .ok_or(Rejection::UnknownBump(id))?;
            update.apply(bump, limits);
        }
    }
    Ok(())
}

fn toggle_order_bumps(state: &mut SheetState) -> Result<(), Rejection> {
    if !state.order_bumps().is_empty() {
        state.order_bumps_mut().clear();
        return Ok(());
    }

    let missing = missing_main_fields(state.draft());
    if !missing.is_empty() {
        return Err(Rejection::MainIncomplete { missing });
    }

    state.order_bumps_mut().push(OrderBump::blank());
    Ok(())
}

fn add_order_bump(state: &mut SheetState, config: &SheetConfig) -> Result<(), Rejection> {
    let limit = config.order_bump_limit();
    let bumps = state.order_bumps();

    let last = bumps.last().ok_or(Rejection::FeatureDisabled)?;
    if bumps.len() >= limit {
        return Err(Rejection::LimitReached { limit });
    }

    let missing = config.evaluator().missing_bump_fields(last);
    if !missing.is_empty() {
        return Err(Rejection::LastBumpIncomplete { id: last.id, missing });
    }

    state.order_bumps_mut().push(OrderBump::blank());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OrderBumpPhase;
    use listing_draft::{Currency, ImageRef, ProductDraft};

    fn complete_draft() -> ProductDraft {
        ProductDraft::empty()
            .with_title("Supply")
            .with_subtitle("T")
            .with_description("d")
            .with_cover_image(ImageRef::new("data:image/png;base64,AA"))
            .with_price("10.00")
    }

    fn run(state: SheetState, command: SheetCommand) -> Reduced {
        reduce(state, command, &SheetConfig::default())
    }

    #[test]
    fn field_commands_update_draft() {
        let mut state = SheetState::new(ProductDraft::empty());
        for command in [
            SheetCommand::SetTitle("Supply".into()),
            SheetCommand::SetSubtitle("T".into()),
            SheetCommand::SetDescription("<p>d</p>".into()),
            SheetCommand::SetPrice("4".into()),
            SheetCommand::SetPaid(true),
            SheetCommand::SetCoverImage(Some(ImageRef::new("img"))),
        ] {
            let reduced = run(state, command);
            assert!(reduced.outcome.is_applied());
            state = reduced.state;
        }
        assert_eq!(state.draft().title, "Supply");
        assert_eq!(state.draft().description.as_markup(), "<p>d</p>");
        assert!(state.draft().is_paid);
        assert!(listing_validation::is_main_complete(state.draft()));
    }

    #[test]
    fn toggle_on_incomplete_main_sets_notice() {
        let reduced = run(SheetState::new(ProductDraft::empty()), SheetCommand::ToggleOrderBumps);
        assert!(matches!(reduced.outcome, Outcome::Rejected(Rejection::MainIncomplete { .. })));
        assert_eq!(reduced.state.phase(), OrderBumpPhase::Disabled);
        assert!(matches!(reduced.state.notice(), Some(Hint::FillMainFields { .. })));

        // Next applied command clears the notice
        let reduced = run(reduced.state, SheetCommand::SetTitle("x".into()));
        assert!(reduced.state.notice().is_none());
    }

    #[test]
    fn toggle_seeds_then_clears() {
        let reduced = run(SheetState::new(complete_draft()), SheetCommand::ToggleOrderBumps);
        assert!(reduced.outcome.is_applied());
        assert_eq!(reduced.state.phase(), OrderBumpPhase::Active(1));

        let reduced = run(reduced.state, SheetCommand::ToggleOrderBumps);
        assert_eq!(reduced.state.phase(), OrderBumpPhase::Disabled);
    }

    #[test]
    fn add_rejected_while_last_incomplete() {
        let state = run(SheetState::new(complete_draft()), SheetCommand::ToggleOrderBumps).state;
        let reduced = run(state, SheetCommand::AddOrderBump);
        assert!(matches!(
            reduced.outcome,
            Outcome::Rejected(Rejection::LastBumpIncomplete { .. })
        ));
        assert_eq!(reduced.state.notice(), Some(&Hint::CompleteCurrentBump));
        assert_eq!(reduced.state.phase(), OrderBumpPhase::Active(1));
    }

    #[test]
    fn currency_change_forces_fixed_discounts() {
        let state = run(SheetState::new(complete_draft()), SheetCommand::ToggleOrderBumps).state;
        let id = state.order_bumps()[0].id;
        assert_eq!(state.order_bumps()[0].discount_type, DiscountType::Percentage);

        let reduced = run(state, SheetCommand::SetCurrency(Currency::Eur));
        assert_eq!(reduced.state.draft().currency, Currency::Eur);
        assert_eq!(
            reduced.state.order_bump(id).map(|b| b.discount_type),
            Some(DiscountType::Fixed)
        );
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let state = SheetState::new(complete_draft());
        let missing_bump = BumpId::new();
        let reduced = run(state, SheetCommand::RemoveOrderBump(missing_bump));
        assert_eq!(
            reduced.outcome,
            Outcome::Rejected(Rejection::UnknownBump(missing_bump))
        );

        let missing_file = FileId::new();
        let reduced = run(reduced.state, SheetCommand::RemoveProductFile(missing_file));
        assert_eq!(
            reduced.outcome,
            Outcome::Rejected(Rejection::UnknownFile(missing_file))
        );
    }

    #[test]
    fn rejection_messages() {
        let rejection = Rejection::MainIncomplete {
            missing: vec![MainField::Title, MainField::CoverImage],
        };
        assert_eq!(rejection.to_string(), "main product incomplete (missing: title, image)");
        assert_eq!(
            Outcome::Rejected(Rejection::LimitReached { limit: 3 }).to_string(),
            "rejected: order bump limit of 3 reached"
        );
    }
}
