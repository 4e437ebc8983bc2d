//! Form completeness evaluation
//!
//! Decides whether the main product and each order bump carry enough data
//! to be sold. Every check is a pure function of the snapshot passed in.

use crate::error::ValidationIncomplete;
use crate::fields::{BumpField, MainField};
use listing_draft::{is_positive_amount, OrderBump, ProductDraft};
use serde::{Deserialize, Serialize};

/// Fields of the main product that are missing, in form order
///
/// Title, subtitle and description must be non-blank and a cover image must
/// be present. The price is checked only for paid products, where it must
/// parse to a number greater than zero.
#[must_use]
pub fn missing_main_fields(draft: &ProductDraft) -> Vec<MainField> {
    let mut missing = Vec::new();

    if draft.title.trim().is_empty() {
        missing.push(MainField::Title);
    }
    if draft.subtitle.trim().is_empty() {
        missing.push(MainField::Subtitle);
    }
    if draft.description.is_blank() {
        missing.push(MainField::Description);
    }
    if draft.cover_image.is_none() {
        missing.push(MainField::CoverImage);
    }
    if draft.is_paid && !is_positive_amount(&draft.price) {
        missing.push(MainField::Price);
    }

    missing
}

/// Whether the main product is complete
#[inline]
#[must_use]
pub fn is_main_complete(draft: &ProductDraft) -> bool {
    missing_main_fields(draft).is_empty()
}

/// How strictly order bumps are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BumpPolicy {
    /// Name, description, photo, file, a positive price and, when a
    /// discount is on, a positive discount price
    #[default]
    Strict,
    /// Name, description, photo and file; prices are not checked
    Loose,
}

impl BumpPolicy {
    /// Policy from the `strict_order_bump_validation` switch
    #[inline]
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Loose
        }
    }
}

/// Completeness checks bound to a bump policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletenessEvaluator {
    policy: BumpPolicy,
}

impl CompletenessEvaluator {
    /// Create evaluator with the given policy
    #[inline]
    #[must_use]
    pub const fn new(policy: BumpPolicy) -> Self {
        Self { policy }
    }

    /// Evaluator using the strict policy
    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(BumpPolicy::Strict)
    }

    /// Evaluator using the loose policy
    #[inline]
    #[must_use]
    pub const fn loose() -> Self {
        Self::new(BumpPolicy::Loose)
    }

    /// Active policy
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> BumpPolicy {
        self.policy
    }

    /// See [`is_main_complete`]
    #[inline]
    #[must_use]
    pub fn is_main_complete(&self, draft: &ProductDraft) -> bool {
        is_main_complete(draft)
    }

    /// Fields of an order bump that are missing, in form order
    #[must_use]
    pub fn missing_bump_fields(&self, bump: &OrderBump) -> Vec<BumpField> {
        let mut missing = Vec::new();

        if bump.product_name.trim().is_empty() {
            missing.push(BumpField::ProductName);
        }
        if bump.product_description.trim().is_empty() {
            missing.push(BumpField::ProductDescription);
        }
        if self.policy == BumpPolicy::Strict {
            if !is_positive_amount(&bump.price) {
                missing.push(BumpField::Price);
            }
            if bump.has_discount && !is_positive_amount(bump.discount_price_str()) {
                missing.push(BumpField::DiscountPrice);
            }
        }
        if bump.photo.is_none() {
            missing.push(BumpField::Photo);
        }
        if bump.file.is_none() {
            missing.push(BumpField::File);
        }

        missing
    }

    /// Whether an order bump is complete under the active policy
    #[inline]
    #[must_use]
    pub fn is_order_bump_complete(&self, bump: &OrderBump) -> bool {
        self.missing_bump_fields(bump).is_empty()
    }

    /// Check the main product
    ///
    /// # Errors
    /// `ValidationIncomplete::Main` listing the missing fields
    pub fn check_main(&self, draft: &ProductDraft) -> Result<(), ValidationIncomplete> {
        let missing = missing_main_fields(draft);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationIncomplete::Main { missing })
        }
    }

    /// Check one order bump
    ///
    /// # Errors
    /// `ValidationIncomplete::OrderBump` listing the missing fields
    pub fn check_bump(&self, bump: &OrderBump) -> Result<(), ValidationIncomplete> {
        let missing = self.missing_bump_fields(bump);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationIncomplete::OrderBump {
                id: bump.id,
                missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listing_draft::{FileRef, FileSelection, ImageRef};
    use pretty_assertions::assert_eq;

    fn complete_draft() -> ProductDraft {
        ProductDraft::empty()
            .with_title("Supply")
            .with_subtitle("T")
            .with_description("d")
            .with_cover_image(ImageRef::new("data:image/png;base64,AA"))
            .with_price("10.00")
    }

    fn complete_bump() -> OrderBump {
        let mut bump = OrderBump::blank();
        bump.product_name = "Icons".into();
        bump.product_description = "A pack of icons".into();
        bump.price = "5".into();
        bump.photo = Some(ImageRef::new("data:image/png;base64,BB"));
        bump.file = Some(FileRef::from_selection(FileSelection::new(
            "icons.pdf",
            100,
            "application/pdf",
            "blob:icons",
        )));
        bump
    }

    #[test]
    fn main_scenario_price_changes() {
        let draft = complete_draft();
        assert!(is_main_complete(&draft));

        let zero = draft.clone().with_price("0");
        assert!(!is_main_complete(&zero));

        let empty = draft.with_price("");
        assert!(!is_main_complete(&empty));
    }

    #[test]
    fn free_products_skip_price() {
        let draft = complete_draft().with_price("").free();
        assert!(is_main_complete(&draft));
    }

    #[test]
    fn missing_fields_in_form_order() {
        let draft = ProductDraft::empty().with_price("nope");
        assert_eq!(
            missing_main_fields(&draft),
            vec![
                MainField::Title,
                MainField::Subtitle,
                MainField::Description,
                MainField::CoverImage,
                MainField::Price,
            ]
        );
    }

    #[test]
    fn whitespace_only_fields_are_blank() {
        let draft = complete_draft().with_title("   ").with_description("<p> </p>");
        assert_eq!(
            missing_main_fields(&draft),
            vec![MainField::Title, MainField::Description]
        );
    }

    #[test]
    fn strict_policy_requires_price() {
        let evaluator = CompletenessEvaluator::strict();
        let mut bump = complete_bump();
        assert!(evaluator.is_order_bump_complete(&bump));

        bump.price = String::new();
        assert_eq!(evaluator.missing_bump_fields(&bump), vec![BumpField::Price]);
    }

    #[test]
    fn strict_policy_requires_discount_price_when_discounted() {
        let evaluator = CompletenessEvaluator::strict();
        let mut bump = complete_bump();
        bump.has_discount = true;
        assert_eq!(
            evaluator.missing_bump_fields(&bump),
            vec![BumpField::DiscountPrice]
        );

        bump.discount_price = Some("2.50".into());
        assert!(evaluator.is_order_bump_complete(&bump));

        bump.discount_price = Some("0".into());
        assert!(!evaluator.is_order_bump_complete(&bump));
    }

    #[test]
    fn loose_policy_ignores_prices() {
        let evaluator = CompletenessEvaluator::loose();
        let mut bump = complete_bump();
        bump.price = String::new();
        bump.has_discount = true;
        assert!(evaluator.is_order_bump_complete(&bump));

        bump.file = None;
        assert_eq!(evaluator.missing_bump_fields(&bump), vec![BumpField::File]);
    }

    #[test]
    fn check_reports_missing_fields() {
        let evaluator = CompletenessEvaluator::default();
        let err = evaluator
            .check_main(&complete_draft().with_title(""))
            .unwrap_err();
        assert_eq!(err.missing_labels(), vec!["title"]);
        assert_eq!(err.to_string(), "main product incomplete (missing: title)");

        let bump = OrderBump::blank();
        let err = evaluator.check_bump(&bump).unwrap_err();
        assert!(matches!(err, ValidationIncomplete::OrderBump { id, .. } if id == bump.id));
    }

    #[test]
    fn policy_from_switch() {
        assert_eq!(BumpPolicy::from_strict(true), BumpPolicy::Strict);
        assert_eq!(BumpPolicy::from_strict(false), BumpPolicy::Loose);
        assert_eq!(CompletenessEvaluator::default().policy(), BumpPolicy::Strict);
    }
}
