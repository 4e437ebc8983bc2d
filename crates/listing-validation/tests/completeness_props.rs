use listing_draft::{is_positive_amount, ProductDraft};
use listing_test_utils::{arb_amount, arb_bump, arb_draft, complete_draft, complete_free_draft};
use listing_validation::{
    is_main_complete, missing_main_fields, BumpField, CompletenessEvaluator, MainField,
};
use proptest::prelude::*;

#[test]
fn scenario_supply_draft() {
    let draft = complete_draft();
    assert!(is_main_complete(&draft));
    assert!(!is_main_complete(&draft.clone().with_price("0")));
    assert!(!is_main_complete(&draft.with_price("")));
}

#[test]
fn free_draft_is_complete_without_price() {
    assert!(is_main_complete(&complete_free_draft()));
}

#[test]
fn default_sheet_draft_is_incomplete() {
    // Pre-filled sample has no description, no image and a zero price
    let missing = missing_main_fields(&ProductDraft::default());
    assert_eq!(
        missing,
        vec![MainField::Description, MainField::CoverImage, MainField::Price]
    );
}

proptest! {
    #[test]
    fn prop_free_drafts_ignore_price(draft in arb_draft(), price in arb_amount()) {
        let mut free = draft.free();
        let before = is_main_complete(&free);
        free.price = price;
        prop_assert_eq!(is_main_complete(&free), before);
        prop_assert!(!missing_main_fields(&free).contains(&MainField::Price));
    }

    #[test]
    fn prop_paid_drafts_need_positive_price(draft in arb_draft()) {
        let mut paid = draft;
        paid.is_paid = true;
        if !is_positive_amount(&paid.price) {
            prop_assert!(!is_main_complete(&paid));
            prop_assert!(missing_main_fields(&paid).contains(&MainField::Price));
        }
    }

    #[test]
    fn prop_predicate_matches_missing_list(draft in arb_draft()) {
        prop_assert_eq!(is_main_complete(&draft), missing_main_fields(&draft).is_empty());
    }

    #[test]
    fn prop_strict_implies_loose(bump in arb_bump()) {
        let strict = CompletenessEvaluator::strict();
        let loose = CompletenessEvaluator::loose();
        if strict.is_order_bump_complete(&bump) {
            prop_assert!(loose.is_order_bump_complete(&bump));
        }
    }

    #[test]
    fn prop_loose_never_reports_prices(bump in arb_bump()) {
        let missing = CompletenessEvaluator::loose().missing_bump_fields(&bump);
        prop_assert!(!missing.contains(&BumpField::Price));
        prop_assert!(!missing.contains(&BumpField::DiscountPrice));
    }

    #[test]
    fn prop_discount_price_only_checked_when_discounted(bump in arb_bump()) {
        let missing = CompletenessEvaluator::strict().missing_bump_fields(&bump);
        if !bump.has_discount {
            prop_assert!(!missing.contains(&BumpField::DiscountPrice));
        }
    }
}
