//! Testing utilities for the listing sheet workspace
//!
//! Shared fixtures, selections and proptest strategies.

#![allow(missing_docs)]

use listing_draft::{DiscountType, FileRef, FileSelection, ImageRef, OrderBump, ProductDraft};
use proptest::prelude::*;

pub fn cover_image() -> ImageRef {
    ImageRef::new("data:image/png;base64,iVBORw0KGgo=")
}

pub fn png_selection(name: &str) -> FileSelection {
    FileSelection::new(name, 4_096, "image/png", format!("blob:{name}"))
}

pub fn pdf_selection(name: &str) -> FileSelection {
    FileSelection::new(name, 20_480, "application/pdf", format!("blob:{name}"))
}

pub fn pdf_file(name: &str) -> FileRef {
    FileRef::from_selection(pdf_selection(name))
}

/// `Supply / T / d`, cover image, paid at `10.00`
pub fn complete_draft() -> ProductDraft {
    ProductDraft::empty()
        .with_title("Supply")
        .with_subtitle("T")
        .with_description("d")
        .with_cover_image(cover_image())
        .with_price("10.00")
}

/// Complete draft marked free with no price
pub fn complete_free_draft() -> ProductDraft {
    complete_draft().with_price("").free()
}

/// Bump that passes the strict policy
pub fn complete_bump() -> OrderBump {
    let mut bump = OrderBump::blank();
    bump.product_name = "Icon pack".to_string();
    bump.product_description = "Two hundred extra icons".to_string();
    bump.price = "9.99".to_string();
    bump.photo = Some(ImageRef::new("data:image/png;base64,Ym9udXM="));
    bump.file = Some(pdf_file("icons.pdf"));
    bump
}

/// Bump that passes the loose policy but not the strict one
pub fn unpriced_bump() -> OrderBump {
    let mut bump = complete_bump();
    bump.price = String::new();
    bump
}

pub fn arb_discount_type() -> impl Strategy<Value = DiscountType> {
    prop_oneof![Just(DiscountType::Percentage), Just(DiscountType::Fixed)]
}

/// Amount strings: valid positives, zero/negatives, blanks and garbage
pub fn arb_amount() -> impl Strategy<Value = String> {
    prop_oneof![
        (0.01f64..100_000.0).prop_map(|v| format!("{v:.2}")),
        (-1_000.0f64..=0.0).prop_map(|v| format!("{v:.2}")),
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z]{1,6}",
    ]
}

/// Short text that may be blank
pub fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("  ".to_string()), "[A-Za-z][A-Za-z ]{0,20}"]
}

/// Arbitrary draft covering blank fields, missing images and bad prices
pub fn arb_draft() -> impl Strategy<Value = ProductDraft> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        any::<bool>(),
        any::<bool>(),
        arb_amount(),
    )
        .prop_map(|(title, subtitle, description, has_image, is_paid, price)| {
            let mut draft = ProductDraft::empty()
                .with_title(title)
                .with_subtitle(subtitle)
                .with_description(description.as_str());
            draft.price = price;
            draft.is_paid = is_paid;
            if has_image {
                draft.cover_image = Some(cover_image());
            }
            draft
        })
}

/// Arbitrary bump with any mix of missing fields
pub fn arb_bump() -> impl Strategy<Value = OrderBump> {
    (
        arb_text(),
        arb_text(),
        arb_amount(),
        proptest::option::of(arb_amount()),
        arb_discount_type(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(name, description, price, discount_price, discount_type, has_discount, has_photo, has_file)| {
                let mut bump = OrderBump::blank();
                bump.product_name = name;
                bump.product_description = description;
                bump.price = price;
                bump.discount_price = discount_price;
                bump.discount_type = discount_type;
                bump.has_discount = has_discount;
                if has_photo {
                    bump.photo = Some(cover_image());
                }
                if has_file {
                    bump.file = Some(pdf_file("bonus.pdf"));
                }
                bump
            },
        )
}
