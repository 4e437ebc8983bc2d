//! Listing Validation
//!
//! Pure completeness predicates over a draft snapshot.
//!
//! # Overview
//!
//! - [`is_main_complete`]: whether the main product has enough data to sell
//! - [`CompletenessEvaluator`]: order bump completeness under a [`BumpPolicy`]
//! - [`ValidationIncomplete`]: non-fatal diagnostic listing missing fields
//!
//! # Example
//!
//! ```rust
//! use listing_draft::{ImageRef, ProductDraft};
//! use listing_validation::{is_main_complete, missing_main_fields, MainField};
//!
//! let draft = ProductDraft::empty()
//!     .with_title("Supply")
//!     .with_subtitle("T")
//!     .with_description("d")
//!     .with_cover_image(ImageRef::new("data:image/png;base64,AA"))
//!     .with_price("10.00");
//! assert!(is_main_complete(&draft));
//!
//! let unpriced = draft.with_price("0");
//! assert_eq!(missing_main_fields(&unpriced), vec![MainField::Price]);
//! ```

#![warn(missing_docs)]

pub mod completeness;
pub mod error;
pub mod fields;

pub use completeness::{is_main_complete, missing_main_fields, BumpPolicy, CompletenessEvaluator};
pub use error::ValidationIncomplete;
pub use fields::{join_labels, BumpField, MainField};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validation
    pub use crate::{
        is_main_complete, missing_main_fields, BumpField, BumpPolicy, CompletenessEvaluator,
        MainField, ValidationIncomplete,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
