//! Listing Draft Model
//!
//! Typed, in-memory state of a digital product being created in the sheet.
//!
//! # Core Concepts
//!
//! - [`ProductDraft`]: Main product fields (title, pricing, cover image, files)
//! - [`OrderBump`]: Optional up-sell offer attached to the main product
//! - [`FileRef`]: A selected file with its display metadata
//! - [`Currency`]: Accepted payment currencies and their display symbols
//!
//! Amounts are kept as the raw decimal strings the user typed; use
//! [`parse_amount`] and [`is_positive_amount`] to interpret them.
//!
//! # Example
//!
//! ```rust
//! use listing_draft::{Currency, ProductDraft, format_price};
//!
//! let draft = ProductDraft::default();
//! assert_eq!(draft.currency, Currency::Usd);
//! assert_eq!(format_price(Currency::Eur, "12.5"), "€ 12.50");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod amount;
mod bump;
mod currency;
mod draft;
mod file;
mod ids;

pub use amount::{is_positive_amount, parse_amount};
pub use bump::{DiscountType, OrderBump};
pub use currency::{format_price, Currency, CurrencyParseError};
pub use draft::{ProductDraft, RichText};
pub use file::{format_file_size, FileRef, FileSelection, ImageRef, UploadError, UploadKind};
pub use ids::{BumpId, FileId};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with drafts
    pub use crate::{
        BumpId, Currency, DiscountType, FileId, FileRef, FileSelection, ImageRef, OrderBump,
        ProductDraft, RichText, UploadKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
