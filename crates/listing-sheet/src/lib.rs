//! Listing Sheet
//!
//! State machine behind the product creation sheet:
//! - Applies user commands to the draft through a pure reducer
//! - Gates the order bump list (at most three, each complete before the next)
//! - Derives which affordances are visible and why some are inert
//! - Drives the open/close presence and the description toolbar
//! - Validates before handing the listing to the host's save handler
//!
//! # Example
//!
//! ```rust
//! use listing_draft::{ImageRef, ProductDraft};
//! use listing_sheet::{reduce, OrderBumpPhase, SheetCommand, SheetConfig, SheetState};
//!
//! let draft = ProductDraft::empty()
//!     .with_title("Supply")
//!     .with_subtitle("T")
//!     .with_description("d")
//!     .with_cover_image(ImageRef::new("data:image/png;base64,AA"))
//!     .with_price("10.00");
//!
//! let config = SheetConfig::default();
//! let reduced = reduce(SheetState::new(draft), SheetCommand::ToggleOrderBumps, &config);
//! assert!(reduced.outcome.is_applied());
//! assert_eq!(reduced.state.phase(), OrderBumpPhase::Active(1));
//! ```

#![warn(unreachable_pub)]

pub mod affordance;
pub mod command;
pub mod config;
pub mod editor;
pub mod error;
pub mod host;
pub mod presence;
pub mod reducer;
pub mod state;
pub mod upload;

pub use affordance::{AddAffordance, Affordances, Hint, ToggleAffordance};
pub use command::{BumpUpdate, FieldLimits, SheetCommand};
pub use config::{SheetConfig, MAX_ORDER_BUMPS};
pub use editor::{FormattingEngine, LegacyTextEditor, Mark, Toolbar, ToolbarButton};
pub use error::{ConfigError, SaveError, SheetError};
pub use host::{FilePicker, ListingSubmission, ProductSheet, SaveHandler, SaveReceipt};
pub use presence::{Presence, PresencePhase};
pub use reducer::{reduce, Outcome, Reduced, Rejection};
pub use state::{OrderBumpPhase, SheetState};
pub use upload::{attach_command, UploadTarget};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a sheet
    pub use crate::{
        reduce, Affordances, BumpUpdate, Outcome, ProductSheet, SaveHandler, SheetCommand,
        SheetConfig, SheetState, UploadTarget,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
