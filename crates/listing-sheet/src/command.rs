//! Commands accepted by the sheet reducer
//!
//! Every user event maps to one command. Field updates on order bumps are
//! their own small union so each field carries its own input rule.

use listing_draft::{BumpId, Currency, DiscountType, FileId, FileRef, ImageRef, OrderBump};
use serde::{Deserialize, Serialize};

/// A state transition request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum SheetCommand {
    /// Set the product title
    SetTitle(String),
    /// Set the product subtitle
    SetSubtitle(String),
    /// Replace the description markup
    SetDescription(String),
    /// Set the main price text
    SetPrice(String),
    /// Switch between paid and free
    SetPaid(bool),
    /// Change currency; resets every bump's discount type to fixed
    SetCurrency(Currency),
    /// Set or clear the cover image
    SetCoverImage(Option<ImageRef>),
    /// Attach a downloadable product file
    AddProductFile(FileRef),
    /// Remove a product file
    RemoveProductFile(FileId),
    /// Turn the order bump feature on (seeding one entry) or off (clearing all)
    ToggleOrderBumps,
    /// Append a blank order bump after the last complete one
    AddOrderBump,
    /// Remove an order bump
    RemoveOrderBump(BumpId),
    /// Update one field of an order bump
    UpdateOrderBump {
        /// Target entry
        id: BumpId,
        /// Field update
        update: BumpUpdate,
    },
}

impl SheetCommand {
    /// Short name for logs and reports
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetTitle(_) => "set_title",
            Self::SetSubtitle(_) => "set_subtitle",
            Self::SetDescription(_) => "set_description",
            Self::SetPrice(_) => "set_price",
            Self::SetPaid(_) => "set_paid",
            Self::SetCurrency(_) => "set_currency",
            Self::SetCoverImage(_) => "set_cover_image",
            Self::AddProductFile(_) => "add_product_file",
            Self::RemoveProductFile(_) => "remove_product_file",
            Self::ToggleOrderBumps => "toggle_order_bumps",
            Self::AddOrderBump => "add_order_bump",
            Self::RemoveOrderBump(_) => "remove_order_bump",
            Self::UpdateOrderBump { .. } => "update_order_bump",
        }
    }
}

/// A single-field update on an order bump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum BumpUpdate {
    /// Product name, clamped to the configured length
    SetProductName(String),
    /// Product description, clamped to the configured length
    SetProductDescription(String),
    /// Price text
    SetPrice(String),
    /// Discount price text
    SetDiscountPrice(String),
    /// Discount interpretation
    SetDiscountType(DiscountType),
    /// Set or clear the photo
    SetPhoto(Option<ImageRef>),
    /// Set or clear the downloadable file
    SetFile(Option<FileRef>),
    /// Flip whether the offer is shown at checkout
    ToggleEnabled,
    /// Flip whether the discount price applies
    ToggleDiscount,
    /// Flip expanded/collapsed display
    ToggleExpanded,
}

/// Input limits applied by [`BumpUpdate::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    /// Max product name length in characters
    pub product_name: usize,
    /// Max product description length in characters
    pub product_description: usize,
}

impl BumpUpdate {
    /// Apply the update to a bump
    pub fn apply(self, bump: &mut OrderBump, limits: FieldLimits) {
        match self {
            Self::SetProductName(name) => {
                bump.product_name = clamp_chars(name, limits.product_name);
            }
            Self::SetProductDescription(description) => {
                bump.product_description = clamp_chars(description, limits.product_description);
            }
            Self::SetPrice(price) => bump.price = price,
            Self::SetDiscountPrice(price) => bump.discount_price = Some(price),
            Self::SetDiscountType(kind) => bump.discount_type = kind,
            Self::SetPhoto(photo) => bump.photo = photo,
            Self::SetFile(file) => bump.file = file,
            Self::ToggleEnabled => bump.enabled = !bump.enabled,
            Self::ToggleDiscount => bump.has_discount = !bump.has_discount,
            Self::ToggleExpanded => bump.expanded = !bump.expanded,
        }
    }
}

/// Truncate to at most `max` characters
fn clamp_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value,
    }
}
