//! Order bump entries

use crate::file::{FileRef, ImageRef};
use crate::ids::BumpId;
use serde::{Deserialize, Serialize};

/// How an order bump's discount is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Discount as a percentage of the bump price
    #[default]
    Percentage,
    /// Discount as a fixed amount in the listing currency
    Fixed,
}

/// An up-sell offer shown next to the main product at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderBump {
    /// Identity, stable across removals of other entries
    pub id: BumpId,
    /// Product name (clamped on input)
    pub product_name: String,
    /// Product description (clamped on input)
    pub product_description: String,
    /// Price as typed
    pub price: String,
    /// Discounted price as typed, once one has been entered
    pub discount_price: Option<String>,
    /// Discount interpretation
    pub discount_type: DiscountType,
    /// Product photo
    pub photo: Option<ImageRef>,
    /// Downloadable product file
    pub file: Option<FileRef>,
    /// Whether the offer is shown at checkout
    pub enabled: bool,
    /// Whether the discount price applies
    pub has_discount: bool,
    /// Whether the entry is expanded in the sheet
    pub expanded: bool,
}

impl OrderBump {
    /// Fresh entry as appended by the add affordance
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: BumpId::new(),
            product_name: String::new(),
            product_description: String::new(),
            price: String::new(),
            discount_price: None,
            discount_type: DiscountType::Percentage,
            photo: None,
            file: None,
            enabled: true,
            has_discount: false,
            expanded: true,
        }
    }

    /// Discount price text, empty when none was entered
    #[inline]
    #[must_use]
    pub fn discount_price_str(&self) -> &str {
        self.discount_price.as_deref().unwrap_or("")
    }
}

impl Default for OrderBump {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_bump_defaults() {
        let bump = OrderBump::blank();
        assert!(bump.product_name.is_empty());
        assert!(bump.discount_price.is_none());
        assert_eq!(bump.discount_type, DiscountType::Percentage);
        assert!(bump.enabled);
        assert!(!bump.has_discount);
        assert!(bump.expanded);
        assert_eq!(bump.discount_price_str(), "");
    }

    #[test]
    fn blank_bumps_have_distinct_ids() {
        assert_ne!(OrderBump::blank().id, OrderBump::blank().id);
    }
}
