//! Field identifiers reported by completeness checks

use serde::{Deserialize, Serialize};

/// Main product fields that gate completeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainField {
    /// Product title
    Title,
    /// Product subtitle
    Subtitle,
    /// Rich-text description
    Description,
    /// Cover image
    CoverImage,
    /// Price (paid products only)
    Price,
}

impl MainField {
    /// Label used in hint text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Description => "description",
            Self::CoverImage => "image",
            Self::Price => "price",
        }
    }
}

impl std::fmt::Display for MainField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order bump fields that gate completeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BumpField {
    /// Product name
    ProductName,
    /// Product description
    ProductDescription,
    /// Price (strict policy only)
    Price,
    /// Discount price (strict policy, when a discount is on)
    DiscountPrice,
    /// Product photo
    Photo,
    /// Downloadable file
    File,
}

impl BumpField {
    /// Label used in hint text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProductName => "product name",
            Self::ProductDescription => "product description",
            Self::Price => "price",
            Self::DiscountPrice => "discount price",
            Self::Photo => "product photo",
            Self::File => "product file",
        }
    }
}

impl std::fmt::Display for BumpField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Join field labels for messages, e.g. `title, image`
#[must_use]
pub fn join_labels<T: std::fmt::Display>(fields: &[T]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
