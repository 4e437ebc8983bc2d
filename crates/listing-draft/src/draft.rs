//! Main product draft

use crate::currency::Currency;
use crate::file::{FileRef, ImageRef};
use crate::ids::FileId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Serialized rich-text markup produced by the description editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub String);

impl RichText {
    /// Wrap serialized markup
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// Raw markup
    #[must_use]
    pub fn as_markup(&self) -> &str {
        &self.0
    }

    /// Text content with tags removed and `&nbsp;` collapsed to spaces
    #[must_use]
    pub fn plain_text(&self) -> String {
        MARKUP_TAG.replace_all(&self.0, "").replace("&nbsp;", " ")
    }

    /// True when there is no visible text, e.g. an empty editor's `<p></p>`
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RichText {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The unsaved product held while the sheet is open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDraft {
    pub title: String,
    pub subtitle: String,
    pub description: RichText,
    /// Price as typed; only meaningful when `is_paid`
    pub price: String,
    pub currency: Currency,
    pub is_paid: bool,
    pub cover_image: Option<ImageRef>,
    #[serde(deserialize_with = "unique_files")]
    product_files: Vec<FileRef>,
}

/// Insert or replace by id, keeping upload order
fn attach_unique(files: &mut Vec<FileRef>, file: FileRef) {
    match files.iter_mut().find(|f| f.id == file.id) {
        Some(existing) => *existing = file,
        None => files.push(file),
    }
}

/// Stored file lists go through the same replace-in-place rule as uploads
fn unique_files<'de, D>(deserializer: D) -> Result<Vec<FileRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<FileRef>::deserialize(deserializer)?;
    let mut files = Vec::with_capacity(raw.len());
    for file in raw {
        attach_unique(&mut files, file);
    }
    Ok(files)
}

impl ProductDraft {
    /// Draft with every field empty and the product marked free
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            description: RichText::default(),
            price: String::new(),
            currency: Currency::Usd,
            is_paid: false,
            cover_image: None,
            product_files: Vec::new(),
        }
    }

    /// Attached files in upload order
    #[inline]
    #[must_use]
    pub fn product_files(&self) -> &[FileRef] {
        &self.product_files
    }

    /// Attach a file
    ///
    /// A file whose id is already attached replaces that entry in place, so
    /// ids stay unique within the draft.
    pub fn attach_file(&mut self, file: FileRef) {
        attach_unique(&mut self.product_files, file);
    }

    /// Remove a file by id; returns the removed file
    pub fn remove_file(&mut self, id: FileId) -> Option<FileRef> {
        let pos = self.product_files.iter().position(|f| f.id == id)?;
        Some(self.product_files.remove(pos))
    }

    /// With title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With subtitle
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// With description markup
    #[must_use]
    pub fn with_description(mut self, description: impl Into<RichText>) -> Self {
        self.description = description.into();
        self
    }

    /// Paid product at the given price
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.is_paid = true;
        self.price = price.into();
        self
    }

    /// Free product; the price field is kept but ignored
    #[must_use]
    pub fn free(mut self) -> Self {
        self.is_paid = false;
        self
    }

    /// With cover image
    #[must_use]
    pub fn with_cover_image(mut self, image: ImageRef) -> Self {
        self.cover_image = Some(image);
        self
    }

    /// With currency
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for ProductDraft {
    /// The sheet opens pre-filled with a sample paid product
    fn default() -> Self {
        Self {
            title: "Supply".to_string(),
            subtitle: "Lemonsqueezy - Template".to_string(),
            description: RichText::default(),
            price: "0.00".to_string(),
            currency: Currency::Usd,
            is_paid: true,
            cover_image: None,
            product_files: Vec::new(),
        }
    }
}
