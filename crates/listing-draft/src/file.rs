//! File and image references
//!
//! The host's file picker hands back a [`FileSelection`]; the draft only
//! keeps what it needs to display and later retrieve the file.

use crate::ids::FileId;
use serde::{Deserialize, Serialize};

/// Extensions accepted for downloadable product files
pub const PRODUCT_FILE_EXTENSIONS: [&str; 5] = ["pdf", "docx", "xls", "xlsx", "doc"];

/// A file as returned by the host's file picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    /// File name including extension
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type reported by the picker
    pub mime_type: String,
    /// Displayable or downloadable location (object URL, data URL, path)
    pub location: String,
}

impl FileSelection {
    /// Create a selection
    pub fn new(
        name: impl Into<String>,
        size: u64,
        mime_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            location: location.into(),
        }
    }

    /// Lowercased extension, if the name has one
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Reference to a file attached to the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Identity within the draft
    #[serde(default)]
    pub id: FileId,
    /// Display name
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type
    pub mime_type: String,
    /// Retrievable location
    pub location: String,
}

impl FileRef {
    /// Build a reference for a freshly selected file
    #[must_use]
    pub fn from_selection(selection: FileSelection) -> Self {
        Self {
            id: FileId::new(),
            name: selection.name,
            size: selection.size,
            mime_type: selection.mime_type,
            location: selection.location,
        }
    }

    /// Human-readable size, e.g. `1.5 KB`
    #[must_use]
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

/// Reference to a displayable image (data URL or object URL)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Wrap an image location
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Image taken from a picker selection
    #[must_use]
    pub fn from_selection(selection: FileSelection) -> Self {
        Self(selection.location)
    }

    /// Location string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What an upload slot is for; decides which files it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// Main product cover image
    CoverImage,
    /// Downloadable product file
    ProductFile,
    /// Order bump photo
    BumpPhoto,
    /// Order bump downloadable file
    BumpFile,
}

impl UploadKind {
    /// Whether this slot takes images
    #[inline]
    #[must_use]
    pub const fn is_image(self) -> bool {
        matches!(self, Self::CoverImage | Self::BumpPhoto)
    }

    /// Check a selection against the slot's accept list
    ///
    /// Image slots take any `image/*` MIME type. File slots take
    /// `.pdf .docx .xls .xlsx .doc` up to `max_file_bytes`.
    pub fn accepts(self, selection: &FileSelection, max_file_bytes: u64) -> Result<(), UploadError> {
        if self.is_image() {
            if selection.mime_type.to_ascii_lowercase().starts_with("image/") {
                return Ok(());
            }
            return Err(UploadError::UnsupportedType {
                name: selection.name.clone(),
                kind: self,
            });
        }

        let accepted = selection
            .extension()
            .is_some_and(|ext| PRODUCT_FILE_EXTENSIONS.contains(&ext.as_str()));
        if !accepted {
            return Err(UploadError::UnsupportedType {
                name: selection.name.clone(),
                kind: self,
            });
        }

        if selection.size > max_file_bytes {
            return Err(UploadError::TooLarge {
                name: selection.name.clone(),
                size: selection.size,
                limit: max_file_bytes,
            });
        }

        Ok(())
    }
}

impl std::fmt::Display for UploadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::CoverImage => "cover image",
            Self::ProductFile => "product file",
            Self::BumpPhoto => "order bump photo",
            Self::BumpFile => "order bump file",
        };
        f.write_str(label)
    }
}

/// Upload intake errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// File type not accepted by the slot
    #[error("'{name}' is not accepted as a {kind}")]
    UnsupportedType { name: String, kind: UploadKind },

    /// File exceeds the size limit
    #[error("'{name}' is {size} bytes, limit is {limit} bytes")]
    TooLarge { name: String, size: u64, limit: u64 },

    /// The host picker failed to read the file
    #[error("file picker failed: {0}")]
    Picker(String),
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with base-1024 units
///
/// Values are rounded to two decimals and trailing zeros are dropped:
/// `1536` is `1.5 KB`, `1048576` is `1 MB`. Sizes past a gigabyte stay in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn selection(name: &str, size: u64, mime: &str) -> FileSelection {
        FileSelection::new(name, size, mime, format!("blob:{name}"))
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5 GB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 * 1024), "3072 GB");
    }

    #[test]
    fn from_selection_keeps_metadata() {
        let file = FileRef::from_selection(selection("guide.pdf", 2048, "application/pdf"));
        assert_eq!(file.name, "guide.pdf");
        assert_eq!(file.size, 2048);
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.location, "blob:guide.pdf");
        assert_eq!(file.display_size(), "2 KB");
    }

    #[test]
    fn image_slots_accept_images_only() {
        let png = selection("cover.png", 10, "image/png");
        let pdf = selection("cover.pdf", 10, "application/pdf");

        assert!(UploadKind::CoverImage.accepts(&png, 0).is_ok());
        assert!(UploadKind::BumpPhoto.accepts(&png, 0).is_ok());
        assert!(matches!(
            UploadKind::CoverImage.accepts(&pdf, 0),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn file_slots_check_extension_and_size() {
        let limit = 50 * 1024 * 1024;
        let doc = selection("Report.DOCX", 1000, "application/octet-stream");
        let exe = selection("setup.exe", 1000, "application/octet-stream");
        let huge = selection("big.pdf", limit + 1, "application/pdf");
        let bare = selection("pdf", 10, "application/pdf");

        assert!(UploadKind::ProductFile.accepts(&doc, limit).is_ok());
        assert!(UploadKind::BumpFile.accepts(&doc, limit).is_ok());
        assert!(matches!(
            UploadKind::ProductFile.accepts(&exe, limit),
            Err(UploadError::UnsupportedType { .. })
        ));
        assert!(matches!(
            UploadKind::ProductFile.accepts(&huge, limit),
            Err(UploadError::TooLarge { .. })
        ));
        assert!(UploadKind::ProductFile.accepts(&bare, limit).is_err());
    }

    #[test]
    fn file_ref_id_defaults_when_missing() {
        let json = r#"{"name":"a.pdf","size":1,"mime_type":"application/pdf","location":"x"}"#;
        let file: FileRef = serde_json::from_str(json).unwrap();
        assert_eq!(file.name, "a.pdf");
    }
}
