//! Upload intake
//!
//! Turns a picked file into the command that stores it, after checking it
//! against the slot's accept list.

use crate::command::{BumpUpdate, SheetCommand};
use crate::config::SheetConfig;
use listing_draft::{BumpId, FileRef, FileSelection, ImageRef, UploadError, UploadKind};
use serde::{Deserialize, Serialize};

/// Which field an upload fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target", content = "bump", rename_all = "snake_case")]
pub enum UploadTarget {
    /// Main cover image
    CoverImage,
    /// Additional product file
    ProductFile,
    /// Photo of an order bump
    BumpPhoto(BumpId),
    /// File of an order bump
    BumpFile(BumpId),
}

impl UploadTarget {
    /// Accept-list category for the target
    #[inline]
    #[must_use]
    pub const fn kind(self) -> UploadKind {
        match self {
            Self::CoverImage => UploadKind::CoverImage,
            Self::ProductFile => UploadKind::ProductFile,
            Self::BumpPhoto(_) => UploadKind::BumpPhoto,
            Self::BumpFile(_) => UploadKind::BumpFile,
        }
    }

    /// Order bump the target belongs to
    #[inline]
    #[must_use]
    pub const fn bump(self) -> Option<BumpId> {
        match self {
            Self::BumpPhoto(id) | Self::BumpFile(id) => Some(id),
            Self::CoverImage | Self::ProductFile => None,
        }
    }
}

/// Build the command that stores `selection` in `target`
///
/// # Errors
/// `UploadError` when the file is not accepted by the target slot
pub fn attach_command(
    target: UploadTarget,
    selection: FileSelection,
    config: &SheetConfig,
) -> Result<SheetCommand, UploadError> {
    target
        .kind()
        .accepts(&selection, config.max_product_file_bytes)?;

    let command = match target {
        UploadTarget::CoverImage => {
            SheetCommand::SetCoverImage(Some(ImageRef::from_selection(selection)))
        }
        UploadTarget::ProductFile => SheetCommand::AddProductFile(FileRef::from_selection(selection)),
        UploadTarget::BumpPhoto(id) => SheetCommand::UpdateOrderBump {
            id,
            update: BumpUpdate::SetPhoto(Some(ImageRef::from_selection(selection))),
        },
        UploadTarget::BumpFile(id) => SheetCommand::UpdateOrderBump {
            id,
            update: BumpUpdate::SetFile(Some(FileRef::from_selection(selection))),
        },
    };
    Ok(command)
}
