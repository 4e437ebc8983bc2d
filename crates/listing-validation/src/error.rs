//! Validation diagnostics
//!
//! Incompleteness is never fatal; it drives hint text and gates saving.

use crate::fields::{join_labels, BumpField, MainField};
use listing_draft::BumpId;

/// A draft or order bump is missing required data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIncomplete {
    /// Main product fields are missing
    #[error("main product incomplete (missing: {})", join_labels(.missing))]
    Main {
        /// Missing fields in form order
        missing: Vec<MainField>,
    },

    /// An order bump is missing fields
    #[error("order bump {id} incomplete (missing: {})", join_labels(.missing))]
    OrderBump {
        /// The incomplete entry
        id: BumpId,
        /// Missing fields in form order
        missing: Vec<BumpField>,
    },
}

impl ValidationIncomplete {
    /// Labels of the missing fields
    #[must_use]
    pub fn missing_labels(&self) -> Vec<&'static str> {
        match self {
            Self::Main { missing } => missing.iter().map(|f| f.label()).collect(),
            Self::OrderBump { missing, .. } => missing.iter().map(|f| f.label()).collect(),
        }
    }
}
