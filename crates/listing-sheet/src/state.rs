//! Sheet state snapshot
//!
//! The order bump list is only reachable through the reducer, which keeps
//! it at or under the configured limit.

use crate::affordance::Hint;
use listing_draft::{BumpId, OrderBump, ProductDraft};
use serde::Serialize;

/// Order bump feature state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "entries", rename_all = "snake_case")]
pub enum OrderBumpPhase {
    /// Feature off, no entries
    Disabled,
    /// Feature on with `n` entries, `1 <= n <= 3`
    Active(usize),
}

impl OrderBumpPhase {
    /// Number of entries
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Disabled => 0,
            Self::Active(n) => n,
        }
    }

    /// Whether the feature is on
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// Everything the sheet renders from
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SheetState {
    draft: ProductDraft,
    order_bumps: Vec<OrderBump>,
    notice: Option<Hint>,
}

impl SheetState {
    /// Fresh sheet over a draft, feature disabled
    #[inline]
    #[must_use]
    pub fn new(draft: ProductDraft) -> Self {
        Self {
            draft,
            order_bumps: Vec::new(),
            notice: None,
        }
    }

    /// Main product draft
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Order bumps in display order
    #[inline]
    #[must_use]
    pub fn order_bumps(&self) -> &[OrderBump] {
        &self.order_bumps
    }

    /// Feature state derived from the entry count
    #[inline]
    #[must_use]
    pub fn phase(&self) -> OrderBumpPhase {
        match self.order_bumps.len() {
            0 => OrderBumpPhase::Disabled,
            n => OrderBumpPhase::Active(n),
        }
    }

    /// Look up an entry
    #[must_use]
    pub fn order_bump(&self, id: BumpId) -> Option<&OrderBump> {
        self.order_bumps.iter().find(|b| b.id == id)
    }

    /// One-based display position of an entry
    #[must_use]
    pub fn display_position(&self, id: BumpId) -> Option<usize> {
        self.order_bumps.iter().position(|b| b.id == id).map(|i| i + 1)
    }

    /// Hint left by the last rejected toggle or add, cleared by the next
    /// applied command
    #[inline]
    #[must_use]
    pub fn notice(&self) -> Option<&Hint> {
        self.notice.as_ref()
    }

    /// Consume into the draft and order bumps
    #[must_use]
    pub fn into_parts(self) -> (ProductDraft, Vec<OrderBump>) {
        (self.draft, self.order_bumps)
    }

    pub(crate) fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub(crate) fn order_bumps_mut(&mut self) -> &mut Vec<OrderBump> {
        &mut self.order_bumps
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Hint>) {
        self.notice = notice;
    }
}

impl From<ProductDraft> for SheetState {
    fn from(draft: ProductDraft) -> Self {
        Self::new(draft)
    }
}
