//! Replay scripts
//!
//! A script is a starting draft plus a list of steps. Order bumps are
//! addressed by position because their ids are minted during the replay.

use listing_draft::{BumpId, FileSelection, OrderBump, ProductDraft};
use listing_sheet::{
    Affordances, BumpUpdate, ListingSubmission, Mark, ProductSheet, SaveError, SaveHandler, SaveReceipt,
    SheetCommand, SheetConfig, SheetState, UploadTarget,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A recorded sheet session
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Script {
    #[serde(default = "ProductDraft::empty")]
    pub(crate) draft: ProductDraft,
    pub(crate) steps: Vec<ScriptStep>,
}

/// One user action
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub(crate) enum ScriptStep {
    /// Any reducer command, verbatim
    Command { command: SheetCommand },
    /// Field update on the bump at `index`
    UpdateBump { index: usize, update: BumpUpdate },
    /// Remove the bump at `index`
    RemoveBump { index: usize },
    /// Store a file as if the picker returned it
    Attach { target: ScriptTarget, file: FileSelection },
    /// Select description characters `start..end` in the toolbar editor
    Select { start: usize, end: usize },
    /// Toggle a toolbar mark over the current selection
    Format { mark: Mark },
    /// Validate and save
    Save,
}

/// Upload slot with bumps addressed by position
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "target", content = "bump", rename_all = "snake_case")]
pub(crate) enum ScriptTarget {
    CoverImage,
    ProductFile,
    BumpPhoto(usize),
    BumpFile(usize),
}

/// What one step did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "detail", rename_all = "snake_case")]
pub(crate) enum StepResult {
    Applied,
    Rejected(String),
    Saved(String),
    Failed(String),
}

impl std::fmt::Display for StepResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Applied => f.write_str("applied"),
            Self::Rejected(reason) => write!(f, "rejected: {reason}"),
            Self::Saved(id) => write!(f, "saved as {id}"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Replay outcome
#[derive(Debug, Serialize)]
pub(crate) struct ReplayReport {
    pub(crate) results: Vec<StepResult>,
    pub(crate) state: SheetState,
    pub(crate) affordances: Affordances,
}

impl ReplayReport {
    pub(crate) fn generate_text(&self) -> String {
        let mut out = String::new();
        for (i, result) in self.results.iter().enumerate() {
            out.push_str(&format!("  [{}] {}\n", i + 1, result));
        }

        let draft = self.state.draft();
        out.push_str(&format!("Title: {}\n", draft.title));
        if draft.is_paid {
            out.push_str(&format!(
                "Price: {}\n",
                listing_draft::format_price(draft.currency, &draft.price)
            ));
        } else {
            out.push_str("Price: free\n");
        }
        out.push_str(&format!("Product files: {}\n", draft.product_files().len()));
        out.push_str(&format!("Order bumps: {:?}\n", self.state.phase()));
        for (i, bump) in self.state.order_bumps().iter().enumerate() {
            out.push_str(&format!(
                "  Order Bump #{}: {} ({})\n",
                i + 1,
                display_name(bump),
                if bump.enabled { "enabled" } else { "disabled" }
            ));
        }
        if let Some(hint) = self.state.notice() {
            out.push_str(&format!("Hint: {hint}\n"));
        }
        out.push_str(&format!(
            "Add Order Bump: {}\n",
            if self.affordances.add.is_visible() { "shown" } else { "hidden" }
        ));
        out
    }

    /// Whether every step took effect
    pub(crate) fn passed(&self) -> bool {
        self.results
            .iter()
            .all(|r| matches!(r, StepResult::Applied | StepResult::Saved(_)))
    }
}

fn display_name(bump: &OrderBump) -> &str {
    if bump.product_name.trim().is_empty() {
        "untitled"
    } else {
        &bump.product_name
    }
}

/// Save handler that accepts everything without storing it
#[derive(Debug, Default)]
pub(crate) struct DryRunSaver;

#[async_trait::async_trait]
impl SaveHandler for DryRunSaver {
    async fn save(&self, submission: &ListingSubmission) -> Result<SaveReceipt, SaveError> {
        tracing::debug!(
            "dry run save of '{}' with {} order bumps",
            submission.draft.title,
            submission.order_bumps.len()
        );
        Ok(SaveReceipt::new(format!("dry-run-{}", ulid::Ulid::new())))
    }
}

/// Run every step against a fresh sheet
pub(crate) async fn replay(script: Script, config: SheetConfig) -> ReplayReport {
    let mut sheet = ProductSheet::new(config, script.draft, Arc::new(DryRunSaver));
    let mut results = Vec::with_capacity(script.steps.len());

    for step in script.steps {
        let result = run_step(&mut sheet, step).await;
        tracing::debug!("step {}: {}", results.len() + 1, result);
        results.push(result);
    }

    ReplayReport {
        affordances: sheet.affordances(),
        state: sheet.state().clone(),
        results,
    }
}

const NO_TOOLBAR: &str = "no rich-text toolbar";

fn bump_id(sheet: &ProductSheet, index: usize) -> Result<BumpId, StepResult> {
    sheet
        .state()
        .order_bumps()
        .get(index)
        .map(|b| b.id)
        .ok_or_else(|| StepResult::Failed(format!("no order bump at position {}", index + 1)))
}

async fn run_step(sheet: &mut ProductSheet, step: ScriptStep) -> StepResult {
    let outcome = match step {
        ScriptStep::Command { command } => sheet.dispatch(command),
        ScriptStep::UpdateBump { index, update } => match bump_id(sheet, index) {
            Ok(id) => sheet.dispatch(SheetCommand::UpdateOrderBump { id, update }),
            Err(failed) => return failed,
        },
        ScriptStep::RemoveBump { index } => match bump_id(sheet, index) {
            Ok(id) => sheet.dispatch(SheetCommand::RemoveOrderBump(id)),
            Err(failed) => return failed,
        },
        ScriptStep::Attach { target, file } => {
            let target = match target {
                ScriptTarget::CoverImage => UploadTarget::CoverImage,
                ScriptTarget::ProductFile => UploadTarget::ProductFile,
                ScriptTarget::BumpPhoto(index) => match bump_id(sheet, index) {
                    Ok(id) => UploadTarget::BumpPhoto(id),
                    Err(failed) => return failed,
                },
                ScriptTarget::BumpFile(index) => match bump_id(sheet, index) {
                    Ok(id) => UploadTarget::BumpFile(id),
                    Err(failed) => return failed,
                },
            };
            match sheet.attach(target, file) {
                Ok(outcome) => outcome,
                Err(e) => return StepResult::Failed(e.to_string()),
            }
        }
        ScriptStep::Select { start, end } => {
            return if sheet.select(start..end) {
                StepResult::Applied
            } else {
                StepResult::Failed(NO_TOOLBAR.into())
            };
        }
        ScriptStep::Format { mark } => match sheet.format(mark) {
            Some(outcome) => outcome,
            None => return StepResult::Failed(NO_TOOLBAR.into()),
        },
        ScriptStep::Save => {
            return match sheet.save().await {
                Ok(receipt) => StepResult::Saved(receipt.listing_id),
                Err(e) => StepResult::Failed(e.to_string()),
            };
        }
    };

    match outcome {
        listing_sheet::Outcome::Applied => StepResult::Applied,
        listing_sheet::Outcome::Rejected(reason) => StepResult::Rejected(reason.to_string()),
    }
}
