//! Product sheet host
//!
//! Owns the state and presence of one open sheet and talks to the host's
//! collaborators: the save handler, the file picker, the close callback and
//! optionally a rich-text engine.

use crate::affordance::Affordances;
use crate::command::SheetCommand;
use crate::config::SheetConfig;
use crate::editor::{FormattingEngine, LegacyTextEditor, Mark, Toolbar, ToolbarButton};
use crate::error::{SaveError, SheetError};
use crate::presence::Presence;
use crate::reducer::{reduce, Outcome, Reduced};
use crate::state::SheetState;
use crate::upload::{attach_command, UploadTarget};
use chrono::{DateTime, Utc};
use listing_draft::{FileSelection, OrderBump, ProductDraft, UploadError, UploadKind};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

/// Everything handed to the host on save
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingSubmission {
    /// Main product
    pub draft: ProductDraft,
    /// Order bumps in display order, including disabled ones
    pub order_bumps: Vec<OrderBump>,
}

/// Acknowledgement returned by the host after saving
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    /// Host-assigned listing identifier
    pub listing_id: String,
    /// When the host stored the listing
    pub saved_at: DateTime<Utc>,
}

impl SaveReceipt {
    /// Receipt stamped now
    pub fn new(listing_id: impl Into<String>) -> Self {
        Self {
            listing_id: listing_id.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Host-supplied persistence
#[async_trait::async_trait]
pub trait SaveHandler: Send + Sync {
    /// Persist a complete submission
    async fn save(&self, submission: &ListingSubmission) -> Result<SaveReceipt, SaveError>;
}

/// Host-supplied file picker
#[async_trait::async_trait]
pub trait FilePicker: Send + Sync {
    /// Let the user choose a file; `Ok(None)` when they cancel
    async fn pick(&self, kind: UploadKind) -> Result<Option<FileSelection>, UploadError>;
}

type CloseCallback = Box<dyn FnMut() + Send>;

/// One open product sheet
pub struct ProductSheet {
    config: SheetConfig,
    state: SheetState,
    presence: Presence,
    saver: Arc<dyn SaveHandler>,
    picker: Option<Arc<dyn FilePicker>>,
    engine: Option<Box<dyn FormattingEngine>>,
    on_close: Option<CloseCallback>,
}

impl std::fmt::Debug for ProductSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductSheet")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("presence", &self.presence)
            .field("has_picker", &self.picker.is_some())
            .field("has_engine", &self.engine.is_some())
            .finish_non_exhaustive()
    }
}

impl ProductSheet {
    /// Create a sheet over a draft
    ///
    /// With `show_legacy_toolbar` the built-in plain-text engine is installed,
    /// seeded with the draft's description.
    #[must_use]
    pub fn new(config: SheetConfig, draft: ProductDraft, saver: Arc<dyn SaveHandler>) -> Self {
        let engine: Option<Box<dyn FormattingEngine>> = if config.show_legacy_toolbar {
            Some(Box::new(LegacyTextEditor::new(draft.description.as_markup())))
        } else {
            None
        };

        Self {
            presence: Presence::from_config(&config),
            state: SheetState::new(draft),
            config,
            saver,
            picker: None,
            engine,
            on_close: None,
        }
    }

    /// With a host file picker
    #[must_use]
    pub fn with_picker(mut self, picker: Arc<dyn FilePicker>) -> Self {
        self.picker = Some(picker);
        self
    }

    /// With a host rich-text engine, replacing the legacy one if installed
    ///
    /// The engine is loaded with the draft's current description.
    #[must_use]
    pub fn with_engine(mut self, mut engine: Box<dyn FormattingEngine>) -> Self {
        engine.load(self.state.draft().description.as_markup());
        self.engine = Some(engine);
        self
    }

    /// With the host's close callback
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &SheetState {
        &self.state
    }

    /// Current presence
    #[inline]
    #[must_use]
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Gated affordances for the current state
    #[must_use]
    pub fn affordances(&self) -> Affordances {
        Affordances::of(&self.state, &self.config)
    }

    /// Run one command through the reducer
    ///
    /// An applied `SetDescription` is loaded into the rich-text engine so the
    /// next toolbar action formats what the user typed.
    pub fn dispatch(&mut self, command: SheetCommand) -> Outcome {
        let typed = matches!(command, SheetCommand::SetDescription(_));
        let outcome = self.apply(command);

        if typed && outcome.is_applied() {
            if let Some(engine) = self.engine.as_mut() {
                engine.load(self.state.draft().description.as_markup());
            }
        }
        outcome
    }

    fn apply(&mut self, command: SheetCommand) -> Outcome {
        let name = command.name();
        let state = std::mem::take(&mut self.state);
        let Reduced { state, outcome } = reduce(state, command, &self.config);
        self.state = state;

        match &outcome {
            Outcome::Applied => tracing::debug!("{} applied, order bumps: {:?}", name, self.state.phase()),
            Outcome::Rejected(reason) => tracing::info!("{} rejected: {}", name, reason),
        }
        outcome
    }

    /// Store an already-picked file
    ///
    /// # Errors
    /// `SheetError::Upload` when the slot does not accept the file,
    /// `SheetError::UnknownBump` when the target bump is gone
    pub fn attach(&mut self, target: UploadTarget, selection: FileSelection) -> Result<Outcome, SheetError> {
        if let Some(id) = target.bump() {
            if self.state.order_bump(id).is_none() {
                return Err(SheetError::UnknownBump(id));
            }
        }

        let command = attach_command(target, selection, &self.config).map_err(|e| {
            tracing::warn!("upload to {:?} rejected: {}", target, e);
            e
        })?;
        Ok(self.dispatch(command))
    }

    /// Ask the host picker for a file and store it
    ///
    /// Returns `Ok(None)` when the user cancels the picker.
    ///
    /// # Errors
    /// `SheetError::NoFilePicker` without a picker, otherwise as [`Self::attach`]
    /// or a picker failure
    pub async fn upload(&mut self, target: UploadTarget) -> Result<Option<Outcome>, SheetError> {
        let picker = self.picker.clone().ok_or(SheetError::NoFilePicker)?;
        let Some(selection) = picker.pick(target.kind()).await? else {
            tracing::debug!("upload to {:?} cancelled", target);
            return Ok(None);
        };
        self.attach(target, selection).map(Some)
    }

    /// Toolbar buttons, if an engine is installed
    #[must_use]
    pub fn toolbar(&self) -> Option<Vec<ToolbarButton>> {
        self.engine.as_deref().map(Toolbar::buttons)
    }

    /// Select a character range of the description
    ///
    /// Returns `false` when no rich-text engine is installed.
    pub fn select(&mut self, range: Range<usize>) -> bool {
        match self.engine.as_mut() {
            Some(engine) => {
                engine.select(range);
                true
            }
            None => {
                tracing::warn!("select {:?} ignored: no rich-text engine", range);
                false
            }
        }
    }

    /// Toggle a mark and sync the serialized description into the draft
    pub fn format(&mut self, mark: Mark) -> Option<Outcome> {
        let Some(engine) = self.engine.as_mut() else {
            tracing::warn!("format {:?} ignored: no rich-text engine", mark);
            return None;
        };
        engine.toggle(mark);
        let markup = engine.serialize();
        Some(self.apply(SheetCommand::SetDescription(markup)))
    }

    /// React to the host's open flag
    pub fn set_open(&mut self, open: bool, now: Instant) {
        self.presence = self.presence.set_open(open, now);
    }

    /// Advance presence timers
    pub fn tick(&mut self, now: Instant) {
        self.presence = self.presence.advance(now);
    }

    /// Ask the host to close the sheet
    pub fn close(&mut self) {
        match self.on_close.as_mut() {
            Some(callback) => callback(),
            None => tracing::debug!("close requested without a close callback"),
        }
    }

    /// Validate and hand the listing to the host's save handler
    ///
    /// # Errors
    /// `SheetError::Incomplete` when the main product or any order bump is
    /// incomplete (the handler is not called), `SheetError::Save` when the
    /// handler fails
    pub async fn save(&self) -> Result<SaveReceipt, SheetError> {
        let evaluator = self.config.evaluator();
        evaluator.check_main(self.state.draft())?;
        for bump in self.state.order_bumps() {
            evaluator.check_bump(bump)?;
        }

        let submission = ListingSubmission {
            draft: self.state.draft().clone(),
            order_bumps: self.state.order_bumps().to_vec(),
        };

        match self.saver.save(&submission).await {
            Ok(receipt) => {
                tracing::info!(
                    "Saved listing {} with {} order bumps",
                    receipt.listing_id,
                    submission.order_bumps.len()
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::error!("Save failed: {}", e);
                Err(e.into())
            }
        }
    }
}
