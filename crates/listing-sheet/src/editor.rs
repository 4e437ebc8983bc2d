//! Rich-text description toolbar
//!
//! The formatting itself belongs to a host engine behind [`FormattingEngine`];
//! the sheet only queries active marks, issues toggles and reads back the
//! serialized markup. The draft's description is authoritative: the sheet
//! loads it into the engine whenever it changes from outside the toolbar. [`LegacyTextEditor`] is the built-in engine used when
//! `show_legacy_toolbar` is set: it wraps the selected text in lightweight
//! markup.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Formatting marks offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    BulletList,
    OrderedList,
}

impl Mark {
    /// Toolbar order
    pub const ALL: [Mark; 6] = [
        Mark::Bold,
        Mark::Italic,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::BulletList,
        Mark::OrderedList,
    ];

    /// Inline marks keep an on/off state; list marks only transform text
    #[inline]
    #[must_use]
    pub const fn is_inline(self) -> bool {
        matches!(self, Self::Bold | Self::Italic | Self::Underline | Self::Strikethrough)
    }
}

/// Host-provided rich-text engine
pub trait FormattingEngine: Send {
    /// Whether a mark is active at the cursor
    fn is_active(&self, mark: Mark) -> bool;

    /// Replace the document with `markup`
    ///
    /// Reloading identical markup keeps the current selection.
    fn load(&mut self, markup: &str);

    /// Select a character range
    fn select(&mut self, range: Range<usize>);

    /// Toggle a mark on the current selection
    fn toggle(&mut self, mark: Mark);

    /// Serialized document
    fn serialize(&self) -> String;
}

/// One toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolbarButton {
    /// Mark the button toggles
    pub mark: Mark,
    /// Highlighted when the mark is active at the cursor
    pub active: bool,
}

/// Toolbar derived from an engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Toolbar;

impl Toolbar {
    /// Buttons in toolbar order with their highlight state
    #[must_use]
    pub fn buttons(engine: &dyn FormattingEngine) -> Vec<ToolbarButton> {
        Mark::ALL
            .into_iter()
            .map(|mark| ToolbarButton {
                mark,
                active: engine.is_active(mark),
            })
            .collect()
    }
}

/// Plain-text engine that wraps the selection in markdown-like markup
///
/// Selection bounds are character offsets. Toggling an inline mark flips
/// its highlight even though the inserted markup is never unwrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyTextEditor {
    text: String,
    selection: Range<usize>,
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
}

impl LegacyTextEditor {
    /// Editor over existing text with an empty selection at the end
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.chars().count();
        Self {
            text,
            selection: end..end,
            ..Self::default()
        }
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current selection in characters
    #[must_use]
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Replace the text, collapsing the selection to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let end = self.text.chars().count();
        self.selection = end..end;
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn flag_mut(&mut self, mark: Mark) -> Option<&mut bool> {
        match mark {
            Mark::Bold => Some(&mut self.bold),
            Mark::Italic => Some(&mut self.italic),
            Mark::Underline => Some(&mut self.underline),
            Mark::Strikethrough => Some(&mut self.strikethrough),
            Mark::BulletList | Mark::OrderedList => None,
        }
    }
}

fn wrap(mark: Mark, selected: &str) -> String {
    match mark {
        Mark::Bold => format!("**{selected}**"),
        Mark::Italic => format!("*{selected}*"),
        Mark::Underline => format!("<u>{selected}</u>"),
        Mark::Strikethrough => format!("~~{selected}~~"),
        Mark::BulletList => format!("• {selected}"),
        Mark::OrderedList => format!("1. {selected}"),
    }
}

impl FormattingEngine for LegacyTextEditor {
    fn is_active(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::BulletList | Mark::OrderedList => false,
        }
    }

    fn load(&mut self, markup: &str) {
        if self.text != markup {
            self.set_text(markup);
        }
    }

    /// Clamped to the text
    fn select(&mut self, range: Range<usize>) {
        let len = self.text.chars().count();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.selection = start..end;
    }

    fn toggle(&mut self, mark: Mark) {
        if self.selection.is_empty() {
            return;
        }

        let start = self.byte_offset(self.selection.start);
        let end = self.byte_offset(self.selection.end);
        let formatted = wrap(mark, &self.text[start..end]);
        let formatted_chars = formatted.chars().count();
        self.text.replace_range(start..end, &formatted);

        let cursor = self.selection.start + formatted_chars;
        self.selection = cursor..cursor;

        if let Some(flag) = self.flag_mut(mark) {
            *flag = !*flag;
        }
    }

    fn serialize(&self) -> String {
        self.text.clone()
    }
}
