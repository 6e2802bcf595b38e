use std::num::ParseIntError;

use qrmark_model::{DesignContext, QrCodeItem, SemanticError, MAX_DOTS_WIDTH, MIN_DOTS_WIDTH};

use crate::spinner::SpinnerField;

/// The result of a dialog execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogResult {
    /// The dialog was dismissed without committing.
    #[default]
    Cancelled,

    /// The user confirmed and the item was updated.
    Confirmed,
}

impl DialogResult {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogResult::Confirmed)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, DialogResult::Cancelled)
    }
}

/// The host's expression-builder seam. `pick` runs a nested modal editor
/// pre-loaded with `initial` and returns the replacement expression, or
/// `None` when the user backs out.
pub trait ExpressionPicker {
    fn pick(&mut self, initial: &str, context: &DesignContext) -> Option<String>;
}

/// Commit failure: the item stays as it was and the dialog stays open.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("width {text:?} is not a number")]
    WidthNotNumeric {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Semantic(#[from] SemanticError),
}

/// Modal editor state for one open/close cycle over a [`QrCodeItem`].
///
/// All three fields are live from the moment the editor is created until it
/// closes. The item is only written in [`QrCodeEditor::confirm`]; cancelling
/// discards every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCodeEditor {
    text: String,
    dots_width: SpinnerField,
    encoding: String,
    result: Option<DialogResult>,
}

impl QrCodeEditor {
    /// Opens the editor on a snapshot of the item's current values.
    pub fn for_item(item: &QrCodeItem) -> Self {
        Self {
            text: item.text().to_string(),
            dots_width: SpinnerField::new(MIN_DOTS_WIDTH, MAX_DOTS_WIDTH, item.dots_width()),
            encoding: item.encoding().to_string(),
            result: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    pub fn set_encoding(&mut self, encoding: impl Into<String>) {
        self.encoding = encoding.into();
    }

    pub fn dots_width(&self) -> &SpinnerField {
        &self.dots_width
    }

    pub fn dots_width_mut(&mut self) -> &mut SpinnerField {
        &mut self.dots_width
    }

    pub fn is_open(&self) -> bool {
        self.result.is_none()
    }

    pub fn result(&self) -> Option<DialogResult> {
        self.result
    }

    /// Hands the text field to the host's expression builder. The nested
    /// editor is modal relative to this dialog.
    pub fn open_expression_builder(
        &mut self,
        picker: &mut dyn ExpressionPicker,
        context: &DesignContext,
    ) {
        let picked = picker.pick(&self.text, context);
        self.apply_picked_expression(picked);
    }

    /// `Some` replaces the text field when the value actually changed;
    /// `None` leaves the field exactly as it was.
    pub fn apply_picked_expression(&mut self, picked: Option<String>) {
        if let Some(result) = picked {
            if result != self.text {
                self.text = result;
            }
        }
    }

    /// Commits the field values to the item and closes the dialog.
    ///
    /// The width display is parsed first and all three writes are staged
    /// against a copy of the item, so a failed commit leaves the item
    /// untouched. On failure the error is logged and the dialog stays open
    /// with the edits still in the fields.
    pub fn confirm(&mut self, item: &mut QrCodeItem) -> Result<(), CommitError> {
        match self.try_commit(item) {
            Ok(()) => {
                tracing::debug!(item = %item.name, "editor confirmed");
                self.result = Some(DialogResult::Confirmed);
                Ok(())
            }
            Err(e) => {
                tracing::error!(item = %item.name, error = %e, "commit failed; editor stays open");
                Err(e)
            }
        }
    }

    fn try_commit(&self, item: &mut QrCodeItem) -> Result<(), CommitError> {
        let width: i32 = self
            .dots_width
            .text()
            .trim()
            .parse()
            .map_err(|source| CommitError::WidthNotNumeric {
                text: self.dots_width.text().to_string(),
                source,
            })?;

        let mut staged = item.clone();
        staged.set_text(self.text.clone())?;
        staged.set_encoding(self.encoding.clone())?;
        staged.set_dots_width(width)?;
        *item = staged;
        Ok(())
    }

    /// Closes the dialog, discarding every field edit.
    pub fn cancel(&mut self) {
        tracing::debug!("editor cancelled");
        self.result = Some(DialogResult::Cancelled);
    }
}
