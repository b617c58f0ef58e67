//! Calculation session: the expression text plus what the display shows

use crate::builder::{apply, Outcome};
use crate::command::Command;
use crate::error::CalcError;

pub const DEFAULT_ERROR_MARKER: &str = "Error";

/// Owns the in-progress expression for one calculator window.
///
/// The display normally mirrors the text. After a failed evaluation the
/// text is empty and the display shows the error marker until the next
/// command that changes the text.
#[derive(Debug, Clone)]
pub struct Session {
    text: String,
    display: String,
    error_marker: String,
    last_error: Option<CalcError>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_MARKER)
    }
}

impl Session {
    pub fn new(error_marker: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            display: String::new(),
            error_marker: error_marker.into(),
            last_error: None,
        }
    }

    /// Apply one command and return the string to display.
    pub fn press(&mut self, command: Command) -> &str {
        tracing::trace!(?command, text = %self.text, "command");
        let transition = apply(&self.text, command);

        match transition.outcome {
            Outcome::Unchanged => {}
            Outcome::Edited | Outcome::Evaluated(_) => {
                self.display = transition.text.clone();
                self.last_error = None;
            }
            Outcome::Failed(e) => {
                tracing::info!(expression = %self.text, error = %e, "evaluation failed");
                self.display = self.error_marker.clone();
                self.last_error = Some(e);
            }
        }
        self.text = transition.text;

        &self.display
    }

    pub fn press_all(&mut self, commands: impl IntoIterator<Item = Command>) -> &str {
        for command in commands {
            self.press(command);
        }
        &self.display
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.last_error.is_some()
    }

    pub fn error_marker(&self) -> &str {
        &self.error_marker
    }
}
