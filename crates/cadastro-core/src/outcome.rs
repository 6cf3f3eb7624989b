//! # Write Outcomes and Dialogs
//!
//! The result of one submission attempt, and the fixed user-facing dialog
//! text it maps to. Exactly one outcome is produced per attempt. The
//! failure cause is preserved for diagnostic logging only — the dialog
//! derivation ignores it, so the presentation layer never branches on the
//! underlying error.

/// The result of a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The document was written.
    Success,
    /// The write failed.
    Failure {
        /// Rendered description of the underlying cause. Diagnostic only;
        /// never inspected or branched on.
        cause: String,
    },
}

impl WriteOutcome {
    /// Whether this outcome is the success branch.
    pub fn is_success(&self) -> bool {
        matches!(self, WriteOutcome::Success)
    }

    /// The fixed dialog to show for this outcome.
    pub fn dialog(&self) -> Dialog {
        match self {
            WriteOutcome::Success => Dialog::SUCCESS,
            WriteOutcome::Failure { .. } => Dialog::FAILURE,
        }
    }
}

/// A title/message pair shown to the user after a submission resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialog {
    /// Dialog title.
    pub title: &'static str,
    /// Dialog body.
    pub message: &'static str,
}

impl Dialog {
    /// Shown when the enrollment document was written.
    pub const SUCCESS: Dialog = Dialog {
        title: "Sucesso",
        message: "Cadastro realizado com sucesso!",
    };

    /// Shown when the write failed, regardless of cause.
    pub const FAILURE: Dialog = Dialog {
        title: "Erro",
        message: "Erro ao realizar o cadastro.",
    };
}
