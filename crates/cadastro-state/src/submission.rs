//! # Submission Attempt Typestate Machine
//!
//! One submission attempt walks `IDLE → PENDING → {SUCCEEDED, FAILED}`.
//! Each state is a distinct type; only valid transitions exist as methods,
//! and both transitions consume the machine. `resolve` can therefore run
//! at most once per attempt — "both branches" or "neither branch" cannot
//! be expressed.
//!
//! ```text
//! IDLE ─begin()──▶ PENDING ─resolve(outcome)──▶ SUCCEEDED
//!                      │
//!                      └────────────────────────▶ FAILED
//! ```
//!
//! Both terminal states are final. A subsequent submit action constructs a
//! fresh machine with a new [`AttemptId`], unrelated to the previous one.
//! Overlapping attempts are deliberately not coordinated: two machines can
//! be pending at once, racing against the same backend document.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cadastro_core::{Dialog, WriteOutcome};

// ── State Types ──────────────────────────────────────────────────────

/// The attempt exists but the write has not been issued.
#[derive(Debug, Clone, Copy)]
pub struct Idle;

/// The write has been issued and its outcome is awaited.
#[derive(Debug, Clone, Copy)]
pub struct Pending;

/// The write succeeded. Terminal state.
#[derive(Debug, Clone, Copy)]
pub struct Succeeded;

/// The write failed. Terminal state.
#[derive(Debug, Clone, Copy)]
pub struct Failed;

/// Marker trait for the four attempt states. Sealed — only the states
/// defined in this module implement it.
pub trait SubmissionState: private::Sealed + std::fmt::Debug {
    /// The canonical state name.
    fn name() -> &'static str;
    /// Whether this is a terminal state (no further transitions).
    fn is_terminal() -> bool {
        false
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Idle {}
    impl Sealed for super::Pending {}
    impl Sealed for super::Succeeded {}
    impl Sealed for super::Failed {}
}

impl SubmissionState for Idle {
    fn name() -> &'static str {
        "IDLE"
    }
}
impl SubmissionState for Pending {
    fn name() -> &'static str {
        "PENDING"
    }
}
impl SubmissionState for Succeeded {
    fn name() -> &'static str {
        "SUCCEEDED"
    }
    fn is_terminal() -> bool {
        true
    }
}
impl SubmissionState for Failed {
    fn name() -> &'static str {
        "FAILED"
    }
    fn is_terminal() -> bool {
        true
    }
}

// ── Attempt Identity ─────────────────────────────────────────────────

/// A unique identifier for one submission attempt, used to correlate log
/// lines across the write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(Uuid);

impl AttemptId {
    /// Create a new random attempt identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Attempt Record ───────────────────────────────────────────────────

/// A loggable snapshot of one attempt's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    /// The attempt this record describes.
    pub attempt_id: AttemptId,
    /// Canonical name of the current state.
    pub state: &'static str,
    /// When the write was issued. `None` while idle.
    pub started_at: Option<DateTime<Utc>>,
    /// When the outcome arrived. `None` until terminal.
    pub resolved_at: Option<DateTime<Utc>>,
}

// ── The Submission ───────────────────────────────────────────────────

/// One submission attempt, parameterized by its current state.
#[derive(Debug)]
pub struct Submission<S: SubmissionState> {
    id: AttemptId,
    started_at: Option<DateTime<Utc>>,
    resolved_at: Option<DateTime<Utc>>,
    outcome: Option<WriteOutcome>,
    _state: PhantomData<S>,
}

impl<S: SubmissionState> Submission<S> {
    /// The attempt identifier.
    pub fn id(&self) -> AttemptId {
        self.id
    }

    /// Canonical name of the current state.
    pub fn state_name(&self) -> &'static str {
        S::name()
    }

    /// Whether the attempt has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        S::is_terminal()
    }

    /// Snapshot the attempt for logging.
    pub fn record(&self) -> AttemptRecord {
        AttemptRecord {
            attempt_id: self.id,
            state: S::name(),
            started_at: self.started_at,
            resolved_at: self.resolved_at,
        }
    }
}

impl Submission<Idle> {
    /// Create a fresh attempt with a new identifier.
    pub fn new() -> Self {
        Self {
            id: AttemptId::new(),
            started_at: None,
            resolved_at: None,
            outcome: None,
            _state: PhantomData,
        }
    }

    /// Mark the write as issued.
    pub fn begin(self) -> Submission<Pending> {
        Submission {
            id: self.id,
            started_at: Some(Utc::now()),
            resolved_at: None,
            outcome: None,
            _state: PhantomData,
        }
    }
}

impl Default for Submission<Idle> {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission<Pending> {
    /// Apply the write outcome, consuming the pending attempt.
    pub fn resolve(self, outcome: WriteOutcome) -> Resolved {
        let resolved_at = Some(Utc::now());
        match outcome {
            WriteOutcome::Success => Resolved::Succeeded(Submission {
                id: self.id,
                started_at: self.started_at,
                resolved_at,
                outcome: Some(WriteOutcome::Success),
                _state: PhantomData,
            }),
            failure @ WriteOutcome::Failure { .. } => Resolved::Failed(Submission {
                id: self.id,
                started_at: self.started_at,
                resolved_at,
                outcome: Some(failure),
                _state: PhantomData,
            }),
        }
    }
}

impl Submission<Succeeded> {
    /// The dialog to show for a successful attempt.
    pub fn dialog(&self) -> Dialog {
        Dialog::SUCCESS
    }
}

impl Submission<Failed> {
    /// The dialog to show for a failed attempt. Generic by design — the
    /// cause is not surfaced here.
    pub fn dialog(&self) -> Dialog {
        Dialog::FAILURE
    }

    /// The diagnostic cause of the failure, for logging.
    pub fn cause(&self) -> &str {
        match &self.outcome {
            Some(WriteOutcome::Failure { cause }) => cause,
            _ => "",
        }
    }
}

/// The terminal form of an attempt.
#[derive(Debug)]
pub enum Resolved {
    /// The write succeeded.
    Succeeded(Submission<Succeeded>),
    /// The write failed.
    Failed(Submission<Failed>),
}

impl Resolved {
    /// Whether the attempt succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Resolved::Succeeded(_))
    }

    /// The dialog to show for this terminal state.
    pub fn dialog(&self) -> Dialog {
        match self {
            Resolved::Succeeded(s) => s.dialog(),
            Resolved::Failed(f) => f.dialog(),
        }
    }

    /// Snapshot the terminal attempt for logging.
    pub fn record(&self) -> AttemptRecord {
        match self {
            Resolved::Succeeded(s) => s.record(),
            Resolved::Failed(f) => f.record(),
        }
    }
}
