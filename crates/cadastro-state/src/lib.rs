#![deny(missing_docs)]

//! # cadastro-state — Session and Submission State
//!
//! Two state holders sit between the pure types of `cadastro-core` and the
//! rendering surface:
//!
//! - [`FormSession`] owns the mutable per-keystroke field state as a plain
//!   value, updated through explicit setters. The rendering surface
//!   subscribes to changes through a unidirectional callback — there is no
//!   ambient UI state.
//! - [`Submission`] encodes one submission attempt as a typestate machine,
//!   `IDLE → PENDING → {SUCCEEDED, FAILED}`. Resolving consumes the
//!   pending value, so a second resolution of the same attempt is a
//!   compile error. Both terminal states are final; a new submit action
//!   starts a fresh, unrelated machine.

pub mod session;
pub mod submission;

pub use session::FormSession;
pub use submission::{
    AttemptId, AttemptRecord, Failed, Idle, Pending, Resolved, Submission, SubmissionState,
    Succeeded,
};
