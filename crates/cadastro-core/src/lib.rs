#![deny(missing_docs)]

//! # cadastro-core — Foundational Types for the Cadastro Stack
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies and performs no I/O —
//! only `serde` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **The mask engine is pure.** [`apply_mask`] and [`remove_mask`] are
//!    deterministic string transforms, safe to call on every keystroke.
//!    They never fail: absent input yields an empty result, excess digits
//!    are silently dropped.
//!
//! 2. **Field state holds raw values only.** A [`FieldSet`] never stores a
//!    mask separator. The setter strips input for masked fields, so the
//!    "digits only" invariant cannot be violated from outside the crate.
//!
//! 3. **Snapshots are immutable.** A [`SubmissionRecord`] is built fresh per
//!    submit action, carries the exact field contents with no filtering or
//!    trimming, and is consumed by the write that uses it.
//!
//! 4. **Outcomes are exhaustive.** A [`WriteOutcome`] is a two-variant
//!    result. The presentation layer matches on it and renders one of two
//!    fixed dialogs; the failure cause exists for logging only.

pub mod field;
pub mod mask;
pub mod outcome;
pub mod record;

// Re-export primary types at crate root for ergonomic imports.
pub use field::{FieldSet, StudentField};
pub use mask::{apply_mask, remove_mask, MaskPattern};
pub use outcome::{Dialog, WriteOutcome};
pub use record::SubmissionRecord;
