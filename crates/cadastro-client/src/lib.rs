//! # cadastro-client — Typed client for the hosted document store
//!
//! Provides the submission gateway: the single outbound path from the
//! enrollment screen to the backend document store. The store is addressed
//! by a two-level path (collection + document) and a write fully replaces
//! whatever the document held before — last-write-wins, enforced by the
//! backend.
//!
//! ## Architecture
//!
//! [`DocumentClient`] speaks the store's REST surface
//! (`{base_url}/v1/projects/{project}/databases/{database}/documents/...`)
//! and reports structured [`StoreError`]s. [`SubmissionGateway`] pins the
//! fixed enrollment location (`Escola/Aluno`), performs exactly one write
//! attempt per submit, logs the structured cause, and hands callers only
//! the two-variant `WriteOutcome`. No retry, no idempotency key, no
//! cancellation; the transport timeout is whatever the client was built
//! with.

pub mod config;
pub mod document;
pub mod error;
pub mod gateway;

pub use config::StoreConfig;
pub use document::DocumentClient;
pub use error::StoreError;
pub use gateway::{SubmissionGateway, ENROLLMENT_COLLECTION, ENROLLMENT_DOCUMENT};
