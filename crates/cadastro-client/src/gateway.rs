//! The submission gateway: the single write path for enrollment records.
//!
//! The write location is fixed — every submission replaces the same
//! document, so the store holds one student record at a time. That is the
//! designed behavior, not an oversight; there is no per-student identity
//! at this layer.

use cadastro_core::{SubmissionRecord, WriteOutcome};

use crate::config::StoreConfig;
use crate::document::DocumentClient;
use crate::error::StoreError;

/// Collection holding the enrollment record.
pub const ENROLLMENT_COLLECTION: &str = "Escola";

/// Document within the collection. Every submission overwrites it.
pub const ENROLLMENT_DOCUMENT: &str = "Aluno";

/// Gateway that writes enrollment snapshots to the fixed store location.
#[derive(Debug, Clone)]
pub struct SubmissionGateway {
    documents: DocumentClient,
}

impl SubmissionGateway {
    /// Create a gateway from store configuration.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        Ok(Self {
            documents: DocumentClient::new(config)?,
        })
    }

    /// Access the underlying document client.
    pub fn documents(&self) -> &DocumentClient {
        &self.documents
    }

    /// Submit an enrollment snapshot.
    ///
    /// Exactly one write attempt, fire-and-forget: no retry, no
    /// idempotency key, no cancellation. The structured cause of a failure
    /// is logged here; callers receive only the two-variant outcome and
    /// surface a generic dialog.
    pub async fn submit(&self, record: SubmissionRecord) -> WriteOutcome {
        match self
            .documents
            .put_document(ENROLLMENT_COLLECTION, ENROLLMENT_DOCUMENT, &record)
            .await
        {
            Ok(()) => {
                tracing::info!(
                    collection = ENROLLMENT_COLLECTION,
                    document = ENROLLMENT_DOCUMENT,
                    "enrollment document written"
                );
                WriteOutcome::Success
            }
            Err(error) => {
                tracing::warn!(
                    collection = ENROLLMENT_COLLECTION,
                    document = ENROLLMENT_DOCUMENT,
                    error = %error,
                    "enrollment write failed"
                );
                WriteOutcome::Failure {
                    cause: error.to_string(),
                }
            }
        }
    }
}
