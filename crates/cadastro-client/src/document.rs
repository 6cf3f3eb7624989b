//! Typed client for the store's document REST surface.
//!
//! URL pattern:
//! `{base_url}/v1/projects/{project}/databases/{database}/documents/{collection}/{document}`.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | PATCH  | `.../documents/{collection}/{document}` | Write (full replace) |
//! | GET    | `.../documents/{collection}/{document}` | Read back |
//!
//! A write carries the document body as `{"fields": {key: {"stringValue":
//! value}}}` and replaces the prior content at that path entirely.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cadastro_core::SubmissionRecord;

use crate::config::StoreConfig;
use crate::error::StoreError;

// -- Types matching the store's wire schema -----------------------------------

/// A single string field value in the store's wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    /// The field's value.
    #[serde(rename = "stringValue")]
    pub string_value: String,
}

/// A document body as written to and read from the store.
///
/// Reads also carry server metadata (name, timestamps); only `fields` is
/// of interest here, so the rest is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredDocument {
    /// The flat key/value content of the document.
    #[serde(default)]
    pub fields: BTreeMap<String, StringValue>,
}

impl StoredDocument {
    /// Build the wire body for a submission snapshot.
    pub fn from_record(record: &SubmissionRecord) -> Self {
        Self {
            fields: record
                .entries()
                .map(|(key, value)| {
                    (
                        key.to_string(),
                        StringValue {
                            string_value: value.to_string(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Look up a field value by key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.string_value.as_str())
    }
}

// -- Client -------------------------------------------------------------------

/// Client for the store's document surface.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: reqwest::Client,
    base_url: url::Url,
    project_id: String,
    database_id: String,
}

impl DocumentClient {
    /// Create a client from configuration.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
            project_id: config.project_id,
            database_id: config.database_id,
        })
    }

    fn document_url(&self, collection: &str, document: &str) -> String {
        format!(
            "{}v1/projects/{}/databases/{}/documents/{}/{}",
            self.base_url, self.project_id, self.database_id, collection, document
        )
    }

    /// Write a submission snapshot to a document, replacing its content.
    ///
    /// Calls `PATCH {base_url}/v1/.../documents/{collection}/{document}`.
    /// One attempt, no retry; whoever writes last wins at the backend.
    pub async fn put_document(
        &self,
        collection: &str,
        document: &str,
        record: &SubmissionRecord,
    ) -> Result<(), StoreError> {
        let endpoint = format!("PATCH /{collection}/{document}");
        let url = self.document_url(collection, document);
        let body = StoredDocument::from_record(record);

        let resp = self
            .http
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            return Err(StoreError::Api {
                endpoint,
                status,
                body,
            });
        }

        Ok(())
    }

    /// Read a document back.
    ///
    /// Calls `GET {base_url}/v1/.../documents/{collection}/{document}`.
    /// Returns `None` if the document does not exist.
    pub async fn get_document(
        &self,
        collection: &str,
        document: &str,
    ) -> Result<Option<StoredDocument>, StoreError> {
        let endpoint = format!("GET /{collection}/{document}");
        let url = self.document_url(collection, document);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
            return Err(StoreError::Api {
                endpoint,
                status,
                body,
            });
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| StoreError::Deserialization {
                endpoint,
                source: e,
            })
    }
}
