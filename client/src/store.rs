//! # Store Abstraction
//!
//! This module defines the trait through which the core talks to the remote
//! bill store, so different transports (HTTP client, in-memory test double)
//! can be used interchangeably by the domain layer.

use async_trait::async_trait;

use shared::{Bill, UploadReceipt};

use crate::errors::StoreError;

/// Payload of the store's create operation: the proof file plus the owning
/// email, sent as a multipart form without an explicit content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Original file name, including its extension
    pub file_name: String,
    /// Raw file bytes
    pub content: Vec<u8>,
    /// Email of the session user the upload belongs to
    pub email: String,
}

/// Trait defining the remote persistence operations on bill resources.
///
/// All operations are asynchronous; responses may resolve in any order
/// relative to the events that triggered them, and no cancellation or
/// timeout mechanism is provided.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// List all bills belonging to the authenticated user.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Upload a proof file. Returns the stored file location and the key of
    /// the bill resource created for it.
    async fn create(&self, upload: FileUpload) -> Result<UploadReceipt, StoreError>;

    /// Update the bill resource addressed by `selector` with the serialized
    /// bill. A `None` selector targets a bill that never had a file upload.
    async fn update(
        &self,
        data: serde_json::Value,
        selector: Option<&str>,
    ) -> Result<Bill, StoreError>;
}
