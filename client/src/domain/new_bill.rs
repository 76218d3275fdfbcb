//! New-bill form: proof file validation/upload and final submission.

use std::sync::Arc;

use shared::{Bill, BillStatus};
use tracing::{debug, error, info, warn};

use crate::errors::{ClientError, Result, StoreError};
use crate::navigation::{Navigator, RoutePath};
use crate::session::SessionReader;
use crate::store::{BillStore, FileUpload};

use super::models::BillDraft;

/// File extensions accepted as proof of expense (exact, case-sensitive
/// match).
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A file selected in the form's file input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

/// The form's file input: the path-like value shown to the user plus the
/// selected file itself. The core clears `value` when it rejects a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    pub value: String,
    pub selected: Option<SelectedFile>,
}

/// Attachment lifecycle of the form.
///
/// `file_url`, `file_name` and `bill_id` only ever exist together, inside
/// `Attached`; they are set exactly once per successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentState {
    /// No proof file uploaded yet
    Empty,
    /// An upload is in flight; new selections are rejected until it settles
    Uploading,
    Attached {
        file_url: String,
        file_name: String,
        bill_id: String,
    },
}

/// Outcome of a form submission. Navigation back to the bills view has
/// already happened by the time this is returned, whatever `store_result`
/// says; the caller decides whether to surface a persistence failure.
#[derive(Debug)]
pub struct SubmitOutcome {
    /// The bill as assembled client-side
    pub bill: Bill,
    /// The store's verdict on the update call
    pub store_result: std::result::Result<(), StoreError>,
}

/// State machine behind the new-bill form.
pub struct NewBillForm {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
    session: SessionReader,
    attachment: AttachmentState,
}

impl NewBillForm {
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        navigator: Arc<dyn Navigator>,
        session: SessionReader,
    ) -> Self {
        Self {
            store,
            navigator,
            session,
            attachment: AttachmentState::Empty,
        }
    }

    /// Current attachment state of the form.
    pub fn attachment(&self) -> &AttachmentState {
        &self.attachment
    }

    /// Validate the file selected in `input` and upload it right away,
    /// without waiting for form submission.
    ///
    /// On rejection the input value is cleared and a previously accepted
    /// attachment is kept. On upload failure the previous attachment state
    /// is restored and the store error is returned; there is no retry.
    /// While an upload is in flight any new selection is rejected with
    /// [`ClientError::UploadInProgress`].
    pub async fn handle_change_file(&mut self, input: &mut FileInput) -> Result<()> {
        let user = self.session.current_user()?;

        if self.attachment == AttachmentState::Uploading {
            warn!("Rejecting file selection: an upload is already in progress");
            return Err(ClientError::UploadInProgress);
        }

        let Some(selected) = input.selected.clone() else {
            return Err(ClientError::NoFileSelected);
        };

        let file_name = file_name_from_value(&input.value);
        let extension = file_name.rsplit('.').next().unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&extension) {
            warn!(
                "Rejected proof file {:?}: extension {:?} is not one of {:?}",
                file_name, extension, ALLOWED_EXTENSIONS
            );
            input.value.clear();
            return Err(ClientError::UnsupportedFileType {
                extension: extension.to_string(),
            });
        }

        let Some(store) = self.store.clone() else {
            warn!("No store configured, skipping upload of {:?}", file_name);
            return Ok(());
        };

        let previous = std::mem::replace(&mut self.attachment, AttachmentState::Uploading);
        info!("Uploading proof file {:?} for {}", file_name, user.email);

        let upload = FileUpload {
            file_name: file_name.clone(),
            content: selected.content,
            email: user.email,
        };
        match store.create(upload).await {
            Ok(receipt) => {
                info!(
                    "Stored proof file at {} (key {})",
                    receipt.file_url, receipt.key
                );
                self.attachment = AttachmentState::Attached {
                    file_url: receipt.file_url,
                    file_name,
                    bill_id: receipt.key,
                };
                Ok(())
            }
            Err(e) => {
                error!("Proof file upload failed: {}", e);
                self.attachment = previous;
                Err(e.into())
            }
        }
    }

    /// Assemble a bill from the draft and submit it.
    ///
    /// Navigation to the bills view fires exactly once, whether or not the
    /// store accepted the update: the user goes back to the list without
    /// waiting on network confirmation. Persistence failures come back in
    /// the outcome instead of being swallowed.
    pub async fn handle_submit(&mut self, draft: &BillDraft) -> Result<SubmitOutcome> {
        let user = self.session.current_user()?;
        let amount = draft.parse_amount()?;

        let (file_url, file_name) = match &self.attachment {
            AttachmentState::Attached {
                file_url,
                file_name,
                ..
            } => (Some(file_url.clone()), Some(file_name.clone())),
            _ => (None, None),
        };

        let bill = Bill {
            id: None,
            email: user.email,
            bill_type: draft.bill_type.clone(),
            name: draft.name.clone(),
            amount,
            date: draft.date.clone(),
            vat: draft.vat.clone(),
            pct: draft.pct_or_default(),
            commentary: draft.commentary.clone(),
            file_url,
            file_name,
            status: BillStatus::Pending,
        };

        let store_result = self.update_bill(&bill).await;
        self.navigator.navigate(RoutePath::Bills);

        Ok(SubmitOutcome { bill, store_result })
    }

    /// Persist the assembled bill, targeting the resource created by the
    /// file upload when one exists. Does nothing when no store client is
    /// configured. Failures are logged and returned; there is no retry and
    /// no navigation here (the single navigation lives in `handle_submit`).
    pub async fn update_bill(&self, bill: &Bill) -> std::result::Result<(), StoreError> {
        let Some(store) = &self.store else {
            debug!("No store configured, bill not persisted");
            return Ok(());
        };

        let selector = match &self.attachment {
            AttachmentState::Attached { bill_id, .. } => Some(bill_id.as_str()),
            _ => None,
        };

        let data = serde_json::to_value(bill)
            .map_err(|e| StoreError::Request(format!("could not serialize bill: {e}")))?;

        match store.update(data, selector).await {
            Ok(stored) => {
                info!("Bill update accepted by the store (id {:?})", stored.id);
                Ok(())
            }
            Err(e) => {
                error!("Bill update failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Last path segment of a file input value, e.g. `C:\fakepath\photo.png`
/// becomes `photo.png`.
fn file_name_from_value(value: &str) -> String {
    value
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .to_string()
}
