//! Test doubles and fixtures shared by the domain service tests.
//!
//! The in-memory store records every call it receives and can be programmed
//! to fail, so tests can assert both what the core sent and how it reacts
//! to store failures. Session fixtures are backed by `tempfile` directories
//! that clean themselves up even when a test panics.

use std::fs;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;

use shared::{Bill, BillStatus, SessionUser, UploadReceipt};

use crate::errors::StoreError;
use crate::navigation::{BillPreview, Navigator, RoutePath};
use crate::session::SessionReader;
use crate::store::{BillStore, FileUpload};

/// Programmable in-memory bill store.
pub struct MemoryBillStore {
    pub bills: Mutex<Vec<Bill>>,
    /// Receipt returned by `create` when it succeeds
    pub receipt: UploadReceipt,
    pub list_failure: Mutex<Option<StoreError>>,
    pub create_failure: Mutex<Option<StoreError>>,
    pub update_failure: Mutex<Option<StoreError>>,
    /// Every payload `create` received
    pub create_calls: Mutex<Vec<FileUpload>>,
    /// Every (data, selector) pair `update` received
    pub update_calls: Mutex<Vec<(serde_json::Value, Option<String>)>>,
}

impl MemoryBillStore {
    pub fn new() -> Self {
        Self {
            bills: Mutex::new(Vec::new()),
            receipt: UploadReceipt {
                file_url: "https://store.test/proof.png".to_string(),
                key: "1234".to_string(),
            },
            list_failure: Mutex::new(None),
            create_failure: Mutex::new(None),
            update_failure: Mutex::new(None),
            create_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        let store = Self::new();
        *store.bills.lock().unwrap() = bills;
        store
    }

    pub fn failing_list(err: StoreError) -> Self {
        let store = Self::new();
        *store.list_failure.lock().unwrap() = Some(err);
        store
    }
}

#[async_trait]
impl BillStore for MemoryBillStore {
    async fn list(&self) -> std::result::Result<Vec<Bill>, StoreError> {
        if let Some(e) = self.list_failure.lock().unwrap().clone() {
            return Err(e);
        }
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create(&self, upload: FileUpload) -> std::result::Result<UploadReceipt, StoreError> {
        self.create_calls.lock().unwrap().push(upload);
        if let Some(e) = self.create_failure.lock().unwrap().clone() {
            return Err(e);
        }
        Ok(self.receipt.clone())
    }

    async fn update(
        &self,
        data: serde_json::Value,
        selector: Option<&str>,
    ) -> std::result::Result<Bill, StoreError> {
        self.update_calls
            .lock()
            .unwrap()
            .push((data.clone(), selector.map(str::to_string)));
        if let Some(e) = self.update_failure.lock().unwrap().clone() {
            return Err(e);
        }
        serde_json::from_value(data)
            .map_err(|e| StoreError::Request(format!("update payload was not a bill: {e}")))
    }
}

/// Store whose create/update calls never resolve, for exercising the
/// in-flight upload guard.
pub struct StalledBillStore;

#[async_trait]
impl BillStore for StalledBillStore {
    async fn list(&self) -> std::result::Result<Vec<Bill>, StoreError> {
        Ok(Vec::new())
    }

    async fn create(&self, _upload: FileUpload) -> std::result::Result<UploadReceipt, StoreError> {
        std::future::pending().await
    }

    async fn update(
        &self,
        _data: serde_json::Value,
        _selector: Option<&str>,
    ) -> std::result::Result<Bill, StoreError> {
        std::future::pending().await
    }
}

/// Navigator that records every route it was asked to switch to.
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<RoutePath>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: RoutePath) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Preview surface that records every file URL it was asked to open.
pub struct RecordingPreview {
    pub opened: Mutex<Vec<String>>,
}

impl RecordingPreview {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
        }
    }
}

impl BillPreview for RecordingPreview {
    fn open(&self, file_url: &str) {
        self.opened.lock().unwrap().push(file_url.to_string());
    }
}

/// Session directory fixture. The temp dir is kept alive so the record
/// survives for the duration of the test and is removed afterwards.
pub struct SessionFixture {
    pub reader: SessionReader,
    _temp_dir: TempDir,
}

/// Session fixture with a persisted employee record.
pub fn employee_session(email: &str) -> Result<SessionFixture> {
    let temp_dir = TempDir::new()?;
    let reader = SessionReader::new(temp_dir.path());
    let user = SessionUser {
        role: "Employee".to_string(),
        email: email.to_string(),
    };
    fs::write(reader.user_record_path(), serde_json::to_string(&user)?)?;
    Ok(SessionFixture {
        reader,
        _temp_dir: temp_dir,
    })
}

/// Session fixture with no persisted record at all.
pub fn missing_session() -> Result<SessionFixture> {
    let temp_dir = TempDir::new()?;
    let reader = SessionReader::new(temp_dir.path());
    Ok(SessionFixture {
        reader,
        _temp_dir: temp_dir,
    })
}

/// A pending bill dated `date`, with an attached proof file.
pub fn sample_bill(date: &str) -> Bill {
    Bill {
        id: Some(format!("bill-{date}")),
        email: "employee@test.tld".to_string(),
        bill_type: "Transports".to_string(),
        name: "Train ticket".to_string(),
        amount: 100,
        date: date.to_string(),
        vat: "20".to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: Some("https://store.test/proof.png".to_string()),
        file_name: Some("proof.png".to_string()),
        status: BillStatus::Pending,
    }
}
