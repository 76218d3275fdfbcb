//! # Bill Tracker Client Core
//!
//! Client-side lifecycle logic for expense-report bills: listing and
//! ordering a user's bills, validating and uploading a proof file, and
//! assembling/submitting a new bill record to the remote store.
//!
//! Rendering, routing tables and the remote persistence implementation live
//! in the outer application; this crate only talks to them through the
//! [`store::BillStore`], [`navigation::Navigator`] and
//! [`navigation::BillPreview`] traits, and reads the authenticated user
//! through [`session::SessionReader`].

/// Domain services: bill listing and the new-bill form state machine
pub mod domain;
/// Unified error types and result handling
pub mod errors;
/// View-switching and preview contracts exposed by the outer application
pub mod navigation;
/// Reader for the locally persisted user session
pub mod session;
/// Storage abstraction for the remote bill store
pub mod store;

#[cfg(test)]
pub mod test_utils;

pub use errors::{ClientError, Result, StoreError};
