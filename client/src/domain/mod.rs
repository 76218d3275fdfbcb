//! Domain services for the bill lifecycle.

pub mod bills_service;
pub mod format;
pub mod models;
pub mod new_bill;

pub use bills_service::BillsService;
pub use new_bill::NewBillForm;
