//! Domain models around the new-bill form and the list view.

use serde::Serialize;

use shared::Bill;

use crate::errors::ClientError;

/// VAT percentage applied when the form leaves the field blank or
/// unparsable.
pub const DEFAULT_PCT: i64 = 20;

/// Raw values read from the new-bill form, exactly as the user typed them.
/// Parsing happens at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDraft {
    pub bill_type: String,
    pub name: String,
    pub amount: String,
    /// ISO-8601 date from the date picker, kept raw
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl BillDraft {
    /// Parse the amount field as an integer.
    pub fn parse_amount(&self) -> Result<i64, ClientError> {
        self.amount
            .trim()
            .parse()
            .map_err(|_| ClientError::InvalidAmount(self.amount.clone()))
    }

    /// Parse the VAT percentage, defaulting to [`DEFAULT_PCT`] when the
    /// field is empty or non-numeric.
    pub fn pct_or_default(&self) -> i64 {
        self.pct.trim().parse().unwrap_or(DEFAULT_PCT)
    }
}

/// A bill prepared for the list view: the raw record plus its formatted date
/// and human status label.
///
/// Sorting always uses `bill.date`; the formatted fields are display-only
/// derivatives and are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayedBill {
    pub bill: Bill,
    pub formatted_date: String,
    pub status_label: String,
}
