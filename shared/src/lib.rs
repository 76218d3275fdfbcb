use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of a bill. Every client-created bill starts out `Pending`;
/// the other values are assigned server-side during review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Human-readable label used by list views.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "Pending",
            BillStatus::Accepted => "Accepted",
            BillStatus::Refused => "Refused",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An expense-report bill as exchanged with the remote store.
///
/// Field names follow the store's JSON wire format (camelCase, with the
/// expense category serialized as `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Remote identifier; absent on a draft that has never been stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning user, copied from the session at creation time
    pub email: String,
    /// Expense category (e.g. "Transports", "Restaurants et bars")
    #[serde(rename = "type")]
    pub bill_type: String,
    /// Free-form expense name
    pub name: String,
    /// Amount in the account currency
    pub amount: i64,
    /// ISO-8601 date (`YYYY-MM-DD`); kept raw so lexicographic order is
    /// chronological order
    pub date: String,
    /// VAT amount as entered on the form
    pub vat: String,
    /// VAT percentage; the form defaults this to 20
    pub pct: i64,
    /// Free-form commentary
    pub commentary: String,
    /// Remote location of the uploaded proof file, set by a successful upload
    #[serde(default)]
    pub file_url: Option<String>,
    /// Original name of the uploaded proof file
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// Result of the store's create (file upload) operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    /// Remote location of the stored proof file
    pub file_url: String,
    /// Remote identifier of the bill resource created for this upload
    pub key: String,
}

/// The persisted record identifying the currently authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account role, e.g. "Employee" or "Admin" (`type` on the wire)
    #[serde(rename = "type")]
    pub role: String,
    pub email: String,
}
