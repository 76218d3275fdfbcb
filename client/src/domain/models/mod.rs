pub mod bill;

pub use bill::{BillDraft, DisplayedBill, DEFAULT_PCT};
