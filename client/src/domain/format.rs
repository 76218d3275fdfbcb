//! Display formatting for list views.

use chrono::NaiveDate;
use tracing::warn;

/// Format a raw ISO date (`YYYY-MM-DD`) for display, e.g. `5 May 23`.
///
/// Falls back to the raw string when parsing fails; ordering always uses the
/// raw value, never the formatted one.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %y").to_string(),
        Err(e) => {
            warn!("Could not format date {:?} for display: {}", raw, e);
            raw.to_string()
        }
    }
}
