//! Bill listing and its view affordances.

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::Result;
use crate::navigation::{BillPreview, Navigator, RoutePath};
use crate::session::SessionReader;
use crate::store::BillStore;

use super::format::format_date;
use super::models::DisplayedBill;

/// Service behind the bills list view.
pub struct BillsService {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    preview: Arc<dyn BillPreview>,
    session: SessionReader,
}

impl BillsService {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        preview: Arc<dyn BillPreview>,
        session: SessionReader,
    ) -> Self {
        Self {
            store,
            navigator,
            preview,
            session,
        }
    }

    /// Fetch all bills for the session user, prepared for display and sorted
    /// most recent first.
    ///
    /// Store failures propagate unchanged so the page-level caller can
    /// surface them; nothing is swallowed at this layer. Display formatting
    /// never alters the raw date used for ordering.
    pub async fn get_bills(&self) -> Result<Vec<DisplayedBill>> {
        let user = self.session.current_user()?;
        info!("Listing bills for {}", user.email);

        let mut bills = self.store.list().await.map_err(|e| {
            error!("Failed to list bills: {}", e);
            e
        })?;

        // Raw ISO dates are the sort key
        bills.sort_by(|a, b| b.date.cmp(&a.date));

        let displayed: Vec<DisplayedBill> = bills
            .into_iter()
            .map(|bill| DisplayedBill {
                formatted_date: format_date(&bill.date),
                status_label: bill.status.label().to_string(),
                bill,
            })
            .collect();

        info!("Prepared {} bills for display", displayed.len());
        Ok(displayed)
    }

    /// Surface the proof file attached to a list row's eye icon. Never
    /// mutates a bill.
    pub fn handle_click_icon_eye(&self, file_url: &str) {
        self.preview.open(file_url);
    }

    /// Switch to the new-bill view. No data side effects.
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(RoutePath::NewBill);
    }
}
