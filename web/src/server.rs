use leptos::prelude::*;
use leptos::server;
use shared_types::BookingRecord;

#[cfg(feature = "ssr")]
use crate::db::booking_repository::get_booking_history;

/// Fetches every completed/cancelled/no-show booking, ordered by
/// `updated_at` descending. Safe to call repeatedly (manual refresh).
#[server]
pub async fn fetch_booking_history() -> Result<Vec<BookingRecord>, ServerFnError> {
    match get_booking_history().await {
        Ok(records) => Ok(records),
        Err(e) => {
            tracing::error!("failed to load booking history: {e}");
            Err(ServerFnError::new(format!(
                "Failed to load booking history: {}",
                e
            )))
        }
    }
}
