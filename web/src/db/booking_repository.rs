#[cfg(feature = "ssr")]
use shared_types::{BookingRecord, BookingStatus};
#[cfg(feature = "ssr")]
use sqlx::Row;

/// Failures surfaced by the booking history read path.
#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("bookings query failed: {0}")]
    Db(#[from] sqlx::Error),
    #[error("unknown booking status in bookings table: {0}")]
    UnknownStatus(String),
}

/// Reads every booking that reached a terminal status, newest update first.
/// The status set is fixed; active bookings never leave the management flow.
#[cfg(feature = "ssr")]
pub async fn get_booking_history() -> Result<Vec<BookingRecord>, FetchError> {
    let pool = crate::db::pool::get_pool();

    let statuses: Vec<String> = BookingStatus::HISTORY
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();

    let rows = sqlx::query(
        "SELECT id::text AS id, name, email, contact_number,
                preferred_date, preferred_time, status, updated_at
         FROM bookings
         WHERE status = ANY($1)
         ORDER BY updated_at DESC",
    )
    .bind(&statuses)
    .fetch_all(pool)
    .await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let status: String = row.try_get("status")?;
        let status = BookingStatus::parse(&status).ok_or(FetchError::UnknownStatus(status))?;
        let preferred_date: chrono::NaiveDate = row.try_get("preferred_date")?;
        let updated_at: chrono::DateTime<chrono::Utc> = row.try_get("updated_at")?;

        records.push(BookingRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            contact_number: row.try_get("contact_number")?,
            preferred_date: preferred_date.format("%Y-%m-%d").to_string(),
            preferred_time: row.try_get("preferred_time")?,
            status,
            updated_at: updated_at.to_rfc3339(),
        });
    }

    Ok(records)
}
