use serde::{Deserialize, Serialize};

/// Terminal states a booking can reach. Active bookings (pending, confirmed)
/// never show up in the history view.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Completed,
    Cancelled,
    NoShow,
}

impl BookingStatus {
    pub const HISTORY: [BookingStatus; 3] = [
        BookingStatus::Completed,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::NoShow => "no-show",
        }
    }

    pub fn parse(value: &str) -> Option<BookingStatus> {
        match value {
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "no-show" => Some(BookingStatus::NoShow),
            _ => None,
        }
    }

    /// Label shown on badges and stat cards.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::NoShow => "No Show",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the bookings relation as delivered to the client. Snapshots are
/// read-only here; the booking management flow owns all writes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BookingRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub preferred_date: String,
    /// Free-form time label, e.g. "2:30 PM".
    pub preferred_time: String,
    pub status: BookingStatus,
    /// RFC 3339 timestamp; used only for server-side ordering.
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in BookingStatus::HISTORY {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("pending"), None);
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&BookingStatus::NoShow).unwrap();
        assert_eq!(json, "\"no-show\"");
    }
}
