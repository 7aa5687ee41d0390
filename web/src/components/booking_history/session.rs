use shared_types::BookingRecord;

/// State owned by one open booking-history dialog: the held collection, the
/// loading flag, and the last fetch error. Fetches are keyed by a
/// monotonically increasing request id so a slow refresh that resolves late
/// can never overwrite a newer result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySession {
    records: Vec<BookingRecord>,
    is_loading: bool,
    error: Option<String>,
    next_request: u64,
    in_flight: Option<u64>,
}

impl HistorySession {
    /// Marks a fetch as in flight and returns its request id.
    pub fn begin_fetch(&mut self) -> u64 {
        self.next_request += 1;
        self.in_flight = Some(self.next_request);
        self.is_loading = true;
        self.next_request
    }

    /// Commits a finished fetch. Returns `false` when the response belongs
    /// to a superseded request and was discarded. On success the collection
    /// is replaced wholesale; on failure the previously held records stay
    /// untouched and the error becomes visible to the user.
    pub fn commit(&mut self, request: u64, result: Result<Vec<BookingRecord>, String>) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;
        self.is_loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::BookingStatus;

    fn record(id: &str) -> BookingRecord {
        BookingRecord {
            id: id.to_string(),
            name: "Anne Reyes".to_string(),
            email: "anne@example.com".to_string(),
            contact_number: "0977-334-4200".to_string(),
            preferred_date: "2024-06-14".to_string(),
            preferred_time: "2:30 PM".to_string(),
            status: BookingStatus::Completed,
            updated_at: "2024-06-15T08:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn loading_flag_tracks_the_fetch_lifecycle() {
        let mut session = HistorySession::default();
        assert!(!session.is_loading());

        let request = session.begin_fetch();
        assert!(session.is_loading());

        assert!(session.commit(request, Ok(vec![record("b1")])));
        assert!(!session.is_loading());
        assert_eq!(session.records().len(), 1);
    }

    #[test]
    fn loading_flag_clears_on_failure_too() {
        let mut session = HistorySession::default();
        let request = session.begin_fetch();
        assert!(session.commit(request, Err("network down".to_string())));
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("network down"));
    }

    #[test]
    fn failed_refresh_keeps_previous_records() {
        let mut session = HistorySession::default();
        let request = session.begin_fetch();
        session.commit(request, Ok(vec![record("x"), record("y")]));

        let request = session.begin_fetch();
        session.commit(request, Err("store unreachable".to_string()));

        let ids: Vec<&str> = session.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);
        assert!(session.error().is_some());
    }

    #[test]
    fn successful_fetch_clears_a_stale_error() {
        let mut session = HistorySession::default();
        let request = session.begin_fetch();
        session.commit(request, Err("store unreachable".to_string()));

        let request = session.begin_fetch();
        session.commit(request, Ok(vec![record("b1")]));
        assert_eq!(session.error(), None);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut session = HistorySession::default();
        let first = session.begin_fetch();
        let second = session.begin_fetch();

        // the first request resolves after the refresh was issued
        assert!(!session.commit(first, Ok(vec![record("stale")])));
        assert!(session.records().is_empty());
        // still waiting on the newer request
        assert!(session.is_loading());

        assert!(session.commit(second, Ok(vec![record("fresh")])));
        assert!(!session.is_loading());
        assert_eq!(session.records()[0].id, "fresh");
    }
}
