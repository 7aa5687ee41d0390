use chrono::{Duration, NaiveDate};
use shared_types::{BookingRecord, BookingStatus};

/// Status dimension of the history filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(BookingStatus),
}

impl StatusFilter {
    /// Parses the value of the status `<select>`; anything unrecognized
    /// (including "all") selects everything.
    pub fn parse(value: &str) -> StatusFilter {
        match BookingStatus::parse(value) {
            Some(status) => StatusFilter::Only(status),
            None => StatusFilter::All,
        }
    }
}

/// Date-range dimension of the history filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    PastWeek,
    PastMonth,
}

impl DateFilter {
    pub fn parse(value: &str) -> DateFilter {
        match value {
            "week" => DateFilter::PastWeek,
            "month" => DateFilter::PastMonth,
            _ => DateFilter::All,
        }
    }
}

/// The three independent filter dimensions a user may combine. Defaults
/// select the whole collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: StatusFilter,
    pub date: DateFilter,
}

/// Counters shown on the stat cards. Always computed over the unfiltered
/// collection, so they do not move when filters change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub completed: usize,
    pub cancelled: usize,
    pub no_show: usize,
}

/// Applies all three predicates (logical AND), preserving the fetch order.
/// Total over any input; a record with an unparseable date simply never
/// matches a bounded date window.
pub fn filter_records(
    records: &[BookingRecord],
    criteria: &FilterCriteria,
    reference: NaiveDate,
) -> Vec<BookingRecord> {
    records
        .iter()
        .filter(|record| {
            matches_search(record, &criteria.search_term)
                && matches_status(record, criteria.status)
                && matches_date(record, criteria.date, reference)
        })
        .cloned()
        .collect()
}

pub fn count_by_status(records: &[BookingRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records {
        match record.status {
            BookingStatus::Completed => counts.completed += 1,
            BookingStatus::Cancelled => counts.cancelled += 1,
            BookingStatus::NoShow => counts.no_show += 1,
        }
    }
    counts
}

fn matches_search(record: &BookingRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record.name.to_lowercase().contains(&term) || record.email.to_lowercase().contains(&term)
}

fn matches_status(record: &BookingRecord, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => record.status == status,
    }
}

fn matches_date(record: &BookingRecord, filter: DateFilter, reference: NaiveDate) -> bool {
    let window = match filter {
        DateFilter::All => return true,
        DateFilter::PastWeek => Duration::days(7),
        DateFilter::PastMonth => Duration::days(30),
    };
    match NaiveDate::parse_from_str(&record.preferred_date, "%Y-%m-%d") {
        // no upper bound: a future-dated booking still counts as recent
        Ok(date) => date >= reference - window,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str, email: &str, date: &str, status: BookingStatus) -> BookingRecord {
        BookingRecord {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            contact_number: "0977-334-4200".to_string(),
            preferred_date: date.to_string(),
            preferred_time: "2:30 PM".to_string(),
            status,
            updated_at: "2024-06-15T08:00:00+00:00".to_string(),
        }
    }

    fn sample() -> Vec<BookingRecord> {
        vec![
            record("b1", "Anne Reyes", "anne@example.com", "2024-06-14", BookingStatus::Completed),
            record("b2", "Mika Tan", "mika@example.com", "2024-06-08", BookingStatus::Cancelled),
            record("b3", "Joy Cruz", "joy@example.com", "2024-06-07", BookingStatus::NoShow),
            record("b4", "Leah Santos", "leah@example.com", "2024-05-01", BookingStatus::Completed),
        ]
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn default_criteria_return_everything_in_order() {
        let records = sample();
        let filtered = filter_records(&records, &FilterCriteria::default(), reference());
        assert_eq!(filtered, records);
    }

    #[test]
    fn filtered_result_is_an_order_preserving_subsequence() {
        let records = sample();
        let criteria = FilterCriteria {
            status: StatusFilter::Only(BookingStatus::Completed),
            ..Default::default()
        };
        let filtered = filter_records(&records, &criteria, reference());
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b4"]);
    }

    #[test]
    fn filtering_twice_with_same_criteria_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            search_term: "an".to_string(),
            date: DateFilter::PastMonth,
            ..Default::default()
        };
        let once = filter_records(&records, &criteria, reference());
        let twice = filter_records(&once, &criteria, reference());
        assert_eq!(once, twice);
    }

    #[test]
    fn counters_ignore_filter_criteria() {
        let records = sample();
        let counts = count_by_status(&records);
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.cancelled, 1);
        assert_eq!(counts.no_show, 1);

        // narrowing the visible set must not move the counters
        let criteria = FilterCriteria {
            status: StatusFilter::Only(BookingStatus::NoShow),
            ..Default::default()
        };
        let filtered = filter_records(&records, &criteria, reference());
        assert_eq!(filtered.len(), 1);
        assert_eq!(count_by_status(&records), counts);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_email() {
        let records = sample();
        let criteria = FilterCriteria {
            search_term: "ann".to_string(),
            ..Default::default()
        };
        let filtered = filter_records(&records, &criteria, reference());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Anne Reyes");

        let criteria = FilterCriteria {
            search_term: "MIKA@EXAMPLE".to_string(),
            ..Default::default()
        };
        let filtered = filter_records(&records, &criteria, reference());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b2");
    }

    #[test]
    fn week_window_includes_the_seventh_day_back() {
        let records = sample();
        let criteria = FilterCriteria {
            date: DateFilter::PastWeek,
            ..Default::default()
        };
        let filtered = filter_records(&records, &criteria, reference());
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        // 2024-06-08 is exactly seven days before the reference; 06-07 is out
        assert_eq!(ids, ["b1", "b2"]);
    }

    #[test]
    fn future_dates_pass_bounded_windows() {
        let records = vec![record(
            "b9",
            "Future",
            "future@example.com",
            "2024-07-01",
            BookingStatus::Completed,
        )];
        let criteria = FilterCriteria {
            date: DateFilter::PastWeek,
            ..Default::default()
        };
        assert_eq!(filter_records(&records, &criteria, reference()).len(), 1);
    }

    #[test]
    fn unparseable_dates_only_show_under_all_time() {
        let records = vec![record(
            "b8",
            "Broken",
            "broken@example.com",
            "sometime soon",
            BookingStatus::Completed,
        )];
        let mut criteria = FilterCriteria::default();
        assert_eq!(filter_records(&records, &criteria, reference()).len(), 1);

        criteria.date = DateFilter::PastWeek;
        assert!(filter_records(&records, &criteria, reference()).is_empty());
        criteria.date = DateFilter::PastMonth;
        assert!(filter_records(&records, &criteria, reference()).is_empty());
    }

    #[test]
    fn select_values_parse_into_filters() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
        assert_eq!(
            StatusFilter::parse("no-show"),
            StatusFilter::Only(BookingStatus::NoShow)
        );
        assert_eq!(DateFilter::parse("week"), DateFilter::PastWeek);
        assert_eq!(DateFilter::parse("month"), DateFilter::PastMonth);
        assert_eq!(DateFilter::parse("all"), DateFilter::All);
    }
}
