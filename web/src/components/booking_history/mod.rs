pub mod filter;
pub mod record_views;
pub mod session;

pub use filter::{count_by_status, filter_records, DateFilter, FilterCriteria, StatusFilter};
pub use session::HistorySession;

use chrono::Local;
use leptos::prelude::*;
use thaw::*;

use crate::components::loading::LoadingView;
use crate::server::fetch_booking_history;
use crate::utils::viewport::use_is_mobile;
use self::record_views::{BookingHistoryTable, MobileBookingCard};

/// Dialog over past bookings: completed, cancelled, and no-show entries
/// fetched fresh each time the dialog opens. Filter criteria live for the
/// whole session and survive manual refreshes.
#[component]
pub fn BookingHistory(
    show: RwSignal<bool>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let session = RwSignal::new(HistorySession::default());

    // Filter state, reset only by remount
    let search_term = RwSignal::new(String::new());
    let filter_status = RwSignal::new("all".to_string());
    let filter_date = RwSignal::new("all".to_string());

    let is_mobile = use_is_mobile();

    let fetch_history = Action::new(move |&request: &u64| async move {
        (request, fetch_booking_history().await)
    });

    // Commit fetch results into the session; stale request ids are dropped
    Effect::new(move |_| {
        if let Some((request, result)) = fetch_history.value().get() {
            session.update(|s| {
                s.commit(
                    request,
                    result.map_err(|e| format!("Failed to load booking history: {}", e)),
                );
            });
        }
    });

    let refresh = move || {
        if let Some(request) = session.try_update(|s| s.begin_fetch()) {
            fetch_history.dispatch(request);
        }
    };

    // One fetch per hidden -> visible transition
    Effect::new(move |was_open: Option<bool>| {
        let open = show.get();
        if open && was_open != Some(true) {
            refresh();
        }
        open
    });

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria {
            search_term: search_term.get(),
            status: StatusFilter::parse(&filter_status.get()),
            date: DateFilter::parse(&filter_date.get()),
        };
        let today = Local::now().date_naive();
        session.with(|s| filter_records(s.records(), &criteria, today))
    });

    let counts = Memo::new(move |_| session.with(|s| count_by_status(s.records())));
    let is_loading = Memo::new(move |_| session.with(|s| s.is_loading()));
    let has_records = Memo::new(move |_| session.with(|s| !s.records().is_empty()));
    let error_message = Memo::new(move |_| session.with(|s| s.error().map(str::to_string)));

    view! {
        <div class=move || {
            if show.get() { "history-modal-overlay show" } else { "history-modal-overlay" }
        }>
            <div class="history-modal">
                <div class="modal-header">
                    <div>
                        <h2>"Booking History"</h2>
                        <p class="modal-subtitle">"View past bookings"</p>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close()
                        class="close-button"
                    >
                        "×"
                    </Button>
                </div>

                {move || {
                    error_message
                        .get()
                        .map(|message| {
                            view! {
                                <div class="history-error">
                                    <MessageBar intent=MessageBarIntent::Error>
                                        {message}
                                    </MessageBar>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| {
                                            session.update(|s| s.dismiss_error())
                                        }
                                    >
                                        "Dismiss"
                                    </Button>
                                </div>
                            }
                        })
                }}

                <div class="history-stats">
                    <div class="stat-card completed">
                        <p class="stat-value">{move || counts.get().completed}</p>
                        <p class="stat-label">"Completed"</p>
                    </div>
                    <div class="stat-card cancelled">
                        <p class="stat-value">{move || counts.get().cancelled}</p>
                        <p class="stat-label">"Cancelled"</p>
                    </div>
                    <div class="stat-card no-show">
                        <p class="stat-value">{move || counts.get().no_show}</p>
                        <p class="stat-label">"No Show"</p>
                    </div>
                </div>

                <div class="history-filters">
                    <Input
                        class="history-search"
                        placeholder="Search..."
                        value=search_term
                    />

                    <select
                        class="history-filter-select"
                        prop:value=move || filter_status.get()
                        on:change=move |ev| filter_status.set(event_target_value(&ev))
                    >
                        <option value="all">"All Status"</option>
                        <option value="completed">"Completed"</option>
                        <option value="cancelled">"Cancelled"</option>
                        <option value="no-show">"No Show"</option>
                    </select>

                    <select
                        class="history-filter-select"
                        prop:value=move || filter_date.get()
                        on:change=move |ev| filter_date.set(event_target_value(&ev))
                    >
                        <option value="all">"All Time"</option>
                        <option value="week">"Last 7 Days"</option>
                        <option value="month">"Last 30 Days"</option>
                    </select>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh()
                        disabled=Signal::from(is_loading)
                    >
                        "Refresh"
                    </Button>
                </div>

                <div class="history-results">
                    {move || {
                        let bookings = filtered.get();
                        if is_loading.get() && !has_records.get() {
                            view! {
                                <LoadingView message=Some(
                                    "Loading booking history...".to_string(),
                                ) />
                            }
                                .into_any()
                        } else if bookings.is_empty() {
                            view! {
                                <div class="history-empty">
                                    <p class="history-empty-title">"No booking history found"</p>
                                    <p class="history-empty-hint">
                                        "Bookings will appear here when marked as completed, cancelled, or no-show"
                                    </p>
                                </div>
                            }
                                .into_any()
                        } else if is_mobile.get() {
                            view! {
                                <div class="history-card-list">
                                    {bookings
                                        .into_iter()
                                        .map(|booking| {
                                            view! { <MobileBookingCard booking=booking/> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <BookingHistoryTable bookings=bookings/> }.into_any()
                        }
                    }}
                </div>

                <div class="modal-footer">
                    // export format not decided yet
                    <Button appearance=ButtonAppearance::Secondary disabled=true>
                        "Export History"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_close()
                    >
                        "Close"
                    </Button>
                </div>
            </div>
        </div>
    }
}
