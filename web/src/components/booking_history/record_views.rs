use leptos::prelude::*;
use shared_types::{BookingRecord, BookingStatus};
use thaw::*;

/// Call affordance target: the contact number with every dash stripped.
pub fn tel_href(contact_number: &str) -> String {
    format!("tel:{}", contact_number.replace('-', ""))
}

fn status_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Completed => "status-badge completed",
        BookingStatus::Cancelled => "status-badge cancelled",
        BookingStatus::NoShow => "status-badge no-show",
    }
}

/// Compact rendering used on small viewports.
#[component]
pub fn MobileBookingCard(booking: BookingRecord) -> impl IntoView {
    view! {
        <div class="history-card">
            <div class="history-card-header">
                <div class="client-avatar">
                    {booking.name.chars().next().unwrap_or('?').to_uppercase().to_string()}
                </div>
                <div class="client-details">
                    <h4>{booking.name.clone()}</h4>
                    <span class=status_badge_class(booking.status)>
                        {booking.status.label()}
                    </span>
                </div>
            </div>

            <div class="history-card-body">
                <p class="history-card-line">{booking.email.clone()}</p>
                <p class="history-card-line">{booking.contact_number.clone()}</p>
                <p class="history-card-line">
                    {format!("{} at {}", booking.preferred_date, booking.preferred_time)}
                </p>
            </div>

            <a class="call-link" href=tel_href(&booking.contact_number)>
                <Button appearance=ButtonAppearance::Secondary>"Call Client"</Button>
            </a>
        </div>
    }
}

/// Tabular rendering used on wide viewports.
#[component]
pub fn BookingHistoryTable(bookings: Vec<BookingRecord>) -> impl IntoView {
    view! {
        <div class="history-table-wrapper">
            <table class="history-table">
                <thead>
                    <tr>
                        <th>"Client"</th>
                        <th>"Appointment"</th>
                        <th>"Status"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {bookings
                        .into_iter()
                        .map(|booking| {
                            view! {
                                <tr>
                                    <td>
                                        <div class="client-cell">
                                            <p class="client-name">{booking.name.clone()}</p>
                                            <p class="client-contact">{booking.email.clone()}</p>
                                            <p class="client-contact">
                                                {booking.contact_number.clone()}
                                            </p>
                                        </div>
                                    </td>
                                    <td>
                                        <p class="appointment-date">
                                            {booking.preferred_date.clone()}
                                        </p>
                                        <p class="appointment-time">
                                            {booking.preferred_time.clone()}
                                        </p>
                                    </td>
                                    <td>
                                        <span class=status_badge_class(booking.status)>
                                            {booking.status.label()}
                                        </span>
                                    </td>
                                    <td>
                                        <a
                                            class="call-link"
                                            href=tel_href(&booking.contact_number)
                                        >
                                            <Button appearance=ButtonAppearance::Secondary>
                                                "Call"
                                            </Button>
                                        </a>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tel_href_strips_every_dash() {
        assert_eq!(tel_href("0977-334-4200"), "tel:09773344200");
        assert_eq!(tel_href("09773344200"), "tel:09773344200");
        assert_eq!(tel_href("+63-977-334-4200"), "tel:+639773344200");
    }
}
