use leptos::prelude::*;
use thaw::*;

/// Floating "Book Now" affordance pinned to the lower-right corner.
#[component]
pub fn FloatingBookButton() -> impl IntoView {
    view! {
        <div class="floating-book-button">
            <a href="#services">
                <Button appearance=ButtonAppearance::Primary>"Book Now"</Button>
            </a>
        </div>
    }
}
