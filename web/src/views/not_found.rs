use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a route back to the landing page
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-page">
            <div class="not-found-card">
                <p class="not-found-code">"404"</p>
                <h1>"Page Not Found"</h1>
                <p class="not-found-message">
                    "The page you're looking for doesn't exist or may have been moved."
                </p>
                <div class="not-found-actions">
                    <button
                        class="not-found-home"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                    >
                        "Go Home"
                    </button>
                    <a href="mailto:cruzskin@gmail.com" class="not-found-support">
                        "Contact Support"
                    </a>
                </div>
            </div>
        </div>
    }
}
