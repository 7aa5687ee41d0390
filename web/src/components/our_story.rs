use leptos::prelude::*;

#[component]
pub fn OurStory() -> impl IntoView {
    view! {
        <section class="our-story-section" id="our-story">
            <div class="our-story-image">
                <img src="/images/clinic-interior.jpg" alt="SkinStation Clinic Interior"/>
            </div>
            <div class="our-story-content">
                <h2 class="section-title">"Our Story"</h2>
                <p>
                    "SkinStation combines laser and science to give you the best results in skin and body services."
                </p>
                <p>
                    "From our first clinic in Mandaue City we have grown with one promise: every treatment is handled by trained professionals using equipment we trust on our own skin."
                </p>
            </div>
        </section>
    }
}
