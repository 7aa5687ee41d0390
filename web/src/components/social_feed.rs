use leptos::prelude::*;

const POSTS: [&str; 8] = [
    "/images/service-laser.jpg",
    "/images/clinic-interior.jpg",
    "/images/service-facial.jpg",
    "/images/service-slimming.jpg",
    "/images/service-diamond-peel.jpg",
    "/images/service-whitening.jpg",
    "/images/service-acne.jpg",
    "/images/service-antiaging.jpg",
];

#[component]
pub fn SocialFeed() -> impl IntoView {
    view! {
        <section class="social-feed-section">
            <h2 class="section-title">"Stay Connected"</h2>
            <p class="section-subtitle">
                "Follow us on social media to stay connected with our beauty community."
            </p>

            <div class="social-feed-grid">
                {POSTS
                    .iter()
                    .enumerate()
                    .map(|(index, image)| {
                        view! {
                            <a
                                class="social-feed-post"
                                href="https://www.facebook.com/profile.php?id=61580172268741"
                                target="_blank"
                                rel="noopener"
                            >
                                <img src=*image alt=format!("SkinStation post {}", index + 1)/>
                                <span class="social-feed-overlay">"@SkinStation"</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
