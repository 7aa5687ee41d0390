use leptos::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I've been a loyal SkinStation cliente since I first tried their Hair Removal services! After years of laser, I am now hairless and hair-free!",
        author: "Caitlin Anne Capas",
        avatar: "CC",
    },
    Testimonial {
        quote: "Amazing results! Dr. Olazo and her team are professional! For Tatoo removal and hair removal, this is the best clinic that I found!",
        author: "Daya Delgado",
        avatar: "DD",
    },
    Testimonial {
        quote: "Two decades of great results, my skin looks so much better! Definitely coming back!",
        author: "Bianca Tan",
        avatar: "BT",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials-section">
            <h2 class="section-title">"Read What They Loved About SkinStation"</h2>
            <div class="testimonials-grid">
                {TESTIMONIALS
                    .iter()
                    .map(|testimonial| {
                        view! {
                            <div class="testimonial-card">
                                <p class="testimonial-quote">{testimonial.quote}</p>
                                <div class="testimonial-author">
                                    <div class="testimonial-avatar">{testimonial.avatar}</div>
                                    <span>{testimonial.author}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
