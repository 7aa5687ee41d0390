use leptos::prelude::*;
use thaw::*;

use crate::components::booking_history::BookingHistory;
use crate::components::{FloatingBookButton, Footer, OurStory, SocialFeed, Testimonials};

struct Service {
    name: &'static str,
    description: &'static str,
    image: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        name: "Laser Hair Removal",
        description: "Long-lasting smoothness with medical-grade diode laser.",
        image: "/images/service-laser.jpg",
    },
    Service {
        name: "Signature Facial",
        description: "Deep cleansing and hydration tailored to your skin type.",
        image: "/images/service-facial.jpg",
    },
    Service {
        name: "Diamond Peel",
        description: "Gentle exfoliation that reveals brighter, even-toned skin.",
        image: "/images/service-diamond-peel.jpg",
    },
    Service {
        name: "Detox & Slimming",
        description: "Contouring treatments combined with lymphatic massage.",
        image: "/images/service-slimming.jpg",
    },
];

/// Landing page: hero, service showcase, story, testimonials, social
/// gallery, and the booking-history dialog.
#[component]
pub fn HomePage() -> impl IntoView {
    let history_open = RwSignal::new(false);

    view! {
        <div class="home-page">
            <nav class="site-nav">
                <span class="site-brand">"SkinStation"</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| history_open.set(true)
                >
                    "Booking History"
                </Button>
            </nav>

            <section class="hero-section">
                <h1>"Glow Starts Here"</h1>
                <p class="hero-subtitle">
                    "Laser, skin, and body treatments by the SkinStation team in Mandaue City."
                </p>
                <a href="#services">
                    <Button appearance=ButtonAppearance::Primary>"Explore Services"</Button>
                </a>
            </section>

            <section class="services-section" id="services">
                <h2 class="section-title">"Our Services"</h2>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="service-card">
                                    <img src=service.image alt=service.name/>
                                    <h3>{service.name}</h3>
                                    <p>{service.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <OurStory/>
            <Testimonials/>
            <SocialFeed/>
            <Footer/>

            <FloatingBookButton/>

            <BookingHistory
                show=history_open
                on_close=move || history_open.set(false)
            />
        </div>
    }
}
