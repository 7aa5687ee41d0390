use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-sections">
                <div class="footer-section">
                    <h4>"Contacts"</h4>
                    <ul>
                        <li>
                            <a href="tel:09773344200">"0977 334 4200"</a>
                        </li>
                        <li>
                            <a href="mailto:cruzskin@gmail.com">"cruzskin@gmail.com"</a>
                        </li>
                        <li>"6014 Mandaue City, Philippines"</li>
                    </ul>
                </div>

                <div class="footer-section">
                    <h4>"Services"</h4>
                    <ul>
                        <li><a href="#services">"Facials"</a></li>
                        <li><a href="#services">"Massage"</a></li>
                        <li><a href="#services">"Detox & Slimming"</a></li>
                        <li><a href="#services" class="footer-highlight">"see all"</a></li>
                    </ul>
                </div>

                <div class="footer-section">
                    <h4>"Help"</h4>
                    <ul>
                        <li><a href="#our-story">"Our Story"</a></li>
                        <li><a href="#">"Data Privacy"</a></li>
                        <li><a href="#">"FAQs"</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-social">
                <a href="https://www.facebook.com/profile.php?id=61580172268741" target="_blank" rel="noopener">
                    "Facebook"
                </a>
                <a href="#">"Instagram"</a>
                <a href="#">"YouTube"</a>
            </div>

            <p class="footer-copyright">
                {format!("© {} SkinStation. All rights reserved.", year)}
            </p>
        </footer>
    }
}
