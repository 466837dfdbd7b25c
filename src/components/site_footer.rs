//! Site Footer Component
//!
//! Static brand, opening hours, and contact details.

use leptos::prelude::*;

const OPENING_HOURS: &[&str] = &[
    "Monday - Friday: 6am - 8pm",
    "Saturday: 7am - 8pm",
    "Sunday: 7am - 6pm",
];

const CONTACT_LINES: &[&str] = &[
    "123 Coffee Street",
    "Brewville, CA 90210",
    "info@springcoffee.com",
    "(555) 123-4567",
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <h3>"SPRING"</h3>
                    <p>
                        "Brewing the perfect cup since 2010. Our mission is to provide the highest quality coffee experience."
                    </p>
                </div>
                <div>
                    <h3>"Hours"</h3>
                    <ul>
                        {OPENING_HOURS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <ul>
                        {CONTACT_LINES.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
            <p class="copyright">{format!("© {} Spring Coffee. All rights reserved.", year)}</p>
        </footer>
    }
}
