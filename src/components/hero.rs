//! Hero Banner Component
//!
//! Looping background video with the welcome headline.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <video class="hero-video" src="/hero.mp4" autoplay=true loop=true muted=true playsinline=true></video>
            <div class="hero-overlay">
                <h1>"Welcome to Spring Coffee"</h1>
                <p class="tagline">"Brewing perfection in every cup"</p>
                // No ordering flow; the call to action just jumps to the menu
                <a class="cta-btn" href="#menu">"Order Now"</a>
            </div>
        </section>
    }
}
