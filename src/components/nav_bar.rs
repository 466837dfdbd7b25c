use leptos::prelude::*;

/// Brand and section links, pinned to the top of the page
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <div class="brand">"SPRING"</div>
            <nav>
                <ul class="nav-links">
                    <li><a href="#">"Home"</a></li>
                    <li><a href="#menu">"Menu"</a></li>
                    <li><a href="#">"About"</a></li>
                    <li><a href="#">"Contact"</a></li>
                </ul>
            </nav>
        </header>
    }
}
