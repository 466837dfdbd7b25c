//! Menu Section Component
//!
//! Heading, filter bar, and the catalog grid (or a spinner while loading).

use leptos::prelude::*;

use crate::components::{CoffeeCard, FilterBar};
use crate::context::use_catalog;

#[component]
pub fn MenuSection() -> impl IntoView {
    let catalog = use_catalog();
    let loading = {
        let catalog = catalog.clone();
        move || catalog.is_loading()
    };

    let status = {
        let catalog = catalog.clone();
        move || catalog.status().as_str()
    };

    view! {
        <section id="menu" class="menu-section" data-status=status>
            <div class="menu-heading">
                <h2>"Our Coffee Selection"</h2>
                <p>
                    "Discover our handcrafted coffee drinks made with premium beans and expert brewing techniques."
                </p>
            </div>

            <FilterBar />

            <Show
                when=move || !loading()
                fallback=|| view! { <div class="loading"><div class="spinner"></div></div> }
            >
                <div class="coffee-grid">
                    <For
                        each={
                            let catalog = catalog.clone();
                            move || catalog.displayed_items()
                        }
                        key=|coffee| coffee.id
                        children=move |coffee| view! { <CoffeeCard coffee=coffee /> }
                    />
                </div>
            </Show>
        </section>
    }
}
