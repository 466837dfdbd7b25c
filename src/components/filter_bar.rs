//! Filter Bar Component
//!
//! All / Hot / Cold buttons driving the catalog fetch.

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::models::FilterState;

/// Filter buttons; exactly one is marked active
#[component]
pub fn FilterBar() -> impl IntoView {
    let catalog = use_catalog();

    view! {
        <div class="filter-bar" role="group">
            {FilterState::CHOICES.iter().map(|&filter| {
                let class = {
                    let catalog = catalog.clone();
                    move || filter.button_class(catalog.active_filter())
                };
                let catalog = catalog.clone();
                view! {
                    <button
                        class=class
                        on:click=move |_| catalog.select_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
