//! Spring Coffee Frontend App
//!
//! Landing page: nav bar, hero, menu, footer.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpCatalog;
use crate::components::{Hero, MenuSection, NavBar, SiteFooter};
use crate::config::AppConfig;
use crate::context::CatalogContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let catalog = CatalogContext::new(Arc::new(HttpCatalog::new(&config)));
    provide_context(catalog.clone());

    // Load the full catalog on mount; later loads come from filter selection
    Effect::new(move |_| {
        log::info!("[APP] Loading catalog from {}", config.catalog_base_url);
        catalog.refresh();
    });

    view! {
        <div class="page">
            <NavBar />
            <Hero />
            <MenuSection />
            <SiteFooter />
        </div>
    }
}
