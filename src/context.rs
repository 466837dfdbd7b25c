//! Catalog Context
//!
//! Catalog state and its actions, provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CatalogSource;
use crate::catalog::{refresh_catalog, CatalogCell, CatalogState, FetchStatus};
use crate::models::{CoffeeItem, FilterState};

impl CatalogCell for RwSignal<CatalogState> {
    fn modify<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Catalog signals and the source they are loaded from
#[derive(Clone)]
pub struct CatalogContext {
    state: RwSignal<CatalogState>,
    source: Arc<dyn CatalogSource + Send + Sync>,
}

impl CatalogContext {
    pub fn new(source: Arc<dyn CatalogSource + Send + Sync>) -> Self {
        Self {
            state: RwSignal::new(CatalogState::new()),
            source,
        }
    }

    /// Start a fetch cycle for the active filter without waiting on it
    pub fn refresh(&self) {
        let state = self.state;
        let source = Arc::clone(&self.source);
        spawn_local(async move {
            refresh_catalog(&state, source.as_ref()).await;
        });
    }

    /// Select a filter and fetch for it, even if it is already active
    pub fn select_filter(&self, filter: FilterState) {
        self.state.update(|state| state.select_filter(filter));
        self.refresh();
    }

    pub fn active_filter(&self) -> FilterState {
        self.state.with(|state| state.active_filter())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|state| state.is_loading())
    }

    pub fn status(&self) -> FetchStatus {
        self.state.with(|state| state.status().clone())
    }

    pub fn displayed_items(&self) -> Vec<CoffeeItem> {
        self.state.with(|state| state.displayed_items().to_vec())
    }
}

/// Get the catalog context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}
