//! Catalog View State
//!
//! The fetch-and-filter flow, free of any rendering concerns.
//!
//! Every fetch cycle takes a ticket carrying a generation number. Only the
//! response for the newest generation is applied; older responses that
//! resolve late are dropped so rapid filter toggling cannot leave a stale
//! list on screen.

use std::cell::RefCell;

use crate::api::CatalogSource;
use crate::error::CatalogResult;
use crate::models::{CoffeeItem, FilterState};

/// Where the latest fetch cycle stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    /// A cycle is in flight (also the state before the first one resolves)
    #[default]
    Loading,
    Loaded,
    /// Latest cycle failed; items keep their previous value
    Failed(String),
}

impl FetchStatus {
    /// Short name for markup hooks
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Loading => "loading",
            FetchStatus::Loaded => "loaded",
            FetchStatus::Failed(_) => "failed",
        }
    }
}

/// Handle for one fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub filter: FilterState,
}

/// What happened to a finished cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied { count: usize },
    Failed { reason: String },
    /// A newer cycle was started before this one resolved
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    items: Vec<CoffeeItem>,
    active_filter: FilterState,
    status: FetchStatus,
    generation: u64,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_filter(&self) -> FilterState {
        self.active_filter
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// What the grid shows, in server response order. No client-side
    /// filtering sits on top of the server-side one, so this is the full
    /// held list.
    pub fn displayed_items(&self) -> &[CoffeeItem] {
        &self.items
    }

    pub fn select_filter(&mut self, filter: FilterState) {
        self.active_filter = filter;
    }

    /// Start a cycle for the current filter
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        FetchTicket {
            generation: self.generation,
            filter: self.active_filter,
        }
    }

    /// Apply a cycle's result if it is still the newest one
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: CatalogResult<Vec<CoffeeItem>>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.status = FetchStatus::Loaded;
                FetchOutcome::Applied { count }
            }
            Err(err) => {
                let reason = err.to_string();
                self.status = FetchStatus::Failed(reason.clone());
                FetchOutcome::Failed { reason }
            }
        }
    }
}

/// Shared, mutable home of a `CatalogState`
pub trait CatalogCell {
    /// Run `f` against the state; `None` when the state is gone
    fn modify<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R>;
}

impl CatalogCell for RefCell<CatalogState> {
    fn modify<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Run one fetch cycle against `source` for the state's current filter.
///
/// Failures are logged and swallowed; the state always leaves `Loading`
/// unless a newer cycle has taken over.
pub async fn refresh_catalog<C, S>(cell: &C, source: &S) -> FetchOutcome
where
    C: CatalogCell + ?Sized,
    S: CatalogSource + ?Sized,
{
    let Some(ticket) = cell.modify(CatalogState::begin_fetch) else {
        return FetchOutcome::Stale;
    };
    log::debug!("[CatalogView] Fetch #{} for {:?}", ticket.generation, ticket.filter);

    let result = source.fetch_catalog(ticket.filter).await;
    let outcome = cell
        .modify(|state| state.finish_fetch(ticket, result))
        .unwrap_or(FetchOutcome::Stale);
    match &outcome {
        FetchOutcome::Applied { count } => {
            log::info!("[CatalogView] Loaded {} coffees ({:?})", count, ticket.filter)
        }
        FetchOutcome::Stale => {
            log::warn!("[CatalogView] Dropped stale response #{}", ticket.generation)
        }
        FetchOutcome::Failed { reason } => {
            log::error!("[CatalogView] Error fetching coffee data: {}", reason)
        }
    }
    outcome
}
