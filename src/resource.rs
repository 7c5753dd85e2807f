//! Loading/data state shared by every dashboard view.
//!
//! A [`Resource`] binds one view to its fetch function. Each refresh takes a
//! [`Ticket`] carrying a per-resource sequence number; a response is only
//! applied if no newer ticket was issued meanwhile, so the most recent
//! request always wins regardless of arrival order.
//!
//! Page and fragment routes build a fresh resource per request and refresh
//! it once, so inside the server the guard only matters to callers that
//! share a resource across threads. Between requests from the browser the
//! same rule holds through `hx-sync="...:replace"` on every fragment
//! control: a newer request for a view aborts the one still in flight.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::ApiError;

/// What a view currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed,
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Lets a view tell "valid but nothing to show" apart from real data.
pub trait EmptyResult {
    fn is_empty_result(&self) -> bool;
}

impl<T> EmptyResult for Vec<T> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

struct Slot<T> {
    issued: u64,
    state: Loadable<T>,
}

pub struct Resource<T> {
    name: &'static str,
    slot: Mutex<Slot<T>>,
}

impl<T> Resource<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(Slot {
                issued: 0,
                state: Loadable::Loading,
            }),
        }
    }

    /// Marks the resource as loading and hands out the newest ticket.
    pub fn begin(&self) -> Ticket {
        let mut slot = self.lock();
        slot.issued += 1;
        slot.state = Loadable::Loading;
        Ticket(slot.issued)
    }

    /// Applies a response. Returns `false` when the ticket is stale and the
    /// response was dropped.
    pub fn settle(&self, ticket: Ticket, result: Result<T, ApiError>) -> bool {
        let mut slot = self.lock();

        if ticket.0 != slot.issued {
            log::debug!(
                "{}: dropping response #{} (latest request is #{})",
                self.name,
                ticket.0,
                slot.issued
            );
            return false;
        }

        slot.state = match result {
            Ok(value) => Loadable::Ready(value),
            Err(e) => {
                log::error!("Failed to load {}: {e}", self.name);
                Loadable::Failed
            }
        };

        true
    }

    /// Runs one fetch under a fresh ticket.
    pub fn refresh<F>(&self, fetch: F) -> bool
    where
        F: FnOnce() -> Result<T, ApiError>,
    {
        let ticket = self.begin();
        self.settle(ticket, fetch())
    }

    pub fn state(&self) -> Loadable<T>
    where
        T: Clone,
    {
        self.lock().state.clone()
    }

    pub fn into_state(self) -> Loadable<T> {
        self.slot
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
