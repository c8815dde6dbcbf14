//! Application state for the Vacation Scheduling Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex};

use crate::clock::Clock;
use crate::scheduler::VacationScheduler;
use crate::store::InMemoryStore;

/// The scheduler type served by the HTTP adapter: in-memory store, any
/// clock (boxed so tests can pin the date).
pub type ApiScheduler = VacationScheduler<InMemoryStore, Box<dyn Clock>>;

/// Shared application state.
///
/// The scheduler sits behind a mutex: the engine assumes a single in-flight
/// mutation per allotment, and the lock is this process's serialization
/// point.
#[derive(Clone)]
pub struct AppState {
    scheduler: Arc<Mutex<ApiScheduler>>,
}

impl AppState {
    /// Creates a new application state owning the given scheduler.
    pub fn new(scheduler: ApiScheduler) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
        }
    }

    /// Returns the shared scheduler handle.
    pub fn scheduler(&self) -> &Arc<Mutex<ApiScheduler>> {
        &self.scheduler
    }
}
