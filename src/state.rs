use std::sync::Arc;

use crate::display::DisplayHandle;
use crate::pipeline::observer::{ObserverState, WorkoutObserver};
use crate::store::MemoryHealthStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryHealthStore>,
    display: DisplayHandle,
    observer: Arc<WorkoutObserver>,
}

impl AppState {
    pub fn new(
        store: Arc<MemoryHealthStore>,
        display: DisplayHandle,
        observer: Arc<WorkoutObserver>,
    ) -> Self {
        Self {
            store,
            display,
            observer,
        }
    }

    pub fn store(&self) -> &MemoryHealthStore {
        &self.store
    }

    pub fn display(&self) -> &DisplayHandle {
        &self.display
    }

    pub fn observer_state(&self) -> ObserverState {
        self.observer.state()
    }
}
