//! Seam between the ingestion pipeline and the device health data store.

mod memory;

pub use memory::{AuthorizationPolicy, MemoryHealthStore};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::error::StoreError;
use crate::types::workout::Workout;

#[async_trait]
pub trait HealthStore: Send + Sync + 'static {
    fn is_available(&self) -> bool;

    async fn request_workout_read_access(&self) -> Result<(), StoreError>;

    async fn enable_background_delivery(&self, frequency: UpdateFrequency)
        -> Result<(), StoreError>;

    /// Installs a persistent subscription for newly saved workouts.
    async fn observe_workouts(&self) -> Result<mpsc::Receiver<Notification>, StoreError>;

    async fn query_workouts(&self, query: WorkoutQuery) -> Result<Vec<Workout>, StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFrequency {
    Immediate,
    Hourly,
    Daily,
}

impl UpdateFrequency {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "immediate" => Some(UpdateFrequency::Immediate),
            "hourly" => Some(UpdateFrequency::Hourly),
            "daily" => Some(UpdateFrequency::Daily),
            _ => None,
        }
    }
}

/// Workout query, newest end date first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutQuery {
    pub limit: usize,
}

impl WorkoutQuery {
    pub fn most_recent() -> Self {
        Self { limit: 1 }
    }
}

pub struct Notification {
    outcome: Result<(), StoreError>,
    completion: CompletionHandle,
}

impl Notification {
    pub fn new(outcome: Result<(), StoreError>, completion: CompletionHandle) -> Self {
        Self {
            outcome,
            completion,
        }
    }

    pub fn into_parts(self) -> (Result<(), StoreError>, CompletionHandle) {
        (self.outcome, self.completion)
    }
}

/// Acknowledgement owed to the store for a single notification.
pub struct CompletionHandle {
    ack: Option<oneshot::Sender<()>>,
}

impl CompletionHandle {
    pub fn pair() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (Self { ack: Some(tx) }, rx)
    }

    pub fn complete(mut self) {
        if let Some(ack) = self.ack.take() {
            // The store may have stopped listening for acks; nothing left to release then.
            let _ = ack.send(());
        }
    }
}

impl Drop for CompletionHandle {
    fn drop(&mut self) {
        if self.ack.is_some() {
            tracing::warn!("Workout notification dropped without acknowledgement");
        }
    }
}
