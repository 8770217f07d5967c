use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, watch};

use crate::error::StoreError;
use crate::pipeline::Ingestor;
use crate::store::{Notification, UpdateFrequency};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObserverState {
    NotStarted,
    BackgroundDeliveryRequested,
    Observing,
}

/// Subscription to new workouts: `NotStarted -> BackgroundDeliveryRequested -> Observing`.
pub struct WorkoutObserver {
    ingestor: Arc<Ingestor>,
    frequency: UpdateFrequency,
    state: watch::Sender<ObserverState>,
}

impl WorkoutObserver {
    pub fn new(ingestor: Arc<Ingestor>, frequency: UpdateFrequency) -> Self {
        let (state, _) = watch::channel(ObserverState::NotStarted);
        Self {
            ingestor,
            frequency,
            state,
        }
    }

    pub fn state(&self) -> ObserverState {
        *self.state.borrow()
    }

    /// `Ok(true)` only for the call that started it; a failed subscription resets to `NotStarted`.
    pub async fn start(&self) -> Result<bool, StoreError> {
        let claimed = self.state.send_if_modified(|state| {
            if *state == ObserverState::NotStarted {
                *state = ObserverState::BackgroundDeliveryRequested;
                true
            } else {
                false
            }
        });
        if !claimed {
            tracing::debug!(state = ?self.state(), "Workout observer already started");
            return Ok(false);
        }

        let store = self.ingestor.store();
        match store.enable_background_delivery(self.frequency).await {
            Ok(()) => tracing::info!(frequency = ?self.frequency, "Background delivery enabled"),
            Err(err) => tracing::error!(error = %err, "Failed to enable background delivery"),
        }

        let notifications = match store.observe_workouts().await {
            Ok(notifications) => notifications,
            Err(err) => {
                tracing::error!(error = %err, "Observer query failed");
                self.state.send_replace(ObserverState::NotStarted);
                return Err(err);
            }
        };

        self.state.send_replace(ObserverState::Observing);
        tracing::info!("Observing new workouts");
        tokio::spawn(listen(self.ingestor.clone(), notifications));
        Ok(true)
    }
}

async fn listen(ingestor: Arc<Ingestor>, mut notifications: mpsc::Receiver<Notification>) {
    while let Some(notification) = notifications.recv().await {
        let (outcome, completion) = notification.into_parts();
        match outcome {
            Ok(()) => {
                tracing::info!("New workout detected");
                let ingestor = ingestor.clone();
                tokio::spawn(async move {
                    ingestor.ingest_most_recent().await;
                });
            }
            Err(err) => tracing::warn!(error = %err, "Workout notification failed"),
        }
        completion.complete();
    }
    tracing::warn!("Workout subscription closed by the health store");
}
