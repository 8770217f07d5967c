//! Single-writer owner of the "most recent workout" shown to the user.

use serde::Serialize;
use tokio::sync::{mpsc, watch};

use crate::types::workout::WorkoutRecord;

pub const NO_WORKOUT_SUMMARY: &str = "No recent workout data available";

const UPDATE_BUFFER: usize = 16;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayedWorkout {
    pub summary: String,
    pub record: WorkoutRecord,
}

#[derive(Clone)]
pub struct DisplayHandle {
    updates: mpsc::Sender<WorkoutRecord>,
    latest: watch::Receiver<Option<DisplayedWorkout>>,
}

impl DisplayHandle {
    pub fn spawn() -> Self {
        let (updates, mut rx) = mpsc::channel::<WorkoutRecord>(UPDATE_BUFFER);
        let (latest_tx, latest) = watch::channel(None);

        tokio::spawn(async move {
            while let Some(record) = rx.recv().await {
                let shown = DisplayedWorkout {
                    summary: record.summary(),
                    record,
                };
                tracing::debug!(summary = %shown.summary, "Updating displayed workout");
                latest_tx.send_replace(Some(shown));
            }
        });

        Self { updates, latest }
    }

    /// Queues a record for display. Returns false if the display context is gone.
    pub async fn publish(&self, record: WorkoutRecord) -> bool {
        if self.updates.send(record).await.is_err() {
            tracing::warn!("Display context has stopped, dropping workout update");
            return false;
        }
        true
    }

    pub fn latest(&self) -> Option<DisplayedWorkout> {
        self.latest.borrow().clone()
    }

    pub fn summary(&self) -> String {
        self.latest
            .borrow()
            .as_ref()
            .map(|shown| shown.summary.clone())
            .unwrap_or_else(|| NO_WORKOUT_SUMMARY.to_string())
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<DisplayedWorkout>> {
        self.latest.clone()
    }
}
