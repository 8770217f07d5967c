use std::sync::Arc;

use crate::error::StoreError;
use crate::pipeline::observer::WorkoutObserver;
use crate::store::HealthStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted,
    Unavailable,
    Denied(String),
}

/// Requests workout read access and, once granted, starts the observer.
pub struct AuthorizationGate {
    store: Arc<dyn HealthStore>,
    observer: Arc<WorkoutObserver>,
}

impl AuthorizationGate {
    pub fn new(store: Arc<dyn HealthStore>, observer: Arc<WorkoutObserver>) -> Self {
        Self { store, observer }
    }

    pub async fn request_authorization(&self) -> AuthOutcome {
        if !self.store.is_available() {
            tracing::warn!("Health data is not available on this device");
            return AuthOutcome::Unavailable;
        }

        match self.store.request_workout_read_access().await {
            Ok(()) => {
                tracing::info!("Authorization succeeded");
                match self.observer.start().await {
                    Ok(_) => AuthOutcome::Granted,
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            "Access granted but workouts cannot be observed"
                        );
                        AuthOutcome::Denied(err.to_string())
                    }
                }
            }
            Err(StoreError::Unavailable) => {
                tracing::warn!("Health data became unavailable during authorization");
                AuthOutcome::Unavailable
            }
            Err(StoreError::AuthDenied(reason)) => {
                tracing::warn!(reason = %reason, "Authorization denied");
                AuthOutcome::Denied(reason)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Authorization failed");
                AuthOutcome::Denied(err.to_string())
            }
        }
    }
}
