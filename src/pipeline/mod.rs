pub mod auth;
pub mod fetch;
pub mod normalize;
pub mod observer;
pub mod timezone;

use std::sync::Arc;

use chrono_tz::Tz;

use crate::delivery::DeliveryClient;
use crate::display::DisplayHandle;
use crate::store::{HealthStore, UpdateFrequency};

use self::auth::AuthorizationGate;
use self::observer::WorkoutObserver;

/// Fetch, normalize, display and deliver the most recent workout.
pub struct Ingestor {
    store: Arc<dyn HealthStore>,
    device_tz: Tz,
    delivery: DeliveryClient,
    display: DisplayHandle,
}

impl Ingestor {
    pub fn new(
        store: Arc<dyn HealthStore>,
        device_tz: Tz,
        delivery: DeliveryClient,
        display: DisplayHandle,
    ) -> Self {
        Self {
            store,
            device_tz,
            delivery,
            display,
        }
    }

    pub fn store(&self) -> &dyn HealthStore {
        self.store.as_ref()
    }

    pub async fn ingest_most_recent(&self) {
        let Some(workout) = fetch::fetch_most_recent(self.store.as_ref()).await else {
            return;
        };
        let record = normalize::normalize(&workout, self.device_tz);
        tracing::info!(
            workout_id = record.id(),
            activity = record.activity(),
            duration_minutes = record.duration(),
            calories = record.calories(),
            timezone = record.timezone_name(),
            "Processed workout"
        );

        // Local display does not wait on the network.
        self.display.publish(record.clone()).await;
        self.delivery.deliver_and_log(&record).await;
    }
}

pub struct Pipeline {
    pub gate: AuthorizationGate,
    pub observer: Arc<WorkoutObserver>,
}

impl Pipeline {
    pub fn new(
        store: Arc<dyn HealthStore>,
        device_tz: Tz,
        delivery: DeliveryClient,
        display: DisplayHandle,
        frequency: UpdateFrequency,
    ) -> Self {
        let ingestor = Arc::new(Ingestor::new(store.clone(), device_tz, delivery, display));
        let observer = Arc::new(WorkoutObserver::new(ingestor, frequency));
        let gate = AuthorizationGate::new(store, observer.clone());
        Self { gate, observer }
    }
}
