use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{mpsc, Mutex};
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::{
    CompletionHandle, HealthStore, Notification, UpdateFrequency, WorkoutQuery,
};
use crate::types::workout::Workout;

const SUBSCRIPTION_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationPolicy {
    Grant,
    Deny(String),
}

/// In-process health store; every insert notifies all live subscribers.
pub struct MemoryHealthStore {
    available: bool,
    policy: AuthorizationPolicy,
    authorized: AtomicBool,
    fail_queries: AtomicBool,
    fail_background_delivery: AtomicBool,
    fail_subscriptions: AtomicBool,
    workouts: DashMap<Uuid, Workout>,
    subscribers: Mutex<Vec<mpsc::Sender<Notification>>>,
    counters: Arc<Counters>,
}

#[derive(Default)]
struct Counters {
    authorization_requests: AtomicUsize,
    background_delivery_requests: AtomicUsize,
    subscriptions: AtomicUsize,
    outstanding_acks: AtomicUsize,
}

impl MemoryHealthStore {
    pub fn new(available: bool) -> Self {
        Self::with_policy(available, AuthorizationPolicy::Grant)
    }

    pub fn with_policy(available: bool, policy: AuthorizationPolicy) -> Self {
        Self {
            available,
            policy,
            authorized: AtomicBool::new(false),
            fail_queries: AtomicBool::new(false),
            fail_background_delivery: AtomicBool::new(false),
            fail_subscriptions: AtomicBool::new(false),
            workouts: DashMap::new(),
            subscribers: Mutex::new(Vec::new()),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn set_fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_background_delivery(&self, fail: bool) {
        self.fail_background_delivery.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_subscriptions(&self, fail: bool) {
        self.fail_subscriptions.store(fail, Ordering::SeqCst);
    }

    /// Saves a workout and notifies subscribers. Returns how many were notified.
    pub async fn add_workout(&self, workout: Workout) -> usize {
        tracing::debug!(workout_id = %workout.id, "Saving workout");
        self.workouts.insert(workout.id, workout);
        self.notify(Ok(())).await
    }

    pub async fn notify_error(&self, error: StoreError) -> usize {
        self.notify(Err(error)).await
    }

    pub fn workout_count(&self) -> usize {
        self.workouts.len()
    }

    pub fn authorization_requests(&self) -> usize {
        self.counters.authorization_requests.load(Ordering::SeqCst)
    }

    pub fn background_delivery_requests(&self) -> usize {
        self.counters.background_delivery_requests.load(Ordering::SeqCst)
    }

    pub fn subscriptions(&self) -> usize {
        self.counters.subscriptions.load(Ordering::SeqCst)
    }

    /// Notifications handed out whose completion handle has not been resolved yet.
    pub fn outstanding_acknowledgements(&self) -> usize {
        self.counters.outstanding_acks.load(Ordering::SeqCst)
    }

    async fn notify(&self, outcome: Result<(), StoreError>) -> usize {
        let mut subscribers = self.subscribers.lock().await;
        subscribers.retain(|tx| !tx.is_closed());

        let mut delivered = 0;
        for tx in subscribers.iter() {
            let (completion, ack) = CompletionHandle::pair();
            self.counters.outstanding_acks.fetch_add(1, Ordering::SeqCst);
            let counters = self.counters.clone();
            tokio::spawn(async move {
                // Resolves on `complete()` or when the handle is dropped unacknowledged.
                let _ = ack.await;
                counters.outstanding_acks.fetch_sub(1, Ordering::SeqCst);
            });

            if tx
                .send(Notification::new(outcome.clone(), completion))
                .await
                .is_ok()
            {
                delivered += 1;
            }
        }
        delivered
    }

    fn ensure_authorized(&self) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        if !self.authorized.load(Ordering::SeqCst) {
            return Err(StoreError::NotAuthorized);
        }
        Ok(())
    }
}

#[async_trait]
impl HealthStore for MemoryHealthStore {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn request_workout_read_access(&self) -> Result<(), StoreError> {
        self.counters
            .authorization_requests
            .fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        match &self.policy {
            AuthorizationPolicy::Grant => {
                self.authorized.store(true, Ordering::SeqCst);
                Ok(())
            }
            AuthorizationPolicy::Deny(reason) => Err(StoreError::AuthDenied(reason.clone())),
        }
    }

    async fn enable_background_delivery(
        &self,
        frequency: UpdateFrequency,
    ) -> Result<(), StoreError> {
        self.counters
            .background_delivery_requests
            .fetch_add(1, Ordering::SeqCst);
        self.ensure_authorized()?;
        if self.fail_background_delivery.load(Ordering::SeqCst) {
            return Err(StoreError::BackgroundDelivery(
                "background delivery is disabled for this store".to_string(),
            ));
        }
        tracing::debug!(?frequency, "Background delivery enabled");
        Ok(())
    }

    async fn observe_workouts(&self) -> Result<mpsc::Receiver<Notification>, StoreError> {
        self.ensure_authorized()?;
        if self.fail_subscriptions.load(Ordering::SeqCst) {
            return Err(StoreError::Subscription(
                "workout observer could not be registered".to_string(),
            ));
        }
        let (tx, rx) = mpsc::channel(SUBSCRIPTION_BUFFER);
        self.subscribers.lock().await.push(tx);
        self.counters.subscriptions.fetch_add(1, Ordering::SeqCst);
        Ok(rx)
    }

    async fn query_workouts(&self, query: WorkoutQuery) -> Result<Vec<Workout>, StoreError> {
        self.ensure_authorized()?;
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(StoreError::Query("workout query failed".to_string()));
        }

        let mut workouts: Vec<Workout> = self
            .workouts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        workouts.sort_by(|a, b| b.end_date.cmp(&a.end_date));
        workouts.truncate(query.limit);
        Ok(workouts)
    }
}
