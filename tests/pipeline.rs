use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};
use workout_relay::{
    delivery::DeliveryClient,
    display::{DisplayHandle, DisplayedWorkout},
    error::StoreError,
    pipeline::{auth::AuthOutcome, observer::ObserverState, Pipeline},
    store::{AuthorizationPolicy, MemoryHealthStore, UpdateFrequency},
    types::{
        activity::ActivityType,
        workout::{Quantity, Unit, Workout},
    },
};

const WAIT: Duration = Duration::from_secs(5);

struct Harness {
    server: MockServer,
    store: Arc<MemoryHealthStore>,
    display: DisplayHandle,
    pipeline: Pipeline,
}

async fn harness(store: MemoryHealthStore, status: u16, expected_posts: u64) -> Harness {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/workout"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_posts)
        .mount(&server)
        .await;

    let store = Arc::new(store);
    let display = DisplayHandle::spawn();
    let delivery = DeliveryClient::new(&format!("{}/api/workout", server.uri())).expect("client");
    let pipeline = Pipeline::new(
        store.clone(),
        Tz::America__Los_Angeles,
        delivery,
        display.clone(),
        UpdateFrequency::Immediate,
    );

    Harness {
        server,
        store,
        display,
        pipeline,
    }
}

fn running_workout(end: DateTime<Utc>) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        activity_type: ActivityType::Running,
        start_date: end - chrono::Duration::seconds(1800),
        end_date: end,
        duration_seconds: 1800.0,
        total_energy_burned: Some(Quantity::new(450.0, Unit::Kilocalorie)),
        total_distance: Some(Quantity::new(5.0, Unit::Kilometer)),
        metadata: BTreeMap::new(),
    }
}

fn january(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
}

async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<Request> {
    tokio::time::timeout(WAIT, async {
        loop {
            let requests = server.received_requests().await.unwrap_or_default();
            if requests.len() >= count {
                return requests;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("timed out waiting for deliveries")
}

async fn wait_for_display(display: &DisplayHandle) -> DisplayedWorkout {
    let mut rx = display.subscribe();
    let shown = tokio::time::timeout(WAIT, rx.wait_for(Option::is_some))
        .await
        .expect("timed out waiting for display")
        .expect("display context alive")
        .clone()
        .expect("displayed workout");
    shown
}

async fn wait_for_acks(store: &MemoryHealthStore) {
    tokio::time::timeout(WAIT, async {
        while store.outstanding_acknowledgements() > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("notifications were not acknowledged");
}

#[tokio::test]
async fn unavailable_store_never_observes_or_delivers() {
    let h = harness(MemoryHealthStore::new(false), 200, 0).await;

    let outcome = h.pipeline.gate.request_authorization().await;
    assert_eq!(outcome, AuthOutcome::Unavailable);
    assert_eq!(h.pipeline.observer.state(), ObserverState::NotStarted);
    assert_eq!(h.store.authorization_requests(), 0);
    assert_eq!(h.store.subscriptions(), 0);

    assert_eq!(h.store.add_workout(running_workout(january(18))).await, 0);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(h.server.received_requests().await.unwrap_or_default().is_empty());
    assert!(h.display.latest().is_none());
}

#[tokio::test]
async fn denied_authorization_is_reported_without_observing() {
    let store = MemoryHealthStore::with_policy(
        true,
        AuthorizationPolicy::Deny("user declined".to_string()),
    );
    let h = harness(store, 200, 0).await;

    let outcome = h.pipeline.gate.request_authorization().await;
    assert_eq!(outcome, AuthOutcome::Denied("user declined".to_string()));
    assert_eq!(h.pipeline.observer.state(), ObserverState::NotStarted);
    assert_eq!(h.store.background_delivery_requests(), 0);
}

#[tokio::test]
async fn observer_starts_only_once() {
    let h = harness(MemoryHealthStore::new(true), 200, 0).await;

    assert_eq!(h.pipeline.gate.request_authorization().await, AuthOutcome::Granted);
    assert_eq!(h.pipeline.gate.request_authorization().await, AuthOutcome::Granted);
    assert_eq!(h.pipeline.observer.start().await, Ok(false));

    assert_eq!(h.pipeline.observer.state(), ObserverState::Observing);
    assert_eq!(h.store.authorization_requests(), 2);
    assert_eq!(h.store.background_delivery_requests(), 1);
    assert_eq!(h.store.subscriptions(), 1);
}

#[tokio::test]
async fn failed_subscription_is_reported_and_can_be_retried() {
    let store = MemoryHealthStore::new(true);
    store.set_fail_subscriptions(true);
    let h = harness(store, 200, 1).await;

    let outcome = h.pipeline.gate.request_authorization().await;
    assert!(matches!(outcome, AuthOutcome::Denied(reason) if reason.contains("subscription")));
    assert_eq!(h.pipeline.observer.state(), ObserverState::NotStarted);
    assert_eq!(h.store.subscriptions(), 0);

    h.store.set_fail_subscriptions(false);
    assert_eq!(h.pipeline.gate.request_authorization().await, AuthOutcome::Granted);
    assert_eq!(h.pipeline.observer.state(), ObserverState::Observing);
    assert_eq!(h.store.subscriptions(), 1);
    assert_eq!(h.store.background_delivery_requests(), 2);

    h.store.add_workout(running_workout(january(18))).await;
    wait_for_requests(&h.server, 1).await;
}

#[tokio::test]
async fn new_workout_is_displayed_and_delivered() {
    let h = harness(MemoryHealthStore::new(true), 200, 1).await;
    assert_eq!(h.pipeline.gate.request_authorization().await, AuthOutcome::Granted);

    let workout = running_workout(january(18));
    assert_eq!(h.store.add_workout(workout.clone()).await, 1);

    let requests = wait_for_requests(&h.server, 1).await;
    let body: Value = requests[0].body_json().expect("json body");
    let object = body.as_object().expect("object body");
    assert_eq!(object.len(), 9);
    assert_eq!(object["id"], workout.id.to_string());
    assert_eq!(object["type"], "Running");
    assert_eq!(object["duration"], 30.0);
    assert_eq!(object["calories"], 450.0);
    assert_eq!(object["timezone"], "PST");
    assert_eq!(object["timezone_name"], "America/Los_Angeles");
    assert!(!object.contains_key("elevation_gain"));

    let shown = wait_for_display(&h.display).await;
    assert_eq!(shown.summary, "Running, 30.0 mins, 450 kcal");
    assert_eq!(shown.record.id(), workout.id.to_string());

    wait_for_acks(&h.store).await;
}

#[tokio::test]
async fn failed_delivery_still_updates_display() {
    let h = harness(MemoryHealthStore::new(true), 500, 1).await;
    h.pipeline.gate.request_authorization().await;

    let workout = running_workout(january(18));
    h.store.add_workout(workout.clone()).await;

    wait_for_requests(&h.server, 1).await;
    let shown = wait_for_display(&h.display).await;
    assert_eq!(shown.record.id(), workout.id.to_string());
    assert_eq!(h.pipeline.observer.state(), ObserverState::Observing);
}

#[tokio::test]
async fn error_notification_keeps_subscription_alive() {
    let h = harness(MemoryHealthStore::new(true), 200, 1).await;
    h.pipeline.gate.request_authorization().await;

    let notified = h
        .store
        .notify_error(StoreError::Query("sample type unavailable".to_string()))
        .await;
    assert_eq!(notified, 1);
    wait_for_acks(&h.store).await;
    assert!(h.display.latest().is_none());

    h.store.add_workout(running_workout(january(18))).await;
    wait_for_requests(&h.server, 1).await;
    wait_for_acks(&h.store).await;
}

#[tokio::test]
async fn query_failure_is_treated_as_no_data() {
    let h = harness(MemoryHealthStore::new(true), 200, 0).await;
    h.pipeline.gate.request_authorization().await;
    h.store.set_fail_queries(true);

    h.store.add_workout(running_workout(january(18))).await;
    wait_for_acks(&h.store).await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(h.server.received_requests().await.unwrap_or_default().is_empty());
    assert!(h.display.latest().is_none());
}

#[tokio::test]
async fn background_delivery_failure_does_not_stop_observing() {
    let store = MemoryHealthStore::new(true);
    store.set_fail_background_delivery(true);
    let h = harness(store, 200, 1).await;

    assert_eq!(h.pipeline.gate.request_authorization().await, AuthOutcome::Granted);
    assert_eq!(h.pipeline.observer.state(), ObserverState::Observing);

    h.store.add_workout(running_workout(january(18))).await;
    wait_for_requests(&h.server, 1).await;
}

#[tokio::test]
async fn each_notification_delivers_the_latest_ended_workout() {
    // No dedup by id: a second notification re-delivers whatever is most recent.
    let h = harness(MemoryHealthStore::new(true), 200, 2).await;
    h.pipeline.gate.request_authorization().await;

    let newest = running_workout(january(20));
    let older = running_workout(january(9));
    h.store.add_workout(newest.clone()).await;
    wait_for_requests(&h.server, 1).await;
    h.store.add_workout(older).await;

    let requests = wait_for_requests(&h.server, 2).await;
    for request in requests {
        let body: Value = request.body_json().expect("json body");
        assert_eq!(body["id"], newest.id.to_string());
    }
}
