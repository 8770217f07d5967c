use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workout_relay::{
    delivery::DeliveryClient,
    error::DeliveryError,
    pipeline::normalize::normalize,
    types::{
        activity::ActivityType,
        workout::{Workout, WorkoutRecord},
    },
};

fn cycling_record() -> WorkoutRecord {
    let start = Utc.with_ymd_and_hms(2024, 3, 2, 7, 30, 0).unwrap();
    let workout = Workout {
        id: Uuid::new_v4(),
        activity_type: ActivityType::Cycling,
        start_date: start,
        end_date: start + chrono::Duration::minutes(45),
        duration_seconds: 2700.0,
        total_energy_burned: None,
        total_distance: None,
        metadata: BTreeMap::new(),
    };
    normalize(&workout, Tz::UTC)
}

async fn endpoint(status: u16, expected: u64) -> (MockServer, DeliveryClient) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/workout"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected)
        .mount(&server)
        .await;
    let client = DeliveryClient::new(&format!("{}/api/workout", server.uri())).expect("client");
    (server, client)
}

#[tokio::test]
async fn posts_record_as_json() {
    let (server, client) = endpoint(201, 1).await;
    let record = cycling_record();

    client.deliver(&record).await.expect("delivered");

    let requests = server.received_requests().await.expect("recording enabled");
    let body: Value = requests[0].body_json().expect("json body");
    assert_eq!(body["id"], record.id());
    assert_eq!(body["type"], "Cycling");
    assert_eq!(body["duration"], 45.0);
    assert_eq!(body["calories"], 0.0);
    assert_eq!(body["start_date"], "2024-03-02T07:30:00Z");
    assert_eq!(body["timezone"], "UTC");
    assert!(body.get("distance").is_none());
}

#[tokio::test]
async fn same_record_twice_is_posted_twice() {
    let (server, client) = endpoint(200, 2).await;
    let record = cycling_record();

    client.deliver(&record).await.expect("first delivery");
    client.deliver(&record).await.expect("second delivery");

    server.verify().await;
}

#[tokio::test]
async fn server_error_is_a_delivery_error() {
    let (_server, client) = endpoint(500, 2).await;
    let record = cycling_record();

    let err = client.deliver(&record).await.expect_err("500 must fail");
    assert!(matches!(err, DeliveryError::Status(status) if status.as_u16() == 500));
    assert!(!client.deliver_and_log(&record).await);
}

#[tokio::test]
async fn transport_failure_is_a_delivery_error() {
    let client = DeliveryClient::new("http://127.0.0.1:1/api/workout").expect("client");

    let err = client.deliver(&cycling_record()).await.expect_err("no listener");
    assert!(matches!(err, DeliveryError::Transport(_)));
}

#[test]
fn rejects_malformed_endpoint() {
    let err = DeliveryClient::new("not a url").expect_err("invalid url");
    assert!(matches!(err, DeliveryError::InvalidEndpoint { .. }));
}
