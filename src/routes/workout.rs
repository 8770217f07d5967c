use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::display::{DisplayedWorkout, NO_WORKOUT_SUMMARY};
use crate::error::AppError;
use crate::state::AppState;
use crate::types::activity::ActivityType;
use crate::types::workout::{MetadataValue, Quantity, Workout};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/workout/latest", get(latest_workout))
        .route("/api/samples", post(save_sample))
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SampleRequest {
    id: Option<Uuid>,
    activity_type: ActivityType,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    duration_seconds: Option<f64>,
    total_energy_burned: Option<Quantity>,
    total_distance: Option<Quantity>,
    #[serde(default)]
    metadata: BTreeMap<String, MetadataValue>,
}

#[derive(Serialize)]
struct SampleResponse {
    id: Uuid,
    notified: usize,
}

async fn latest_workout(State(state): State<AppState>) -> Result<Json<DisplayedWorkout>, AppError> {
    state
        .display()
        .latest()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NO_WORKOUT_SUMMARY.to_string()))
}

async fn save_sample(
    State(state): State<AppState>,
    Json(request): Json<SampleRequest>,
) -> Result<(StatusCode, Json<SampleResponse>), AppError> {
    if request.end_date < request.start_date {
        return Err(AppError::BadRequest(
            "end_date must not be before start_date".to_string(),
        ));
    }

    let elapsed = (request.end_date - request.start_date).num_milliseconds() as f64 / 1000.0;
    let duration_seconds = request.duration_seconds.unwrap_or(elapsed);
    if !duration_seconds.is_finite() || duration_seconds < 0.0 {
        return Err(AppError::BadRequest(
            "duration_seconds must be a non-negative number".to_string(),
        ));
    }

    let workout = Workout {
        id: request.id.unwrap_or_else(Uuid::new_v4),
        activity_type: request.activity_type,
        start_date: request.start_date,
        end_date: request.end_date,
        duration_seconds,
        total_energy_burned: request.total_energy_burned,
        total_distance: request.total_distance,
        metadata: request.metadata,
    };
    let id = workout.id;

    tracing::info!(
        workout_id = %id,
        activity = workout.activity_type.name(),
        "Received workout sample"
    );
    let notified = state.store().add_workout(workout).await;

    Ok((StatusCode::CREATED, Json(SampleResponse { id, notified })))
}
