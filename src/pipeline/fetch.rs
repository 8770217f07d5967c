use crate::store::{HealthStore, WorkoutQuery};
use crate::types::workout::Workout;

/// The single most recently ended workout, or `None` when there is none or the query fails.
pub async fn fetch_most_recent(store: &dyn HealthStore) -> Option<Workout> {
    match store.query_workouts(WorkoutQuery::most_recent()).await {
        Ok(workouts) => {
            let workout = workouts.into_iter().next();
            if workout.is_none() {
                tracing::info!("No recent workout data available");
            }
            workout
        }
        Err(err) => {
            tracing::warn!(error = %err, "Error fetching most recent workout");
            None
        }
    }
}
