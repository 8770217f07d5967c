use chrono_tz::Tz;

use crate::pipeline::timezone;
use crate::types::workout::{
    meters_to_feet, meters_to_miles, Quantity, RecordParts, Unit, Workout, WorkoutRecord,
    METADATA_KEY_ELEVATION_ASCENDED,
};

/// Never fails: unusable measurements become defaults or absent fields.
pub fn normalize(workout: &Workout, device_tz: Tz) -> WorkoutRecord {
    let calories = workout
        .total_energy_burned
        .and_then(|energy| convert(workout, "energy", energy, Unit::Kilocalorie))
        .unwrap_or(0.0);

    let distance = workout
        .total_distance
        .and_then(|distance| convert(workout, "distance", distance, Unit::Meter))
        .map(meters_to_miles);

    let elevation_gain = workout
        .metadata_quantity(METADATA_KEY_ELEVATION_ASCENDED)
        .and_then(|elevation| convert(workout, "elevation", elevation, Unit::Meter))
        .map(meters_to_feet);

    let tz = timezone::workout_timezone(workout, device_tz);

    WorkoutRecord::from_parts(RecordParts {
        id: workout.id.to_string(),
        activity: workout.activity_type.name().to_string(),
        start_date: workout.start_date,
        end_date: workout.end_date,
        duration: workout.duration_seconds / 60.0,
        calories,
        distance,
        elevation_gain,
        timezone: timezone::abbreviation(tz, workout.start_date),
        timezone_name: tz.name().to_string(),
    })
}

fn convert(workout: &Workout, field: &str, quantity: Quantity, unit: Unit) -> Option<f64> {
    let value = quantity.value_in(unit);
    if value.is_none() {
        tracing::warn!(
            workout_id = %workout.id,
            field,
            unit = ?quantity.unit,
            "Ignoring measurement with incompatible unit"
        );
    }
    value
}
