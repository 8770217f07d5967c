use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::types::workout::{Workout, METADATA_KEY_TIME_ZONE};

/// Configured override, then the host zone, then UTC.
pub fn device_timezone(configured: Option<&str>) -> Tz {
    if let Some(tz) = configured.and_then(parse_zone) {
        return tz;
    }
    if let Some(name) = configured {
        tracing::warn!(timezone = name, "Ignoring unrecognised configured timezone");
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => parse_zone(&name).unwrap_or_else(|| {
            tracing::warn!(timezone = %name, "Host timezone is not an IANA zone, using UTC");
            Tz::UTC
        }),
        Err(err) => {
            tracing::warn!(error = %err, "Could not determine host timezone, using UTC");
            Tz::UTC
        }
    }
}

/// Zone the workout was recorded in, else the device zone.
pub fn workout_timezone(workout: &Workout, device: Tz) -> Tz {
    match workout.metadata_text(METADATA_KEY_TIME_ZONE) {
        Some(name) => parse_zone(name).unwrap_or_else(|| {
            tracing::debug!(
                workout_id = %workout.id,
                timezone = name,
                "Workout timezone not recognised, using device timezone"
            );
            device
        }),
        None => device,
    }
}

/// Abbreviation in effect at `at`, e.g. "PST" or "PDT" for Los Angeles.
pub fn abbreviation(tz: Tz, at: DateTime<Utc>) -> String {
    at.with_timezone(&tz).format("%Z").to_string()
}

fn parse_zone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}
