use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::activity::ActivityType;

pub const METADATA_KEY_TIME_ZONE: &str = "HKTimeZone";
pub const METADATA_KEY_ELEVATION_ASCENDED: &str = "HKElevationAscended";

const METERS_PER_MILE: f64 = 1609.344;
const METERS_PER_FOOT: f64 = 0.3048;
const KILOJOULES_PER_KILOCALORIE: f64 = 4.184;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilocalorie,
    Kilojoule,
    Meter,
    Kilometer,
    Mile,
    Foot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    Energy,
    Length,
}

impl Unit {
    fn dimension(self) -> Dimension {
        match self {
            Unit::Kilocalorie | Unit::Kilojoule => Dimension::Energy,
            Unit::Meter | Unit::Kilometer | Unit::Mile | Unit::Foot => Dimension::Length,
        }
    }

    // kcal or meters
    fn to_base(self) -> f64 {
        match self {
            Unit::Kilocalorie => 1.0,
            Unit::Kilojoule => 1.0 / KILOJOULES_PER_KILOCALORIE,
            Unit::Meter => 1.0,
            Unit::Kilometer => 1000.0,
            Unit::Mile => METERS_PER_MILE,
            Unit::Foot => METERS_PER_FOOT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Returns `None` when `unit` measures a different dimension.
    pub fn value_in(&self, unit: Unit) -> Option<f64> {
        if self.unit.dimension() != unit.dimension() {
            return None;
        }
        Some(self.value * self.unit.to_base() / unit.to_base())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Quantity(Quantity),
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub activity_type: ActivityType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration_seconds: f64,
    pub total_energy_burned: Option<Quantity>,
    pub total_distance: Option<Quantity>,
    #[serde(default)]
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl Workout {
    pub fn metadata_text(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key)? {
            MetadataValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn metadata_quantity(&self, key: &str) -> Option<Quantity> {
        match self.metadata.get(key)? {
            MetadataValue::Quantity(quantity) => Some(*quantity),
            _ => None,
        }
    }
}

/// Canonical record built only by the normalizer; absent optionals are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRecord {
    id: String,
    #[serde(rename = "type")]
    activity: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    duration: f64,
    calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elevation_gain: Option<f64>,
    timezone: String,
    timezone_name: String,
}

pub(crate) struct RecordParts {
    pub id: String,
    pub activity: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub duration: f64,
    pub calories: f64,
    pub distance: Option<f64>,
    pub elevation_gain: Option<f64>,
    pub timezone: String,
    pub timezone_name: String,
}

impl WorkoutRecord {
    pub(crate) fn from_parts(parts: RecordParts) -> Self {
        Self {
            id: parts.id,
            activity: parts.activity,
            start_date: parts.start_date,
            end_date: parts.end_date,
            duration: parts.duration,
            calories: parts.calories,
            distance: parts.distance,
            elevation_gain: parts.elevation_gain,
            timezone: parts.timezone,
            timezone_name: parts.timezone_name,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Elapsed minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Kilocalories.
    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Miles.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Feet.
    pub fn elevation_gain(&self) -> Option<f64> {
        self.elevation_gain
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn timezone_name(&self) -> &str {
        &self.timezone_name
    }

    pub fn summary(&self) -> String {
        format!(
            "{}, {:.1} mins, {:.0} kcal",
            self.activity, self.duration, self.calories
        )
    }
}

pub(crate) fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

pub(crate) fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}
